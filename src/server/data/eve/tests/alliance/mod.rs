mod get_or_create;
mod upsert;

use neucore_test_utils::prelude::*;

use crate::server::data::eve::alliance::AllianceRepository;
