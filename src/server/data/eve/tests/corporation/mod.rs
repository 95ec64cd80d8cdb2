mod get_or_create;
mod get_ids_by_last_update;
mod upsert;

use neucore_test_utils::prelude::*;

use crate::server::data::eve::corporation::CorporationRepository;
