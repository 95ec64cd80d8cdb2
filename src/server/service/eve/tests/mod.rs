mod fetch_character_with_corporation_and_alliance;
mod update_character_affiliations;

use neucore_test_utils::prelude::*;

use crate::server::{
    data::{
        account::character::CharacterRepository,
        eve::{alliance::AllianceRepository, corporation::CorporationRepository},
    },
    service::eve::EsiDataService,
};
