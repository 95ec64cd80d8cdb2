mod create_new_player_with_main;

use entity::removed_character::RemovedCharacterReason;
use neucore_test_utils::prelude::*;

use crate::server::{
    data::account::{
        character::CharacterRepository, player::PlayerRepository,
        removed_character::RemovedCharacterRepository,
    },
    service::account::AccountService,
};
