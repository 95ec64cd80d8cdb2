mod assign;

use entity::player::PlayerStatus;
use neucore_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    data::{
        account::{character::CharacterRepository, player::PlayerRepository},
        group::GroupRepository,
    },
    service::group::AutoGroupAssignment,
};
