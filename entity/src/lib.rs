//! sea-orm entities for the Neucore schema.
//!
//! One module per table. Join tables (`player_group`, `player_role`, `corporation_group`,
//! `alliance_group`, `group_required_group`, `group_forbidden_group`) use composite primary
//! keys and carry no data of their own.

pub mod prelude;

pub mod alliance;
pub mod alliance_group;
pub mod character;
pub mod corporation;
pub mod corporation_group;
pub mod group;
pub mod group_application;
pub mod group_forbidden_group;
pub mod group_required_group;
pub mod player;
pub mod player_group;
pub mod player_role;
pub mod removed_character;
pub mod role;
