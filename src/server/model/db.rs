//! Database model type aliases.
//!
//! Short names for the `entity` crate models used throughout the server.

/// An account, see `entity::player`.
pub type PlayerModel = entity::player::Model;

/// A single EVE character owned by exactly one player, see `entity::character`.
///
/// Besides identity it carries the SSO token bundle (`access_token`, `refresh_token`,
/// `expires`), the scopes granted at the last login and the tri-state `valid_token`.
pub type CharacterModel = entity::character::Model;

/// Tombstone of a character that left an account.
pub type RemovedCharacterModel = entity::removed_character::Model;

pub type CorporationModel = entity::corporation::Model;

pub type AllianceModel = entity::alliance::Model;

pub type GroupModel = entity::group::Model;

pub type RoleModel = entity::role::Model;
