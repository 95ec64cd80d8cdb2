pub use super::alliance::Entity as Alliance;
pub use super::alliance_group::Entity as AllianceGroup;
pub use super::character::Entity as Character;
pub use super::corporation::Entity as Corporation;
pub use super::corporation_group::Entity as CorporationGroup;
pub use super::group::Entity as Group;
pub use super::group_application::Entity as GroupApplication;
pub use super::group_forbidden_group::Entity as GroupForbiddenGroup;
pub use super::group_required_group::Entity as GroupRequiredGroup;
pub use super::player::Entity as Player;
pub use super::player_group::Entity as PlayerGroup;
pub use super::player_role::Entity as PlayerRole;
pub use super::removed_character::Entity as RemovedCharacter;
pub use super::role::Entity as Role;
