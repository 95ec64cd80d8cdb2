//! Repositories for accounts, characters, their tombstones and roles.

pub mod character;
pub mod player;
pub mod removed_character;
pub mod role;
