use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CharacterDto {
    pub id: i64,
    pub name: String,
    pub main: bool,
    /// `None` when the token state is unknown
    pub valid_token: Option<bool>,
    pub corporation_id: Option<i64>,
}

/// The logged in account with its characters and role names
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub roles: Vec<String>,
    pub characters: Vec<CharacterDto>,
}
