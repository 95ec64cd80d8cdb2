use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Role {0:?} not found, the role table may not be seeded")]
    RoleNotFound(String),
    #[error("Player ID {0:?} not found in database")]
    PlayerNotFound(i32),
    #[error("Character ID {0:?} not found in database")]
    CharacterNotFound(i64),
}
