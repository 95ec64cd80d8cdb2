//! Repositories for the corporation and alliance caches filled from ESI.

pub mod alliance;
pub mod corporation;

#[cfg(test)]
mod tests;
