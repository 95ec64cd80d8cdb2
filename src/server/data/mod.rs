//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same operation runs on
//! the pooled connection or inside a transaction opened by a service.

pub mod account;
pub mod eve;
pub mod group;
