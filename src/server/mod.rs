//! Server application core modules.
//!
//! This module contains the backend of Neucore: HTTP routing and session based
//! authentication through EVE SSO, account and character persistence, the token
//! validity checker, automatic group assignment, ESI data updates and the batch
//! commands plus cron scheduler that drive them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod command;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
