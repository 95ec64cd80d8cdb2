//! Tests for the EVE SSO login, callback, result and logout endpoints.

mod callback;
mod login;
mod logout;
mod result;

use super::*;
