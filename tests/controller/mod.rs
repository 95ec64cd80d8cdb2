//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the state and session of a [`TestContext`] so the
//! session contents can be inspected afterwards.

mod auth;
mod user;

use neucore_test_utils::prelude::*;

use crate::util::TestContextExt;
