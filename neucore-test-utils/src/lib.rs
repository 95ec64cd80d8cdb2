//! Shared test harness for the neucore workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares tables, fixtures and
//! mock endpoints, and the resulting [`TestContext`] is used during execution to access
//! the database, the mock ESI client and the session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{auth::factory as auth_factory, eve::factory},
        test_setup_with_account_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}

/// Create a [`TestContext`] with the provided entity tables.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Role)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Create a [`TestContext`] with every account table plus any additional entity tables.
#[macro_export]
macro_rules! test_setup_with_account_tables {
    () => {{
        $crate::TestBuilder::new().with_account_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_account_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
