//! Helpers shared by the integration tests.

use neucore::server::{model::app::AppState, service::auth::token::TokenRefresher};
use neucore_test_utils::{constant::*, TestContext};

/// Extension trait building the application state around a [`TestContext`]
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        let token_refresher =
            TokenRefresher::new(TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, &self.token_url())
                .unwrap();

        self.to_app_state(token_refresher)
    }
}
