//! Declarative test builder.
//!
//! The builder queues tables, seed rows and mock endpoints, all of which are created
//! during the final `build()` call.

use eve_esi::model::{
    alliance::Alliance, character::CharacterAffiliation, corporation::Corporation,
    oauth2::EveJwtClaims,
};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::auth::factory::mock_jwt_claims, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_account_tables: bool,

    roles: Vec<String>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    jwt_claims: Vec<EveJwtClaims>,
    jwks_endpoint: bool,
    refresh_endpoints: Vec<(EveJwtClaims, usize)>,
    invalid_grant_endpoints: Vec<usize>,
    token_error_endpoints: Vec<(usize, usize)>,
    alliance_endpoints: Vec<(i64, Alliance, usize)>,
    corporation_endpoints: Vec<(i64, Corporation, usize)>,
    character_affiliation_endpoints: Vec<(Vec<CharacterAffiliation>, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_account_tables: false,
            roles: Vec::new(),
            mock_builders: Vec::new(),
            jwt_claims: Vec::new(),
            jwks_endpoint: false,
            refresh_endpoints: Vec::new(),
            invalid_grant_endpoints: Vec::new(),
            token_error_endpoints: Vec::new(),
            alliance_endpoints: Vec::new(),
            corporation_endpoints: Vec::new(),
            character_affiliation_endpoints: Vec::new(),
        }
    }

    /// Add every table of the account schema to the test database.
    ///
    /// Tables are created parents first since SQLite enforces foreign keys.
    pub fn with_account_tables(mut self) -> Self {
        self.include_account_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use neucore_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), neucore_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Alliance)
    ///     .with_table(Corporation)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a role during `build()`, requires the role table.
    pub fn with_role(mut self, name: impl Into<String>) -> Self {
        self.roles.push(name.into());
        self
    }

    /// Insert the `user` role granted on every login.
    pub fn with_user_role(self) -> Self {
        self.with_role("user")
    }

    /// Add JWKS and authorization code exchange endpoints for an SSO callback.
    ///
    /// # Arguments
    /// - `character_id` - Character ID to include in JWT claims
    /// - `owner_hash` - Owner hash to include in JWT claims
    pub fn with_jwt_endpoints(self, character_id: i64, owner_hash: impl Into<String>) -> Self {
        let claims = mock_jwt_claims(character_id, &owner_hash.into());
        self.with_jwt_claims(claims)
    }

    /// Add JWKS and authorization code exchange endpoints returning a token for `claims`.
    pub fn with_jwt_claims(mut self, claims: EveJwtClaims) -> Self {
        self.jwt_claims.push(claims);
        self.jwks_endpoint = true;
        self
    }

    /// Add the JWKS endpoint, required by tests that validate a refreshed access token.
    pub fn with_jwks_endpoint(mut self) -> Self {
        self.jwks_endpoint = true;
        self
    }

    /// Add a refresh grant endpoint returning a token for `claims`.
    ///
    /// The refresh alone does not fetch the JWKS, combine with [`Self::with_jwks_endpoint`]
    /// when the refreshed token is validated.
    pub fn with_refresh_endpoint(mut self, claims: EveJwtClaims, expected_requests: usize) -> Self {
        self.refresh_endpoints.push((claims, expected_requests));
        self
    }

    /// Add a refresh grant endpoint answering `invalid_grant`.
    pub fn with_invalid_grant_endpoint(mut self, expected_requests: usize) -> Self {
        self.invalid_grant_endpoints.push(expected_requests);
        self
    }

    /// Add a refresh grant endpoint failing with `status_code`.
    pub fn with_token_error_endpoint(
        mut self,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.token_error_endpoints
            .push((status_code, expected_requests));
        self
    }

    /// Add mock alliance endpoint to the test server.
    pub fn with_alliance_endpoint(
        mut self,
        alliance_id: i64,
        alliance: Alliance,
        expected_requests: usize,
    ) -> Self {
        self.alliance_endpoints
            .push((alliance_id, alliance, expected_requests));
        self
    }

    /// Add mock corporation endpoint to the test server.
    pub fn with_corporation_endpoint(
        mut self,
        corporation_id: i64,
        corporation: Corporation,
        expected_requests: usize,
    ) -> Self {
        self.corporation_endpoints
            .push((corporation_id, corporation, expected_requests));
        self
    }

    /// Add mock character affiliation endpoint to the test server.
    pub fn with_character_affiliation_endpoint(
        mut self,
        affiliations: Vec<CharacterAffiliation>,
        expected_requests: usize,
    ) -> Self {
        self.character_affiliation_endpoints
            .push((affiliations, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in order: tables, seed rows, then mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::EsiError)` - Mock ESI client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_account_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Alliance),
                schema.create_table_from_entity(entity::prelude::Corporation),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::RemovedCharacter),
                schema.create_table_from_entity(entity::prelude::Role),
                schema.create_table_from_entity(entity::prelude::PlayerRole),
                schema.create_table_from_entity(entity::prelude::Group),
                schema.create_table_from_entity(entity::prelude::GroupRequiredGroup),
                schema.create_table_from_entity(entity::prelude::GroupForbiddenGroup),
                schema.create_table_from_entity(entity::prelude::PlayerGroup),
                schema.create_table_from_entity(entity::prelude::GroupApplication),
                schema.create_table_from_entity(entity::prelude::CorporationGroup),
                schema.create_table_from_entity(entity::prelude::AllianceGroup),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for role in self.roles {
            setup.account().insert_role(&role).await?;
        }

        // Custom endpoints are created first so tests can queue several mocks for one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        if self.jwks_endpoint {
            mocks.push(setup.auth().create_jwks_endpoint());
        }

        for claims in self.jwt_claims {
            mocks.push(setup.auth().create_code_exchange_endpoint(&claims));
        }

        for (claims, expected) in self.refresh_endpoints {
            mocks.push(setup.auth().create_refresh_endpoint(&claims, expected));
        }

        for expected in self.invalid_grant_endpoints {
            mocks.push(setup.auth().create_invalid_grant_endpoint(expected));
        }

        for (status_code, expected) in self.token_error_endpoints {
            mocks.push(setup.auth().create_token_error_endpoint(status_code, expected));
        }

        for (alliance_id, alliance, expected) in self.alliance_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_alliance_endpoint(alliance_id, alliance, expected),
            );
        }

        for (corporation_id, corporation, expected) in self.corporation_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_corporation_endpoint(corporation_id, corporation, expected),
            );
        }

        for (affiliations, expected) in self.character_affiliation_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_character_affiliation_endpoint(affiliations, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
