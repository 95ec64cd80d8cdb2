//! ESI HTTP mock endpoint creation utilities.

use eve_esi::model::{
    alliance::Alliance, character::CharacterAffiliation, corporation::Corporation,
};
use mockito::Mock;

use crate::fixtures::eve::EveFixtures;

impl<'a> EveFixtures<'a> {
    /// Create a mock HTTP endpoint for alliance data.
    ///
    /// # Arguments
    /// - `alliance_id` - The alliance ID for the endpoint path
    /// - `mock_alliance` - Alliance object to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_alliance_endpoint(
        &mut self,
        alliance_id: i64,
        mock_alliance: Alliance,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/alliances/{}", alliance_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_alliance).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for corporation data.
    ///
    /// # Arguments
    /// - `corporation_id` - The corporation ID for the endpoint path
    /// - `mock_corporation` - Corporation object to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_corporation_endpoint(
        &mut self,
        corporation_id: i64,
        mock_corporation: Corporation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_corporation).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for corporation data returning an error status code.
    pub fn create_corporation_endpoint_error(
        &mut self,
        corporation_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for character affiliation data.
    ///
    /// # Arguments
    /// - `mock_affiliations` - Affiliations to return for every request
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_character_affiliation_endpoint(
        &mut self,
        mock_affiliations: Vec<CharacterAffiliation>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/characters/affiliation")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_affiliations).unwrap())
            .expect(expected_requests)
            .create()
    }
}
