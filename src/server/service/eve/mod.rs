use eve_esi::model::character::CharacterAffiliation;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        account::character::CharacterRepository,
        eve::{alliance::AllianceRepository, corporation::CorporationRepository},
    },
    error::Error,
    model::db::{AllianceModel, CharacterModel, CorporationModel},
    util::eve::{sanitize_character_ids, ESI_AFFILIATION_REQUEST_LIMIT},
};

/// Fetches character, corporation and alliance data from ESI and stores it.
pub struct EsiDataService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> EsiDataService<'a> {
    /// Creates a new instance of [`EsiDataService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Fetch the corporation and alliance of characters from ESI.
    ///
    /// Invalid character IDs are dropped before the request, the remaining IDs are sent in
    /// chunks of [`ESI_AFFILIATION_REQUEST_LIMIT`].
    ///
    /// # Returns
    /// Affiliations of all chunks that succeeded. A failed chunk is logged and skipped, its
    /// characters are missing from the result.
    pub async fn fetch_characters_affiliation(
        &self,
        character_ids: Vec<i64>,
    ) -> Vec<CharacterAffiliation> {
        let character_ids = sanitize_character_ids(character_ids);

        let mut affiliations = Vec::with_capacity(character_ids.len());
        for chunk in character_ids.chunks(ESI_AFFILIATION_REQUEST_LIMIT) {
            match self
                .esi_client
                .character()
                .character_affiliation(chunk.to_vec())
                .await
            {
                Ok(result) => affiliations.extend(result),
                Err(err) => {
                    tracing::error!(
                        character_count = chunk.len(),
                        "Failed to fetch character affiliations: {}",
                        err
                    );
                }
            }
        }

        affiliations
    }

    /// Update the corporation of characters from their current affiliation.
    ///
    /// Corporations not yet known are created as placeholders, their name is fetched by the
    /// next corporation update.
    ///
    /// # Returns
    /// IDs of the characters that were updated, characters without an affiliation in the
    /// ESI response are left unchanged.
    pub async fn update_character_affiliations(
        &self,
        character_ids: Vec<i64>,
    ) -> Result<Vec<i64>, Error> {
        let affiliations = self.fetch_characters_affiliation(character_ids).await;

        let corporation_repo = CorporationRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        let mut updated = Vec::with_capacity(affiliations.len());
        for affiliation in affiliations {
            corporation_repo
                .get_or_create(affiliation.corporation_id)
                .await?;
            character_repo
                .set_corporation(affiliation.character_id, Some(affiliation.corporation_id))
                .await?;

            updated.push(affiliation.character_id);
        }

        Ok(updated)
    }

    /// Fetch a corporation from ESI and store its name, ticker and alliance.
    ///
    /// The alliance is only linked, a placeholder is created if it is unknown.
    pub async fn fetch_corporation(&self, corporation_id: i64) -> Result<CorporationModel, Error> {
        let corporation = self
            .esi_client
            .corporation()
            .get_corporation_information(corporation_id)
            .await?;

        if let Some(alliance_id) = corporation.alliance_id {
            AllianceRepository::new(self.db)
                .get_or_create(alliance_id)
                .await?;
        }

        let model = CorporationRepository::new(self.db)
            .upsert(corporation_id, &corporation)
            .await?;

        Ok(model)
    }

    /// Fetch an alliance from ESI and store its name and ticker.
    pub async fn fetch_alliance(&self, alliance_id: i64) -> Result<AllianceModel, Error> {
        let alliance = self
            .esi_client
            .alliance()
            .get_alliance_information(alliance_id)
            .await?;

        let model = AllianceRepository::new(self.db)
            .upsert(alliance_id, &alliance)
            .await?;

        Ok(model)
    }

    /// Update a known character's corporation and fetch that corporation and its alliance.
    ///
    /// # Returns
    /// - `Ok(Some(character))` - The updated character
    /// - `Ok(None)` - The character is unknown or ESI returned no affiliation for it
    /// - `Err(Error)` - ESI failed to return the corporation or alliance, or a database error
    pub async fn fetch_character_with_corporation_and_alliance(
        &self,
        character_id: i64,
    ) -> Result<Option<CharacterModel>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        if character_repo.get(character_id).await?.is_none() {
            return Ok(None);
        }

        let Some(affiliation) = self
            .fetch_characters_affiliation(vec![character_id])
            .await
            .into_iter()
            .find(|affiliation| affiliation.character_id == character_id)
        else {
            return Ok(None);
        };

        CorporationRepository::new(self.db)
            .get_or_create(affiliation.corporation_id)
            .await?;
        character_repo
            .set_corporation(character_id, Some(affiliation.corporation_id))
            .await?;

        let corporation = self.fetch_corporation(affiliation.corporation_id).await?;
        if let Some(alliance_id) = corporation.alliance_id {
            self.fetch_alliance(alliance_id).await?;
        }

        Ok(character_repo.get(character_id).await?)
    }
}

#[cfg(test)]
mod tests;
