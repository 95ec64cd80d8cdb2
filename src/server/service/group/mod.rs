//! Automatic group membership derived from corporation and alliance affiliations.

use std::collections::{HashMap, HashSet};

use entity::player::PlayerStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        account::{character::CharacterRepository, player::PlayerRepository},
        eve::{alliance::AllianceRepository, corporation::CorporationRepository},
        group::GroupRepository,
    },
    error::Error,
    model::db::PlayerModel,
};

/// Groups assigned to corporation and alliance members.
#[derive(Debug, Default)]
struct GroupMappings {
    corporation: HashMap<i64, Vec<i32>>,
    alliance: HashMap<i64, Vec<i32>>,
    /// Every group that appears in either mapping
    auto_groups: HashSet<i32>,
}

impl GroupMappings {
    fn add(
        map: &mut HashMap<i64, Vec<i32>>,
        auto_groups: &mut HashSet<i32>,
        rows: Vec<(i64, i32)>,
    ) {
        for (entity_id, group_id) in rows {
            let groups = map.entry(entity_id).or_default();
            if !groups.contains(&group_id) {
                groups.push(group_id);
            }
            auto_groups.insert(group_id);
        }
    }
}

/// Recomputes automatic group memberships of accounts.
///
/// The mappings are loaded on first use and kept for the lifetime of the instance, create
/// one instance per batch run.
#[derive(Debug, Default)]
pub struct AutoGroupAssignment {
    mappings: Option<GroupMappings>,
}

impl AutoGroupAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add and remove automatic groups of an account based on its characters' affiliations.
    ///
    /// # Behavior
    /// - Managed accounts are skipped entirely
    /// - Only groups that appear in a corporation or alliance mapping are touched, manually
    ///   assigned groups are kept
    /// - Removing a group also deletes the account's applications for it
    /// - The account's last update is set afterwards
    pub async fn assign<C: ConnectionTrait>(
        &mut self,
        db: &C,
        player: &PlayerModel,
    ) -> Result<(), Error> {
        if player.status == PlayerStatus::Managed {
            return Ok(());
        }

        let mappings = self.load_mappings(db).await?;

        let corporation_ids: Vec<i64> = CharacterRepository::new(db)
            .get_many_by_player(player.id)
            .await?
            .iter()
            .filter_map(|character| character.corporation_id)
            .collect();
        let corporations = CorporationRepository::new(db)
            .get_many(&corporation_ids)
            .await?;

        let mut expected: HashSet<i32> = HashSet::new();
        for corporation in &corporations {
            if let Some(group_ids) = mappings.corporation.get(&corporation.id) {
                expected.extend(group_ids);
            }
            if let Some(group_ids) = corporation
                .alliance_id
                .and_then(|alliance_id| mappings.alliance.get(&alliance_id))
            {
                expected.extend(group_ids);
            }
        }

        let group_repo = GroupRepository::new(db);
        let held: HashSet<i32> = group_repo
            .get_player_group_ids(player.id)
            .await?
            .into_iter()
            .filter(|group_id| mappings.auto_groups.contains(group_id))
            .collect();

        let mut remove: Vec<i32> = held.difference(&expected).copied().collect();
        let mut add: Vec<i32> = expected.difference(&held).copied().collect();
        remove.sort_unstable();
        add.sort_unstable();

        for group_id in remove {
            group_repo.remove_player_group(player.id, group_id).await?;
            group_repo.delete_applications(player.id, group_id).await?;
        }

        // Required and forbidden groups are only evaluated by check_required_groups once
        // every group was added
        for group_id in add {
            group_repo.add_player_group(player.id, group_id).await?;
        }

        PlayerRepository::new(db).set_last_update(player.id).await?;

        Ok(())
    }

    /// Remove groups the account may not hold until no more groups are removed.
    ///
    /// A group is kept if the account holds at least one of its required groups, when any
    /// are declared, and none of its forbidden groups. Groups with forbidden groups are
    /// checked last so the removal of a forbidden group in the same pass is seen.
    pub async fn check_required_groups<C: ConnectionTrait>(
        &self,
        db: &C,
        player_id: i32,
    ) -> Result<(), Error> {
        let group_repo = GroupRepository::new(db);

        loop {
            let mut held: HashSet<i32> = group_repo
                .get_player_group_ids(player_id)
                .await?
                .into_iter()
                .collect();
            let last_count = held.len();

            let group_ids: Vec<i32> = held.iter().copied().collect();
            let required = group_map(group_repo.get_required_groups(&group_ids).await?);
            let forbidden = group_map(group_repo.get_forbidden_groups(&group_ids).await?);

            for group_id in ordered_by_conditions(&group_ids, &required, &forbidden) {
                let required_ok = required
                    .get(&group_id)
                    .is_none_or(|ids| ids.iter().any(|id| held.contains(id)));
                let forbidden_ok = forbidden
                    .get(&group_id)
                    .is_none_or(|ids| !ids.iter().any(|id| held.contains(id)));

                if !(required_ok && forbidden_ok) {
                    group_repo.remove_player_group(player_id, group_id).await?;
                    group_repo.delete_applications(player_id, group_id).await?;
                    held.remove(&group_id);
                }
            }

            if held.len() == last_count {
                return Ok(());
            }
        }
    }

    /// Run [`Self::assign`] and [`Self::check_required_groups`] for an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Groups were updated
    /// - `Ok(false)` - The account does not exist
    pub async fn update_groups<C: ConnectionTrait>(
        &mut self,
        db: &C,
        player_id: i32,
    ) -> Result<bool, Error> {
        let Some(player) = PlayerRepository::new(db).get(player_id).await? else {
            return Ok(false);
        };

        self.assign(db, &player).await?;
        self.check_required_groups(db, player_id).await?;

        Ok(true)
    }

    /// Run [`Self::update_groups`] in a transaction of its own.
    ///
    /// Every change to the account is committed together, a failure part way through
    /// leaves its groups as they were.
    pub async fn update_groups_in_transaction(
        &mut self,
        db: &DatabaseConnection,
        player_id: i32,
    ) -> Result<bool, Error> {
        let txn = db.begin().await?;
        let updated = self.update_groups(&txn, player_id).await?;
        txn.commit().await?;

        Ok(updated)
    }

    async fn load_mappings<C: ConnectionTrait>(&mut self, db: &C) -> Result<&GroupMappings, Error> {
        if self.mappings.is_none() {
            let mut mappings = GroupMappings::default();
            GroupMappings::add(
                &mut mappings.corporation,
                &mut mappings.auto_groups,
                CorporationRepository::new(db).get_group_mappings().await?,
            );
            GroupMappings::add(
                &mut mappings.alliance,
                &mut mappings.auto_groups,
                AllianceRepository::new(db).get_group_mappings().await?,
            );

            self.mappings = Some(mappings);
        }

        self.mappings
            .as_ref()
            .ok_or_else(|| Error::InternalError("Group mappings not loaded".to_string()))
    }
}

fn group_map(pairs: Vec<(i32, i32)>) -> HashMap<i32, Vec<i32>> {
    let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
    for (group_id, other_id) in pairs {
        map.entry(group_id).or_default().push(other_id);
    }

    map
}

/// Order: no conditions, required only, required and forbidden, forbidden only.
fn ordered_by_conditions(
    group_ids: &[i32],
    required: &HashMap<i32, Vec<i32>>,
    forbidden: &HashMap<i32, Vec<i32>>,
) -> Vec<i32> {
    let mut ordered = group_ids.to_vec();
    ordered.sort_by_key(|group_id| {
        let rank = match (
            required.contains_key(group_id),
            forbidden.contains_key(group_id),
        ) {
            (false, false) => 0,
            (true, false) => 1,
            (true, true) => 2,
            (false, true) => 3,
        };
        (rank, *group_id)
    });

    ordered
}

#[cfg(test)]
mod tests;
