//! EVE Online constants and character ID validation.

/// Corporation that deleted characters are moved to in game (Doomheim).
pub const BIOMASS_CORPORATION_ID: i64 = 1000001;

/// Maximum number of IDs accepted by ESI's `/characters/affiliation/` endpoint per request.
pub const ESI_AFFILIATION_REQUEST_LIMIT: usize = 1000;

/// Number of rows loaded per page by the batch commands.
pub const BATCH_PAGE_SIZE: u64 = 1000;

/// Removes IDs outside the character ID ranges documented by CCP.
///
/// A single invalid ID makes ESI reject the whole affiliation request, so IDs are filtered
/// before they are sent. Order of the remaining IDs is preserved.
///
/// # Valid Character ID Ranges
/// - `90,000,000 - 97,999,999`: created between 2010-11-03 and 2016-05-30
/// - `100,000,000 - 2,099,999,999`: created before 2010-11-03
/// - `2,100,000,000 - 2,111,999,999`: EVE / DUST characters created after 2016-05-30
/// - `2,112,000,000 - 2,129,999,999`: created after 2016-05-30
pub fn sanitize_character_ids(character_ids: Vec<i64>) -> Vec<i64> {
    character_ids
        .into_iter()
        .filter(|&id| is_valid_character_id(id))
        .collect()
}

pub fn is_valid_character_id(id: i64) -> bool {
    matches!(
        id,
        90_000_000..=97_999_999
            | 100_000_000..=2_099_999_999
            | 2_100_000_000..=2_111_999_999
            | 2_112_000_000..=2_129_999_999
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_range_bounds() {
        let input = vec![
            90_000_000,
            97_999_999,
            100_000_000,
            2_099_999_999,
            2_100_000_000,
            2_111_999_999,
            2_112_000_000,
            2_129_999_999,
        ];

        assert_eq!(sanitize_character_ids(input.clone()), input);
    }

    #[test]
    fn drops_ids_outside_ranges() {
        let input = vec![
            1,
            89_999_999,
            98_000_000,
            99_999_999,
            2_130_000_000,
            3_000_000_000,
        ];

        assert!(sanitize_character_ids(input).is_empty());
    }

    #[test]
    fn biomass_corporation_is_not_a_character() {
        assert!(!is_valid_character_id(BIOMASS_CORPORATION_ID));
    }

    #[test]
    fn preserves_order_of_mixed_input() {
        let input = vec![2_120_000_000, 99_000_000, 95_000_000, 150_000_000];

        assert_eq!(
            sanitize_character_ids(input),
            vec![2_120_000_000, 95_000_000, 150_000_000]
        );
    }
}
