use chrono::{DateTime, Utc};
use eve_esi::model::{
    alliance::Alliance, character::CharacterAffiliation, corporation::Corporation,
};

/// Create a mock alliance with default test values.
///
/// # Returns
/// - `Alliance` - An alliance object with test data
pub fn mock_alliance() -> Alliance {
    Alliance {
        creator_corporation_id: 98784257,
        creator_id: 2114794365,
        faction_id: None,
        date_founded: DateTime::parse_from_rfc3339("2010-11-04T13:11:00Z")
            .unwrap()
            .with_timezone(&Utc),
        executor_corporation_id: Some(98784257),
        name: "Brave Collective".to_string(),
        ticker: "BRAVE".to_string(),
    }
}

/// Create a mock corporation with default test values.
///
/// # Arguments
/// - `alliance_id` - Optional alliance ID the corporation belongs to
///
/// # Returns
/// - `Corporation` - A corporation object with test data
pub fn mock_corporation(alliance_id: Option<i64>) -> Corporation {
    Corporation {
        alliance_id,
        ceo_id: 2114794365,
        creator_id: 2114794365,
        date_founded: Some(
            DateTime::parse_from_rfc3339("2013-03-11T15:20:00Z")
                .unwrap()
                .with_timezone(&Utc),
        ),
        description: None,
        home_station_id: Some(60003760),
        member_count: 21,
        name: "Brave Newbies Inc.".to_string(),
        shares: Some(1000),
        tax_rate: 0.0,
        ticker: "BNI".to_string(),
        url: None,
        war_eligible: Some(true),
        faction_id: None,
    }
}

/// Create a character affiliation as returned by `/characters/affiliation`.
pub fn mock_affiliation(
    character_id: i64,
    corporation_id: i64,
    alliance_id: Option<i64>,
) -> CharacterAffiliation {
    CharacterAffiliation {
        character_id,
        corporation_id,
        alliance_id,
        faction_id: None,
    }
}
