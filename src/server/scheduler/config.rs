//! Cron expressions of the scheduled batch jobs, `sec min hour day month weekday`.

pub mod check_tokens {
    /// Daily at 03:10
    pub const CRON_EXPRESSION: &str = "0 10 3 * * *";
}

pub mod update_player_groups {
    /// Hourly at minute 20, after the character update
    pub const CRON_EXPRESSION: &str = "0 20 * * * *";
}

pub mod update_chars {
    /// Hourly at minute 5
    pub const CRON_EXPRESSION: &str = "0 5 * * * *";
}

pub mod update_corporations {
    /// Daily at 04:10
    pub const CRON_EXPRESSION: &str = "0 10 4 * * *";
}
