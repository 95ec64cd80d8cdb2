use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use neucore::server::{
    command::{
        assure_main::assure_main,
        check_tokens::{self, check_tokens},
        update_chars::{self, update_chars},
        update_corporations::{self, update_corporations},
        update_player_groups::{self, update_player_groups},
    },
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    scheduler::Scheduler,
    startup,
};

/// Account, token and group management for EVE Online alliances and corporations
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log filter directive, e.g. `info` or `neucore=debug,sea_orm=warn`
    #[arg(long, env = "NEUCORE_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Log output format: `text` or `json`
    #[arg(long, env = "NEUCORE_LOG_FORMAT", default_value = "text", global = true)]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server along with the scheduled jobs
    Serve,
    /// Check refresh tokens, characters that were biomassed or changed owner are deleted
    CheckTokens {
        /// Check only one character
        character: Option<i64>,
        /// Time to sleep in milliseconds after each check
        #[arg(short, long, default_value_t = check_tokens::DEFAULT_SLEEP_MS)]
        sleep: u64,
    },
    /// Assign and remove automatic groups of all standard accounts
    UpdatePlayerGroups {
        /// Update only one account
        player: Option<i32>,
        /// Time to sleep in milliseconds after each account
        #[arg(short, long, default_value_t = update_player_groups::DEFAULT_SLEEP_MS)]
        sleep: u64,
    },
    /// Update the corporation of all characters from ESI
    UpdateChars {
        /// Update only one character
        character: Option<i64>,
        /// Time to sleep in milliseconds after each ESI request
        #[arg(short, long, default_value_t = update_chars::DEFAULT_SLEEP_MS)]
        sleep: u64,
    },
    /// Update all corporations and alliances from ESI
    UpdateCorporations {
        /// Update only one corporation, no alliances
        corporation: Option<i64>,
        /// Time to sleep in milliseconds after each update
        #[arg(short, long, default_value_t = update_corporations::DEFAULT_SLEEP_MS)]
        sleep: u64,
    },
    /// Make sure every account with characters has a main character
    AssureMain,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, &cli.log_format);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str, log_format: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format {
        "json" => fmt().with_env_filter(filter).json().init(),
        _ => fmt().with_env_filter(filter).init(),
    }
}

async fn run(command: Command, config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let esi_client = startup::build_esi_client(&config)?;
    let token_refresher = startup::build_token_refresher(&config)?;

    match command {
        Command::Serve => {
            let session = startup::connect_to_session(&config).await?;
            let state = AppState::from((db, esi_client, token_refresher))
                .with_login_scopes(config.esi_scopes.clone());

            Scheduler::new(state.clone()).await?.start().await?;

            let app = router::routes().with_state(state).layer(session);
            let listener = TcpListener::bind(config.bind_address).await?;

            tracing::info!("Starting server on {}", config.bind_address);

            axum::serve(listener, app).await?;
        }
        Command::CheckTokens { character, sleep } => {
            let summary =
                check_tokens(&db, &esi_client, &token_refresher, character, sleep).await?;
            tracing::debug!(?summary, "check-tokens done");
        }
        Command::UpdatePlayerGroups { player, sleep } => {
            let summary = update_player_groups(&db, player, sleep).await?;
            tracing::debug!(?summary, "update-player-groups done");
        }
        Command::UpdateChars { character, sleep } => {
            let summary = update_chars(&db, &esi_client, character, sleep).await?;
            tracing::debug!(?summary, "update-chars done");
        }
        Command::UpdateCorporations { corporation, sleep } => {
            let summary = update_corporations(&db, &esi_client, corporation, sleep).await?;
            tracing::debug!(?summary, "update-corporations done");
        }
        Command::AssureMain => {
            let summary = assure_main(&db).await?;
            tracing::debug!(?summary, "assure-main done");
        }
    }

    Ok(())
}
