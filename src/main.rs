//! Gudang - Warehouse & Inventory Backend
//!
//! Startup sequence: config → logging → store → schema → gateway.
//! All collaborators are constructed here and injected explicitly; nothing
//! is reachable through global state.

use std::sync::Arc;

use gudang::auth::service::AuthService;
use gudang::auth::token::TokenIssuer;
use gudang::auth::verifier::{AuthMode, CredentialVerifier};
use gudang::db::Database;
use gudang::gateway::state::AppState;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn seed_requested() -> bool {
    std::env::args().any(|a| a == "--seed")
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = gudang::config::AppConfig::load(&env);
    let _log_guard = gudang::logging::init_logging(&config);

    tracing::info!("Starting gudang in {} mode", env);

    let issuer = TokenIssuer::from_secret(&config.auth.jwt_secret)?;
    let mode = AuthMode::parse(&config.auth.mode);
    if mode == AuthMode::Unknown {
        // Boot anyway: the auth core answers every request with 500 so the
        // misconfiguration is visible, instead of silently picking a mode.
        tracing::error!("Unrecognized auth mode '{}'", config.auth.mode);
    }

    let db = Arc::new(
        Database::connect(&config.database.url, config.database.max_connections).await?,
    );

    gudang::seeder::ensure_schema(db.pool()).await?;
    if seed_requested() {
        gudang::seeder::seed(db.pool()).await?;
    }

    let verifier = CredentialVerifier::new(mode, issuer.clone(), db.clone());
    let auth_service = Arc::new(AuthService::new(db.clone(), issuer));
    let state = Arc::new(AppState::new(db, verifier, auth_service));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gudang::gateway::run_server(&config.gateway.host, port, state).await
}
