//! InternHub portal: boots the credential authority from configuration and
//! resolves the navigation paths given on the command line.

use tracing_subscriber::{EnvFilter, fmt};

use internhub::{AppConfig, Navigation, Portal};

fn main() -> anyhow::Result<()> {
    let env = std::env::var("INTERNHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    init_logging(&config);
    tracing::info!(env = %env, "Starting InternHub portal v{}", env!("CARGO_PKG_VERSION"));

    let portal = Portal::from_config(&config)?;

    match portal.current_session() {
        Some(session) => tracing::info!(
            account_id = %session.id,
            role = %session.role,
            "Restored session for {}",
            session.display_name
        ),
        None => tracing::info!("No active session"),
    }

    match portal.recent_internship()? {
        Some(recent) => tracing::info!(
            title = %recent.title,
            company = %recent.company,
            posted_at = ?recent.posted_at(),
            "Recently posted internship"
        ),
        None => tracing::debug!("No recent internship"),
    }

    for path in std::env::args().skip(1) {
        match portal.navigate(&path) {
            Navigation::Allow => println!("{path}: allow"),
            Navigation::Redirect(target) => println!("{path}: redirect {}", target.path()),
            Navigation::NotFound => println!("{path}: not found"),
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
