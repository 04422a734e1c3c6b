//! Server entry point. Configuration comes from the environment (and `.env`).

use wedding_rsvp::{telemetry, validate, AppConfig};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env().and_then(|c| validate(&c).map(|()| c)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = telemetry::try_init(config.log_format) {
        eprintln!("warning: {}", e);
    }

    tracing::info!(address = %config.server.address(), "starting wedding-rsvp");
    if let Err(e) = wedding_rsvp::run(config).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
