//! Settings loading from environment.

use std::env;

use square_types::SquareSettings;

fn var(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

/// Loads processor settings from `SQUARE_*` environment variables.
///
/// Missing credential variables stay empty, matching a freshly installed
/// configuration; the remote API rejects them as an authentication failure.
pub fn settings_from_env() -> anyhow::Result<SquareSettings> {
    let use_sandbox = match env::var("SQUARE_USE_SANDBOX") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("SQUARE_USE_SANDBOX must be true or false, got {raw:?}"))?,
        Err(_) => true,
    };

    Ok(SquareSettings {
        use_sandbox,
        sandbox_access_token: var("SQUARE_SANDBOX_ACCESS_TOKEN"),
        sandbox_application_key: var("SQUARE_SANDBOX_APPLICATION_KEY"),
        sandbox_location_id: var("SQUARE_SANDBOX_LOCATION_ID"),
        access_token: var("SQUARE_ACCESS_TOKEN"),
        application_key: var("SQUARE_APPLICATION_KEY"),
        location_id: var("SQUARE_LOCATION_ID"),
    })
}
