// SPDX-License-Identifier: MPL-2.0
//! Log output.
//!
//! Level resolution: `--log-level`, then `ICED_FOLIO_LOG`, then `info`.
//! Unknown level names fall through to the next source.

use std::str::FromStr;
use tracing::Level;

/// Environment variable holding the log level.
pub const ENV_LOG: &str = "ICED_FOLIO_LOG";

const DEFAULT_LEVEL: Level = Level::INFO;

/// Parses `error`, `warn`, `info`, `debug` or `trace` (any case).
#[must_use]
pub fn parse_level(raw: &str) -> Option<Level> {
    Level::from_str(raw.trim()).ok()
}

/// Picks the effective level from the CLI value and the environment value.
#[must_use]
pub fn resolve_level(cli: Option<&str>, env: Option<&str>) -> Level {
    cli.and_then(parse_level)
        .or_else(|| env.and_then(parse_level))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(cli_level: Option<&str>) {
    let env_level = std::env::var(ENV_LOG).ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    if tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}
