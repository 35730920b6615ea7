// SPDX-License-Identifier: MPL-2.0
//! Logging setup for hosts embedding the panel layer.
//!
//! The crate only emits [`tracing`] events; installing a subscriber is the
//! host's call. [`init`] installs a formatting subscriber filtered by:
//!
//! 1. **`PANEL_LENS_LOG`**: a bare level (`debug`) applies to this crate
//!    only; anything containing `=`, `:` or `,` is used as a full filter
//! 2. **`RUST_LOG`**: standard tracing filter
//! 3. **Default**: `warn` globally, `info` for this crate
//!
//! ```bash
//! PANEL_LENS_LOG=debug my-host-app
//! PANEL_LENS_LOG=panel_lens::ui::preview=trace my-host-app
//! ```

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Crate-specific filter variable.
pub const LOG_ENV_VAR: &str = "PANEL_LENS_LOG";

const DEFAULT_FILTER: &str = "warn,panel_lens=info";

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = create_filter()?;
    fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

/// Like [`init`], ignoring an already installed subscriber. Safe in tests.
pub fn try_init() -> bool {
    init().is_ok()
}

fn create_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    if let Ok(value) = env::var(LOG_ENV_VAR) {
        return EnvFilter::try_new(expand(&value));
    }
    if let Ok(value) = env::var("RUST_LOG") {
        return EnvFilter::try_new(value);
    }
    EnvFilter::try_new(DEFAULT_FILTER)
}

/// Turns a bare level into a crate-scoped filter.
fn expand(value: &str) -> String {
    if value.contains(['=', ':', ',']) {
        value.to_string()
    } else {
        format!("warn,panel_lens={value}")
    }
}
