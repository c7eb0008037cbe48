//! Default values for company-manager configuration.

use crate::model::Section;

/// GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000";

/// HTTP timeout for GraphQL requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Section selected when the shell starts.
pub const DEFAULT_SECTION: Section = Section::Roles;

/// Event poll interval of the terminal loop, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Themes accepted by `tui.theme`.
pub const VALID_THEMES: &[&str] = &["dark", "light", "high-contrast"];

/// User agent sent with every request.
#[must_use]
pub fn default_user_agent() -> String {
    concat!("company-manager/", env!("CARGO_PKG_VERSION")).to_string()
}
