use serde::Deserialize;

use yelda_core::config::Config;

use crate::domain::filename::FilenamePolicy;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `ACCOUNTS_PORT`.
    #[serde(default = "default_accounts_port")]
    pub accounts_port: u16,
    /// Keep CJK ideographs in sanitized filenames (default true). Env var: `FILENAME_ALLOW_CJK`.
    #[serde(default = "default_filename_allow_cjk")]
    pub filename_allow_cjk: bool,
}

fn default_accounts_port() -> u16 {
    3120
}

fn default_filename_allow_cjk() -> bool {
    true
}

impl Config for AccountsConfig {}

impl AccountsConfig {
    pub fn filename_policy(&self) -> FilenamePolicy {
        if self.filename_allow_cjk {
            FilenamePolicy::default()
        } else {
            FilenamePolicy::ascii_only()
        }
    }
}
