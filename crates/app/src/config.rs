use std::path::PathBuf;

/// Panel configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables (a `.env` file is honored at the binary edge).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Organizer login e-mail the credential check accepts.
    pub admin_email: String,
    /// Organizer login password the credential check accepts.
    pub admin_password: String,
    /// Where to persist the catalog snapshot. Unset keeps state in memory
    /// only for the lifetime of the session.
    pub snapshot_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default               |
    /// |------------------|-----------------------|
    /// | `ADMIN_EMAIL`    | `admin@fade.org.br`   |
    /// | `ADMIN_PASSWORD` | `123456`              |
    /// | `SNAPSHOT_PATH`  | unset (memory only)   |
    pub fn from_env() -> Self {
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@fade.org.br".into());
        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123456".into());
        let snapshot_path = std::env::var("SNAPSHOT_PATH").ok().map(PathBuf::from);

        Self {
            admin_email,
            admin_password,
            snapshot_path,
        }
    }
}

impl Default for AppConfig {
    /// The development defaults, without consulting the environment.
    fn default() -> Self {
        Self {
            admin_email: "admin@fade.org.br".to_string(),
            admin_password: "123456".to_string(),
            snapshot_path: None,
        }
    }
}
