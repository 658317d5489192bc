use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What a list read does when the store errors or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    /// Log the failure and hand back an empty collection.
    Open,
    /// Propagate the failure to the caller.
    Closed,
}

impl FromStr for ReadFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(ReadFailurePolicy::Open),
            "closed" => Ok(ReadFailurePolicy::Closed),
            other => Err(format!("unknown read failure policy '{}'", other)),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_password_hash: String, // Argon2 PHC string
    pub base_path: String,
    pub store_timeout: Duration,
    pub read_failure_policy: ReadFailurePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set (Argon2 hash)"),
            base_path: normalize_base_path(&env::var("BASE_PATH").unwrap_or_default()),
            store_timeout: Duration::from_secs(
                env::var("STORE_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()).parse().expect("STORE_TIMEOUT_SECS must be a number"),
            ),
            read_failure_policy: env::var("READ_FAILURE_POLICY")
                .unwrap_or_else(|_| "open".to_string())
                .parse()
                .expect("READ_FAILURE_POLICY must be 'open' or 'closed'"),
        }
    }

    /// Prefixes an absolute in-app path with the deployment base path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

/// `"wa/anne-asad/"` becomes `"/wa/anne-asad"`, blank stays blank.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
