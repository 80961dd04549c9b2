//! Runtime configuration.
//!
//! Each setting resolves from the secret store first (a file under the
//! secrets directory) and falls back to an environment variable. Nothing
//! here is fatal: a missing webhook URL surfaces later as a send-time
//! error, and a missing password falls back to the documented weak default.

use std::{env, fs, path::Path};

use tracing::{info, warn};

const SECRETS_DIR: &str = "/run/secrets";

/// Deliberately weak default, kept from the original deployment.
const DEFAULT_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret gating the session. Plaintext equality only.
    pub password: String,
    /// Chat webhook endpoint. `None` means notifications are rejected with
    /// a configuration error at send time.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(Path::new(SECRETS_DIR))
    }

    /// Loads configuration resolving secrets against `secrets_dir`.
    pub fn load_from(secrets_dir: &Path) -> Self {
        let password = resolve(secrets_dir, "PASSWORD").unwrap_or_else(|| {
            warn!("PASSWORD not configured, using the built-in default");
            DEFAULT_PASSWORD.to_string()
        });

        let webhook_url = resolve(secrets_dir, "WEBHOOK_URL");
        if webhook_url.is_none() {
            info!("WEBHOOK_URL not configured, orders cannot be submitted until it is set");
        }

        Self {
            password,
            webhook_url,
        }
    }
}

/// Secret file first, environment variable second. Empty values count as
/// absent.
fn resolve(secrets_dir: &Path, key: &str) -> Option<String> {
    read_secret(secrets_dir, key).or_else(|| env_var(key))
}

fn read_secret(secrets_dir: &Path, name: &str) -> Option<String> {
    let path = secrets_dir.join(name);
    match fs::read_to_string(&path) {
        Ok(raw) => {
            let value = raw.trim().to_string();
            (!value.is_empty()).then_some(value)
        }
        Err(_) => None,
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("pos-kiosk-config-{}-{}", std::process::id(), test));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn secret_file_wins_over_environment() {
        let dir = scratch_dir("secret-wins");
        fs::write(dir.join("POS_TEST_SECRET_WINS"), "from-file\n").unwrap();
        env::set_var("POS_TEST_SECRET_WINS", "from-env");

        assert_eq!(
            resolve(&dir, "POS_TEST_SECRET_WINS").as_deref(),
            Some("from-file")
        );

        env::remove_var("POS_TEST_SECRET_WINS");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_secret_file_falls_back_to_environment() {
        let dir = scratch_dir("empty-file");
        fs::write(dir.join("POS_TEST_EMPTY_FILE"), "  \n").unwrap();
        env::set_var("POS_TEST_EMPTY_FILE", "from-env");

        assert_eq!(
            resolve(&dir, "POS_TEST_EMPTY_FILE").as_deref(),
            Some("from-env")
        );

        env::remove_var("POS_TEST_EMPTY_FILE");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn absent_everywhere_resolves_to_none() {
        let dir = scratch_dir("absent");
        assert_eq!(resolve(&dir, "POS_TEST_ABSENT"), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_password_uses_weak_default() {
        let dir = scratch_dir("default-password");
        env::remove_var("PASSWORD");
        env::remove_var("WEBHOOK_URL");
        let config = Config::load_from(&dir);
        assert_eq!(config.password, "password");
        assert_eq!(config.webhook_url, None);
        fs::remove_dir_all(&dir).ok();
    }
}
