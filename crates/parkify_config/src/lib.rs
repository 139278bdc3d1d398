//! Configuration for the Parkify workspace.
//!
//! Sources are layered, later ones winning:
//!
//! 1. built-in defaults (see [`models`]),
//! 2. `config/default.{toml,json,yaml}`,
//! 3. `config/{RUN_ENV}.{toml,json,yaml}` (`RUN_ENV` defaults to `debug`),
//! 4. environment variables prefixed with `PARKIFY`, sections separated by `__`
//!    (e.g. `PARKIFY__PARKING__TOTAL_SLOTS=12`).
//!
//! A `.env` file is loaded into the process environment before any of this.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "PARKIFY";

/// Separator between nested configuration keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the application configuration from the default locations.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    load_config_from(&config_dir(), &run_env, ENV_PREFIX)
}

/// Loads the configuration from an explicit directory and environment prefix.
///
/// Missing files are not an error; an empty directory yields the defaults.
pub fn load_config_from(
    dir: &Path,
    run_env: &str,
    env_prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = dir.join("default");
    let env_path = dir.join(run_env);

    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

/// Directory holding the configuration files.
///
/// `PARKIFY_CONFIG_DIR` wins; otherwise `config/` in the current directory,
/// falling back to the workspace's `config/` directory.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("PARKIFY_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let local = PathBuf::from("config");
    if local.is_dir() {
        return local;
    }
    // crates/parkify_config -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(|root| root.join("config"))
        .unwrap_or(local)
}

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file name comes from `DOTENV_OVERRIDE` and defaults to `.env`. Loading
/// happens at most once per process; a missing file is ignored. Returns the
/// path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
