use config::{Config, ConfigError, Environment, File, Map};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Directory searched for `default.toml` and `<profile>.toml` when
/// `CONFIG_DIR` is not set.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Loads the configuration for the current process.
///
/// The profile comes from `RUN_ENV`, the config directory from `CONFIG_DIR`,
/// and `LOKAL__*` variables override everything else.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let profile = Profile::from_run_env(&env::var("RUN_ENV").unwrap_or_default());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

    ConfigLoader::new(profile).config_dir(config_dir).load()
}

/// Builder over the layered sources: built-in defaults, optional
/// `default` and profile files, then prefixed environment variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: Profile,
    config_dir: PathBuf,
    env_source: Option<Map<String, String>>,
}

impl ConfigLoader {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            env_source: None,
        }
    }

    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Replaces the process environment with an explicit variable map.
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    pub fn load(self) -> Result<AppConfig, ConfigError> {
        let default_path = self.config_dir.join("default");
        let profile_path = self.config_dir.join(self.profile.as_str());

        debug!("config: profile: {}", self.profile.as_str());
        debug!("config: default_path: {}", default_path.display());
        debug!("config: profile_path: {}", profile_path.display());

        let environment = Environment::with_prefix(env_vars::DEFAULT_PREFIX)
            .separator(env_vars::CONFIG_SEPARATOR)
            .source(self.env_source);

        let builder = Config::builder()
            .set_default("profile", self.profile.as_str())?
            .set_default("api.base_url", self.profile.default_base_url())?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default(
                "session.token_file",
                default_token_file().to_string_lossy().into_owned(),
            )?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
            .add_source(File::with_name(&profile_path.to_string_lossy()).required(false))
            .add_source(environment);

        let config: AppConfig = builder.build()?.try_deserialize()?;
        validate(&config)?;
        Ok(config)
    }
}

/// `~/.lokal/session.json`, or a relative `.lokal/session.json` when the
/// home directory is unknown.
pub fn default_token_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".lokal"))
        .unwrap_or_else(|| PathBuf::from(".lokal"))
        .join("session.json")
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::Message(format!(
            "api.base_url must be an http(s) URL, got '{}' (set {})",
            config.api.base_url,
            env_vars::config_path_to_env_var("api.base_url")
        )));
    }
    if config.api.timeout_secs == 0 {
        return Err(ConfigError::Message(format!(
            "api.timeout_secs must be positive (set {})",
            env_vars::config_path_to_env_var("api.timeout_secs")
        )));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// The path is taken from `DOTENV_OVERRIDE`, falling back to `.env`. A
/// missing file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
