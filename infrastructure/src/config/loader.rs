//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["bergs.toml", ".bergs.toml"];

/// Provider environment variables and the config keys they populate.
///
/// These are read verbatim rather than through `Env` so that values like
/// `+15551234567` are not coerced into numbers.
pub const PROVIDER_ENV: [(&str, &str); 7] = [
    ("RESEND_API_KEY", "delivery.email.api_key"),
    ("INVITE_EMAIL_FROM", "delivery.email.from"),
    ("INVITE_EMAIL_TO", "delivery.email.to"),
    ("TWILIO_ACCOUNT_SID", "delivery.whatsapp.account_sid"),
    ("TWILIO_AUTH_TOKEN", "delivery.whatsapp.auth_token"),
    ("TWILIO_WHATSAPP_FROM", "delivery.whatsapp.from"),
    ("TWILIO_WHATSAPP_TO", "delivery.whatsapp.to"),
];

/// Prefix for generic overrides, e.g. `BERGS_SERVER__BIND=127.0.0.1:8080`
pub const ENV_PREFIX: &str = "BERGS_";

/// `BERGS_` overrides under this section are merged as raw strings, like
/// [`PROVIDER_ENV`], instead of going through `Env` value parsing.
const VERBATIM_SECTION: &str = "delivery__";

fn is_verbatim(unprefixed_key: &str) -> bool {
    unprefixed_key
        .to_ascii_lowercase()
        .starts_with(VERBATIM_SECTION)
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BERGS_*` environment overrides
    /// 2. Provider credential variables (`RESEND_API_KEY`, `TWILIO_*`, ...)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./bergs.toml` or `./.bergs.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/bergs-site/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_environment(figment).extract().map_err(Box::new)
    }

    /// Load defaults plus environment, ignoring every config file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_environment(figment).extract().map_err(Box::new)
    }

    fn with_environment(mut figment: Figment) -> Figment {
        for (var, key) in PROVIDER_ENV {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    figment = figment.merge(Serialized::default(key, value));
                }
            }
        }
        for (key, value) in Self::verbatim_overrides() {
            figment = figment.merge(Serialized::default(&key, value));
        }
        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| !is_verbatim(key.as_str()))
                .split("__"),
        )
    }

    /// `BERGS_DELIVERY__*` variables as `(dotted.key, raw value)` pairs
    fn verbatim_overrides() -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(var, value)| Some((var.into_string().ok()?, value.into_string().ok()?)))
            .filter_map(|(var, value)| {
                let prefix = var.get(..ENV_PREFIX.len())?;
                let rest = var.get(ENV_PREFIX.len()..)?;
                if !prefix.eq_ignore_ascii_case(ENV_PREFIX) || !is_verbatim(rest) {
                    return None;
                }
                if value.trim().is_empty() {
                    return None;
                }
                Some((rest.to_ascii_lowercase().replace("__", "."), value))
            })
            .collect()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bergs-site").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config sources being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Overrides: {}*", ENV_PREFIX);
        for (var, _) in PROVIDER_ENV {
            let set = std::env::var(var).is_ok_and(|v| !v.trim().is_empty());
            println!("  [{}] Env:      {}", if set { "SET  " } else { "     " }, var);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./bergs.toml or ./.bergs.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:   {}", mark, path.display());
        }

        println!("  [     ] Default:  built-in defaults");
    }
}
