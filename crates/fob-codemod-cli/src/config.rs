//! Layered configuration loading.
//!
//! Priority: CLI flags > `FOB_CODEMOD_*` environment variables > config file > defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml, Yaml},
};
use fob_codemod::CodemodConfig;
use serde::Serialize;

use crate::cli::{FcArgs, ImportsArgs};
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "fob-codemod.toml";

/// Prefix for environment overrides (`FOB_CODEMOD_SUFFIX`, ...)
pub const ENV_PREFIX: &str = "FOB_CODEMOD_";

/// Values given on the command line.
///
/// Only fields that were actually passed are serialized, so unset flags
/// never shadow the config file or the environment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper_symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper_module: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<String>,
}

impl From<&FcArgs> for ConfigOverrides {
    fn from(args: &FcArgs) -> Self {
        Self {
            suffix: args.suffix.clone(),
            wrapper_symbol: args.wrapper_symbol.clone(),
            wrapper_module: args.wrapper_module.clone(),
            libraries: Vec::new(),
        }
    }
}

impl From<&ImportsArgs> for ConfigOverrides {
    fn from(args: &ImportsArgs) -> Self {
        Self {
            libraries: args.libraries.clone(),
            ..Self::default()
        }
    }
}

/// Load the codemod configuration from every source.
///
/// An explicit `config_path` must exist. Without one, `fob-codemod.toml` in
/// `cwd` is used when present.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is missing or has an unknown
/// extension, when a value has the wrong type, or when the merged result
/// fails validation.
pub fn load_config(
    config_path: Option<&Path>,
    cwd: &Path,
    overrides: &ConfigOverrides,
) -> Result<CodemodConfig> {
    let mut figment = Figment::new().merge(Serialized::defaults(CodemodConfig::default()));

    if let Some(path) = resolve_config_file(config_path, cwd)? {
        tracing::debug!(path = %path.display(), "Loading config file");
        figment = match config_format(&path)? {
            ConfigFormat::Toml => figment.merge(Toml::file(&path)),
            ConfigFormat::Json => figment.merge(Json::file(&path)),
            ConfigFormat::Yaml => figment.merge(Yaml::file(&path)),
        };
    }

    figment = figment
        .merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| env_key_to_field(key.as_str()).into())
                .lowercase(false),
        )
        .merge(Serialized::defaults(overrides));

    let config: CodemodConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        value: e.to_string(),
        hint: format!("Check {} syntax and field types", DEFAULT_CONFIG_FILE),
    })?;

    config.validate().map_err(ConfigError::from)?;

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

/// `WRAPPER_SYMBOL` -> `wrapperSymbol`
fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !field.is_empty();
        } else if upper_next {
            field.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            field.push(c.to_ascii_lowercase());
        }
    }
    field
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

fn resolve_config_file(config_path: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match config_path {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Ok(Some(path))
        }
        None => {
            let default_path = cwd.join(DEFAULT_CONFIG_FILE);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}

fn config_format(path: &Path) -> Result<ConfigFormat> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf()).into()),
    }
}
