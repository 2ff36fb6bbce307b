use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::FieldName;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which of the known deployments a config starts from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Main guest page: name, reception and party are required.
    #[default]
    Guest,
    /// Family page: address required, after-party always answered as absent.
    Family,
    /// Every field except allergy is required.
    Strict,
}

impl Variant {
    pub fn required(&self) -> Vec<FieldName> {
        match self {
            Variant::Guest => vec![FieldName::Name, FieldName::Reception, FieldName::Party],
            Variant::Family => vec![FieldName::Name, FieldName::Reception, FieldName::Address],
            Variant::Strict => vec![
                FieldName::Name,
                FieldName::Reception,
                FieldName::Party,
                FieldName::Address,
            ],
        }
    }

    pub fn fixed_values(&self) -> BTreeMap<FieldName, String> {
        let mut fixed = BTreeMap::new();
        if let Variant::Family = self {
            fixed.insert(FieldName::Party, "欠席".to_string());
        }
        fixed
    }

    pub fn messages(&self) -> Messages {
        match self {
            Variant::Family => Messages {
                required_missing: "お名前、出欠、ご住所は必須項目です。".to_string(),
                transport_failure: "送信エラーが発生しました。".to_string(),
            },
            Variant::Guest | Variant::Strict => Messages::default(),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Variant::Guest),
            "family" => Ok(Variant::Family),
            "strict" => Ok(Variant::Strict),
            other => Err(ConfigError::Invalid {
                key: "RSVP_VARIANT".to_string(),
                reason: format!("unknown variant '{}'", other),
            }),
        }
    }
}

/// User-facing strings shown by the page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    #[serde(rename = "requiredMissing")]
    pub required_missing: String,
    #[serde(rename = "transportFailure")]
    pub transport_failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required_missing: "お名前と出欠のご回答は必須項目です。".to_string(),
            transport_failure: "送信中にエラーが発生しました。しばらくしてから再度お試しください。"
                .to_string(),
        }
    }
}

/// Per-deployment RSVP settings.
///
/// The entry ids belong to one specific receiving form and are always
/// supplied by the deployment, never defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpConfig {
    pub form_action_url: String,
    pub entry_ids: BTreeMap<FieldName, String>,
    pub required: Vec<FieldName>,
    pub fixed_values: BTreeMap<FieldName, String>,
    pub messages: Messages,
    pub request_timeout_secs: u64,
}

// On-disk layout; anything not given falls back to the variant preset.
#[derive(Deserialize, Debug)]
struct ConfigFile {
    #[serde(default)]
    variant: Variant,
    form_action_url: String,
    entry_ids: BTreeMap<String, String>,
    required: Option<Vec<FieldName>>,
    fixed_values: Option<BTreeMap<String, String>>,
    messages: Option<Messages>,
    request_timeout_secs: Option<u64>,
}

impl RsvpConfig {
    /// Builds a config from a variant preset plus the deployment's endpoint
    /// and entry ids.
    pub fn for_variant(
        variant: Variant,
        form_action_url: impl Into<String>,
        entry_ids: BTreeMap<FieldName, String>,
    ) -> Self {
        Self {
            form_action_url: form_action_url.into(),
            entry_ids,
            required: variant.required(),
            fixed_values: variant.fixed_values(),
            messages: variant.messages(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the config from `RSVP_CONFIG_PATH` if set, otherwise from
    /// `RSVP_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("RSVP_CONFIG_PATH") {
            info!("Loading RSVP config from file: {}", path);
            return Self::from_file(path);
        }

        debug!("Loading RSVP config from environment variables");
        let variant = match env::var("RSVP_VARIANT") {
            Ok(v) => v.parse()?,
            Err(_) => Variant::default(),
        };

        let form_action_url = env::var("RSVP_FORM_ACTION_URL")
            .map_err(|_| ConfigError::Missing("RSVP_FORM_ACTION_URL".to_string()))?;

        let mut entry_ids = BTreeMap::new();
        for field in FieldName::ALL {
            let key = format!("RSVP_ENTRY_{}", field.as_str().to_uppercase());
            let id = env::var(&key).map_err(|_| ConfigError::Missing(key.clone()))?;
            entry_ids.insert(field, id);
        }

        let mut config = Self::for_variant(variant, form_action_url, entry_ids);

        if let Ok(required) = env::var("RSVP_REQUIRED") {
            config.required = parse_field_list(&required)?;
        }

        if let Ok(timeout) = env::var("RSVP_TIMEOUT_SECS") {
            config.request_timeout_secs =
                timeout.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "RSVP_TIMEOUT_SECS".to_string(),
                    reason: format!("'{}' is not a number of seconds", timeout),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        let variant = file.variant;

        let fixed_values = match file.fixed_values {
            Some(values) => keyed_by_field(values)?,
            None => variant.fixed_values(),
        };

        let config = Self {
            form_action_url: file.form_action_url,
            entry_ids: keyed_by_field(file.entry_ids)?,
            required: file.required.unwrap_or_else(|| variant.required()),
            fixed_values,
            messages: file.messages.unwrap_or_else(|| variant.messages()),
            request_timeout_secs: file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the endpoint and the entry-id mapping.
    ///
    /// A wrong mapping makes the receiving service misfile answers without
    /// any error, so every field needs its own distinct id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.form_action_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing("form_action_url".to_string()));
        }
        let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::Invalid {
            key: "form_action_url".to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Invalid {
                key: "form_action_url".to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut seen: Vec<&str> = Vec::with_capacity(FieldName::ALL.len());
        for field in FieldName::ALL {
            let id = match self.entry_ids.get(&field) {
                Some(id) if !id.trim().is_empty() => id.as_str(),
                _ => return Err(ConfigError::Missing(format!("entry_ids.{}", field))),
            };
            if seen.contains(&id) {
                return Err(ConfigError::Invalid {
                    key: format!("entry_ids.{}", field),
                    reason: format!("entry id '{}' is used by more than one field", id),
                });
            }
            seen.push(id);
        }

        if self.required.is_empty() {
            return Err(ConfigError::Invalid {
                key: "required".to_string(),
                reason: "at least one field must be required".to_string(),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn entry_id(&self, field: FieldName) -> Option<&str> {
        self.entry_ids.get(&field).map(String::as_str)
    }
}

fn parse_field_list(raw: &str) -> Result<Vec<FieldName>, ConfigError> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(FieldName::from_str)
        .collect()
}

fn keyed_by_field(
    raw: BTreeMap<String, String>,
) -> Result<BTreeMap<FieldName, String>, ConfigError> {
    raw.into_iter()
        .map(|(key, value)| Ok((key.parse::<FieldName>()?, value)))
        .collect()
}
