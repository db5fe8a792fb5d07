//! Service configuration
//!
//! All settings come from environment variables (the binary loads `.env`
//! first). Resolution goes through [`Config::from_lookup`] so tests can pass
//! a map instead of touching the process environment.
//!
//! ```bash
//! KB_BIND=127.0.0.1:8006
//! KB_DOCUMENT_PATH=data/knowledge.md
//! KB_LANGUAGES=en,pt
//! GEMINI_API_KEY=...
//! KB_ADMIN_PASSWORD=change-me
//! KB_JWT_SECRET=at-least-32-characters-of-random-text
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{KbError, Result};
use crate::i18n::Language;

/// Version of the configuration layout
pub const CONFIG_VERSION: u32 = 1;

const DEFAULT_BIND: &str = "0.0.0.0:8006";
const DEFAULT_AUDIT_LOG_PATH: &str = "kb_audit.jsonl";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default upload cap for `PUT /api/knowledge` (64 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 64 * 1024 * 1024;

/// Shortest accepted token signing secret
pub const MIN_JWT_SECRET_CHARS: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    pub version: u32,
    pub bind: SocketAddr,
    /// Persisted raw document, loaded at startup
    pub document_path: Option<PathBuf>,
    pub audit_log_path: PathBuf,
    /// Largest accepted document upload, in bytes
    pub max_document_bytes: usize,
    /// Supported languages; the first one is the default
    pub languages: Vec<Language>,
    pub log_level: String,
    pub remote: Option<RemoteModelConfig>,
    pub admin: Option<AdminConfig>,
    pub features: FeatureFlags,
}

/// Credentials and generation settings for the remote model
#[derive(Debug, Clone)]
pub struct RemoteModelConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub password: String,
    /// Token signing secret, required alongside the password
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub audit_log: bool,
    pub remote_model: bool,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_str = get("KB_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|e| KbError::Config(format!("KB_BIND '{bind_str}': {e}")))?;

        let languages = match get("KB_LANGUAGES") {
            Some(list) => parse_languages(&list)?,
            None => Language::ALL.to_vec(),
        };

        let features = FeatureFlags {
            audit_log: parse_flag("KB_AUDIT_LOG", get("KB_AUDIT_LOG"), true)?,
            remote_model: parse_flag("KB_REMOTE_MODEL", get("KB_REMOTE_MODEL"), true)?,
        };

        let remote = match get("GEMINI_API_KEY") {
            Some(api_key) => {
                let timeout_secs = match get("KB_REMOTE_TIMEOUT_SECS") {
                    Some(v) => v.parse::<u64>().map_err(|e| {
                        KbError::Config(format!("KB_REMOTE_TIMEOUT_SECS '{v}': {e}"))
                    })?,
                    None => DEFAULT_TIMEOUT_SECS,
                };
                Some(RemoteModelConfig {
                    api_key,
                    model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                    endpoint: get("GEMINI_ENDPOINT")
                        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
                        .trim_end_matches('/')
                        .to_string(),
                    temperature: 0.3,
                    max_output_tokens: 1000,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        let admin = match get("KB_ADMIN_PASSWORD") {
            Some(password) => {
                let jwt_secret = get("KB_JWT_SECRET").ok_or_else(|| {
                    KbError::Config("KB_JWT_SECRET is required when KB_ADMIN_PASSWORD is set".into())
                })?;
                if jwt_secret.chars().count() < MIN_JWT_SECRET_CHARS {
                    return Err(KbError::Config(format!(
                        "KB_JWT_SECRET must be at least {MIN_JWT_SECRET_CHARS} characters"
                    )));
                }
                Some(AdminConfig { password, jwt_secret })
            }
            None => None,
        };

        let max_document_bytes = match get("KB_MAX_DOCUMENT_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|e| KbError::Config(format!("KB_MAX_DOCUMENT_BYTES '{v}': {e}")))?,
            None => DEFAULT_MAX_DOCUMENT_BYTES,
        };

        Ok(Self {
            version: CONFIG_VERSION,
            bind,
            document_path: get("KB_DOCUMENT_PATH").map(PathBuf::from),
            audit_log_path: get("KB_AUDIT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIT_LOG_PATH)),
            max_document_bytes,
            languages,
            log_level: get("KB_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            remote,
            admin,
            features,
        })
    }

    /// Remote model settings, if the model is both configured and enabled
    pub fn active_remote(&self) -> Option<&RemoteModelConfig> {
        self.remote.as_ref().filter(|_| self.features.remote_model)
    }
}

fn parse_languages(list: &str) -> Result<Vec<Language>> {
    let mut languages = Vec::new();
    for tag in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let lang: Language = tag
            .parse()
            .map_err(|e| KbError::Config(format!("KB_LANGUAGES: {e}")))?;
        if !languages.contains(&lang) {
            languages.push(lang);
        }
    }
    if languages.is_empty() {
        return Err(KbError::Config("KB_LANGUAGES must name at least one language".into()));
    }
    Ok(languages)
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(KbError::Config(format!("{key} '{value}': expected true or false"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.bind.port(), 8006);
        assert_eq!(config.languages, Language::ALL.to_vec());
        assert_eq!(config.max_document_bytes, DEFAULT_MAX_DOCUMENT_BYTES);
        assert!(config.remote.is_none());
        assert!(config.admin.is_none());
        assert!(config.document_path.is_none());
        assert_eq!(
            config.features,
            FeatureFlags {
                audit_log: true,
                remote_model: true
            }
        );
    }

    #[test]
    fn test_remote_model_settings() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_ENDPOINT", "http://localhost:9000/v1beta/"),
            ("KB_REMOTE_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        let remote = config.active_remote().unwrap();
        assert_eq!(remote.api_key, "secret");
        assert_eq!(remote.model, DEFAULT_MODEL);
        assert_eq!(remote.endpoint, "http://localhost:9000/v1beta");
        assert_eq!(remote.timeout, Duration::from_secs(5));
        assert_eq!(remote.max_output_tokens, 1000);
    }

    #[test]
    fn test_remote_model_disabled_by_flag() {
        let config = config_from(&[("GEMINI_API_KEY", "secret"), ("KB_REMOTE_MODEL", "off")]).unwrap();
        assert!(config.remote.is_some());
        assert!(config.active_remote().is_none());
    }

    #[test]
    fn test_languages_order_and_dedup() {
        let config = config_from(&[("KB_LANGUAGES", "en, pt,en")]).unwrap();
        assert_eq!(config.languages, vec![Language::En, Language::Pt]);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config_from(&[("KB_BIND", "nowhere")]), Err(KbError::Config(_))));
        assert!(matches!(config_from(&[("KB_LANGUAGES", "fr")]), Err(KbError::Config(_))));
        assert!(matches!(config_from(&[("KB_LANGUAGES", ",,")]), Err(KbError::Config(_))));
        assert!(matches!(config_from(&[("KB_AUDIT_LOG", "maybe")]), Err(KbError::Config(_))));
        assert!(matches!(config_from(&[("KB_MAX_DOCUMENT_BYTES", "lots")]), Err(KbError::Config(_))));
        assert!(matches!(
            config_from(&[("GEMINI_API_KEY", "k"), ("KB_REMOTE_TIMEOUT_SECS", "soon")]),
            Err(KbError::Config(_))
        ));
    }

    #[test]
    fn test_admin_settings() {
        let secret = "test-secret-key-that-is-at-least-32-characters-long";
        let config = config_from(&[("KB_ADMIN_PASSWORD", "hunter2"), ("KB_JWT_SECRET", secret)]).unwrap();
        let admin = config.admin.unwrap();
        assert_eq!(admin.password, "hunter2");
        assert_eq!(admin.jwt_secret, secret);
    }

    #[test]
    fn test_admin_password_requires_secret() {
        assert!(matches!(
            config_from(&[("KB_ADMIN_PASSWORD", "hunter2")]),
            Err(KbError::Config(msg)) if msg.contains("KB_JWT_SECRET")
        ));
        assert!(matches!(
            config_from(&[("KB_ADMIN_PASSWORD", "hunter2"), ("KB_JWT_SECRET", "short")]),
            Err(KbError::Config(_))
        ));
        assert!(config_from(&[("KB_JWT_SECRET", "unused without a password")]).unwrap().admin.is_none());
    }

    #[test]
    fn test_max_document_bytes() {
        let config = config_from(&[("KB_MAX_DOCUMENT_BYTES", "1048576")]).unwrap();
        assert_eq!(config.max_document_bytes, 1024 * 1024);
    }
}
