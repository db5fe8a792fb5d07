//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::api::auth::AdminAuth;
use crate::audit::AuditLog;
use crate::config::{Config, DEFAULT_MAX_DOCUMENT_BYTES};
use crate::error::{KbError, Result};
use crate::i18n::Language;
use crate::knowledge_base::KnowledgeBase;
use crate::llm::{AnswerModel, GeminiClient};

/// Shared application state
pub struct AppState {
    /// The knowledge base
    pub kb: Arc<KnowledgeBase>,

    /// Remote model tried before the local matcher
    pub model: Option<Arc<dyn AnswerModel>>,

    /// Admin authentication; `None` leaves admin routes open
    pub auth: Option<AdminAuth>,

    pub audit: AuditLog,

    /// Supported languages, default first
    pub languages: Vec<Language>,

    /// Largest accepted document upload, in bytes
    pub max_document_bytes: usize,
}

impl AppState {
    /// State with no remote model, no admin auth and no audit log
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            model: None,
            auth: None,
            audit: AuditLog::disabled(),
            languages: Language::ALL.to_vec(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Build the full state from configuration
    pub fn from_config(config: &Config, kb: Arc<KnowledgeBase>) -> Result<Self> {
        let model: Option<Arc<dyn AnswerModel>> = match config.active_remote() {
            Some(remote) => Some(Arc::new(GeminiClient::new(remote.clone())?) as Arc<dyn AnswerModel>),
            None => None,
        };

        let auth = match &config.admin {
            Some(admin) => {
                Some(AdminAuth::from_config(admin).map_err(|e| KbError::Auth(e.to_string()))?)
            }
            None => None,
        };

        Ok(Self {
            kb,
            model,
            auth,
            audit: AuditLog::new(&config.audit_log_path, config.features.audit_log),
            languages: config.languages.clone(),
            max_document_bytes: config.max_document_bytes,
        })
    }

    pub fn with_model(mut self, model: Arc<dyn AnswerModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_auth(mut self, auth: AdminAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        if !languages.is_empty() {
            self.languages = languages;
        }
        self
    }

    pub fn with_max_document_bytes(mut self, max_document_bytes: usize) -> Self {
        self.max_document_bytes = max_document_bytes;
        self
    }

    pub fn default_language(&self) -> Language {
        self.languages.first().copied().unwrap_or(Language::Ru)
    }
}
