//! Per-request session context
//!
//! Built from request headers by each handler and passed along explicitly.

use axum::http::header::{ACCEPT_LANGUAGE, AUTHORIZATION};
use axum::http::HeaderMap;

use super::auth::{AuthError, Claims};
use super::state::AppState;
use crate::i18n::Language;

/// Header carrying an explicit language choice
pub const LANGUAGE_HEADER: &str = "x-language";

/// Admin standing of a request
#[derive(Debug, Clone)]
pub enum AdminStatus {
    /// Admin auth is not configured; admin routes are open
    Open,
    Authenticated(Claims),
    Anonymous,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub language: Language,
    pub admin: AdminStatus,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap, state: &AppState) -> Self {
        Self {
            language: resolve_language(headers, state),
            admin: resolve_admin(headers, state),
        }
    }

    /// Override the language with an explicit tag when it is supported
    pub fn with_language(mut self, tag: Option<&str>, state: &AppState) -> Self {
        if let Some(lang) = tag.and_then(Language::from_tag) {
            if state.languages.contains(&lang) {
                self.language = lang;
            }
        }
        self
    }

    pub fn is_admin(&self) -> bool {
        !matches!(self.admin, AdminStatus::Anonymous)
    }
}

fn resolve_language(headers: &HeaderMap, state: &AppState) -> Language {
    let explicit = headers
        .get(LANGUAGE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(Language::from_tag)
        .filter(|lang| state.languages.contains(lang));

    explicit
        .or_else(|| {
            headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| Language::from_accept_language(v, &state.languages))
        })
        .unwrap_or_else(|| state.default_language())
}

fn resolve_admin(headers: &HeaderMap, state: &AppState) -> AdminStatus {
    let Some(auth) = &state.auth else {
        return AdminStatus::Open;
    };

    let result = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)
        .and_then(|header| auth.validate_authorization(header));

    match result {
        Ok(claims) => AdminStatus::Authenticated(claims),
        Err(AuthError::MissingToken) => AdminStatus::Anonymous,
        Err(e) => {
            tracing::debug!(error = %e, "rejected admin token");
            AdminStatus::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::AdminAuth;
    use crate::knowledge_base::KnowledgeBase;
    use axum::http::HeaderValue;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(KnowledgeBase::new()))
    }

    #[test]
    fn test_default_language_and_open_admin() {
        let session = Session::from_headers(&HeaderMap::new(), &state());
        assert_eq!(session.language, Language::Ru);
        assert!(session.is_admin());
    }

    #[test]
    fn test_language_header_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("pt-BR,pt;q=0.9"));
        assert_eq!(Session::from_headers(&headers, &state()).language, Language::Pt);

        headers.insert(LANGUAGE_HEADER, HeaderValue::from_static("en"));
        assert_eq!(Session::from_headers(&headers, &state()).language, Language::En);
    }

    #[test]
    fn test_unsupported_language_ignored() {
        let state = state().with_languages(vec![Language::En]);
        let mut headers = HeaderMap::new();
        headers.insert(LANGUAGE_HEADER, HeaderValue::from_static("ru"));

        let session = Session::from_headers(&headers, &state).with_language(Some("pt"), &state);
        assert_eq!(session.language, Language::En);
    }

    #[test]
    fn test_admin_requires_token_when_configured() {
        let auth = AdminAuth::new("test-secret-key-that-is-at-least-32-characters-long", "pw", 4).unwrap();
        let token = auth.login("pw").unwrap().access_token;
        let state = state().with_auth(auth);

        assert!(!Session::from_headers(&HeaderMap::new(), &state).is_admin());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}")).unwrap());
        assert!(Session::from_headers(&headers, &state).is_admin());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer forged"));
        assert!(!Session::from_headers(&headers, &state).is_admin());
    }
}
