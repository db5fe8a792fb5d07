//! Chat endpoint: remote model first, lexical matcher as fallback

use std::borrow::Cow;
use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::api::session::Session;
use crate::api::state::AppState;
use crate::audit::{AnswerSource, AuditRecord};
use crate::i18n::{fallback_answer, Language};
use crate::knowledge_base::KnowledgeSnapshot;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// Document to answer from instead of the stored one
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub source: AnswerSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub language: Language,
}

/// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(ApiError::bad_request("query must not be empty"));
    }

    let session = Session::from_headers(&headers, &state).with_language(req.lang.as_deref(), &state);
    let snapshot = state.kb.snapshot();
    let context = req.context.as_deref().filter(|c| !c.trim().is_empty());

    let mut response = None;
    if let Some(model) = &state.model {
        match model.answer(query, context.unwrap_or(snapshot.document())).await {
            Ok(answer) => {
                response = Some(ChatResponse {
                    answer,
                    source: AnswerSource::Model,
                    heading: None,
                    language: session.language,
                });
            }
            Err(e) => {
                tracing::warn!(model = model.name(), error = %e, "remote model failed, using local matcher");
            }
        }
    }

    let response = match response {
        Some(response) => response,
        None => {
            // A request context is matched as a throwaway snapshot
            let local: Cow<'_, KnowledgeSnapshot> = match context {
                Some(document) => Cow::Owned(KnowledgeSnapshot::from_document(document.to_string(), 0)),
                None => Cow::Borrowed(snapshot.as_ref()),
            };
            answer_locally(query, &local, session.language)
        }
    };

    state.audit.record(&AuditRecord::new(
        response.language,
        query,
        response.answer.as_str(),
        response.source,
        response.heading.clone(),
    ));

    Ok(Json(response))
}

fn answer_locally(query: &str, snapshot: &KnowledgeSnapshot, language: Language) -> ChatResponse {
    match snapshot.find_answer(query) {
        Some(entry) => ChatResponse {
            answer: entry.body().to_string(),
            source: AnswerSource::KnowledgeBase,
            heading: Some(entry.heading().to_string()),
            language,
        },
        None => ChatResponse {
            answer: fallback_answer(language, snapshot.entries()),
            source: AnswerSource::Fallback,
            heading: None,
            language,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "**Vacation**\nEmployees get 28 days of vacation.\n\n**Parking**\nThe lot is behind building B.\n";

    #[test]
    fn test_answer_locally_match() {
        let snapshot = KnowledgeSnapshot::from_document(DOC.to_string(), 1);
        let response = answer_locally("how many vacation days?", &snapshot, Language::En);

        assert_eq!(response.source, AnswerSource::KnowledgeBase);
        assert_eq!(response.answer, "Employees get 28 days of vacation.");
        assert_eq!(response.heading.as_deref(), Some("Vacation"));
    }

    #[test]
    fn test_answer_locally_fallback_lists_topics() {
        let snapshot = KnowledgeSnapshot::from_document(DOC.to_string(), 1);
        let response = answer_locally("quantum chromodynamics", &snapshot, Language::En);

        assert_eq!(response.source, AnswerSource::Fallback);
        assert!(response.heading.is_none());
        assert!(response.answer.contains("**Vacation**"));
        assert!(response.answer.contains("**Parking**"));
    }
}
