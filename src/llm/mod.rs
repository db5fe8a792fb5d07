//! Remote language-model answers
//!
//! The chat path asks an [`AnswerModel`] first when one is configured. Any
//! error from the model sends the request to the local lexical matcher.

mod gemini;

use async_trait::async_trait;

use crate::error::RemoteError;

pub use gemini::GeminiClient;

/// A model that answers a question from documentation text
#[async_trait]
pub trait AnswerModel: Send + Sync {
    /// Model name, for logs
    fn name(&self) -> &str;

    /// Answer `query` using `context` as the documentation
    async fn answer(&self, query: &str, context: &str) -> Result<String, RemoteError>;
}

/// Prompt sent to the model for a documentation-grounded answer
pub fn build_prompt(query: &str, context: &str) -> String {
    format!(
        "You are a helpful assistant for a company knowledge base.\n\
         Use the following documentation to answer the user's question.\n\
         If the answer is not in the documentation, state that clearly but politely.\n\
         Keep the answer concise and friendly.\n\
         Answer in the SAME LANGUAGE as the user's question.\n\
         \n\
         DOCUMENTATION CONTENT:\n\
         ---\n\
         {context}\n\
         ---\n\
         \n\
         USER QUESTION: {query}"
    )
}
