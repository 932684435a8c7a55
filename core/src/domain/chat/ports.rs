use std::future::Future;

use crate::domain::{chat::value_objects::ChatInput, common::entities::app_errors::CoreError};

/// Conversational model answering free-text nutrition questions.
#[cfg_attr(test, mockall::automock)]
pub trait ChatModel: Send + Sync {
    fn answer(
        &self,
        message: String,
        profile_context: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the chat endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn send_message(&self, input: ChatInput) -> impl Future<Output = Result<String, CoreError>> + Send;
}
