//! Error types for the conversational core.

use helpdesk_core::error::HelpdeskError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("session not found: {0}")]
    SessionNotFound(String),
    #[error("storage error: {0}")]
    StorageError(String),
}

impl From<HelpdeskError> for ChatError {
    fn from(err: HelpdeskError) -> Self {
        ChatError::StorageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::SessionNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "session not found: abc-123");

        let err = ChatError::StorageError("session lock poisoned".to_string());
        assert_eq!(err.to_string(), "storage error: session lock poisoned");
    }

    #[test]
    fn test_chat_error_from_helpdesk_error() {
        let err: ChatError = HelpdeskError::Corpus("empty".to_string()).into();
        assert!(matches!(err, ChatError::StorageError(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_session_not_found_preserves_arbitrary_ids() {
        let err = ChatError::SessionNotFound(String::new());
        assert_eq!(err.to_string(), "session not found: ");

        let err = ChatError::SessionNotFound("not-a-uuid \u{00e9}".to_string());
        assert!(err.to_string().contains("not-a-uuid \u{00e9}"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::SessionNotFound("x".into()));
        assert!(dbg.contains("SessionNotFound"));
        let dbg = format!("{:?}", ChatError::StorageError("x".into()));
        assert!(dbg.contains("StorageError"));
    }
}
