//! Input error types.

/// Errors from the input layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The intent queue was dropped; nothing will consume further intents.
    #[error("intent queue disconnected")]
    Disconnected,

    /// A binding override named an action that does not exist.
    #[error("unknown action in key binding: {0}")]
    UnknownAction(String),
}
