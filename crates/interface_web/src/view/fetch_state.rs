//! Per-panel fetch state

use std::fmt::Display;

/// State of one asynchronous read
///
/// Exactly one variant holds at a time, so "loading with an error" or
/// "success without data" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request succeeded
    Success(T),
    /// The last request failed; holds a display message
    Error(String),
}

impl<T> FetchState<T> {
    /// Converts a finished request into `Success` or `Error`
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Data of a successful request
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Message of a failed request
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        }
    }
}
