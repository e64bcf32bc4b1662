use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    api::ApiError, application::forms::FormError, cache::ResourceType, config::LoadError,
    infra::error::InfraError, presentation::ViewError, session::SessionError,
};

/// A flattened error chain, outermost message first.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            let message = inner.to_string();
            if messages.last() != Some(&message) {
                messages.push(message);
            }
            current = inner.source();
        }

        Self { messages }
    }

    pub fn joined(&self) -> String {
        self.messages.join(": ")
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("not logged in; run `login` first")]
    NotLoggedIn,
    #[error("Login failed!")]
    LoginFailed,
    #[error("{resource} #{id} not found")]
    NotFound { resource: ResourceType, id: i32 },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    View(#[from] ViewError),
}

impl ControllerError {
    /// Map a 404 from a single-record lookup to `NotFound`.
    pub(crate) fn lookup(resource: ResourceType, id: i32, err: ApiError) -> Self {
        match err.status_code() {
            Some(404) => Self::NotFound { resource, id },
            _ => Self::Api(err),
        }
    }
}

/// Errors surfaced at the binary boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error("failed to initialise the API client: {0}")]
    Client(#[source] ApiError),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
