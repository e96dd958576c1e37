//! Client side of the Bookshelf API: an HTTP client, form validation,
//! per-view state machines and the HTML renderer.

pub mod api;
pub mod forms;
pub mod render;
pub mod view;

use reqwest::StatusCode;
use thiserror::Error;

pub use api::BookshelfClient;
pub use forms::{BookForm, ReviewForm};
pub use view::{BookshelfPage, Notice, SubmitButton, ViewState};

/// Errors observed by the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// The server answered with an `{ "error": ... }` envelope
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Text shown to the user in an alert or error panel
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
        }
    }
}
