//! Data models for Bookshelf

pub mod book;
pub mod log_entry;
pub mod review;

// Re-export commonly used types
pub use book::{AuthorName, Book, CreateBook, SearchQuery};
pub use log_entry::{FunctionStats, LogEntry, LogStatus, NewLogEntry};
pub use review::{CreateReview, Review};
