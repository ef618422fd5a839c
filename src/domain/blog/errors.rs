//! Blog Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlogError {
    #[error("Title, content, and author are required")]
    MissingFields,
}
