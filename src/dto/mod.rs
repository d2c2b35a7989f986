//! Response-only JSON shapes. Entities serialize themselves; these cover the
//! acknowledgements and helper results that have no domain counterpart.

use serde::Serialize;

/// Body returned by `DELETE` handlers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlugDto {
    pub slug: String,
}
