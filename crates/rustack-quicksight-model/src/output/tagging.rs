//! Tagging responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;

/// QuickSight TagResource response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceOutput {
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`].
    #[must_use]
    pub fn builder() -> TagResourceOutputBuilder {
        TagResourceOutputBuilder::default()
    }
}

impl fmt::Display for TagResourceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("RequestId", self.request_id.as_deref())
            .field("Status", self.status)
            .finish()
    }
}

/// A builder for [`TagResourceOutput`].
#[derive(Debug, Clone, Default)]
pub struct TagResourceOutputBuilder {
    inner: TagResourceOutput,
}

impl TagResourceOutputBuilder {
    /// AWS request ID for this operation.
    #[must_use]
    pub fn request_id(mut self, input: impl Into<String>) -> Self {
        self.inner.request_id = Some(input.into());
        self
    }
    /// AWS request ID for this operation.
    #[must_use]
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.inner.request_id = input;
        self
    }
    /// HTTP status code of the response.
    #[must_use]
    pub fn status(mut self, input: i32) -> Self {
        self.inner.status = Some(input);
        self
    }
    /// HTTP status code of the response.
    #[must_use]
    pub fn set_status(mut self, input: Option<i32>) -> Self {
        self.inner.status = input;
        self
    }
    /// Consumes the builder and constructs a [`TagResourceOutput`].
    #[must_use]
    pub fn build(self) -> TagResourceOutput {
        self.inner
    }
}
