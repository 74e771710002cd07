//! User responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::User;

/// QuickSight DescribeUser response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserOutput {
    /// The user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl DescribeUserOutput {
    /// Creates a new builder-style object to manufacture [`DescribeUserOutput`].
    #[must_use]
    pub fn builder() -> DescribeUserOutputBuilder {
        DescribeUserOutputBuilder::default()
    }
}

impl fmt::Display for DescribeUserOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("User", self.user.as_ref())
            .field("RequestId", self.request_id.as_deref())
            .field("Status", self.status)
            .finish()
    }
}

/// A builder for [`DescribeUserOutput`].
#[derive(Debug, Clone, Default)]
pub struct DescribeUserOutputBuilder {
    inner: DescribeUserOutput,
}

impl DescribeUserOutputBuilder {
    /// The user.
    #[must_use]
    pub fn user(mut self, input: User) -> Self {
        self.inner.user = Some(input);
        self
    }
    /// The user.
    #[must_use]
    pub fn set_user(mut self, input: Option<User>) -> Self {
        self.inner.user = input;
        self
    }
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
    /// Consumes the builder and constructs a [`DescribeUserOutput`].
    #[must_use]
    pub fn build(self) -> DescribeUserOutput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRole;

    #[test]
    fn test_should_render_describe_user_output() {
        let output = DescribeUserOutput::builder()
            .user(User::builder().user_name("alice").role(UserRole::Admin).build())
            .request_id("req-1")
            .status(200)
            .build();
        assert_eq!(
            output.to_string(),
            "{User: {UserName: alice,Role: ADMIN},RequestId: req-1,Status: 200}"
        );
    }
}
