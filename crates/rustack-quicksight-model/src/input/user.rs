//! User requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;

/// QuickSight DescribeUser request.
///
/// `GET /accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserInput {
    /// Name of the user.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Account that holds the user.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    /// Namespace, currently `default`.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl DescribeUserInput {
    /// Creates a new builder-style object to manufacture [`DescribeUserInput`].
    #[must_use]
    pub fn builder() -> DescribeUserInputBuilder {
        DescribeUserInputBuilder::default()
    }
}

impl fmt::Display for DescribeUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("UserName", self.user_name.as_deref())
            .field("AwsAccountId", self.aws_account_id.as_deref())
            .field("Namespace", self.namespace.as_deref())
            .finish()
    }
}

/// A builder for [`DescribeUserInput`].
#[derive(Debug, Clone, Default)]
pub struct DescribeUserInputBuilder {
    inner: DescribeUserInput,
}

impl DescribeUserInputBuilder {
    /// Name of the user.
    #[must_use]
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.inner.user_name = Some(input.into());
        self
    }
    /// Name of the user.
    #[must_use]
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.inner.user_name = input;
        self
    }
    /// Account that holds the user.
    #[must_use]
    pub fn aws_account_id(mut self, input: impl Into<String>) -> Self {
        self.inner.aws_account_id = Some(input.into());
        self
    }
    /// Account that holds the user.
    #[must_use]
    pub fn set_aws_account_id(mut self, input: Option<String>) -> Self {
        self.inner.aws_account_id = input;
        self
    }
    /// Namespace, currently `default`.
    #[must_use]
    pub fn namespace(mut self, input: impl Into<String>) -> Self {
        self.inner.namespace = Some(input.into());
        self
    }
    /// Namespace, currently `default`.
    #[must_use]
    pub fn set_namespace(mut self, input: Option<String>) -> Self {
        self.inner.namespace = input;
        self
    }
    /// Consumes the builder and constructs a [`DescribeUserInput`].
    #[must_use]
    pub fn build(self) -> DescribeUserInput {
        self.inner
    }
}
