//! Data source responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::ResourceStatus;

/// QuickSight CreateDataSource response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSourceOutput {
    /// ARN of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Data source ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    /// Creation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_status: Option<ResourceStatus>,
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl CreateDataSourceOutput {
    /// Creates a new builder-style object to manufacture [`CreateDataSourceOutput`].
    #[must_use]
    pub fn builder() -> CreateDataSourceOutputBuilder {
        CreateDataSourceOutputBuilder::default()
    }
}

impl fmt::Display for CreateDataSourceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Arn", self.arn.as_deref())
            .field("DataSourceId", self.data_source_id.as_deref())
            .field("CreationStatus", self.creation_status)
            .field("RequestId", self.request_id.as_deref())
            .field("Status", self.status)
            .finish()
    }
}

/// A builder for [`CreateDataSourceOutput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDataSourceOutputBuilder {
    inner: CreateDataSourceOutput,
}

impl CreateDataSourceOutputBuilder {
    /// ARN of the data source.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// ARN of the data source.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// Data source ID.
    #[must_use]
    pub fn data_source_id(mut self, input: impl Into<String>) -> Self {
        self.inner.data_source_id = Some(input.into());
        self
    }
    /// Data source ID.
    #[must_use]
    pub fn set_data_source_id(mut self, input: Option<String>) -> Self {
        self.inner.data_source_id = input;
        self
    }
    /// Creation status.
    #[must_use]
    pub fn creation_status(mut self, input: ResourceStatus) -> Self {
        self.inner.creation_status = Some(input);
        self
    }
    /// Creation status.
    #[must_use]
    pub fn set_creation_status(mut self, input: Option<ResourceStatus>) -> Self {
        self.inner.creation_status = input;
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
    /// Consumes the builder and constructs a [`CreateDataSourceOutput`].
    #[must_use]
    pub fn build(self) -> CreateDataSourceOutput {
        self.inner
    }
}
