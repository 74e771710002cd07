//! Data set responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;

/// QuickSight CreateDataSet response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSetOutput {
    /// ARN of the data set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Data set ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<String>,
    /// ARN of the SPICE ingestion started, for SPICE data sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_arn: Option<String>,
    /// ID of the SPICE ingestion started, for SPICE data sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_id: Option<String>,
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl CreateDataSetOutput {
    /// Creates a new builder-style object to manufacture [`CreateDataSetOutput`].
    #[must_use]
    pub fn builder() -> CreateDataSetOutputBuilder {
        CreateDataSetOutputBuilder::default()
    }
}

impl fmt::Display for CreateDataSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Arn", self.arn.as_deref())
            .field("DataSetId", self.data_set_id.as_deref())
            .field("IngestionArn", self.ingestion_arn.as_deref())
            .field("IngestionId", self.ingestion_id.as_deref())
            .field("RequestId", self.request_id.as_deref())
            .field("Status", self.status)
            .finish()
    }
}

/// A builder for [`CreateDataSetOutput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDataSetOutputBuilder {
    inner: CreateDataSetOutput,
}

impl CreateDataSetOutputBuilder {
    /// ARN of the data set.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// ARN of the data set.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// Data set ID.
    #[must_use]
    pub fn data_set_id(mut self, input: impl Into<String>) -> Self {
        self.inner.data_set_id = Some(input.into());
        self
    }
    /// Data set ID.
    #[must_use]
    pub fn set_data_set_id(mut self, input: Option<String>) -> Self {
        self.inner.data_set_id = input;
        self
    }
    /// ARN of the SPICE ingestion started, for SPICE data sets.
    #[must_use]
    pub fn ingestion_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.ingestion_arn = Some(input.into());
        self
    }
    /// ARN of the SPICE ingestion started, for SPICE data sets.
    #[must_use]
    pub fn set_ingestion_arn(mut self, input: Option<String>) -> Self {
        self.inner.ingestion_arn = input;
        self
    }
    /// ID of the SPICE ingestion started, for SPICE data sets.
    #[must_use]
    pub fn ingestion_id(mut self, input: impl Into<String>) -> Self {
        self.inner.ingestion_id = Some(input.into());
        self
    }
    /// ID of the SPICE ingestion started, for SPICE data sets.
    #[must_use]
    pub fn set_ingestion_id(mut self, input: Option<String>) -> Self {
        self.inner.ingestion_id = input;
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
    /// Consumes the builder and constructs a [`CreateDataSetOutput`].
    #[must_use]
    pub fn build(self) -> CreateDataSetOutput {
        self.inner
    }
}
