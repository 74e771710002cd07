//! Dashboard responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::{DashboardSummary, ResourceStatus};

/// QuickSight CreateDashboard response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDashboardOutput {
    /// ARN of the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// ARN of the first dashboard version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_arn: Option<String>,
    /// Dashboard ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    /// Creation status. Creation is asynchronous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_status: Option<ResourceStatus>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateDashboardOutput {
    /// Creates a new builder-style object to manufacture [`CreateDashboardOutput`].
    #[must_use]
    pub fn builder() -> CreateDashboardOutputBuilder {
        CreateDashboardOutputBuilder::default()
    }
}

impl fmt::Display for CreateDashboardOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Arn", self.arn.as_deref())
            .field("VersionArn", self.version_arn.as_deref())
            .field("DashboardId", self.dashboard_id.as_deref())
            .field("CreationStatus", self.creation_status)
            .field("Status", self.status)
            .field("RequestId", self.request_id.as_deref())
            .finish()
    }
}

/// A builder for [`CreateDashboardOutput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDashboardOutputBuilder {
    inner: CreateDashboardOutput,
}

impl CreateDashboardOutputBuilder {
    /// ARN of the dashboard.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// ARN of the dashboard.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// ARN of the first dashboard version.
    #[must_use]
    pub fn version_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.version_arn = Some(input.into());
        self
    }
    /// ARN of the first dashboard version.
    #[must_use]
    pub fn set_version_arn(mut self, input: Option<String>) -> Self {
        self.inner.version_arn = input;
        self
    }
    /// Dashboard ID.
    #[must_use]
    pub fn dashboard_id(mut self, input: impl Into<String>) -> Self {
        self.inner.dashboard_id = Some(input.into());
        self
    }
    /// Dashboard ID.
    #[must_use]
    pub fn set_dashboard_id(mut self, input: Option<String>) -> Self {
        self.inner.dashboard_id = input;
        self
    }
    /// Creation status. Creation is asynchronous.
    #[must_use]
    pub fn creation_status(mut self, input: ResourceStatus) -> Self {
        self.inner.creation_status = Some(input);
        self
    }
    /// Creation status. Creation is asynchronous.
    #[must_use]
    pub fn set_creation_status(mut self, input: Option<ResourceStatus>) -> Self {
        self.inner.creation_status = input;
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
    /// Consumes the builder and constructs a [`CreateDashboardOutput`].
    #[must_use]
    pub fn build(self) -> CreateDashboardOutput {
        self.inner
    }
}

/// QuickSight ListDashboards response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDashboardsOutput {
    /// Dashboards on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_summary_list: Option<Vec<DashboardSummary>>,
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// HTTP status code of the response.
    /// Bound to the HTTP status line, not the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// AWS request ID for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ListDashboardsOutput {
    /// Creates a new builder-style object to manufacture [`ListDashboardsOutput`].
    #[must_use]
    pub fn builder() -> ListDashboardsOutputBuilder {
        ListDashboardsOutputBuilder::default()
    }
}

impl fmt::Display for ListDashboardsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .list("DashboardSummaryList", self.dashboard_summary_list.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .field("Status", self.status)
            .field("RequestId", self.request_id.as_deref())
            .finish()
    }
}

/// A builder for [`ListDashboardsOutput`].
#[derive(Debug, Clone, Default)]
pub struct ListDashboardsOutputBuilder {
    inner: ListDashboardsOutput,
}

impl ListDashboardsOutputBuilder {
    /// Appends an item to `dashboard_summary_list`.
    ///
    /// To override the contents of this collection use [`set_dashboard_summary_list`](Self::set_dashboard_summary_list).
    #[must_use]
    pub fn dashboard_summary_list(mut self, input: DashboardSummary) -> Self {
        self.inner
            .dashboard_summary_list
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Dashboards on this page.
    #[must_use]
    pub fn set_dashboard_summary_list(mut self, input: Option<Vec<DashboardSummary>>) -> Self {
        self.inner.dashboard_summary_list = input;
        self
    }
    /// Token for the next page, absent on the last page.
    #[must_use]
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.inner.next_token = Some(input.into());
        self
    }
    /// Token for the next page, absent on the last page.
    #[must_use]
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.inner.next_token = input;
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
    /// Consumes the builder and constructs a [`ListDashboardsOutput`].
    #[must_use]
    pub fn build(self) -> ListDashboardsOutput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_list_dashboards_page() {
        let raw = r#"{
            "DashboardSummaryList": [
                {"DashboardId": "sales", "Name": "Sales", "PublishedVersionNumber": 1},
                {"DashboardId": "ops", "Name": "Ops"}
            ],
            "NextToken": "page-2",
            "Status": 200,
            "RequestId": "b2c6f5d1-0000-4000-8000-000000000000"
        }"#;
        let output: ListDashboardsOutput = serde_json::from_str(raw).expect("deserialize page");
        let summaries = output.dashboard_summary_list.expect("summaries");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].published_version_number, None);
        assert_eq!(output.next_token.as_deref(), Some("page-2"));
        assert_eq!(output.status, Some(200));
    }

    #[test]
    fn test_should_deserialize_create_dashboard_status() {
        let raw = r#"{"DashboardId": "sales", "CreationStatus": "CREATION_IN_PROGRESS"}"#;
        let output: CreateDashboardOutput = serde_json::from_str(raw).expect("deserialize");
        assert!(output.creation_status.is_some_and(|status| status.is_in_progress()));
    }
}
