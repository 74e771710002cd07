//! Dashboard requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::{
    DashboardPublishOptions, DashboardSourceEntity, Parameters, ResourcePermission, Tag,
};

/// QuickSight CreateDashboard request.
///
/// `POST /accounts/{AwsAccountId}/dashboards/{DashboardId}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDashboardInput {
    /// Account that owns the dashboard.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    /// ID for the dashboard, unique per account.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    /// Display name of the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parameter overrides applied at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    /// Permissions granted on the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    /// Entity the dashboard is created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity: Option<DashboardSourceEntity>,
    /// Tags attached to the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Description of the first dashboard version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    /// Publish options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_publish_options: Option<DashboardPublishOptions>,
}

impl CreateDashboardInput {
    /// Creates a new builder-style object to manufacture [`CreateDashboardInput`].
    #[must_use]
    pub fn builder() -> CreateDashboardInputBuilder {
        CreateDashboardInputBuilder::default()
    }
}

impl fmt::Display for CreateDashboardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AwsAccountId", self.aws_account_id.as_deref())
            .field("DashboardId", self.dashboard_id.as_deref())
            .field("Name", self.name.as_deref())
            .field("Parameters", self.parameters.as_ref())
            .list("Permissions", self.permissions.as_deref())
            .field("SourceEntity", self.source_entity.as_ref())
            .list("Tags", self.tags.as_deref())
            .field("VersionDescription", self.version_description.as_deref())
            .field("DashboardPublishOptions", self.dashboard_publish_options.as_ref())
            .finish()
    }
}

/// A builder for [`CreateDashboardInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDashboardInputBuilder {
    inner: CreateDashboardInput,
}

impl CreateDashboardInputBuilder {
    /// Account that owns the dashboard.
    #[must_use]
    pub fn aws_account_id(mut self, input: impl Into<String>) -> Self {
        self.inner.aws_account_id = Some(input.into());
        self
    }
    /// Account that owns the dashboard.
    #[must_use]
    pub fn set_aws_account_id(mut self, input: Option<String>) -> Self {
        self.inner.aws_account_id = input;
        self
    }
    /// ID for the dashboard, unique per account.
    #[must_use]
    pub fn dashboard_id(mut self, input: impl Into<String>) -> Self {
        self.inner.dashboard_id = Some(input.into());
        self
    }
    /// ID for the dashboard, unique per account.
    #[must_use]
    pub fn set_dashboard_id(mut self, input: Option<String>) -> Self {
        self.inner.dashboard_id = input;
        self
    }
    /// Display name of the dashboard.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the dashboard.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Parameter overrides applied at creation.
    #[must_use]
    pub fn parameters(mut self, input: Parameters) -> Self {
        self.inner.parameters = Some(input);
        self
    }
    /// Parameter overrides applied at creation.
    #[must_use]
    pub fn set_parameters(mut self, input: Option<Parameters>) -> Self {
        self.inner.parameters = input;
        self
    }
    /// Appends an item to `permissions`.
    ///
    /// To override the contents of this collection use [`set_permissions`](Self::set_permissions).
    #[must_use]
    pub fn permissions(mut self, input: ResourcePermission) -> Self {
        self.inner
            .permissions
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Permissions granted on the dashboard.
    #[must_use]
    pub fn set_permissions(mut self, input: Option<Vec<ResourcePermission>>) -> Self {
        self.inner.permissions = input;
        self
    }
    /// Entity the dashboard is created from.
    #[must_use]
    pub fn source_entity(mut self, input: DashboardSourceEntity) -> Self {
        self.inner.source_entity = Some(input);
        self
    }
    /// Entity the dashboard is created from.
    #[must_use]
    pub fn set_source_entity(mut self, input: Option<DashboardSourceEntity>) -> Self {
        self.inner.source_entity = input;
        self
    }
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    #[must_use]
    pub fn tags(mut self, input: Tag) -> Self {
        self.inner.tags.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Tags attached to the dashboard.
    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.inner.tags = input;
        self
    }
    /// Description of the first dashboard version.
    #[must_use]
    pub fn version_description(mut self, input: impl Into<String>) -> Self {
        self.inner.version_description = Some(input.into());
        self
    }
    /// Description of the first dashboard version.
    #[must_use]
    pub fn set_version_description(mut self, input: Option<String>) -> Self {
        self.inner.version_description = input;
        self
    }
    /// Publish options.
    #[must_use]
    pub fn dashboard_publish_options(mut self, input: DashboardPublishOptions) -> Self {
        self.inner.dashboard_publish_options = Some(input);
        self
    }
    /// Publish options.
    #[must_use]
    pub fn set_dashboard_publish_options(mut self, input: Option<DashboardPublishOptions>) -> Self {
        self.inner.dashboard_publish_options = input;
        self
    }
    /// Consumes the builder and constructs a [`CreateDashboardInput`].
    #[must_use]
    pub fn build(self) -> CreateDashboardInput {
        self.inner
    }
}

/// QuickSight ListDashboards request.
///
/// `GET /accounts/{AwsAccountId}/dashboards`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDashboardsInput {
    /// Account whose dashboards are listed.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    /// Token from a previous page.
    /// HTTP query: `next-token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 100.
    /// HTTP query: `max-results`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListDashboardsInput {
    /// Creates a new builder-style object to manufacture [`ListDashboardsInput`].
    #[must_use]
    pub fn builder() -> ListDashboardsInputBuilder {
        ListDashboardsInputBuilder::default()
    }
}

impl fmt::Display for ListDashboardsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AwsAccountId", self.aws_account_id.as_deref())
            .field("NextToken", self.next_token.as_deref())
            .field("MaxResults", self.max_results)
            .finish()
    }
}

/// A builder for [`ListDashboardsInput`].
#[derive(Debug, Clone, Default)]
pub struct ListDashboardsInputBuilder {
    inner: ListDashboardsInput,
}

impl ListDashboardsInputBuilder {
    /// Account whose dashboards are listed.
    #[must_use]
    pub fn aws_account_id(mut self, input: impl Into<String>) -> Self {
        self.inner.aws_account_id = Some(input.into());
        self
    }
    /// Account whose dashboards are listed.
    #[must_use]
    pub fn set_aws_account_id(mut self, input: Option<String>) -> Self {
        self.inner.aws_account_id = input;
        self
    }
    /// Token from a previous page.
    #[must_use]
    pub fn next_token(mut self, input: impl Into<String>) -> Self {
        self.inner.next_token = Some(input.into());
        self
    }
    /// Token from a previous page.
    #[must_use]
    pub fn set_next_token(mut self, input: Option<String>) -> Self {
        self.inner.next_token = input;
        self
    }
    /// Page size, 1 to 100.
    #[must_use]
    pub fn max_results(mut self, input: i32) -> Self {
        self.inner.max_results = Some(input);
        self
    }
    /// Page size, 1 to 100.
    #[must_use]
    pub fn set_max_results(mut self, input: Option<i32>) -> Self {
        self.inner.max_results = input;
        self
    }
    /// Consumes the builder and constructs a [`ListDashboardsInput`].
    #[must_use]
    pub fn build(self) -> ListDashboardsInput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AdHocFilteringOption, DashboardBehavior, DashboardSourceTemplate, DataSetReference,
        StringParameter,
    };

    fn create_dashboard() -> CreateDashboardInput {
        CreateDashboardInput::builder()
            .aws_account_id("111122223333")
            .dashboard_id("sales")
            .name("Sales")
            .source_entity(DashboardSourceEntity::SourceTemplate(
                DashboardSourceTemplate::builder()
                    .arn("arn:aws:quicksight:us-east-1:111122223333:template/sales")
                    .data_set_references(
                        DataSetReference::builder()
                            .data_set_placeholder("orders")
                            .data_set_arn("arn:aws:quicksight:us-east-1:111122223333:dataset/orders")
                            .build(),
                    )
                    .build(),
            ))
            .parameters(
                Parameters::builder()
                    .string_parameters(
                        StringParameter::builder()
                            .name("region")
                            .values("emea")
                            .build(),
                    )
                    .build(),
            )
            .dashboard_publish_options(
                DashboardPublishOptions::builder()
                    .ad_hoc_filtering_option(
                        AdHocFilteringOption::builder()
                            .availability_status(DashboardBehavior::Enabled)
                            .build(),
                    )
                    .build(),
            )
            .tags(Tag::builder().key("team").value("bi").build())
            .build()
    }

    #[test]
    fn test_should_roundtrip_create_dashboard_through_json() {
        let input = create_dashboard();
        let json = serde_json::to_string(&input).expect("serialize request");
        let parsed: CreateDashboardInput =
            serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(parsed, input);
        assert!(!json.contains("VersionDescription"));
    }

    #[test]
    fn test_should_render_create_dashboard() {
        let rendered = create_dashboard().to_string();
        assert!(
            rendered.starts_with("{AwsAccountId: 111122223333,DashboardId: sales,Name: Sales,")
        );
        assert!(rendered.contains("AvailabilityStatus: ENABLED"));
        assert!(rendered.contains("Tags: [{Key: team,Value: bi}]"));
    }

    #[test]
    fn test_should_compare_requests_structurally() {
        let mut other = create_dashboard();
        assert_eq!(other, create_dashboard());
        other.version_description = Some("v1".to_owned());
        assert_ne!(other, create_dashboard());
    }

    #[test]
    fn test_should_build_list_dashboards_page_request() {
        let input = ListDashboardsInput::builder()
            .aws_account_id("111122223333")
            .max_results(50)
            .next_token("page-2")
            .build();
        assert_eq!(input.max_results, Some(50));
        assert_eq!(
            input.to_string(),
            "{AwsAccountId: 111122223333,NextToken: page-2,MaxResults: 50}"
        );
    }
}
