//! Data source requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::{
    DataSourceCredentials, DataSourceParameters, DataSourceType, ResourcePermission,
    SslProperties, Tag, VpcConnectionProperties,
};

/// QuickSight CreateDataSource request.
///
/// `POST /accounts/{AwsAccountId}/data-sources`
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSourceInput {
    /// Account that owns the data source.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    /// ID for the data source, unique per region and account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    /// Display name of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Engine type of the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DataSourceType>,
    /// Connection parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_parameters: Option<DataSourceParameters>,
    /// Credentials used to connect. Never rendered by `Display` or `Debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DataSourceCredentials>,
    /// Permissions granted on the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    /// VPC connection to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_connection_properties: Option<VpcConnectionProperties>,
    /// SSL settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_properties: Option<SslProperties>,
    /// Tags attached to the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDataSourceInput {
    /// Creates a new builder-style object to manufacture [`CreateDataSourceInput`].
    #[must_use]
    pub fn builder() -> CreateDataSourceInputBuilder {
        CreateDataSourceInputBuilder::default()
    }
}

impl fmt::Display for CreateDataSourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AwsAccountId", self.aws_account_id.as_deref())
            .field("DataSourceId", self.data_source_id.as_deref())
            .field("Name", self.name.as_deref())
            .field("Type", self.r#type)
            .field("DataSourceParameters", self.data_source_parameters.as_ref())
            .sensitive("Credentials", self.credentials.as_ref())
            .list("Permissions", self.permissions.as_deref())
            .field("VpcConnectionProperties", self.vpc_connection_properties.as_ref())
            .field("SslProperties", self.ssl_properties.as_ref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl fmt::Debug for CreateDataSourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateDataSourceInput")
            .field("aws_account_id", &self.aws_account_id)
            .field("data_source_id", &self.data_source_id)
            .field("name", &self.name)
            .field("type", &self.r#type)
            .field("data_source_parameters", &self.data_source_parameters)
            .field("credentials", &self.credentials.as_ref().map(|_| display::REDACTED))
            .field("permissions", &self.permissions)
            .field("vpc_connection_properties", &self.vpc_connection_properties)
            .field("ssl_properties", &self.ssl_properties)
            .field("tags", &self.tags)
            .finish()
    }
}

/// A builder for [`CreateDataSourceInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDataSourceInputBuilder {
    inner: CreateDataSourceInput,
}

impl CreateDataSourceInputBuilder {
    /// Account that owns the data source.
    #[must_use]
    pub fn aws_account_id(mut self, input: impl Into<String>) -> Self {
        self.inner.aws_account_id = Some(input.into());
        self
    }
    /// Account that owns the data source.
    #[must_use]
    pub fn set_aws_account_id(mut self, input: Option<String>) -> Self {
        self.inner.aws_account_id = input;
        self
    }
    /// ID for the data source, unique per region and account.
    #[must_use]
    pub fn data_source_id(mut self, input: impl Into<String>) -> Self {
        self.inner.data_source_id = Some(input.into());
        self
    }
    /// ID for the data source, unique per region and account.
    #[must_use]
    pub fn set_data_source_id(mut self, input: Option<String>) -> Self {
        self.inner.data_source_id = input;
        self
    }
    /// Display name of the data source.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the data source.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Engine type of the data source.
    #[must_use]
    pub fn r#type(mut self, input: DataSourceType) -> Self {
        self.inner.r#type = Some(input);
        self
    }
    /// Engine type of the data source.
    #[must_use]
    pub fn set_type(mut self, input: Option<DataSourceType>) -> Self {
        self.inner.r#type = input;
        self
    }
    /// Connection parameters.
    #[must_use]
    pub fn data_source_parameters(mut self, input: DataSourceParameters) -> Self {
        self.inner.data_source_parameters = Some(input);
        self
    }
    /// Connection parameters.
    #[must_use]
    pub fn set_data_source_parameters(mut self, input: Option<DataSourceParameters>) -> Self {
        self.inner.data_source_parameters = input;
        self
    }
    /// Credentials used to connect. Never rendered by `Display` or `Debug`.
    #[must_use]
    pub fn credentials(mut self, input: DataSourceCredentials) -> Self {
        self.inner.credentials = Some(input);
        self
    }
    /// Credentials used to connect. Never rendered by `Display` or `Debug`.
    #[must_use]
    pub fn set_credentials(mut self, input: Option<DataSourceCredentials>) -> Self {
        self.inner.credentials = input;
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
    /// Permissions granted on the data source.
    #[must_use]
    pub fn set_permissions(mut self, input: Option<Vec<ResourcePermission>>) -> Self {
        self.inner.permissions = input;
        self
    }
    /// VPC connection to use.
    #[must_use]
    pub fn vpc_connection_properties(mut self, input: VpcConnectionProperties) -> Self {
        self.inner.vpc_connection_properties = Some(input);
        self
    }
    /// VPC connection to use.
    #[must_use]
    pub fn set_vpc_connection_properties(mut self, input: Option<VpcConnectionProperties>) -> Self {
        self.inner.vpc_connection_properties = input;
        self
    }
    /// SSL settings.
    #[must_use]
    pub fn ssl_properties(mut self, input: SslProperties) -> Self {
        self.inner.ssl_properties = Some(input);
        self
    }
    /// SSL settings.
    #[must_use]
    pub fn set_ssl_properties(mut self, input: Option<SslProperties>) -> Self {
        self.inner.ssl_properties = input;
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
    /// Tags attached to the data source.
    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.inner.tags = input;
        self
    }
    /// Consumes the builder and constructs a [`CreateDataSourceInput`].
    #[must_use]
    pub fn build(self) -> CreateDataSourceInput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AthenaParameters, CredentialPair};

    #[test]
    fn test_should_redact_credentials_in_request() {
        let input = CreateDataSourceInput::builder()
            .aws_account_id("111122223333")
            .data_source_id("athena")
            .r#type(DataSourceType::Athena)
            .data_source_parameters(DataSourceParameters::AthenaParameters(
                AthenaParameters::builder().work_group("primary").build(),
            ))
            .credentials(
                DataSourceCredentials::builder()
                    .credential_pair(
                        CredentialPair::builder()
                            .username("analyst")
                            .password("hunter2")
                            .build(),
                    )
                    .build(),
            )
            .build();
        let rendered = input.to_string();
        assert!(rendered.contains("Type: ATHENA"));
        assert!(rendered.contains("Credentials: ***Sensitive Data Redacted***"));
        assert!(!rendered.contains("analyst"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_should_redact_credentials_in_debug_output() {
        let credentials = DataSourceCredentials::builder()
            .credential_pair(
                CredentialPair::builder()
                    .username("analyst")
                    .password("hunter2")
                    .build(),
            )
            .build();
        let builder = CreateDataSourceInput::builder()
            .data_source_id("athena")
            .credentials(credentials);
        let rendered = format!("{:?}", builder.clone().build());
        assert!(rendered.contains("data_source_id: Some(\"athena\")"));
        assert!(rendered.contains("credentials: Some(\"***Sensitive Data Redacted***\")"));
        assert!(!rendered.contains("analyst"));
        assert!(!format!("{builder:?}").contains("hunter2"));
    }

    #[test]
    fn test_should_serialize_type_and_ssl() {
        let input = CreateDataSourceInput::builder()
            .r#type(DataSourceType::Redshift)
            .ssl_properties(SslProperties::builder().disable_ssl(true).build())
            .build();
        assert_eq!(
            serde_json::to_value(&input).expect("serialize request"),
            serde_json::json!({"Type": "REDSHIFT", "SslProperties": {"DisableSsl": true}})
        );
    }

    #[test]
    fn test_should_reject_unknown_data_source_type() {
        let raw = r#"{"Type": "ORACLE"}"#;
        assert!(serde_json::from_str::<CreateDataSourceInput>(raw).is_err());
    }
}
