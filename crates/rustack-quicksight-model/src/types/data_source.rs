//! Data source connection shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;

// ---------------------------------------------------------------------------
// Engine parameters
// ---------------------------------------------------------------------------

/// Athena connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AthenaParameters {
    /// Athena workgroup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

impl AthenaParameters {
    /// Creates a new builder-style object to manufacture [`AthenaParameters`].
    #[must_use]
    pub fn builder() -> AthenaParametersBuilder {
        AthenaParametersBuilder::default()
    }
}

impl fmt::Display for AthenaParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("WorkGroup", self.work_group.as_deref())
            .finish()
    }
}

/// A builder for [`AthenaParameters`].
#[derive(Debug, Clone, Default)]
pub struct AthenaParametersBuilder {
    inner: AthenaParameters,
}

impl AthenaParametersBuilder {
    /// Athena workgroup.
    #[must_use]
    pub fn work_group(mut self, input: impl Into<String>) -> Self {
        self.inner.work_group = Some(input.into());
        self
    }
    /// Athena workgroup.
    #[must_use]
    pub fn set_work_group(mut self, input: Option<String>) -> Self {
        self.inner.work_group = input;
        self
    }
    /// Consumes the builder and constructs a [`AthenaParameters`].
    #[must_use]
    pub fn build(self) -> AthenaParameters {
        self.inner
    }
}

/// Redshift connection parameters.
///
/// `Host` and `Port` may be omitted when `ClusterId` is set, and the other way
/// round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedshiftParameters {
    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Cluster ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

impl RedshiftParameters {
    /// Creates a new builder-style object to manufacture [`RedshiftParameters`].
    #[must_use]
    pub fn builder() -> RedshiftParametersBuilder {
        RedshiftParametersBuilder::default()
    }
}

impl fmt::Display for RedshiftParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Host", self.host.as_deref())
            .field("Port", self.port)
            .field("Database", self.database.as_deref())
            .field("ClusterId", self.cluster_id.as_deref())
            .finish()
    }
}

/// A builder for [`RedshiftParameters`].
#[derive(Debug, Clone, Default)]
pub struct RedshiftParametersBuilder {
    inner: RedshiftParameters,
}

impl RedshiftParametersBuilder {
    /// Host name.
    #[must_use]
    pub fn host(mut self, input: impl Into<String>) -> Self {
        self.inner.host = Some(input.into());
        self
    }
    /// Host name.
    #[must_use]
    pub fn set_host(mut self, input: Option<String>) -> Self {
        self.inner.host = input;
        self
    }
    /// Port.
    #[must_use]
    pub fn port(mut self, input: i32) -> Self {
        self.inner.port = Some(input);
        self
    }
    /// Port.
    #[must_use]
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.inner.port = input;
        self
    }
    /// Database name.
    #[must_use]
    pub fn database(mut self, input: impl Into<String>) -> Self {
        self.inner.database = Some(input.into());
        self
    }
    /// Database name.
    #[must_use]
    pub fn set_database(mut self, input: Option<String>) -> Self {
        self.inner.database = input;
        self
    }
    /// Cluster ID.
    #[must_use]
    pub fn cluster_id(mut self, input: impl Into<String>) -> Self {
        self.inner.cluster_id = Some(input.into());
        self
    }
    /// Cluster ID.
    #[must_use]
    pub fn set_cluster_id(mut self, input: Option<String>) -> Self {
        self.inner.cluster_id = input;
        self
    }
    /// Consumes the builder and constructs a [`RedshiftParameters`].
    #[must_use]
    pub fn build(self) -> RedshiftParameters {
        self.inner
    }
}

/// S3 location of a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestFileLocation {
    /// Bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Object key of the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ManifestFileLocation {
    /// Creates a new builder-style object to manufacture [`ManifestFileLocation`].
    #[must_use]
    pub fn builder() -> ManifestFileLocationBuilder {
        ManifestFileLocationBuilder::default()
    }
}

impl fmt::Display for ManifestFileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Bucket", self.bucket.as_deref())
            .field("Key", self.key.as_deref())
            .finish()
    }
}

/// A builder for [`ManifestFileLocation`].
#[derive(Debug, Clone, Default)]
pub struct ManifestFileLocationBuilder {
    inner: ManifestFileLocation,
}

impl ManifestFileLocationBuilder {
    /// Bucket name.
    #[must_use]
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner.bucket = Some(input.into());
        self
    }
    /// Bucket name.
    #[must_use]
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner.bucket = input;
        self
    }
    /// Object key of the manifest.
    #[must_use]
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner.key = Some(input.into());
        self
    }
    /// Object key of the manifest.
    #[must_use]
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner.key = input;
        self
    }
    /// Consumes the builder and constructs a [`ManifestFileLocation`].
    #[must_use]
    pub fn build(self) -> ManifestFileLocation {
        self.inner
    }
}

/// S3 connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Parameters {
    /// Where the manifest lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_file_location: Option<ManifestFileLocation>,
}

impl S3Parameters {
    /// Creates a new builder-style object to manufacture [`S3Parameters`].
    #[must_use]
    pub fn builder() -> S3ParametersBuilder {
        S3ParametersBuilder::default()
    }
}

impl fmt::Display for S3Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ManifestFileLocation", self.manifest_file_location.as_ref())
            .finish()
    }
}

/// A builder for [`S3Parameters`].
#[derive(Debug, Clone, Default)]
pub struct S3ParametersBuilder {
    inner: S3Parameters,
}

impl S3ParametersBuilder {
    /// Where the manifest lives.
    #[must_use]
    pub fn manifest_file_location(mut self, input: ManifestFileLocation) -> Self {
        self.inner.manifest_file_location = Some(input);
        self
    }
    /// Where the manifest lives.
    #[must_use]
    pub fn set_manifest_file_location(mut self, input: Option<ManifestFileLocation>) -> Self {
        self.inner.manifest_file_location = input;
        self
    }
    /// Consumes the builder and constructs a [`S3Parameters`].
    #[must_use]
    pub fn build(self) -> S3Parameters {
        self.inner
    }
}

/// PostgreSQL connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostgreSqlParameters {
    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl PostgreSqlParameters {
    /// Creates a new builder-style object to manufacture [`PostgreSqlParameters`].
    #[must_use]
    pub fn builder() -> PostgreSqlParametersBuilder {
        PostgreSqlParametersBuilder::default()
    }
}

impl fmt::Display for PostgreSqlParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Host", self.host.as_deref())
            .field("Port", self.port)
            .field("Database", self.database.as_deref())
            .finish()
    }
}

/// A builder for [`PostgreSqlParameters`].
#[derive(Debug, Clone, Default)]
pub struct PostgreSqlParametersBuilder {
    inner: PostgreSqlParameters,
}

impl PostgreSqlParametersBuilder {
    /// Host name.
    #[must_use]
    pub fn host(mut self, input: impl Into<String>) -> Self {
        self.inner.host = Some(input.into());
        self
    }
    /// Host name.
    #[must_use]
    pub fn set_host(mut self, input: Option<String>) -> Self {
        self.inner.host = input;
        self
    }
    /// Port.
    #[must_use]
    pub fn port(mut self, input: i32) -> Self {
        self.inner.port = Some(input);
        self
    }
    /// Port.
    #[must_use]
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.inner.port = input;
        self
    }
    /// Database name.
    #[must_use]
    pub fn database(mut self, input: impl Into<String>) -> Self {
        self.inner.database = Some(input.into());
        self
    }
    /// Database name.
    #[must_use]
    pub fn set_database(mut self, input: Option<String>) -> Self {
        self.inner.database = input;
        self
    }
    /// Consumes the builder and constructs a [`PostgreSqlParameters`].
    #[must_use]
    pub fn build(self) -> PostgreSqlParameters {
        self.inner
    }
}

/// MySQL connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MySqlParameters {
    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl MySqlParameters {
    /// Creates a new builder-style object to manufacture [`MySqlParameters`].
    #[must_use]
    pub fn builder() -> MySqlParametersBuilder {
        MySqlParametersBuilder::default()
    }
}

impl fmt::Display for MySqlParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Host", self.host.as_deref())
            .field("Port", self.port)
            .field("Database", self.database.as_deref())
            .finish()
    }
}

/// A builder for [`MySqlParameters`].
#[derive(Debug, Clone, Default)]
pub struct MySqlParametersBuilder {
    inner: MySqlParameters,
}

impl MySqlParametersBuilder {
    /// Host name.
    #[must_use]
    pub fn host(mut self, input: impl Into<String>) -> Self {
        self.inner.host = Some(input.into());
        self
    }
    /// Host name.
    #[must_use]
    pub fn set_host(mut self, input: Option<String>) -> Self {
        self.inner.host = input;
        self
    }
    /// Port.
    #[must_use]
    pub fn port(mut self, input: i32) -> Self {
        self.inner.port = Some(input);
        self
    }
    /// Port.
    #[must_use]
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.inner.port = input;
        self
    }
    /// Database name.
    #[must_use]
    pub fn database(mut self, input: impl Into<String>) -> Self {
        self.inner.database = Some(input.into());
        self
    }
    /// Database name.
    #[must_use]
    pub fn set_database(mut self, input: Option<String>) -> Self {
        self.inner.database = input;
        self
    }
    /// Consumes the builder and constructs a [`MySqlParameters`].
    #[must_use]
    pub fn build(self) -> MySqlParameters {
        self.inner
    }
}

/// Engine-specific connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceParameters {
    /// Athena.
    AthenaParameters(AthenaParameters),
    /// Redshift.
    RedshiftParameters(RedshiftParameters),
    /// S3.
    S3Parameters(S3Parameters),
    /// PostgreSQL.
    PostgreSqlParameters(PostgreSqlParameters),
    /// MySQL.
    MySqlParameters(MySqlParameters),
}

impl DataSourceParameters {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::AthenaParameters(_) => "AthenaParameters",
            Self::RedshiftParameters(_) => "RedshiftParameters",
            Self::S3Parameters(_) => "S3Parameters",
            Self::PostgreSqlParameters(_) => "PostgreSqlParameters",
            Self::MySqlParameters(_) => "MySqlParameters",
        }
    }

    /// Returns the inner value if this is [`DataSourceParameters::AthenaParameters`].
    #[must_use]
    pub fn as_athena_parameters(&self) -> Option<&AthenaParameters> {
        match self {
            Self::AthenaParameters(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`DataSourceParameters::RedshiftParameters`].
    #[must_use]
    pub fn as_redshift_parameters(&self) -> Option<&RedshiftParameters> {
        match self {
            Self::RedshiftParameters(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`DataSourceParameters::S3Parameters`].
    #[must_use]
    pub fn as_s3_parameters(&self) -> Option<&S3Parameters> {
        match self {
            Self::S3Parameters(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`DataSourceParameters::PostgreSqlParameters`].
    #[must_use]
    pub fn as_postgresql_parameters(&self) -> Option<&PostgreSqlParameters> {
        match self {
            Self::PostgreSqlParameters(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`DataSourceParameters::MySqlParameters`].
    #[must_use]
    pub fn as_mysql_parameters(&self) -> Option<&MySqlParameters> {
        match self {
            Self::MySqlParameters(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for DataSourceParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AthenaParameters(value) => display::variant(f, "AthenaParameters", value),
            Self::RedshiftParameters(value) => display::variant(f, "RedshiftParameters", value),
            Self::S3Parameters(value) => display::variant(f, "S3Parameters", value),
            Self::PostgreSqlParameters(value) => display::variant(f, "PostgreSqlParameters", value),
            Self::MySqlParameters(value) => display::variant(f, "MySqlParameters", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Credentials and connectivity
// ---------------------------------------------------------------------------

/// User name and password for a data source.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialPair {
    /// User name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password. Never rendered by `Display` or `Debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Other endpoints the same credentials are valid for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_data_source_parameters: Option<Vec<DataSourceParameters>>,
}

impl CredentialPair {
    /// Creates a new builder-style object to manufacture [`CredentialPair`].
    #[must_use]
    pub fn builder() -> CredentialPairBuilder {
        CredentialPairBuilder::default()
    }
}

impl fmt::Display for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Username", self.username.as_deref())
            .sensitive("Password", self.password.as_ref())
            .list("AlternateDataSourceParameters", self.alternate_data_source_parameters.as_deref())
            .finish()
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| display::REDACTED))
            .field(
                "alternate_data_source_parameters",
                &self.alternate_data_source_parameters,
            )
            .finish()
    }
}

/// A builder for [`CredentialPair`].
#[derive(Debug, Clone, Default)]
pub struct CredentialPairBuilder {
    inner: CredentialPair,
}

impl CredentialPairBuilder {
    /// User name.
    #[must_use]
    pub fn username(mut self, input: impl Into<String>) -> Self {
        self.inner.username = Some(input.into());
        self
    }
    /// User name.
    #[must_use]
    pub fn set_username(mut self, input: Option<String>) -> Self {
        self.inner.username = input;
        self
    }
    /// Password. Never rendered by `Display` or `Debug`.
    #[must_use]
    pub fn password(mut self, input: impl Into<String>) -> Self {
        self.inner.password = Some(input.into());
        self
    }
    /// Password. Never rendered by `Display` or `Debug`.
    #[must_use]
    pub fn set_password(mut self, input: Option<String>) -> Self {
        self.inner.password = input;
        self
    }
    /// Appends an item to `alternate_data_source_parameters`.
    ///
    /// To override the contents of this collection use [`set_alternate_data_source_parameters`](Self::set_alternate_data_source_parameters).
    #[must_use]
    pub fn alternate_data_source_parameters(mut self, input: DataSourceParameters) -> Self {
        self.inner
            .alternate_data_source_parameters
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Other endpoints the same credentials are valid for.
    #[must_use]
    pub fn set_alternate_data_source_parameters(
        mut self,
        input: Option<Vec<DataSourceParameters>>,
    ) -> Self {
        self.inner.alternate_data_source_parameters = input;
        self
    }
    /// Consumes the builder and constructs a [`CredentialPair`].
    #[must_use]
    pub fn build(self) -> CredentialPair {
        self.inner
    }
}

/// Credentials QuickSight uses to connect.
///
/// Set either `CredentialPair` or `CopySourceArn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceCredentials {
    /// Explicit credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_pair: Option<CredentialPair>,
    /// ARN of a data source whose credentials are reused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_source_arn: Option<String>,
}

impl DataSourceCredentials {
    /// Creates a new builder-style object to manufacture [`DataSourceCredentials`].
    #[must_use]
    pub fn builder() -> DataSourceCredentialsBuilder {
        DataSourceCredentialsBuilder::default()
    }
}

impl fmt::Display for DataSourceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("CredentialPair", self.credential_pair.as_ref())
            .field("CopySourceArn", self.copy_source_arn.as_deref())
            .finish()
    }
}

/// A builder for [`DataSourceCredentials`].
#[derive(Debug, Clone, Default)]
pub struct DataSourceCredentialsBuilder {
    inner: DataSourceCredentials,
}

impl DataSourceCredentialsBuilder {
    /// Explicit credentials.
    #[must_use]
    pub fn credential_pair(mut self, input: CredentialPair) -> Self {
        self.inner.credential_pair = Some(input);
        self
    }
    /// Explicit credentials.
    #[must_use]
    pub fn set_credential_pair(mut self, input: Option<CredentialPair>) -> Self {
        self.inner.credential_pair = input;
        self
    }
    /// ARN of a data source whose credentials are reused.
    #[must_use]
    pub fn copy_source_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.copy_source_arn = Some(input.into());
        self
    }
    /// ARN of a data source whose credentials are reused.
    #[must_use]
    pub fn set_copy_source_arn(mut self, input: Option<String>) -> Self {
        self.inner.copy_source_arn = input;
        self
    }
    /// Consumes the builder and constructs a [`DataSourceCredentials`].
    #[must_use]
    pub fn build(self) -> DataSourceCredentials {
        self.inner
    }
}

/// SSL settings of a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SslProperties {
    /// Disable SSL. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,
}

impl SslProperties {
    /// Creates a new builder-style object to manufacture [`SslProperties`].
    #[must_use]
    pub fn builder() -> SslPropertiesBuilder {
        SslPropertiesBuilder::default()
    }
}

impl fmt::Display for SslProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("DisableSsl", self.disable_ssl)
            .finish()
    }
}

/// A builder for [`SslProperties`].
#[derive(Debug, Clone, Default)]
pub struct SslPropertiesBuilder {
    inner: SslProperties,
}

impl SslPropertiesBuilder {
    /// Disable SSL. Defaults to `false`.
    #[must_use]
    pub fn disable_ssl(mut self, input: bool) -> Self {
        self.inner.disable_ssl = Some(input);
        self
    }
    /// Disable SSL. Defaults to `false`.
    #[must_use]
    pub fn set_disable_ssl(mut self, input: Option<bool>) -> Self {
        self.inner.disable_ssl = input;
        self
    }
    /// Consumes the builder and constructs a [`SslProperties`].
    #[must_use]
    pub fn build(self) -> SslProperties {
        self.inner
    }
}

/// VPC connection used to reach a data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConnectionProperties {
    /// ARN of the VPC connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_connection_arn: Option<String>,
}

impl VpcConnectionProperties {
    /// Creates a new builder-style object to manufacture [`VpcConnectionProperties`].
    #[must_use]
    pub fn builder() -> VpcConnectionPropertiesBuilder {
        VpcConnectionPropertiesBuilder::default()
    }
}

impl fmt::Display for VpcConnectionProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("VpcConnectionArn", self.vpc_connection_arn.as_deref())
            .finish()
    }
}

/// A builder for [`VpcConnectionProperties`].
#[derive(Debug, Clone, Default)]
pub struct VpcConnectionPropertiesBuilder {
    inner: VpcConnectionProperties,
}

impl VpcConnectionPropertiesBuilder {
    /// ARN of the VPC connection.
    #[must_use]
    pub fn vpc_connection_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.vpc_connection_arn = Some(input.into());
        self
    }
    /// ARN of the VPC connection.
    #[must_use]
    pub fn set_vpc_connection_arn(mut self, input: Option<String>) -> Self {
        self.inner.vpc_connection_arn = input;
        self
    }
    /// Consumes the builder and constructs a [`VpcConnectionProperties`].
    #[must_use]
    pub fn build(self) -> VpcConnectionProperties {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::REDACTED;

    #[test]
    fn test_should_redact_password() {
        let pair = CredentialPair::builder()
            .username("analyst")
            .password("hunter2")
            .build();
        let rendered = pair.to_string();
        assert_eq!(rendered, format!("{{Username: analyst,Password: {REDACTED}}}"));
        assert!(!rendered.contains("hunter2"));
        assert_eq!(pair.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_should_redact_password_inside_credentials() {
        let credentials = DataSourceCredentials::builder()
            .credential_pair(
                CredentialPair::builder()
                    .username("analyst")
                    .password("hunter2")
                    .build(),
            )
            .build();
        assert!(!credentials.to_string().contains("hunter2"));
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }

    #[test]
    fn test_should_redact_password_in_debug_output() {
        let builder = CredentialPair::builder().username("analyst").password("hunter2");
        let pair = builder.clone().build();
        let rendered = format!("{pair:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
        assert!(rendered.contains("analyst"));
        assert!(!format!("{builder:?}").contains("hunter2"));

        let anonymous = CredentialPair::builder().username("analyst").build();
        assert!(format!("{anonymous:?}").contains("password: None"));
    }

    #[test]
    fn test_should_serialize_parameters_as_single_key_object() {
        let parameters = DataSourceParameters::RedshiftParameters(
            RedshiftParameters::builder()
                .cluster_id("analytics")
                .database("dev")
                .build(),
        );
        assert_eq!(
            serde_json::to_value(&parameters).expect("serialize parameters"),
            serde_json::json!({"RedshiftParameters": {"Database": "dev", "ClusterId": "analytics"}})
        );
        assert!(parameters.as_redshift_parameters().is_some());
        assert!(parameters.as_athena_parameters().is_none());
    }

    #[test]
    fn test_should_parse_alternate_parameters() {
        let raw = r#"{
            "Username": "analyst",
            "AlternateDataSourceParameters": [
                {"PostgreSqlParameters": {"Host": "db.internal", "Port": 5432, "Database": "sales"}},
                {"S3Parameters": {"ManifestFileLocation": {"Bucket": "b", "Key": "manifest.json"}}}
            ]
        }"#;
        let pair: CredentialPair = serde_json::from_str(raw).expect("deserialize pair");
        let alternates = pair.alternate_data_source_parameters.expect("alternates");
        assert_eq!(
            alternates[0]
                .as_postgresql_parameters()
                .and_then(|p| p.port),
            Some(5432)
        );
        assert_eq!(alternates[1].member_name(), "S3Parameters");
        assert!(pair.password.is_none());
    }

    #[test]
    fn test_should_render_ssl_and_vpc_properties() {
        let ssl = SslProperties::builder().disable_ssl(false).build();
        assert_eq!(ssl.to_string(), "{DisableSsl: false}");
        let vpc = VpcConnectionProperties::builder()
            .vpc_connection_arn("arn:aws:quicksight:us-east-1:111122223333:vpcConnection/v1")
            .build();
        assert_eq!(
            serde_json::to_string(&vpc).expect("serialize vpc"),
            r#"{"VpcConnectionArn":"arn:aws:quicksight:us-east-1:111122223333:vpcConnection/v1"}"#
        );
    }

    #[test]
    fn test_should_render_union_member() {
        let athena = DataSourceParameters::AthenaParameters(
            AthenaParameters::builder().work_group("primary").build(),
        );
        assert_eq!(athena.to_string(), "{AthenaParameters: {WorkGroup: primary}}");
        let mysql = DataSourceParameters::MySqlParameters(
            MySqlParameters::builder().host("h").port(3306).build(),
        );
        assert_eq!(mysql.to_string(), "{MySqlParameters: {Host: h,Port: 3306}}");
    }
}
