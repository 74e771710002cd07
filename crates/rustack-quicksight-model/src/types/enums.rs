//! Closed-set string enums.
//!
//! Every enum here is a fixed table of QuickSight tokens. Variants use Rust
//! `PascalCase` names with `#[serde(rename)]` mapping to the wire string.
//! Parsing is strict: [`ClosedEnum::from_value`] accepts exactly the canonical
//! strings and nothing else, no case folding and no defaulting.
//!
//! [`ExceptionResourceType`] is the one open enum: it annotates
//! server-originated errors and must accept categories the client doesn't
//! know yet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// A closed, compile-time-known set of string tokens.
pub trait ClosedEnum: Sized + Copy + 'static {
    /// Name used in parse errors.
    const TYPE_NAME: &'static str;

    /// Every token, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the canonical wire string.
    fn as_str(&self) -> &'static str;

    /// Exact lookup of a canonical string. Implementors match the table only.
    fn match_value(value: &str) -> Option<Self>;

    /// Parse a canonical string.
    ///
    /// # Errors
    ///
    /// [`ParseEnumError::Empty`] for an empty string,
    /// [`ParseEnumError::Unrecognized`] for anything that isn't a canonical
    /// string of this enum.
    fn from_value(value: &str) -> Result<Self, ParseEnumError> {
        if value.is_empty() {
            tracing::debug!(type_name = Self::TYPE_NAME, "rejected empty enum value");
            return Err(ParseEnumError::Empty {
                type_name: Self::TYPE_NAME,
            });
        }
        Self::match_value(value).ok_or_else(|| {
            tracing::debug!(type_name = Self::TYPE_NAME, value, "rejected unknown enum value");
            ParseEnumError::Unrecognized {
                type_name: Self::TYPE_NAME,
                value: value.to_owned(),
            }
        })
    }

    /// Parse a possibly absent string. Absent input is treated as empty.
    ///
    /// # Errors
    ///
    /// Same as [`ClosedEnum::from_value`].
    fn from_optional(value: Option<&str>) -> Result<Self, ParseEnumError> {
        Self::from_value(value.unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// The type of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceType {
    #[serde(rename = "ADOBE_ANALYTICS")]
    AdobeAnalytics,
    #[serde(rename = "AMAZON_ELASTICSEARCH")]
    AmazonElasticsearch,
    #[serde(rename = "ATHENA")]
    Athena,
    #[serde(rename = "AURORA")]
    Aurora,
    #[serde(rename = "AURORA_POSTGRESQL")]
    AuroraPostgresql,
    #[serde(rename = "AWS_IOT_ANALYTICS")]
    AwsIotAnalytics,
    #[serde(rename = "GITHUB")]
    Github,
    #[serde(rename = "JIRA")]
    Jira,
    #[serde(rename = "MARIADB")]
    Mariadb,
    #[serde(rename = "MYSQL")]
    Mysql,
    #[serde(rename = "POSTGRESQL")]
    Postgresql,
    #[serde(rename = "PRESTO")]
    Presto,
    #[serde(rename = "REDSHIFT")]
    Redshift,
    #[serde(rename = "S3")]
    S3,
    #[serde(rename = "SALESFORCE")]
    Salesforce,
    #[serde(rename = "SERVICENOW")]
    Servicenow,
    #[serde(rename = "SNOWFLAKE")]
    Snowflake,
    #[serde(rename = "SPARK")]
    Spark,
    #[serde(rename = "SQLSERVER")]
    Sqlserver,
    #[serde(rename = "TERADATA")]
    Teradata,
    #[serde(rename = "TWITTER")]
    Twitter,
}

impl ClosedEnum for DataSourceType {
    const TYPE_NAME: &'static str = "DataSourceType";
    const VALUES: &'static [Self] = &[
        Self::AdobeAnalytics,
        Self::AmazonElasticsearch,
        Self::Athena,
        Self::Aurora,
        Self::AuroraPostgresql,
        Self::AwsIotAnalytics,
        Self::Github,
        Self::Jira,
        Self::Mariadb,
        Self::Mysql,
        Self::Postgresql,
        Self::Presto,
        Self::Redshift,
        Self::S3,
        Self::Salesforce,
        Self::Servicenow,
        Self::Snowflake,
        Self::Spark,
        Self::Sqlserver,
        Self::Teradata,
        Self::Twitter,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::AdobeAnalytics => "ADOBE_ANALYTICS",
            Self::AmazonElasticsearch => "AMAZON_ELASTICSEARCH",
            Self::Athena => "ATHENA",
            Self::Aurora => "AURORA",
            Self::AuroraPostgresql => "AURORA_POSTGRESQL",
            Self::AwsIotAnalytics => "AWS_IOT_ANALYTICS",
            Self::Github => "GITHUB",
            Self::Jira => "JIRA",
            Self::Mariadb => "MARIADB",
            Self::Mysql => "MYSQL",
            Self::Postgresql => "POSTGRESQL",
            Self::Presto => "PRESTO",
            Self::Redshift => "REDSHIFT",
            Self::S3 => "S3",
            Self::Salesforce => "SALESFORCE",
            Self::Servicenow => "SERVICENOW",
            Self::Snowflake => "SNOWFLAKE",
            Self::Spark => "SPARK",
            Self::Sqlserver => "SQLSERVER",
            Self::Teradata => "TERADATA",
            Self::Twitter => "TWITTER",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "ADOBE_ANALYTICS" => Some(Self::AdobeAnalytics),
            "AMAZON_ELASTICSEARCH" => Some(Self::AmazonElasticsearch),
            "ATHENA" => Some(Self::Athena),
            "AURORA" => Some(Self::Aurora),
            "AURORA_POSTGRESQL" => Some(Self::AuroraPostgresql),
            "AWS_IOT_ANALYTICS" => Some(Self::AwsIotAnalytics),
            "GITHUB" => Some(Self::Github),
            "JIRA" => Some(Self::Jira),
            "MARIADB" => Some(Self::Mariadb),
            "MYSQL" => Some(Self::Mysql),
            "POSTGRESQL" => Some(Self::Postgresql),
            "PRESTO" => Some(Self::Presto),
            "REDSHIFT" => Some(Self::Redshift),
            "S3" => Some(Self::S3),
            "SALESFORCE" => Some(Self::Salesforce),
            "SERVICENOW" => Some(Self::Servicenow),
            "SNOWFLAKE" => Some(Self::Snowflake),
            "SPARK" => Some(Self::Spark),
            "SQLSERVER" => Some(Self::Sqlserver),
            "TERADATA" => Some(Self::Teradata),
            "TWITTER" => Some(Self::Twitter),
            _ => None,
        }
    }
}

/// Import mode of a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSetImportMode {
    /// Data is imported into SPICE.
    #[serde(rename = "SPICE")]
    Spice,
    /// Queries go to the data source directly.
    #[serde(rename = "DIRECT_QUERY")]
    DirectQuery,
}

impl ClosedEnum for DataSetImportMode {
    const TYPE_NAME: &'static str = "DataSetImportMode";
    const VALUES: &'static [Self] = &[Self::Spice, Self::DirectQuery];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Spice => "SPICE",
            Self::DirectQuery => "DIRECT_QUERY",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "SPICE" => Some(Self::Spice),
            "DIRECT_QUERY" => Some(Self::DirectQuery),
            _ => None,
        }
    }
}

/// Lifecycle status of a dashboard, data set or data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceStatus {
    #[serde(rename = "CREATION_IN_PROGRESS")]
    CreationInProgress,
    #[serde(rename = "CREATION_SUCCESSFUL")]
    CreationSuccessful,
    #[serde(rename = "CREATION_FAILED")]
    CreationFailed,
    #[serde(rename = "UPDATE_IN_PROGRESS")]
    UpdateInProgress,
    #[serde(rename = "UPDATE_SUCCESSFUL")]
    UpdateSuccessful,
    #[serde(rename = "UPDATE_FAILED")]
    UpdateFailed,
}

impl ResourceStatus {
    /// Returns `true` if the resource is still being created or updated.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::CreationInProgress | Self::UpdateInProgress)
    }
}

impl ClosedEnum for ResourceStatus {
    const TYPE_NAME: &'static str = "ResourceStatus";
    const VALUES: &'static [Self] = &[
        Self::CreationInProgress,
        Self::CreationSuccessful,
        Self::CreationFailed,
        Self::UpdateInProgress,
        Self::UpdateSuccessful,
        Self::UpdateFailed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::CreationInProgress => "CREATION_IN_PROGRESS",
            Self::CreationSuccessful => "CREATION_SUCCESSFUL",
            Self::CreationFailed => "CREATION_FAILED",
            Self::UpdateInProgress => "UPDATE_IN_PROGRESS",
            Self::UpdateSuccessful => "UPDATE_SUCCESSFUL",
            Self::UpdateFailed => "UPDATE_FAILED",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "CREATION_IN_PROGRESS" => Some(Self::CreationInProgress),
            "CREATION_SUCCESSFUL" => Some(Self::CreationSuccessful),
            "CREATION_FAILED" => Some(Self::CreationFailed),
            "UPDATE_IN_PROGRESS" => Some(Self::UpdateInProgress),
            "UPDATE_SUCCESSFUL" => Some(Self::UpdateSuccessful),
            "UPDATE_FAILED" => Some(Self::UpdateFailed),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard publishing
// ---------------------------------------------------------------------------

/// Whether a dashboard feature is available to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardBehavior {
    #[serde(rename = "ENABLED")]
    Enabled,
    #[serde(rename = "DISABLED")]
    Disabled,
}

impl ClosedEnum for DashboardBehavior {
    const TYPE_NAME: &'static str = "DashboardBehavior";
    const VALUES: &'static [Self] = &[Self::Enabled, Self::Disabled];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "ENABLED" => Some(Self::Enabled),
            "DISABLED" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Initial visibility of the sheet controls pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardUIState {
    #[serde(rename = "EXPANDED")]
    Expanded,
    #[serde(rename = "COLLAPSED")]
    Collapsed,
}

impl ClosedEnum for DashboardUIState {
    const TYPE_NAME: &'static str = "DashboardUIState";
    const VALUES: &'static [Self] = &[Self::Expanded, Self::Collapsed];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "EXPANDED",
            Self::Collapsed => "COLLAPSED",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "EXPANDED" => Some(Self::Expanded),
            "COLLAPSED" => Some(Self::Collapsed),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Columns and tables
// ---------------------------------------------------------------------------

/// Data type a column can be cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnDataType {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "DECIMAL")]
    Decimal,
    #[serde(rename = "DATETIME")]
    Datetime,
}

impl ClosedEnum for ColumnDataType {
    const TYPE_NAME: &'static str = "ColumnDataType";
    const VALUES: &'static [Self] = &[Self::String, Self::Integer, Self::Decimal, Self::Datetime];

    fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
            Self::Datetime => "DATETIME",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "STRING" => Some(Self::String),
            "INTEGER" => Some(Self::Integer),
            "DECIMAL" => Some(Self::Decimal),
            "DATETIME" => Some(Self::Datetime),
            _ => None,
        }
    }
}

/// Data type of a physical-table input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputColumnDataType {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "DECIMAL")]
    Decimal,
    #[serde(rename = "DATETIME")]
    Datetime,
    #[serde(rename = "BIT")]
    Bit,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "JSON")]
    Json,
}

impl ClosedEnum for InputColumnDataType {
    const TYPE_NAME: &'static str = "InputColumnDataType";
    const VALUES: &'static [Self] = &[
        Self::String,
        Self::Integer,
        Self::Decimal,
        Self::Datetime,
        Self::Bit,
        Self::Boolean,
        Self::Json,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
            Self::Datetime => "DATETIME",
            Self::Bit => "BIT",
            Self::Boolean => "BOOLEAN",
            Self::Json => "JSON",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "STRING" => Some(Self::String),
            "INTEGER" => Some(Self::Integer),
            "DECIMAL" => Some(Self::Decimal),
            "DATETIME" => Some(Self::Datetime),
            "BIT" => Some(Self::Bit),
            "BOOLEAN" => Some(Self::Boolean),
            "JSON" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Join type of a logical-table join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    #[serde(rename = "INNER")]
    Inner,
    #[serde(rename = "OUTER")]
    Outer,
    #[serde(rename = "LEFT")]
    Left,
    #[serde(rename = "RIGHT")]
    Right,
}

impl ClosedEnum for JoinType {
    const TYPE_NAME: &'static str = "JoinType";
    const VALUES: &'static [Self] = &[Self::Inner, Self::Outer, Self::Left, Self::Right];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "INNER" => Some(Self::Inner),
            "OUTER" => Some(Self::Outer),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Country code of a geospatial column group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoSpatialCountryCode {
    #[serde(rename = "US")]
    Us,
}

impl ClosedEnum for GeoSpatialCountryCode {
    const TYPE_NAME: &'static str = "GeoSpatialCountryCode";
    const VALUES: &'static [Self] = &[Self::Us];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "US" => Some(Self::Us),
            _ => None,
        }
    }
}

/// Geographic role a column can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoSpatialDataRole {
    #[serde(rename = "COUNTRY")]
    Country,
    #[serde(rename = "STATE")]
    State,
    #[serde(rename = "COUNTY")]
    County,
    #[serde(rename = "CITY")]
    City,
    #[serde(rename = "POSTCODE")]
    Postcode,
    #[serde(rename = "LONGITUDE")]
    Longitude,
    #[serde(rename = "LATITUDE")]
    Latitude,
}

impl ClosedEnum for GeoSpatialDataRole {
    const TYPE_NAME: &'static str = "GeoSpatialDataRole";
    const VALUES: &'static [Self] = &[
        Self::Country,
        Self::State,
        Self::County,
        Self::City,
        Self::Postcode,
        Self::Longitude,
        Self::Latitude,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "COUNTRY",
            Self::State => "STATE",
            Self::County => "COUNTY",
            Self::City => "CITY",
            Self::Postcode => "POSTCODE",
            Self::Longitude => "LONGITUDE",
            Self::Latitude => "LATITUDE",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "COUNTRY" => Some(Self::Country),
            "STATE" => Some(Self::State),
            "COUNTY" => Some(Self::County),
            "CITY" => Some(Self::City),
            "POSTCODE" => Some(Self::Postcode),
            "LONGITUDE" => Some(Self::Longitude),
            "LATITUDE" => Some(Self::Latitude),
            _ => None,
        }
    }
}

/// Format of an uploaded S3 file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "TSV")]
    Tsv,
    #[serde(rename = "CLF")]
    Clf,
    #[serde(rename = "ELF")]
    Elf,
    #[serde(rename = "XLSX")]
    Xlsx,
    #[serde(rename = "JSON")]
    Json,
}

impl ClosedEnum for FileFormat {
    const TYPE_NAME: &'static str = "FileFormat";
    const VALUES: &'static [Self] = &[
        Self::Csv,
        Self::Tsv,
        Self::Clf,
        Self::Elf,
        Self::Xlsx,
        Self::Json,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
            Self::Clf => "CLF",
            Self::Elf => "ELF",
            Self::Xlsx => "XLSX",
            Self::Json => "JSON",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "CSV" => Some(Self::Csv),
            "TSV" => Some(Self::Tsv),
            "CLF" => Some(Self::Clf),
            "ELF" => Some(Self::Elf),
            "XLSX" => Some(Self::Xlsx),
            "JSON" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Quote character of delimited text uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextQualifier {
    #[serde(rename = "DOUBLE_QUOTE")]
    DoubleQuote,
    #[serde(rename = "SINGLE_QUOTE")]
    SingleQuote,
}

impl ClosedEnum for TextQualifier {
    const TYPE_NAME: &'static str = "TextQualifier";
    const VALUES: &'static [Self] = &[Self::DoubleQuote, Self::SingleQuote];

    fn as_str(&self) -> &'static str {
        match self {
            Self::DoubleQuote => "DOUBLE_QUOTE",
            Self::SingleQuote => "SINGLE_QUOTE",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "DOUBLE_QUOTE" => Some(Self::DoubleQuote),
            "SINGLE_QUOTE" => Some(Self::SingleQuote),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// How a QuickSight user authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityType {
    #[serde(rename = "IAM")]
    Iam,
    #[serde(rename = "QUICKSIGHT")]
    Quicksight,
}

impl ClosedEnum for IdentityType {
    const TYPE_NAME: &'static str = "IdentityType";
    const VALUES: &'static [Self] = &[Self::Iam, Self::Quicksight];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Iam => "IAM",
            Self::Quicksight => "QUICKSIGHT",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "IAM" => Some(Self::Iam),
            "QUICKSIGHT" => Some(Self::Quicksight),
            _ => None,
        }
    }
}

/// Role of a QuickSight user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "AUTHOR")]
    Author,
    #[serde(rename = "READER")]
    Reader,
    #[serde(rename = "RESTRICTED_AUTHOR")]
    RestrictedAuthor,
    #[serde(rename = "RESTRICTED_READER")]
    RestrictedReader,
}

impl ClosedEnum for UserRole {
    const TYPE_NAME: &'static str = "UserRole";
    const VALUES: &'static [Self] = &[
        Self::Admin,
        Self::Author,
        Self::Reader,
        Self::RestrictedAuthor,
        Self::RestrictedReader,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Author => "AUTHOR",
            Self::Reader => "READER",
            Self::RestrictedAuthor => "RESTRICTED_AUTHOR",
            Self::RestrictedReader => "RESTRICTED_READER",
        }
    }

    fn match_value(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "AUTHOR" => Some(Self::Author),
            "READER" => Some(Self::Reader),
            "RESTRICTED_AUTHOR" => Some(Self::RestrictedAuthor),
            "RESTRICTED_READER" => Some(Self::RestrictedReader),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display / FromStr for every closed enum
// ---------------------------------------------------------------------------

macro_rules! impl_closed_enum_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(ClosedEnum::as_str(self))
                }
            }

            impl FromStr for $ty {
                type Err = ParseEnumError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <Self as ClosedEnum>::from_value(s)
                }
            }
        )+
    };
}

impl_closed_enum_traits!(
    DataSourceType,
    DataSetImportMode,
    ResourceStatus,
    DashboardBehavior,
    DashboardUIState,
    ColumnDataType,
    InputColumnDataType,
    JoinType,
    GeoSpatialCountryCode,
    GeoSpatialDataRole,
    FileFormat,
    TextQualifier,
    IdentityType,
    UserRole,
);

// ---------------------------------------------------------------------------
// Open enum for server-originated annotations
// ---------------------------------------------------------------------------

/// Resource category attached to some service errors.
///
/// Stored permissively: a value the client doesn't recognize is kept as
/// [`ExceptionResourceType::Unknown`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionResourceType {
    User,
    Group,
    Namespace,
    AccountSettings,
    IamPolicyAssignment,
    DataSource,
    DataSet,
    VpcConnection,
    Ingestion,
    /// A category this client doesn't know.
    Unknown(String),
}

impl ExceptionResourceType {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "USER",
            Self::Group => "GROUP",
            Self::Namespace => "NAMESPACE",
            Self::AccountSettings => "ACCOUNT_SETTINGS",
            Self::IamPolicyAssignment => "IAMPOLICYASSIGNMENT",
            Self::DataSource => "DATA_SOURCE",
            Self::DataSet => "DATA_SET",
            Self::VpcConnection => "VPC_CONNECTION",
            Self::Ingestion => "INGESTION",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// Returns `true` if the value is one of the known categories.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for ExceptionResourceType {
    fn from(s: &str) -> Self {
        match s {
            "USER" => Self::User,
            "GROUP" => Self::Group,
            "NAMESPACE" => Self::Namespace,
            "ACCOUNT_SETTINGS" => Self::AccountSettings,
            "IAMPOLICYASSIGNMENT" => Self::IamPolicyAssignment,
            "DATA_SOURCE" => Self::DataSource,
            "DATA_SET" => Self::DataSet,
            "VPC_CONNECTION" => Self::VpcConnection,
            "INGESTION" => Self::Ingestion,
            other => {
                tracing::debug!(value = other, "unrecognized exception resource type");
                Self::Unknown(other.to_owned())
            }
        }
    }
}

impl From<String> for ExceptionResourceType {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Unknown(_) => Self::Unknown(s),
            known => known,
        }
    }
}

impl Serialize for ExceptionResourceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExceptionResourceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

impl fmt::Display for ExceptionResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_roundtrip<E: ClosedEnum + PartialEq + fmt::Debug>() {
        for value in E::VALUES {
            assert_eq!(E::from_value(value.as_str()), Ok(*value));
        }
    }

    fn assert_injective<E: ClosedEnum>() {
        let mut seen = std::collections::HashSet::new();
        for value in E::VALUES {
            assert!(seen.insert(value.as_str()), "duplicate {}", value.as_str());
        }
    }

    #[test]
    fn test_should_roundtrip_every_closed_enum() {
        assert_roundtrip::<DataSourceType>();
        assert_roundtrip::<DataSetImportMode>();
        assert_roundtrip::<ResourceStatus>();
        assert_roundtrip::<DashboardBehavior>();
        assert_roundtrip::<DashboardUIState>();
        assert_roundtrip::<ColumnDataType>();
        assert_roundtrip::<InputColumnDataType>();
        assert_roundtrip::<JoinType>();
        assert_roundtrip::<GeoSpatialCountryCode>();
        assert_roundtrip::<GeoSpatialDataRole>();
        assert_roundtrip::<FileFormat>();
        assert_roundtrip::<TextQualifier>();
        assert_roundtrip::<IdentityType>();
        assert_roundtrip::<UserRole>();
    }

    fn assert_serde_matches_table<E>()
    where
        E: ClosedEnum + PartialEq + fmt::Debug + Serialize + serde::de::DeserializeOwned,
    {
        for value in E::VALUES {
            let json = serde_json::to_string(value).expect("serialize token");
            assert_eq!(json, format!("\"{}\"", value.as_str()), "{}", E::TYPE_NAME);
            let parsed: E = serde_json::from_str(&json).expect("deserialize token");
            assert_eq!(parsed, *value);
        }
    }

    #[test]
    fn test_should_agree_between_serde_and_token_table() {
        assert_serde_matches_table::<DataSourceType>();
        assert_serde_matches_table::<DataSetImportMode>();
        assert_serde_matches_table::<ResourceStatus>();
        assert_serde_matches_table::<DashboardBehavior>();
        assert_serde_matches_table::<DashboardUIState>();
        assert_serde_matches_table::<ColumnDataType>();
        assert_serde_matches_table::<InputColumnDataType>();
        assert_serde_matches_table::<JoinType>();
        assert_serde_matches_table::<GeoSpatialCountryCode>();
        assert_serde_matches_table::<GeoSpatialDataRole>();
        assert_serde_matches_table::<FileFormat>();
        assert_serde_matches_table::<TextQualifier>();
        assert_serde_matches_table::<IdentityType>();
        assert_serde_matches_table::<UserRole>();
    }

    #[test]
    fn test_should_map_tokens_injectively() {
        assert_injective::<DataSourceType>();
        assert_injective::<InputColumnDataType>();
        assert_injective::<GeoSpatialDataRole>();
        assert_injective::<UserRole>();
    }

    #[test]
    fn test_should_parse_redshift() {
        assert_eq!(
            DataSourceType::from_value("REDSHIFT"),
            Ok(DataSourceType::Redshift)
        );
    }

    #[test]
    fn test_should_reject_wrong_case() {
        assert_eq!(
            DataSourceType::from_value("redshift"),
            Err(ParseEnumError::Unrecognized {
                type_name: "DataSourceType",
                value: "redshift".to_owned(),
            })
        );
    }

    #[test]
    fn test_should_reject_empty_and_absent_input() {
        let empty = Err(ParseEnumError::Empty {
            type_name: "DashboardBehavior",
        });
        assert_eq!(DashboardBehavior::from_value(""), empty);
        assert_eq!(DashboardBehavior::from_optional(None), empty);
        assert_eq!(
            DashboardBehavior::from_optional(Some("ENABLED")),
            Ok(DashboardBehavior::Enabled)
        );
    }

    #[test]
    fn test_should_reject_unknown_token() {
        let err = JoinType::from_value("NOT_A_REAL_TOKEN").unwrap_err();
        assert!(matches!(err, ParseEnumError::Unrecognized { .. }));
    }

    #[test]
    fn test_should_not_trim_whitespace() {
        assert!(ColumnDataType::from_value(" STRING").is_err());
        assert!(ColumnDataType::from_value("STRING ").is_err());
    }

    #[test]
    fn test_should_parse_through_from_str() {
        let role: UserRole = "RESTRICTED_READER".parse().expect("parse UserRole");
        assert_eq!(role, UserRole::RestrictedReader);
        assert!("Reader".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_should_serialize_canonical_string() {
        let json = serde_json::to_string(&DashboardUIState::Collapsed).expect("serialize");
        assert_eq!(json, r#""COLLAPSED""#);
        let parsed: DataSetImportMode =
            serde_json::from_str(r#""DIRECT_QUERY""#).expect("deserialize");
        assert_eq!(parsed, DataSetImportMode::DirectQuery);
    }

    #[test]
    fn test_should_fail_deserializing_unknown_closed_value() {
        assert!(serde_json::from_str::<FileFormat>(r#""PARQUET""#).is_err());
    }

    #[test]
    fn test_should_display_canonical_string() {
        assert_eq!(DataSourceType::AwsIotAnalytics.to_string(), "AWS_IOT_ANALYTICS");
        assert_eq!(TextQualifier::SingleQuote.to_string(), "SINGLE_QUOTE");
    }

    #[test]
    fn test_should_report_in_progress_status() {
        assert!(ResourceStatus::CreationInProgress.is_in_progress());
        assert!(!ResourceStatus::UpdateFailed.is_in_progress());
    }

    #[test]
    fn test_should_accept_unknown_exception_resource_type() {
        let parsed: ExceptionResourceType =
            serde_json::from_str(r#""TOPIC""#).expect("deserialize");
        assert_eq!(parsed, ExceptionResourceType::Unknown("TOPIC".to_owned()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).expect("serialize"), r#""TOPIC""#);
    }

    #[test]
    fn test_should_parse_known_exception_resource_type() {
        let parsed = ExceptionResourceType::from("IAMPOLICYASSIGNMENT".to_owned());
        assert_eq!(parsed, ExceptionResourceType::IamPolicyAssignment);
        assert!(parsed.is_known());
        assert_eq!(ExceptionResourceType::VpcConnection.to_string(), "VPC_CONNECTION");
    }

    proptest! {
        #[test]
        fn prop_should_reject_every_non_canonical_string(s in "\\PC*") {
            let canonical = DataSourceType::VALUES.iter().any(|v| v.as_str() == s);
            prop_assert_eq!(DataSourceType::from_value(&s).is_ok(), canonical);
        }

        #[test]
        fn prop_should_reject_lowercased_tokens(index in 0..GeoSpatialDataRole::VALUES.len()) {
            let token = GeoSpatialDataRole::VALUES[index].as_str().to_lowercase();
            prop_assert!(GeoSpatialDataRole::from_value(&token).is_err());
        }

        #[test]
        fn prop_should_preserve_any_exception_resource_type(s in "[A-Z_]{1,24}") {
            let parsed = ExceptionResourceType::from(s.as_str());
            prop_assert_eq!(parsed.as_str(), s.as_str());
        }
    }
}
