//! Shared QuickSight types: closed enums and the nested shapes requests and
//! responses are built from.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]` to match the QuickSight
//! REST-JSON field names. Every field is optional; absent fields are skipped on
//! serialization.

pub mod common;
pub mod dashboard;
pub mod data_set;
pub mod data_source;
pub mod enums;
pub mod user;

pub use common::{ResourcePermission, ResourcePermissionBuilder, Tag, TagBuilder};
pub use dashboard::{
    AdHocFilteringOption, AdHocFilteringOptionBuilder, DashboardPublishOptions,
    DashboardPublishOptionsBuilder, DashboardSourceEntity, DashboardSourceTemplate,
    DashboardSourceTemplateBuilder, DashboardSummary, DashboardSummaryBuilder, DataSetReference,
    DataSetReferenceBuilder, DateTimeParameter, DateTimeParameterBuilder, ExportToCSVOption,
    ExportToCSVOptionBuilder, IntegerParameter, IntegerParameterBuilder, Parameters,
    ParametersBuilder, SheetControlsOption, SheetControlsOptionBuilder, StringParameter,
    StringParameterBuilder,
};
pub use data_set::{
    CalculatedColumn, CalculatedColumnBuilder, CastColumnTypeOperation,
    CastColumnTypeOperationBuilder, ColumnGroup, ColumnGroupColumnSchema,
    ColumnGroupColumnSchemaBuilder, ColumnGroupSchema, ColumnGroupSchemaBuilder, ColumnTag,
    CreateColumnsOperation, CreateColumnsOperationBuilder, CustomSql, CustomSqlBuilder,
    FilterOperation, FilterOperationBuilder, GeoSpatialColumnGroup, GeoSpatialColumnGroupBuilder,
    InputColumn, InputColumnBuilder, JoinInstruction, JoinInstructionBuilder, LogicalTable,
    LogicalTableBuilder, LogicalTableSource, PhysicalTable, ProjectOperation,
    ProjectOperationBuilder, RelationalTable, RelationalTableBuilder, RenameColumnOperation,
    RenameColumnOperationBuilder, S3Source, S3SourceBuilder, TagColumnOperation,
    TagColumnOperationBuilder, TransformOperation, UploadSettings, UploadSettingsBuilder,
};
pub use data_source::{
    AthenaParameters, AthenaParametersBuilder, CredentialPair, CredentialPairBuilder,
    DataSourceCredentials, DataSourceCredentialsBuilder, DataSourceParameters,
    ManifestFileLocation, ManifestFileLocationBuilder, MySqlParameters, MySqlParametersBuilder,
    PostgreSqlParameters, PostgreSqlParametersBuilder, RedshiftParameters,
    RedshiftParametersBuilder, S3Parameters, S3ParametersBuilder, SslProperties,
    SslPropertiesBuilder, VpcConnectionProperties, VpcConnectionPropertiesBuilder,
};
pub use enums::{
    ClosedEnum, ColumnDataType, DashboardBehavior, DashboardUIState, DataSetImportMode,
    DataSourceType, ExceptionResourceType, FileFormat, GeoSpatialCountryCode, GeoSpatialDataRole,
    IdentityType, InputColumnDataType, JoinType, ResourceStatus, TextQualifier, UserRole,
};
pub use user::{User, UserBuilder};
