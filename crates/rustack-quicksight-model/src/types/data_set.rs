//! Data set shapes.
//!
//! A data set is a map of physical tables (where the rows come from) and a map
//! of logical tables (how they are joined and transformed). Shapes that model
//! "exactly one of" choices on the wire are enums here and serialize as a
//! single-key object, e.g. `{"RelationalTable": {...}}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::enums::{
    ColumnDataType, FileFormat, GeoSpatialCountryCode, GeoSpatialDataRole, InputColumnDataType,
    JoinType, TextQualifier,
};

// ---------------------------------------------------------------------------
// Physical tables
// ---------------------------------------------------------------------------

/// Metadata of one column read from a physical table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputColumn {
    /// Column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Column data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<InputColumnDataType>,
}

impl InputColumn {
    /// Creates a new builder-style object to manufacture [`InputColumn`].
    #[must_use]
    pub fn builder() -> InputColumnBuilder {
        InputColumnBuilder::default()
    }
}

impl fmt::Display for InputColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .field("Type", self.r#type)
            .finish()
    }
}

/// A builder for [`InputColumn`].
#[derive(Debug, Clone, Default)]
pub struct InputColumnBuilder {
    inner: InputColumn,
}

impl InputColumnBuilder {
    /// Column name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Column name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Column data type.
    #[must_use]
    pub fn r#type(mut self, input: InputColumnDataType) -> Self {
        self.inner.r#type = Some(input);
        self
    }
    /// Column data type.
    #[must_use]
    pub fn set_type(mut self, input: Option<InputColumnDataType>) -> Self {
        self.inner.r#type = input;
        self
    }
    /// Consumes the builder and constructs a [`InputColumn`].
    #[must_use]
    pub fn build(self) -> InputColumn {
        self.inner
    }
}

/// Table read from a relational data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelationalTable {
    /// ARN of the data source holding the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_arn: Option<String>,
    /// Schema name, if the data source supports schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Table name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Columns read from the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_columns: Option<Vec<InputColumn>>,
}

impl RelationalTable {
    /// Creates a new builder-style object to manufacture [`RelationalTable`].
    #[must_use]
    pub fn builder() -> RelationalTableBuilder {
        RelationalTableBuilder::default()
    }
}

impl fmt::Display for RelationalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("DataSourceArn", self.data_source_arn.as_deref())
            .field("Schema", self.schema.as_deref())
            .field("Name", self.name.as_deref())
            .list("InputColumns", self.input_columns.as_deref())
            .finish()
    }
}

/// A builder for [`RelationalTable`].
#[derive(Debug, Clone, Default)]
pub struct RelationalTableBuilder {
    inner: RelationalTable,
}

impl RelationalTableBuilder {
    /// ARN of the data source holding the table.
    #[must_use]
    pub fn data_source_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.data_source_arn = Some(input.into());
        self
    }
    /// ARN of the data source holding the table.
    #[must_use]
    pub fn set_data_source_arn(mut self, input: Option<String>) -> Self {
        self.inner.data_source_arn = input;
        self
    }
    /// Schema name, if the data source supports schemas.
    #[must_use]
    pub fn schema(mut self, input: impl Into<String>) -> Self {
        self.inner.schema = Some(input.into());
        self
    }
    /// Schema name, if the data source supports schemas.
    #[must_use]
    pub fn set_schema(mut self, input: Option<String>) -> Self {
        self.inner.schema = input;
        self
    }
    /// Table name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Table name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Appends an item to `input_columns`.
    ///
    /// To override the contents of this collection use [`set_input_columns`](Self::set_input_columns).
    #[must_use]
    pub fn input_columns(mut self, input: InputColumn) -> Self {
        self.inner
            .input_columns
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Columns read from the table.
    #[must_use]
    pub fn set_input_columns(mut self, input: Option<Vec<InputColumn>>) -> Self {
        self.inner.input_columns = input;
        self
    }
    /// Consumes the builder and constructs a [`RelationalTable`].
    #[must_use]
    pub fn build(self) -> RelationalTable {
        self.inner
    }
}

/// Physical table defined by a SQL query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomSql {
    /// ARN of the data source the query runs against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_arn: Option<String>,
    /// Display name of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The SQL query, up to 65536 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
    /// Columns the query returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<InputColumn>>,
}

impl CustomSql {
    /// Creates a new builder-style object to manufacture [`CustomSql`].
    #[must_use]
    pub fn builder() -> CustomSqlBuilder {
        CustomSqlBuilder::default()
    }
}

impl fmt::Display for CustomSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("DataSourceArn", self.data_source_arn.as_deref())
            .field("Name", self.name.as_deref())
            .field("SqlQuery", self.sql_query.as_deref())
            .list("Columns", self.columns.as_deref())
            .finish()
    }
}

/// A builder for [`CustomSql`].
#[derive(Debug, Clone, Default)]
pub struct CustomSqlBuilder {
    inner: CustomSql,
}

impl CustomSqlBuilder {
    /// ARN of the data source the query runs against.
    #[must_use]
    pub fn data_source_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.data_source_arn = Some(input.into());
        self
    }
    /// ARN of the data source the query runs against.
    #[must_use]
    pub fn set_data_source_arn(mut self, input: Option<String>) -> Self {
        self.inner.data_source_arn = input;
        self
    }
    /// Display name of the query.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the query.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// The SQL query, up to 65536 characters.
    #[must_use]
    pub fn sql_query(mut self, input: impl Into<String>) -> Self {
        self.inner.sql_query = Some(input.into());
        self
    }
    /// The SQL query, up to 65536 characters.
    #[must_use]
    pub fn set_sql_query(mut self, input: Option<String>) -> Self {
        self.inner.sql_query = input;
        self
    }
    /// Appends an item to `columns`.
    ///
    /// To override the contents of this collection use [`set_columns`](Self::set_columns).
    #[must_use]
    pub fn columns(mut self, input: InputColumn) -> Self {
        self.inner.columns.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Columns the query returns.
    #[must_use]
    pub fn set_columns(mut self, input: Option<Vec<InputColumn>>) -> Self {
        self.inner.columns = input;
        self
    }
    /// Consumes the builder and constructs a [`CustomSql`].
    #[must_use]
    pub fn build(self) -> CustomSql {
        self.inner
    }
}

/// How an uploaded file is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSettings {
    /// File format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FileFormat>,
    /// First row to read. Defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from_row: Option<i32>,
    /// Whether the first row holds column names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_header: Option<bool>,
    /// Quote character for delimited text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_qualifier: Option<TextQualifier>,
    /// Field delimiter, one character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl UploadSettings {
    /// Creates a new builder-style object to manufacture [`UploadSettings`].
    #[must_use]
    pub fn builder() -> UploadSettingsBuilder {
        UploadSettingsBuilder::default()
    }
}

impl fmt::Display for UploadSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Format", self.format)
            .field("StartFromRow", self.start_from_row)
            .field("ContainsHeader", self.contains_header)
            .field("TextQualifier", self.text_qualifier)
            .field("Delimiter", self.delimiter.as_deref())
            .finish()
    }
}

/// A builder for [`UploadSettings`].
#[derive(Debug, Clone, Default)]
pub struct UploadSettingsBuilder {
    inner: UploadSettings,
}

impl UploadSettingsBuilder {
    /// File format.
    #[must_use]
    pub fn format(mut self, input: FileFormat) -> Self {
        self.inner.format = Some(input);
        self
    }
    /// File format.
    #[must_use]
    pub fn set_format(mut self, input: Option<FileFormat>) -> Self {
        self.inner.format = input;
        self
    }
    /// First row to read. Defaults to 1.
    #[must_use]
    pub fn start_from_row(mut self, input: i32) -> Self {
        self.inner.start_from_row = Some(input);
        self
    }
    /// First row to read. Defaults to 1.
    #[must_use]
    pub fn set_start_from_row(mut self, input: Option<i32>) -> Self {
        self.inner.start_from_row = input;
        self
    }
    /// Whether the first row holds column names.
    #[must_use]
    pub fn contains_header(mut self, input: bool) -> Self {
        self.inner.contains_header = Some(input);
        self
    }
    /// Whether the first row holds column names.
    #[must_use]
    pub fn set_contains_header(mut self, input: Option<bool>) -> Self {
        self.inner.contains_header = input;
        self
    }
    /// Quote character for delimited text.
    #[must_use]
    pub fn text_qualifier(mut self, input: TextQualifier) -> Self {
        self.inner.text_qualifier = Some(input);
        self
    }
    /// Quote character for delimited text.
    #[must_use]
    pub fn set_text_qualifier(mut self, input: Option<TextQualifier>) -> Self {
        self.inner.text_qualifier = input;
        self
    }
    /// Field delimiter, one character.
    #[must_use]
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.inner.delimiter = Some(input.into());
        self
    }
    /// Field delimiter, one character.
    #[must_use]
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.inner.delimiter = input;
        self
    }
    /// Consumes the builder and constructs a [`UploadSettings`].
    #[must_use]
    pub fn build(self) -> UploadSettings {
        self.inner
    }
}

/// Physical table read from files in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Source {
    /// ARN of the S3 data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_arn: Option<String>,
    /// How the files are parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_settings: Option<UploadSettings>,
    /// Columns read from the files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_columns: Option<Vec<InputColumn>>,
}

impl S3Source {
    /// Creates a new builder-style object to manufacture [`S3Source`].
    #[must_use]
    pub fn builder() -> S3SourceBuilder {
        S3SourceBuilder::default()
    }
}

impl fmt::Display for S3Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("DataSourceArn", self.data_source_arn.as_deref())
            .field("UploadSettings", self.upload_settings.as_ref())
            .list("InputColumns", self.input_columns.as_deref())
            .finish()
    }
}

/// A builder for [`S3Source`].
#[derive(Debug, Clone, Default)]
pub struct S3SourceBuilder {
    inner: S3Source,
}

impl S3SourceBuilder {
    /// ARN of the S3 data source.
    #[must_use]
    pub fn data_source_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.data_source_arn = Some(input.into());
        self
    }
    /// ARN of the S3 data source.
    #[must_use]
    pub fn set_data_source_arn(mut self, input: Option<String>) -> Self {
        self.inner.data_source_arn = input;
        self
    }
    /// How the files are parsed.
    #[must_use]
    pub fn upload_settings(mut self, input: UploadSettings) -> Self {
        self.inner.upload_settings = Some(input);
        self
    }
    /// How the files are parsed.
    #[must_use]
    pub fn set_upload_settings(mut self, input: Option<UploadSettings>) -> Self {
        self.inner.upload_settings = input;
        self
    }
    /// Appends an item to `input_columns`.
    ///
    /// To override the contents of this collection use [`set_input_columns`](Self::set_input_columns).
    #[must_use]
    pub fn input_columns(mut self, input: InputColumn) -> Self {
        self.inner
            .input_columns
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Columns read from the files.
    #[must_use]
    pub fn set_input_columns(mut self, input: Option<Vec<InputColumn>>) -> Self {
        self.inner.input_columns = input;
        self
    }
    /// Consumes the builder and constructs a [`S3Source`].
    #[must_use]
    pub fn build(self) -> S3Source {
        self.inner
    }
}

/// Where the rows of a data set come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalTable {
    /// A table in a relational data source.
    RelationalTable(RelationalTable),
    /// A SQL query.
    CustomSql(CustomSql),
    /// Files in S3.
    S3Source(S3Source),
}

impl PhysicalTable {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::RelationalTable(_) => "RelationalTable",
            Self::CustomSql(_) => "CustomSql",
            Self::S3Source(_) => "S3Source",
        }
    }

    /// Returns the inner value if this is [`PhysicalTable::RelationalTable`].
    #[must_use]
    pub fn as_relational_table(&self) -> Option<&RelationalTable> {
        match self {
            Self::RelationalTable(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`PhysicalTable::CustomSql`].
    #[must_use]
    pub fn as_custom_sql(&self) -> Option<&CustomSql> {
        match self {
            Self::CustomSql(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`PhysicalTable::S3Source`].
    #[must_use]
    pub fn as_s3_source(&self) -> Option<&S3Source> {
        match self {
            Self::S3Source(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for PhysicalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelationalTable(value) => display::variant(f, "RelationalTable", value),
            Self::CustomSql(value) => display::variant(f, "CustomSql", value),
            Self::S3Source(value) => display::variant(f, "S3Source", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Keeps only the listed columns. Column order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectOperation {
    /// Columns to keep, in output order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_columns: Option<Vec<String>>,
}

impl ProjectOperation {
    /// Creates a new builder-style object to manufacture [`ProjectOperation`].
    #[must_use]
    pub fn builder() -> ProjectOperationBuilder {
        ProjectOperationBuilder::default()
    }
}

impl fmt::Display for ProjectOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .list("ProjectedColumns", self.projected_columns.as_deref())
            .finish()
    }
}

/// A builder for [`ProjectOperation`].
#[derive(Debug, Clone, Default)]
pub struct ProjectOperationBuilder {
    inner: ProjectOperation,
}

impl ProjectOperationBuilder {
    /// Appends an item to `projected_columns`.
    ///
    /// To override the contents of this collection use [`set_projected_columns`](Self::set_projected_columns).
    #[must_use]
    pub fn projected_columns(mut self, input: impl Into<String>) -> Self {
        self.inner
            .projected_columns
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }
    /// Columns to keep, in output order.
    #[must_use]
    pub fn set_projected_columns(mut self, input: Option<Vec<String>>) -> Self {
        self.inner.projected_columns = input;
        self
    }
    /// Consumes the builder and constructs a [`ProjectOperation`].
    #[must_use]
    pub fn build(self) -> ProjectOperation {
        self.inner
    }
}

/// Keeps only the rows matching a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOperation {
    /// Boolean expression evaluated per row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
}

impl FilterOperation {
    /// Creates a new builder-style object to manufacture [`FilterOperation`].
    #[must_use]
    pub fn builder() -> FilterOperationBuilder {
        FilterOperationBuilder::default()
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ConditionExpression", self.condition_expression.as_deref())
            .finish()
    }
}

/// A builder for [`FilterOperation`].
#[derive(Debug, Clone, Default)]
pub struct FilterOperationBuilder {
    inner: FilterOperation,
}

impl FilterOperationBuilder {
    /// Boolean expression evaluated per row.
    #[must_use]
    pub fn condition_expression(mut self, input: impl Into<String>) -> Self {
        self.inner.condition_expression = Some(input.into());
        self
    }
    /// Boolean expression evaluated per row.
    #[must_use]
    pub fn set_condition_expression(mut self, input: Option<String>) -> Self {
        self.inner.condition_expression = input;
        self
    }
    /// Consumes the builder and constructs a [`FilterOperation`].
    #[must_use]
    pub fn build(self) -> FilterOperation {
        self.inner
    }
}

/// Column computed from an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculatedColumn {
    /// Name of the new column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Stable ID. Reusing an ID across data sets keeps visuals bound to the column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    /// Expression defining the column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl CalculatedColumn {
    /// Creates a new builder-style object to manufacture [`CalculatedColumn`].
    #[must_use]
    pub fn builder() -> CalculatedColumnBuilder {
        CalculatedColumnBuilder::default()
    }
}

impl fmt::Display for CalculatedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ColumnName", self.column_name.as_deref())
            .field("ColumnId", self.column_id.as_deref())
            .field("Expression", self.expression.as_deref())
            .finish()
    }
}

/// A builder for [`CalculatedColumn`].
#[derive(Debug, Clone, Default)]
pub struct CalculatedColumnBuilder {
    inner: CalculatedColumn,
}

impl CalculatedColumnBuilder {
    /// Name of the new column.
    #[must_use]
    pub fn column_name(mut self, input: impl Into<String>) -> Self {
        self.inner.column_name = Some(input.into());
        self
    }
    /// Name of the new column.
    #[must_use]
    pub fn set_column_name(mut self, input: Option<String>) -> Self {
        self.inner.column_name = input;
        self
    }
    /// Stable ID. Reusing an ID across data sets keeps visuals bound to the column.
    #[must_use]
    pub fn column_id(mut self, input: impl Into<String>) -> Self {
        self.inner.column_id = Some(input.into());
        self
    }
    /// Stable ID. Reusing an ID across data sets keeps visuals bound to the column.
    #[must_use]
    pub fn set_column_id(mut self, input: Option<String>) -> Self {
        self.inner.column_id = input;
        self
    }
    /// Expression defining the column.
    #[must_use]
    pub fn expression(mut self, input: impl Into<String>) -> Self {
        self.inner.expression = Some(input.into());
        self
    }
    /// Expression defining the column.
    #[must_use]
    pub fn set_expression(mut self, input: Option<String>) -> Self {
        self.inner.expression = input;
        self
    }
    /// Consumes the builder and constructs a [`CalculatedColumn`].
    #[must_use]
    pub fn build(self) -> CalculatedColumn {
        self.inner
    }
}

/// Adds calculated columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateColumnsOperation {
    /// Columns to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<CalculatedColumn>>,
}

impl CreateColumnsOperation {
    /// Creates a new builder-style object to manufacture [`CreateColumnsOperation`].
    #[must_use]
    pub fn builder() -> CreateColumnsOperationBuilder {
        CreateColumnsOperationBuilder::default()
    }
}

impl fmt::Display for CreateColumnsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .list("Columns", self.columns.as_deref())
            .finish()
    }
}

/// A builder for [`CreateColumnsOperation`].
#[derive(Debug, Clone, Default)]
pub struct CreateColumnsOperationBuilder {
    inner: CreateColumnsOperation,
}

impl CreateColumnsOperationBuilder {
    /// Appends an item to `columns`.
    ///
    /// To override the contents of this collection use [`set_columns`](Self::set_columns).
    #[must_use]
    pub fn columns(mut self, input: CalculatedColumn) -> Self {
        self.inner.columns.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Columns to add.
    #[must_use]
    pub fn set_columns(mut self, input: Option<Vec<CalculatedColumn>>) -> Self {
        self.inner.columns = input;
        self
    }
    /// Consumes the builder and constructs a [`CreateColumnsOperation`].
    #[must_use]
    pub fn build(self) -> CreateColumnsOperation {
        self.inner
    }
}

/// Renames a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenameColumnOperation {
    /// Current name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_column_name: Option<String>,
}

impl RenameColumnOperation {
    /// Creates a new builder-style object to manufacture [`RenameColumnOperation`].
    #[must_use]
    pub fn builder() -> RenameColumnOperationBuilder {
        RenameColumnOperationBuilder::default()
    }
}

impl fmt::Display for RenameColumnOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ColumnName", self.column_name.as_deref())
            .field("NewColumnName", self.new_column_name.as_deref())
            .finish()
    }
}

/// A builder for [`RenameColumnOperation`].
#[derive(Debug, Clone, Default)]
pub struct RenameColumnOperationBuilder {
    inner: RenameColumnOperation,
}

impl RenameColumnOperationBuilder {
    /// Current name.
    #[must_use]
    pub fn column_name(mut self, input: impl Into<String>) -> Self {
        self.inner.column_name = Some(input.into());
        self
    }
    /// Current name.
    #[must_use]
    pub fn set_column_name(mut self, input: Option<String>) -> Self {
        self.inner.column_name = input;
        self
    }
    /// New name.
    #[must_use]
    pub fn new_column_name(mut self, input: impl Into<String>) -> Self {
        self.inner.new_column_name = Some(input.into());
        self
    }
    /// New name.
    #[must_use]
    pub fn set_new_column_name(mut self, input: Option<String>) -> Self {
        self.inner.new_column_name = input;
        self
    }
    /// Consumes the builder and constructs a [`RenameColumnOperation`].
    #[must_use]
    pub fn build(self) -> RenameColumnOperation {
        self.inner
    }
}

/// Casts a column to another type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CastColumnTypeOperation {
    /// Column to cast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Target type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_column_type: Option<ColumnDataType>,
    /// Format used when parsing strings into dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl CastColumnTypeOperation {
    /// Creates a new builder-style object to manufacture [`CastColumnTypeOperation`].
    #[must_use]
    pub fn builder() -> CastColumnTypeOperationBuilder {
        CastColumnTypeOperationBuilder::default()
    }
}

impl fmt::Display for CastColumnTypeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ColumnName", self.column_name.as_deref())
            .field("NewColumnType", self.new_column_type)
            .field("Format", self.format.as_deref())
            .finish()
    }
}

/// A builder for [`CastColumnTypeOperation`].
#[derive(Debug, Clone, Default)]
pub struct CastColumnTypeOperationBuilder {
    inner: CastColumnTypeOperation,
}

impl CastColumnTypeOperationBuilder {
    /// Column to cast.
    #[must_use]
    pub fn column_name(mut self, input: impl Into<String>) -> Self {
        self.inner.column_name = Some(input.into());
        self
    }
    /// Column to cast.
    #[must_use]
    pub fn set_column_name(mut self, input: Option<String>) -> Self {
        self.inner.column_name = input;
        self
    }
    /// Target type.
    #[must_use]
    pub fn new_column_type(mut self, input: ColumnDataType) -> Self {
        self.inner.new_column_type = Some(input);
        self
    }
    /// Target type.
    #[must_use]
    pub fn set_new_column_type(mut self, input: Option<ColumnDataType>) -> Self {
        self.inner.new_column_type = input;
        self
    }
    /// Format used when parsing strings into dates.
    #[must_use]
    pub fn format(mut self, input: impl Into<String>) -> Self {
        self.inner.format = Some(input.into());
        self
    }
    /// Format used when parsing strings into dates.
    #[must_use]
    pub fn set_format(mut self, input: Option<String>) -> Self {
        self.inner.format = input;
        self
    }
    /// Consumes the builder and constructs a [`CastColumnTypeOperation`].
    #[must_use]
    pub fn build(self) -> CastColumnTypeOperation {
        self.inner
    }
}

/// Metadata tag attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnTag {
    /// Geographic role of the column.
    ColumnGeographicRole(GeoSpatialDataRole),
}

impl ColumnTag {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::ColumnGeographicRole(_) => "ColumnGeographicRole",
        }
    }
}

impl fmt::Display for ColumnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnGeographicRole(value) => display::variant(f, "ColumnGeographicRole", value),
        }
    }
}

/// Attaches tags to a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagColumnOperation {
    /// Column to tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Tags to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ColumnTag>>,
}

impl TagColumnOperation {
    /// Creates a new builder-style object to manufacture [`TagColumnOperation`].
    #[must_use]
    pub fn builder() -> TagColumnOperationBuilder {
        TagColumnOperationBuilder::default()
    }
}

impl fmt::Display for TagColumnOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ColumnName", self.column_name.as_deref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

/// A builder for [`TagColumnOperation`].
#[derive(Debug, Clone, Default)]
pub struct TagColumnOperationBuilder {
    inner: TagColumnOperation,
}

impl TagColumnOperationBuilder {
    /// Column to tag.
    #[must_use]
    pub fn column_name(mut self, input: impl Into<String>) -> Self {
        self.inner.column_name = Some(input.into());
        self
    }
    /// Column to tag.
    #[must_use]
    pub fn set_column_name(mut self, input: Option<String>) -> Self {
        self.inner.column_name = input;
        self
    }
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    #[must_use]
    pub fn tags(mut self, input: ColumnTag) -> Self {
        self.inner.tags.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Tags to attach.
    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<ColumnTag>>) -> Self {
        self.inner.tags = input;
        self
    }
    /// Consumes the builder and constructs a [`TagColumnOperation`].
    #[must_use]
    pub fn build(self) -> TagColumnOperation {
        self.inner
    }
}

/// One step of a logical table's transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformOperation {
    /// Keep only some columns.
    ProjectOperation(ProjectOperation),
    /// Keep only some rows.
    FilterOperation(FilterOperation),
    /// Add calculated columns.
    CreateColumnsOperation(CreateColumnsOperation),
    /// Rename a column.
    RenameColumnOperation(RenameColumnOperation),
    /// Change a column type.
    CastColumnTypeOperation(CastColumnTypeOperation),
    /// Tag a column.
    TagColumnOperation(TagColumnOperation),
}

impl TransformOperation {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::ProjectOperation(_) => "ProjectOperation",
            Self::FilterOperation(_) => "FilterOperation",
            Self::CreateColumnsOperation(_) => "CreateColumnsOperation",
            Self::RenameColumnOperation(_) => "RenameColumnOperation",
            Self::CastColumnTypeOperation(_) => "CastColumnTypeOperation",
            Self::TagColumnOperation(_) => "TagColumnOperation",
        }
    }

    /// Returns the inner value if this is [`TransformOperation::ProjectOperation`].
    #[must_use]
    pub fn as_project_operation(&self) -> Option<&ProjectOperation> {
        match self {
            Self::ProjectOperation(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`TransformOperation::FilterOperation`].
    #[must_use]
    pub fn as_filter_operation(&self) -> Option<&FilterOperation> {
        match self {
            Self::FilterOperation(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`TransformOperation::CreateColumnsOperation`].
    #[must_use]
    pub fn as_create_columns_operation(&self) -> Option<&CreateColumnsOperation> {
        match self {
            Self::CreateColumnsOperation(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`TransformOperation::RenameColumnOperation`].
    #[must_use]
    pub fn as_rename_column_operation(&self) -> Option<&RenameColumnOperation> {
        match self {
            Self::RenameColumnOperation(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`TransformOperation::CastColumnTypeOperation`].
    #[must_use]
    pub fn as_cast_column_type_operation(&self) -> Option<&CastColumnTypeOperation> {
        match self {
            Self::CastColumnTypeOperation(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`TransformOperation::TagColumnOperation`].
    #[must_use]
    pub fn as_tag_column_operation(&self) -> Option<&TagColumnOperation> {
        match self {
            Self::TagColumnOperation(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for TransformOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectOperation(value) => display::variant(f, "ProjectOperation", value),
            Self::FilterOperation(value) => display::variant(f, "FilterOperation", value),
            Self::CreateColumnsOperation(value) => {
                display::variant(f, "CreateColumnsOperation", value)
            }
            Self::RenameColumnOperation(value) => {
                display::variant(f, "RenameColumnOperation", value)
            }
            Self::CastColumnTypeOperation(value) => {
                display::variant(f, "CastColumnTypeOperation", value)
            }
            Self::TagColumnOperation(value) => display::variant(f, "TagColumnOperation", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Logical tables
// ---------------------------------------------------------------------------

/// Joins two logical tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinInstruction {
    /// Logical table ID on the left of the join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_operand: Option<String>,
    /// Logical table ID on the right of the join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_operand: Option<String>,
    /// Join type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<JoinType>,
    /// Join condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clause: Option<String>,
}

impl JoinInstruction {
    /// Creates a new builder-style object to manufacture [`JoinInstruction`].
    #[must_use]
    pub fn builder() -> JoinInstructionBuilder {
        JoinInstructionBuilder::default()
    }
}

impl fmt::Display for JoinInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("LeftOperand", self.left_operand.as_deref())
            .field("RightOperand", self.right_operand.as_deref())
            .field("Type", self.r#type)
            .field("OnClause", self.on_clause.as_deref())
            .finish()
    }
}

/// A builder for [`JoinInstruction`].
#[derive(Debug, Clone, Default)]
pub struct JoinInstructionBuilder {
    inner: JoinInstruction,
}

impl JoinInstructionBuilder {
    /// Logical table ID on the left of the join.
    #[must_use]
    pub fn left_operand(mut self, input: impl Into<String>) -> Self {
        self.inner.left_operand = Some(input.into());
        self
    }
    /// Logical table ID on the left of the join.
    #[must_use]
    pub fn set_left_operand(mut self, input: Option<String>) -> Self {
        self.inner.left_operand = input;
        self
    }
    /// Logical table ID on the right of the join.
    #[must_use]
    pub fn right_operand(mut self, input: impl Into<String>) -> Self {
        self.inner.right_operand = Some(input.into());
        self
    }
    /// Logical table ID on the right of the join.
    #[must_use]
    pub fn set_right_operand(mut self, input: Option<String>) -> Self {
        self.inner.right_operand = input;
        self
    }
    /// Join type.
    #[must_use]
    pub fn r#type(mut self, input: JoinType) -> Self {
        self.inner.r#type = Some(input);
        self
    }
    /// Join type.
    #[must_use]
    pub fn set_type(mut self, input: Option<JoinType>) -> Self {
        self.inner.r#type = input;
        self
    }
    /// Join condition.
    #[must_use]
    pub fn on_clause(mut self, input: impl Into<String>) -> Self {
        self.inner.on_clause = Some(input.into());
        self
    }
    /// Join condition.
    #[must_use]
    pub fn set_on_clause(mut self, input: Option<String>) -> Self {
        self.inner.on_clause = input;
        self
    }
    /// Consumes the builder and constructs a [`JoinInstruction`].
    #[must_use]
    pub fn build(self) -> JoinInstruction {
        self.inner
    }
}

/// Input of a logical table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalTableSource {
    /// The result of joining two logical tables.
    JoinInstruction(JoinInstruction),
    /// A physical table, by its key in the physical table map.
    PhysicalTableId(String),
}

impl LogicalTableSource {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::JoinInstruction(_) => "JoinInstruction",
            Self::PhysicalTableId(_) => "PhysicalTableId",
        }
    }

    /// Returns the inner value if this is [`LogicalTableSource::JoinInstruction`].
    #[must_use]
    pub fn as_join_instruction(&self) -> Option<&JoinInstruction> {
        match self {
            Self::JoinInstruction(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner value if this is [`LogicalTableSource::PhysicalTableId`].
    #[must_use]
    pub fn as_physical_table_id(&self) -> Option<&str> {
        match self {
            Self::PhysicalTableId(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalTableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JoinInstruction(value) => display::variant(f, "JoinInstruction", value),
            Self::PhysicalTableId(value) => display::variant(f, "PhysicalTableId", value),
        }
    }
}

/// Logical table: a source plus an ordered transform pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogicalTable {
    /// Display name of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Transforms, applied in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_transforms: Option<Vec<TransformOperation>>,
    /// Input of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LogicalTableSource>,
}

impl LogicalTable {
    /// Creates a new builder-style object to manufacture [`LogicalTable`].
    #[must_use]
    pub fn builder() -> LogicalTableBuilder {
        LogicalTableBuilder::default()
    }
}

impl fmt::Display for LogicalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Alias", self.alias.as_deref())
            .list("DataTransforms", self.data_transforms.as_deref())
            .field("Source", self.source.as_ref())
            .finish()
    }
}

/// A builder for [`LogicalTable`].
#[derive(Debug, Clone, Default)]
pub struct LogicalTableBuilder {
    inner: LogicalTable,
}

impl LogicalTableBuilder {
    /// Display name of the table.
    #[must_use]
    pub fn alias(mut self, input: impl Into<String>) -> Self {
        self.inner.alias = Some(input.into());
        self
    }
    /// Display name of the table.
    #[must_use]
    pub fn set_alias(mut self, input: Option<String>) -> Self {
        self.inner.alias = input;
        self
    }
    /// Appends an item to `data_transforms`.
    ///
    /// To override the contents of this collection use [`set_data_transforms`](Self::set_data_transforms).
    #[must_use]
    pub fn data_transforms(mut self, input: TransformOperation) -> Self {
        self.inner
            .data_transforms
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Transforms, applied in order.
    #[must_use]
    pub fn set_data_transforms(mut self, input: Option<Vec<TransformOperation>>) -> Self {
        self.inner.data_transforms = input;
        self
    }
    /// Input of the table.
    #[must_use]
    pub fn source(mut self, input: LogicalTableSource) -> Self {
        self.inner.source = Some(input);
        self
    }
    /// Input of the table.
    #[must_use]
    pub fn set_source(mut self, input: Option<LogicalTableSource>) -> Self {
        self.inner.source = input;
        self
    }
    /// Consumes the builder and constructs a [`LogicalTable`].
    #[must_use]
    pub fn build(self) -> LogicalTable {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Column groups
// ---------------------------------------------------------------------------

/// Columns forming a geographic hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoSpatialColumnGroup {
    /// Group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country the hierarchy belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<GeoSpatialCountryCode>,
    /// Columns in hierarchy order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl GeoSpatialColumnGroup {
    /// Creates a new builder-style object to manufacture [`GeoSpatialColumnGroup`].
    #[must_use]
    pub fn builder() -> GeoSpatialColumnGroupBuilder {
        GeoSpatialColumnGroupBuilder::default()
    }
}

impl fmt::Display for GeoSpatialColumnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .field("CountryCode", self.country_code)
            .list("Columns", self.columns.as_deref())
            .finish()
    }
}

/// A builder for [`GeoSpatialColumnGroup`].
#[derive(Debug, Clone, Default)]
pub struct GeoSpatialColumnGroupBuilder {
    inner: GeoSpatialColumnGroup,
}

impl GeoSpatialColumnGroupBuilder {
    /// Group name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Group name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Country the hierarchy belongs to.
    #[must_use]
    pub fn country_code(mut self, input: GeoSpatialCountryCode) -> Self {
        self.inner.country_code = Some(input);
        self
    }
    /// Country the hierarchy belongs to.
    #[must_use]
    pub fn set_country_code(mut self, input: Option<GeoSpatialCountryCode>) -> Self {
        self.inner.country_code = input;
        self
    }
    /// Appends an item to `columns`.
    ///
    /// To override the contents of this collection use [`set_columns`](Self::set_columns).
    #[must_use]
    pub fn columns(mut self, input: impl Into<String>) -> Self {
        self.inner
            .columns
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }
    /// Columns in hierarchy order.
    #[must_use]
    pub fn set_columns(mut self, input: Option<Vec<String>>) -> Self {
        self.inner.columns = input;
        self
    }
    /// Consumes the builder and constructs a [`GeoSpatialColumnGroup`].
    #[must_use]
    pub fn build(self) -> GeoSpatialColumnGroup {
        self.inner
    }
}

/// Group of columns that work together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnGroup {
    /// A geospatial hierarchy.
    GeoSpatialColumnGroup(GeoSpatialColumnGroup),
}

impl ColumnGroup {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::GeoSpatialColumnGroup(_) => "GeoSpatialColumnGroup",
        }
    }
}

impl fmt::Display for ColumnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeoSpatialColumnGroup(value) => {
                display::variant(f, "GeoSpatialColumnGroup", value)
            }
        }
    }
}

/// Schema of one column inside a column group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnGroupColumnSchema {
    /// Column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColumnGroupColumnSchema {
    /// Creates a new builder-style object to manufacture [`ColumnGroupColumnSchema`].
    #[must_use]
    pub fn builder() -> ColumnGroupColumnSchemaBuilder {
        ColumnGroupColumnSchemaBuilder::default()
    }
}

impl fmt::Display for ColumnGroupColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .finish()
    }
}

/// A builder for [`ColumnGroupColumnSchema`].
#[derive(Debug, Clone, Default)]
pub struct ColumnGroupColumnSchemaBuilder {
    inner: ColumnGroupColumnSchema,
}

impl ColumnGroupColumnSchemaBuilder {
    /// Column name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Column name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Consumes the builder and constructs a [`ColumnGroupColumnSchema`].
    #[must_use]
    pub fn build(self) -> ColumnGroupColumnSchema {
        self.inner
    }
}

/// Schema of a column group, as reported in data set metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnGroupSchema {
    /// Group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Columns of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_group_column_schema_list: Option<Vec<ColumnGroupColumnSchema>>,
}

impl ColumnGroupSchema {
    /// Creates a new builder-style object to manufacture [`ColumnGroupSchema`].
    #[must_use]
    pub fn builder() -> ColumnGroupSchemaBuilder {
        ColumnGroupSchemaBuilder::default()
    }
}

impl fmt::Display for ColumnGroupSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .list("ColumnGroupColumnSchemaList", self.column_group_column_schema_list.as_deref())
            .finish()
    }
}

/// A builder for [`ColumnGroupSchema`].
#[derive(Debug, Clone, Default)]
pub struct ColumnGroupSchemaBuilder {
    inner: ColumnGroupSchema,
}

impl ColumnGroupSchemaBuilder {
    /// Group name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Group name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Appends an item to `column_group_column_schema_list`.
    ///
    /// To override the contents of this collection use [`set_column_group_column_schema_list`](Self::set_column_group_column_schema_list).
    #[must_use]
    pub fn column_group_column_schema_list(mut self, input: ColumnGroupColumnSchema) -> Self {
        self.inner
            .column_group_column_schema_list
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Columns of the group.
    #[must_use]
    pub fn set_column_group_column_schema_list(
        mut self,
        input: Option<Vec<ColumnGroupColumnSchema>>,
    ) -> Self {
        self.inner.column_group_column_schema_list = input;
        self
    }
    /// Consumes the builder and constructs a [`ColumnGroupSchema`].
    #[must_use]
    pub fn build(self) -> ColumnGroupSchema {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn project(columns: &[&str]) -> ProjectOperation {
        columns
            .iter()
            .fold(ProjectOperation::builder(), |builder, column| {
                builder.projected_columns(*column)
            })
            .build()
    }

    #[test]
    fn test_should_compare_project_operations_by_column_order() {
        assert_eq!(project(&["a", "b"]), project(&["a", "b"]));
        assert_eq!(hash_of(&project(&["a", "b"])), hash_of(&project(&["a", "b"])));
        assert_ne!(project(&["a", "b"]), project(&["b", "a"]));
    }

    #[test]
    fn test_should_distinguish_absent_from_empty_sequence() {
        let absent = ProjectOperation::default();
        let empty = ProjectOperation::builder()
            .set_projected_columns(Some(Vec::new()))
            .build();
        assert_ne!(absent, empty);
        assert_eq!(absent.to_string(), "{}");
        assert_eq!(empty.to_string(), "{ProjectedColumns: []}");
        assert_eq!(
            serde_json::to_string(&empty).expect("serialize"),
            r#"{"ProjectedColumns":[]}"#
        );
    }

    #[test]
    fn test_should_append_after_absent_sequence() {
        let operation = ProjectOperation::builder()
            .projected_columns("a")
            .projected_columns("b")
            .projected_columns("c")
            .build();
        assert_eq!(
            operation.projected_columns,
            Some(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
        );
    }

    #[test]
    fn test_should_serialize_type_field_with_wire_name() {
        let column = InputColumn::builder()
            .name("amount")
            .r#type(InputColumnDataType::Decimal)
            .build();
        assert_eq!(
            serde_json::to_string(&column).expect("serialize column"),
            r#"{"Name":"amount","Type":"DECIMAL"}"#
        );
        assert_eq!(column.to_string(), "{Name: amount,Type: DECIMAL}");
    }

    #[test]
    fn test_should_roundtrip_physical_table_map_entry() {
        let table = PhysicalTable::CustomSql(
            CustomSql::builder()
                .data_source_arn("arn:aws:quicksight:us-east-1:111122223333:datasource/pg")
                .name("orders")
                .sql_query("SELECT * FROM orders")
                .columns(
                    InputColumn::builder()
                        .name("id")
                        .r#type(InputColumnDataType::Integer)
                        .build(),
                )
                .build(),
        );
        let json = serde_json::to_value(&table).expect("serialize table");
        assert_eq!(json["CustomSql"]["SqlQuery"], "SELECT * FROM orders");
        let parsed: PhysicalTable = serde_json::from_value(json).expect("deserialize table");
        assert_eq!(parsed, table);
        assert!(parsed.as_custom_sql().is_some());
        assert!(parsed.as_relational_table().is_none());
    }

    #[test]
    fn test_should_parse_logical_table_with_transforms() {
        let raw = r#"{
            "Alias": "orders",
            "Source": {"PhysicalTableId": "orders-sql"},
            "DataTransforms": [
                {"FilterOperation": {"ConditionExpression": "amount > 0"}},
                {"TagColumnOperation": {
                    "ColumnName": "state",
                    "Tags": [{"ColumnGeographicRole": "STATE"}]
                }},
                {"CastColumnTypeOperation": {
                    "ColumnName": "amount",
                    "NewColumnType": "DECIMAL"
                }}
            ]
        }"#;
        let table: LogicalTable = serde_json::from_str(raw).expect("deserialize logical table");
        assert_eq!(
            table.source.as_ref().and_then(LogicalTableSource::as_physical_table_id),
            Some("orders-sql")
        );
        let transforms = table.data_transforms.expect("transforms present");
        assert_eq!(transforms.len(), 3);
        assert_eq!(transforms[0].member_name(), "FilterOperation");
        let tag = transforms[1]
            .as_tag_column_operation()
            .expect("tag operation");
        assert_eq!(
            tag.tags,
            Some(vec![ColumnTag::ColumnGeographicRole(GeoSpatialDataRole::State)])
        );
    }

    #[test]
    fn test_should_reject_unknown_closed_enum_in_payload() {
        let raw = r#"{"ColumnName": "amount", "NewColumnType": "decimal"}"#;
        assert!(serde_json::from_str::<CastColumnTypeOperation>(raw).is_err());
    }

    #[test]
    fn test_should_render_join_instruction() {
        let source = LogicalTableSource::JoinInstruction(
            JoinInstruction::builder()
                .left_operand("orders")
                .right_operand("customers")
                .r#type(JoinType::Left)
                .on_clause("orders.customer_id = customers.id")
                .build(),
        );
        assert_eq!(
            source.to_string(),
            "{JoinInstruction: {LeftOperand: orders,RightOperand: customers,Type: LEFT,\
             OnClause: orders.customer_id = customers.id}}"
        );
    }

    #[test]
    fn test_should_build_geospatial_column_group() {
        let group = ColumnGroup::GeoSpatialColumnGroup(
            GeoSpatialColumnGroup::builder()
                .name("location")
                .country_code(GeoSpatialCountryCode::Us)
                .columns("state")
                .columns("city")
                .build(),
        );
        assert_eq!(
            serde_json::to_value(&group).expect("serialize group"),
            serde_json::json!({
                "GeoSpatialColumnGroup": {
                    "Name": "location",
                    "CountryCode": "US",
                    "Columns": ["state", "city"]
                }
            })
        );
    }

    #[test]
    fn test_should_build_column_group_schema() {
        let schema = ColumnGroupSchema::builder()
            .name("location")
            .column_group_column_schema_list(
                ColumnGroupColumnSchema::builder().name("state").build(),
            )
            .build();
        assert_eq!(
            schema.to_string(),
            "{Name: location,ColumnGroupColumnSchemaList: [{Name: state}]}"
        );
    }

    #[test]
    fn test_should_render_upload_settings() {
        let settings = UploadSettings::builder()
            .format(FileFormat::Csv)
            .start_from_row(2)
            .contains_header(true)
            .text_qualifier(TextQualifier::DoubleQuote)
            .delimiter(",")
            .build();
        assert_eq!(
            settings.to_string(),
            "{Format: CSV,StartFromRow: 2,ContainsHeader: true,TextQualifier: DOUBLE_QUOTE,Delimiter: ,}"
        );
    }

    proptest! {
        #[test]
        fn prop_should_append_across_calls(
            first in proptest::collection::vec("[a-z]{1,8}", 0..6),
            second in proptest::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let builder = first
                .iter()
                .fold(ProjectOperation::builder(), |b, c| b.projected_columns(c.as_str()));
            let operation = second
                .iter()
                .fold(builder, |b, c| b.projected_columns(c.as_str()))
                .build();
            let expected: Vec<String> = first.iter().chain(second.iter()).cloned().collect();
            if expected.is_empty() {
                prop_assert_eq!(operation.projected_columns, None);
            } else {
                prop_assert_eq!(operation.projected_columns, Some(expected));
            }
        }

        #[test]
        fn prop_should_hash_equal_values_equally(
            columns in proptest::collection::vec("[a-z]{1,4}", 0..4),
            expression in proptest::option::of("[a-z ]{0,12}"),
        ) {
            let build = || RenameColumnOperation::builder()
                .set_column_name(columns.first().cloned())
                .set_new_column_name(expression.clone())
                .build();
            let (left, right) = (build(), build());
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }

        #[test]
        fn prop_should_detect_any_field_difference(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
            let left = FilterOperation::builder().condition_expression(a.clone()).build();
            let right = FilterOperation::builder().condition_expression(b.clone()).build();
            prop_assert_eq!(left == right, a == b);
            prop_assert_ne!(left, FilterOperation::default());
        }
    }
}
