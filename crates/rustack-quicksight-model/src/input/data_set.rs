//! Data set requests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::{
    ColumnGroup, DataSetImportMode, LogicalTable, PhysicalTable, ResourcePermission, Tag,
};

/// QuickSight CreateDataSet request.
///
/// `POST /accounts/{AwsAccountId}/data-sets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSetInput {
    /// Account that owns the data set.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    /// ID for the data set, unique per region and account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<String>,
    /// Display name of the data set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Physical tables, keyed by ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_table_map: Option<BTreeMap<String, PhysicalTable>>,
    /// Logical tables, keyed by ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_table_map: Option<BTreeMap<String, LogicalTable>>,
    /// Whether data is imported into SPICE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_mode: Option<DataSetImportMode>,
    /// Column groupings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_groups: Option<Vec<ColumnGroup>>,
    /// Permissions granted on the data set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    /// Tags attached to the data set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDataSetInput {
    /// Creates a new builder-style object to manufacture [`CreateDataSetInput`].
    #[must_use]
    pub fn builder() -> CreateDataSetInputBuilder {
        CreateDataSetInputBuilder::default()
    }
}

impl fmt::Display for CreateDataSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AwsAccountId", self.aws_account_id.as_deref())
            .field("DataSetId", self.data_set_id.as_deref())
            .field("Name", self.name.as_deref())
            .map("PhysicalTableMap", self.physical_table_map.as_ref())
            .map("LogicalTableMap", self.logical_table_map.as_ref())
            .field("ImportMode", self.import_mode)
            .list("ColumnGroups", self.column_groups.as_deref())
            .list("Permissions", self.permissions.as_deref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

/// A builder for [`CreateDataSetInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateDataSetInputBuilder {
    inner: CreateDataSetInput,
}

impl CreateDataSetInputBuilder {
    /// Account that owns the data set.
    #[must_use]
    pub fn aws_account_id(mut self, input: impl Into<String>) -> Self {
        self.inner.aws_account_id = Some(input.into());
        self
    }
    /// Account that owns the data set.
    #[must_use]
    pub fn set_aws_account_id(mut self, input: Option<String>) -> Self {
        self.inner.aws_account_id = input;
        self
    }
    /// ID for the data set, unique per region and account.
    #[must_use]
    pub fn data_set_id(mut self, input: impl Into<String>) -> Self {
        self.inner.data_set_id = Some(input.into());
        self
    }
    /// ID for the data set, unique per region and account.
    #[must_use]
    pub fn set_data_set_id(mut self, input: Option<String>) -> Self {
        self.inner.data_set_id = input;
        self
    }
    /// Display name of the data set.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the data set.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Adds a key-value pair to `physical_table_map`.
    ///
    /// To override the contents of this collection use [`set_physical_table_map`](Self::set_physical_table_map).
    #[must_use]
    pub fn physical_table_map(mut self, k: impl Into<String>, v: PhysicalTable) -> Self {
        self.inner
            .physical_table_map
            .get_or_insert_with(BTreeMap::new)
            .insert(k.into(), v);
        self
    }
    /// Physical tables, keyed by ID.
    #[must_use]
    pub fn set_physical_table_map(
        mut self,
        input: Option<BTreeMap<String, PhysicalTable>>,
    ) -> Self {
        self.inner.physical_table_map = input;
        self
    }
    /// Adds a key-value pair to `logical_table_map`.
    ///
    /// To override the contents of this collection use [`set_logical_table_map`](Self::set_logical_table_map).
    #[must_use]
    pub fn logical_table_map(mut self, k: impl Into<String>, v: LogicalTable) -> Self {
        self.inner
            .logical_table_map
            .get_or_insert_with(BTreeMap::new)
            .insert(k.into(), v);
        self
    }
    /// Logical tables, keyed by ID.
    #[must_use]
    pub fn set_logical_table_map(mut self, input: Option<BTreeMap<String, LogicalTable>>) -> Self {
        self.inner.logical_table_map = input;
        self
    }
    /// Whether data is imported into SPICE.
    #[must_use]
    pub fn import_mode(mut self, input: DataSetImportMode) -> Self {
        self.inner.import_mode = Some(input);
        self
    }
    /// Whether data is imported into SPICE.
    #[must_use]
    pub fn set_import_mode(mut self, input: Option<DataSetImportMode>) -> Self {
        self.inner.import_mode = input;
        self
    }
    /// Appends an item to `column_groups`.
    ///
    /// To override the contents of this collection use [`set_column_groups`](Self::set_column_groups).
    #[must_use]
    pub fn column_groups(mut self, input: ColumnGroup) -> Self {
        self.inner
            .column_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Column groupings.
    #[must_use]
    pub fn set_column_groups(mut self, input: Option<Vec<ColumnGroup>>) -> Self {
        self.inner.column_groups = input;
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
    /// Permissions granted on the data set.
    #[must_use]
    pub fn set_permissions(mut self, input: Option<Vec<ResourcePermission>>) -> Self {
        self.inner.permissions = input;
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
    /// Tags attached to the data set.
    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.inner.tags = input;
        self
    }
    /// Consumes the builder and constructs a [`CreateDataSetInput`].
    #[must_use]
    pub fn build(self) -> CreateDataSetInput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogicalTableSource, ProjectOperation, RelationalTable, TransformOperation};

    #[test]
    fn test_should_insert_table_map_entries() {
        let input = CreateDataSetInput::builder()
            .aws_account_id("111122223333")
            .data_set_id("orders")
            .import_mode(DataSetImportMode::Spice)
            .physical_table_map(
                "orders-table",
                PhysicalTable::RelationalTable(
                    RelationalTable::builder()
                        .data_source_arn("arn:aws:quicksight:us-east-1:111122223333:datasource/pg")
                        .schema("public")
                        .name("orders")
                        .build(),
                ),
            )
            .logical_table_map(
                "orders-logical",
                LogicalTable::builder()
                    .alias("orders")
                    .source(LogicalTableSource::PhysicalTableId("orders-table".to_owned()))
                    .data_transforms(TransformOperation::ProjectOperation(
                        ProjectOperation::builder().projected_columns("id").build(),
                    ))
                    .build(),
            )
            .build();

        let physical = input.physical_table_map.as_ref().expect("physical tables");
        assert_eq!(physical.len(), 1);
        assert!(physical["orders-table"].as_relational_table().is_some());

        let json = serde_json::to_value(&input).expect("serialize request");
        assert_eq!(json["ImportMode"], "SPICE");
        assert_eq!(
            json["LogicalTableMap"]["orders-logical"]["Source"]["PhysicalTableId"],
            "orders-table"
        );
    }

    #[test]
    fn test_should_replace_map_entry_with_same_key() {
        let input = CreateDataSetInput::builder()
            .logical_table_map("t", LogicalTable::builder().alias("first").build())
            .logical_table_map("t", LogicalTable::builder().alias("second").build())
            .build();
        let tables = input.logical_table_map.expect("logical tables");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables["t"].alias.as_deref(), Some("second"));
    }

    #[test]
    fn test_should_render_map_field() {
        let input = CreateDataSetInput::builder()
            .logical_table_map("t", LogicalTable::builder().alias("orders").build())
            .build();
        assert_eq!(input.to_string(), "{LogicalTableMap: {t={Alias: orders}}}");
    }
}
