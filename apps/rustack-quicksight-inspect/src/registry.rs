//! Name-indexed tables of the enums and shapes the inspector can load.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use rustack_quicksight_model::input::{
    CreateDashboardInput, CreateDataSetInput, CreateDataSourceInput, DescribeUserInput,
    ListDashboardsInput, TagResourceInput,
};
use rustack_quicksight_model::output::{
    CreateDashboardOutput, CreateDataSetOutput, CreateDataSourceOutput, DescribeUserOutput,
    ListDashboardsOutput, TagResourceOutput,
};
use rustack_quicksight_model::types::{
    ClosedEnum, ColumnDataType, ColumnGroup, CredentialPair, DashboardBehavior,
    DashboardPublishOptions, DashboardSourceEntity, DashboardSummary, DashboardUIState,
    DataSetImportMode, DataSourceCredentials, DataSourceParameters, DataSourceType, FileFormat,
    GeoSpatialCountryCode, GeoSpatialDataRole, IdentityType, InputColumnDataType, JoinType,
    LogicalTable, Parameters, PhysicalTable, ResourcePermission, ResourceStatus, Tag,
    TextQualifier, TransformOperation, User, UserRole,
};
use rustack_quicksight_model::ParseEnumError;

/// A loaded shape, rendered both ways.
#[derive(Debug)]
pub struct Rendered {
    /// The `Display` rendering.
    pub display: String,
    /// The value re-serialized, with absent fields dropped.
    pub json: serde_json::Value,
}

type Renderer = fn(&str) -> Result<Rendered>;

fn render<T>(raw: &str) -> Result<Rendered>
where
    T: DeserializeOwned + Serialize + Display,
{
    let value: T = serde_json::from_str(raw)
        .with_context(|| format!("payload is not a valid {}", short_name::<T>()))?;
    let json = serde_json::to_value(&value).context("failed to re-serialize payload")?;
    Ok(Rendered {
        display: value.to_string(),
        json,
    })
}

fn short_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

const SHAPES: &[(&str, Renderer)] = &[
    ("CreateDashboardInput", render::<CreateDashboardInput>),
    ("CreateDashboardOutput", render::<CreateDashboardOutput>),
    ("ListDashboardsInput", render::<ListDashboardsInput>),
    ("ListDashboardsOutput", render::<ListDashboardsOutput>),
    ("CreateDataSetInput", render::<CreateDataSetInput>),
    ("CreateDataSetOutput", render::<CreateDataSetOutput>),
    ("CreateDataSourceInput", render::<CreateDataSourceInput>),
    ("CreateDataSourceOutput", render::<CreateDataSourceOutput>),
    ("DescribeUserInput", render::<DescribeUserInput>),
    ("DescribeUserOutput", render::<DescribeUserOutput>),
    ("TagResourceInput", render::<TagResourceInput>),
    ("TagResourceOutput", render::<TagResourceOutput>),
    ("ColumnGroup", render::<ColumnGroup>),
    ("CredentialPair", render::<CredentialPair>),
    ("DashboardPublishOptions", render::<DashboardPublishOptions>),
    ("DashboardSourceEntity", render::<DashboardSourceEntity>),
    ("DashboardSummary", render::<DashboardSummary>),
    ("DataSourceCredentials", render::<DataSourceCredentials>),
    ("DataSourceParameters", render::<DataSourceParameters>),
    ("LogicalTable", render::<LogicalTable>),
    ("Parameters", render::<Parameters>),
    ("PhysicalTable", render::<PhysicalTable>),
    ("ResourcePermission", render::<ResourcePermission>),
    ("Tag", render::<Tag>),
    ("TransformOperation", render::<TransformOperation>),
    ("User", render::<User>),
];

/// Strict parser and value table of one closed enum.
#[derive(Debug, Clone, Copy)]
pub struct EnumEntry {
    /// Enum type name.
    pub name: &'static str,
    parse: fn(&str) -> Result<&'static str, ParseEnumError>,
    values: fn() -> Vec<&'static str>,
}

impl EnumEntry {
    const fn of<E: ClosedEnum>() -> Self {
        Self {
            name: E::TYPE_NAME,
            parse: parse_canonical::<E>,
            values: canonical_values::<E>,
        }
    }

    /// Parse `value` strictly and return its canonical string.
    pub fn parse(&self, value: &str) -> Result<&'static str, ParseEnumError> {
        (self.parse)(value)
    }

    /// Every canonical string, in declaration order.
    pub fn values(&self) -> Vec<&'static str> {
        (self.values)()
    }
}

fn parse_canonical<E: ClosedEnum>(value: &str) -> Result<&'static str, ParseEnumError> {
    E::from_value(value).map(|parsed| parsed.as_str())
}

fn canonical_values<E: ClosedEnum>() -> Vec<&'static str> {
    E::VALUES.iter().map(E::as_str).collect()
}

const ENUMS: &[EnumEntry] = &[
    EnumEntry::of::<ColumnDataType>(),
    EnumEntry::of::<DashboardBehavior>(),
    EnumEntry::of::<DashboardUIState>(),
    EnumEntry::of::<DataSetImportMode>(),
    EnumEntry::of::<DataSourceType>(),
    EnumEntry::of::<FileFormat>(),
    EnumEntry::of::<GeoSpatialCountryCode>(),
    EnumEntry::of::<GeoSpatialDataRole>(),
    EnumEntry::of::<IdentityType>(),
    EnumEntry::of::<InputColumnDataType>(),
    EnumEntry::of::<JoinType>(),
    EnumEntry::of::<ResourceStatus>(),
    EnumEntry::of::<TextQualifier>(),
    EnumEntry::of::<UserRole>(),
];

/// Names of every loadable shape.
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    SHAPES.iter().map(|(name, _)| *name)
}

/// Deserialize `raw` as the shape called `name`.
pub fn render_shape(name: &str, raw: &str) -> Result<Rendered> {
    let (_, renderer) = SHAPES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .with_context(|| format!("unknown shape {name:?}, run `shapes` to list them"))?;
    renderer(raw)
}

/// Every registered enum.
pub fn enums() -> &'static [EnumEntry] {
    ENUMS
}

/// Look up an enum by type name.
pub fn find_enum(name: &str) -> Result<&'static EnumEntry> {
    ENUMS
        .iter()
        .find(|entry| entry.name == name)
        .with_context(|| format!("unknown enum {name:?}, run `enums` to list them"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_known_shape() {
        let rendered = render_shape("Tag", r#"{"Key":"team","Value":"bi"}"#).expect("render tag");
        assert_eq!(rendered.display, "{Key: team,Value: bi}");
        assert_eq!(rendered.json["Key"], "team");
    }

    #[test]
    fn test_should_reject_unknown_shape_name() {
        let err = render_shape("Dashboard", "{}").unwrap_err();
        assert!(err.to_string().contains("unknown shape"));
    }

    #[test]
    fn test_should_report_invalid_payload() {
        let err = render_shape("User", r#"{"Role": "author"}"#).unwrap_err();
        assert!(err.to_string().contains("payload is not a valid User"));
    }

    #[test]
    fn test_should_drop_unknown_fields_on_reserialization() {
        let rendered = render_shape("Tag", r#"{"Key":"k","Extra":1}"#).expect("render tag");
        assert_eq!(rendered.json, serde_json::json!({"Key": "k"}));
    }

    #[test]
    fn test_should_parse_enum_strictly() {
        let entry = find_enum("DataSourceType").expect("enum registered");
        assert_eq!(entry.parse("REDSHIFT"), Ok("REDSHIFT"));
        assert!(entry.parse("redshift").is_err());
        assert!(entry.values().contains(&"ATHENA"));
    }

    #[test]
    fn test_should_register_every_enum_once() {
        let mut names: Vec<_> = enums().iter().map(|entry| entry.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 14);
    }

    #[test]
    fn test_should_register_every_shape_once() {
        let mut names: Vec<_> = shape_names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
