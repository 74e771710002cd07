//! Dashboard publishing shapes.
//!
//! Covers the publish options readers see, the template a dashboard is created
//! from, the parameter overrides applied at creation, and the summary returned
//! by `ListDashboards`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::enums::{DashboardBehavior, DashboardUIState};

// ---------------------------------------------------------------------------
// Publish options
// ---------------------------------------------------------------------------

/// Ad hoc (one-time) filtering option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdHocFilteringOption {
    /// Whether readers can filter the dashboard ad hoc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<DashboardBehavior>,
}

impl AdHocFilteringOption {
    /// Creates a new builder-style object to manufacture [`AdHocFilteringOption`].
    #[must_use]
    pub fn builder() -> AdHocFilteringOptionBuilder {
        AdHocFilteringOptionBuilder::default()
    }
}

impl fmt::Display for AdHocFilteringOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AvailabilityStatus", self.availability_status)
            .finish()
    }
}

/// A builder for [`AdHocFilteringOption`].
#[derive(Debug, Clone, Default)]
pub struct AdHocFilteringOptionBuilder {
    inner: AdHocFilteringOption,
}

impl AdHocFilteringOptionBuilder {
    /// Whether readers can filter the dashboard ad hoc.
    #[must_use]
    pub fn availability_status(mut self, input: DashboardBehavior) -> Self {
        self.inner.availability_status = Some(input);
        self
    }
    /// Whether readers can filter the dashboard ad hoc.
    #[must_use]
    pub fn set_availability_status(mut self, input: Option<DashboardBehavior>) -> Self {
        self.inner.availability_status = input;
        self
    }
    /// Consumes the builder and constructs a [`AdHocFilteringOption`].
    #[must_use]
    pub fn build(self) -> AdHocFilteringOption {
        self.inner
    }
}

/// Export-to-CSV option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportToCSVOption {
    /// Whether readers can export visuals to CSV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<DashboardBehavior>,
}

impl ExportToCSVOption {
    /// Creates a new builder-style object to manufacture [`ExportToCSVOption`].
    #[must_use]
    pub fn builder() -> ExportToCSVOptionBuilder {
        ExportToCSVOptionBuilder::default()
    }
}

impl fmt::Display for ExportToCSVOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AvailabilityStatus", self.availability_status)
            .finish()
    }
}

/// A builder for [`ExportToCSVOption`].
#[derive(Debug, Clone, Default)]
pub struct ExportToCSVOptionBuilder {
    inner: ExportToCSVOption,
}

impl ExportToCSVOptionBuilder {
    /// Whether readers can export visuals to CSV.
    #[must_use]
    pub fn availability_status(mut self, input: DashboardBehavior) -> Self {
        self.inner.availability_status = Some(input);
        self
    }
    /// Whether readers can export visuals to CSV.
    #[must_use]
    pub fn set_availability_status(mut self, input: Option<DashboardBehavior>) -> Self {
        self.inner.availability_status = input;
        self
    }
    /// Consumes the builder and constructs a [`ExportToCSVOption`].
    #[must_use]
    pub fn build(self) -> ExportToCSVOption {
        self.inner
    }
}

/// Sheet controls option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SheetControlsOption {
    /// Initial state of the sheet controls pane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_state: Option<DashboardUIState>,
}

impl SheetControlsOption {
    /// Creates a new builder-style object to manufacture [`SheetControlsOption`].
    #[must_use]
    pub fn builder() -> SheetControlsOptionBuilder {
        SheetControlsOptionBuilder::default()
    }
}

impl fmt::Display for SheetControlsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("VisibilityState", self.visibility_state)
            .finish()
    }
}

/// A builder for [`SheetControlsOption`].
#[derive(Debug, Clone, Default)]
pub struct SheetControlsOptionBuilder {
    inner: SheetControlsOption,
}

impl SheetControlsOptionBuilder {
    /// Initial state of the sheet controls pane.
    #[must_use]
    pub fn visibility_state(mut self, input: DashboardUIState) -> Self {
        self.inner.visibility_state = Some(input);
        self
    }
    /// Initial state of the sheet controls pane.
    #[must_use]
    pub fn set_visibility_state(mut self, input: Option<DashboardUIState>) -> Self {
        self.inner.visibility_state = input;
        self
    }
    /// Consumes the builder and constructs a [`SheetControlsOption`].
    #[must_use]
    pub fn build(self) -> SheetControlsOption {
        self.inner
    }
}

/// Options applied when a dashboard is published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardPublishOptions {
    /// Ad hoc filtering option. Enabled by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_hoc_filtering_option: Option<AdHocFilteringOption>,
    /// Export-to-CSV option. Enabled by default.
    #[serde(rename = "ExportToCSVOption", skip_serializing_if = "Option::is_none")]
    pub export_to_csv_option: Option<ExportToCSVOption>,
    /// Sheet controls option. Collapsed by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_controls_option: Option<SheetControlsOption>,
}

impl DashboardPublishOptions {
    /// Creates a new builder-style object to manufacture [`DashboardPublishOptions`].
    #[must_use]
    pub fn builder() -> DashboardPublishOptionsBuilder {
        DashboardPublishOptionsBuilder::default()
    }
}

impl fmt::Display for DashboardPublishOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("AdHocFilteringOption", self.ad_hoc_filtering_option.as_ref())
            .field("ExportToCSVOption", self.export_to_csv_option.as_ref())
            .field("SheetControlsOption", self.sheet_controls_option.as_ref())
            .finish()
    }
}

/// A builder for [`DashboardPublishOptions`].
#[derive(Debug, Clone, Default)]
pub struct DashboardPublishOptionsBuilder {
    inner: DashboardPublishOptions,
}

impl DashboardPublishOptionsBuilder {
    /// Ad hoc filtering option. Enabled by default.
    #[must_use]
    pub fn ad_hoc_filtering_option(mut self, input: AdHocFilteringOption) -> Self {
        self.inner.ad_hoc_filtering_option = Some(input);
        self
    }
    /// Ad hoc filtering option. Enabled by default.
    #[must_use]
    pub fn set_ad_hoc_filtering_option(mut self, input: Option<AdHocFilteringOption>) -> Self {
        self.inner.ad_hoc_filtering_option = input;
        self
    }
    /// Export-to-CSV option. Enabled by default.
    #[must_use]
    pub fn export_to_csv_option(mut self, input: ExportToCSVOption) -> Self {
        self.inner.export_to_csv_option = Some(input);
        self
    }
    /// Export-to-CSV option. Enabled by default.
    #[must_use]
    pub fn set_export_to_csv_option(mut self, input: Option<ExportToCSVOption>) -> Self {
        self.inner.export_to_csv_option = input;
        self
    }
    /// Sheet controls option. Collapsed by default.
    #[must_use]
    pub fn sheet_controls_option(mut self, input: SheetControlsOption) -> Self {
        self.inner.sheet_controls_option = Some(input);
        self
    }
    /// Sheet controls option. Collapsed by default.
    #[must_use]
    pub fn set_sheet_controls_option(mut self, input: Option<SheetControlsOption>) -> Self {
        self.inner.sheet_controls_option = input;
        self
    }
    /// Consumes the builder and constructs a [`DashboardPublishOptions`].
    #[must_use]
    pub fn build(self) -> DashboardPublishOptions {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Source entity
// ---------------------------------------------------------------------------

/// Binds a template's data set placeholder to a concrete data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetReference {
    /// Placeholder name declared by the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_placeholder: Option<String>,
    /// ARN of the data set substituted for the placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_arn: Option<String>,
}

impl DataSetReference {
    /// Creates a new builder-style object to manufacture [`DataSetReference`].
    #[must_use]
    pub fn builder() -> DataSetReferenceBuilder {
        DataSetReferenceBuilder::default()
    }
}

impl fmt::Display for DataSetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("DataSetPlaceholder", self.data_set_placeholder.as_deref())
            .field("DataSetArn", self.data_set_arn.as_deref())
            .finish()
    }
}

/// A builder for [`DataSetReference`].
#[derive(Debug, Clone, Default)]
pub struct DataSetReferenceBuilder {
    inner: DataSetReference,
}

impl DataSetReferenceBuilder {
    /// Placeholder name declared by the template.
    #[must_use]
    pub fn data_set_placeholder(mut self, input: impl Into<String>) -> Self {
        self.inner.data_set_placeholder = Some(input.into());
        self
    }
    /// Placeholder name declared by the template.
    #[must_use]
    pub fn set_data_set_placeholder(mut self, input: Option<String>) -> Self {
        self.inner.data_set_placeholder = input;
        self
    }
    /// ARN of the data set substituted for the placeholder.
    #[must_use]
    pub fn data_set_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.data_set_arn = Some(input.into());
        self
    }
    /// ARN of the data set substituted for the placeholder.
    #[must_use]
    pub fn set_data_set_arn(mut self, input: Option<String>) -> Self {
        self.inner.data_set_arn = input;
        self
    }
    /// Consumes the builder and constructs a [`DataSetReference`].
    #[must_use]
    pub fn build(self) -> DataSetReference {
        self.inner
    }
}

/// Template a dashboard is created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSourceTemplate {
    /// Data sets replacing the template's placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_references: Option<Vec<DataSetReference>>,
    /// ARN of the source template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl DashboardSourceTemplate {
    /// Creates a new builder-style object to manufacture [`DashboardSourceTemplate`].
    #[must_use]
    pub fn builder() -> DashboardSourceTemplateBuilder {
        DashboardSourceTemplateBuilder::default()
    }
}

impl fmt::Display for DashboardSourceTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .list("DataSetReferences", self.data_set_references.as_deref())
            .field("Arn", self.arn.as_deref())
            .finish()
    }
}

/// A builder for [`DashboardSourceTemplate`].
#[derive(Debug, Clone, Default)]
pub struct DashboardSourceTemplateBuilder {
    inner: DashboardSourceTemplate,
}

impl DashboardSourceTemplateBuilder {
    /// Appends an item to `data_set_references`.
    ///
    /// To override the contents of this collection use [`set_data_set_references`](Self::set_data_set_references).
    #[must_use]
    pub fn data_set_references(mut self, input: DataSetReference) -> Self {
        self.inner
            .data_set_references
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Data sets replacing the template's placeholders.
    #[must_use]
    pub fn set_data_set_references(mut self, input: Option<Vec<DataSetReference>>) -> Self {
        self.inner.data_set_references = input;
        self
    }
    /// ARN of the source template.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// ARN of the source template.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// Consumes the builder and constructs a [`DashboardSourceTemplate`].
    #[must_use]
    pub fn build(self) -> DashboardSourceTemplate {
        self.inner
    }
}

/// Entity a dashboard is created from.
///
/// Exactly one member is set; the only member today is a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardSourceEntity {
    /// Create the dashboard from a template.
    SourceTemplate(DashboardSourceTemplate),
}

impl DashboardSourceEntity {
    /// Returns the wire name of the member that is set.
    #[must_use]
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::SourceTemplate(_) => "SourceTemplate",
        }
    }
}

impl fmt::Display for DashboardSourceEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceTemplate(value) => display::variant(f, "SourceTemplate", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// String parameter override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringParameter {
    /// Display name of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl StringParameter {
    /// Creates a new builder-style object to manufacture [`StringParameter`].
    #[must_use]
    pub fn builder() -> StringParameterBuilder {
        StringParameterBuilder::default()
    }
}

impl fmt::Display for StringParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .list("Values", self.values.as_deref())
            .finish()
    }
}

/// A builder for [`StringParameter`].
#[derive(Debug, Clone, Default)]
pub struct StringParameterBuilder {
    inner: StringParameter,
}

impl StringParameterBuilder {
    /// Display name of the parameter.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the parameter.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Appends an item to `values`.
    ///
    /// To override the contents of this collection use [`set_values`](Self::set_values).
    #[must_use]
    pub fn values(mut self, input: impl Into<String>) -> Self {
        self.inner
            .values
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }
    /// Values to apply.
    #[must_use]
    pub fn set_values(mut self, input: Option<Vec<String>>) -> Self {
        self.inner.values = input;
        self
    }
    /// Consumes the builder and constructs a [`StringParameter`].
    #[must_use]
    pub fn build(self) -> StringParameter {
        self.inner
    }
}

/// Integer parameter override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegerParameter {
    /// Display name of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<i64>>,
}

impl IntegerParameter {
    /// Creates a new builder-style object to manufacture [`IntegerParameter`].
    #[must_use]
    pub fn builder() -> IntegerParameterBuilder {
        IntegerParameterBuilder::default()
    }
}

impl fmt::Display for IntegerParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .list("Values", self.values.as_deref())
            .finish()
    }
}

/// A builder for [`IntegerParameter`].
#[derive(Debug, Clone, Default)]
pub struct IntegerParameterBuilder {
    inner: IntegerParameter,
}

impl IntegerParameterBuilder {
    /// Display name of the parameter.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the parameter.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Appends an item to `values`.
    ///
    /// To override the contents of this collection use [`set_values`](Self::set_values).
    #[must_use]
    pub fn values(mut self, input: i64) -> Self {
        self.inner.values.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Values to apply.
    #[must_use]
    pub fn set_values(mut self, input: Option<Vec<i64>>) -> Self {
        self.inner.values = input;
        self
    }
    /// Consumes the builder and constructs a [`IntegerParameter`].
    #[must_use]
    pub fn build(self) -> IntegerParameter {
        self.inner
    }
}

/// Date-time parameter override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateTimeParameter {
    /// Display name of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values to apply.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub values: Option<Vec<DateTime<Utc>>>,
}

impl DateTimeParameter {
    /// Creates a new builder-style object to manufacture [`DateTimeParameter`].
    #[must_use]
    pub fn builder() -> DateTimeParameterBuilder {
        DateTimeParameterBuilder::default()
    }
}

impl fmt::Display for DateTimeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Name", self.name.as_deref())
            .list("Values", self.values.as_deref())
            .finish()
    }
}

/// A builder for [`DateTimeParameter`].
#[derive(Debug, Clone, Default)]
pub struct DateTimeParameterBuilder {
    inner: DateTimeParameter,
}

impl DateTimeParameterBuilder {
    /// Display name of the parameter.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name of the parameter.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Appends an item to `values`.
    ///
    /// To override the contents of this collection use [`set_values`](Self::set_values).
    #[must_use]
    pub fn values(mut self, input: DateTime<Utc>) -> Self {
        self.inner.values.get_or_insert_with(Vec::new).push(input);
        self
    }
    /// Values to apply.
    #[must_use]
    pub fn set_values(mut self, input: Option<Vec<DateTime<Utc>>>) -> Self {
        self.inner.values = input;
        self
    }
    /// Consumes the builder and constructs a [`DateTimeParameter`].
    #[must_use]
    pub fn build(self) -> DateTimeParameter {
        self.inner
    }
}

/// Parameter overrides applied when a dashboard is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameters {
    /// String parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_parameters: Option<Vec<StringParameter>>,
    /// Integer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_parameters: Option<Vec<IntegerParameter>>,
    /// Date-time parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_parameters: Option<Vec<DateTimeParameter>>,
}

impl Parameters {
    /// Creates a new builder-style object to manufacture [`Parameters`].
    #[must_use]
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .list("StringParameters", self.string_parameters.as_deref())
            .list("IntegerParameters", self.integer_parameters.as_deref())
            .list("DateTimeParameters", self.date_time_parameters.as_deref())
            .finish()
    }
}

/// A builder for [`Parameters`].
#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    inner: Parameters,
}

impl ParametersBuilder {
    /// Appends an item to `string_parameters`.
    ///
    /// To override the contents of this collection use [`set_string_parameters`](Self::set_string_parameters).
    #[must_use]
    pub fn string_parameters(mut self, input: StringParameter) -> Self {
        self.inner
            .string_parameters
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// String parameters.
    #[must_use]
    pub fn set_string_parameters(mut self, input: Option<Vec<StringParameter>>) -> Self {
        self.inner.string_parameters = input;
        self
    }
    /// Appends an item to `integer_parameters`.
    ///
    /// To override the contents of this collection use [`set_integer_parameters`](Self::set_integer_parameters).
    #[must_use]
    pub fn integer_parameters(mut self, input: IntegerParameter) -> Self {
        self.inner
            .integer_parameters
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Integer parameters.
    #[must_use]
    pub fn set_integer_parameters(mut self, input: Option<Vec<IntegerParameter>>) -> Self {
        self.inner.integer_parameters = input;
        self
    }
    /// Appends an item to `date_time_parameters`.
    ///
    /// To override the contents of this collection use [`set_date_time_parameters`](Self::set_date_time_parameters).
    #[must_use]
    pub fn date_time_parameters(mut self, input: DateTimeParameter) -> Self {
        self.inner
            .date_time_parameters
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }
    /// Date-time parameters.
    #[must_use]
    pub fn set_date_time_parameters(mut self, input: Option<Vec<DateTimeParameter>>) -> Self {
        self.inner.date_time_parameters = input;
        self
    }
    /// Consumes the builder and constructs a [`Parameters`].
    #[must_use]
    pub fn build(self) -> Parameters {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Dashboard entry returned by `ListDashboards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSummary {
    /// Dashboard ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Dashboard ID, unique per account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Time the dashboard was created.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<DateTime<Utc>>,
    /// Time the dashboard was last updated.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_time: Option<DateTime<Utc>>,
    /// Version number of the published dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_version_number: Option<i64>,
    /// Time the dashboard was last published.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_published_time: Option<DateTime<Utc>>,
}

impl DashboardSummary {
    /// Creates a new builder-style object to manufacture [`DashboardSummary`].
    #[must_use]
    pub fn builder() -> DashboardSummaryBuilder {
        DashboardSummaryBuilder::default()
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Arn", self.arn.as_deref())
            .field("DashboardId", self.dashboard_id.as_deref())
            .field("Name", self.name.as_deref())
            .field("CreatedTime", self.created_time.as_ref())
            .field("LastUpdatedTime", self.last_updated_time.as_ref())
            .field("PublishedVersionNumber", self.published_version_number)
            .field("LastPublishedTime", self.last_published_time.as_ref())
            .finish()
    }
}

/// A builder for [`DashboardSummary`].
#[derive(Debug, Clone, Default)]
pub struct DashboardSummaryBuilder {
    inner: DashboardSummary,
}

impl DashboardSummaryBuilder {
    /// Dashboard ARN.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// Dashboard ARN.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// Dashboard ID, unique per account.
    #[must_use]
    pub fn dashboard_id(mut self, input: impl Into<String>) -> Self {
        self.inner.dashboard_id = Some(input.into());
        self
    }
    /// Dashboard ID, unique per account.
    #[must_use]
    pub fn set_dashboard_id(mut self, input: Option<String>) -> Self {
        self.inner.dashboard_id = input;
        self
    }
    /// Display name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.inner.name = Some(input.into());
        self
    }
    /// Display name.
    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.inner.name = input;
        self
    }
    /// Time the dashboard was created.
    #[must_use]
    pub fn created_time(mut self, input: DateTime<Utc>) -> Self {
        self.inner.created_time = Some(input);
        self
    }
    /// Time the dashboard was created.
    #[must_use]
    pub fn set_created_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.inner.created_time = input;
        self
    }
    /// Time the dashboard was last updated.
    #[must_use]
    pub fn last_updated_time(mut self, input: DateTime<Utc>) -> Self {
        self.inner.last_updated_time = Some(input);
        self
    }
    /// Time the dashboard was last updated.
    #[must_use]
    pub fn set_last_updated_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.inner.last_updated_time = input;
        self
    }
    /// Version number of the published dashboard.
    #[must_use]
    pub fn published_version_number(mut self, input: i64) -> Self {
        self.inner.published_version_number = Some(input);
        self
    }
    /// Version number of the published dashboard.
    #[must_use]
    pub fn set_published_version_number(mut self, input: Option<i64>) -> Self {
        self.inner.published_version_number = input;
        self
    }
    /// Time the dashboard was last published.
    #[must_use]
    pub fn last_published_time(mut self, input: DateTime<Utc>) -> Self {
        self.inner.last_published_time = Some(input);
        self
    }
    /// Time the dashboard was last published.
    #[must_use]
    pub fn set_last_published_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.inner.last_published_time = input;
        self
    }
    /// Consumes the builder and constructs a [`DashboardSummary`].
    #[must_use]
    pub fn build(self) -> DashboardSummary {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_render_ad_hoc_filtering_option() {
        let option = AdHocFilteringOption::builder()
            .availability_status(DashboardBehavior::Enabled)
            .build();
        assert_eq!(option.availability_status, Some(DashboardBehavior::Enabled));
        assert!(option.to_string().contains("AvailabilityStatus: ENABLED"));
        assert_eq!(AdHocFilteringOption::default().to_string(), "{}");
    }

    #[test]
    fn test_should_clear_field_with_set_none() {
        let option = SheetControlsOption::builder()
            .visibility_state(DashboardUIState::Expanded)
            .set_visibility_state(None)
            .build();
        assert_eq!(option, SheetControlsOption::default());
    }

    #[test]
    fn test_should_serialize_publish_options_with_wire_names() {
        let options = DashboardPublishOptions::builder()
            .export_to_csv_option(
                ExportToCSVOption::builder()
                    .availability_status(DashboardBehavior::Disabled)
                    .build(),
            )
            .build();
        let json = serde_json::to_value(&options).expect("serialize publish options");
        assert_eq!(
            json,
            serde_json::json!({"ExportToCSVOption": {"AvailabilityStatus": "DISABLED"}})
        );
        let parsed: DashboardPublishOptions =
            serde_json::from_value(json).expect("deserialize publish options");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_should_serialize_source_entity_as_single_key_object() {
        let entity = DashboardSourceEntity::SourceTemplate(
            DashboardSourceTemplate::builder()
                .arn("arn:aws:quicksight:us-east-1:111122223333:template/sales")
                .data_set_references(
                    DataSetReference::builder()
                        .data_set_placeholder("orders")
                        .data_set_arn("arn:aws:quicksight:us-east-1:111122223333:dataset/orders")
                        .build(),
                )
                .build(),
        );
        let json = serde_json::to_value(&entity).expect("serialize source entity");
        assert_eq!(
            json["SourceTemplate"]["DataSetReferences"][0]["DataSetPlaceholder"],
            "orders"
        );
        assert_eq!(entity.member_name(), "SourceTemplate");
        let parsed: DashboardSourceEntity =
            serde_json::from_value(json).expect("deserialize source entity");
        assert_eq!(parsed, entity);
    }

    #[test]
    fn test_should_reject_source_entity_with_two_members() {
        let raw = r#"{"SourceTemplate": {}, "Other": {}}"#;
        assert!(serde_json::from_str::<DashboardSourceEntity>(raw).is_err());
    }

    #[test]
    fn test_should_render_nested_shapes() {
        let entity = DashboardSourceEntity::SourceTemplate(
            DashboardSourceTemplate::builder()
                .data_set_references(
                    DataSetReference::builder()
                        .data_set_placeholder("orders")
                        .build(),
                )
                .arn("arn:t")
                .build(),
        );
        assert_eq!(
            entity.to_string(),
            "{SourceTemplate: {DataSetReferences: [{DataSetPlaceholder: orders}],Arn: arn:t}}"
        );
    }

    #[test]
    fn test_should_append_parameter_values_in_order() {
        let parameter = IntegerParameter::builder()
            .name("year")
            .values(2019)
            .values(2020)
            .values(2019)
            .build();
        assert_eq!(parameter.values, Some(vec![2019, 2020, 2019]));

        let parameters = Parameters::builder()
            .integer_parameters(parameter)
            .set_string_parameters(Some(Vec::new()))
            .build();
        assert_eq!(parameters.string_parameters, Some(Vec::new()));
        assert!(parameters.date_time_parameters.is_none());
        assert_eq!(
            parameters.to_string(),
            "{StringParameters: [],IntegerParameters: [{Name: year,Values: [2019, 2020, 2019]}]}"
        );
    }

    #[test]
    fn test_should_deserialize_dashboard_summary() {
        let raw = r#"{
            "Arn": "arn:aws:quicksight:us-east-1:111122223333:dashboard/sales",
            "DashboardId": "sales",
            "Name": "Sales",
            "CreatedTime": 1574812800,
            "LastPublishedTime": 1574812800.5,
            "PublishedVersionNumber": 3
        }"#;
        let summary: DashboardSummary = serde_json::from_str(raw).expect("deserialize summary");
        assert_eq!(summary.dashboard_id.as_deref(), Some("sales"));
        assert_eq!(
            summary.created_time,
            Some(Utc.timestamp_opt(1_574_812_800, 0).unwrap())
        );
        assert_eq!(
            summary.last_published_time,
            Some(Utc.timestamp_millis_opt(1_574_812_800_500).unwrap())
        );
        assert_eq!(summary.published_version_number, Some(3));
        assert!(summary.last_updated_time.is_none());
    }

    #[test]
    fn test_should_serialize_date_time_parameter_values() {
        let parameter = DateTimeParameter::builder()
            .name("since")
            .values(Utc.timestamp_opt(1_574_812_800, 0).unwrap())
            .build();
        let json = serde_json::to_string(&parameter).expect("serialize parameter");
        assert_eq!(json, r#"{"Name":"since","Values":[1574812800]}"#);
    }
}
