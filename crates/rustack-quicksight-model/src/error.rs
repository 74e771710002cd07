//! QuickSight error types.
//!
//! Two families live here:
//!
//! - [`ParseEnumError`]: a client-side failure converting a string into one of
//!   the closed-set enums in [`crate::types`].
//! - [`QuickSightError`]: a service-reported failure. The transport layer
//!   builds one from a failure response and hands it to the caller unchanged.

use std::fmt;

use crate::types::ExceptionResourceType;

/// Failure converting a string into a closed-set enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    /// The input was empty or absent.
    #[error("{type_name} value cannot be null or empty")]
    Empty {
        /// Name of the enum being parsed.
        type_name: &'static str,
    },

    /// The input is not one of the canonical strings of the enum.
    #[error("cannot create {type_name} from value {value:?}")]
    Unrecognized {
        /// Name of the enum being parsed.
        type_name: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ParseEnumError {
    /// Returns the name of the enum that rejected the input.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Empty { type_name } | Self::Unrecognized { type_name, .. } => type_name,
        }
    }
}

/// Well-known QuickSight error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum QuickSightErrorCode {
    /// The caller lacks permission, or the account is not subscribed.
    AccessDeniedException,
    /// A resource is being updated by another request.
    ConcurrentUpdatingException,
    /// Updating or deleting a resource caused an inconsistent state.
    ConflictException,
    /// An internal failure occurred.
    #[default]
    InternalFailureException,
    /// The `NextToken` value isn't valid.
    InvalidNextTokenException,
    /// One or more parameters have a value that isn't valid.
    InvalidParameterValueException,
    /// A limit is exceeded.
    LimitExceededException,
    /// One or more preconditions aren't met.
    PreconditionNotMetException,
    /// The user isn't found.
    QuickSightUserNotFoundException,
    /// The resource specified already exists.
    ResourceExistsException,
    /// One or more resources can't be found.
    ResourceNotFoundException,
    /// The resource is currently unavailable.
    ResourceUnavailableException,
    /// Access is throttled.
    ThrottlingException,
    /// The operation is not supported on the account's edition.
    UnsupportedUserEditionException,
}

impl QuickSightErrorCode {
    /// Every known error code.
    pub const ALL: &'static [Self] = &[
        Self::AccessDeniedException,
        Self::ConcurrentUpdatingException,
        Self::ConflictException,
        Self::InternalFailureException,
        Self::InvalidNextTokenException,
        Self::InvalidParameterValueException,
        Self::LimitExceededException,
        Self::PreconditionNotMetException,
        Self::QuickSightUserNotFoundException,
        Self::ResourceExistsException,
        Self::ResourceNotFoundException,
        Self::ResourceUnavailableException,
        Self::ThrottlingException,
        Self::UnsupportedUserEditionException,
    ];

    /// Returns the error code string as reported by the service.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::ConcurrentUpdatingException => "ConcurrentUpdatingException",
            Self::ConflictException => "ConflictException",
            Self::InternalFailureException => "InternalFailureException",
            Self::InvalidNextTokenException => "InvalidNextTokenException",
            Self::InvalidParameterValueException => "InvalidParameterValueException",
            Self::LimitExceededException => "LimitExceededException",
            Self::PreconditionNotMetException => "PreconditionNotMetException",
            Self::QuickSightUserNotFoundException => "QuickSightUserNotFoundException",
            Self::ResourceExistsException => "ResourceExistsException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ResourceUnavailableException => "ResourceUnavailableException",
            Self::ThrottlingException => "ThrottlingException",
            Self::UnsupportedUserEditionException => "UnsupportedUserEditionException",
        }
    }

    /// Parse a service error code string.
    ///
    /// Accepts both the bare code and the namespaced form
    /// (`com.amazonaws.quicksight#ThrottlingException`), and ignores any
    /// trailing `:`-separated suffix the service may append.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.split(':').next().unwrap_or(name);
        let name = name.rsplit('#').next().unwrap_or(name);
        Self::ALL.iter().copied().find(|code| code.as_str() == name)
    }

    /// Returns `true` if errors of this kind may carry a resource type.
    #[must_use]
    pub fn carries_resource_type(&self) -> bool {
        matches!(
            self,
            Self::LimitExceededException
                | Self::ResourceExistsException
                | Self::ResourceNotFoundException
                | Self::ResourceUnavailableException
        )
    }
}

impl fmt::Display for QuickSightErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A QuickSight service error.
///
/// The message is required. The request id and resource type are filled in
/// by the layer that received the failure response, after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSightError {
    /// The error code.
    pub code: QuickSightErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The AWS request id of the failed call.
    pub request_id: Option<String>,
    /// The resource type the failure refers to, when the kind carries one.
    pub resource_type: Option<ExceptionResourceType>,
}

impl fmt::Display for QuickSightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuickSightError({}): {}", self.code, self.message)?;
        if let Some(resource_type) = &self.resource_type {
            write!(f, " (resource type: {resource_type})")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for QuickSightError {}

impl QuickSightError {
    /// Create a new `QuickSightError` with a message.
    #[must_use]
    pub fn new(code: QuickSightErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            resource_type: None,
        }
    }

    /// Set the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the resource type.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: ExceptionResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Replace the request id in place.
    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id;
    }

    /// Replace the resource type in place.
    pub fn set_resource_type(&mut self, resource_type: Option<ExceptionResourceType>) {
        self.resource_type = resource_type;
    }

    /// Returns the request id, if set.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the resource type, if set.
    #[must_use]
    pub fn resource_type(&self) -> Option<&ExceptionResourceType> {
        self.resource_type.as_ref()
    }

    // -- Convenience constructors --

    /// Access denied.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::AccessDeniedException, message)
    }

    /// Concurrent update in progress.
    #[must_use]
    pub fn concurrent_updating(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ConcurrentUpdatingException, message)
    }

    /// Conflicting resource state.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ConflictException, message)
    }

    /// Internal failure.
    #[must_use]
    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::InternalFailureException, message)
    }

    /// Pagination token not valid.
    #[must_use]
    pub fn invalid_next_token(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::InvalidNextTokenException, message)
    }

    /// Parameter value not valid.
    #[must_use]
    pub fn invalid_parameter_value(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::InvalidParameterValueException, message)
    }

    /// Limit exceeded.
    #[must_use]
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::LimitExceededException, message)
    }

    /// Precondition not met.
    #[must_use]
    pub fn precondition_not_met(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::PreconditionNotMetException, message)
    }

    /// QuickSight user not found.
    #[must_use]
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::QuickSightUserNotFoundException, message)
    }

    /// Resource already exists.
    #[must_use]
    pub fn resource_exists(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ResourceExistsException, message)
    }

    /// Resource not found.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ResourceNotFoundException, message)
    }

    /// Resource unavailable.
    #[must_use]
    pub fn resource_unavailable(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ResourceUnavailableException, message)
    }

    /// Throttled.
    #[must_use]
    pub fn throttling(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::ThrottlingException, message)
    }

    /// Unsupported edition.
    #[must_use]
    pub fn unsupported_user_edition(message: impl Into<String>) -> Self {
        Self::new(QuickSightErrorCode::UnsupportedUserEditionException, message)
    }
}

/// Create a `QuickSightError` from an error code and message.
///
/// # Examples
///
/// ```
/// use rustack_quicksight_model::quicksight_error;
/// use rustack_quicksight_model::error::QuickSightErrorCode;
///
/// let err = quicksight_error!(ThrottlingException, "Rate exceeded");
/// assert_eq!(err.code, QuickSightErrorCode::ThrottlingException);
/// assert_eq!(err.message, "Rate exceeded");
/// ```
#[macro_export]
macro_rules! quicksight_error {
    ($code:ident, $msg:expr) => {
        $crate::error::QuickSightError::new($crate::error::QuickSightErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_leave_optional_fields_absent_on_construction() {
        let err = QuickSightError::limit_exceeded("too many resources");
        assert_eq!(err.code, QuickSightErrorCode::LimitExceededException);
        assert_eq!(err.message, "too many resources");
        assert!(err.request_id().is_none());
        assert!(err.resource_type().is_none());
    }

    #[test]
    fn test_should_set_request_id_after_construction() {
        let mut err = QuickSightError::resource_not_found("no such dashboard");
        err.set_request_id(Some("req-123".to_owned()));
        err.set_resource_type(Some(ExceptionResourceType::DataSet));
        assert_eq!(err.request_id(), Some("req-123"));
        assert_eq!(err.resource_type(), Some(&ExceptionResourceType::DataSet));

        err.set_request_id(None);
        assert!(err.request_id().is_none());
    }

    #[test]
    fn test_should_keep_unknown_resource_type() {
        let err = QuickSightError::resource_exists("exists")
            .with_resource_type(ExceptionResourceType::from("TOPIC"))
            .with_request_id("abc");
        assert_eq!(
            err.resource_type(),
            Some(&ExceptionResourceType::Unknown("TOPIC".to_owned()))
        );
        assert_eq!(err.request_id(), Some("abc"));
    }

    #[test]
    fn test_should_format_display() {
        let err = QuickSightError::access_denied("not subscribed").with_request_id("r-1");
        assert_eq!(
            err.to_string(),
            "QuickSightError(AccessDeniedException): not subscribed (request id: r-1)"
        );

        let err = QuickSightError::limit_exceeded("too many")
            .with_resource_type(ExceptionResourceType::User);
        assert_eq!(
            err.to_string(),
            "QuickSightError(LimitExceededException): too many (resource type: USER)"
        );
    }

    #[test]
    fn test_should_parse_error_code_names() {
        assert_eq!(
            QuickSightErrorCode::from_name("ThrottlingException"),
            Some(QuickSightErrorCode::ThrottlingException)
        );
        assert_eq!(
            QuickSightErrorCode::from_name("com.amazonaws.quicksight#ConflictException"),
            Some(QuickSightErrorCode::ConflictException)
        );
        assert_eq!(
            QuickSightErrorCode::from_name(
                "InvalidNextTokenException:http://internal.amazon.com/coral/"
            ),
            Some(QuickSightErrorCode::InvalidNextTokenException)
        );
        assert_eq!(QuickSightErrorCode::from_name("Nope"), None);
    }

    #[test]
    fn test_should_roundtrip_every_error_code_name() {
        for code in QuickSightErrorCode::ALL {
            assert_eq!(QuickSightErrorCode::from_name(code.as_str()), Some(*code));
        }
    }

    #[test]
    fn test_should_flag_resource_type_carriers() {
        assert!(QuickSightErrorCode::LimitExceededException.carries_resource_type());
        assert!(QuickSightErrorCode::ResourceNotFoundException.carries_resource_type());
        assert!(!QuickSightErrorCode::AccessDeniedException.carries_resource_type());
        assert!(!QuickSightErrorCode::QuickSightUserNotFoundException.carries_resource_type());
    }

    #[test]
    fn test_should_build_error_with_macro() {
        let err = crate::quicksight_error!(InvalidNextTokenException, "bad token");
        assert_eq!(err.code, QuickSightErrorCode::InvalidNextTokenException);
    }

    #[test]
    fn test_should_report_parse_error_type_name() {
        let err = ParseEnumError::Unrecognized {
            type_name: "DataSourceType",
            value: "redshift".to_owned(),
        };
        assert_eq!(err.type_name(), "DataSourceType");
        assert_eq!(
            err.to_string(),
            r#"cannot create DataSourceType from value "redshift""#
        );
        let err = ParseEnumError::Empty {
            type_name: "JoinType",
        };
        assert_eq!(err.to_string(), "JoinType value cannot be null or empty");
    }
}
