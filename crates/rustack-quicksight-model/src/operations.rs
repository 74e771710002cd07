//! QuickSight operation enum.

use std::fmt;

use crate::error::QuickSightErrorCode;

/// All modeled QuickSight operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickSightOperation {
    // Dashboards
    /// Create a dashboard from a template.
    CreateDashboard,
    /// List the dashboards of an account.
    ListDashboards,

    // Data
    /// Create a data set.
    CreateDataSet,
    /// Create a data source.
    CreateDataSource,

    // Users
    /// Describe a registered user.
    DescribeUser,

    // Tagging
    /// Attach tags to a resource.
    TagResource,
}

impl QuickSightOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateDashboard,
        Self::ListDashboards,
        Self::CreateDataSet,
        Self::CreateDataSource,
        Self::DescribeUser,
        Self::TagResource,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDashboard => "CreateDashboard",
            Self::ListDashboards => "ListDashboards",
            Self::CreateDataSet => "CreateDataSet",
            Self::CreateDataSource => "CreateDataSource",
            Self::DescribeUser => "DescribeUser",
            Self::TagResource => "TagResource",
        }
    }

    /// Parse an operation name string into a `QuickSightOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateDashboard" => Some(Self::CreateDashboard),
            "ListDashboards" => Some(Self::ListDashboards),
            "CreateDataSet" => Some(Self::CreateDataSet),
            "CreateDataSource" => Some(Self::CreateDataSource),
            "DescribeUser" => Some(Self::DescribeUser),
            "TagResource" => Some(Self::TagResource),
            _ => None,
        }
    }

    /// Error kinds the service documents for this operation.
    #[must_use]
    pub fn errors(&self) -> &'static [QuickSightErrorCode] {
        use QuickSightErrorCode as E;
        match self {
            Self::CreateDashboard => &[
                E::ConflictException,
                E::InternalFailureException,
                E::InvalidParameterValueException,
                E::LimitExceededException,
                E::ResourceExistsException,
                E::ResourceNotFoundException,
                E::ThrottlingException,
                E::UnsupportedUserEditionException,
            ],
            Self::ListDashboards => &[
                E::InternalFailureException,
                E::InvalidNextTokenException,
                E::ThrottlingException,
                E::UnsupportedUserEditionException,
            ],
            Self::CreateDataSet => &[
                E::AccessDeniedException,
                E::ConflictException,
                E::InternalFailureException,
                E::InvalidParameterValueException,
                E::LimitExceededException,
                E::ResourceExistsException,
                E::ResourceNotFoundException,
                E::ThrottlingException,
                E::UnsupportedUserEditionException,
            ],
            Self::CreateDataSource => &[
                E::AccessDeniedException,
                E::ConflictException,
                E::InternalFailureException,
                E::InvalidParameterValueException,
                E::LimitExceededException,
                E::ResourceExistsException,
                E::ResourceNotFoundException,
                E::ThrottlingException,
            ],
            Self::DescribeUser => &[
                E::AccessDeniedException,
                E::InternalFailureException,
                E::InvalidParameterValueException,
                E::PreconditionNotMetException,
                E::ResourceNotFoundException,
                E::ResourceUnavailableException,
                E::ThrottlingException,
            ],
            Self::TagResource => &[
                E::AccessDeniedException,
                E::InternalFailureException,
                E::InvalidParameterValueException,
                E::LimitExceededException,
                E::ResourceNotFoundException,
                E::ThrottlingException,
            ],
        }
    }

    /// Returns `true` if the service documents `code` for this operation.
    #[must_use]
    pub fn may_raise(&self, code: QuickSightErrorCode) -> bool {
        self.errors().contains(&code)
    }
}

impl fmt::Display for QuickSightOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_operation_names() {
        for op in QuickSightOperation::ALL {
            assert_eq!(QuickSightOperation::from_name(op.as_str()), Some(*op));
            assert_eq!(op.to_string(), op.as_str());
        }
        assert_eq!(QuickSightOperation::from_name("createDashboard"), None);
    }

    #[test]
    fn test_should_list_documented_errors() {
        let list = QuickSightOperation::ListDashboards;
        assert!(list.may_raise(QuickSightErrorCode::InvalidNextTokenException));
        assert!(!list.may_raise(QuickSightErrorCode::ResourceExistsException));
        assert!(
            QuickSightOperation::DescribeUser
                .may_raise(QuickSightErrorCode::ResourceUnavailableException)
        );
    }

    #[test]
    fn test_should_allow_internal_failure_everywhere() {
        for op in QuickSightOperation::ALL {
            assert!(op.may_raise(QuickSightErrorCode::InternalFailureException), "{op}");
            assert!(op.may_raise(QuickSightErrorCode::ThrottlingException), "{op}");
        }
    }
}
