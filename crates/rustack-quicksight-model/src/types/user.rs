//! QuickSight user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::enums::{IdentityType, UserRole};

/// A registered QuickSight user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// User ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// User name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// How the user authenticates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<IdentityType>,
    /// `false` until the user accepts the invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Principal ID of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

impl User {
    /// Creates a new builder-style object to manufacture [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Arn", self.arn.as_deref())
            .field("UserName", self.user_name.as_deref())
            .field("Email", self.email.as_deref())
            .field("Role", self.role)
            .field("IdentityType", self.identity_type)
            .field("Active", self.active)
            .field("PrincipalId", self.principal_id.as_deref())
            .finish()
    }
}

/// A builder for [`User`].
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    inner: User,
}

impl UserBuilder {
    /// User ARN.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.inner.arn = Some(input.into());
        self
    }
    /// User ARN.
    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.inner.arn = input;
        self
    }
    /// User name.
    #[must_use]
    pub fn user_name(mut self, input: impl Into<String>) -> Self {
        self.inner.user_name = Some(input.into());
        self
    }
    /// User name.
    #[must_use]
    pub fn set_user_name(mut self, input: Option<String>) -> Self {
        self.inner.user_name = input;
        self
    }
    /// Email address.
    #[must_use]
    pub fn email(mut self, input: impl Into<String>) -> Self {
        self.inner.email = Some(input.into());
        self
    }
    /// Email address.
    #[must_use]
    pub fn set_email(mut self, input: Option<String>) -> Self {
        self.inner.email = input;
        self
    }
    /// Role of the user.
    #[must_use]
    pub fn role(mut self, input: UserRole) -> Self {
        self.inner.role = Some(input);
        self
    }
    /// Role of the user.
    #[must_use]
    pub fn set_role(mut self, input: Option<UserRole>) -> Self {
        self.inner.role = input;
        self
    }
    /// How the user authenticates.
    #[must_use]
    pub fn identity_type(mut self, input: IdentityType) -> Self {
        self.inner.identity_type = Some(input);
        self
    }
    /// How the user authenticates.
    #[must_use]
    pub fn set_identity_type(mut self, input: Option<IdentityType>) -> Self {
        self.inner.identity_type = input;
        self
    }
    /// `false` until the user accepts the invitation.
    #[must_use]
    pub fn active(mut self, input: bool) -> Self {
        self.inner.active = Some(input);
        self
    }
    /// `false` until the user accepts the invitation.
    #[must_use]
    pub fn set_active(mut self, input: Option<bool>) -> Self {
        self.inner.active = input;
        self
    }
    /// Principal ID of the user.
    #[must_use]
    pub fn principal_id(mut self, input: impl Into<String>) -> Self {
        self.inner.principal_id = Some(input.into());
        self
    }
    /// Principal ID of the user.
    #[must_use]
    pub fn set_principal_id(mut self, input: Option<String>) -> Self {
        self.inner.principal_id = input;
        self
    }
    /// Consumes the builder and constructs a [`User`].
    #[must_use]
    pub fn build(self) -> User {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_user() {
        let raw = r#"{
            "Arn": "arn:aws:quicksight:us-east-1:111122223333:user/default/alice",
            "UserName": "alice",
            "Email": "alice@example.com",
            "Role": "AUTHOR",
            "IdentityType": "IAM",
            "Active": true,
            "PrincipalId": "federated/iam/AIDAEXAMPLE"
        }"#;
        let user: User = serde_json::from_str(raw).expect("deserialize user");
        assert_eq!(user.role, Some(UserRole::Author));
        assert_eq!(user.identity_type, Some(IdentityType::Iam));
        assert_eq!(user.active, Some(true));
    }

    #[test]
    fn test_should_reject_lowercase_role() {
        let raw = r#"{"UserName": "alice", "Role": "author"}"#;
        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[test]
    fn test_should_render_user() {
        let user = User::builder()
            .user_name("alice")
            .role(UserRole::Reader)
            .active(false)
            .build();
        assert_eq!(user.to_string(), "{UserName: alice,Role: READER,Active: false}");
    }
}
