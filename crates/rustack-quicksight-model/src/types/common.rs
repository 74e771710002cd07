//! Shapes shared by several resource families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;

/// Permission granted to a principal on a QuickSight resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourcePermission {
    /// ARN of the user, group or namespace receiving the permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    /// IAM actions granted, e.g. `quicksight:DescribeDashboard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

impl ResourcePermission {
    /// Creates a new builder-style object to manufacture [`ResourcePermission`].
    #[must_use]
    pub fn builder() -> ResourcePermissionBuilder {
        ResourcePermissionBuilder::default()
    }
}

impl fmt::Display for ResourcePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Principal", self.principal.as_deref())
            .list("Actions", self.actions.as_deref())
            .finish()
    }
}

/// A builder for [`ResourcePermission`].
#[derive(Debug, Clone, Default)]
pub struct ResourcePermissionBuilder {
    inner: ResourcePermission,
}

impl ResourcePermissionBuilder {
    /// ARN of the user, group or namespace receiving the permission.
    #[must_use]
    pub fn principal(mut self, input: impl Into<String>) -> Self {
        self.inner.principal = Some(input.into());
        self
    }
    /// ARN of the user, group or namespace receiving the permission.
    #[must_use]
    pub fn set_principal(mut self, input: Option<String>) -> Self {
        self.inner.principal = input;
        self
    }
    /// Appends an item to `actions`.
    ///
    /// To override the contents of this collection use [`set_actions`](Self::set_actions).
    #[must_use]
    pub fn actions(mut self, input: impl Into<String>) -> Self {
        self.inner
            .actions
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }
    /// IAM actions granted, e.g. `quicksight:DescribeDashboard`.
    #[must_use]
    pub fn set_actions(mut self, input: Option<Vec<String>>) -> Self {
        self.inner.actions = input;
        self
    }
    /// Consumes the builder and constructs a [`ResourcePermission`].
    #[must_use]
    pub fn build(self) -> ResourcePermission {
        self.inner
    }
}

/// Key-value pair attached to a QuickSight resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key, 1 to 128 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value, 1 to 256 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`].
    #[must_use]
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("Key", self.key.as_deref())
            .field("Value", self.value.as_deref())
            .finish()
    }
}

/// A builder for [`Tag`].
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    inner: Tag,
}

impl TagBuilder {
    /// Tag key, 1 to 128 characters.
    #[must_use]
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner.key = Some(input.into());
        self
    }
    /// Tag key, 1 to 128 characters.
    #[must_use]
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner.key = input;
        self
    }
    /// Tag value, 1 to 256 characters.
    #[must_use]
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.inner.value = Some(input.into());
        self
    }
    /// Tag value, 1 to 256 characters.
    #[must_use]
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.inner.value = input;
        self
    }
    /// Consumes the builder and constructs a [`Tag`].
    #[must_use]
    pub fn build(self) -> Tag {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_duplicate_actions() {
        let permission = ResourcePermission::builder()
            .principal("arn:aws:quicksight:us-east-1:111122223333:user/default/alice")
            .actions("quicksight:DescribeDashboard")
            .actions("quicksight:DescribeDashboard")
            .build();
        assert_eq!(permission.actions.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_should_render_tag() {
        let tag = Tag::builder().key("team").value("bi").build();
        assert_eq!(tag.to_string(), "{Key: team,Value: bi}");
        assert_eq!(
            serde_json::to_string(&tag).expect("serialize tag"),
            r#"{"Key":"team","Value":"bi"}"#
        );
    }
}
