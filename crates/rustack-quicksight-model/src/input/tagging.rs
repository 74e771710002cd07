//! Tagging requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::types::Tag;

/// QuickSight TagResource request.
///
/// `POST /resources/{ResourceArn}/tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    /// ARN of the resource to tag.
    /// HTTP label (URI path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Tags to attach. Existing keys are overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`].
    #[must_use]
    pub fn builder() -> TagResourceInputBuilder {
        TagResourceInputBuilder::default()
    }
}

impl fmt::Display for TagResourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::shape(f)
            .field("ResourceArn", self.resource_arn.as_deref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

/// A builder for [`TagResourceInput`].
#[derive(Debug, Clone, Default)]
pub struct TagResourceInputBuilder {
    inner: TagResourceInput,
}

impl TagResourceInputBuilder {
    /// ARN of the resource to tag.
    #[must_use]
    pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
        self.inner.resource_arn = Some(input.into());
        self
    }
    /// ARN of the resource to tag.
    #[must_use]
    pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
        self.inner.resource_arn = input;
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
    /// Tags to attach. Existing keys are overwritten.
    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.inner.tags = input;
        self
    }
    /// Consumes the builder and constructs a [`TagResourceInput`].
    #[must_use]
    pub fn build(self) -> TagResourceInput {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_append_tags() {
        let input = TagResourceInput::builder()
            .resource_arn("arn:aws:quicksight:us-east-1:111122223333:dashboard/sales")
            .tags(Tag::builder().key("a").value("1").build())
            .tags(Tag::builder().key("b").value("2").build())
            .build();
        let keys: Vec<_> = input
            .tags
            .iter()
            .flatten()
            .filter_map(|tag| tag.key.as_deref())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
