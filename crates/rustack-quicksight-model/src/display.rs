//! Diagnostic rendering shared by every shape's `Display` impl.
//!
//! Shapes render as `{Name: value,Other: value}`. Only present fields are
//! written, in declaration order. The output is for logs and error messages;
//! nothing parses it back.

use std::collections::BTreeMap;
use std::fmt;

/// Placeholder written instead of a sensitive value.
pub(crate) const REDACTED: &str = "***Sensitive Data Redacted***";

/// Builder writing one shape, in the manner of [`fmt::DebugStruct`].
pub(crate) struct ShapeFormatter<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

/// Start rendering a shape.
pub(crate) fn shape<'a, 'b: 'a>(fmt: &'a mut fmt::Formatter<'b>) -> ShapeFormatter<'a, 'b> {
    let result = fmt.write_str("{");
    ShapeFormatter {
        fmt,
        result,
        has_fields: false,
    }
}

impl ShapeFormatter<'_, '_> {
    /// Write `name: value` when the value is present.
    pub(crate) fn field(&mut self, name: &str, value: Option<impl fmt::Display>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.entry(name, &value);
            }
        }
        self
    }

    /// Write a sequence as `name: [a, b]` when present.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, value: Option<&[T]>) -> &mut Self {
        self.field(name, value.map(DisplayList))
    }

    /// Write a map as `name: {k=v, k2=v2}` when present.
    pub(crate) fn map<V: fmt::Display>(
        &mut self,
        name: &str,
        value: Option<&BTreeMap<String, V>>,
    ) -> &mut Self {
        self.field(name, value.map(DisplayMap))
    }

    /// Write the redaction placeholder when the value is present.
    pub(crate) fn sensitive<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: ?Sized,
    {
        self.field(name, value.map(|_| REDACTED))
    }

    /// Close the shape.
    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }

    fn entry(&mut self, name: &str, value: &dyn fmt::Display) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(",")?;
        }
        self.has_fields = true;
        write!(self.fmt, "{name}: {value}")
    }
}

/// Render a union shape: `{Member: value}`.
pub(crate) fn variant(
    fmt: &mut fmt::Formatter<'_>,
    name: &str,
    value: &dyn fmt::Display,
) -> fmt::Result {
    write!(fmt, "{{{name}: {value}}}")
}

struct DisplayList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

struct DisplayMap<'a, V>(&'a BTreeMap<String, V>);

impl<V: fmt::Display> fmt::Display for DisplayMap<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        items: Option<Vec<String>>,
        secret: Option<String>,
        labels: Option<BTreeMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            shape(f)
                .field("Name", self.name.as_deref())
                .field("Count", self.count)
                .list("Items", self.items.as_deref())
                .sensitive("Secret", self.secret.as_deref())
                .map("Labels", self.labels.as_ref())
                .finish()
        }
    }

    fn empty() -> Sample {
        Sample {
            name: None,
            count: None,
            items: None,
            secret: None,
            labels: None,
        }
    }

    #[test]
    fn test_should_render_empty_shape() {
        assert_eq!(empty().to_string(), "{}");
    }

    #[test]
    fn test_should_render_only_present_fields_in_order() {
        let sample = Sample {
            name: Some("orders".to_owned()),
            items: Some(vec!["a".to_owned(), "b".to_owned()]),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{Name: orders,Items: [a, b]}");
    }

    #[test]
    fn test_should_render_empty_sequence_distinctly() {
        let sample = Sample {
            items: Some(Vec::new()),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{Items: []}");
    }

    #[test]
    fn test_should_redact_sensitive_values() {
        let sample = Sample {
            count: Some(3),
            secret: Some("hunter2".to_owned()),
            ..empty()
        };
        let rendered = sample.to_string();
        assert_eq!(rendered, format!("{{Count: 3,Secret: {REDACTED}}}"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_should_render_maps_sorted_by_key() {
        let mut labels = BTreeMap::new();
        labels.insert("b".to_owned(), "2".to_owned());
        labels.insert("a".to_owned(), "1".to_owned());
        let sample = Sample {
            labels: Some(labels),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{Labels: {a=1, b=2}}");
    }
}
