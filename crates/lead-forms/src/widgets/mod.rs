//! Form widgets for rendering HTML inputs.

mod bootstrap;

pub use bootstrap::{BootstrapSelect, BootstrapTextInput, BootstrapTextarea};

use std::collections::BTreeMap;

/// Attributes that can be applied to a widget.
///
/// Kept sorted so rendered markup is stable.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders every attribute except `class` and `id`, each with a
    /// leading space.
    pub fn extra_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "class" && k.as_str() != "id")
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns `base` followed by any extra `class` attribute.
    fn class_with(&self, base: &str) -> String {
        match self.get("class") {
            Some(extra) => format!("{base} {extra}"),
            None => base.to_string(),
        }
    }

    /// Returns the `id` attribute, defaulting to the field name.
    fn id_or(&self, name: &str) -> String {
        self.get("id").cloned().unwrap_or_else(|| name.to_string())
    }
}

/// Trait for form widgets that render HTML inputs.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(
            html_escape("Commercial & Industrial Solutions"),
            "Commercial &amp; Industrial Solutions"
        );
    }

    #[test]
    fn test_extra_html_skips_class_and_id() {
        let attrs = WidgetAttrs::new()
            .with("class", "is-invalid")
            .with("id", "email")
            .with("required", "required");
        assert_eq!(attrs.extra_html(), r#" required="required""#);
        assert_eq!(attrs.class_with("form-control"), "form-control is-invalid");
        assert_eq!(attrs.id_or("mobile"), "email");
    }
}
