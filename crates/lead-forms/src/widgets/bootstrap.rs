//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, email, tel, number).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::of_type("email")
    }

    /// Creates a telephone input.
    pub fn tel() -> Self {
        Self::of_type("tel")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::of_type("number")
    }

    fn of_type(input_type: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{name}"{value_attr}{placeholder_attr}{}>"#,
            self.input_type,
            attrs.class_with("form-control"),
            attrs.id_or(name),
            attrs.extra_html(),
        )
    }
}

/// Bootstrap 5 textarea widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    /// Number of rows.
    pub rows: usize,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextarea {
    fn default() -> Self {
        Self {
            rows: 4,
            placeholder: None,
        }
    }
}

impl BootstrapTextarea {
    /// Creates a new textarea with the specified rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<textarea class="{}" id="{}" name="{name}" rows="{}"{placeholder_attr}{}>{content}</textarea>"#,
            attrs.class_with("form-control"),
            attrs.id_or(name),
            self.rows,
            attrs.extra_html(),
        )
    }
}

/// Bootstrap 5 select widget.
///
/// Always renders a leading blank option so an untouched select submits `""`.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    /// Available choices; value and label are the same string.
    pub choices: Vec<String>,
    /// Label for the blank option.
    pub blank_label: String,
}

impl BootstrapSelect {
    /// Creates a new select with the given choices.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            blank_label: "---------".to_string(),
        }
    }

    /// Sets the blank label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = format!(
            r#"<option value="">{}</option>"#,
            html_escape(&self.blank_label)
        );

        for choice in &self.choices {
            let selected_attr = if value == Some(choice.as_str()) {
                " selected"
            } else {
                ""
            };
            let escaped = html_escape(choice);
            options.push_str(&format!(
                r#"<option value="{escaped}"{selected_attr}>{escaped}</option>"#
            ));
        }

        format!(
            r#"<select class="{}" id="{}" name="{name}"{}>{options}</select>"#,
            attrs.class_with("form-select"),
            attrs.id_or(name),
            attrs.extra_html(),
        )
    }
}
