//! Lead form field definitions and view rendering.

use ironhtml::html;
use ironhtml_elements::Div;

use crate::choices::{
    SolutionType, COMMERCIAL_UNITS, HEAR_ABOUT_SOURCES, MODULE_TYPES, SALUTATIONS,
};
use crate::error::ErrorMap;
use crate::record::{Field, FormRecord};
use crate::rules::RuleSet;
use crate::widgets::{BootstrapSelect, BootstrapTextInput, BootstrapTextarea, Widget, WidgetAttrs};

/// Order in which fields appear on the page.
pub const DISPLAY_ORDER: [Field; 16] = [
    Field::Salutation,
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Mobile,
    Field::Country,
    Field::Zipcode,
    Field::HearAbout,
    Field::Company,
    Field::SolutionType,
    Field::HomeCapacity,
    Field::CommercialUnit,
    Field::CommercialCapacity,
    Field::ModuleType,
    Field::ModuleQuantity,
    Field::Description,
];

/// Definition of a rendered form field.
pub struct FormFieldDef {
    /// Field this input edits.
    pub field: Field,
    /// Field label.
    pub label: String,
    /// Whether the label carries the required marker.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

fn widget_for(field: Field) -> Box<dyn Widget> {
    let select = |choices: &[&str], blank: &str| -> Box<dyn Widget> {
        Box::new(BootstrapSelect::new(choices.iter().copied()).blank_label(blank))
    };
    let text = |input: BootstrapTextInput| -> Box<dyn Widget> {
        match field.placeholder() {
            Some(p) => Box::new(input.placeholder(p)),
            None => Box::new(input),
        }
    };

    match field {
        Field::Salutation => select(SALUTATIONS, "Select Salutation"),
        Field::HearAbout => select(HEAR_ABOUT_SOURCES, "Select Where did you hear about us?"),
        Field::SolutionType => select(SolutionType::values().as_slice(), "Select Solution Type"),
        Field::CommercialUnit => select(COMMERCIAL_UNITS, "Select Unit"),
        Field::ModuleType => select(MODULE_TYPES, "Select Module Type"),
        Field::Email => text(BootstrapTextInput::email()),
        Field::Mobile => text(BootstrapTextInput::tel()),
        Field::HomeCapacity | Field::CommercialCapacity | Field::ModuleQuantity => {
            text(BootstrapTextInput::number())
        }
        Field::Description => Box::new(
            BootstrapTextarea::new(4).placeholder(field.placeholder().unwrap_or_default()),
        ),
        _ => text(BootstrapTextInput::new()),
    }
}

/// Returns the fields visible for the record's selected branch, in display
/// order.
pub fn lead_form_fields(rules: &RuleSet, record: &FormRecord) -> Vec<FormFieldDef> {
    DISPLAY_ORDER
        .into_iter()
        .filter(|field| rules.is_active(*field, record))
        .map(|field| FormFieldDef {
            field,
            label: field.label().to_string(),
            required: rules.is_required(field, record),
            widget: widget_for(field),
            attrs: WidgetAttrs::new(),
        })
        .collect()
}

/// Everything needed to draw the form view.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    /// Rule table deciding which fields are shown and required.
    pub rules: &'a RuleSet,
    /// Current field values.
    pub record: &'a FormRecord,
    /// Per-field messages.
    pub errors: &'a ErrorMap,
    /// Message shown under the form.
    pub global_error: Option<&'a str>,
    /// Whether a submission is in flight.
    pub submitting: bool,
}

/// Renders a form field with Bootstrap 5 styling.
pub fn render_field(def: &FormFieldDef, value: &str, error: Option<&str>) -> String {
    let id = def.field.as_str().to_string();
    let label_text = if def.required {
        format!("{} *", def.label)
    } else {
        def.label.clone()
    };

    let mut attrs = def.attrs.clone();
    if error.is_some() {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
    }

    let widget_html = def.widget.render(&id, Some(value), &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    html! { div.class("mb-3 form-group") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|h| h.class("invalid-feedback").text(error.unwrap_or("")))
        })
        .render()
}

/// Renders the form view: inputs for the active branch, inline errors, the
/// submit button, and the global error area.
pub fn render_form(view: &FormView<'_>) -> String {
    let mut form = html! { form.method("post") }.attr("novalidate", "novalidate");

    for def in lead_form_fields(view.rules, view.record) {
        let field_html = render_field(&def, view.record.get(def.field), view.errors.get(def.field));
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let button_label = if view.submitting {
        "Submitting...".to_string()
    } else {
        "Submit Form".to_string()
    };
    let submitting = view.submitting;
    form = form.child::<Div, _>(|d| {
        let btn = html! {
            button.type_("submit").class("btn btn-primary submit-btn") { #button_label }
        }
        .when(submitting, |b| b.attr("disabled", "disabled"));
        d.raw(btn.render())
    });

    let title = html! {
        h2.class("form-title") { "Enquiry Form" }
    };

    let global_error = view.global_error;
    html! { div.class("form-container") }
        .raw(title.render())
        .raw(form.render())
        .when(global_error.is_some(), |d| {
            d.child::<Div, _>(|g| {
                g.class("alert alert-danger")
                    .attr("id", "globalErrorMessage")
                    .attr("role", "alert")
                    .text(global_error.unwrap_or(""))
            })
        })
        .render()
}

/// Renders the thank-you view shown after a successful submission.
pub fn render_thank_you() -> String {
    html! {
        div.class("form-container success-page-container") {
            h2.class("form-title") { "Thank You!" }
            div.class("form-success") {
                p { "Your form has been submitted successfully." }
                p { "We appreciate you taking the time to fill it out." }
            }
            form.method("get") {
                button.type_("submit").class("btn btn-success submit-btn") {
                    "Submit Another Response"
                }
            }
        }
    }
    .render()
}
