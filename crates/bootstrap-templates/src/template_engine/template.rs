//! Template instances: a named data bag plus the typed form view.

use serde::Serialize;
use serde_json::{Map, Value};
use tera::Context;

use crate::layout::FormLayout;

/// Grid and button classes a form template needs, written by
/// [`FormRenderer::prepare`](crate::FormRenderer::prepare).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub label_col_class: Option<String>,
    pub col_class: Option<String>,
    pub col_offset_class: Option<String>,
    pub row_class: Option<String>,
    pub is_horizontal: bool,
    pub form_layout: FormLayout,
    pub button_class: String,
}

/// A template to be parsed by a [`TemplateEngine`](super::TemplateEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    data: Map<String, Value>,
    form_view: Option<FormView>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Map::new(),
            form_view: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merge `data` into the bag. Existing keys are overwritten.
    pub fn set_data(&mut self, data: &Map<String, Value>) {
        self.data
            .extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn form_view(&self) -> Option<&FormView> {
        self.form_view.as_ref()
    }

    pub fn set_form_view(&mut self, view: FormView) {
        self.form_view = Some(view);
    }

    /// Build the render context: the data bag first, then the form view
    /// fields on top of it.
    pub fn context(&self) -> tera::Result<Context> {
        let mut context = Context::new();
        for (key, value) in &self.data {
            context.insert(key, value);
        }
        if let Some(view) = &self.form_view {
            context.extend(Context::from_serialize(view)?);
        }
        Ok(context)
    }
}
