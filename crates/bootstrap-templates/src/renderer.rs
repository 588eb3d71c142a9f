//! Layout-aware rendering of form templates.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::Environment;
use crate::layout::{FormLayout, LayoutManager};
use crate::template_engine::{EngineError, FormView, Template, TemplateEngine};

const SUBMIT_BUTTON_KEY: &str = "form.buttons.submit";
const DEFAULT_SUBMIT_BUTTON: &str = "btn-default";

/// Renders form templates for the active form layout.
///
/// A template prefix gets a `_horizontal` or `_default` suffix depending on
/// the layout, and the template receives the grid and button classes that
/// layout calls for.
#[derive(Debug, Clone)]
pub struct FormRenderer {
    layout_manager: Arc<dyn LayoutManager>,
    environment: Arc<Environment>,
    engine: Arc<dyn TemplateEngine>,
}

impl FormRenderer {
    pub fn new(
        layout_manager: Arc<dyn LayoutManager>,
        environment: Arc<Environment>,
        engine: Arc<dyn TemplateEngine>,
    ) -> Self {
        Self {
            layout_manager,
            environment,
            engine,
        }
    }

    /// Render `{template_prefix}_horizontal` or `{template_prefix}_default`
    /// with `data` as its initial data.
    pub fn render(
        &self,
        template_prefix: &str,
        data: &Map<String, Value>,
    ) -> Result<String, EngineError> {
        let template_name = match self.layout_manager.default_layout() {
            FormLayout::Horizontal(_) => format!("{template_prefix}_horizontal"),
            FormLayout::Default => format!("{template_prefix}_default"),
        };
        tracing::debug!(template = %template_name, "Rendering form template");

        let mut template = Template::new(template_name);
        template.set_data(data);
        self.prepare(&mut template);

        self.engine.parse(&template)
    }

    /// Write the grid classes of the active layout and the button class
    /// into `template`.
    pub fn prepare(&self, template: &mut Template) {
        let form_layout = self.layout_manager.default_layout();

        let view = match &form_layout {
            FormLayout::Horizontal(layout) => FormView {
                label_col_class: Some(layout.label_column_class().to_string()),
                col_class: Some(layout.column_class(false).to_string()),
                col_offset_class: Some(layout.column_class(true).to_string()),
                row_class: Some(layout.row_class().to_string()),
                is_horizontal: true,
                form_layout: form_layout.clone(),
                button_class: self.button_class(),
            },
            FormLayout::Default => FormView {
                label_col_class: None,
                col_class: None,
                col_offset_class: None,
                row_class: None,
                is_horizontal: false,
                form_layout: form_layout.clone(),
                button_class: self.button_class(),
            },
        };

        template.set_form_view(view);
    }

    /// CSS classes for the submit button, e.g. `btn btn-default`.
    pub fn button_class(&self) -> String {
        format!(
            "btn {}",
            self.environment
                .config_value(SUBMIT_BUTTON_KEY, DEFAULT_SUBMIT_BUTTON)
        )
    }
}
