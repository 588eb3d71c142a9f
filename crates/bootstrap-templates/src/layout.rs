//! Form layouts and the manager that provides the active one.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::config::Config;

const DEFAULT_LABEL_CLASS: &str = "col-sm-3";
const DEFAULT_CONTROL_CLASS: &str = "col-sm-9";
const DEFAULT_OFFSET_CLASS: &str = "offset-sm-3 col-sm-9";
const DEFAULT_ROW_CLASS: &str = "form-group row";

/// Grid classes for a horizontal form (label and control side by side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizontalFormLayout {
    label_column_class: String,
    column_class: String,
    offset_column_class: String,
    row_class: String,
}

impl HorizontalFormLayout {
    pub fn new(
        label_column_class: impl Into<String>,
        column_class: impl Into<String>,
        offset_column_class: impl Into<String>,
        row_class: impl Into<String>,
    ) -> Self {
        Self {
            label_column_class: label_column_class.into(),
            column_class: column_class.into(),
            offset_column_class: offset_column_class.into(),
            row_class: row_class.into(),
        }
    }

    pub fn label_column_class(&self) -> &str {
        &self.label_column_class
    }

    /// Column class for the control. With `offset`, the class for controls
    /// that have no label column in front of them.
    pub fn column_class(&self, offset: bool) -> &str {
        if offset {
            &self.offset_column_class
        } else {
            &self.column_class
        }
    }

    pub fn row_class(&self) -> &str {
        &self.row_class
    }
}

impl Default for HorizontalFormLayout {
    fn default() -> Self {
        Self::new(
            DEFAULT_LABEL_CLASS,
            DEFAULT_CONTROL_CLASS,
            DEFAULT_OFFSET_CLASS,
            DEFAULT_ROW_CLASS,
        )
    }
}

/// The active form layout.
///
/// Serialized with a `kind` tag so templates can inspect
/// `form_layout.kind`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormLayout {
    Horizontal(HorizontalFormLayout),
    #[default]
    Default,
}

impl FormLayout {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal(_))
    }

    pub fn as_horizontal(&self) -> Option<&HorizontalFormLayout> {
        match self {
            Self::Horizontal(layout) => Some(layout),
            Self::Default => None,
        }
    }

    /// Build the layout described by the `form.layout` and
    /// `form.horizontal.*` settings.
    pub fn from_config(config: &Config) -> Self {
        let kind = config.get_str("form.layout", "default");
        match kind.as_str() {
            "horizontal" => Self::Horizontal(HorizontalFormLayout::new(
                config.get_str("form.horizontal.label", DEFAULT_LABEL_CLASS),
                config.get_str("form.horizontal.control", DEFAULT_CONTROL_CLASS),
                config.get_str("form.horizontal.offset", DEFAULT_OFFSET_CLASS),
                config.get_str("form.horizontal.row", DEFAULT_ROW_CLASS),
            )),
            "default" => Self::Default,
            other => {
                tracing::warn!(layout = other, "Unknown form layout, using default");
                Self::Default
            }
        }
    }
}

/// Provides the form layout currently in effect.
pub trait LayoutManager: Send + Sync + std::fmt::Debug {
    fn default_layout(&self) -> FormLayout;
}

/// In-memory layout manager whose layout can be swapped at runtime.
#[derive(Debug, Default)]
pub struct DefaultLayoutManager {
    layout: RwLock<FormLayout>,
}

impl DefaultLayoutManager {
    pub fn new(layout: FormLayout) -> Self {
        Self {
            layout: RwLock::new(layout),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FormLayout::from_config(config))
    }

    pub fn set_default_layout(&self, layout: FormLayout) {
        *self.layout.write().unwrap_or_else(PoisonError::into_inner) = layout;
    }
}

impl LayoutManager for DefaultLayoutManager {
    fn default_layout(&self) -> FormLayout {
        self.layout
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
