//! Tera-backed template engine.

use std::path::{Path, PathBuf};

use tera::Tera;

use super::loader::{load_templates_from_dir, TEMPLATE_EXTENSION};
use super::Template;

/// Turns a populated [`Template`] into text.
pub trait TemplateEngine: Send + Sync + std::fmt::Debug {
    /// Render the template. Unknown template names are an error.
    fn parse(&self, template: &Template) -> Result<String, EngineError>;

    fn has_template(&self, name: &str) -> bool;
}

/// Template engine wrapping Tera.
#[derive(Debug)]
pub struct TeraEngine {
    tera: Tera,
    extension: &'static str,
}

impl TeraEngine {
    /// Load every `*.html.tera` file below `template_dir`.
    ///
    /// Template `form_default` resolves to `form_default.html.tera`.
    pub fn load(template_dir: &Path) -> Result<Self, EngineError> {
        let tera = load_templates_from_dir(template_dir).map_err(|e| EngineError::Load {
            dir: template_dir.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(
            dir = %template_dir.display(),
            count = tera.get_template_names().count(),
            "Loaded form templates"
        );
        Ok(Self {
            tera,
            extension: TEMPLATE_EXTENSION,
        })
    }

    /// Build an engine from in-memory sources registered under their exact names.
    pub fn from_templates<I, N, S>(templates: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", TEMPLATE_EXTENSION]);
        tera.add_raw_templates(templates).map_err(|e| EngineError::Load {
            dir: PathBuf::from("<memory>"),
            source: e,
        })?;
        Ok(Self { tera, extension: "" })
    }

    fn resolve(&self, name: &str) -> String {
        format!("{name}{}", self.extension)
    }
}

impl TemplateEngine for TeraEngine {
    fn parse(&self, template: &Template) -> Result<String, EngineError> {
        let resolved = self.resolve(template.name());
        if !self.tera.get_template_names().any(|n| n == resolved) {
            return Err(EngineError::NotFound(template.name().to_string()));
        }

        let render_error = |source| EngineError::Render {
            template: template.name().to_string(),
            source,
        };
        let context = template.context().map_err(render_error)?;
        self.tera.render(&resolved, &context).map_err(render_error)
    }

    fn has_template(&self, name: &str) -> bool {
        let resolved = self.resolve(name);
        self.tera.get_template_names().any(|n| n == resolved)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load templates from {dir}: {source}")]
    Load { dir: PathBuf, source: tera::Error },
    #[error("template not found: {0}")]
    NotFound(String),
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}
