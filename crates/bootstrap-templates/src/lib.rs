//! Bootstrap form templates: layout-aware rendering of form views.
//!
//! A [`FormRenderer`] picks the `_horizontal` or `_default` variant of a form
//! template depending on the active [`FormLayout`], fills in the grid and
//! button classes that layout needs, and hands the template to a
//! [`TemplateEngine`] for rendering.
//!
//! # Modules
//!
//! - [`config`] — Dotted-key configuration, config file discovery, and the shared [`Environment`]
//! - [`layout`] — Form layout types and the [`LayoutManager`] that provides the active layout
//! - [`template_engine`] — Template data bags and the Tera-backed engine
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use bootstrap_templates::{
//!     load_config, DefaultLayoutManager, Environment, FormRenderer, TeraEngine,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config();
//! let renderer = FormRenderer::new(
//!     Arc::new(DefaultLayoutManager::from_config(&config)),
//!     Arc::new(Environment::new(config)),
//!     Arc::new(TeraEngine::load(Path::new("templates"))?),
//! );
//!
//! let data = serde_json::json!({ "form_id": "contact" });
//! let html = renderer.render("form_wrapper", data.as_object().unwrap())?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod layout;
mod renderer;
pub mod template_engine;

pub use config::{load_config, Config, ConfigError, Environment};
pub use layout::{DefaultLayoutManager, FormLayout, HorizontalFormLayout, LayoutManager};
pub use renderer::FormRenderer;
pub use template_engine::{EngineError, FormView, Template, TemplateEngine, TeraEngine};
