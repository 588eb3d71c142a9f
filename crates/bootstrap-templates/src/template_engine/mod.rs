//! Runtime template engine for form templates.
//!
//! Uses Tera to render `.html.tera` files. A [`Template`] carries the
//! caller's free-form data plus the typed [`FormView`] that
//! [`FormRenderer`](crate::FormRenderer) fills in.

mod engine;
mod loader;
mod template;

pub use engine::{EngineError, TemplateEngine, TeraEngine};
pub use template::{FormView, Template};
