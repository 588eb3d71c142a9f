//! Load `.html.tera` template files from a template directory.

use std::path::Path;

use tera::Tera;

pub(crate) const TEMPLATE_EXTENSION: &str = ".html.tera";

/// Load all `.html.tera` files below a template directory into a Tera instance.
///
/// Templates are registered by their path relative to `template_dir`
/// (e.g., `form_default.html.tera`, `widgets/text_horizontal.html.tera`).
pub(crate) fn load_templates_from_dir(template_dir: &Path) -> Result<Tera, tera::Error> {
    let glob_pattern = template_dir
        .join(format!("**/*{TEMPLATE_EXTENSION}"))
        .to_string_lossy()
        .to_string();

    let mut tera = Tera::new(&glob_pattern)?;
    tera.autoescape_on(vec![".html", TEMPLATE_EXTENSION]);
    Ok(tera)
}
