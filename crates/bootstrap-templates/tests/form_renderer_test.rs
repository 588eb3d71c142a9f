//! End-to-end rendering of form templates from a template directory.

use std::fs;
use std::sync::{Arc, Once};

use bootstrap_templates::{
    Config, DefaultLayoutManager, EngineError, Environment, FormLayout, FormRenderer,
    HorizontalFormLayout, Template, TemplateEngine, TeraEngine,
};
use serde_json::{json, Map, Value};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const DEFAULT_TEMPLATE: &str = r#"<form id="{{ form_id }}">
{%- if is_horizontal %}horizontal{% else %}stacked{% endif -%}
|{{ button_class }}|{{ form_layout.kind }}</form>"#;

const HORIZONTAL_TEMPLATE: &str = r#"<form id="{{ form_id }}">
<div class="{{ row_class }}"><label class="{{ label_col_class }}">Name</label><div class="{{ col_class }}"></div></div>
<div class="{{ row_class }}"><div class="{{ col_offset_class }}"><button class="{{ button_class }}">Send</button></div></div>
</form>"#;

fn setup_template_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("form_default.html.tera"), DEFAULT_TEMPLATE).unwrap();
    fs::write(dir.path().join("contact_horizontal.html.tera"), HORIZONTAL_TEMPLATE).unwrap();
    dir
}

fn contact_layout() -> FormLayout {
    FormLayout::Horizontal(HorizontalFormLayout::new(
        "col-sm-2",
        "col-sm-10",
        "offset-sm-2 col-sm-10",
        "form-group",
    ))
}

fn data(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_default_layout_scenario() {
    init_tracing();
    let dir = setup_template_dir();
    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::new(FormLayout::Default)),
        Arc::new(Environment::default()),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );

    let html = renderer
        .render("form", &data(json!({ "form_id": "newsletter" })))
        .unwrap();
    assert_eq!(
        html,
        "<form id=\"newsletter\">stacked|btn btn-default|default</form>"
    );
}

#[test]
fn test_horizontal_layout_scenario() {
    init_tracing();
    let dir = setup_template_dir();
    let mut config = Config::default();
    config.set("form.buttons.submit", "btn-primary");

    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::new(contact_layout())),
        Arc::new(Environment::new(config)),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );

    let html = renderer
        .render("contact", &data(json!({ "form_id": "contact" })))
        .unwrap();
    assert!(html.contains(r#"<div class="form-group"><label class="col-sm-2">"#));
    assert!(html.contains(r#"<div class="col-sm-10"></div>"#));
    assert!(html.contains(
        r#"<div class="offset-sm-2 col-sm-10"><button class="btn btn-primary">"#
    ));
}

#[test]
fn test_render_is_repeatable() {
    let dir = setup_template_dir();
    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::new(contact_layout())),
        Arc::new(Environment::default()),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );
    let input = data(json!({ "form_id": "contact" }));

    let first = renderer.render("contact", &input).unwrap();
    let second = renderer.render("contact", &input).unwrap();
    assert_eq!(first, second);
    // Caller's data is untouched
    assert_eq!(input, data(json!({ "form_id": "contact" })));
}

#[test]
fn test_missing_layout_variant_propagates() {
    let dir = setup_template_dir();
    // Only contact_horizontal exists, so the default layout cannot be rendered
    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::new(FormLayout::Default)),
        Arc::new(Environment::default()),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );

    let err = renderer.render("contact", &Map::new()).unwrap_err();
    assert!(matches!(err, EngineError::NotFound(ref name) if name == "contact_default"));
}

#[test]
fn test_config_driven_setup() {
    let dir = setup_template_dir();
    let config = Config::from_toml_str(
        r#"
[form]
layout = "horizontal"

[form.buttons]
submit = "btn-success"

[form.horizontal]
label = "col-md-3"
control = "col-md-9"
offset = "offset-md-3 col-md-9"
row = "mb-3 row"
"#,
    )
    .unwrap();

    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::from_config(&config)),
        Arc::new(Environment::new(config)),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );

    let html = renderer
        .render("contact", &data(json!({ "form_id": "contact" })))
        .unwrap();
    assert!(html.contains(r#"<div class="mb-3 row"><label class="col-md-3">"#));
    assert!(html.contains(r#"<div class="offset-md-3 col-md-9"><button class="btn btn-success">"#));
}

#[test]
fn test_config_change_seen_by_next_render() {
    let dir = setup_template_dir();
    let environment = Arc::new(Environment::default());
    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::default()),
        environment.clone(),
        Arc::new(TeraEngine::load(dir.path()).unwrap()),
    );
    let input = data(json!({ "form_id": "f" }));

    assert!(renderer
        .render("form", &input)
        .unwrap()
        .contains("btn btn-default"));

    let mut overrides = Config::default();
    overrides.set("form.buttons.submit", "btn-outline-secondary");
    environment.merge_config(overrides);

    assert!(renderer
        .render("form", &input)
        .unwrap()
        .contains("btn btn-outline-secondary"));
}

#[test]
fn test_prepare_on_caller_template() {
    let engine = Arc::new(
        TeraEngine::from_templates([(
            "widget_text",
            "{% if is_horizontal %}{{ label_col_class }}{% else %}none{% endif %}",
        )])
        .unwrap(),
    );
    let renderer = FormRenderer::new(
        Arc::new(DefaultLayoutManager::new(contact_layout())),
        Arc::new(Environment::default()),
        engine.clone(),
    );

    let mut template = Template::new("widget_text");
    renderer.prepare(&mut template);

    let view = template.form_view().unwrap();
    assert_eq!(view.label_col_class.as_deref(), Some("col-sm-2"));
    assert_eq!(view.button_class, "btn btn-default");
    assert_eq!(engine.parse(&template).unwrap(), "col-sm-2");
}
