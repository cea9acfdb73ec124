use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tera::{Context, Tera, Value};
use tracing::info;

use vertrag_core::models::block::BlockKind;
use vertrag_core::models::contract::ContractData;

use crate::error::ExportError;
use crate::paths;

/// Render the contract template with an assembled [`ContractData`].
///
/// Loads `contract.html` from `templates_dir`, installs the template
/// helpers, and renders with the contract fields as context variables.
pub fn render_contract(data: &ContractData, templates_dir: &Path) -> Result<String, ExportError> {
    let template_path = paths::contract_template(templates_dir);
    let source = fs::read_to_string(&template_path)
        .map_err(|_| ExportError::TemplateNotFound(template_path.display().to_string()))?;

    let mut tera = Tera::default();
    register_template_helpers(&mut tera);
    tera.add_raw_template("contract.html", &source)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let html = tera.render("contract.html", &context)?;
    info!(template = %template_path.display(), bytes = html.len(), "contract rendered");
    Ok(html)
}

/// Install the block-kind testers and the `paragraphs` filter.
///
/// One tester is registered per [`BlockKind`], named after the serialized
/// kind tag, so templates branch with `{% if el is table %}`. Called by
/// [`render_contract`]; exposed for template tests.
pub fn register_template_helpers(tera: &mut Tera) {
    for kind in BlockKind::ALL {
        let tag = kind.as_str();
        tera.register_tester(
            tag,
            move |value: Option<&Value>, _args: &[Value]| -> tera::Result<bool> {
                Ok(value.and_then(|v| v.get("kind")).and_then(Value::as_str) == Some(tag))
            },
        );
    }
    tera.register_filter("paragraphs", paragraphs_filter);
}

/// Split multi-paragraph body text on blank lines for `{% for %}` loops.
fn paragraphs_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("paragraphs filter expects a string"))?;
    Ok(Value::Array(
        text.split("\n\n")
            .map(|p| Value::String(p.trim().to_string()))
            .collect(),
    ))
}
