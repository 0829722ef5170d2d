use tera::{Context, Tera};

use pelvia_rules::catalog::LabelLookup;

use crate::error::ExportError;
use crate::summary::{EvaluationSummary, SummaryContext};

/// Built-in Markdown template for an evaluation summary.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.md.tera");

/// Render a Tera template with an evaluation summary.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Identifiers in `summary` are resolved through `lookup` before rendering;
/// unknown ids render as themselves.
pub fn render_summary(
    template_name: &str,
    template_content: &str,
    summary: &EvaluationSummary,
    lookup: &dyn LabelLookup,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(SummaryContext::build(summary, lookup))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}

/// Render with [`DEFAULT_SUMMARY_TEMPLATE`].
pub fn render_default_summary(
    summary: &EvaluationSummary,
    lookup: &dyn LabelLookup,
) -> Result<String, ExportError> {
    render_summary("summary.md", DEFAULT_SUMMARY_TEMPLATE, summary, lookup)
}
