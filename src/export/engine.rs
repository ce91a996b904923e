use super::error::ExportError;
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// File in the templates folder that overrides the text export layout.
pub const EXPORT_TEMPLATE_FILE: &str = "export.hbs";

/// Layout used when no override exists.
pub const DEFAULT_EXPORT_TEMPLATE: &str = "{{content}}";

const TEMPLATE_NAME: &str = "export";

/// Handlebars renderer for text exports. Output is not HTML-escaped.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Engine with the default `{{content}}` layout.
    pub fn new() -> Result<Self, ExportError> {
        Self::from_source(DEFAULT_EXPORT_TEMPLATE)
    }

    /// Engine with a custom layout.
    pub fn from_source(source: &str) -> Result<Self, ExportError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(TEMPLATE_NAME, source)?;
        Ok(Self { handlebars })
    }

    /// Use `export.hbs` from `templates_dir` when present, else the default.
    pub async fn load(templates_dir: &Path) -> Result<Self, ExportError> {
        let template_path = templates_dir.join(EXPORT_TEMPLATE_FILE);
        if !template_path.exists() {
            return Self::new();
        }
        let source = fs::read_to_string(&template_path).await?;
        debug!("Using export template {}", template_path.display());
        Self::from_source(&source)
    }

    pub fn render<T: Serialize>(&self, context: &T) -> Result<String, ExportError> {
        Ok(self.handlebars.render(TEMPLATE_NAME, context)?)
    }
}
