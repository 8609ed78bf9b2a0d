use std::path::Path;

use serde_json::{Map, Value};
use tera::Tera;

#[derive(Debug)]
pub enum TemplateError {
    NotFound(String),
    Render {
        template: String,
        source: tera::Error,
    },
    Engine(tera::Error),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::NotFound(name) => write!(f, "template '{}' not found", name),
            TemplateError::Render { template, source } => {
                write!(f, "failed to render '{}': {}", template, render_detail(source))
            }
            TemplateError::Engine(e) => write!(f, "template engine error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

// Tera puts the useful message (undefined variable, bad filter, ...)
// at the bottom of the source chain; surface the deepest one.
fn render_detail(err: &tera::Error) -> String {
    let mut current: &dyn std::error::Error = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load every template under `template_root`.
    pub fn new(template_root: &Path) -> Result<Self, TemplateError> {
        let pattern = format!("{}/**/*", template_root.display());
        let mut tera = Tera::new(&pattern).map_err(TemplateError::Engine)?;
        // Escape interpolated values in markup templates unless the
        // template itself marks them safe.
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        Ok(Self { tera })
    }

    /// Render a template with each key of `context` as a variable.
    pub fn render(
        &self,
        template: &str,
        context: &Map<String, Value>,
    ) -> Result<String, TemplateError> {
        let ctx = tera::Context::from_serialize(context).map_err(TemplateError::Engine)?;

        self.tera.render(template, &ctx).map_err(|e| match &e.kind {
            tera::ErrorKind::TemplateNotFound(name) => TemplateError::NotFound(name.clone()),
            _ => TemplateError::Render {
                template: template.to_string(),
                source: e,
            },
        })
    }
}
