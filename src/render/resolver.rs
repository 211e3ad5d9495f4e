use std::path::PathBuf;

use minijinja::Environment;

use crate::render::context::RenderContext;

/// Signal that a template could not be resolved or rendered.
///
/// The server recovers both cases into a 404; neither is ever surfaced to
/// the client as a 500.
#[derive(Debug)]
pub enum RenderError {
    /// No template exists under the given identifier
    NotFound(String),
    /// The template exists but failed to load or render
    Render(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::NotFound(name) => write!(f, "template not found: {}", name),
            RenderError::Render(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Resolves template identifiers to rendered bytes.
///
/// Implementations must tolerate concurrent read access; one resolver is
/// shared across all connection handlers and never mutated after startup.
pub trait TemplateResolver: Send + Sync {
    fn render(&self, template: &str, ctx: &RenderContext) -> Result<Vec<u8>, RenderError>;
}

/// Jinja-style resolver backed by a template directory.
pub struct JinjaResolver {
    env: Environment<'static>,
}

impl JinjaResolver {
    /// Creates a resolver loading templates from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(root.into()));
        env.set_auto_escape_callback(|_name| minijinja::AutoEscape::None);

        Self { env }
    }
}

impl TemplateResolver for JinjaResolver {
    fn render(&self, template: &str, ctx: &RenderContext) -> Result<Vec<u8>, RenderError> {
        let tmpl = self.env.get_template(template).map_err(|e| match e.kind() {
            minijinja::ErrorKind::TemplateNotFound => RenderError::NotFound(template.to_string()),
            _ => RenderError::Render(e.to_string()),
        })?;

        let rendered = tmpl
            .render(ctx)
            .map_err(|e| RenderError::Render(e.to_string()))?;

        Ok(rendered.into_bytes())
    }
}
