//! Template rendering: binding configuration values into catalog templates.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::{ArtifactSpec, DomainError, GeneratorConfig};

/// One rendered output file, ready for the filesystem writer.
///
/// Ephemeral: produced by [`render`], consumed once by the write loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: String,
}

/// Variable bindings derived from the resolved configuration.
///
/// These are the contract between the resolver and the catalog: every
/// `{{VAR}}` a shipped template uses must be populated here. The context is
/// built from the configuration alone, so rendering stays a pure function of
/// it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut variables = HashMap::new();

        variables.insert("TEST_TOOL", config.test_tool.as_str().to_string());
        variables.insert("TEST_COMMAND", config.test_tool.command().to_string());
        variables.insert(
            "API_MODE",
            if config.api_only {
                "API-only".to_string()
            } else {
                "full-stack".to_string()
            },
        );

        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every known `{{VAR}}` in `template`.
    ///
    /// Unknown placeholders are left in place for the caller to detect.
    fn substitute(&self, template: &str) -> String {
        let mut output = template.to_string();
        for (key, value) in &self.variables {
            output = output.replace(&format!("{{{{{key}}}}}"), value);
        }
        output
    }
}

/// Render one catalog entry against the resolved configuration.
///
/// Fails only with [`DomainError::TemplateContractViolation`] when the
/// template references a variable the configuration did not populate. That
/// indicates a catalog/resolver mismatch and is never silently defaulted.
pub fn render(
    spec: &ArtifactSpec,
    config: &GeneratorConfig,
) -> Result<GeneratedArtifact, DomainError> {
    let content = render_text(spec.id.as_str(), spec.template, config)?;

    Ok(GeneratedArtifact {
        path: PathBuf::from(spec.path),
        content,
    })
}

/// Render arbitrary template text with the same contract as [`render`].
///
/// Used by the document merger for the guidance-document creation template,
/// which is not a catalog entry.
pub fn render_text(
    artifact: &str,
    template: &str,
    config: &GeneratorConfig,
) -> Result<String, DomainError> {
    let context = RenderContext::from_config(config);
    let content = context.substitute(template);

    if let Some(placeholder) = unresolved_placeholder(&content) {
        return Err(DomainError::TemplateContractViolation {
            artifact: artifact.to_string(),
            placeholder,
        });
    }

    Ok(content)
}

/// Find the first `{{...}}` left after substitution, if any.
fn unresolved_placeholder(content: &str) -> Option<String> {
    let start = content.find("{{")?;
    let rest = &content[start + 2..];
    let end = rest.find("}}")?;
    Some(rest[..end].to_string())
}
