use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may hold onto them across reporting layers)
/// - Categorizable (for display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A template referenced a variable the resolver never populated.
    ///
    /// The catalog and the resolver must stay in sync by construction, so
    /// this is a programming-contract violation and is never silently
    /// defaulted.
    #[error("artifact '{artifact}' references unresolved placeholder '{{{{{placeholder}}}}}'")]
    TemplateContractViolation {
        artifact: String,
        placeholder: String,
    },

    #[error("unknown test tool: {0}")]
    UnknownTestTool(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateContractViolation {
                artifact,
                placeholder,
            } => vec![
                format!(
                    "Template for '{artifact}' uses '{{{{{placeholder}}}}}' but the \
                     configuration does not provide it"
                ),
                "The artifact catalog and the configuration resolver are out of sync".into(),
                "This is a bug in Agentsmith, please report it".into(),
            ],
            Self::UnknownTestTool(name) => vec![
                format!("'{name}' is not a recognised test framework"),
                "Supported values: rspec, minitest".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateContractViolation { .. } => ErrorCategory::Contract,
            Self::UnknownTestTool(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Contract,
    Internal,
}
