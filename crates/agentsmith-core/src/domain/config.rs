//! Configuration resolution: explicit overrides merged with scanned signals.

use serde::{Deserialize, Serialize};

use crate::domain::signals::{ProjectSignals, TestTool};

/// Explicit caller-supplied overrides.
///
/// Each flag is optional: `Some(v)` overrides the corresponding scanned
/// signal unconditionally, `None` falls back to the signal (or a fixed
/// default where no signal exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overrides {
    pub api_only: Option<bool>,
    pub skip_tests: Option<bool>,
    pub include_query_layer: Option<bool>,
    pub include_interactive_extras: Option<bool>,
}

impl Overrides {
    pub fn api_only(mut self, value: bool) -> Self {
        self.api_only = Some(value);
        self
    }

    pub fn skip_tests(mut self, value: bool) -> Self {
        self.skip_tests = Some(value);
        self
    }

    pub fn include_query_layer(mut self, value: bool) -> Self {
        self.include_query_layer = Some(value);
        self
    }

    pub fn include_interactive_extras(mut self, value: bool) -> Self {
        self.include_interactive_extras = Some(value);
        self
    }
}

/// The canonical configuration record for one generation run.
///
/// Resolved once from overrides + signals, then consumed read-only by every
/// downstream stage (selection, rendering, merging). Never mutated after
/// resolution: artifact selection and rendered content are a pure function
/// of this record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub api_only: bool,
    pub skip_tests: bool,
    pub include_query_layer: bool,
    pub include_interactive_extras: bool,
    pub test_tool: TestTool,
}

impl GeneratorConfig {
    /// Merge explicit overrides with scanned signals.
    ///
    /// Precedence, per flag:
    /// 1. an explicitly supplied override wins unconditionally;
    /// 2. an unset override falls back to the corresponding signal;
    /// 3. a flag with no corresponding signal (`skip_tests`) defaults to
    ///    `false`.
    ///
    /// Structural rule: `api_only = true` forces
    /// `include_interactive_extras = false` regardless of any override.
    /// An API-only application has no interactive frontend to document.
    pub fn resolve(overrides: &Overrides, signals: &ProjectSignals) -> Self {
        let api_only = overrides.api_only.unwrap_or(signals.api_only);

        let include_interactive_extras = if api_only {
            false
        } else {
            overrides
                .include_interactive_extras
                .unwrap_or(signals.has_component_frontend)
        };

        Self {
            api_only,
            skip_tests: overrides.skip_tests.unwrap_or(false),
            include_query_layer: overrides
                .include_query_layer
                .unwrap_or(signals.has_query_layer),
            include_interactive_extras,
            // Not on the override surface; carried from signals verbatim.
            test_tool: signals.test_tool,
        }
    }
}
