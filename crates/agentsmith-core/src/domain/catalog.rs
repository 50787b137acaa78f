//! The declarative artifact catalog and selection over it.
//!
//! # Design
//!
//! "What to generate" is a static table, fixed at design time; "how" lives in
//! the renderer and the write loop. Each entry pairs an inclusion predicate
//! over the resolved configuration with an output path and a template.
//! Artifacts are independent of one another, so declaration order only
//! affects reporting, never correctness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{GeneratorConfig, templates};

/// Directory that receives every generated agent definition.
pub const AGENTS_DIR: &str = ".claude/agents";

/// Identifier for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactId {
    Orchestrator,
    BackendDeveloper,
    TestRunner,
    GraphqlSpecialist,
    FrontendDeveloper,
    InteractiveUi,
}

impl ArtifactId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Orchestrator => "orchestrator",
            Self::BackendDeveloper => "backend-developer",
            Self::TestRunner => "test-runner",
            Self::GraphqlSpecialist => "graphql-specialist",
            Self::FrontendDeveloper => "frontend-developer",
            Self::InteractiveUi => "interactive-ui",
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate output artifact.
///
/// Static data only; the predicate is a plain `fn` so the whole catalog can
/// live in a `const` table.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSpec {
    pub id: ArtifactId,
    /// Output path relative to the project root.
    pub path: &'static str,
    /// Inclusion predicate over the resolved configuration.
    pub include: fn(&GeneratorConfig) -> bool,
    /// Parameterized template text.
    pub template: &'static str,
}

/// The full catalog, in reporting order.
///
/// The orchestrator is the one fixed entry: its predicate is always true.
pub const CATALOG: &[ArtifactSpec] = &[
    ArtifactSpec {
        id: ArtifactId::Orchestrator,
        path: ".claude/agents/orchestrator.md",
        include: |_| true,
        template: templates::ORCHESTRATOR,
    },
    ArtifactSpec {
        id: ArtifactId::BackendDeveloper,
        path: ".claude/agents/backend-developer.md",
        include: |_| true,
        template: templates::BACKEND_DEVELOPER,
    },
    ArtifactSpec {
        id: ArtifactId::TestRunner,
        path: ".claude/agents/test-runner.md",
        include: |c| !c.skip_tests,
        template: templates::TEST_RUNNER,
    },
    ArtifactSpec {
        id: ArtifactId::GraphqlSpecialist,
        path: ".claude/agents/graphql-specialist.md",
        include: |c| c.include_query_layer,
        template: templates::GRAPHQL_SPECIALIST,
    },
    ArtifactSpec {
        id: ArtifactId::FrontendDeveloper,
        path: ".claude/agents/frontend-developer.md",
        include: |c| !c.api_only,
        template: templates::FRONTEND_DEVELOPER,
    },
    ArtifactSpec {
        id: ArtifactId::InteractiveUi,
        path: ".claude/agents/interactive-ui.md",
        include: |c| c.include_interactive_extras,
        template: templates::INTERACTIVE_UI,
    },
];

/// Filter the catalog by each entry's predicate.
///
/// Pure and idempotent: the same configuration always yields the same set in
/// the same order.
pub fn select_artifacts(config: &GeneratorConfig) -> Vec<&'static ArtifactSpec> {
    CATALOG
        .iter()
        .filter(|spec| (spec.include)(config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Overrides, ProjectSignals, TestTool};

    fn ids(config: &GeneratorConfig) -> Vec<ArtifactId> {
        select_artifacts(config).iter().map(|s| s.id).collect()
    }

    fn resolve(overrides: Overrides, signals: ProjectSignals) -> GeneratorConfig {
        GeneratorConfig::resolve(&overrides, &signals)
    }

    #[test]
    fn orchestrator_is_always_selected() {
        let everything_off = resolve(
            Overrides::default()
                .api_only(true)
                .skip_tests(true)
                .include_query_layer(false),
            ProjectSignals::default(),
        );

        assert_eq!(
            ids(&everything_off),
            vec![ArtifactId::Orchestrator, ArtifactId::BackendDeveloper]
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let config = resolve(Overrides::default(), ProjectSignals::default());

        assert_eq!(ids(&config), ids(&config));
    }

    #[test]
    fn api_only_graphql_project_selects_query_layer_but_no_ui() {
        // Scenario: API-mode marker plus a GraphQL schema directory,
        // no overrides.
        let signals = ProjectSignals {
            api_only: true,
            has_query_layer: true,
            has_component_frontend: false,
            test_tool: TestTool::RSpec,
        };
        let config = resolve(Overrides::default(), signals);

        let selected = ids(&config);
        assert!(selected.contains(&ArtifactId::GraphqlSpecialist));
        assert!(!selected.contains(&ArtifactId::FrontendDeveloper));
        assert!(!selected.contains(&ArtifactId::InteractiveUi));
    }

    #[test]
    fn empty_project_with_skip_tests_excludes_test_runner() {
        // Scenario: empty project directory, skip_tests override.
        let config = resolve(Overrides::default().skip_tests(true), ProjectSignals::default());

        let selected = ids(&config);
        assert!(!selected.contains(&ArtifactId::TestRunner));
        // api_only defaults false, so the UI-oriented artifact stays in.
        assert!(selected.contains(&ArtifactId::FrontendDeveloper));
    }

    #[test]
    fn interactive_extras_never_selected_under_api_only() {
        let signals = ProjectSignals {
            api_only: true,
            has_component_frontend: true,
            ..ProjectSignals::default()
        };
        let config = resolve(
            Overrides::default().include_interactive_extras(true),
            signals,
        );

        assert!(!ids(&config).contains(&ArtifactId::InteractiveUi));
    }

    #[test]
    fn catalog_paths_live_under_the_agents_dir_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in CATALOG {
            assert!(spec.path.starts_with(AGENTS_DIR), "{}", spec.path);
            assert!(seen.insert(spec.path), "duplicate path {}", spec.path);
        }
    }
}
