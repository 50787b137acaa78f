//! Parameterized template text shipped with Agentsmith.
//!
//! Templates are `&'static str` constants referenced by the artifact catalog.
//! `{{VAR}}` placeholders are bound by the renderer from the resolved
//! configuration; a placeholder the configuration does not provide is a
//! contract violation, not a soft default.
//!
//! The prose itself is deliberately static. What varies per project is which
//! templates are selected and which configuration values are interpolated,
//! never the surrounding text.

/// The always-generated top-level coordination agent.
pub const ORCHESTRATOR: &str = "\
---
name: orchestrator
description: Coordinates the agent team for this application
---

# Orchestrator

You coordinate work across the specialised agents in this directory.

- Break incoming tasks into sub-tasks and delegate to the matching agent.
- The application runs in {{API_MODE}} mode; route UI work accordingly.
- Prefer the smallest set of agents that can complete the task.
- Collect results and verify the task is complete before reporting back.
";

pub const BACKEND_DEVELOPER: &str = "\
---
name: backend-developer
description: Implements server-side models, controllers, and business logic
---

# Backend Developer

You own the server side of this {{API_MODE}} application.

- Follow the existing conventions for models, controllers, and services.
- Keep business logic out of controllers.
- Run {{TEST_COMMAND}} before declaring server-side work done.
";

pub const TEST_RUNNER: &str = "\
---
name: test-runner
description: Runs and repairs the {{TEST_TOOL}} suite
---

# Test Runner

This project tests with {{TEST_TOOL}}.

- Run the suite with `{{TEST_COMMAND}}`.
- When a test fails, fix the underlying code before touching the test.
- Add coverage for any behaviour you change.
";

pub const GRAPHQL_SPECIALIST: &str = "\
---
name: graphql-specialist
description: Maintains the GraphQL schema, types, and resolvers
---

# GraphQL Specialist

You own the query-language API layer under `app/graphql`.

- Keep schema changes backwards compatible.
- Resolvers stay thin; push logic into the domain layer.
- Update affected queries and mutations together with their types.
";

pub const FRONTEND_DEVELOPER: &str = "\
---
name: frontend-developer
description: Implements views, layouts, and frontend assets
---

# Frontend Developer

You own the user-facing side of this application.

- Follow the existing view and asset conventions.
- Keep markup accessible and styles consistent with the current design.
";

pub const INTERACTIVE_UI: &str = "\
---
name: interactive-ui
description: Builds interactive component-based frontend behaviour
---

# Interactive UI

You own the component-based interactive layer of the frontend.

- Keep components small and composable.
- State lives as close to where it is used as possible.
- Coordinate with the frontend-developer agent on shared layout changes.
";

// ── Shared guidance document ─────────────────────────────────────────────────

/// Unique, stable heading used to detect prior integration.
///
/// Detection is a plain substring search on the existing document, not a
/// structured parse. The heading must therefore never change once released.
pub const GUIDANCE_MARKER: &str = "## Working With the Agent Team";

/// Fixed marker-tagged section appended to an existing guidance document.
pub const GUIDANCE_SECTION: &str = "\
## Working With the Agent Team

This project carries a generated agent team under `.claude/agents/`.

- Start with the `orchestrator` agent; it delegates to the specialists.
- Each agent file describes its own responsibilities and boundaries.
- Regenerate the team after structural changes to the application.
";

/// Creation template for a guidance document that does not exist yet.
///
/// Contains [`GUIDANCE_SECTION`] verbatim (marker included), so a freshly
/// created document is already "integrated" on the next run.
pub const GUIDANCE_DOCUMENT: &str = "\
# Project Instructions

This application is maintained with the help of a generated agent team.
It runs in {{API_MODE}} mode and tests with {{TEST_TOOL}} (`{{TEST_COMMAND}}`).

## Working With the Agent Team

This project carries a generated agent team under `.claude/agents/`.

- Start with the `orchestrator` agent; it delegates to the specialists.
- Each agent file describes its own responsibilities and boundaries.
- Regenerate the team after structural changes to the application.
";
