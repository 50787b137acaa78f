//! End-to-end generation workflow over the in-memory filesystem.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use agentsmith_adapters::MemoryFilesystem;
use agentsmith_core::{
    application::{ApplicationError, Filesystem, GenerateService, MergeOutcome},
    domain::{Overrides, TestTool},
    error::{AgentsmithError, AgentsmithResult},
};

const ROOT: &str = "/app";

fn service_over(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()))
}

/// An API-only Rails application with a GraphQL layer and RSpec.
fn seed_api_graphql_project(fs: &MemoryFilesystem) {
    fs.add_file(
        "/app/config/application.rb",
        "module App\n  class Application < Rails::Application\n    config.api_only = true\n  end\nend\n",
    );
    fs.add_dir("/app/app/graphql");
    fs.add_file("/app/Gemfile", "source \"https://rubygems.org\"\ngem \"rspec-rails\"\n");
}

// ── Scenario A: API-only project with a query layer ──────────────────────────

#[test]
fn api_graphql_project_gets_query_layer_but_no_ui_agents() {
    let fs = MemoryFilesystem::new();
    seed_api_graphql_project(&fs);

    let report = service_over(&fs)
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();

    assert!(report.config.api_only);
    assert!(report.config.include_query_layer);
    assert!(!report.config.include_interactive_extras);
    assert_eq!(report.config.test_tool, TestTool::RSpec);

    assert!(fs.file_exists_at(".claude/agents/orchestrator.md"));
    assert!(fs.file_exists_at(".claude/agents/graphql-specialist.md"));
    assert!(!fs.file_exists_at(".claude/agents/frontend-developer.md"));
    assert!(!fs.file_exists_at(".claude/agents/interactive-ui.md"));

    let test_runner = fs
        .read_file(Path::new("/app/.claude/agents/test-runner.md"))
        .unwrap();
    assert!(test_runner.contains("RSpec"));
    assert!(test_runner.contains("bundle exec rspec"));
}

// ── Scenario B: empty project with skip_tests ────────────────────────────────

#[test]
fn empty_project_with_skip_tests_keeps_ui_but_drops_test_runner() {
    let fs = MemoryFilesystem::new();
    fs.add_dir(ROOT);

    let report = service_over(&fs)
        .generate(Path::new(ROOT), Overrides::default().skip_tests(true))
        .unwrap();

    assert!(!report.config.api_only);
    assert!(report.config.skip_tests);
    assert_eq!(report.config.test_tool, TestTool::Minitest);

    assert!(!fs.file_exists_at(".claude/agents/test-runner.md"));
    assert!(fs.file_exists_at(".claude/agents/frontend-developer.md"));
}

// ── Fatal root handling ──────────────────────────────────────────────────────

#[test]
fn missing_root_is_fatal_with_no_partial_writes() {
    let fs = MemoryFilesystem::new();

    let err = service_over(&fs)
        .generate(Path::new("/nowhere"), Overrides::default())
        .unwrap_err();

    assert!(matches!(
        err,
        AgentsmithError::Application(ApplicationError::MissingRoot { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn failed_write_keeps_earlier_artifacts_and_leaves_the_guidance_document_alone() {
    let fs = MemoryFilesystem::new();
    seed_api_graphql_project(&fs);

    // Storage runs out after two artifact writes. Scenario A selects four
    // artifacts, so the run dies mid-loop, before the guidance merge.
    let service = GenerateService::new(Box::new(QuotaFilesystem::new(fs.clone(), 2)));
    let err = service
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap_err();

    assert!(matches!(
        err,
        AgentsmithError::Application(ApplicationError::FilesystemError { .. })
    ));

    // No rollback: artifacts written before the failure stay on disk, in
    // catalog order; nothing past the failure exists.
    assert!(fs.file_exists_at(".claude/agents/orchestrator.md"));
    assert!(fs.file_exists_at(".claude/agents/backend-developer.md"));
    assert!(!fs.file_exists_at(".claude/agents/test-runner.md"));
    assert!(!fs.file_exists_at(".claude/agents/graphql-specialist.md"));
    assert!(!fs.file_exists_at("CLAUDE.md"));
}

// ── Guidance document merge ──────────────────────────────────────────────────

#[test]
fn absent_guidance_document_is_created_from_the_template() {
    let fs = MemoryFilesystem::new();
    seed_api_graphql_project(&fs);

    let report = service_over(&fs)
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();

    assert_eq!(report.merge, MergeOutcome::Created);

    let doc = fs.read_file(Path::new("/app/CLAUDE.md")).unwrap();
    assert!(doc.contains("## Working With the Agent Team"));
    assert!(doc.contains("RSpec"));
    assert!(doc.contains("API-only"));
}

#[test]
fn existing_guidance_document_gains_exactly_one_appended_section() {
    let fs = MemoryFilesystem::new();
    fs.add_dir(ROOT);
    let original = "# My App\n\nHand-written instructions.\n";
    fs.add_file("/app/CLAUDE.md", original);

    let report = service_over(&fs)
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();

    assert_eq!(report.merge, MergeOutcome::Appended);

    let merged = fs.read_file(Path::new("/app/CLAUDE.md")).unwrap();
    // Existing content is preserved untouched at the top; the seam is a
    // single blank line before the section heading.
    assert!(merged.starts_with(original.trim_end()));
    assert!(merged.contains("Hand-written instructions.\n\n## Working With the Agent Team"));
    assert_eq!(merged.matches("## Working With the Agent Team").count(), 1);
}

#[test]
fn merge_is_idempotent_across_runs() {
    let fs = MemoryFilesystem::new();
    fs.add_dir(ROOT);
    fs.add_file("/app/CLAUDE.md", "# My App\n");

    let service = service_over(&fs);
    service
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();
    let after_first = fs.read_file(Path::new("/app/CLAUDE.md")).unwrap();

    let report = service
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();
    let after_second = fs.read_file(Path::new("/app/CLAUDE.md")).unwrap();

    assert_eq!(report.merge, MergeOutcome::AlreadyIntegrated);
    assert_eq!(after_first, after_second);
}

#[test]
fn created_document_is_already_integrated_on_the_next_run() {
    let fs = MemoryFilesystem::new();
    fs.add_dir(ROOT);

    let service = service_over(&fs);
    let first = service
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();
    let second = service
        .generate(Path::new(ROOT), Overrides::default())
        .unwrap();

    assert_eq!(first.merge, MergeOutcome::Created);
    assert_eq!(second.merge, MergeOutcome::AlreadyIntegrated);
}

// ── Determinism ──────────────────────────────────────────────────────────────

#[test]
fn identical_projects_produce_byte_identical_artifacts() {
    let run = || {
        let fs = MemoryFilesystem::new();
        seed_api_graphql_project(&fs);
        service_over(&fs)
            .generate(Path::new(ROOT), Overrides::default())
            .unwrap();

        let mut files: Vec<_> = fs
            .list_files()
            .into_iter()
            .map(|p| {
                let content = fs.read_file(&p).unwrap();
                (p, content)
            })
            .collect();
        files.sort();
        files
    };

    assert_eq!(run(), run());
}

// ── Override precedence through the full pipeline ────────────────────────────

#[test]
fn explicit_override_beats_scanned_signal_end_to_end() {
    let fs = MemoryFilesystem::new();
    seed_api_graphql_project(&fs);

    // The project scans as API-only, but the caller insists otherwise.
    let report = service_over(&fs)
        .generate(Path::new(ROOT), Overrides::default().api_only(false))
        .unwrap();

    assert!(!report.config.api_only);
    assert!(fs.file_exists_at(".claude/agents/frontend-developer.md"));
}

// ── helpers ──────────────────────────────────────────────────────────────────

trait FileAt {
    fn file_exists_at(&self, relative: &str) -> bool;
}

impl FileAt for MemoryFilesystem {
    fn file_exists_at(&self, relative: &str) -> bool {
        self.file_exists(&Path::new(ROOT).join(relative))
    }
}

/// Wrapper that refuses writes once a budget is spent, simulating storage
/// exhaustion partway through a run. Probes, reads, and directory creation
/// keep working so only the artifact write loop is affected.
struct QuotaFilesystem {
    inner: MemoryFilesystem,
    writes_left: AtomicUsize,
}

impl QuotaFilesystem {
    fn new(inner: MemoryFilesystem, budget: usize) -> Self {
        Self {
            inner,
            writes_left: AtomicUsize::new(budget),
        }
    }
}

impl Filesystem for QuotaFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        self.inner.dir_exists(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.inner.file_exists(path)
    }

    fn read_to_string(&self, path: &Path) -> AgentsmithResult<String> {
        self.inner.read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> AgentsmithResult<()> {
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> AgentsmithResult<()> {
        let spent = self
            .writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err();
        if spent {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No space left on device".into(),
            }
            .into());
        }
        self.inner.write_file(path, content)
    }
}
