//! Aggregator construction, credential resolution and workflow discovery.

use rstest::rstest;
use scaffold_core::{
    credentials,
    facets::{Dependabot, DependabotOptions, Mergify, PullRequestLint, PullRequestTemplate, ScheduleInterval, Workflow},
    AppOptions, ComponentKind, GitHub, GitHubOptions, GithubCredentials, Project, ScaffoldError,
};

fn project() -> Project {
    Project::new("app")
}

fn app_credentials() -> GithubCredentials {
    GithubCredentials::from_app(AppOptions::default())
}

// ---------------------------------------------------------------------------
// 1. Construction defaults
// ---------------------------------------------------------------------------

#[test]
fn default_construction() {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");

    assert!(github.workflows_enabled());
    let mergify = github.mergify().expect("mergify enabled by default");
    assert!(project.get::<Mergify>(mergify).is_some());
    assert_eq!(
        github.projen_credentials(),
        &GithubCredentials::from_personal_access_token("PROJEN_GITHUB_TOKEN")
    );
    assert!(project.find_singleton::<PullRequestLint>().is_some());
}

#[test]
fn registered_aggregator_equals_returned_copy() {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");
    assert_eq!(GitHub::find_self(&project), Some(&github));

    let kinds: Vec<ComponentKind> = project.components().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![ComponentKind::Mergify, ComponentKind::PullRequestLint, ComponentKind::GitHub]
    );
}

#[test]
fn disabling_mergify_keeps_pr_lint() {
    let mut project = project();
    let options = GitHubOptions { mergify: false, ..Default::default() };
    let github = GitHub::new(&mut project, options).expect("github");

    assert!(github.mergify().is_none());
    assert!(project.find_singleton::<Mergify>().is_none());
    assert!(project.find_singleton::<PullRequestLint>().is_some());
}

#[test]
fn disabling_workflows_does_not_gate_factory() {
    let mut project = project();
    let options = GitHubOptions { workflows: false, ..Default::default() };
    let github = GitHub::new(&mut project, options).expect("github");

    assert!(!github.workflows_enabled());
    github.add_workflow(&mut project, "build").expect("add workflow");
    assert_eq!(github.workflows(&project).len(), 1);
}

#[test]
fn find_self_on_empty_project_is_none() {
    assert!(GitHub::find_self(&project()).is_none());
}

// ---------------------------------------------------------------------------
// 2. Credential resolution
// ---------------------------------------------------------------------------

#[rstest]
#[case::neither(None, None, Some(GithubCredentials::from_personal_access_token("PROJEN_GITHUB_TOKEN")))]
#[case::legacy_only(None, Some("FOO"), Some(GithubCredentials::from_personal_access_token("FOO")))]
#[case::new_style_only(Some(app_credentials()), None, Some(app_credentials()))]
#[case::both(Some(app_credentials()), Some("FOO"), None)]
fn credential_resolution_grid(
    #[case] configured: Option<GithubCredentials>,
    #[case] legacy: Option<&str>,
    #[case] expected: Option<GithubCredentials>,
) {
    let result = credentials::resolve(configured, legacy.map(str::to_string));
    match expected {
        Some(creds) => assert_eq!(result.expect("resolved"), creds),
        None => assert!(matches!(
            result,
            Err(ScaffoldError::ConflictingCredentialConfiguration { .. })
        )),
    }
}

#[test]
fn new_style_value_is_used_unchanged() {
    let mut project = project();
    let creds = GithubCredentials::from_personal_access_token("CUSTOM");
    let options = GitHubOptions {
        projen_credentials: Some(creds.clone()),
        ..Default::default()
    };
    let github = GitHub::new(&mut project, options).expect("github");
    assert_eq!(github.projen_credentials(), &creds);
}

#[test]
fn conflicting_credentials_register_nothing() {
    let mut project = project();
    let options = GitHubOptions {
        projen_credentials: Some(app_credentials()),
        projen_token_secret: Some("FOO".to_string()),
        ..Default::default()
    };

    let err = GitHub::new(&mut project, options).unwrap_err();
    assert!(
        matches!(err, ScaffoldError::ConflictingCredentialConfiguration { .. }),
        "got: {err}"
    );
    assert!(GitHub::find_self(&project).is_none());
    assert!(project.is_empty(), "no child may be registered after a conflict");
}

// ---------------------------------------------------------------------------
// 3. Factories
// ---------------------------------------------------------------------------

#[test]
fn pull_request_template_keeps_lines_in_order() {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");
    let id = github
        .add_pull_request_template(&mut project, ["L1", "L2"])
        .expect("template");

    let template = project.get::<PullRequestTemplate>(id).expect("template registered");
    assert_eq!(template.lines(), ["L1", "L2"]);
}

#[test]
fn dependabot_defaults_when_options_omitted() {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");
    let id = github.add_dependabot(&mut project, None).expect("dependabot");

    let bot = project.get::<Dependabot>(id).expect("registered");
    assert_eq!(bot.options(), &DependabotOptions::default());
    assert_eq!(bot.options().schedule_interval, ScheduleInterval::Daily);
}

#[test]
fn factories_leave_aggregator_fields_alone() {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");
    github.add_workflow(&mut project, "build").expect("workflow");
    github.add_dependabot(&mut project, None).expect("dependabot");
    assert_eq!(GitHub::find_self(&project), Some(&github));
}

// ---------------------------------------------------------------------------
// 4. Workflow discovery
// ---------------------------------------------------------------------------

fn project_with_workflows(names: &[&str]) -> (Project, GitHub) {
    let mut project = project();
    let github = GitHub::new(&mut project, GitHubOptions::default()).expect("github");
    for name in names {
        github.add_workflow(&mut project, *name).expect("add workflow");
    }
    (project, github)
}

fn names(workflows: Vec<&Workflow>) -> Vec<&str> {
    workflows.into_iter().map(Workflow::name).collect()
}

#[rstest]
#[case(&["b", "a", "c"], &["a", "b", "c"])]
#[case(&["release", "Build", "auto-approve"], &["auto-approve", "Build", "release"])]
#[case(&["zeta", "éclair", "fig", "Build", "build"], &["build", "Build", "éclair", "fig", "zeta"])]
#[case(&[], &[])]
fn workflows_are_sorted_by_name(#[case] added: &[&str], #[case] expected: &[&str]) {
    let (project, github) = project_with_workflows(added);
    assert_eq!(names(github.workflows(&project)), expected);
}

#[test]
fn find_workflow_hits_and_misses() {
    let (project, github) = project_with_workflows(&["b", "a", "c"]);
    assert_eq!(github.find_workflow(&project, "a").map(Workflow::name), Some("a"));
    assert!(github.find_workflow(&project, "z").is_none());
}

#[test]
fn workflows_listing_is_repeatable() {
    let (project, github) = project_with_workflows(&["b", "a", "c"]);
    let first = github.workflows(&project);
    let second = github.workflows(&project);
    assert_eq!(first, second);
}

#[test]
fn workflows_reflect_later_additions() {
    let (mut project, github) = project_with_workflows(&["b"]);
    assert_eq!(names(github.workflows(&project)), ["b"]);
    github.add_workflow(&mut project, "a").expect("add");
    assert_eq!(names(github.workflows(&project)), ["a", "b"]);
}

#[test]
fn duplicate_workflow_names_are_permitted() {
    let (project, github) = project_with_workflows(&["build", "build"]);
    assert_eq!(names(github.workflows(&project)), ["build", "build"]);
}
