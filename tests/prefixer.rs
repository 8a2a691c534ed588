// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end prefix inference through the public API.

use prefixer::config::{CommitMessageOptions, PrefixerConfig};
use prefixer::dependency::Dependency;
use prefixer::error::{ConfigError, PrefixerError, ProviderError};
use prefixer::history::{AuthorKind, CommitLister, CommitRecord};
use prefixer::source::Source;
use prefixer::style::CommitStyle;
use prefixer::PrNamePrefixer;
use std::cell::{Cell, RefCell};

/// In-memory lister that counts how often it is asked for commits.
struct CountingLister {
    result: RefCell<Option<Result<Vec<CommitRecord>, ProviderError>>>,
    commits: Vec<CommitRecord>,
    calls: Cell<usize>,
    limits: RefCell<Vec<Option<usize>>>,
}

impl CountingLister {
    fn new(commits: Vec<CommitRecord>) -> Self {
        Self {
            result: RefCell::new(None),
            commits,
            calls: Cell::new(0),
            limits: RefCell::new(Vec::new()),
        }
    }

    fn failing(error: ProviderError) -> Self {
        let lister = Self::new(Vec::new());
        *lister.result.borrow_mut() = Some(Err(error));
        lister
    }
}

impl CommitLister for CountingLister {
    fn list_recent_commits(
        &self,
        _repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        self.limits.borrow_mut().push(limit);
        match self.result.borrow_mut().take() {
            Some(result) => result,
            None => Ok(self.commits.clone()),
        }
    }
}

fn human(messages: &[&str]) -> Vec<CommitRecord> {
    messages
        .iter()
        .map(|m| CommitRecord::new("Jane Doe", *m).with_email("jane@example.com"))
        .collect()
}

fn github_bot(message: &str) -> CommitRecord {
    CommitRecord::new("dependabot[bot]", message)
        .with_email("49699333+dependabot[bot]@users.noreply.github.com")
        .with_kind(AuthorKind::Bot)
}

fn gitlab_bot(message: &str) -> CommitRecord {
    CommitRecord::new("Dependabot", message).with_email("support@dependabot.com")
}

fn prefix_for(
    lister: &CountingLister,
    provider: &str,
    dependencies: Vec<Dependency>,
    security_fix: bool,
) -> prefixer::Result<String> {
    PrNamePrefixer::new(
        lister,
        &Source::new(provider, "octo/repo"),
        dependencies,
        &PrefixerConfig::default(),
    )?
    .with_security_fix(security_fix)
    .pr_name_prefix()
}

fn production() -> Vec<Dependency> {
    vec![
        Dependency::development("jest", "npm_and_yarn"),
        Dependency::production("lodash", "npm_and_yarn"),
    ]
}

fn development() -> Vec<Dependency> {
    vec![Dependency::development("jest", "npm_and_yarn")]
}

#[test]
fn test_prior_gitmoji_commit_ignores_history() {
    let mut commits = vec![github_bot("⬆️ Bump foo")];
    commits.extend(human(&["fix: a", "feat: b", "docs: c", "Upgrade: d"]));
    let lister = CountingLister::new(commits);

    assert_eq!(prefix_for(&lister, "github", production(), false).unwrap(), "⬆️ ");
}

#[test]
fn test_prior_scoped_commit_on_gitlab() {
    let mut commits = human(&["Add a", "Remove b"]);
    commits.push(gitlab_bot("chore(deps): bump foo from 1.0.0 to 1.1.0"));
    let lister = CountingLister::new(commits);

    assert_eq!(
        prefix_for(&lister, "gitlab", production(), false).unwrap(),
        "chore(deps): "
    );
    assert_eq!(lister.limits.borrow().as_slice(), &[None]);
}

#[test]
fn test_prior_capitalized_commit_capitalizes_security_tag() {
    let lister = CountingLister::new(vec![github_bot("Build(deps): Bump foo")]);
    assert_eq!(
        prefix_for(&lister, "github", development(), true).unwrap(),
        "Build(deps-dev): [Security] "
    );
}

#[test]
fn test_angular_history_without_prior_commit() {
    let lister = CountingLister::new(human(&["fix: x", "feat: y", "docs: z", "chore: w"]));
    assert_eq!(
        prefix_for(&lister, "github", production(), false).unwrap(),
        "chore(deps): "
    );
    assert_eq!(lister.limits.borrow().as_slice(), &[Some(100)]);
}

#[test]
fn test_bot_commits_are_not_history() {
    // Only bot commits use angular types; humans write plain sentences.
    let mut commits = vec![
        CommitRecord::new("renovate[bot]", "fix(deps): update a").with_kind(AuthorKind::Bot),
        CommitRecord::new("renovate[bot]", "fix(deps): update b").with_kind(AuthorKind::Bot),
    ];
    commits.extend(human(&["Add a", "Merge pull request #3 from x/y", "Remove b"]));
    let lister = CountingLister::new(commits);

    assert_eq!(prefix_for(&lister, "github", production(), false).unwrap(), "");
}

#[test]
fn test_eslint_history() {
    let lister = CountingLister::new(human(&["Fix: a", "Update: b", "New: c", "Docs: d"]));
    assert_eq!(
        prefix_for(&lister, "github", production(), true).unwrap(),
        "Upgrade: [security] "
    );
}

#[test]
fn test_gitmoji_history_security_fix() {
    let lister = CountingLister::new(human(&[":bug: fix a", ":sparkles: add b", "Release 2.0"]));
    assert_eq!(
        prefix_for(&lister, "github", production(), true).unwrap(),
        "⬆️🔒 "
    );
}

#[test]
fn test_generic_prefixed_history() {
    let lister = CountingLister::new(human(&["parser: a", "lexer: b", "Release 2.0"]));
    assert_eq!(
        prefix_for(&lister, "github", development(), true).unwrap(),
        "build(deps-dev): [security] "
    );
}

#[test]
fn test_no_history_degrades_to_no_prefix() {
    let lister = CountingLister::failing(ProviderError::NoHistory);
    assert_eq!(prefix_for(&lister, "github", production(), false).unwrap(), "");

    let lister = CountingLister::failing(ProviderError::Conflict);
    assert_eq!(
        prefix_for(&lister, "gitlab", production(), true).unwrap(),
        "[Security] "
    );
}

#[test]
fn test_request_failure_is_an_error() {
    let lister = CountingLister::failing(ProviderError::RequestFailed {
        message: "502 Bad Gateway".to_string(),
    });
    assert!(matches!(
        prefix_for(&lister, "github", production(), false),
        Err(PrefixerError::Provider(ProviderError::RequestFailed { .. }))
    ));
}

#[test]
fn test_missing_repository_is_an_error() {
    let lister = CountingLister::failing(ProviderError::NotFound {
        repo: "octo/repo".to_string(),
    });
    assert!(matches!(
        prefix_for(&lister, "gitlab", production(), false),
        Err(PrefixerError::Provider(ProviderError::NotFound { .. }))
    ));
}

#[test]
fn test_unsupported_provider_is_fatal() {
    let lister = CountingLister::new(human(&["fix: a"]));
    let err = prefix_for(&lister, "bitbucket", production(), false).unwrap_err();

    assert!(matches!(
        err,
        PrefixerError::Config(ConfigError::UnsupportedProvider { .. })
    ));
    assert!(err.to_string().contains("bitbucket"));
    assert_eq!(lister.calls.get(), 0);
}

#[test]
fn test_one_fetch_per_run() {
    let lister = CountingLister::new(human(&["Fix: a", "feat: B"]));
    let prefixer = PrNamePrefixer::new(
        &lister,
        &Source::new("github", "octo/repo"),
        production(),
        &PrefixerConfig::default(),
    )
    .unwrap()
    .with_security_fix(true);

    let first = prefixer.pr_name_prefix().unwrap();
    let capitalize = prefixer.capitalize_first_word().unwrap();
    let second = prefixer.pr_name_prefix().unwrap();

    assert_eq!(first, second);
    assert_eq!(
        prefixer.style_decision().unwrap().style,
        CommitStyle::ConventionalPrefixWithScope
    );
    assert_eq!(first, "build(deps): [security] ");
    assert!(!capitalize);
    assert_eq!(lister.calls.get(), 1);
}

#[test]
fn test_explicit_prefix_from_config() {
    let lister = CountingLister::new(human(&["fix: a"]));
    let mut config = PrefixerConfig::default();
    config.commit_message = CommitMessageOptions {
        prefix: Some("deps".to_string()),
        prefix_development: Some("dev-deps".to_string()),
        include_scope: false,
    };

    let prefixer = PrNamePrefixer::new(
        &lister,
        &Source::new("github", "octo/repo"),
        development(),
        &config,
    )
    .unwrap()
    .with_security_fix(true);

    assert_eq!(prefixer.pr_name_prefix().unwrap(), "dev-deps: [security] ");
    assert_eq!(lister.calls.get(), 0);
}
