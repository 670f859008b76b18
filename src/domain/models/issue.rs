//! The source-side issue record.

/// State of a GitHub issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueState {
    /// The issue is open. Also the fallback for unrecognised states.
    #[default]
    Open,
    /// The issue is closed.
    Closed,
}

/// An issue fetched from the source tracker.
///
/// Identity is the repository-scoped issue `number`. Records flagged as
/// pull requests are carried through fetching but excluded from planning;
/// GitHub's issues endpoint returns both kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Sequential number within the repository (e.g., 42 for "#42").
    pub number: u64,
    /// Issue title. GitHub always sends one, but delta-mode payloads
    /// may be trimmed down, so absence is tolerated.
    pub title: Option<String>,
    /// URL to view the issue in the GitHub UI.
    pub url: String,
    /// Current state.
    pub state: IssueState,
    /// True when this record is actually a pull request.
    pub is_pull_request: bool,
}
