//! The typed field set written to a Notion page.

use serde_json::{json, Value};

use super::issue::{Issue, IssueState};

/// Name of the title property on the Notion database.
pub const PROP_NAME: &str = "Name";
/// Name of the denormalized issue-number property. This is the identity
/// key: the target index and the delta-mode lookup both filter on it.
pub const PROP_NUMBER: &str = "Github Number";
/// Name of the issue URL property.
pub const PROP_URL: &str = "URL";
/// Name of the status property.
pub const PROP_STATUS: &str = "Status";
/// Name of the optional project relation property. The pre-existing
/// database schema names the relation this way despite it not being a
/// multi-select; renaming it would break every relation-bearing write.
pub const PROP_PROJECT: &str = "Multi-select";

/// Placeholder title used when the source payload carries none.
const UNTITLED: &str = "(untitled)";

/// Status value written to the Notion status property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    /// Written as `"Open"`.
    Open,
    /// Written as `"Closed"`.
    Closed,
}

impl IssueStatus {
    /// The Notion status option name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl From<IssueState> for IssueStatus {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Open => Self::Open,
            IssueState::Closed => Self::Closed,
        }
    }
}

/// The complete set of property values written to a page.
///
/// Applying the same field set twice leaves the page unchanged, which is
/// what makes repeated update operations safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFields {
    /// Page title.
    pub title: String,
    /// Denormalized issue number (the identity key).
    pub number: u64,
    /// Issue URL.
    pub url: String,
    /// Open/Closed status.
    pub status: IssueStatus,
    /// Optional project relation id, constant across a run.
    pub relation: Option<String>,
}

impl PageFields {
    /// Map an issue to its page fields. Pure and total: a missing title
    /// becomes a placeholder and an unknown state is treated as open.
    pub fn from_issue(issue: &Issue, relation: Option<&str>) -> Self {
        Self {
            title: issue
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            number: issue.number,
            url: issue.url.clone(),
            status: issue.state.into(),
            relation: relation.map(str::to_string),
        }
    }

    /// Serialize to the Notion `properties` JSON object.
    pub fn to_properties(&self) -> Value {
        let mut props = serde_json::Map::new();
        props.insert(
            PROP_NAME.to_string(),
            json!({ "title": [{ "text": { "content": self.title } }] }),
        );
        props.insert(PROP_NUMBER.to_string(), json!({ "number": self.number }));
        props.insert(PROP_URL.to_string(), json!({ "url": self.url }));
        props.insert(
            PROP_STATUS.to_string(),
            json!({ "status": { "name": self.status.as_str() } }),
        );
        if let Some(relation) = &self.relation {
            props.insert(
                PROP_PROJECT.to_string(),
                json!({ "relation": [{ "id": relation }] }),
            );
        }
        Value::Object(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_issue(number: u64, title: &str) -> Issue {
        Issue {
            number,
            title: Some(title.to_string()),
            url: format!("https://github.com/org/repo/issues/{number}"),
            state: IssueState::Open,
            is_pull_request: false,
        }
    }

    // ── from_issue ──────────────────────────────────────────────────────────

    #[test]
    fn test_from_issue_maps_all_fields() {
        let issue = open_issue(5, "Bug");
        let fields = PageFields::from_issue(&issue, Some("proj-1"));
        assert_eq!(fields.title, "Bug");
        assert_eq!(fields.number, 5);
        assert_eq!(fields.url, "https://github.com/org/repo/issues/5");
        assert_eq!(fields.status, IssueStatus::Open);
        assert_eq!(fields.relation.as_deref(), Some("proj-1"));
    }

    #[test]
    fn test_from_issue_missing_title_uses_placeholder() {
        let mut issue = open_issue(1, "x");
        issue.title = None;
        let fields = PageFields::from_issue(&issue, None);
        assert_eq!(fields.title, "(untitled)");
    }

    #[test]
    fn test_from_issue_empty_title_uses_placeholder() {
        let issue = open_issue(1, "");
        let fields = PageFields::from_issue(&issue, None);
        assert_eq!(fields.title, "(untitled)");
    }

    #[test]
    fn test_from_issue_closed_state() {
        let mut issue = open_issue(7, "Done");
        issue.state = IssueState::Closed;
        let fields = PageFields::from_issue(&issue, None);
        assert_eq!(fields.status, IssueStatus::Closed);
    }

    // ── to_properties ───────────────────────────────────────────────────────

    #[test]
    fn test_to_properties_shape() {
        let fields = PageFields::from_issue(&open_issue(42, "Fix login"), None);
        let props = fields.to_properties();
        assert_eq!(
            props[PROP_NAME]["title"][0]["text"]["content"],
            json!("Fix login")
        );
        assert_eq!(props[PROP_NUMBER]["number"], json!(42));
        assert_eq!(
            props[PROP_URL]["url"],
            json!("https://github.com/org/repo/issues/42")
        );
        assert_eq!(props[PROP_STATUS]["status"]["name"], json!("Open"));
        assert!(props.get(PROP_PROJECT).is_none());
    }

    #[test]
    fn test_to_properties_includes_relation_when_set() {
        let fields = PageFields::from_issue(&open_issue(3, "Relate"), Some("p-9"));
        let props = fields.to_properties();
        // The database schema names the relation property "Multi-select";
        // any other key is rejected by the store.
        assert_eq!(props["Multi-select"]["relation"][0]["id"], json!("p-9"));
        assert!(props.get("Project").is_none());
    }

    #[test]
    fn test_same_fields_serialize_identically() {
        // Repeating an update with unchanged fields must send an identical body.
        let issue = open_issue(8, "Stable");
        let a = PageFields::from_issue(&issue, Some("p")).to_properties();
        let b = PageFields::from_issue(&issue, Some("p")).to_properties();
        assert_eq!(a, b);
    }
}
