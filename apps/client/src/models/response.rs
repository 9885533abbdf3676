use serde::{Deserialize, Serialize};

/// Loosely typed view of a tailor response. Everything except `bullets` is optional
/// because the service's output is not validated before it is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TailoredResume {
    #[serde(rename = "rewrittenBullets")]
    pub rewritten_bullets: Vec<RewrittenItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewrittenItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl RewrittenItem {
    /// "Role at Company" for experiences, the project name otherwise.
    pub fn header(&self) -> String {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        match (non_empty(&self.role), non_empty(&self.company)) {
            (Some(role), Some(company)) => format!("{role} at {company}"),
            (Some(role), None) => role,
            (None, Some(company)) => company,
            (None, None) => non_empty(&self.name).unwrap_or_else(|| self.id.clone()),
        }
    }

    /// "start - end"; a missing end on a dated entry reads as "Present".
    pub fn date_range(&self) -> Option<String> {
        let start = self.start.as_deref().filter(|s| !s.trim().is_empty());
        let end = self.end.as_deref().filter(|s| !s.trim().is_empty());
        match (start, end) {
            (Some(s), Some(e)) => Some(format!("{s} - {e}")),
            (Some(s), None) => Some(format!("{s} - Present")),
            (None, Some(e)) => Some(e.to_string()),
            (None, None) => None,
        }
    }
}
