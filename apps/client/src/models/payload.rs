use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Experience,
    Project,
}

/// One experience or project, normalized for the tailor service.
/// The service echoes `id` back, so ids and ordering must survive the mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TailorItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub company: Option<String>,
    pub role: Option<String>,
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub bullets: Vec<String>,
}

/// Body of `POST /api/tailor`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TailorRequest {
    pub rewrite: bool,
    pub job_description: String,
    pub top_x: u32,
    pub skills: Vec<String>,
    pub items: Vec<TailorItem>,
}
