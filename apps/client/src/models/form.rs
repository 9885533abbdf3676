use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Generates an opaque identifier for a new experience or project record.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// "MM/YYYY", only checked by the input component.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// One bullet per line; split at submission time.
    pub bullets: String,
}

impl Experience {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            company: String::new(),
            role: String::new(),
            start_date: None,
            end_date: None,
            bullets: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub bullets: String,
}

impl Project {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            bullets: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BulletStyle {
    Concise,
    #[default]
    Balanced,
    Detailed,
}

impl BulletStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulletStyle::Concise => "concise",
            BulletStyle::Balanced => "balanced",
            BulletStyle::Detailed => "detailed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "concise" => Some(BulletStyle::Concise),
            "balanced" => Some(BulletStyle::Balanced),
            "detailed" => Some(BulletStyle::Detailed),
            _ => None,
        }
    }
}

/// A file picked by the user. Only the reference is held; the content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub path: PathBuf,
}

impl SelectedFile {
    /// Builds a selection whose declared media type comes from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = declared_media_type(&path).to_string();
        Self {
            name,
            media_type,
            path,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

fn declared_media_type(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => PDF_MEDIA_TYPE,
        "txt" | "md" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// A drop or drag-over interaction. Handlers must call `prevent_default`
/// or the surrounding shell treats the drop as navigation.
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub files: Vec<SelectedFile>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn with_files(files: Vec<SelectedFile>) -> Self {
        Self {
            files,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_declares_pdf() {
        let file = SelectedFile::from_path("/tmp/resume.PDF");
        assert_eq!(file.name, "resume.PDF");
        assert!(file.is_pdf());
    }

    #[test]
    fn test_text_extension_declares_text_plain() {
        let file = SelectedFile::from_path("notes.txt");
        assert_eq!(file.media_type, "text/plain");
        assert!(!file.is_pdf());
    }

    #[test]
    fn test_no_extension_is_octet_stream() {
        assert_eq!(
            SelectedFile::from_path("resume").media_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_bullet_style_parse() {
        assert_eq!(BulletStyle::parse(" Detailed "), Some(BulletStyle::Detailed));
        assert_eq!(BulletStyle::parse("verbose"), None);
        assert_eq!(BulletStyle::default(), BulletStyle::Balanced);
    }

    #[test]
    fn test_drag_event_prevent_default() {
        let mut event = DragEvent::default();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
