use super::heading;
use crate::models::response::{RewrittenItem, TailoredResume};
use crate::store::{FormState, FormStore};

const PLACEHOLDER: &str = "Tailored output will appear here after `tailor`.";

/// How the stored response text is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseView {
    Empty,
    /// Valid JSON carrying `rewrittenBullets`.
    Tailored(Vec<RewrittenItem>),
    /// JSON of some other shape.
    Unrecognized,
    /// Not JSON at all; shown verbatim.
    Opaque(String),
}

impl ResponseView {
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return ResponseView::Empty;
        }
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(_) => return ResponseView::Opaque(text.to_string()),
        };
        match serde_json::from_value::<TailoredResume>(value) {
            Ok(resume) => ResponseView::Tailored(resume.rewritten_bullets),
            Err(_) => ResponseView::Unrecognized,
        }
    }
}

/// The response panel is editable.
pub fn edit(store: &FormStore, text: &str) {
    store.set_response_text(super::unescape_lines(text));
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Response");
    match ResponseView::parse(&state.response_text) {
        ResponseView::Tailored(items) => {
            for item in &items {
                out.push_str(&format!("\n  {}", item.header()));
                if let Some(range) = item.date_range() {
                    out.push_str(&format!("\n  {range}"));
                }
                for bullet in &item.bullets {
                    out.push_str(&format!("\n    - {bullet}"));
                }
            }
            if items.is_empty() {
                out.push_str("\n  (no items selected)");
            }
        }
        ResponseView::Opaque(text) => {
            for line in text.lines() {
                out.push_str(&format!("\n  {line}"));
            }
        }
        ResponseView::Empty | ResponseView::Unrecognized => {
            out.push_str(&format!("\n  {PLACEHOLDER}"));
            if !state.message.is_empty() {
                out.push_str(&format!("\n  {}", state.message));
            }
        }
    }
    out
}
