use super::heading;
use crate::store::{FormState, FormStore};

pub fn set(store: &FormStore, text: &str) {
    store.set_jd_text(super::unescape_lines(text));
}

/// Appends one line, so a long description can be pasted line by line.
pub fn append_line(store: &FormStore, line: &str) {
    let mut text = store.snapshot().jd_text;
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(line);
    store.set_jd_text(text);
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Job Description");
    out.push_str(&format!(" {} chars", state.jd_text.chars().count()));
    if state.jd_text.is_empty() {
        out.push_str("\n  Paste the full job description here (`jd <text>`, `jd+ <line>`).");
        out.push_str("\n  Tip: include responsibilities AND requirements for best results.");
    } else {
        for line in state.jd_text.lines() {
            out.push_str(&format!("\n  | {line}"));
        }
    }
    out
}
