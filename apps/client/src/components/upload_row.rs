use std::path::Path;

use super::heading;
use crate::models::form::{DragEvent, SelectedFile};
use crate::store::{FormState, FormStore};

/// File picker: the selection goes straight through the store's file check.
pub fn pick(store: &FormStore, path: &Path) {
    store.on_files(&[SelectedFile::from_path(path)]);
}

/// Drag-and-drop: hover, then drop.
pub fn drop_file(store: &FormStore, path: &Path) {
    let mut over = DragEvent::default();
    store.on_drag_over(&mut over);
    let mut event = DragEvent::with_files(vec![SelectedFile::from_path(path)]);
    store.on_drop(&mut event);
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Resume");
    match &state.resume_file {
        Some(file) => {
            out.push_str(&format!("\n  {} ({})", file.name, file.path.display()));
        }
        None => out.push_str("\n  No resume selected. `upload <path>` or `drop <path>` a PDF."),
    }
    if !state.error.is_empty() {
        out.push_str(&format!("\n  ! {}", state.error));
    }
    out
}
