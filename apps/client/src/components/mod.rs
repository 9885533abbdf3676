//! Presentational components. Each section renders itself from a store snapshot and
//! turns user input into store calls; none of them keeps state of its own.

use thiserror::Error;

use crate::store::FormState;

pub mod action_buttons;
pub mod experiences;
pub mod filters_grid;
pub mod jd_input;
pub mod projects;
pub mod response_view;
pub mod skills;
pub mod upload_row;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("No entry matches '{0}'")]
    UnknownEntry(String),

    #[error("Unknown field '{field}' (expected one of: {expected})")]
    UnknownField {
        field: String,
        expected: &'static str,
    },

    #[error("{value} is not an available option (choose from {options:?})")]
    OutOfRange { value: u32, options: Vec<u32> },
}

/// Sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Upload,
    Skills,
    Experiences,
    Projects,
    Filters,
    JobDescription,
    Banners,
    Response,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Upload,
        Section::Skills,
        Section::Experiences,
        Section::Projects,
        Section::Filters,
        Section::JobDescription,
        Section::Banners,
        Section::Response,
    ];

    pub fn render(self, state: &FormState) -> String {
        match self {
            Section::Upload => upload_row::render(state),
            Section::Skills => skills::render(state),
            Section::Experiences => experiences::render(state),
            Section::Projects => projects::render(state),
            Section::Filters => filters_grid::render(state),
            Section::JobDescription => jd_input::render(state),
            Section::Banners => action_buttons::render(state),
            Section::Response => response_view::render(state),
        }
    }
}

/// Remembers what each section last looked like so only changed sections are redrawn.
#[derive(Debug)]
pub struct View {
    last: Vec<Option<String>>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            last: vec![None; Section::ALL.len()],
        }
    }

    /// Sections whose output differs from the previous call.
    pub fn refresh(&mut self, state: &FormState) -> Vec<String> {
        let mut changed = Vec::new();
        for (slot, section) in self.last.iter_mut().zip(Section::ALL) {
            let rendered = section.render(state);
            if slot.as_deref() != Some(rendered.as_str()) {
                changed.push(rendered.clone());
                *slot = Some(rendered);
            }
        }
        changed
    }

    /// Every section, regardless of what changed.
    pub fn full(&mut self, state: &FormState) -> Vec<String> {
        self.last = vec![None; Section::ALL.len()];
        self.refresh(state)
    }
}

/// Resolves a user reference, either a full id or a 1-based position, to an id.
pub(crate) fn resolve_ref<'a>(
    ids: impl Iterator<Item = &'a str>,
    reference: &str,
) -> Result<String, ComponentError> {
    let ids: Vec<&str> = ids.collect();
    let reference = reference.trim();
    if let Some(id) = ids.iter().find(|id| **id == reference) {
        return Ok((*id).to_string());
    }
    reference
        .parse::<usize>()
        .ok()
        .and_then(|pos| pos.checked_sub(1))
        .and_then(|idx| ids.get(idx))
        .map(|id| (*id).to_string())
        .ok_or_else(|| ComponentError::UnknownEntry(reference.to_string()))
}

/// Decodes the `\n` escape used to type multi-line values on one line.
pub(crate) fn unescape_lines(value: &str) -> String {
    value.replace("\\n", "\n")
}

pub(crate) fn heading(title: &str) -> String {
    format!("== {title} ==")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FormStore;

    #[test]
    fn test_resolve_by_position_and_id() {
        let ids = ["aaa", "bbb"];
        assert_eq!(resolve_ref(ids.iter().copied(), "2").unwrap(), "bbb");
        assert_eq!(resolve_ref(ids.iter().copied(), "aaa").unwrap(), "aaa");
        assert_eq!(
            resolve_ref(ids.iter().copied(), "3"),
            Err(ComponentError::UnknownEntry("3".into()))
        );
        assert!(resolve_ref(ids.iter().copied(), "0").is_err());
    }

    #[test]
    fn test_view_redraws_only_changed_sections() {
        let store = FormStore::new();
        let mut view = View::new();
        assert_eq!(view.refresh(&store.snapshot()).len(), Section::ALL.len());
        assert!(view.refresh(&store.snapshot()).is_empty());

        store.set_jd_text("Looking for a Rust engineer");
        let changed = view.refresh(&store.snapshot());
        assert_eq!(changed.len(), 1);
        assert!(changed[0].contains("Rust engineer"));
    }

    #[test]
    fn test_default_view_draws_every_section() {
        let store = FormStore::new();
        let mut view = View::default();
        assert_eq!(view.refresh(&store.snapshot()).len(), Section::ALL.len());
    }

    #[test]
    fn test_adding_entry_redraws_list_and_filters() {
        let store = FormStore::new();
        let mut view = View::new();
        view.refresh(&store.snapshot());

        store.add_project();
        // Project list and Top-K range both depend on the project count.
        assert_eq!(view.refresh(&store.snapshot()).len(), 2);
    }

    #[test]
    fn test_unescape_lines() {
        assert_eq!(unescape_lines("a\\nb"), "a\nb");
    }
}
