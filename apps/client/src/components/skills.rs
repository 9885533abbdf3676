use super::heading;
use crate::store::{FormState, FormStore};

/// Adds a trimmed skill. Blank input and exact duplicates change nothing.
pub fn add_skill(store: &FormStore, input: &str) -> bool {
    let skill = input.trim();
    if skill.is_empty() {
        return false;
    }
    let mut skills = store.snapshot().skills;
    if !skills.insert(skill) {
        return false;
    }
    store.set_skills(skills);
    true
}

pub fn remove_skill(store: &FormStore, skill: &str) -> bool {
    let mut skills = store.snapshot().skills;
    if !skills.remove(skill.trim()) {
        return false;
    }
    store.set_skills(skills);
    true
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Skills");
    if state.skills.is_empty() {
        out.push_str("\n  (type `skill add <name>`)");
    } else {
        let chips: Vec<String> = state.skills.iter().map(|s| format!("[{s}]")).collect();
        out.push_str("\n  ");
        out.push_str(&chips.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedups() {
        let store = FormStore::new();
        assert!(add_skill(&store, "  Rust "));
        assert!(!add_skill(&store, "Rust"));
        assert!(!add_skill(&store, "   "));
        assert!(add_skill(&store, "rust"));
        assert_eq!(store.snapshot().skills.to_vec(), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_duplicate_add_does_not_mutate() {
        let store = FormStore::new();
        add_skill(&store, "Go");
        let rev = store.revision();
        add_skill(&store, "Go");
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_remove() {
        let store = FormStore::new();
        add_skill(&store, "Go");
        add_skill(&store, "SQL");
        assert!(remove_skill(&store, "Go"));
        assert!(!remove_skill(&store, "Go"));
        assert_eq!(render(&store.snapshot()), "== Skills ==\n  [SQL]");
    }
}
