use super::{heading, ComponentError};
use crate::models::form::BulletStyle;
use crate::store::{FormState, FormStore};

/// Accepts only values the Top-K selector currently offers.
pub fn select_top_k(store: &FormStore, value: u32) -> Result<(), ComponentError> {
    let options = store.snapshot().top_k_options();
    if !options.contains(&value) {
        return Err(ComponentError::OutOfRange { value, options });
    }
    store.set_top_k(value);
    Ok(())
}

pub fn set_rewrite(store: &FormStore, rewrite: bool) {
    store.set_rewrite(rewrite);
}

pub fn set_include_projects(store: &FormStore, include: bool) {
    store.set_include_projects(include);
}

pub fn set_bullet_style(store: &FormStore, style: BulletStyle) {
    store.set_bullet_style(style);
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn render(state: &FormState) -> String {
    let options: Vec<String> = state
        .top_k_options()
        .iter()
        .map(|n| {
            if *n == state.top_k {
                format!("({n})")
            } else {
                n.to_string()
            }
        })
        .collect();
    let mut out = heading("Options");
    out.push_str(&format!("\n  Top X items: {}", state.top_k));
    out.push_str(&format!("  [{}]", options.join(" ")));
    out.push_str(&format!("\n  {} Rewrite bullets", checkbox(state.rewrite)));
    out.push_str(&format!(
        "\n  {} Include projects",
        checkbox(state.include_projects)
    ));
    out.push_str(&format!(
        "\n  Bullet style: {}",
        state.bullet_style.as_str()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_must_be_in_range() {
        let store = FormStore::new();
        assert_eq!(
            select_top_k(&store, 1),
            Err(ComponentError::OutOfRange {
                value: 1,
                options: vec![0]
            })
        );
        select_top_k(&store, 0).unwrap();

        store.add_experience();
        store.add_experience();
        store.add_project();
        select_top_k(&store, 3).unwrap();
        assert!(select_top_k(&store, 4).is_err());
        assert_eq!(store.snapshot().top_k, 3);
    }

    #[test]
    fn test_render_marks_selection() {
        let store = FormStore::new();
        store.add_project();
        store.add_project();
        select_top_k(&store, 2).unwrap();
        set_rewrite(&store, false);
        set_bullet_style(&store, BulletStyle::Concise);

        let rendered = render(&store.snapshot());
        assert!(rendered.contains("[1 (2)]"));
        assert!(rendered.contains("[ ] Rewrite bullets"));
        assert!(rendered.contains("[x] Include projects"));
        assert!(rendered.contains("Bullet style: concise"));
    }
}
