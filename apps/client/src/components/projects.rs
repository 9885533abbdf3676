use super::{heading, resolve_ref, unescape_lines, ComponentError};
use crate::store::{FormState, FormStore};

const FIELDS: &str = "name, bullets";

pub fn add(store: &FormStore) -> String {
    store.add_project()
}

pub fn delete(store: &FormStore, reference: &str) -> Result<(), ComponentError> {
    let state = store.snapshot();
    let id = resolve_ref(state.projects.iter().map(|p| p.id.as_str()), reference)?;
    store.delete_project(&id);
    Ok(())
}

pub fn edit(
    store: &FormStore,
    reference: &str,
    field: &str,
    value: &str,
) -> Result<(), ComponentError> {
    let state = store.snapshot();
    let id = resolve_ref(state.projects.iter().map(|p| p.id.as_str()), reference)?;
    let Some(mut record) = state.projects.into_iter().find(|p| p.id == id) else {
        return Err(ComponentError::UnknownEntry(reference.to_string()));
    };
    match field {
        "name" => record.name = value.to_string(),
        "bullets" => record.bullets = unescape_lines(value),
        other => {
            return Err(ComponentError::UnknownField {
                field: other.to_string(),
                expected: FIELDS,
            })
        }
    }
    store.update_project(&id, record);
    Ok(())
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Projects");
    if state.projects.is_empty() {
        out.push_str("\n  (none yet, `proj add`)");
        return out;
    }
    for (idx, project) in state.projects.iter().enumerate() {
        let name = if project.name.is_empty() {
            "Project Name"
        } else {
            project.name.as_str()
        };
        out.push_str(&format!("\n  {}. {name}  [{}]", idx + 1, project.id));
        for line in project.bullets.lines() {
            out.push_str(&format!("\n       - {line}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_render() {
        let store = FormStore::new();
        let id = add(&store);
        edit(&store, "1", "name", "Toy compiler").unwrap();
        edit(&store, "1", "bullets", "Lexer\\nParser").unwrap();

        let rendered = render(&store.snapshot());
        assert!(rendered.contains(&format!("1. Toy compiler  [{id}]")));
        assert!(rendered.contains("- Lexer"));
        assert!(rendered.contains("- Parser"));
    }

    #[test]
    fn test_rejects_experience_fields() {
        let store = FormStore::new();
        add(&store);
        assert!(edit(&store, "1", "company", "Acme").is_err());
    }
}
