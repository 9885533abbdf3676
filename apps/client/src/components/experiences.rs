use chrono::{Datelike, NaiveDate};

use super::{heading, resolve_ref, unescape_lines, ComponentError};
use crate::store::{FormState, FormStore};

const FIELDS: &str = "company, role, start, end, bullets";

/// True for "MM/YYYY" with a month of 01-12 and a year in 1900-2099.
/// Used only to flag input; the record keeps whatever was typed.
pub fn is_month_year(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[2] != b'/' {
        return false;
    }
    let Ok(date) = NaiveDate::parse_from_str(&format!("01/{value}"), "%d/%m/%Y") else {
        return false;
    };
    (1900..=2099).contains(&date.year())
}

pub fn add(store: &FormStore) -> String {
    store.add_experience()
}

pub fn delete(store: &FormStore, reference: &str) -> Result<(), ComponentError> {
    let state = store.snapshot();
    let id = resolve_ref(state.experiences.iter().map(|e| e.id.as_str()), reference)?;
    store.delete_experience(&id);
    Ok(())
}

/// Edits one field by sending the full updated record back to the store.
pub fn edit(
    store: &FormStore,
    reference: &str,
    field: &str,
    value: &str,
) -> Result<(), ComponentError> {
    let state = store.snapshot();
    let id = resolve_ref(state.experiences.iter().map(|e| e.id.as_str()), reference)?;
    let Some(mut record) = state.experiences.into_iter().find(|e| e.id == id) else {
        return Err(ComponentError::UnknownEntry(reference.to_string()));
    };

    let optional = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_string());
    match field {
        "company" => record.company = value.to_string(),
        "role" => record.role = value.to_string(),
        "start" => record.start_date = optional(value),
        "end" => record.end_date = optional(value),
        "bullets" => record.bullets = unescape_lines(value),
        other => {
            return Err(ComponentError::UnknownField {
                field: other.to_string(),
                expected: FIELDS,
            })
        }
    }
    store.update_experience(&id, record);
    Ok(())
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn date_cell(value: &Option<String>) -> String {
    match value.as_deref() {
        None => "MM/YYYY".to_string(),
        Some(v) if is_month_year(v) => v.to_string(),
        Some(v) => format!("{v} (expected MM/YYYY)"),
    }
}

pub fn render(state: &FormState) -> String {
    let mut out = heading("Experiences");
    if state.experiences.is_empty() {
        out.push_str("\n  (none yet, `exp add`)");
        return out;
    }
    for (idx, exp) in state.experiences.iter().enumerate() {
        out.push_str(&format!(
            "\n  {}. {} | {} | {} to {}  [{}]",
            idx + 1,
            or_placeholder(&exp.company, "Company Name"),
            or_placeholder(&exp.role, "Role/Title"),
            date_cell(&exp.start_date),
            date_cell(&exp.end_date),
            exp.id
        ));
        for line in exp.bullets.lines() {
            out.push_str(&format!("\n       - {line}"));
        }
    }
    out
}
