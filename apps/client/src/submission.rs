//! Submission adapter: turns a form snapshot into a tailor request, sends it, and
//! writes the outcome back into the store.
//!
//! The mapping is pure and order-preserving. The backend re-associates results by
//! echoing ids back, so experiences come first, then projects, each in form order.

use tracing::{debug, error, info};

use crate::models::form::{Experience, Project};
use crate::models::payload::{ItemType, TailorItem, TailorRequest};
use crate::store::messages::{TAILOR_FAILED, TAILOR_MESSAGE_TTL};
use crate::store::{FormState, FormStore};
use crate::tailor_client::{pretty_body, TailorClient};

/// What happened to one `handle_tailor` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Response stored as the current response text.
    Applied,
    /// Request failed; the failure banner was shown and the response text left alone.
    Failed,
    /// A later submit or a reset happened first; the result was dropped.
    Superseded,
}

/// Splits a newline-delimited bullet field into trimmed, non-empty lines.
pub fn split_bullets(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn optional_date(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

pub fn experience_item(exp: &Experience) -> TailorItem {
    TailorItem {
        id: exp.id.clone(),
        item_type: ItemType::Experience,
        company: Some(exp.company.clone()),
        role: Some(exp.role.clone()),
        name: None,
        start: optional_date(&exp.start_date),
        end: optional_date(&exp.end_date),
        bullets: split_bullets(&exp.bullets),
    }
}

pub fn project_item(project: &Project) -> TailorItem {
    TailorItem {
        id: project.id.clone(),
        item_type: ItemType::Project,
        company: None,
        role: None,
        name: Some(project.name.clone()),
        start: None,
        end: None,
        bullets: split_bullets(&project.bullets),
    }
}

/// Experience items followed by project items, each in their original order.
pub fn build_items(experiences: &[Experience], projects: &[Project]) -> Vec<TailorItem> {
    experiences
        .iter()
        .map(experience_item)
        .chain(projects.iter().map(project_item))
        .collect()
}

pub fn build_payload(form: &FormState) -> TailorRequest {
    TailorRequest {
        rewrite: form.rewrite,
        job_description: form.jd_text.clone(),
        top_x: form.top_k,
        skills: form.skills.to_vec(),
        items: build_items(&form.experiences, &form.projects),
    }
}

impl FormStore {
    /// Submits the current form. Only the most recently started submission may
    /// write its result; anything older, or anything started before a reset, is dropped.
    pub async fn handle_tailor(&self, client: &TailorClient) -> SubmitOutcome {
        let (generation, form) = self.begin_submission();
        let payload = build_payload(&form);
        info!(
            generation,
            items = payload.items.len(),
            skills = payload.skills.len(),
            top_x = payload.top_x,
            "submitting tailor request"
        );

        match client.tailor(&payload).await {
            Ok(body) => {
                if self.complete_submission(generation, pretty_body(&body)) {
                    info!(generation, "tailor response stored");
                    SubmitOutcome::Applied
                } else {
                    debug!(generation, "discarding superseded tailor response");
                    SubmitOutcome::Superseded
                }
            }
            Err(e) => {
                error!(generation, kind = e.kind(), "Tailor request failed: {e}");
                if self.flash_for_submission(generation, TAILOR_FAILED, TAILOR_MESSAGE_TTL) {
                    SubmitOutcome::Failed
                } else {
                    SubmitOutcome::Superseded
                }
            }
        }
    }
}
