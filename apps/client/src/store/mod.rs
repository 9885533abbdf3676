//! Form state store: the single owner of everything the user has entered.
//!
//! The store is an explicit object, constructed once per session (or per test) and
//! cloned into whatever needs it. Every mutation publishes a new revision on a
//! `watch` channel so the renderer can refresh dependent sections.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use crate::models::form::{BulletStyle, DragEvent, Experience, Project, SelectedFile};

pub mod messages;
pub mod options;
pub mod skills;

pub use skills::SkillSet;

pub const DEFAULT_TOP_K: u32 = 3;
pub const INVALID_FILE_MESSAGE: &str = "Please upload a PDF file.";

/// Snapshot of every user-visible field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub resume_file: Option<SelectedFile>,
    pub jd_text: String,
    pub skills: SkillSet,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub top_k: u32,
    pub rewrite: bool,
    pub include_projects: bool,
    pub bullet_style: BulletStyle,
    pub response_text: String,
    pub message: String,
    pub error: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            resume_file: None,
            jd_text: String::new(),
            skills: SkillSet::new(),
            experiences: Vec::new(),
            projects: Vec::new(),
            top_k: DEFAULT_TOP_K,
            rewrite: true,
            include_projects: true,
            bullet_style: BulletStyle::default(),
            response_text: String::new(),
            message: String::new(),
            error: String::new(),
        }
    }
}

impl FormState {
    pub fn top_k_options(&self) -> Vec<u32> {
        options::top_k_options(self.experiences.len() + self.projects.len())
    }
}

#[derive(Debug, Default)]
struct Inner {
    form: FormState,
    /// Bumped by every submit and every reset; results from older generations are dropped.
    generation: u64,
    /// Bumped whenever `message` is written so stale clear timers leave newer text alone.
    message_token: u64,
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    revision: watch::Sender<u64>,
}

#[derive(Debug, Clone)]
pub struct FormStore {
    shared: Arc<Shared>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                revision,
            }),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().form.clone()
    }

    /// Receiver that changes on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.shared.revision.borrow()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Mutations are plain assignments, so a poisoned lock still holds a whole form.
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let result = {
            let mut inner = self.lock();
            f(&mut inner)
        };
        self.shared.revision.send_modify(|rev| *rev += 1);
        result
    }

    // ── Raw setters ─────────────────────────────────────────────────────────

    pub fn set_skills(&self, skills: SkillSet) {
        debug!(count = skills.len(), "skills updated");
        self.mutate(|inner| inner.form.skills = skills);
    }

    pub fn set_jd_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|inner| inner.form.jd_text = text);
    }

    pub fn set_top_k(&self, top_k: u32) {
        self.mutate(|inner| inner.form.top_k = top_k);
    }

    pub fn set_rewrite(&self, rewrite: bool) {
        self.mutate(|inner| inner.form.rewrite = rewrite);
    }

    pub fn set_include_projects(&self, include: bool) {
        self.mutate(|inner| inner.form.include_projects = include);
    }

    pub fn set_bullet_style(&self, style: BulletStyle) {
        self.mutate(|inner| inner.form.bullet_style = style);
    }

    pub fn set_response_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|inner| inner.form.response_text = text);
    }

    pub fn set_error(&self, error: impl Into<String>) {
        let error = error.into();
        self.mutate(|inner| inner.form.error = error);
    }

    // ── Experiences ─────────────────────────────────────────────────────────

    /// Appends a blank experience and returns its id.
    pub fn add_experience(&self) -> String {
        let record = Experience::blank(self.fresh_id());
        let id = record.id.clone();
        let count = self.mutate(|inner| {
            inner.form.experiences.push(record);
            inner.form.experiences.len()
        });
        debug!(%id, count, "experience added");
        id
    }

    /// Replaces the experience with `id`. Unknown ids are ignored.
    pub fn update_experience(&self, id: &str, record: Experience) {
        let found = self.mutate(|inner| {
            match inner.form.experiences.iter_mut().find(|e| e.id == id) {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            }
        });
        if !found {
            debug!(%id, "update for unknown experience ignored");
        }
    }

    pub fn delete_experience(&self, id: &str) {
        let count = self.mutate(|inner| {
            inner.form.experiences.retain(|e| e.id != id);
            inner.form.experiences.len()
        });
        debug!(%id, count, "experience deleted");
    }

    // ── Projects ────────────────────────────────────────────────────────────

    pub fn add_project(&self) -> String {
        let record = Project::blank(self.fresh_id());
        let id = record.id.clone();
        let count = self.mutate(|inner| {
            inner.form.projects.push(record);
            inner.form.projects.len()
        });
        debug!(%id, count, "project added");
        id
    }

    pub fn update_project(&self, id: &str, record: Project) {
        let found = self.mutate(|inner| {
            match inner.form.projects.iter_mut().find(|p| p.id == id) {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            }
        });
        if !found {
            debug!(%id, "update for unknown project ignored");
        }
    }

    pub fn delete_project(&self, id: &str) {
        let count = self.mutate(|inner| {
            inner.form.projects.retain(|p| p.id != id);
            inner.form.projects.len()
        });
        debug!(%id, count, "project deleted");
    }

    /// UUID v4, re-drawn in the vanishingly unlikely case it is already taken.
    fn fresh_id(&self) -> String {
        let inner = self.lock();
        loop {
            let id = crate::models::form::new_record_id();
            let taken = inner.form.experiences.iter().any(|e| e.id == id)
                || inner.form.projects.iter().any(|p| p.id == id);
            if !taken {
                return id;
            }
        }
    }

    // ── File selection ──────────────────────────────────────────────────────

    /// Only the first file counts. A non-PDF sets the error and keeps the previous selection.
    pub fn on_files(&self, files: &[SelectedFile]) {
        let Some(file) = files.first() else {
            return;
        };
        if !file.is_pdf() {
            debug!(name = %file.name, media_type = %file.media_type, "rejected non-PDF file");
            self.set_error(INVALID_FILE_MESSAGE);
            return;
        }
        let file = file.clone();
        debug!(name = %file.name, "resume file selected");
        self.mutate(|inner| {
            inner.form.error.clear();
            inner.form.resume_file = Some(file);
        });
    }

    pub fn on_drop(&self, event: &mut DragEvent) {
        event.prevent_default();
        self.on_files(&event.files);
    }

    pub fn on_drag_over(&self, event: &mut DragEvent) {
        event.prevent_default();
    }

    // ── Reset ───────────────────────────────────────────────────────────────

    /// Restores every field to its default and orphans any in-flight submission.
    pub fn clear_all(&self) {
        self.mutate(|inner| {
            inner.form = FormState::default();
            inner.generation += 1;
            inner.message_token += 1;
        });
        debug!("form cleared");
    }

    // ── Submission bookkeeping ──────────────────────────────────────────────

    /// Starts a new submission generation and returns it with a snapshot of the form.
    pub(crate) fn begin_submission(&self) -> (u64, FormState) {
        let mut inner = self.lock();
        inner.generation += 1;
        (inner.generation, inner.form.clone())
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    /// Stores a response body unless a later submit or reset superseded `generation`.
    pub(crate) fn complete_submission(&self, generation: u64, response_text: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.mutate(|inner| {
            // Re-check under the same lock as the write.
            if inner.generation != generation {
                return false;
            }
            inner.form.response_text = response_text;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::from_path(name)
    }

    #[test]
    fn test_add_experience_ids_are_unique() {
        let store = FormStore::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(store.add_experience()));
        }
        assert_eq!(store.snapshot().experiences.len(), 10_000);
    }

    #[test]
    fn test_add_project_ids_are_unique() {
        let store = FormStore::new();
        let ids: HashSet<_> = (0..10_000).map(|_| store.add_project()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_add_experience_is_blank() {
        let store = FormStore::new();
        let id = store.add_experience();
        let exp = &store.snapshot().experiences[0];
        assert_eq!(exp, &Experience::blank(id));
    }

    #[test]
    fn test_update_unknown_experience_is_noop() {
        let store = FormStore::new();
        let id = store.add_experience();
        let before = store.snapshot().experiences;

        let mut other = Experience::blank("missing".into());
        other.company = "Acme".into();
        store.update_experience("missing", other);

        assert_eq!(store.snapshot().experiences, before);
        assert_eq!(store.snapshot().experiences[0].id, id);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let store = FormStore::new();
        let first = store.add_experience();
        let second = store.add_experience();

        let mut record = Experience::blank(second.clone());
        record.company = "Acme".into();
        record.start_date = Some("03/2020".into());
        store.update_experience(&second, record.clone());

        let exps = store.snapshot().experiences;
        assert_eq!(exps[0], Experience::blank(first));
        assert_eq!(exps[1], record);
    }

    #[test]
    fn test_delete_experience_twice_is_idempotent() {
        let store = FormStore::new();
        let a = store.add_experience();
        let b = store.add_experience();
        store.delete_experience(&a);
        let after_first = store.snapshot().experiences;
        store.delete_experience(&a);
        assert_eq!(store.snapshot().experiences, after_first);
        assert_eq!(after_first.len(), 1);
        assert_eq!(after_first[0].id, b);
    }

    #[test]
    fn test_project_update_and_delete() {
        let store = FormStore::new();
        let id = store.add_project();
        let mut record = Project::blank(id.clone());
        record.name = "Compiler".into();
        store.update_project(&id, record);
        assert_eq!(store.snapshot().projects[0].name, "Compiler");

        store.update_project("nope", Project::blank("nope".into()));
        assert_eq!(store.snapshot().projects.len(), 1);

        store.delete_project(&id);
        store.delete_project(&id);
        assert!(store.snapshot().projects.is_empty());
    }

    #[test]
    fn test_text_plain_rejected_and_previous_selection_kept() {
        let store = FormStore::new();
        store.on_files(&[pdf("resume.pdf")]);
        store.on_files(&[pdf("notes.txt")]);

        let state = store.snapshot();
        assert!(!state.error.is_empty());
        assert_eq!(state.resume_file.map(|f| f.name).as_deref(), Some("resume.pdf"));
    }

    #[test]
    fn test_text_plain_rejected_without_prior_selection() {
        let store = FormStore::new();
        store.on_files(&[pdf("notes.txt")]);
        let state = store.snapshot();
        assert_eq!(state.error, INVALID_FILE_MESSAGE);
        assert!(state.resume_file.is_none());
    }

    #[test]
    fn test_pdf_accepted_clears_error() {
        let store = FormStore::new();
        store.on_files(&[pdf("notes.txt")]);
        store.on_files(&[pdf("first.pdf")]);
        store.on_files(&[pdf("second.pdf")]);

        let state = store.snapshot();
        assert!(state.error.is_empty());
        assert_eq!(state.resume_file.map(|f| f.name).as_deref(), Some("second.pdf"));
    }

    #[test]
    fn test_only_first_file_counts() {
        let store = FormStore::new();
        store.on_files(&[pdf("notes.txt"), pdf("resume.pdf")]);
        assert!(store.snapshot().resume_file.is_none());
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let store = FormStore::new();
        let rev = store.revision();
        store.on_files(&[]);
        assert_eq!(store.revision(), rev);
        assert_eq!(store.snapshot(), FormState::default());
    }

    #[test]
    fn test_drop_prevents_default_and_selects() {
        let store = FormStore::new();
        let mut event = DragEvent::with_files(vec![pdf("cv.pdf")]);
        store.on_drop(&mut event);
        assert!(event.default_prevented());
        assert!(store.snapshot().resume_file.is_some());

        let mut over = DragEvent::default();
        store.on_drag_over(&mut over);
        assert!(over.default_prevented());
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let store = FormStore::new();
        store.on_files(&[pdf("cv.pdf")]);
        store.set_jd_text("Rust engineer");
        store.set_skills(["Rust"].into_iter().collect());
        store.add_experience();
        store.add_project();
        store.set_top_k(2);
        store.set_rewrite(false);
        store.set_include_projects(false);
        store.set_bullet_style(BulletStyle::Detailed);
        store.set_response_text("{}");
        store.set_error("boom");

        store.clear_all();

        let state = store.snapshot();
        assert_eq!(state, FormState::default());
        assert_eq!(state.top_k, 3);
        assert!(state.rewrite);
        assert!(state.include_projects);
        assert_eq!(state.bullet_style, BulletStyle::Balanced);
        assert!(state.resume_file.is_none());
        assert!(state.message.is_empty() && state.error.is_empty());
    }

    #[test]
    fn test_mutations_advance_revision() {
        let store = FormStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());
        store.set_jd_text("x");
        assert!(rx.has_changed().unwrap());
        let _ = rx.borrow_and_update();
        store.add_project();
        assert!(rx.has_changed().unwrap());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_top_k_options_follow_entry_count() {
        let store = FormStore::new();
        assert_eq!(store.snapshot().top_k_options(), vec![0]);

        for _ in 0..2 {
            store.add_experience();
        }
        for _ in 0..3 {
            store.add_project();
        }
        assert_eq!(store.snapshot().top_k_options(), vec![1, 2, 3, 4, 5]);

        let first = store.snapshot().projects[0].id.clone();
        store.delete_project(&first);
        assert_eq!(store.snapshot().top_k_options(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let store = FormStore::new();
        let (first, _) = store.begin_submission();
        let (second, _) = store.begin_submission();
        assert!(!store.complete_submission(first, "old".into()));
        assert!(store.complete_submission(second, "new".into()));
        assert_eq!(store.snapshot().response_text, "new");

        let (third, _) = store.begin_submission();
        store.clear_all();
        assert!(!store.complete_submission(third, "late".into()));
        assert!(store.snapshot().response_text.is_empty());
    }
}
