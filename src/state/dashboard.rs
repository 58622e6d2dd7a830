use std::collections::HashSet;

use crate::models::resume::Resume;

/// Owns the two resume collections: `all` is the authoritative set from
/// the last full fetch, `displayed` is the current view. Add and delete
/// apply to both in one transition so stats stay correct under any filter;
/// filter results only ever replace `displayed`.
///
/// Filter submissions take a generation token. A response carrying a stale
/// token is discarded, so the view always reflects the latest submission
/// even when responses arrive out of order.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    all: Vec<Resume>,
    displayed: Vec<Resume>,
    filter_generation: u64,
}

impl DashboardStore {
    pub fn all(&self) -> &[Resume] {
        &self.all
    }

    pub fn displayed(&self) -> &[Resume] {
        &self.displayed
    }

    /// Initial (or re-) load: both collections become the fetched set. Any
    /// in-flight filter response is invalidated.
    pub fn load(&mut self, resumes: Vec<Resume>) {
        self.filter_generation += 1;
        self.displayed = resumes.clone();
        self.all = resumes;
    }

    /// Register a filter submission and return its generation token.
    pub fn begin_filter(&mut self) -> u64 {
        self.filter_generation += 1;
        self.filter_generation
    }

    /// Apply a filter result. Returns false (and leaves the view alone)
    /// when the token is stale, i.e. a newer submission or a clear
    /// superseded this one.
    pub fn apply_filter(&mut self, generation: u64, resumes: Vec<Resume>) -> bool {
        if generation != self.filter_generation {
            tracing::debug!("discarding stale filter response (generation {generation})");
            return false;
        }
        self.displayed = resumes;
        true
    }

    /// Restore the full view from the authoritative set, no network round
    /// trip. In-flight filter responses are invalidated.
    pub fn reset_view(&mut self) {
        self.filter_generation += 1;
        self.displayed = self.all.clone();
    }

    /// Prepend a freshly created record to both collections.
    pub fn insert(&mut self, resume: Resume) {
        self.all.retain(|existing| existing.id != resume.id);
        self.displayed.retain(|existing| existing.id != resume.id);
        self.all.insert(0, resume.clone());
        self.displayed.insert(0, resume);
    }

    /// Remove a record from both collections by id.
    pub fn remove(&mut self, id: i64) {
        self.all.retain(|resume| resume.id != id);
        self.displayed.retain(|resume| resume.id != id);
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }

    pub fn distinct_cities(&self) -> usize {
        self.all
            .iter()
            .map(|resume| resume.city.trim())
            .filter(|city| !city.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn distinct_skills(&self) -> usize {
        self.all
            .iter()
            .flat_map(|resume| resume.skills.iter())
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }
}
