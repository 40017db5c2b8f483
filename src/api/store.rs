//! Purpose: Own the in-memory roster and its derived filtered view.
//! Exports: `RosterStore`, `RosterSnapshot`.
//! Role: Mediate all mutation requests to the endpoint client and reconcile state.
//! Invariants: The view-state mutex is never held across an await point.
//! Invariants: A continuation whose generation is stale discards its update.
//! Invariants: Operation outcomes surface as notices, never as returned errors.
use crate::api::endpoint::EndpointClient;
use crate::core::record::StudentRecord;
use crate::notice::Notice;
use std::collections::HashSet;
use std::sync::Mutex;

/// The finalized view state handed to the presentation layer.
#[derive(Clone, Debug)]
pub struct RosterSnapshot {
    pub records: Vec<StudentRecord>,
    pub filtered: Vec<StudentRecord>,
    pub search_term: String,
    pub loading: bool,
    pub removing: Vec<String>,
}

struct ViewState {
    generation: u64,
    records: Vec<StudentRecord>,
    filtered: Vec<StudentRecord>,
    search_term: String,
    loading: bool,
    removing: HashSet<String>,
    notices: Vec<Notice>,
}

impl ViewState {
    fn fresh(generation: u64) -> Self {
        Self {
            generation,
            records: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            loading: true,
            removing: HashSet::new(),
            notices: Vec::new(),
        }
    }

    fn rederive_filtered(&mut self) {
        self.filtered = filter_records(&self.records, &self.search_term);
    }
}

pub struct RosterStore {
    client: EndpointClient,
    state: Mutex<ViewState>,
}

impl RosterStore {
    pub fn new(client: EndpointClient) -> Self {
        Self {
            client,
            state: Mutex::new(ViewState::fresh(0)),
        }
    }

    pub fn client(&self) -> &EndpointClient {
        &self.client
    }

    /// Fetch the full collection and replace the local roster.
    ///
    /// On failure the record list is left untouched (empty on first load),
    /// the loading flag clears, and exactly one error notice is emitted.
    pub async fn load(&self) {
        let generation = {
            let mut state = self.lock_state();
            state.loading = true;
            state.generation
        };

        let result = self.client.list().await;

        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!("discarding stale load result");
            return;
        }
        state.loading = false;
        match result {
            Ok(records) => {
                state.records = records;
                state.rederive_filtered();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load roster");
                state.notices.push(Notice::error("failed to load roster"));
            }
        }
    }

    /// Store the term and re-derive the filtered view. Pure and synchronous;
    /// never re-issued against the remote.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.lock_state();
        state.search_term = term.into();
        state.rederive_filtered();
    }

    /// Delete one record remotely, then drop it from the local list.
    ///
    /// The id is marked in-flight for the duration of the call and cleared
    /// regardless of outcome. On failure local state is unchanged. Duplicate
    /// concurrent removals of one id are permitted; the outcome is idempotent.
    pub async fn remove(&self, id: &str) {
        let generation = {
            let mut state = self.lock_state();
            state.removing.insert(id.to_string());
            state.generation
        };

        let result = self.client.delete(id).await;

        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(record_id = id, "discarding stale remove result");
            return;
        }
        state.removing.remove(id);
        match result {
            Ok(()) => {
                state.records.retain(|record| record.id != id);
                state.rederive_filtered();
                state
                    .notices
                    .push(Notice::success("record removed").with_record_id(id));
            }
            Err(err) => {
                tracing::warn!(error = %err, record_id = id, "failed to remove record");
                state
                    .notices
                    .push(Notice::error("failed to remove record").with_record_id(id));
            }
        }
    }

    /// Return the state to the fresh-view condition and bump the generation,
    /// so any still in-flight continuation discards its update on resolution.
    /// Models the triggering view going away.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        let generation = state.generation + 1;
        *state = ViewState::fresh(generation);
    }

    /// Drain accumulated notices in emission order.
    pub fn take_notices(&self) -> Vec<Notice> {
        let mut state = self.lock_state();
        std::mem::take(&mut state.notices)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        let state = self.lock_state();
        let mut removing: Vec<String> = state.removing.iter().cloned().collect();
        removing.sort();
        RosterSnapshot {
            records: state.records.clone(),
            filtered: state.filtered.clone(),
            search_term: state.search_term.clone(),
            loading: state.loading,
            removing,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    pub fn is_removing(&self, id: &str) -> bool {
        self.lock_state().removing.contains(id)
    }

    pub fn record_count(&self) -> usize {
        self.lock_state().records.len()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ViewState> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

/// Subset of `records` matching `term` case-insensitively against name or
/// registration; the empty term passes the whole list through.
fn filter_records(records: &[StudentRecord], term: &str) -> Vec<StudentRecord> {
    records
        .iter()
        .filter(|record| record.matches(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_records;
    use crate::core::record::StudentRecord;

    fn roster() -> Vec<StudentRecord> {
        vec![
            StudentRecord {
                id: "1".to_string(),
                name: "Ana".to_string(),
                age: 20,
                registration: "A1".to_string(),
            },
            StudentRecord {
                id: "2".to_string(),
                name: "Bruno".to_string(),
                age: 30,
                registration: "B2".to_string(),
            },
        ]
    }

    #[test]
    fn empty_term_passes_everything_through() {
        let records = roster();
        assert_eq!(filter_records(&records, ""), records);
    }

    #[test]
    fn term_matches_name_case_insensitively() {
        let filtered = filter_records(&roster(), "an");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn term_matches_registration() {
        let filtered = filter_records(&roster(), "B2");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn filtered_is_always_a_subset() {
        let records = roster();
        for term in ["", "a", "A1", "zzz", "BRUNO"] {
            let filtered = filter_records(&records, term);
            assert!(filtered.iter().all(|record| records.contains(record)));
            assert!(filtered.iter().all(|record| record.matches(term)));
        }
    }
}
