//! Navigation state and reconciliation of asynchronous listing results.
//!
//! `NavigationController` owns the current path. Issuing a navigation bumps a
//! monotonic request id and returns a `LoadRequest` for the caller to
//! dispatch; when the matching `ListEvent` comes back, `apply` checks it
//! against the navigation that is current *now* and drops it if a newer one
//! has been issued in the meantime. The table therefore always shows the
//! result of the most recently initiated navigation, even when responses
//! arrive out of order.

use crate::breadcrumb::{self, Crumb};
use crate::classify::{self, EntryClass};
use crate::listing::ListEvent;
use crate::logger;
use crate::model::DirectoryEntry;
use crate::path;

/// A listing request the UI layer still has to dispatch to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub request_id: u64,
    pub path: String,
}

pub struct TableRow {
    pub entry: DirectoryEntry,
    pub class: EntryClass,
}

/// Displayed entry rows. Rows are classified once on insert; classification
/// is pure, so insert time and render time are equivalent.
#[derive(Default)]
pub struct EntryTable {
    rows: Vec<TableRow>,
}

impl EntryTable {
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn add_rows(&mut self, entries: Vec<DirectoryEntry>) {
        self.rows.extend(entries.into_iter().map(|entry| TableRow {
            class: classify::classify(&entry),
            entry,
        }));
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct NavigationController {
    current_path: String,
    crumbs: Vec<Crumb>,
    table: EntryTable,
    latest_request: u64,
    loading: bool,
    error: Option<String>,
    status: String,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current_path: String::new(),
            crumbs: breadcrumb::trail(""),
            table: EntryTable::default(),
            latest_request: 0,
            loading: false,
            error: None,
            status: String::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Move to `raw_path` (any path expression; it is resolved first).
    ///
    /// The loading flag is raised before the table is cleared, and cleared
    /// rows are never resurrected; they are replaced only by the result of
    /// this (or a newer) navigation. Navigating to the already-current path
    /// is allowed and re-fetches in place.
    pub fn navigate(&mut self, raw_path: &str) -> LoadRequest {
        let normalized = path::resolve(raw_path);
        self.current_path = normalized.clone();
        self.crumbs = breadcrumb::trail(&normalized);
        self.loading = true;
        self.error = None;
        self.status.clear();
        self.table.clear();
        self.latest_request += 1;
        LoadRequest {
            request_id: self.latest_request,
            path: normalized,
        }
    }

    /// Navigate to the parent of the current path (clamped at the root).
    pub fn navigate_up(&mut self) -> LoadRequest {
        let up = format!("{}/..", self.current_path);
        self.navigate(&up)
    }

    /// Re-fetch the current path.
    pub fn refresh(&mut self) -> LoadRequest {
        let here = self.current_path.clone();
        self.navigate(&here)
    }

    /// Apply a completed listing event. Returns `false` when the event was
    /// stale (superseded by a newer navigation) and was discarded untouched.
    pub fn apply(&mut self, event: ListEvent) -> bool {
        match event {
            ListEvent::Listed {
                request_id,
                path,
                entries,
                skipped,
            } => {
                if !self.is_current(request_id, &path) {
                    return false;
                }
                self.loading = false;
                self.error = None;
                if !self.current_path.is_empty() {
                    self.table
                        .add_rows(vec![DirectoryEntry::parent_of(&self.current_path)]);
                }
                let count = entries.len();
                self.table.add_rows(entries);
                self.status = if skipped > 0 {
                    format!("{count} item(s), {skipped} skipped")
                } else {
                    format!("{count} item(s)")
                };
                true
            }
            ListEvent::Failed {
                request_id,
                path,
                message,
            } => {
                if !self.is_current(request_id, &path) {
                    return false;
                }
                self.loading = false;
                // The table stays cleared; stale rows must not reappear.
                self.table.clear();
                let label = if path.is_empty() {
                    "Root".to_string()
                } else {
                    path
                };
                self.error = Some(format!("Failed to load {label}: {message}"));
                true
            }
        }
    }

    /// `None` when the event belongs to the outstanding load, otherwise the
    /// reason it must be discarded.
    fn staleness(&self, request_id: u64, path: &str) -> Option<&'static str> {
        if self.loading && request_id == self.latest_request && path == self.current_path {
            return None;
        }
        Some(if request_id != self.latest_request {
            "superseded by a newer navigation"
        } else if !self.loading {
            "duplicate of an already applied result"
        } else {
            "path does not match the current navigation"
        })
    }

    fn is_current(&self, request_id: u64, path: &str) -> bool {
        match self.staleness(request_id, path) {
            None => true,
            Some(reason) => {
                logger::log_line(
                    logger::APP_LOG,
                    &format!("Discarding listing for {path:?} (request {request_id}): {reason}"),
                );
                false
            }
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(name: &str, path: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: path.to_string(),
            size: 0,
            modified: String::new(),
            is_directory: true,
        }
    }

    fn file(name: &str, path: &str, size: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: path.to_string(),
            size,
            modified: String::new(),
            is_directory: false,
        }
    }

    fn listed(request: &LoadRequest, entries: Vec<DirectoryEntry>) -> ListEvent {
        ListEvent::Listed {
            request_id: request.request_id,
            path: request.path.clone(),
            entries,
            skipped: 0,
        }
    }

    #[test]
    fn root_listing_has_no_parent_row() {
        let mut nav = NavigationController::new();
        let request = nav.navigate("");
        assert_eq!(request.path, "");
        assert!(nav.is_loading());

        assert!(nav.apply(listed(&request, vec![dir("runs", "runs")])));
        assert!(!nav.is_loading());
        assert_eq!(nav.table().rows().len(), 1);
        assert_eq!(nav.table().rows()[0].entry.name, "runs");
        assert_eq!(nav.status(), "1 item(s)");
    }

    #[test]
    fn nested_listing_gets_synthetic_parent_first() {
        let mut nav = NavigationController::new();
        let request = nav.navigate("a/b");

        assert!(nav.apply(listed(&request, vec![file("out.txt", "a/b/out.txt", 10)])));
        let rows = nav.table().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entry.name, "..");
        assert_eq!(rows[0].entry.path, "a");
        assert!(rows[0].entry.is_directory);
        assert_eq!(rows[1].entry.name, "out.txt");
    }

    #[test]
    fn navigate_normalizes_its_input() {
        let mut nav = NavigationController::new();
        let request = nav.navigate("/a//b/./");
        assert_eq!(request.path, "a/b");
        assert_eq!(nav.current_path(), "a/b");
        assert_eq!(nav.crumbs().len(), 3);
        assert_eq!(nav.crumbs()[2].target, "a/b");
    }

    #[test]
    fn navigate_up_clamps_at_root() {
        let mut nav = NavigationController::new();
        let _ = nav.navigate("a");
        assert_eq!(nav.navigate_up().path, "");
        assert_eq!(nav.navigate_up().path, "");
        assert_eq!(nav.current_path(), "");
    }

    #[test]
    fn overlapping_loads_keep_only_the_newest_result() {
        let mut nav = NavigationController::new();
        let first = nav.navigate("x");
        let second = nav.navigate("y");

        // The response for "x" arrives after "y" was initiated: discarded.
        assert!(!nav.apply(listed(&first, vec![dir("from-x", "x/from-x")])));
        assert!(nav.table().is_empty());
        assert!(nav.is_loading());
        assert_eq!(nav.current_path(), "y");

        // The response for "y" lands normally.
        assert!(nav.apply(listed(&second, vec![dir("from-y", "y/from-y")])));
        assert!(!nav.is_loading());
        assert_eq!(nav.table().rows()[1].entry.name, "from-y");
    }

    #[test]
    fn stale_failure_is_also_discarded() {
        let mut nav = NavigationController::new();
        let first = nav.navigate("x");
        let second = nav.navigate("y");

        assert!(!nav.apply(ListEvent::Failed {
            request_id: first.request_id,
            path: first.path,
            message: "boom".to_string(),
        }));
        assert!(nav.error().is_none());
        assert!(nav.is_loading());

        assert!(nav.apply(listed(&second, vec![])));
        assert!(!nav.is_loading());
    }

    #[test]
    fn failure_leaves_a_cleared_table_and_navigable_state() {
        let mut nav = NavigationController::new();
        let ok = nav.navigate("a");
        assert!(nav.apply(listed(&ok, vec![dir("b", "a/b")])));
        assert!(!nav.table().is_empty());

        let failed = nav.navigate("a/b");
        assert!(nav.apply(ListEvent::Failed {
            request_id: failed.request_id,
            path: failed.path,
            message: "503".to_string(),
        }));
        assert!(!nav.is_loading());
        assert!(nav.table().is_empty());
        assert!(nav.error().unwrap().contains("a/b"));
        // Breadcrumbs and current path stay valid for recovery.
        assert_eq!(nav.current_path(), "a/b");
        assert_eq!(nav.crumbs().len(), 3);
    }

    #[test]
    fn refresh_reissues_the_current_path() {
        let mut nav = NavigationController::new();
        let first = nav.navigate("a");
        let second = nav.refresh();
        assert_eq!(second.path, "a");
        assert!(second.request_id > first.request_id);
        // The original request is now stale.
        assert!(!nav.apply(listed(&first, vec![])));
        assert!(nav.apply(listed(&second, vec![])));
    }

    #[test]
    fn loading_flag_drops_exactly_once_per_navigation() {
        let mut nav = NavigationController::new();
        let request = nav.navigate("a");
        assert!(nav.is_loading());
        assert!(nav.apply(listed(&request, vec![])));
        assert!(!nav.is_loading());

        // A duplicate (now stale) completion does not flip anything back.
        assert!(!nav.apply(listed(&request, vec![dir("ghost", "a/ghost")])));
        assert!(!nav.is_loading());
        assert_eq!(nav.table().rows().len(), 1); // just the ".." row
    }

    #[test]
    fn discard_reasons_tell_superseded_and_duplicate_apart() {
        let mut nav = NavigationController::new();
        let first = nav.navigate("x");
        let second = nav.navigate("y");

        assert_eq!(
            nav.staleness(first.request_id, &first.path),
            Some("superseded by a newer navigation")
        );
        assert_eq!(nav.staleness(second.request_id, &second.path), None);

        assert!(nav.apply(listed(&second, vec![])));
        assert_eq!(
            nav.staleness(second.request_id, &second.path),
            Some("duplicate of an already applied result")
        );
    }
}
