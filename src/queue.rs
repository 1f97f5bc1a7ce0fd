//! Ordered queue of server-confirmed filenames.
//!
//! The queue is the single source of truth for what can be processed:
//! a name enters it only after a successful upload response echoed it
//! back. Insertion order is display order, and duplicate names may
//! coexist, so each entry carries a stable id that the UI removes by.

/// One staged file, identified by the name the server echoed back.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedEntry {
    /// Queue-issued id, unique for the lifetime of the queue
    pub id: u64,
    /// Server-confirmed filename
    pub name: String,
}

/// Ordered, possibly-duplicate-containing list of staged filenames.
///
/// Owned state held in a signal by the app shell; components mutate it
/// through `WriteSignal::update`. Created empty at page load, discarded
/// with the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileQueue {
    entries: Vec<StagedEntry>,
    next_id: u64,
}

impl FileQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `names` to the end of the queue, issuing a fresh id per
    /// entry. No deduplication.
    pub fn append(&mut self, names: impl IntoIterator<Item = String>) {
        for name in names {
            let id = self.next_id;
            self.next_id += 1;
            self.entries.push(StagedEntry { id, name });
        }
    }

    /// Removes **every** entry whose name equals `name`, not just the
    /// first match.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name != name);
    }

    /// Removes the single entry with the given id, if present.
    pub fn remove_entry(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// The staged entries, in display order.
    pub fn entries(&self) -> &[StagedEntry] {
        &self.entries
    }

    /// The staged names, in display order. This is the process payload.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(names: &[&str]) -> FileQueue {
        let mut queue = FileQueue::new();
        queue.append(names.iter().map(|name| name.to_string()));
        queue
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let mut queue = queue_of(&["a.csv", "b.csv"]);
        queue.append(["a.csv".to_string()]);
        assert_eq!(queue.names(), ["a.csv", "b.csv", "a.csv"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn append_concatenates_after_existing_entries() {
        let mut queue = queue_of(&["old.csv"]);
        queue.append(["a.csv".to_string(), "b.csv".to_string()]);
        assert_eq!(queue.names(), ["old.csv", "a.csv", "b.csv"]);
    }

    #[test]
    fn remove_drops_every_matching_name() {
        let mut queue = queue_of(&["a.csv", "b.csv", "a.csv"]);
        queue.remove("a.csv");
        assert_eq!(queue.names(), ["b.csv"]);
    }

    #[test]
    fn remove_entry_drops_exactly_one_duplicate() {
        let mut queue = queue_of(&["a.csv", "b.csv", "a.csv"]);
        let first_id = queue.entries()[0].id;
        queue.remove_entry(first_id);
        assert_eq!(queue.names(), ["b.csv", "a.csv"]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut queue = queue_of(&["a.csv"]);
        let first_id = queue.entries()[0].id;
        queue.remove("a.csv");
        queue.append(["a.csv".to_string()]);
        assert_ne!(queue.entries()[0].id, first_id);
    }

    // The process trigger is visible iff the queue is non-empty.
    #[test]
    fn emptiness_tracks_mutations() {
        let mut queue = FileQueue::new();
        assert!(queue.is_empty());
        queue.append(["a.csv".to_string()]);
        assert!(!queue.is_empty());
        queue.remove("a.csv");
        assert!(queue.is_empty());
    }
}
