use uuid::Uuid;

use crate::error::{NotizError, Result};
use crate::model::{Note, NoteDraft, ShareLink};
use crate::store::{NoteStore, StorageBackend};

/// The access layer in front of [`NoteStore`].
///
/// Deliberately coarse: each operation collapses every underlying failure,
/// whatever its cause, into one fixed `RequestFailed` message. Callers get
/// a stable string per operation and learn nothing about the mechanism
/// behind it. Anything that needs precise errors talks to the store.
pub struct NotesApi<B: StorageBackend> {
    store: NoteStore<B>,
}

impl<B: StorageBackend> NotesApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self { store }
    }

    pub fn fetch_notes(&self) -> Result<Vec<Note>> {
        self.store.list().map_err(|_| failed("Failed to fetch notes"))
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<Note> {
        self.store
            .create(draft)
            .map_err(|_| failed("Failed to create note"))
    }

    pub fn edit_note(&mut self, id: Uuid, title: String, content: String) -> Result<Note> {
        self.store
            .update(id, title, content)
            .map_err(|_| failed("Failed to update note"))
    }

    pub fn delete_note(&mut self, id: Uuid) -> Result<()> {
        self.store
            .delete(id)
            .map_err(|_| failed("Failed to delete note"))
    }

    pub fn share_note(&mut self, id: Uuid) -> Result<ShareLink> {
        self.store
            .share(id)
            .map_err(|_| failed("Failed to generate share link"))
    }

    /// Fetches a note through the public gate by its id string. An id that
    /// does not parse, an unknown id and a private note all come back as
    /// the same failure.
    pub fn fetch_shared(&self, id: &str) -> Result<Note> {
        let id = Uuid::parse_str(id).map_err(|_| failed("Failed to fetch shared note"))?;
        self.store
            .get_shared(id)
            .map_err(|_| failed("Failed to fetch shared note"))
    }
}

fn failed(message: &str) -> NotizError {
    NotizError::RequestFailed(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{seeded_store, FlakyBackend};

    fn flaky_reads(n: u32) -> NotesApi<FlakyBackend> {
        let store = NoteStore::new(FlakyBackend::failing_reads(n), "http://localhost:5173");
        NotesApi::new(store)
    }

    #[test]
    fn test_fetch_notes_passes_through_on_success() {
        let api = NotesApi::new(seeded_store(&[("One", "a"), ("Two", "b")]));
        let notes = api.fetch_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "One");
    }

    #[test]
    fn test_fetch_notes_collapses_failures() {
        let api = flaky_reads(1);
        let err = api.fetch_notes().unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch notes");
    }

    #[test]
    fn test_create_note_collapses_write_failures() {
        let store = NoteStore::new(FlakyBackend::failing_writes(1), "http://localhost:5173");
        let mut api = NotesApi::new(store);
        let err = api.create_note(NoteDraft::new("T", "c")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to create note");
    }

    #[test]
    fn test_edit_note_collapses_not_found() {
        let mut api = NotesApi::new(seeded_store(&[]));
        let err = api
            .edit_note(Uuid::new_v4(), "t".to_string(), "c".to_string())
            .unwrap_err();
        // Even a missing id surfaces as the coarse update failure.
        assert_eq!(err.to_string(), "Failed to update note");
        assert!(matches!(err, NotizError::RequestFailed(_)));
    }

    #[test]
    fn test_delete_note_collapses_not_found() {
        let mut api = NotesApi::new(seeded_store(&[]));
        let err = api.delete_note(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete note");
    }

    #[test]
    fn test_share_note_collapses_not_found() {
        let mut api = NotesApi::new(seeded_store(&[]));
        let err = api.share_note(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate share link");
    }

    #[test]
    fn test_share_then_fetch_shared_round_trips() {
        let mut api = NotesApi::new(seeded_store(&[("Public", "hello")]));
        let notes = api.fetch_notes().unwrap();
        let id = notes[0].id;

        let link = api.share_note(id).unwrap();
        assert!(link.link.ends_with(&format!("/share/{id}")));

        let fetched = api.fetch_shared(&id.to_string()).unwrap();
        assert_eq!(fetched.id, id);
    }

    #[test]
    fn test_fetch_shared_failures_are_indistinguishable() {
        let api = NotesApi::new(seeded_store(&[("Private", "secret")]));
        let private_id = api.fetch_notes().unwrap()[0].id.to_string();

        let garbage = api.fetch_shared("not-a-uuid").unwrap_err();
        let unknown = api.fetch_shared(&Uuid::new_v4().to_string()).unwrap_err();
        let private = api.fetch_shared(&private_id).unwrap_err();

        for err in [garbage, unknown, private] {
            assert_eq!(err.to_string(), "Failed to fetch shared note");
        }
    }
}
