pub mod fs;
pub mod memory;

use uuid::Uuid;

use crate::error::{NotizError, Result};
use crate::model::{share_link, Note, NoteDraft, ShareLink};

/// Key the note shelf is stored under.
pub const NOTES_KEY: &str = "notes";

/// Raw string keyed storage. The shelf is one JSON document under
/// [`NOTES_KEY`]; backends move opaque strings and nothing else.
pub trait StorageBackend {
    /// Read the value for `key`. Returns Ok(None) when the key has never
    /// been written; Err is reserved for real I/O failures.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for `key`. Must replace the previous value whole.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The persistence authority. Every read and write of the shelf goes
/// through here, as do the per-note rules: id assignment on create, the
/// edit surface (title and content only), and the one-way shared flag.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    share_base_url: String,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn new(backend: B, share_base_url: impl Into<String>) -> Self {
        Self {
            backend,
            share_base_url: share_base_url.into(),
        }
    }

    /// The full shelf, oldest note first. A shelf that was never written
    /// is empty, not an error.
    pub fn list(&self) -> Result<Vec<Note>> {
        match self.backend.read(NOTES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes)?;
        self.backend.write(NOTES_KEY, &raw)
    }

    /// Appends a note to the shelf. Draft id and timestamp are honored
    /// when present so existing notes can be replayed; otherwise the
    /// store assigns them.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let mut notes = self.list()?;
        let mut note = Note::new(draft.title, draft.content);
        if let Some(id) = draft.id {
            note.id = id;
        }
        if let Some(created_at) = draft.created_at {
            note.created_at = created_at;
        }
        note.shared = draft.shared.unwrap_or(false);
        notes.push(note.clone());
        self.persist(&notes)?;
        Ok(note)
    }

    /// Replaces a note's title and content. Identity, creation time and
    /// the shared flag survive the edit.
    pub fn update(&mut self, id: Uuid, title: String, content: String) -> Result<Note> {
        let mut notes = self.list()?;
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| NotizError::NotFound(id.to_string()))?;
        note.title = title;
        note.content = content;
        let updated = note.clone();
        self.persist(&notes)?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let mut notes = self.list()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Err(NotizError::NotFound(id.to_string()));
        }
        self.persist(&notes)
    }

    /// Marks a note shared and returns its public link. Sharing an
    /// already shared note hands back the same link.
    pub fn share(&mut self, id: Uuid) -> Result<ShareLink> {
        let mut notes = self.list()?;
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| NotizError::NotFound(id.to_string()))?;
        note.shared = true;
        let link = share_link(&self.share_base_url, note.id);
        self.persist(&notes)?;
        Ok(ShareLink { link })
    }

    /// Looks a note up through the public gate. A missing note and a note
    /// that exists but was never shared produce the same `NotFound`, so
    /// callers cannot probe for private notes.
    pub fn get_shared(&self, id: Uuid) -> Result<Note> {
        self.list()?
            .into_iter()
            .find(|note| note.id == id && note.shared)
            .ok_or_else(|| NotizError::NotFound(id.to_string()))
    }
}
