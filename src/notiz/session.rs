use crate::api::NotesApi;
use crate::cache::NoteCache;
use crate::error::{NotizError, Result};
use crate::model::{Note, NoteDraft, ShareLink};
use crate::query::{self, ListPage};
use crate::state::{reduce, ListAction, ListState};
use crate::store::StorageBackend;

/// Ties the access layer, the cache and the list state together and owns
/// their contract: every successful mutation invalidates the cache before
/// returning, so a later read can never observe pre-mutation state, and a
/// successful delete additionally clears the active search.
pub struct NoteSession<B: StorageBackend> {
    api: NotesApi<B>,
    cache: NoteCache,
    state: ListState,
}

impl<B: StorageBackend> NoteSession<B> {
    pub fn new(api: NotesApi<B>, initial_load_retries: u32) -> Self {
        Self {
            api,
            cache: NoteCache::new(initial_load_retries),
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ListAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// The full shelf, served from cache while it is fresh.
    pub fn notes(&mut self) -> Result<Vec<Note>> {
        let api = &self.api;
        let notes = self.cache.get_or_fetch(|| api.fetch_notes())?;
        Ok(notes.to_vec())
    }

    /// The current page of the filtered shelf.
    pub fn list_page(&mut self) -> Result<ListPage> {
        let notes = self.notes()?;
        Ok(query::build_page(&notes, &self.state.query, self.state.page))
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.dispatch(ListAction::SetQuery(query.into()));
    }

    /// Jumps to `page`, clamped to the range the current query allows.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let bounds = self.list_page()?;
        self.dispatch(ListAction::SetPage(page.clamp(1, bounds.page_count.max(1))));
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<()> {
        let current = self.list_page()?;
        if current.has_next() {
            self.dispatch(ListAction::SetPage(current.page + 1));
        }
        Ok(())
    }

    pub fn prev_page(&mut self) -> Result<()> {
        let current = self.list_page()?;
        if current.has_prev() {
            self.dispatch(ListAction::SetPage(current.page - 1));
        }
        Ok(())
    }

    /// Resolves a 1-based shelf position to its note.
    pub fn resolve(&mut self, index: usize) -> Result<Note> {
        let notes = self.notes()?;
        index
            .checked_sub(1)
            .and_then(|idx| notes.get(idx))
            .cloned()
            .ok_or_else(|| NotizError::NotFound(index.to_string()))
    }

    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        validate(&draft.title, &draft.content)?;
        let note = self.api.create_note(draft)?;
        self.cache.invalidate();
        Ok(note)
    }

    pub fn edit(&mut self, index: usize, title: String, content: String) -> Result<Note> {
        validate(&title, &content)?;
        let id = self.resolve(index)?.id;
        let note = self.api.edit_note(id, title, content)?;
        self.cache.invalidate();
        Ok(note)
    }

    /// Deletes notes by position. Positions are resolved against the shelf
    /// before anything is removed, so deleting 1 and 2 removes the first two
    /// notes rather than shifting midway. Each successful removal invalidates
    /// the cache and clears the active search, so the next listing shows the
    /// full shelf.
    pub fn delete(&mut self, indexes: &[usize]) -> Result<Vec<Note>> {
        let mut targets = Vec::with_capacity(indexes.len());
        for &index in indexes {
            targets.push(self.resolve(index)?);
        }
        for note in &targets {
            self.api.delete_note(note.id)?;
            self.cache.invalidate();
            self.dispatch(ListAction::ClearQuery);
        }
        Ok(targets)
    }

    /// Shares a note and returns it with its public link.
    pub fn share(&mut self, index: usize) -> Result<(Note, ShareLink)> {
        let note = self.resolve(index)?;
        let link = self.api.share_note(note.id)?;
        self.cache.invalidate();
        Ok((note, link))
    }

    /// Fetches through the public gate. Bypasses the cache and the list
    /// state entirely.
    pub fn shared_note(&self, id: &str) -> Result<Note> {
        self.api.fetch_shared(id)
    }
}

fn validate(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotizError::Validation("Title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(NotizError::Validation("Content is required".to_string()));
    }
    Ok(())
}
