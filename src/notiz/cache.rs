use crate::error::Result;
use crate::model::Note;

/// Snapshot cache over the fetched shelf.
///
/// Reads are served from the snapshot while one is present. Mutations must
/// call [`NoteCache::invalidate`] so the next read fetches fresh data; a
/// read after an invalidation can never see pre-mutation state. Only the
/// first ever load retries failed fetches.
#[derive(Debug)]
pub struct NoteCache {
    snapshot: Option<Vec<Note>>,
    loaded_once: bool,
    initial_retries: u32,
}

impl NoteCache {
    pub fn new(initial_retries: u32) -> Self {
        Self {
            snapshot: None,
            loaded_once: false,
            initial_retries,
        }
    }

    /// Returns the cached notes, calling `fetch` when the snapshot is
    /// absent. Until the first load has succeeded, a failed fetch is
    /// retried up to the configured budget; after that, failures pass
    /// straight through.
    pub fn get_or_fetch<F>(&mut self, mut fetch: F) -> Result<&[Note]>
    where
        F: FnMut() -> Result<Vec<Note>>,
    {
        if self.snapshot.is_none() {
            let mut attempt = fetch();
            if !self.loaded_once {
                let mut retries = self.initial_retries;
                while attempt.is_err() && retries > 0 {
                    retries -= 1;
                    attempt = fetch();
                }
            }
            self.snapshot = Some(attempt?);
            self.loaded_once = true;
        }
        Ok(self.snapshot.as_deref().unwrap_or_default())
    }

    /// Drops the snapshot. The next read fetches.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn is_fresh(&self) -> bool {
        self.snapshot.is_some()
    }
}
