use std::collections::HashMap;

use crate::error::Result;
use crate::store::StorageBackend;

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use std::cell::Cell;

    use super::MemoryBackend;
    use crate::error::{NotizError, Result};
    use crate::model::NoteDraft;
    use crate::store::{NoteStore, StorageBackend};

    /// A store over a fresh in-memory backend, pre-filled with one note
    /// per (title, content) pair.
    pub fn seeded_store(notes: &[(&str, &str)]) -> NoteStore<MemoryBackend> {
        let mut store = NoteStore::new(MemoryBackend::new(), "http://localhost:5173");
        for (title, content) in notes {
            store
                .create(NoteDraft::new(*title, *content))
                .expect("seeding an in-memory store cannot fail");
        }
        store
    }

    /// Backend that fails its next `fail_reads` reads and `fail_writes`
    /// writes before behaving like a plain in-memory backend.
    #[derive(Debug, Default)]
    pub struct FlakyBackend {
        inner: MemoryBackend,
        fail_reads: Cell<u32>,
        fail_writes: u32,
    }

    impl FlakyBackend {
        pub fn failing_reads(n: u32) -> Self {
            Self {
                fail_reads: Cell::new(n),
                ..Self::default()
            }
        }

        pub fn failing_writes(n: u32) -> Self {
            Self {
                fail_writes: n,
                ..Self::default()
            }
        }
    }

    impl StorageBackend for FlakyBackend {
        fn read(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.get() > 0 {
                self.fail_reads.set(self.fail_reads.get() - 1);
                return Err(NotizError::Store("injected read failure".to_string()));
            }
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes > 0 {
                self.fail_writes -= 1;
                return Err(NotizError::Store("injected write failure".to_string()));
            }
            self.inner.write(key, value)
        }
    }
}
