//! Generic in-memory record collection backed by one text file.
//!
//! The store owns an ordered collection, allocates ids as one past the
//! highest id seen, and rewrites the whole file after every mutation. A
//! mutation whose write fails is rolled back so memory and disk never
//! disagree.

use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::storage::codec::{self, Record, RecordCodec};
use crate::storage::error::StoreError;

/// What happened when the store read its file at startup.
#[derive(Debug)]
pub enum LoadStatus {
    /// Every record in the file was decoded
    Loaded { count: usize },
    /// No file existed yet; `reported` is set for collections whose absence
    /// is logged as a warning
    Missing { reported: bool },
    /// Decoding stopped at a malformed record; earlier records were kept
    Partial { count: usize, error: StoreError },
    /// The file exists but could not be read; the store starts empty
    Unreadable(StoreError),
}

impl LoadStatus {
    /// Load error, if any.
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            LoadStatus::Partial { error, .. } | LoadStatus::Unreadable(error) => Some(error),
            LoadStatus::Loaded { .. } | LoadStatus::Missing { .. } => None,
        }
    }
}

/// Ordered, file-backed collection of one record kind.
pub struct RecordStore<C: RecordCodec> {
    path: PathBuf,
    records: Vec<C::Record>,
    next_id: Option<u32>,
    load_status: LoadStatus,
    _codec: PhantomData<C>,
}

impl<C: RecordCodec> RecordStore<C> {
    /// Open the store, loading whatever the file at `path` holds.
    ///
    /// Never fails: load problems are logged and kept in [`Self::load_status`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (records, load_status) = load::<C>(&path);
        let next_id = records
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0)
            .checked_add(1);

        Self {
            path,
            records,
            next_id,
            load_status,
            _codec: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of the startup load.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Id the next insert will receive, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocate an id, build the record with it, append and persist.
    pub fn insert_with(
        &mut self,
        build: impl FnOnce(u32) -> C::Record,
    ) -> Result<u32, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted { kind: C::KIND })?;
        // Burned even if the write fails, so ids are never handed out twice.
        self.next_id = id.checked_add(1);

        self.records.push(build(id));
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        tracing::debug!(kind = %C::KIND, id, "Record created");
        Ok(id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Result<&C::Record, StoreError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound { kind: C::KIND, id })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Iterate the live collection in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &C::Record> {
        self.records.iter()
    }

    /// Owned snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<C::Record> {
        self.records.clone()
    }

    /// Mutate a record in place and persist.
    pub fn update(
        &mut self,
        id: u32,
        apply: impl FnOnce(&mut C::Record),
    ) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let previous = self.records[index].clone();

        apply(&mut self.records[index]);
        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e);
        }

        tracing::debug!(kind = %C::KIND, id, "Record updated");
        Ok(())
    }

    /// Remove a record and persist. Its id is not reused.
    pub fn remove(&mut self, id: u32) -> Result<C::Record, StoreError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(kind = %C::KIND, id, "Record removed");
        Ok(removed)
    }

    fn position(&self, id: u32) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound { kind: C::KIND, id })
    }

    /// Rewrite the whole file from the in-memory collection.
    fn persist(&self) -> Result<(), StoreError> {
        let contents = codec::encode::<C>(&self.records);

        write_atomic(&self.path, contents.as_bytes()).map_err(|source| {
            tracing::error!(
                kind = %C::KIND,
                path = %self.path.display(),
                "Failed to save records: {}",
                source
            );
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            kind = %C::KIND,
            count = self.records.len(),
            path = %self.path.display(),
            "Records saved"
        );
        Ok(())
    }
}

/// Replace `path` with `contents` through a sibling temporary file.
///
/// The temporary file is deleted on every early return, and the target is
/// untouched unless the full contents were written.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn load<C: RecordCodec>(path: &Path) -> (Vec<C::Record>, LoadStatus) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if C::REQUIRED {
                tracing::warn!(
                    kind = %C::KIND,
                    path = %path.display(),
                    "Record file not found, starting empty"
                );
            } else {
                tracing::debug!(
                    kind = %C::KIND,
                    path = %path.display(),
                    "No record file yet"
                );
            }
            return (
                Vec::new(),
                LoadStatus::Missing {
                    reported: C::REQUIRED,
                },
            );
        }
        Err(source) => {
            tracing::error!(
                kind = %C::KIND,
                path = %path.display(),
                "Failed to load records: {}",
                source
            );
            let error = StoreError::Io {
                path: path.to_path_buf(),
                source,
            };
            return (Vec::new(), LoadStatus::Unreadable(error));
        }
    };

    let decoded = codec::decode::<C>(&text);
    let count = decoded.records.len();

    match decoded.error {
        None => {
            tracing::info!(kind = %C::KIND, count, path = %path.display(), "Records loaded");
            (decoded.records, LoadStatus::Loaded { count })
        }
        Some(source) => {
            tracing::warn!(
                kind = %C::KIND,
                count,
                path = %path.display(),
                "Stopped loading at malformed record: {}",
                source
            );
            let error = StoreError::MalformedRecord {
                path: path.to_path_buf(),
                source,
            };
            (decoded.records, LoadStatus::Partial { count, error })
        }
    }
}
