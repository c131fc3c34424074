// Rust guideline compliant 2026-10-16

//! JSONL file-backed record store.
//!
//! One parcel per line. Every mutation runs read-check-write under an
//! exclusive advisory lock and replaces the file through a synced temp file
//! and rename, so the change is durable when the call returns. The last issued
//! number lives in a `.seq` sidecar so deleted numbers are never handed out
//! again. Reads skip unreadable lines; writes refuse to run until they are
//! repaired.

use super::{filter_by_client, ParcelStore};
use crate::models::validate_address;
use crate::{ClientId, Error, Parcel, ParcelNumber, Result, Status};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Record store persisted as a JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl JsonlStore {
    /// Creates a store for the given JSONL path.
    ///
    /// The file does not need to exist yet; it is created on the first write.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sequence_path(&self) -> PathBuf {
        self.path.with_extension("seq")
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Loads every parcel in file order.
    ///
    /// Lines that are not valid JSON are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - A well-formed record fails validation
    pub fn load_all(&self) -> Result<Vec<Parcel>> {
        self.load_rows(false)
    }

    /// Loads every parcel for a rewrite of the file.
    ///
    /// Unlike [`JsonlStore::load_all`], an unreadable line is an error: saving
    /// without it would erase the record.
    fn load_for_write(&self) -> Result<Vec<Parcel>> {
        self.load_rows(true)
    }

    fn load_rows(&self, reject_malformed: bool) -> Result<Vec<Parcel>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut parcels = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Parcel>(&line) {
                Ok(parcel) => {
                    parcel.validate()?;
                    parcels.push(parcel);
                }
                Err(e) if reject_malformed => {
                    return Err(Error::Storage(format!(
                        "malformed record at {}:{}, refusing to rewrite the store: {}",
                        self.path.display(),
                        index + 1,
                        e
                    )));
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping malformed parcel record"
                    );
                }
            }
        }

        Ok(parcels)
    }

    /// Replaces the file contents with `parcels`.
    ///
    /// # Errors
    ///
    /// Returns an error if any parcel fails validation or the write fails.
    fn save_all(&self, parcels: &[Parcel]) -> Result<()> {
        for parcel in parcels {
            parcel.validate()?;
        }

        let mut content = String::new();
        for parcel in parcels {
            content.push_str(&serde_json::to_string(parcel)?);
            content.push('\n');
        }

        write_atomic(&self.path, content.as_bytes())
    }

    fn read_sequence(&self) -> Result<ParcelNumber> {
        let path = self.sequence_path();
        if !path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&path)?;
        raw.trim().parse().map_err(|_| {
            Error::Storage(format!(
                "corrupt sequence file {}: {:?}",
                path.display(),
                raw.trim()
            ))
        })
    }

    /// Executes a closure with an exclusive lock on the store.
    ///
    /// Blocks until the lock is available, so racing writers are serialized
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;

        FileExt::lock_exclusive(&lock_file).map_err(|e| {
            Error::Storage(format!(
                "failed to lock {}: {}",
                self.lock_path().display(),
                e
            ))
        })?;

        let result = f();

        // Released on drop as well; an unlock failure must not mask `result`.
        let _ = FileExt::unlock(&lock_file);

        result
    }

    /// Loads all rows under the lock, applies `f`, and persists them if `f`
    /// reports a change.
    fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Parcel>) -> (T, bool),
    {
        self.with_lock(|| {
            let mut parcels = self.load_for_write()?;
            let (out, changed) = f(&mut parcels);
            if changed {
                self.save_all(&parcels)?;
            }
            Ok(out)
        })
    }
}

impl ParcelStore for JsonlStore {
    fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        parcel.validate()?;

        self.with_lock(|| {
            let mut parcels = self.load_for_write()?;
            let highest = parcels.iter().map(|p| p.number).max().unwrap_or(0);
            let number = self.read_sequence()?.max(highest) + 1;

            // Persist the sequence first: a crash in between leaves a gap, never a reuse.
            write_atomic(&self.sequence_path(), number.to_string().as_bytes())?;

            let mut stored = parcel.clone();
            stored.number = number;
            parcels.push(stored);
            self.save_all(&parcels)?;

            Ok(number)
        })
    }

    fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        self.load_all()?
            .into_iter()
            .find(|p| p.number == number)
            .ok_or(Error::NotFound(number))
    }

    fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        let mut parcels = filter_by_client(self.load_all()?, client);
        parcels.sort_by_key(|p| p.number);
        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: Status) -> Result<()> {
        self.update(|parcels| match parcels.iter_mut().find(|p| p.number == number) {
            Some(parcel) => {
                parcel.status = status;
                ((), true)
            }
            None => ((), false),
        })
    }

    fn compare_and_set_status(
        &self,
        number: ParcelNumber,
        expected: Status,
        next: Status,
    ) -> Result<bool> {
        self.update(|parcels| {
            match parcels
                .iter_mut()
                .find(|p| p.number == number && p.status == expected)
            {
                Some(parcel) => {
                    parcel.status = next;
                    (true, true)
                }
                None => (false, false),
            }
        })
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> Result<bool> {
        validate_address(address)?;

        self.update(|parcels| {
            match parcels
                .iter_mut()
                .find(|p| p.number == number && p.is_mutable())
            {
                Some(parcel) => {
                    parcel.address = address.to_string();
                    (true, true)
                }
                None => (false, false),
            }
        })
    }

    fn delete(&self, number: ParcelNumber) -> Result<bool> {
        self.update(|parcels| {
            let before = parcels.len();
            parcels.retain(|p| !(p.number == number && p.is_mutable()));
            let removed = parcels.len() != before;
            (removed, removed)
        })
    }
}

/// Writes `content` to a sibling temp file, syncs it, and renames it over `path`.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}
