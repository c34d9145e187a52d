// In crates/journal/src/store.rs

use crate::Result;
use core_types::TradeRecord;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Keeps the whole journal as one JSON document: an array of records,
/// newest first.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored record. A missing or empty file is an empty journal.
    pub fn load(&self) -> Result<Vec<TradeRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "No journal file yet; starting empty."
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records: Vec<TradeRecord> = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "Loaded journal.");
        Ok(records)
    }

    /// Replaces the stored document with `records`.
    ///
    /// The document is written beside the target and renamed over it, so a
    /// failed write never leaves a half-written journal behind.
    pub fn save(&self, records: &[TradeRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(fs::File::create(&staging)?);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        fs::rename(&staging, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "Saved journal.");
        Ok(())
    }
}
