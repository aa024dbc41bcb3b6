//! Crash-safe persistence of the current partition

use super::format::write_partition;
use crate::partition::Partition;
use crate::{RigError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where an artifact ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointOutcome {
    /// Written to the checkpoint file
    File,
    /// The file could not be written; printed to stdout instead
    Console,
}

/// Rewrites one artifact file with the latest partition
///
/// The file is opened, written and closed on every call, so a killed run
/// leaves the last complete partition behind.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    path: PathBuf,
    fallbacks: usize,
}

impl Checkpoint {
    /// Checkpoint writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Checkpoint {
            path: path.into(),
            fallbacks: 0,
        }
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of writes that fell back to the console
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Write to the file only
    pub fn try_write(&self, partition: &Partition) -> Result<()> {
        self.write_file(partition).map_err(|source| RigError::Checkpoint {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self, partition: &Partition) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        write_partition(&mut out, partition)?;
        out.flush()
    }

    /// Write to the file, or to stdout if the file cannot be written
    ///
    /// A failed write never interrupts the caller.
    pub fn write(&mut self, partition: &Partition) -> CheckpointOutcome {
        self.write_or_fallback(partition, &mut io::stdout().lock())
    }

    /// Like [`Self::write`], with an explicit fallback sink
    pub fn write_or_fallback<W: Write>(
        &mut self,
        partition: &Partition,
        fallback: &mut W,
    ) -> CheckpointOutcome {
        match self.try_write(partition) {
            Ok(()) => {
                debug!(path = %self.path.display(), classes = partition.class_count(), "checkpoint written");
                CheckpointOutcome::File
            }
            Err(err) => {
                self.fallbacks += 1;
                warn!(%err, "sending output to console");
                if let Err(console_err) = write_partition(fallback, partition) {
                    warn!(%console_err, "console fallback failed as well");
                }
                CheckpointOutcome::Console
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render_partition;

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partition.txt");
        let mut checkpoint = Checkpoint::new(&path);
        let p = Partition::discrete(4);

        let mut console = Vec::new();
        assert_eq!(checkpoint.write_or_fallback(&p, &mut console), CheckpointOutcome::File);
        assert!(console.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_partition(&p));
        assert_eq!(checkpoint.fallbacks(), 0);
    }

    #[test]
    fn test_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partition.txt");
        let checkpoint = Checkpoint::new(&path);
        checkpoint.try_write(&Partition::discrete(5)).unwrap();
        let small = Partition::discrete(1);
        checkpoint.try_write(&small).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_partition(&small));
    }

    #[test]
    fn test_falls_back_to_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("partition.txt");
        let mut checkpoint = Checkpoint::new(&path);
        let p = Partition::discrete(2);

        let err = checkpoint.try_write(&p).unwrap_err();
        assert!(!err.is_fatal());

        let mut console = Vec::new();
        assert_eq!(checkpoint.write_or_fallback(&p, &mut console), CheckpointOutcome::Console);
        assert_eq!(String::from_utf8(console).unwrap(), render_partition(&p));
        assert_eq!(checkpoint.fallbacks(), 1);
        assert!(!path.exists());
    }
}
