//! Utility functions for Idempotent-Rig

use crate::Result;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Save object to JSON file
pub fn save_json<T: Serialize>(obj: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let file = File::open(path)?;
    let obj = serde_json::from_reader(BufReader::new(file))?;
    Ok(obj)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Phase timer that logs its elapsed time when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f64 {
            self.start.elapsed().as_secs_f64()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            tracing::info!(phase = %self.name, seconds = self.elapsed(), "done");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");
        let mut value = BTreeMap::new();
        value.insert("classes".to_string(), 465usize);

        save_json(&value, &path).unwrap();
        let loaded: BTreeMap<String, usize> = load_json(&path).unwrap();
        assert_eq!(value, loaded);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_json::<BTreeMap<String, usize>>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::RigError::IoError(_)));
    }

    #[test]
    fn test_timer_measures() {
        let timer = timing::Timer::new("test");
        assert!(timer.elapsed() >= 0.0);
    }
}
