use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use rover::RoverState;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Keeps track of the rover state after every batch, and writes them to a
/// JSON file at the end of the mission.
pub struct Recorder {
    path: PathBuf,
    entries: Vec<RecordedBatch>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedBatch {
    pub batch: String,
    pub state: RoverState,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(directory) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !directory.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", directory.display());
            }
        }
        Ok(Self {
            path,
            entries: Vec::new(),
        })
    }

    pub fn store_state(&mut self, batch: &str, state: RoverState) {
        trace!(batch, %state, "Recording state");
        self.entries.push(RecordedBatch {
            batch: String::from(batch),
            state,
        });
    }

    pub fn entries(&self) -> &[RecordedBatch] {
        &self.entries
    }

    pub fn write_recording(&mut self) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Could not write recording '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rover::Heading;

    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let path = std::env::temp_dir()
            .join("driver_test_no_such_dir")
            .join("trace.json");
        assert!(Recorder::new(path).is_err());
    }

    #[test]
    fn writes_states_as_json() {
        let dir = std::env::temp_dir().join(format!("driver_recordings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trace.json");

        let mut recorder = Recorder::new(path.clone()).unwrap();
        recorder.store_state(
            "FFRF",
            RoverState {
                x: 1,
                y: 2,
                heading: Heading::East,
            },
        );
        recorder.store_state(
            "RF",
            RoverState {
                x: 1,
                y: 1,
                heading: Heading::South,
            },
        );
        recorder.write_recording().unwrap();

        let written: Vec<RecordedBatch> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, recorder.entries());
        assert_eq!(written[1].state.as_triple(), (1, 1, 2));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_failure_names_the_file() {
        let dir = std::env::temp_dir().join(format!("driver_unwritable_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        // A directory cannot be opened as a file.
        let mut recorder = Recorder::new(dir.clone()).unwrap();
        let err = recorder.write_recording().unwrap_err();
        assert!(err.to_string().contains(&dir.display().to_string()));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
