use std::path::Path;

use anyhow::Context;
use rover::{Bounds, ExecutionReport, Grid, Obstacles, Rover};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::recording::Recorder;

/// Everything needed to run a rover: the grid it drives on and the command
/// batches it receives, in order.
///
/// Loaded from JSON, e.g.
/// `{"x_limit": 10, "y_limit": 10, "obstacles": [[1, 2]], "batches": ["FFR", "F"]}`.
/// Leaving out both limits gives an unbounded grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionConfig {
    #[serde(default)]
    pub x_limit: Option<i64>,
    #[serde(default)]
    pub y_limit: Option<i64>,
    #[serde(default)]
    pub obstacles: Obstacles,
    #[serde(default)]
    pub batches: Vec<String>,
    /// Reject batches containing characters that are not commands, instead
    /// of skipping those characters.
    #[serde(default)]
    pub strict: bool,
}

impl MissionConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read mission file '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid mission file '{}'", path.display()))
    }

    pub fn bounds(&self) -> anyhow::Result<Option<Bounds>> {
        match (self.x_limit, self.y_limit) {
            (Some(x_limit), Some(y_limit)) => Ok(Some(Bounds::new(x_limit, y_limit)?)),
            (None, None) => Ok(None),
            _ => anyhow::bail!("x_limit and y_limit must be given together"),
        }
    }

    pub fn grid(&self) -> anyhow::Result<Grid<'_>> {
        let grid = match self.bounds()? {
            Some(bounds) => Grid::wrapping(bounds),
            None => Grid::unbounded(),
        };
        Ok(grid.with_obstacles(&self.obstacles))
    }
}

pub struct MissionResult<'a> {
    /// The rover after the last batch.
    pub rover: Rover<'a>,
    /// The reports of all batches, added up.
    pub report: ExecutionReport,
}

/// Runs all batches of the mission on a fresh rover.
///
/// In strict mode, a batch with an unknown character aborts the mission
/// with an error; that batch has no effect on the rover.
pub fn run_mission<'a>(
    config: &'a MissionConfig,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MissionResult<'a>> {
    let mut rover = Rover::on_grid(config.grid()?)?;
    info!(
        bounded = config.bounds()?.is_some(),
        obstacles = config.obstacles.len(),
        batches = config.batches.len(),
        strict = config.strict,
        "Starting mission"
    );

    let outcome = execute_batches(config, &mut rover, recorder);

    // The states of the batches that ran are written even if a later batch
    // was rejected.
    let written = match recorder.as_mut() {
        Some(recorder) => recorder.write_recording(),
        None => Ok(()),
    };
    let total = outcome?;
    written?;

    info!(
        moved = total.moved,
        blocked = total.blocked,
        turned = total.turned,
        ignored = total.ignored.len(),
        "Mission complete"
    );
    Ok(MissionResult {
        rover,
        report: total,
    })
}

fn execute_batches(
    config: &MissionConfig,
    rover: &mut Rover<'_>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<ExecutionReport> {
    let mut total = ExecutionReport::default();
    for (batch_idx, batch) in config.batches.iter().enumerate() {
        let report = if config.strict {
            rover
                .execute_strict(batch)
                .with_context(|| format!("Batch {} ({:?}) was rejected", batch_idx, batch))?
        } else {
            rover.execute(batch)
        };

        for skipped in &report.ignored {
            warn!(
                batch_idx,
                index = skipped.index,
                token = %skipped.token,
                "Ignored unknown command"
            );
        }
        if report.blocked > 0 {
            debug!(batch_idx, blocked = report.blocked, "Moves blocked by obstacles");
        }
        let state = rover.state();
        debug!(batch_idx, x = state.x, y = state.y, heading = %state.heading, "Batch executed");

        if let Some(recorder) = recorder.as_mut() {
            recorder.store_state(batch, state);
        }
        total.merge(report);
    }
    Ok(total)
}
