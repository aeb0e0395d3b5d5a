use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plan::Plan;

/// A stored plan, as handed to the persistence layer.
///
/// `metrics` is carried as an opaque JSON value; readers do not interpret it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub state: String,
    pub plan_id: String,
    pub name: String,
    pub num_districts: u32,
    pub assignments: BTreeMap<String, u32>,
    #[serde(default)]
    pub metrics: Value,
    /// Unix seconds of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<u64>,
}

impl PlanDocument {
    /// Write the document as pretty-printed JSON.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[PlanDocument] Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("[PlanDocument] Failed to write JSON: {}", path.display()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    /// Read a document from a JSON file.
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[PlanDocument] Failed to open file: {}", path.display()))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[PlanDocument] Failed to parse plan JSON: {}", path.display()))
    }
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
fn unix_seconds() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}

impl Plan {
    /// Default display name, e.g. `Automap - Lean D` or `Automap - Custom`.
    pub fn default_name(&self) -> String {
        format!("Automap - {}", self.config().label())
    }

    /// Package the current assignments and metrics as a storable document.
    /// `name` defaults to [`Plan::default_name`]; the id is `plan_<unix seconds>`.
    pub fn to_document(&self, state: &str, name: Option<&str>) -> Result<PlanDocument> {
        let now = unix_seconds();
        let metrics = serde_json::to_value(self.metrics()).context("[Plan.to_document] Failed to encode metrics")?;

        Ok(PlanDocument {
            state: state.to_string(),
            plan_id: format!("plan_{now}"),
            name: name.map_or_else(|| self.default_name(), str::to_string),
            num_districts: self.num_districts(),
            assignments: self.get_assignments(),
            metrics,
            last_updated: Some(now),
        })
    }

    /// Load assignments from a stored document.
    pub fn load_document(&mut self, document: &PlanDocument) -> Result<()> {
        if document.num_districts != self.num_districts() {
            tracing::warn!(
                stored = document.num_districts,
                expected = self.num_districts(),
                "plan document district count differs from the plan"
            );
        }

        self.set_assignments(&document.assignments)
    }
}
