use std::fs;
use std::path::{Path, PathBuf};

use aquastress_core::errors::{AquaResult, SinkError};
use aquastress_core::models::{Location, LocationRecord, Reading, StressAssessment};
use aquastress_core::traits::IPresentationSink;
use chrono::Utc;

use crate::render::Dashboard;

/// Writes the dashboard JSON after each cycle.
///
/// The document is written to a sibling temp file and renamed into place, so
/// readers never see a partial file.
pub struct DashboardFileSink {
    path: PathBuf,
}

impl DashboardFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "dashboard.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, e: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl IPresentationSink for DashboardFileSink {
    fn present(&self, _: &Location, _: &Reading, _: &StressAssessment) -> AquaResult<()> {
        Ok(())
    }

    fn flush(&self, snapshot: &[LocationRecord]) -> AquaResult<()> {
        let json = Dashboard::build(snapshot, Utc::now()).to_json_pretty()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let tmp = self.temp_path();
        if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path)) {
            // Best effort; the original error is what gets reported.
            let _ = fs::remove_file(&tmp);
            return Err(self.io_err(e).into());
        }

        tracing::debug!(path = %self.path.display(), records = snapshot.len(), "dashboard written");
        Ok(())
    }
}
