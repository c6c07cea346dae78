use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use aquastress_core::errors::{AquaResult, SinkError};
use aquastress_core::models::{Location, LocationRecord, Reading, StressAssessment};
use aquastress_core::traits::IPresentationSink;

use crate::render::ticker_line;

/// Writes the ticker line once per cycle, at flush.
pub struct TickerSink<W: Write + Send = Stdout> {
    out: Mutex<W>,
    label: String,
}

impl TickerSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "<stdout>")
    }
}

impl<W: Write + Send> TickerSink<W> {
    pub fn new(out: W, label: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> IPresentationSink for TickerSink<W> {
    fn present(&self, _: &Location, _: &Reading, _: &StressAssessment) -> AquaResult<()> {
        Ok(())
    }

    fn flush(&self, snapshot: &[LocationRecord]) -> AquaResult<()> {
        let line = ticker_line(snapshot);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(|e| SinkError::Io {
                path: self.label.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
