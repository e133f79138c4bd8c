// View state owned by the dashboard.
//
// Starts in `Loading` with empty datasets and leaves it exactly once, either
// with every chart loaded or with some charts recorded as failed. There is no
// way back into `Loading`.

use chrono::{DateTime, Utc};
use shared::models::{CandlestickPoint, ChartKind, SeriesRecord};

use super::loader::LoadOutcome;
use crate::error::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    LoadedWithErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub candlestick: Vec<CandlestickPoint>,
    pub line: Vec<SeriesRecord>,
    pub bar: Vec<SeriesRecord>,
    pub pie: Vec<SeriesRecord>,
}

/// A chart whose data could not be loaded. Kept for logs, never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFailure {
    pub kind: ChartKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    phase: LoadPhase,
    data: DashboardData,
    failures: Vec<ChartFailure>,
    settled_at: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            data: DashboardData::default(),
            failures: Vec::new(),
            settled_at: None,
        }
    }

    /// The loading flag gating spinner vs. charts.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn failures(&self) -> &[ChartFailure] {
        &self.failures
    }

    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    /// Applies the joined load result. Returns `false` (and changes nothing)
    /// if the state has already settled.
    pub fn settle(&mut self, outcome: LoadOutcome) -> bool {
        if !self.is_loading() {
            tracing::warn!(
                phase = ?self.phase,
                "Dashboard already settled, ignoring load outcome"
            );
            return false;
        }

        let LoadOutcome {
            candlestick,
            line,
            bar,
            pie,
        } = outcome;
        self.data.candlestick = self.take_or_record(ChartKind::Candlestick, candlestick);
        self.data.line = self.take_or_record(ChartKind::Line, line);
        self.data.bar = self.take_or_record(ChartKind::Bar, bar);
        self.data.pie = self.take_or_record(ChartKind::Pie, pie);

        self.finish();
        true
    }

    /// Leaves `Loading` with every chart failed, for when no fetch could even start.
    pub fn settle_failed(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            tracing::warn!(phase = ?self.phase, "Dashboard already settled, ignoring failure");
            return false;
        }

        let message = message.into();
        for kind in ChartKind::ALL {
            self.record_failure(kind, message.clone());
        }

        self.finish();
        true
    }

    // A failed chart keeps its empty default.
    fn take_or_record<T: Default>(&mut self, kind: ChartKind, result: Result<T, FeedError>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.record_failure(kind, e.to_string());
                T::default()
            }
        }
    }

    fn record_failure(&mut self, kind: ChartKind, message: String) {
        self.failures.push(ChartFailure { kind, message });
    }

    fn finish(&mut self) {
        self.phase = if self.failures.is_empty() {
            LoadPhase::Loaded
        } else {
            LoadPhase::LoadedWithErrors
        };
        self.settled_at = Some(Utc::now());
        tracing::info!(
            phase = ?self.phase,
            failed = self.failures.len(),
            candlestick_points = self.data.candlestick.len(),
            line_points = self.data.line.len(),
            bar_points = self.data.bar.len(),
            pie_points = self.data.pie.len(),
            "Dashboard data settled"
        );
    }
}
