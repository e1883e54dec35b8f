//! Compare a load-test run against its baseline snapshot.
//! Ratios above the configured threshold factor fail the gate and the process.

pub mod baseline;
pub mod cli;
pub mod compare;
pub mod errors;
pub mod gate;
pub mod report;
pub mod snapshot;
pub mod table;

pub use crate::baseline::{BaselineAction, create_baseline};
pub use crate::cli::CliConfig;
pub use crate::compare::{Comparator, RatioEntry};
pub use crate::errors::CompareError;
pub use crate::gate::{GateOutcome, GateReport, ThresholdGate};
pub use crate::report::{ReportTable, render_report};
pub use crate::table::{Table, outer_join};
