use serde::Serialize;

use crate::compare::RatioEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    Pass,
    Fail(Vec<String>),
}

/// Gates a ratio series against a single threshold factor.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdGate {
    threshold: f64,
}

impl ThresholdGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Pass iff every entry is finite and at or below the threshold.
    ///
    /// An empty series passes vacuously. Non-finite ratios (missing or zero
    /// baseline values) are violations, so a vanished metric cannot slip
    /// through the gate.
    pub fn evaluate(&self, series: &[RatioEntry]) -> GateOutcome {
        let mut failures = Vec::new();
        for entry in series {
            if !entry.value.is_finite() {
                failures.push(format!(
                    "{} is not comparable: ratio {}",
                    entry.label, entry.value
                ));
            } else if entry.value > self.threshold {
                failures.push(format!(
                    "{} ratio {} exceeds threshold factor {}",
                    entry.label, entry.value, self.threshold
                ));
            }
        }
        if failures.is_empty() {
            GateOutcome::Pass
        } else {
            GateOutcome::Fail(failures)
        }
    }
}

/// Machine-readable gate summary for CI tooling.
#[derive(Clone, Debug, Serialize)]
pub struct GateReport {
    pub threshold: f64,
    pub checked: usize,
    pub passed: bool,
    pub violations: Vec<String>,
}

impl GateReport {
    pub fn new(gate: &ThresholdGate, series: &[RatioEntry]) -> Self {
        let violations = match gate.evaluate(series) {
            GateOutcome::Pass => Vec::new(),
            GateOutcome::Fail(reasons) => reasons,
        };
        Self {
            threshold: gate.threshold(),
            checked: series.len(),
            passed: violations.is_empty(),
            violations,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
