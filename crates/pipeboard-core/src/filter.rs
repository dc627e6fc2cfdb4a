//! The filter engine: pure evaluation of the three filter dimensions
//! (design-name text, selected step, selected status) over a summary.

use crate::model::{DesignRecord, Status, Step};

/// Current values of the three filter controls, captured as an explicit value
/// object at the UI/CLI boundary. The engine itself holds no state.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    /// Case-insensitive substring match on the design name. Empty = no filter.
    pub text: String,
    /// Restrict the status check to one step. None = check all five steps.
    pub step: Option<Step>,
    /// Required derived status. None = no status constraint.
    pub status: Option<Status>,
}

impl FilterQuery {
    /// Build a query from raw control strings; an empty selector string means
    /// "no constraint" for that dimension.
    pub fn from_controls(text: &str, step: &str, status: &str) -> anyhow::Result<Self> {
        let step = match step.trim() {
            "" => None,
            s => Some(s.parse()?),
        };
        let status = match status.trim() {
            "" => None,
            s => Some(s.parse()?),
        };
        Ok(Self {
            text: text.to_string(),
            step,
            status,
        })
    }
}

/// Result of one filter evaluation: the kept records in input order, plus the
/// counts for the "N of M" metadata line.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub rows: Vec<&'a DesignRecord>,
    pub matched: usize,
    pub total: usize,
}

/// Evaluate `query` over `records`. Order-stable, no mutation, recomputed
/// from scratch on every call.
pub fn apply<'a>(records: &'a [DesignRecord], query: &FilterQuery) -> FilterOutcome<'a> {
    let needle = query.text.trim().to_lowercase();
    let rows: Vec<&DesignRecord> = records
        .iter()
        .filter(|r| keeps(r, &needle, query))
        .collect();
    FilterOutcome {
        matched: rows.len(),
        total: records.len(),
        rows,
    }
}

fn keeps(record: &DesignRecord, needle: &str, query: &FilterQuery) -> bool {
    if !needle.is_empty() && !record.design.to_lowercase().contains(needle) {
        return false;
    }
    match (query.step, query.status) {
        // Step selected: only that step's status matters.
        (Some(step), Some(want)) => record.step_status(step) == want,
        (Some(_), None) => true,
        // No step selected: any of the five fixed steps may match. Absent
        // steps count through the default-to-FAIL derivation.
        (None, Some(want)) => Step::ALL.iter().any(|s| record.step_status(*s) == want),
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepResult;

    fn record(design: &str, steps: &[(&str, bool, bool)]) -> DesignRecord {
        DesignRecord {
            design: design.to_string(),
            steps: steps
                .iter()
                .map(|(name, ok, skipped)| {
                    (
                        name.to_string(),
                        StepResult {
                            ok: *ok,
                            skipped: *skipped,
                            ..Default::default()
                        },
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    fn all_ok(design: &str) -> DesignRecord {
        record(
            design,
            &[
                ("vhd2vl", true, false),
                ("yosys_prep", true, false),
                ("sby", true, false),
                ("v2c", true, false),
                ("esbmc", true, false),
            ],
        )
    }

    fn query(text: &str, step: &str, status: &str) -> FilterQuery {
        FilterQuery::from_controls(text, step, status).unwrap()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let records = vec![all_ok("b_design"), all_ok("a_design"), DesignRecord::default()];
        let out = apply(&records, &FilterQuery::default());
        assert_eq!(out.matched, 3);
        assert_eq!(out.total, 3);
        let names: Vec<&str> = out.rows.iter().map(|r| r.design.as_str()).collect();
        assert_eq!(names, ["b_design", "a_design", ""]);
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let records = vec![all_ok("ALU_8bit"), all_ok("fifo_ctrl")];
        let out = apply(&records, &query("alu", "", ""));
        assert_eq!(out.matched, 1);
        assert_eq!(out.rows[0].design, "ALU_8bit");

        let out = apply(&records, &query("  FIFO ", "", ""));
        assert_eq!(out.matched, 1);
        assert_eq!(out.rows[0].design, "fifo_ctrl");

        assert_eq!(apply(&records, &query("uart", "", "")).matched, 0);
    }

    #[test]
    fn existential_status_filter_checks_all_five_steps() {
        let mut one_fail = all_ok("counter");
        one_fail.steps.get_mut("vhd2vl").unwrap().ok = false;
        let records = vec![one_fail];

        assert_eq!(apply(&records, &query("", "", "FAIL")).matched, 1);
        assert_eq!(apply(&records, &query("", "", "SKIP")).matched, 0);
        assert_eq!(apply(&records, &query("", "", "OK")).matched, 1);
    }

    #[test]
    fn absent_steps_count_as_fail_in_existential_check() {
        // Only sby present (and passing); the four missing steps derive FAIL.
        let records = vec![record("partial", &[("sby", true, false)])];
        assert_eq!(apply(&records, &query("", "", "FAIL")).matched, 1);
    }

    #[test]
    fn step_scoped_filter_ignores_other_steps() {
        let mut r = all_ok("shift_reg");
        let sby = r.steps.get_mut("sby").unwrap();
        sby.ok = false;
        sby.skipped = true;
        let records = vec![r];

        // sby derives SKIP, not FAIL.
        assert_eq!(apply(&records, &query("", "sby", "FAIL")).matched, 0);
        assert_eq!(apply(&records, &query("", "sby", "SKIP")).matched, 1);
        // Step selected with no status constraint always passes.
        assert_eq!(apply(&records, &query("", "sby", "")).matched, 1);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let mut failing = all_ok("alu_fail");
        failing.steps.get_mut("esbmc").unwrap().ok = false;
        let records = vec![all_ok("alu_ok"), failing, all_ok("fifo")];

        let out = apply(&records, &query("alu", "esbmc", "FAIL"));
        assert_eq!(out.matched, 1);
        assert_eq!(out.rows[0].design, "alu_fail");
    }

    #[test]
    fn counts_report_matched_and_total() {
        let mut records: Vec<DesignRecord> = (0..7).map(|i| all_ok(&format!("ok_{i}"))).collect();
        for i in 0..3 {
            records.push(record(&format!("bad_{i}"), &[("v2c", false, false)]));
        }
        let out = apply(&records, &query("", "v2c", "FAIL"));
        assert_eq!(out.matched, 3);
        assert_eq!(out.total, 10);
    }

    #[test]
    fn filtering_is_idempotent_and_does_not_mutate() {
        let records = vec![all_ok("alu"), DesignRecord::default()];
        let snapshot = serde_json::to_string(&records).unwrap();
        let q = query("", "", "FAIL");

        let first: Vec<String> = apply(&records, &q)
            .rows
            .iter()
            .map(|r| r.design.clone())
            .collect();
        let second: Vec<String> = apply(&records, &q)
            .rows
            .iter()
            .map(|r| r.design.clone())
            .collect();

        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&records).unwrap(), snapshot);
    }

    #[test]
    fn from_controls_rejects_unknown_selectors() {
        assert!(FilterQuery::from_controls("", "elaborate", "").is_err());
        assert!(FilterQuery::from_controls("", "", "WARN").is_err());
        assert!(FilterQuery::from_controls("x", " sby ", " fail ").is_ok());
    }
}
