use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One stage of the fixed five-stage verification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Vhd2vl,
    YosysPrep,
    Sby,
    V2c,
    Esbmc,
}

impl Step {
    /// Pipeline order; also the column order in every report and the step set
    /// checked by the existential status filter.
    pub const ALL: [Step; 5] = [
        Step::Vhd2vl,
        Step::YosysPrep,
        Step::Sby,
        Step::V2c,
        Step::Esbmc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Vhd2vl => "vhd2vl",
            Step::YosysPrep => "yosys_prep",
            Step::Sby => "sby",
            Step::V2c => "v2c",
            Step::Esbmc => "esbmc",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vhd2vl" => Ok(Step::Vhd2vl),
            "yosys_prep" => Ok(Step::YosysPrep),
            "sby" => Ok(Step::Sby),
            "v2c" => Ok(Step::V2c),
            "esbmc" => Ok(Step::Esbmc),
            other => anyhow::bail!(
                "unknown pipeline step: {other} (expected vhd2vl, yosys_prep, sby, v2c or esbmc)"
            ),
        }
    }
}

/// Derived outcome for one design+step pair. Never stored in the summary;
/// always recomputed from the step result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Skip,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Skip => "SKIP",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OK" => Ok(Status::Ok),
            "SKIP" => Ok(Status::Skip),
            "FAIL" => Ok(Status::Fail),
            other => anyhow::bail!("unknown status: {other} (expected OK, SKIP or FAIL)"),
        }
    }
}

/// Raw result of running one pipeline tool, as written by the pipeline runner.
/// Every field is optional on the wire; absent fields default to false/empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepResult {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub skipped: bool,
    /// Tool command line that produced this result. Display only.
    #[serde(default)]
    pub cmd: String,
}

/// Paths of artifacts the pipeline generated for a design. Display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    #[serde(default)]
    pub verilog: String,
    #[serde(default)]
    pub verilog_prep: String,
    #[serde(default)]
    pub yosys_json: String,
    #[serde(default)]
    pub c: String,
    #[serde(default)]
    pub harness: String,
    #[serde(default)]
    pub common_ast: String,
}

/// One entry of the summary: a single verification run of a design.
///
/// Every field is defaulted at the ingestion boundary so a malformed record
/// parses and degrades (missing steps derive to FAIL, empty design never
/// matches a text filter) instead of failing the whole summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignRecord {
    #[serde(default)]
    pub design: String,
    #[serde(default)]
    pub vhdl: String,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub steps: BTreeMap<String, StepResult>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub generated: GeneratedArtifacts,
}

impl DesignRecord {
    /// Derived status for one pipeline step.
    ///
    /// Total over any record: a missing entry behaves like an all-false
    /// result, and `skipped` wins over `ok`.
    pub fn step_status(&self, step: Step) -> Status {
        match self.steps.get(step.as_str()) {
            Some(r) if r.skipped => Status::Skip,
            Some(r) if r.ok => Status::Ok,
            _ => Status::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_parses_and_derives_fail_everywhere() {
        let record: DesignRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.design, "");
        for step in Step::ALL {
            assert_eq!(record.step_status(step), Status::Fail);
        }
    }

    #[test]
    fn skipped_wins_over_ok() {
        let record: DesignRecord =
            serde_json::from_str(r#"{"steps":{"sby":{"ok":true,"skipped":true}}}"#).unwrap();
        assert_eq!(record.step_status(Step::Sby), Status::Skip);
    }

    #[test]
    fn ok_step_derives_ok() {
        let record: DesignRecord =
            serde_json::from_str(r#"{"steps":{"vhd2vl":{"ok":true}}}"#).unwrap();
        assert_eq!(record.step_status(Step::Vhd2vl), Status::Ok);
        assert_eq!(record.step_status(Step::Esbmc), Status::Fail);
    }

    #[test]
    fn runner_extras_on_step_results_are_tolerated() {
        // The pipeline runner also writes fallback/src fields on fallback runs.
        let record: DesignRecord = serde_json::from_str(
            r#"{"steps":{"vhd2vl":{"ok":true,"fallback":true,"src":"inputs_verilog/alu.v"}}}"#,
        )
        .unwrap();
        assert_eq!(record.step_status(Step::Vhd2vl), Status::Ok);
    }

    #[test]
    fn step_and_status_wire_names_round_trip() {
        for step in Step::ALL {
            assert_eq!(step.as_str().parse::<Step>().unwrap(), step);
        }
        for status in [Status::Ok, Status::Skip, Status::Fail] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("elaborate".parse::<Step>().is_err());
        assert!("WARN".parse::<Status>().is_err());
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!("fail".parse::<Status>().unwrap(), Status::Fail);
        assert_eq!("Skip".parse::<Status>().unwrap(), Status::Skip);
    }
}
