use crate::filter::FilterOutcome;
use crate::model::Step;
use std::path::Path;

/// Write the filtered summary as CSV, one row per kept design with the five
/// derived step statuses and the notes joined into one column.
pub fn write_csv(outcome: &FilterOutcome<'_>, out: &Path) -> anyhow::Result<()> {
    let mut csv = String::from("design,vhd2vl,yosys_prep,sby,v2c,esbmc,notes\n");

    for r in &outcome.rows {
        let statuses: Vec<&str> = Step::ALL
            .iter()
            .map(|s| r.step_status(*s).as_str())
            .collect();
        csv.push_str(&format!(
            "{},{},{}\n",
            escape_field(&r.design),
            statuses.join(","),
            escape_field(&r.notes.join(" | "))
        ));
    }

    std::fs::write(out, csv)?;
    Ok(())
}

fn escape_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
