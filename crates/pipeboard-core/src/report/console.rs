use crate::filter::FilterOutcome;
use crate::model::{Status, Step};

/// Print the filtered summary as an aligned table on stderr, one row per
/// design with all five step statuses, followed by the "N of M" footer.
pub fn print_summary(outcome: &FilterOutcome<'_>) {
    let mut ok = 0usize;
    let mut skip = 0usize;
    let mut fail = 0usize;

    eprintln!();
    for r in &outcome.rows {
        let statuses: Vec<Status> = Step::ALL.iter().map(|s| r.step_status(*s)).collect();
        for st in &statuses {
            match st {
                Status::Ok => ok += 1,
                Status::Skip => skip += 1,
                Status::Fail => fail += 1,
            }
        }

        let icon = if statuses.contains(&Status::Fail) {
            "❌"
        } else if statuses.contains(&Status::Skip) {
            "⏭️"
        } else {
            "✅"
        };
        let cells: Vec<String> = Step::ALL
            .iter()
            .zip(&statuses)
            .map(|(step, st)| format!("{}:{}", step.as_str(), st))
            .collect();
        eprintln!("{} {:<20} {}", icon, r.design, cells.join("  "));
        if !r.notes.is_empty() {
            eprintln!("    {}", r.notes.join(" • "));
        }
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("Items: {} (of {})", outcome.matched, outcome.total);
    eprintln!("Steps: {} ok, {} skip, {} fail", ok, skip, fail);
}
