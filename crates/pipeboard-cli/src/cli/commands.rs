use super::args::*;
use pipeboard_core::filter::{self, FilterOutcome, FilterQuery};
use pipeboard_core::model::{DesignRecord, Status, Step};
use pipeboard_core::report;
use pipeboard_core::report::html::HtmlOptions;
use pipeboard_core::source::{FileSource, HttpSource, SummarySource};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const STEP_FAILED: i32 = 1;
    pub const LOAD_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Show(args) => cmd_show(args).await,
        Command::Html(args) => cmd_html(args).await,
        Command::Csv(args) => cmd_csv(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

fn source_for(args: &SourceArgs) -> Box<dyn SummarySource> {
    match &args.url {
        Some(url) => Box::new(HttpSource::new(url.clone())),
        None => Box::new(FileSource::new(&args.summary)),
    }
}

/// Load the summary, surfacing a failure as the single status line and no
/// table. Returns None when loading failed.
async fn load_or_report(args: &SourceArgs) -> Option<Vec<DesignRecord>> {
    match source_for(args).load().await {
        Ok(records) => Some(records),
        Err(e) => {
            eprintln!("{e:#}");
            None
        }
    }
}

async fn cmd_show(args: ShowArgs) -> anyhow::Result<i32> {
    let query =
        FilterQuery::from_controls(&args.filter.query, &args.filter.step, &args.filter.status)?;
    let Some(records) = load_or_report(&args.source).await else {
        return Ok(exit_codes::LOAD_ERROR);
    };
    let outcome = filter::apply(&records, &query);
    report::console::print_summary(&outcome);

    if args.strict && any_failing(&outcome) {
        return Ok(exit_codes::STEP_FAILED);
    }
    Ok(exit_codes::OK)
}

fn any_failing(outcome: &FilterOutcome<'_>) -> bool {
    outcome
        .rows
        .iter()
        .any(|r| Step::ALL.iter().any(|s| r.step_status(*s) == Status::Fail))
}

async fn cmd_html(args: HtmlArgs) -> anyhow::Result<i32> {
    let query =
        FilterQuery::from_controls(&args.filter.query, &args.filter.step, &args.filter.status)?;
    let Some(records) = load_or_report(&args.source).await else {
        return Ok(exit_codes::LOAD_ERROR);
    };
    let outcome = filter::apply(&records, &query);

    let opts = HtmlOptions {
        title: args.title,
        link_marker: args.link_marker,
        link_prefix: args.link_prefix,
    };
    report::html::write_html(&outcome, &query, &opts, &args.out)?;
    eprintln!(
        "wrote {} ({} of {} records)",
        args.out.display(),
        outcome.matched,
        outcome.total
    );
    Ok(exit_codes::OK)
}

async fn cmd_csv(args: CsvArgs) -> anyhow::Result<i32> {
    let query =
        FilterQuery::from_controls(&args.filter.query, &args.filter.step, &args.filter.status)?;
    let Some(records) = load_or_report(&args.source).await else {
        return Ok(exit_codes::LOAD_ERROR);
    };
    let outcome = filter::apply(&records, &query);

    report::csv::write_csv(&outcome, &args.out)?;
    eprintln!(
        "wrote {} ({} of {} records)",
        args.out.display(),
        outcome.matched,
        outcome.total
    );
    Ok(exit_codes::OK)
}
