use super::links::rebase_link;
use crate::filter::{FilterOutcome, FilterQuery};
use crate::model::{Status, Step};
use std::path::Path;

/// Rendering knobs for the dashboard page.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
    /// Path segment marking where stored artifact paths become
    /// browser-relative; see [`rebase_link`].
    pub link_marker: String,
    pub link_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Verification pipeline summary".into(),
            link_marker: "task04/".into(),
            link_prefix: "../".into(),
        }
    }
}

const STYLE: &str = "<style>\n\
body{font-family:system-ui,sans-serif;margin:24px;}\n\
table{border-collapse:collapse;width:100%;}\n\
th,td{border:1px solid #ddd;padding:6px 8px;text-align:left;font-size:14px;}\n\
th{background:#f5f5f5;}\n\
.meta{color:#555;}\n\
.tag{padding:2px 8px;border-radius:10px;font-size:12px;font-weight:600;}\n\
.tag.ok{background:#e6f4ea;color:#137333;}\n\
.tag.skip{background:#fef7e0;color:#b06000;}\n\
.tag.fail{background:#fce8e6;color:#c5221f;}\n\
</style>\n";

/// Write the filtered summary as a self-contained dashboard page. The page is
/// a static render of one filter evaluation; it performs no filtering itself.
pub fn write_html(
    outcome: &FilterOutcome<'_>,
    query: &FilterQuery,
    opts: &HtmlOptions,
    out: &Path,
) -> anyhow::Result<()> {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&opts.title)));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&opts.title)));
    html.push_str(&format!(
        "<p class=\"meta\">Items: {} (of {}){}</p>\n",
        outcome.matched,
        outcome.total,
        filter_echo(query)
    ));

    html.push_str(
        "<table>\n<thead><tr><th>Design</th><th>VHDL</th><th>Spec</th>\
         <th>vhd2vl</th><th>yosys_prep</th><th>sby</th><th>v2c</th><th>esbmc</th>\
         <th>AST</th><th>Notes</th></tr></thead>\n<tbody>\n",
    );
    for r in &outcome.rows {
        html.push_str("<tr>");
        html.push_str(&format!("<td><b>{}</b></td>", escape(&r.design)));
        html.push_str(&format!("<td>{}</td>", anchor(&r.vhdl, "VHDL", opts)));
        html.push_str(&format!("<td>{}</td>", anchor(&r.spec, "spec.json", opts)));
        for step in Step::ALL {
            html.push_str(&format!("<td>{}</td>", tag(r.step_status(step))));
        }
        html.push_str(&format!(
            "<td>{}</td>",
            anchor(&r.generated.common_ast, "ast.json", opts)
        ));
        html.push_str(&format!("<td>{}</td>", escape(&r.notes.join(" • "))));
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

    std::fs::write(out, html)?;
    Ok(())
}

fn filter_echo(query: &FilterQuery) -> String {
    let mut parts = Vec::new();
    if !query.text.trim().is_empty() {
        parts.push(format!("text ~ \"{}\"", escape(query.text.trim())));
    }
    if let Some(step) = query.step {
        parts.push(format!("step = {step}"));
    }
    if let Some(status) = query.status {
        parts.push(format!("status = {status}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}

fn anchor(path: &str, label: &str, opts: &HtmlOptions) -> String {
    match rebase_link(path, &opts.link_marker, &opts.link_prefix) {
        Some(href) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
            escape(&href),
            escape(label)
        ),
        None => String::new(),
    }
}

fn tag(status: Status) -> String {
    let cls = match status {
        Status::Ok => "ok",
        Status::Skip => "skip",
        Status::Fail => "fail",
    };
    format!("<span class=\"tag {}\">{}</span>", cls, status.as_str())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
