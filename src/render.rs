//! HTML rendering of frequency reports.
//!
//! Both report modes are pure formatting passes: all counting, selection, and
//! classification has already happened by the time a renderer runs. Each
//! renderer returns the report as a sequence of lines so the I/O boundary can
//! write them wherever it likes.

use crate::cloud::TagCloud;
use crate::frequency::FrequencyTable;

/// Stylesheet that defines the `f14`/`f26`/`f48` font classes.
const CLOUD_STYLESHEET: &str =
  "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Renders a tag cloud as an HTML page.
///
/// The page title and heading read `Top {n} words in {source}`. Entries are
/// emitted in the cloud's own order, which is alphabetical, one `<span>` per
/// word carrying its weight tier as a CSS class and its raw count as a hover
/// title.
pub fn render_cloud(cloud: &TagCloud, source: &str) -> Vec<String> {
  let heading = format!("Top {} words in {}", cloud.len(), source);

  let mut lines = vec![
    "<html>".to_string(),
    "<head>".to_string(),
    format!("<title>{heading}</title>"),
    format!("<link href=\"{CLOUD_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"),
    "</head>".to_string(),
    "<body>".to_string(),
    format!("<h2>{heading}</h2>"),
    "<hr>".to_string(),
    "<div class=\"cdiv\">".to_string(),
    "<p class=\"cbox\">".to_string(),
  ];

  for entry in &cloud.entries {
    lines.push(format!(
      "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>",
      entry.tier.css_class(),
      entry.count,
      entry.word,
    ));
  }

  lines.push("</p>".to_string());
  lines.push("</div>".to_string());
  lines.push("</body>".to_string());
  lines.push("</html>".to_string());
  lines
}

/// Renders the full frequency table as an alphabetical HTML table.
///
/// One row per distinct word, sorted ascending. Keys are unique, so the order
/// is total without a tie-break.
pub fn render_table(table: &FrequencyTable, source: &str) -> Vec<String> {
  let mut lines = vec![
    "<html>".to_string(),
    "<head>".to_string(),
    format!("<title>Words Counted in {source}</title>"),
    "</head>".to_string(),
    "<body>".to_string(),
    format!("<h2>Words Counted in {source}</h2>"),
    "<hr>".to_string(),
    "<table border=\"1\">".to_string(),
    "<tr>".to_string(),
    "<th>Words</th>".to_string(),
    "<th>Counts</th>".to_string(),
    "</tr>".to_string(),
  ];

  let mut rows = table.snapshot();
  rows.sort_by(|(word_a, _), (word_b, _)| word_a.cmp(word_b));

  for (word, count) in rows {
    lines.push("<tr>".to_string());
    lines.push(format!("<td>{word}</td>"));
    lines.push(format!("<td>{count}</td>"));
    lines.push("</tr>".to_string());
  }

  lines.push("</table>".to_string());
  lines.push("</body>".to_string());
  lines.push("</html>".to_string());
  lines
}
