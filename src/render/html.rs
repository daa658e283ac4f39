//! Self-contained HTML display surface.
//!
//! Builds a single document with embedded CSS and a small tab-switcher
//! script; no external assets, works offline from a `file://` URL. Output
//! is deterministic: the same call sequence always yields the same bytes.

use crate::render::surface::DisplaySurface;
use crate::render::table::ReportTable;

/// `DisplaySurface` that accumulates an HTML document.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    title: String,
    icon: String,
    body: String,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the surface and produce the full HTML document.
    pub fn finish(self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{icon} {title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
{body}    </div>
    <script>{js}</script>
</body>
</html>"#,
            icon = escape_html(&self.icon),
            title = escape_html(&self.title),
            css = PAGE_CSS,
            body = self.body,
            js = TAB_SCRIPT,
        )
    }

    fn push_line(&mut self, markup: &str) {
        self.body.push_str(markup);
        self.body.push('\n');
    }
}

impl DisplaySurface for HtmlSurface {
    fn set_page_metadata(&mut self, title: &str, icon: &str) {
        self.title = title.to_string();
        self.icon = icon.to_string();
    }

    fn styled_block(&mut self, markup: &str) {
        // Trusted markup from the renderer's static blocks, passed through.
        self.push_line(markup);
    }

    fn header(&mut self, text: &str) {
        self.push_line(&format!("<h2>{}</h2>", escape_html(text)));
    }

    fn subheader(&mut self, text: &str) {
        self.push_line(&format!("<h3>{}</h3>", escape_html(text)));
    }

    fn begin_tabs(&mut self, labels: &[&str]) {
        let buttons: String = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let active = if i == 0 { " active" } else { "" };
                format!(
                    "<button class=\"tab-button{active}\" onclick=\"showTab({i})\">{}</button>",
                    escape_html(label)
                )
            })
            .collect();
        self.push_line(&format!("<div class=\"tab-bar\">{buttons}</div>"));
    }

    fn begin_tab(&mut self, index: usize) {
        let active = if index == 0 { " active" } else { "" };
        self.push_line(&format!("<div class=\"tab-panel{active}\">"));
    }

    fn end_tab(&mut self) {
        self.push_line("</div>");
    }

    fn end_tabs(&mut self) {}

    fn metric(&mut self, label: &str, value: &str, help: Option<&str>) {
        let help_attr = help
            .map(|h| format!(" title=\"{}\"", escape_html(h)))
            .unwrap_or_default();
        self.push_line(&format!(
            "<div class=\"metric\"{help_attr}>\
<div class=\"label\">{}</div>\
<div class=\"value\">{}</div>\
</div>",
            escape_html(label),
            escape_html(value),
        ));
    }

    fn table(&mut self, table: &ReportTable) {
        let mut html = String::from("<table class=\"report-table\"><thead><tr><th></th>");
        for column in &table.columns {
            html.push_str(&format!("<th>{}</th>", escape_html(column)));
        }
        html.push_str("</tr></thead><tbody>");

        for row in &table.rows {
            html.push_str(&format!(
                "<tr><th class=\"row-label\">{}</th>",
                escape_html(&row.label)
            ));
            for cell in &row.cells {
                let (background, foreground) = gradient_color(cell.intensity);
                html.push_str(&format!(
                    "<td style=\"background-color:{background};color:{foreground}\">{}</td>",
                    escape_html(&cell.text)
                ));
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        self.push_line(&html);
    }

    fn text_block(&mut self, label: &str, content: &str, height_hint: u32) {
        self.push_line(&format!(
            "<div class=\"text-block\">\
<div class=\"label\">{}</div>\
<pre style=\"min-height:{height_hint}px\">{}</pre>\
</div>",
            escape_html(label),
            escape_html(content),
        ));
    }

    fn divider(&mut self) {
        self.push_line("<hr class=\"divider\">");
    }
}

/// Sequential blue gradient, light at 0 to saturated at 1, used for the
/// per-column color cue. Returns (background, text).
fn gradient_color(intensity: f64) -> (String, &'static str) {
    let t = intensity.clamp(0.0, 1.0);
    let lerp = |from: f64, to: f64| (from + (to - from) * t).round() as u8;

    let r = lerp(247.0, 8.0);
    let g = lerp(251.0, 48.0);
    let b = lerp(255.0, 107.0);

    let foreground = if t > 0.6 { "#ffffff" } else { "#2c3e50" };
    (format!("#{r:02x}{g:02x}{b:02x}"), foreground)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_CSS: &str = r#"
body { font-family: Arial, sans-serif; margin: 40px; background: #f8f9fa; color: #2c3e50; }
.container { max-width: 1100px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.page-header { text-align: center; margin-bottom: 30px; }
.page-header h1 { margin: 0 0 10px 0; }
.page-header .subtitle { color: #7f8c8d; }
.butterfly-icon { text-align: center; margin-bottom: 20px; }
.tab-bar { display: flex; gap: 8px; border-bottom: 2px solid #e0e0e0; margin-bottom: 20px; }
.tab-button { border: none; background: none; padding: 10px 18px; cursor: pointer; font-size: 15px; color: #7f8c8d; border-bottom: 2px solid transparent; margin-bottom: -2px; }
.tab-button.active { color: #3498db; border-bottom-color: #3498db; font-weight: bold; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
.metric { display: inline-block; vertical-align: top; background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 15px; margin: 0 10px 15px 0; min-width: 180px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.metric .label { font-weight: bold; color: #2c3e50; margin-bottom: 5px; }
.metric .value { font-size: 24px; color: #3498db; }
.report-table { border-collapse: collapse; margin: 15px 0; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.report-table th, .report-table td { padding: 10px 16px; text-align: right; border-bottom: 1px solid #ddd; }
.report-table thead th { background: #3498db; color: white; }
.report-table .row-label { text-align: left; background: #f8f9fa; }
.text-block { display: inline-block; vertical-align: top; margin-bottom: 15px; }
.text-block .label { font-weight: bold; margin-bottom: 5px; }
.text-block pre { background: #f8f9fa; border: 1px solid #e0e0e0; border-radius: 6px; padding: 10px; min-width: 260px; margin: 0; }
.divider { border: none; border-top: 1px solid #e0e0e0; margin: 25px 0; }
.page-footer { text-align: center; color: #7f8c8d; margin-top: 40px; padding-top: 20px; border-top: 1px solid #e0e0e0; }
"#;

const TAB_SCRIPT: &str = r#"
function showTab(index) {
    document.querySelectorAll('.tab-panel').forEach(function (panel, i) {
        panel.classList.toggle('active', i === index);
    });
    document.querySelectorAll('.tab-button').forEach(function (button, i) {
        button.classList.toggle('active', i === index);
    });
}
"#;
