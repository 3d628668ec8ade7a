use crate::core::layout::LayoutConfig;
use crate::core::{Page, Slot};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Presentation settings for the printable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TicketStyle {
    pub page_size: String,
    pub page_margin: String,
    pub sheet_width: String,
    pub sheet_height: String,
    pub font_family: String,
    pub grid_gap: String,
    pub grid_max_width: String,
    pub ticket_width: String,
    pub ticket_height: String,
    pub keep_color: String,
    pub draw_color: String,
    /// Label of the half the participant keeps.
    pub keep_label: String,
    /// Label of the half that goes into the draw.
    pub draw_label: String,
}

impl Default for TicketStyle {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            page_margin: "2cm".to_string(),
            sheet_width: "210mm".to_string(),
            sheet_height: "297mm".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            grid_gap: "0.8cm".to_string(),
            grid_max_width: "17cm".to_string(),
            ticket_width: "320px".to_string(),
            ticket_height: "90px".to_string(),
            keep_color: "#f0f7ff".to_string(),
            draw_color: "#fff0f0".to_string(),
            keep_label: "Keep".to_string(),
            draw_label: "Draw".to_string(),
        }
    }
}

/// Today's local date in the stamp format printed on tickets.
pub fn today_stamp() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// Escaped once per document, shared by every ticket.
struct TicketText {
    organization: String,
    date: String,
    keep_label: String,
    draw_label: String,
}

pub struct TicketRenderer {
    style: TicketStyle,
    layout: LayoutConfig,
}

impl TicketRenderer {
    pub fn new(style: TicketStyle, layout: LayoutConfig) -> Self {
        Self { style, layout }
    }

    pub fn render_document(&self, pages: &[Page], organization: &str, date: &str) -> String {
        let text = TicketText {
            organization: escape_html(organization),
            date: escape_html(date),
            keep_label: escape_html(&self.style.keep_label),
            draw_label: escape_html(&self.style.draw_label),
        };

        let mut html = String::with_capacity(4096 + pages.len() * self.layout.capacity() * 900);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", text.organization);
        html.push_str("<style>\n");
        html.push_str(&self.stylesheet());
        html.push_str("</style>\n</head>\n<body>\n");

        for page in pages {
            self.render_page(&mut html, page, &text);
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    pub fn stylesheet(&self) -> String {
        let s = &self.style;
        format!(
            r#"@page {{
    size: {page_size};
    margin: {page_margin};
}}
body {{
    margin: 0;
    padding: 0;
    font-family: {font_family};
    width: 100%;
}}
.page {{
    box-sizing: border-box;
    padding: 0;
    width: 100%;
    break-after: page;
    page-break-after: always;
}}
.page:last-of-type {{
    break-after: auto;
    page-break-after: auto;
}}
.ticket-container {{
    display: grid;
    grid-template-columns: repeat({columns}, 1fr);
    grid-template-rows: repeat({rows}, auto);
    grid-auto-flow: column;
    gap: {grid_gap};
    justify-content: center;
    align-items: start;
    break-inside: avoid;
    page-break-inside: avoid;
    margin: 0 auto;
    max-width: {grid_max_width};
}}
.ticket {{
    display: flex;
    border: 2px solid #ccc;
    position: relative;
    height: {ticket_height};
    width: {ticket_width};
    margin: 0 auto;
    break-inside: avoid;
    page-break-inside: avoid;
}}
.ticket-half {{
    flex: 1;
    padding: 12px;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
}}
.ticket-half.keep {{
    background-color: {keep_color};
}}
.ticket-half.draw {{
    background-color: {draw_color};
}}
.ticket-title {{
    font-size: 11px;
    font-weight: bold;
    color: #333;
    margin-bottom: 3px;
}}
.ticket-type {{
    font-size: 13px;
    color: #666;
    margin-bottom: 4px;
}}
.ticket-number {{
    font-size: 22px;
    font-weight: bold;
    color: #333;
}}
.ticket-date {{
    font-size: 11px;
    color: #666;
    margin-top: 4px;
}}
.cut-line {{
    border-right: 2px dashed #999;
    height: 100%;
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
}}
.empty-ticket {{
    visibility: hidden;
}}
@media print {{
    html, body {{
        width: {sheet_width};
        height: {sheet_height};
        margin: 0;
        padding: 0;
    }}
}}
"#,
            page_size = s.page_size,
            page_margin = s.page_margin,
            font_family = s.font_family,
            columns = self.layout.columns,
            rows = self.layout.rows,
            grid_gap = s.grid_gap,
            grid_max_width = s.grid_max_width,
            ticket_height = s.ticket_height,
            ticket_width = s.ticket_width,
            keep_color = s.keep_color,
            draw_color = s.draw_color,
            sheet_width = s.sheet_width,
            sheet_height = s.sheet_height,
        )
    }

    fn render_page(&self, html: &mut String, page: &Page, text: &TicketText) {
        html.push_str("<section class=\"page\">\n<div class=\"ticket-container\">\n");
        for index in self.layout.grid_order() {
            match page.slots.get(index).copied().unwrap_or(Slot::Empty) {
                Slot::Ticket(number) => render_ticket(html, number, text),
                Slot::Empty => {
                    html.push_str("<div class=\"ticket empty-ticket\" aria-hidden=\"true\"></div>\n")
                }
            }
        }
        html.push_str("</div>\n</section>\n");
    }
}

fn render_ticket(html: &mut String, number: u32, text: &TicketText) {
    html.push_str("<div class=\"ticket\">\n");
    render_half(html, "keep", &text.keep_label, number, text);
    html.push_str("<div class=\"cut-line\"></div>\n");
    render_half(html, "draw", &text.draw_label, number, text);
    html.push_str("</div>\n");
}

fn render_half(html: &mut String, class: &str, label: &str, number: u32, text: &TicketText) {
    let _ = write!(
        html,
        "<div class=\"ticket-half {class}\">\n\
         <div class=\"ticket-title\">{organization}</div>\n\
         <div class=\"ticket-type\">{label}</div>\n\
         <div class=\"ticket-number\">No. {number}</div>\n\
         <div class=\"ticket-date\">{date}</div>\n\
         </div>\n",
        organization = text.organization,
        date = text.date,
    );
}
