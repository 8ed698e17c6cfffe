use serde::{Deserialize, Serialize};

use crate::view::Strip;

/// Page geometry for laying out a printed strip. Units are the caller's
/// (points for a printer, rows for a terminal).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    /// Heading text drawn on the top margin.
    pub heading: String,
    pub top_margin: f32,
    /// Horizontal offset of the heading and every entry.
    pub indent: f32,
    /// Height of one printed line.
    pub line_height: f32,
    /// Lines between the heading and the first entry.
    pub heading_gap_lines: u32,
    /// Prefix drawn before each entry's text.
    pub entry_prefix: String,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            heading: "Calculations:".into(),
            top_margin: 100.0,
            indent: 20.0,
            line_height: 16.0,
            heading_gap_lines: 3,
            entry_prefix: "\t".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One positioned string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: FontStyle,
    /// Line index from the top margin; the heading is line 0.
    pub line: u32,
}

/// Result of laying out one page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrintedPage {
    pub commands: Vec<DrawCommand>,
    /// Always `false`: a strip prints on a single page.
    pub has_more_pages: bool,
}

impl PrintedPage {
    /// Render as plain text, one output line per layout line, blank lines
    /// included.
    pub fn render_text(&self) -> String {
        let mut rows: Vec<&str> = Vec::new();
        for command in &self.commands {
            let line = command.line as usize;
            if rows.len() <= line {
                rows.resize(line + 1, "");
            }
            rows[line] = &command.text;
        }
        let mut out = rows.join("\n");
        out.push('\n');
        out
    }
}

/// Lay out `strip` on one page: the heading, a gap, then one line per entry
/// in strip order. Checkpoints are drawn bold.
pub fn print_page(strip: &Strip, geometry: &PageGeometry) -> PrintedPage {
    let y_of = |line: u32| geometry.top_margin + line as f32 * geometry.line_height;

    let mut commands = Vec::with_capacity(strip.len() + 1);
    commands.push(DrawCommand {
        text: geometry.heading.clone(),
        x: geometry.indent,
        y: y_of(0),
        style: FontStyle::Bold,
        line: 0,
    });

    let first = geometry.heading_gap_lines + 1;
    for (line, row) in (first..).zip(strip.iter()) {
        commands.push(DrawCommand {
            text: format!("{}{}", geometry.entry_prefix, row.text()),
            x: geometry.indent,
            y: y_of(line),
            style: if row.entry.is_checkpoint() {
                FontStyle::Bold
            } else {
                FontStyle::Regular
            },
            line,
        });
    }

    PrintedPage {
        commands,
        has_more_pages: false,
    }
}
