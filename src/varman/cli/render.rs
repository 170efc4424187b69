//! Terminal rendering for the board grid, the image catalog and messages.
//!
//! Layout math (widths, truncation, padding) is done on plain text with
//! `unicode-width` before any color is applied, so escape codes never count
//! towards a column's width.

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use varman::api::{CmdMessage, MessageLevel};
use varman::board::Board;
use varman::catalog::CatalogEntry;
use varman::config::VarmanConfig;

/// Fallback when the terminal size is unknown (pipes, tests).
pub const LINE_WIDTH: usize = 100;
pub const SUMMARY_WIDTH: usize = 28;
pub const SLOT_WIDTH: usize = 18;
pub const DRAG_MARKER: &str = "⋮";
pub const EMPTY_SLOT: &str = "+ Add Design";

const ID_HEADER: &str = "#";
const SUMMARY_HEADER: &str = "Product Filter";
const GAP: &str = "  ";

pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

/// Renders the board as a grid: one row per filter, one column per variant.
pub fn render_board(board: &Board, max_width: usize) -> String {
    if board.is_empty() {
        return format!("{}\n", "No product filters. Add one with `varman add`.".dimmed());
    }

    let id_width = board
        .filters()
        .iter()
        .map(|f| f.id.as_str().width())
        .chain(std::iter::once(ID_HEADER.width()))
        .max()
        .unwrap_or(1);

    let summary_width = board
        .filters()
        .iter()
        .map(|f| f.summary().width())
        .chain(std::iter::once(SUMMARY_HEADER.width()))
        .max()
        .unwrap_or(0)
        .min(SUMMARY_WIDTH);

    let labels = board.column_labels();
    let slot_width = board
        .filters()
        .iter()
        .flat_map(|f| f.variants.iter().filter_map(|v| v.name()))
        .map(UnicodeWidthStr::width)
        .chain(labels.iter().map(|l| l.width()))
        .chain(std::iter::once(EMPTY_SLOT.width()))
        .max()
        .unwrap_or(0)
        .min(SLOT_WIDTH);

    let mut out = String::new();

    // "  " under the drag marker column
    let mut header = format!(
        "{}  {}{}",
        pad(ID_HEADER, id_width),
        GAP,
        pad(SUMMARY_HEADER, summary_width)
    );
    for label in &labels {
        header.push_str(GAP);
        header.push_str(&pad(label, slot_width));
    }
    out.push_str(&format!("{}\n", clip(&header, max_width).bold()));

    for filter in board.filters() {
        let mut line = String::new();
        line.push_str(&format!(
            "{} {}{}",
            pad(filter.id.as_str(), id_width).yellow(),
            DRAG_MARKER.dimmed(),
            GAP
        ));
        let mut used = id_width + 2 + GAP.width();

        let summary = pad(&filter.summary(), summary_width);
        used += summary.width();
        line.push_str(&summary);

        for variant in &filter.variants {
            let cell_width = GAP.width() + slot_width;
            if used + cell_width > max_width {
                line.push_str(&format!("{}…", GAP).dimmed().to_string());
                break;
            }
            used += cell_width;
            line.push_str(GAP);
            match variant.name() {
                Some(name) => line.push_str(&pad(name, slot_width).green().to_string()),
                None => line.push_str(&pad(EMPTY_SLOT, slot_width).dimmed().to_string()),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

pub fn render_images(entries: &[CatalogEntry]) -> String {
    let name_width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);
    let num_width = entries
        .iter()
        .map(|e| e.number.to_string().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|e| {
            format!(
                "{:>num_width$}. {}{}{}\n",
                e.number,
                pad(&e.name, name_width),
                GAP,
                e.url.dimmed(),
                num_width = num_width
            )
        })
        .collect()
}

pub fn render_config(config: &VarmanConfig) -> String {
    VarmanConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let text = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", text)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Truncates to `width` columns (with an ellipsis) and right-pads with spaces.
fn pad(s: &str, width: usize) -> String {
    let mut text = truncate_to_width(s, width);
    let fill = width.saturating_sub(text.width());
    text.push_str(&" ".repeat(fill));
    text
}

fn clip(s: &str, max_width: usize) -> String {
    truncate_to_width(s.trim_end(), max_width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use varman::catalog::Catalog;
    use varman::ident::{FixedClock, VariantIds};
    use varman::model::ImageRef;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn board_grid_has_header_and_rows() {
        plain();
        let board = Board::default()
            .set_variant_image(0, 1, ImageRef::new("https://picsum.photos/id/5/200", "Image 5"))
            .unwrap();
        let out = render_board(&board, LINE_WIDTH);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#"));
        assert!(lines[0].contains("Product Filter"));
        assert!(lines[0].contains("Primary Variant"));
        assert!(lines[0].contains("Variant 2"));

        assert!(lines[1].starts_with("1 ⋮"));
        assert!(lines[1].contains("Image 5"));
        assert!(lines[1].contains(EMPTY_SLOT));

        assert!(lines[2].starts_with("2 ⋮"));
        assert!(lines[2].contains("Filter 2"));
    }

    #[test]
    fn columns_line_up() {
        plain();
        let mut ids = VariantIds::with_clock(FixedClock(1));
        let board = Board::default()
            .add_filter(&mut ids, Some("A much longer product filter label than fits"))
            .add_variant_column(&mut ids);
        let out = render_board(&board, 200);
        let positions: Vec<usize> = out
            .lines()
            .skip(1)
            .map(|l| l[..l.find(EMPTY_SLOT).unwrap()].width())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] == w[1]));
        assert!(out.contains('…'));
    }

    #[test]
    fn narrow_terminal_elides_columns() {
        plain();
        let mut ids = VariantIds::with_clock(FixedClock(1));
        let mut board = Board::default();
        for _ in 0..6 {
            board = board.add_variant_column(&mut ids);
        }
        let out = render_board(&board, 60);
        for line in out.lines() {
            assert!(line.width() <= 61, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn empty_board_hint() {
        plain();
        assert!(render_board(&Board::empty(), LINE_WIDTH).contains("varman add"));
    }

    #[test]
    fn image_list_is_numbered() {
        plain();
        let out = render_images(&Catalog::default().search("image 2"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("2. Image 2"));
        assert!(lines[1].contains("https://picsum.photos/id/20/200"));
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::warning("hmm")]);
        assert_eq!(out, "done\nhmm\n");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
