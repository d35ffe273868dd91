//! Plain-text drawing of a [`GameViewModel`].

use std::fmt::{self, Display, Write};

use shiftpick_core::{CellState, Position};
use shiftpick_game::{CellFlags, GameStatus, GameViewModel, HelpTopic};

const CELL_WIDTH: usize = 4;

fn cell_text(content: CellState, flags: CellFlags) -> [char; CELL_WIDTH] {
    let symbol = match content {
        CellState::Empty => '.',
        CellState::Assigned(shift) => shift.as_char().to_ascii_lowercase(),
        CellState::Fixed(shift) => shift.as_char(),
    };
    let mark = if flags.contains(CellFlags::VIOLATION) {
        '!'
    } else {
        ' '
    };
    if flags.contains(CellFlags::SELECTED) {
        ['[', symbol, mark, ']']
    } else {
        [' ', symbol, mark, ' ']
    }
}

/// Writes the grid with row/column labels and the coverage line.
///
/// Fixed cells print in upper case and player entries in lower case. The
/// selected cell is bracketed and cells in a violation carry a `!`.
pub fn write_grid(out: &mut impl Write, vm: &GameViewModel) -> fmt::Result {
    write!(out, "    ")?;
    for col in 0..vm.cols {
        write!(out, "{:^CELL_WIDTH$}", col + 1)?;
    }
    writeln!(out)?;

    for row in 0..vm.rows {
        write!(out, "{:>3} ", row + 1)?;
        for col in 0..vm.cols {
            let cell = vm.cell(Position::new(row, col));
            for ch in cell_text(cell.content, cell.flags) {
                out.write_char(ch)?;
            }
        }
        writeln!(out)?;
    }

    write!(out, "cov ")?;
    for column in &vm.columns {
        let text = if column.full {
            format!("{}*", column.score)
        } else {
            column.score.to_string()
        };
        write!(out, "{text:^CELL_WIDTH$}")?;
    }
    writeln!(out)
}

/// Writes the columns that still lack a shift, one line each.
pub fn write_missing(out: &mut impl Write, vm: &GameViewModel) -> fmt::Result {
    for (col, column) in vm.columns.iter().enumerate() {
        if !column.full {
            writeln!(out, "  day {} is missing {}", col + 1, column.missing)?;
        }
    }
    Ok(())
}

/// Writes the violation reasons and the status line.
pub fn write_status(out: &mut impl Write, vm: &GameViewModel) -> fmt::Result {
    for reason in &vm.reasons {
        writeln!(out, "! {reason}")?;
    }
    match vm.status {
        GameStatus::Solved => writeln!(out, "Solved: every day is covered and no rule is broken."),
        GameStatus::InProgress => writeln!(out, "In progress."),
    }
}

/// Writes a help overlay.
pub fn write_overlay(out: &mut impl Write, topic: HelpTopic) -> fmt::Result {
    let content = topic.content();
    writeln!(out, "== {} ==", content.title)?;
    writeln!(out, "{}", content.body)?;
    if let Some(asset) = content.asset {
        writeln!(out, "[media: {asset}]")?;
    }
    writeln!(out, "(type `close` to return to the puzzle)")
}

/// One full frame: the help overlay if one is open, otherwise the board.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a>(pub &'a GameViewModel);

impl Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        if let Some(topic) = vm.overlay {
            return write_overlay(f, topic);
        }
        write_grid(f, vm)?;
        write_missing(f, vm)?;
        write_status(f, vm)
    }
}

/// Renders one full frame into a string.
#[must_use]
pub fn render(vm: &GameViewModel) -> String {
    Frame(vm).to_string()
}
