//! Terminal front end for the shift picker puzzle.
//!
//! Reads one [`Command`] per line, forwards it to a [`Game`] and redraws the
//! board after every command.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use shiftpick_core::{GridError, ShiftGrid};
use shiftpick_game::{Game, build_view_model};

pub use self::{
    command::{Command, CommandError, USAGE},
    render::Frame,
};

pub mod command;
pub mod render;

/// The built-in 7×6 puzzle: one fixed shift per participant on a diagonal.
pub const DEFAULT_PUZZLE: &str = "\
A.....
.B....
..D...
...A..
....E.
.....D
E.....
";

/// Errors that stop the front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The puzzle file could not be read.
    #[display("failed to read puzzle file {}: {source}", path.display())]
    ReadPuzzle {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The initial configuration is malformed.
    #[display("invalid puzzle: {_0}")]
    Grid(#[from] GridError),
    /// Reading commands or writing the board failed.
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
}

/// Loads an initial configuration from `path`, or the built-in puzzle.
///
/// # Errors
///
/// Returns [`AppError::ReadPuzzle`] if the file cannot be read and
/// [`AppError::Grid`] if its content is not a valid grid.
pub fn load_puzzle(path: Option<&Path>) -> Result<ShiftGrid, AppError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| AppError::ReadPuzzle {
            path: path.to_owned(),
            source,
        })?,
        None => DEFAULT_PUZZLE.to_owned(),
    };
    let grid = text.parse::<ShiftGrid>()?;
    log::info!("loaded a {} puzzle", grid.dimensions());
    Ok(grid)
}

/// Runs the command loop until `quit` or end of input.
///
/// Malformed commands, including lines that are not valid UTF-8, print an
/// error line and the loop continues.
///
/// # Errors
///
/// Returns [`AppError::Io`] if reading `input` or writing `output` fails.
pub fn run(
    game: &mut Game,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), AppError> {
    write!(output, "{}", Frame(&build_view_model(game)))?;
    writeln!(output, "(type `?` for commands)")?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        log::debug!("command {command:?}");

        let effect = match command {
            Command::Quit => break,
            Command::Usage => {
                writeln!(output, "{USAGE}")?;
                continue;
            }
            Command::Action(action) => game.handle(action),
            Command::Key(key) => game.handle_key(key),
        };

        write!(output, "{}", Frame(&build_view_model(game)))?;
        if effect.solved {
            writeln!(output, "*** Well done! The roster is complete. ***")?;
        }
    }
    output.flush()?;
    Ok(())
}
