//! Line-oriented commands of the terminal front end.
//!
//! Each input line is one command. Cell coordinates are 1-based, matching
//! the row and column labels printed around the grid.

use std::str::{FromStr, SplitWhitespace};

use shiftpick_core::{Direction, Position, Shift};
use shiftpick_game::{Action, HelpTopic, Key};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the session.
    Action(Action),
    /// Forward a key press to the session.
    Key(Key),
    /// Print the command summary.
    Usage,
    /// Leave the program.
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    /// The line was blank.
    #[display("empty command")]
    Empty,
    /// The first word is not a known command.
    #[display("unknown command `{name}` (type `?` for a list)")]
    UnknownCommand {
        /// The unrecognised word.
        name: String,
    },
    /// A required argument was not given.
    #[display("`{command}` needs {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },
    /// More arguments than the command takes.
    #[display("`{command}` takes no argument `{extra}`")]
    UnexpectedArgument {
        /// The command being parsed.
        command: &'static str,
        /// The first surplus word.
        extra: String,
    },
    /// A coordinate was not a positive integer.
    #[display("`{value}` is not a row or column number")]
    InvalidCoordinate {
        /// The offending word.
        value: String,
    },
    /// A button label is neither a shift letter nor `.`.
    #[display("`{value}` is not a shift button (use A-E or .)")]
    InvalidButton {
        /// The offending word.
        value: String,
    },
    /// A key argument is not a single character.
    #[display("`{value}` is not a single key")]
    InvalidKey {
        /// The offending word.
        value: String,
    },
    /// The help topic is unknown.
    #[display("unknown help topic `{name}` (rules, walkthrough, autosolve)")]
    UnknownTopic {
        /// The unrecognised topic.
        name: String,
    },
}

/// Summary printed for `?`.
pub const USAGE: &str = "\
commands:
  click R C              select the cell at row R, column C
  up | down | left | right
                         move the selection
  key X                  press key X (letters outside A-E are ignored)
  btn X | btn .          press a shift button, or the empty button
  del                    clear the selected cell
  esc                    drop the selection
  clear                  reset the grid
  undo | redo            step through the edit history
  help [TOPIC]           open help: rules, walkthrough, autosolve
  close                  close help
  quit                   leave";

fn parse_coordinate(value: &str) -> Result<usize, CommandError> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandError::InvalidCoordinate {
            value: value.to_owned(),
        })
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

struct Args<'a> {
    command: &'static str,
    words: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                extra: extra.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

const COMMANDS: [&str; 17] = [
    "click", "up", "down", "left", "right", "key", "btn", "del", "esc", "clear", "undo", "redo",
    "help", "close", "quit", "exit", "?",
];

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let lower = name.to_ascii_lowercase();
        let Some(&command) = COMMANDS.iter().find(|c| **c == lower) else {
            return Err(CommandError::UnknownCommand {
                name: name.to_owned(),
            });
        };
        let mut args = Args { command, words };

        let parsed = match command {
            "click" => {
                let row = parse_coordinate(args.required("a row number")?)?;
                let col = parse_coordinate(args.required("a column number")?)?;
                Self::Action(Action::SelectCell(Position::new(row, col)))
            }
            "up" => Self::Key(Key::Arrow(Direction::Up)),
            "down" => Self::Key(Key::Arrow(Direction::Down)),
            "left" => Self::Key(Key::Arrow(Direction::Left)),
            "right" => Self::Key(Key::Arrow(Direction::Right)),
            "key" => {
                let value = args.required("a key")?;
                let ch = single_char(value).ok_or_else(|| CommandError::InvalidKey {
                    value: value.to_owned(),
                })?;
                Self::Key(Key::Char(ch))
            }
            "btn" => {
                let value = args.required("a shift letter or `.`")?;
                let shift = match single_char(value) {
                    Some('.') => None,
                    Some(ch) => Some(Shift::from_char(ch).ok_or_else(|| {
                        CommandError::InvalidButton {
                            value: value.to_owned(),
                        }
                    })?),
                    None => {
                        return Err(CommandError::InvalidButton {
                            value: value.to_owned(),
                        });
                    }
                };
                Self::Action(Action::shift_button(shift))
            }
            "del" => Self::Key(Key::Delete),
            "esc" => Self::Key(Key::Escape),
            "clear" => Self::Action(Action::ClearAll),
            "undo" => Self::Action(Action::Undo),
            "redo" => Self::Action(Action::Redo),
            "help" => {
                let topic = match args.words.next() {
                    Some(name) => HelpTopic::from_name(name).ok_or_else(|| {
                        CommandError::UnknownTopic {
                            name: name.to_owned(),
                        }
                    })?,
                    None => HelpTopic::Rules,
                };
                Self::Action(Action::OpenHelp(topic))
            }
            "close" => Self::Action(Action::CloseHelp),
            "?" => Self::Usage,
            _ => Self::Quit,
        };
        args.finish()?;
        Ok(parsed)
    }
}
