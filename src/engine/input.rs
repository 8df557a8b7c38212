//! The human side of a turn: where moves (or a request to stop) come from.

use std::collections::VecDeque;

use crate::core::Move;
use crate::error::{Error, Result};

/// Why the session is ending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitReason {
    /// The player asked to stop.
    Requested,
    /// Input was cut off (Ctrl-C, end of input, broken terminal).
    Interrupted,
}

/// What the input collaborator produced for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(Move),
    Quit(QuitReason),
}

/// Supplies the human's moves.
///
/// `next_move` may block for as long as it likes. It only returns once it
/// has a valid move or the session should end; reprompting on bad input is
/// the implementor's business.
pub trait MoveSource {
    fn next_move(&mut self) -> InputEvent;
}

/// Parse one line of player input: `r`, `p`, `s` or `q`, any case.
///
/// ```
/// use evil_rps::core::Move;
/// use evil_rps::engine::{parse_command, InputEvent, QuitReason};
///
/// assert_eq!(parse_command(" R ").unwrap(), InputEvent::Move(Move::Rock));
/// assert_eq!(parse_command("q").unwrap(), InputEvent::Quit(QuitReason::Requested));
/// assert!(parse_command("rock").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<InputEvent> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(InputEvent::Quit(QuitReason::Requested));
    }
    trimmed
        .parse::<Move>()
        .map(InputEvent::Move)
        .map_err(|_| Error::InvalidMove {
            input: trimmed.to_string(),
        })
}

/// A fixed list of moves, then `Quit`.
///
/// Deterministic stand-in for a person, used by tests and demos.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<Move>,
    on_exhausted: Option<QuitReason>,
}

impl ScriptedInput {
    /// Play `moves` in order, then request a quit.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            on_exhausted: None,
        }
    }

    /// End with an interruption instead of a quit request.
    #[must_use]
    pub fn then_interrupt(mut self) -> Self {
        self.on_exhausted = Some(QuitReason::Interrupted);
        self
    }

    /// Moves not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedInput {
    fn next_move(&mut self) -> InputEvent {
        match self.moves.pop_front() {
            Some(m) => InputEvent::Move(m),
            None => InputEvent::Quit(self.on_exhausted.unwrap_or(QuitReason::Requested)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_case_insensitive() {
        for (text, m) in [("r", Move::Rock), ("P", Move::Paper), (" s\n", Move::Scissors)] {
            assert_eq!(parse_command(text).unwrap(), InputEvent::Move(m));
        }
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("Q").unwrap(), InputEvent::Quit(QuitReason::Requested));
        assert_eq!(parse_command(" q ").unwrap(), InputEvent::Quit(QuitReason::Requested));
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "x", "rp", "quit", "1"] {
            assert!(
                matches!(parse_command(text), Err(Error::InvalidMove { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::new([Move::Rock, Move::Paper]);
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.next_move(), InputEvent::Move(Move::Rock));
        assert_eq!(input.next_move(), InputEvent::Move(Move::Paper));
        assert_eq!(input.next_move(), InputEvent::Quit(QuitReason::Requested));
        assert_eq!(input.next_move(), InputEvent::Quit(QuitReason::Requested));
    }

    #[test]
    fn test_scripted_interrupt() {
        let mut input = ScriptedInput::new([]).then_interrupt();
        assert_eq!(input.next_move(), InputEvent::Quit(QuitReason::Interrupted));
    }
}
