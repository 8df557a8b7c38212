//! Interactive terminal front end.
//!
//! Lines are read with `rustyline` on a dedicated reader thread. The main
//! thread waits on a channel that both the reader and the SIGINT/SIGTERM
//! handler feed, so Ctrl-C, `kill -INT` and end of input all end the session
//! like `q` does, even while a read is still blocked.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn, LevelFilter, SetLoggerError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::{parse_command, InputEvent, MoveSource, QuitReason, RoundReport};
use crate::error::{Error, Result};

const PROMPT: &str = ">>> ";

/// One line of input, or why there is none.
pub type LineResult = std::result::Result<String, ReadlineError>;

/// Line-editing terminal that doubles as the human `MoveSource`.
pub struct Terminal {
    prompts: Sender<String>,
    replies: Receiver<LineResult>,
}

impl Terminal {
    /// Attach to the controlling terminal and install the signal handler.
    ///
    /// # Errors
    ///
    /// Fails if the line editor cannot be created, the reader thread cannot
    /// be spawned, or a signal handler is already installed.
    pub fn new() -> Result<Self> {
        let (prompt_tx, prompt_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();

        ctrlc::set_handler(interrupter(reply_tx.clone()))?;
        spawn_reader(prompt_rx, reply_tx)?;

        Ok(Self::from_channels(prompt_tx, reply_rx))
    }

    fn from_channels(prompts: Sender<String>, replies: Receiver<LineResult>) -> Self {
        Self { prompts, replies }
    }

    /// Ask for the player's display name. `None` if input was cut off.
    pub fn prompt_name(&mut self) -> Option<String> {
        println!("What is your name?");
        self.read_line(PROMPT).ok()
    }

    fn read_line(&mut self, prompt: &str) -> LineResult {
        if self.prompts.send(prompt.to_string()).is_err() {
            return Err(ReadlineError::Eof);
        }
        self.replies.recv().unwrap_or(Err(ReadlineError::Eof))
    }
}

impl MoveSource for Terminal {
    fn next_move(&mut self) -> InputEvent {
        next_move_from(&mut |prompt: &str| self.read_line(prompt))
    }
}

/// Prompt until `read_line` yields a valid command or stops yielding lines.
///
/// Invalid text is reported and asked for again; nothing else happens.
pub fn next_move_from(read_line: &mut impl FnMut(&str) -> LineResult) -> InputEvent {
    loop {
        println!("What's your move? (r)ock, (p)aper, (s)cissors, or q to quit");
        match read_line(PROMPT) {
            Ok(line) => match parse_command(&line) {
                Ok(event) => return event,
                Err(_) => println!("That's not a valid move..."),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                return InputEvent::Quit(QuitReason::Interrupted);
            }
            Err(err) => {
                warn!("terminal read failed: {err}");
                return InputEvent::Quit(QuitReason::Interrupted);
            }
        }
    }
}

/// Signal handler body: wake whoever is waiting for a line.
fn interrupter(replies: Sender<LineResult>) -> impl Fn() + Send + 'static {
    move || {
        debug!("interrupt signal received");
        // The receiver is gone once the session is over.
        let _ = replies.send(Err(ReadlineError::Interrupted));
    }
}

/// Serve one `readline` per prompt until the terminal is dropped.
fn spawn_reader(prompts: Receiver<String>, replies: Sender<LineResult>) -> Result<()> {
    let (ready_tx, ready_rx) = mpsc::channel();

    thread::Builder::new()
        .name("terminal-reader".to_string())
        .spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => editor,
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                    return;
                }
            };
            if ready_tx.send(Ok(())).is_err() {
                return;
            }
            for prompt in prompts {
                if replies.send(editor.readline(&prompt)).is_err() {
                    break;
                }
            }
        })
        .map_err(|source| Error::Io {
            operation: "spawn terminal reader".to_string(),
            source,
        })?;

    match ready_rx.recv() {
        Ok(ready) => Ok(ready?),
        Err(_) => Err(Error::Terminal(ReadlineError::Eof)),
    }
}

/// Print the outcome line and the running scores.
pub fn print_round(report: &RoundReport) {
    println!("{report}");
    println!("{}", report.scores);
}

/// Log to stderr at `level`.
///
/// # Errors
///
/// Fails if a logger is already installed.
pub fn init_logging(level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
