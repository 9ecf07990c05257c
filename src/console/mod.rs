//! Line-oriented text console over the game API.
//!
//! One command per line: a coordinate move (`e2e4`, `e7e8q`), `undo`,
//! `moves`, `board`, `status`, `perft <depth>`, `new`, `help` or `quit`.
//! Recoverable errors are reported and the loop keeps reading.

use std::io::{self, BufRead, Write};
use std::thread;

use crate::board::{GameState, GameStatus};

pub mod command;

use command::{parse_console_command, ConsoleCommand};

const HELP: &str = "\
commands:
  <move>        play a move in coordinate notation (e2e4, e7e8q)
  undo          take back the last move
  moves         list legal moves
  board         print the board
  status        show check, checkmate or stalemate
  perft <n>     count move paths to depth n, per root move
  new           start a new game
  quit | exit   leave";

/// A console session owning one game.
#[derive(Debug, Default)]
pub struct Console {
    game: GameState,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Console::default()
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run one command, writing its response to `out`.
    ///
    /// Returns `Ok(false)` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: ConsoleCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            ConsoleCommand::Move(text) => match self.game.make_move_str(&text) {
                Ok(mv) => {
                    writeln!(out, "played {mv}")?;
                    self.report_status(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ConsoleCommand::Undo => match self.game.undo_move() {
                Ok(mv) => writeln!(out, "undid {mv}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ConsoleCommand::Moves => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(ToString::to_string).collect();
                writeln!(out, "{} legal: {}", moves.len(), moves.join(" "))?;
            }
            ConsoleCommand::Board => writeln!(out, "{}", self.game)?,
            ConsoleCommand::Status => writeln!(out, "{}", self.game.status())?,
            ConsoleCommand::Perft(depth) => {
                let threads = thread::available_parallelism().map_or(1, |n| n.get());
                let divide = self.game.perft_divide_parallel(depth, threads);
                for (mv, nodes) in &divide {
                    writeln!(out, "{mv}: {nodes}")?;
                }
                let total: u64 = divide.iter().map(|(_, n)| n).sum();
                writeln!(out, "\nNodes: {total}")?;
            }
            ConsoleCommand::New => {
                self.game = GameState::new();
                writeln!(out, "new game")?;
            }
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::Unknown(line) => writeln!(out, "unknown command '{line}' (try help)")?,
        }
        Ok(true)
    }

    fn report_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let status = self.game.status();
        match status {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Check => writeln!(out, "{} is in check", self.game.side_to_move()),
            GameStatus::Checkmate => writeln!(
                out,
                "checkmate, {} wins",
                self.game.side_to_move().opponent()
            ),
            GameStatus::Stalemate => writeln!(out, "stalemate"),
        }
    }
}

/// Read commands from `input` until it ends or a quit command arrives.
pub fn run_console<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut console = Console::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };
        log_debug!("console command {:?}", cmd);
        if !console.execute(cmd, out)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

/// Run the console on stdin and stdout.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(stdin.lock(), &mut stdout)
}
