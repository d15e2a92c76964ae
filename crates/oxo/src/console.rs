//! Interactive console: reads lines, turns them into session commands and
//! prints the resulting events.

use crate::render::{render_event, render_scores};
use oxo_engine::{
    Command, Event, GameSession, MoveError, Phase, Player, Scoreboard, SessionError, Strategy,
};
use rand::Rng;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// One line of input typed during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark the cell with this zero-based index.
    Place(usize),
    /// Start a new round.
    Reset,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses a line for a board of `cells` cells. Cells are typed 1-based.
    pub fn parse(line: &str, cells: usize) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "reset" => Some(Input::Reset),
            "q" | "quit" | "exit" => Some(Input::Quit),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|number| (1..=cells).contains(number))
                .map(|number| Input::Place(number - 1)),
        }
    }
}

fn describe_error(err: &SessionError) -> String {
    match err {
        SessionError::Move(MoveError::CellOccupied(index)) => {
            format!("Cell {} is already taken.", index + 1)
        }
        SessionError::WrongPhase {
            phase: Phase::RoundOver(_),
            ..
        } => "The round is over. Press r for a new round.".to_string(),
        other => other.to_string(),
    }
}

/// Line-oriented front end over any reader and writer.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Writes `text` and reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show(&mut self, events: &[Event]) -> anyhow::Result<()> {
        for event in events {
            writeln!(self.output, "{}", render_event(event))?;
        }
        Ok(())
    }

    fn choose_symbol(&mut self) -> anyhow::Result<Option<Player>> {
        loop {
            let Some(line) = self.prompt("Play as cross (x) or nought (o)? ")? else {
                return Ok(None);
            };
            match line.trim().parse::<Player>() {
                Ok(player) => return Ok(Some(player)),
                Err(_) => writeln!(self.output, "Type x or o.")?,
            }
        }
    }

    fn choose_strategy(&mut self) -> anyhow::Result<Option<Strategy>> {
        for strategy in Strategy::iter() {
            writeln!(self.output, "  {:<12}{}", strategy.to_string(), strategy.description())?;
        }
        loop {
            let Some(line) = self.prompt("CPU strategy? ")? else {
                return Ok(None);
            };
            match line.trim().parse::<Strategy>() {
                Ok(strategy) => return Ok(Some(strategy)),
                Err(_) => writeln!(self.output, "Type random, minimax or alternating.")?,
            }
        }
    }

    fn quit<R: Rng>(&mut self, session: &mut GameSession<R>) -> anyhow::Result<Scoreboard> {
        let scores = session.scores().clone();
        writeln!(self.output, "Final scores:\n{}", render_scores(&scores))?;
        let events = session.handle(Command::Exit)?;
        self.show(&events)?;
        info!(rounds = scores.rounds(), "Session closed");
        Ok(scores)
    }

    /// Plays a session until the user quits or input ends.
    ///
    /// A preselected `symbol` or `strategy` skips the matching prompt.
    /// Returns the scores as they stood before exit.
    #[instrument(skip(self, session))]
    pub fn play<R: Rng>(
        &mut self,
        session: &mut GameSession<R>,
        symbol: Option<Player>,
        strategy: Option<Strategy>,
    ) -> anyhow::Result<Scoreboard> {
        let size = session.board().size();
        writeln!(self.output, "Noughts and crosses on a {size}x{size} board.")?;

        let symbol = match symbol {
            Some(symbol) => symbol,
            None => match self.choose_symbol()? {
                Some(symbol) => symbol,
                None => return self.quit(session),
            },
        };
        let events = session.handle(Command::PickSymbol(symbol))?;
        self.show(&events)?;

        let strategy = match strategy {
            Some(strategy) => strategy,
            None => match self.choose_strategy()? {
                Some(strategy) => strategy,
                None => return self.quit(session),
            },
        };
        let events = session.handle(Command::PickStrategy(strategy))?;
        self.show(&events)?;

        let cells = session.board().len();
        loop {
            let text = match session.phase() {
                Phase::RoundOver(_) => "r for a new round, q to quit: ".to_string(),
                _ => format!("Cell (1-{cells}), r to reset, q to quit: "),
            };
            let Some(line) = self.prompt(&text)? else {
                return self.quit(session);
            };
            let command = match Input::parse(&line, cells) {
                Some(Input::Place(index)) => Command::PlaceMark(index),
                Some(Input::Reset) => Command::Reset,
                Some(Input::Quit) => return self.quit(session),
                None => {
                    writeln!(self.output, "Enter a cell number from 1 to {cells}, r or q.")?;
                    continue;
                }
            };
            match session.handle(command) {
                Ok(events) => self.show(&events)?,
                Err(err) => {
                    warn!(%err, "Command rejected");
                    writeln!(self.output, "{}", describe_error(&err))?;
                }
            }
        }
    }
}
