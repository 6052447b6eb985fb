//! Async session driver
//!
//! One task multiplexes three event sources:
//!
//! - input lines from the player
//! - a one-second clock tick
//! - the outstanding computer search, if any
//!
//! The controller is only ever touched from this task. Searches run on the
//! blocking pool with their own position snapshot.

use crate::game::ai::{spawn_search, SearchOutcome};
use crate::game::{GameOpResult, TurnController, TurnPhase, Update};
use crate::ui::{parse_command, render, Command, HELP};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

type PendingSearch = (u64, JoinHandle<GameOpResult<SearchOutcome>>);

/// A game being played through a text front-end
pub struct GameSession<W: Write> {
    controller: TurnController,
    think_delay: Duration,
    out: W,
}

impl<W: Write> GameSession<W> {
    pub fn new(controller: TurnController, think_delay: Duration, out: W) -> Self {
        Self {
            controller,
            think_delay,
            out,
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Consume the session, returning the final controller state and output
    pub fn into_parts(self) -> (TurnController, W) {
        (self.controller, self.out)
    }

    /// Play until `quit` or end of input
    pub async fn run<R>(&mut self, input: R) -> GameOpResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        let mut pending: Option<PendingSearch> = None;
        self.redraw()?;

        loop {
            if pending.is_none() {
                if let Some(job) = self.controller.begin_search() {
                    let generation = job.generation;
                    pending = Some((generation, spawn_search(job, self.think_delay)));
                    self.redraw()?;
                }
            }

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("[TURN] Input closed, ending session");
                        break;
                    };
                    let Some(command) = parse_command(&line) else {
                        continue;
                    };
                    if command == Command::Quit {
                        break;
                    }
                    let generation = self.controller.generation();
                    self.handle(command)?;
                    if self.controller.generation() != generation {
                        pending = None;
                    }
                }
                _ = ticker.tick() => {
                    let update = self.controller.tick();
                    if update.result.is_some() {
                        pending = None;
                        self.redraw()?;
                    }
                }
                joined = join_search(&mut pending) => {
                    let generation = pending.take().map(|(g, _)| g).unwrap_or_default();
                    let outcome = match joined {
                        Ok(Ok(outcome)) => outcome,
                        Ok(Err(err)) => {
                            error!("[AI] {}", err);
                            SearchOutcome::failed(generation)
                        }
                        Err(err) => {
                            error!("[AI] Search task failed: {}", err);
                            SearchOutcome::failed(generation)
                        }
                    };
                    self.controller.finish_search(outcome);
                    self.redraw()?;
                }
            }
        }

        Ok(())
    }

    fn handle(&mut self, command: Command) -> GameOpResult<()> {
        let update = match command {
            Command::Square(square) => self.controller.click(square),
            Command::Move(mv) => self.play_move_command(mv),
            Command::Promote(role) => self.controller.choose_promotion(role),
            Command::Flip => self.controller.flip(),
            Command::Restart => self.controller.restart(),
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(());
            }
            Command::Unknown(text) => {
                writeln!(self.out, "Unrecognised command '{}'. Type 'help'.", text)?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        if let Some(result) = update.result {
            info!("[TURN] Result: {}", result);
        }
        self.redraw()
    }

    /// Feed a whole coordinate move through the click flow
    fn play_move_command(&mut self, mv: chess_engine::ChessMove) -> Update {
        if self.controller.phase() == TurnPhase::AwaitingDestination {
            // Drop any half-made selection first
            self.controller.choose_destination(mv.from);
        }
        self.controller.select(mv.from);
        let update = self.controller.choose_destination(mv.to);
        match (update.phase, mv.promotion) {
            (TurnPhase::AwaitingPromotionChoice, Some(role)) => {
                self.controller.choose_promotion(role)
            }
            _ => update,
        }
    }

    fn redraw(&mut self) -> GameOpResult<()> {
        write!(self.out, "\n{}", render(&self.controller))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Wait for the outstanding search, or forever if there is none
async fn join_search(
    pending: &mut Option<PendingSearch>,
) -> Result<GameOpResult<SearchOutcome>, tokio::task::JoinError> {
    match pending.as_mut() {
        Some((_, handle)) => handle.await,
        None => std::future::pending().await,
    }
}
