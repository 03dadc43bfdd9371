//! Line-oriented terminal front-end.
//!
//! Reads one command per line: a cell number 1-9 places the human's mark,
//! `r` prints the running score, `q` quits. Generic over the reader and
//! writer so it runs the same against stdin/stdout and in-memory buffers.

use crate::session::{GameSession, SessionError, SessionSummary, TurnReport};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::Position;
use tracing::{debug, info, instrument};

/// Runs a session until it completes, the player quits, or input ends.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> Result<SessionSummary> {
    info!("Starting terminal session");

    writeln!(
        out,
        "Tic Tac Toe: {} ({}) vs AI ({}), difficulty {}",
        session.config().player_name(),
        session.human_mark(),
        session.ai_mark(),
        session.config().difficulty().label()
    )?;
    writeln!(
        out,
        "{} moves first. Reach {} net round wins to finish.",
        session.config().first_player().label(),
        session.config().rounds_to_finish()
    )?;
    writeln!(out, "Enter 1-9 to move, 'r' for the score, 'q' to quit.")?;

    if let Some(pos) = session.start_round()? {
        announce_ai_move(&mut out, pos)?;
    }

    let mut line = String::new();
    loop {
        writeln!(out)?;
        writeln!(out, "{}", session.game().board().display())?;
        write!(out, "Your move: ")?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read player input")?;
        if read == 0 {
            debug!("Input closed");
            writeln!(out)?;
            break;
        }

        let command = line.trim();
        match command {
            "q" | "Q" => {
                info!("Player quit");
                break;
            }
            "r" | "R" => {
                writeln!(out, "{}", session.summary())?;
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_cell_number(command) else {
            writeln!(out, "Please enter a number from 1 to 9.")?;
            continue;
        };

        match session.play_human(pos) {
            Ok(report) => {
                if show_report(&mut out, session, &report)? {
                    break;
                }
            }
            Err(SessionError::Move(err)) => {
                writeln!(out, "{}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let summary = session.summary();
    writeln!(out, "{}", summary)?;
    Ok(summary)
}

/// Prints the outcome of a turn. Returns true when the session is over.
fn show_report<W: Write>(out: &mut W, session: &GameSession, report: &TurnReport) -> Result<bool> {
    if let Some(pos) = report.ai_reply {
        announce_ai_move(out, pos)?;
    }

    let Some(result) = report.round else {
        return Ok(false);
    };

    if let Some(board) = report.final_board {
        writeln!(out)?;
        writeln!(out, "{}", board.display())?;
    }
    writeln!(out, "Game Over: {}", result)?;
    writeln!(
        out,
        "Games Played: {}/{}",
        session.rounds_won(),
        session.config().rounds_to_finish()
    )?;

    if report.session_complete {
        writeln!(
            out,
            "You reached {} net round wins in {} rounds.",
            session.config().rounds_to_finish(),
            session.rounds_played()
        )?;
        return Ok(true);
    }

    writeln!(out, "New round!")?;
    if let Some(pos) = report.next_opening {
        announce_ai_move(out, pos)?;
    }
    Ok(false)
}

fn announce_ai_move<W: Write>(out: &mut W, pos: Position) -> Result<()> {
    writeln!(out, "AI plays {} ({})", pos.to_index() + 1, pos)?;
    Ok(())
}
