//! Engine-vs-engine matches.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_engine::{Difficulty, Game, GameStatus, Player, compute_ai_move_with};
use tracing::{info, instrument, warn};

/// Tally of a run of self-play rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    /// Rounds played.
    pub games: u32,
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl MatchStats {
    /// Adds one finished round. Unfinished rounds are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {
                warn!("Skipping unfinished round");
                return;
            }
        }
        self.games += 1;
    }
}

impl std::fmt::Display for MatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays one round with X opening and returns the finished game.
#[instrument(skip(rng))]
pub fn play_match<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, rng: &mut R) -> Game {
    let mut game = Game::new(Player::X);
    while !game.status().is_over() {
        let mover = game.to_move();
        let difficulty = match mover {
            Player::X => x,
            Player::O => o,
        };
        let Some(pos) = compute_ai_move_with(game.board(), difficulty, mover, rng) else {
            break;
        };
        if let Err(err) = game.make_move(mover, pos) {
            warn!(%err, "Engine proposed an illegal move");
            break;
        }
    }
    game
}

/// Plays `games` rounds with a seeded random source.
#[instrument]
pub fn run_matches(x: Difficulty, o: Difficulty, games: u32, seed: u64) -> MatchStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = MatchStats::default();
    for _ in 0..games {
        let game = play_match(x, o, &mut rng);
        stats.record(game.status());
    }
    info!(%stats, "Self-play finished");
    stats
}
