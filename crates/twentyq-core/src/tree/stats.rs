use serde::Serialize;

/// Session counters for one run of the program.
/// Both only ever grow; there is no reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    games_played: u64,
    games_won: u64,
}

impl GameStats {
    pub fn new() -> Self {
        GameStats::default()
    }

    /// Record one finished game.
    /// `computer_won` is true when the final guess was confirmed.
    pub fn record(&mut self, computer_won: bool) {
        self.games_played += 1;
        if computer_won {
            self.games_won += 1;
        }
    }

    /// Retrieve the number of finished games
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Retrieve the number of games the computer guessed correctly
    pub fn games_won(&self) -> u64 {
        self.games_won
    }

    pub fn games_lost(&self) -> u64 {
        self.games_played - self.games_won
    }

    /// Fraction of games won by the computer
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }
}
