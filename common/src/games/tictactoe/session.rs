use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::error::{GameError, InvalidState};
use super::types::{Difficulty, Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub difficulty: Difficulty,
    pub computer_first: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            computer_first: false,
        }
    }
}

/// Finished games counted from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Stats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::ComputerWin => self.losses += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub outcome: Outcome,
}

/// One human playing a run of games against the computer. Difficulty and
/// turn order changes are held back until the next game starts.
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    pending_difficulty: Option<Difficulty>,
    computer_first: bool,
    stats: Stats,
    rng: SessionRng,
    games_started: u32,
}

impl GameSession {
    pub fn new(settings: SessionSettings, rng: SessionRng) -> Result<Self, GameError> {
        let mut session = Self {
            board: Board::new(),
            difficulty: settings.difficulty,
            pending_difficulty: None,
            computer_first: settings.computer_first,
            stats: Stats::default(),
            rng,
            games_started: 0,
        };
        session.new_game()?;
        Ok(session)
    }

    /// Clears the board and applies pending settings. Returns the computer's
    /// opening cell when it moves first.
    pub fn new_game(&mut self) -> Result<Option<usize>, GameError> {
        self.board.reset();
        if let Some(difficulty) = self.pending_difficulty.take() {
            self.difficulty = difficulty;
        }
        self.games_started += 1;

        log!(
            "Game {} started: difficulty {}, {} moves first, seed {}",
            self.games_started,
            self.difficulty,
            if self.computer_first { "computer" } else { "human" },
            self.rng.seed()
        );

        if !self.computer_first {
            return Ok(None);
        }

        let index = self.play_computer()?;
        Ok(Some(index))
    }

    pub fn play(&mut self, index: usize) -> Result<TurnResult, GameError> {
        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            return Err(InvalidState::GameOver(outcome).into());
        }

        self.board.place(Mark::Human, index)?;
        log!("Human played {}", index);

        let mut outcome = self.board.evaluate();
        let mut computer_move = None;
        if !outcome.is_terminal() {
            computer_move = Some(self.play_computer()?);
            outcome = self.board.evaluate();
        }

        if outcome.is_terminal() {
            self.stats.record(outcome);
            log!(
                "Game {} over: {} (wins {}, draws {}, losses {})",
                self.games_started,
                outcome,
                self.stats.wins,
                self.stats.draws,
                self.stats.losses
            );
        }

        Ok(TurnResult {
            human_move: index,
            computer_move,
            outcome,
        })
    }

    fn play_computer(&mut self) -> Result<usize, GameError> {
        let index = calculate_move(self.difficulty, &self.board, &mut self.rng)?;
        self.board.place(Mark::Computer, index)?;
        log!("Computer ({}) played {}", self.difficulty, index);
        Ok(index)
    }

    /// Takes effect when the next game starts.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.pending_difficulty = if difficulty == self.difficulty {
            None
        } else {
            Some(difficulty)
        };
    }

    /// Takes effect when the next game starts.
    pub fn set_computer_first(&mut self, computer_first: bool) {
        self.computer_first = computer_first;
    }

    pub fn clear_stats(&mut self) {
        self.stats = Stats::default();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn next_difficulty(&self) -> Difficulty {
        self.pending_difficulty.unwrap_or(self.difficulty)
    }

    pub fn computer_first(&self) -> bool {
        self.computer_first
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }
}
