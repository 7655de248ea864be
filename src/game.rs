use std::array::from_fn;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::card::Card;
use crate::deck::{Deck, build_shuffled_deck};
use crate::engine::Table;
use crate::error::{EngineError, GameError};
use crate::pile::{Pile, PileStore};
use crate::state::{BoardSnapshot, Mode, MoveReport, Outcome, Phase, PileView, RevealReport};

pub const DEFAULT_SEED: u64 = 0xC10C_C10C_5EED_5EED;
pub const DEFAULT_RIFFLE_PASSES: usize = 7;

/// Configuration required to bootstrap a session.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub riffle_passes: usize,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            riffle_passes: DEFAULT_RIFFLE_PASSES,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_riffle_passes(mut self, passes: usize) -> Self {
        self.config.riffle_passes = passes;
        self
    }

    /// Deal exactly this deck on every start instead of shuffling.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<GameSession, GameError> {
        GameSession::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A Clock Patience session. Owns the board and drives it through the move
/// engine; presentation code only sees [`BoardSnapshot`]s.
pub struct GameSession {
    config: GameConfig,
    mode: Option<Mode>,
    table: Table,
    fixed_deck: Option<Deck>,
    rng: StdRng,
    message: String,
}

impl GameSession {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.table.phase()
    }

    pub fn outcome(&self) -> Outcome {
        self.table.phase().outcome()
    }

    pub fn is_over(&self) -> bool {
        self.table.phase().is_over()
    }

    pub fn piles(&self) -> &PileStore {
        self.table.piles()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Re-runs the outcome rules against the current board.
    pub fn evaluate(&self) -> Outcome {
        self.table.evaluate()
    }

    /// Deals a fresh game in `mode`, discarding any game in progress.
    pub fn start_game(&mut self, mode: Mode) -> BoardSnapshot {
        let deck = match &self.fixed_deck {
            Some(deck) => deck.clone(),
            None => build_shuffled_deck(&mut self.rng, self.config.riffle_passes),
        };
        self.mode = Some(mode);
        self.table = Table::deal(deck);
        if let Some(card) = self.table.phase().current_card() {
            self.message = format!(
                "Start: first card {card} goes to pile {}.",
                Pile::destination(card)
            );
        }
        info!(%mode, message = %self.message, "started game");
        self.snapshot()
    }

    /// Automatic mode: place the card in hand and reveal the next one.
    pub fn advance(&mut self) -> Result<MoveReport, EngineError> {
        self.require_mode(Mode::Automatic)?;
        let report = self.table.advance().inspect_err(log_rejection)?;
        self.message = match report.revealed {
            Some(next) => format!(
                "Moved {} to pile {}. New card: {next}.",
                report.card, report.pile
            ),
            None => format!("Moved {} to pile {}.", report.card, report.pile),
        };
        self.finish_if_over(report.outcome);
        Ok(report)
    }

    /// Manual mode, first half: place the card in hand on `pile`.
    pub fn submit_pile_choice(&mut self, pile: Pile) -> Result<MoveReport, EngineError> {
        self.require_mode(Mode::Manual)?;
        let report = self.table.submit(pile).inspect_err(log_rejection)?;
        self.message = if report.outcome == Outcome::Ongoing {
            format!(
                "Moved {} to pile {}. Click pile {} to reveal the next card.",
                report.card, report.pile, report.pile
            )
        } else {
            format!("Moved {} to pile {}.", report.card, report.pile)
        };
        self.finish_if_over(report.outcome);
        Ok(report)
    }

    /// Manual mode, second half: reveal the next card from the pile just played.
    pub fn confirm_reveal(&mut self, pile: Pile) -> Result<RevealReport, EngineError> {
        self.require_mode(Mode::Manual)?;
        let report = self.table.confirm(pile).inspect_err(log_rejection)?;
        self.message = match report.revealed {
            Some(card) => format!(
                "Revealed {card}. It goes to pile {}.",
                Pile::destination(card)
            ),
            None => format!("Pile {} has no cards left.", report.pile),
        };
        self.finish_if_over(report.outcome);
        Ok(report)
    }

    /// Runs an automatic game to its end.
    pub fn play_out(&mut self) -> Result<Outcome, EngineError> {
        while !self.is_over() {
            self.advance()?;
        }
        Ok(self.outcome())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let piles = self.table.piles();
        let phase = self.table.phase();
        BoardSnapshot {
            mode: self.mode,
            phase,
            piles: from_fn(|slot| {
                let pile = Pile::from_slot(slot);
                PileView {
                    pile,
                    visible: piles.visible_card(pile),
                    face_up_count: piles.face_up(pile).len(),
                    hidden_count: piles.hidden_count(pile),
                }
            }),
            current_card: phase.current_card(),
            pending_reveal: phase.pending_reveal(),
            last_pile: self.table.last_pile(),
            outcome: phase.outcome(),
            is_over: phase.is_over(),
            message: self.message.clone(),
        }
    }

    /// Returns the session to idle.
    pub fn reset(&mut self) {
        self.mode = None;
        self.table = Table::idle();
        self.message.clear();
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        if config.riffle_passes == 0 && deck.is_none() {
            return Err(GameError::InvalidConfiguration(
                "at least one riffle pass is required",
            ));
        }
        let fixed_deck = deck.map(Deck::from_cards).transpose()?;
        Ok(Self {
            config,
            mode: None,
            table: Table::idle(),
            fixed_deck,
            rng: StdRng::seed_from_u64(config.seed),
            message: String::new(),
        })
    }

    fn require_mode(&self, expected: Mode) -> Result<(), EngineError> {
        let checked = match self.mode {
            Some(mode) if mode == expected => Ok(()),
            actual => Err(EngineError::InvalidMode { expected, actual }),
        };
        checked.inspect_err(log_rejection)
    }

    fn finish_if_over(&mut self, outcome: Outcome) {
        let verdict = match outcome {
            Outcome::Ongoing => return,
            Outcome::Win => "You won! Every pile holds its own cards.",
            Outcome::Loss => "You lost! The fourth King came up or a pile ran out.",
        };
        self.message = format!("{} {verdict}", self.message);
        info!(?outcome, hidden = self.piles().total_hidden(), "game over");
    }
}

/// Rejections leave the session untouched; the error itself is the prompt.
fn log_rejection(err: &EngineError) {
    warn!(error = %err, retryable = err.is_retryable(), "rejected move");
}
