//! War game implementation.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::cards::{create_deck, Card, Deck};
use crate::core::{GameRng, Result, Side, SideMap, WarConfig, WarError};
use crate::rules::{resolve_round, GameResult, RoundOutcome};

/// RNG stream used for the deck shuffle.
const SHUFFLE_CONTEXT: &str = "deck";

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: usize,
    pub user_card: Card,
    pub computer_card: Card,
    /// Outcome for the user.
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    /// Side that took the round, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            RoundOutcome::Win => Some(Side::User),
            RoundOutcome::Loss => Some(Side::Computer),
            RoundOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: {} vs {} -> {}",
            self.round,
            self.user_card.short(),
            self.computer_card.short(),
            self.outcome
        )
    }
}

/// Record of a finished game, for a player's game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub rounds: usize,
    /// Rounds won by each side.
    pub wins: SideMap<u32>,
    pub draws: u32,
    pub result: GameResult,
}

impl GameSummary {
    /// Rounds the user lost.
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.wins[Side::Computer]
    }
}

/// A single game: one deck, dealt two cards per round.
#[derive(Clone, Debug)]
pub struct WarGame {
    seed: u64,
    deck: Deck,
    round_limit: usize,
    history: Vec<RoundRecord>,
    wins: SideMap<u32>,
    draws: u32,
}

/// Builder for creating a WarGame.
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: WarConfig,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: WarConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = Some(rounds);
        self
    }

    /// Build the game: create the deck and shuffle it.
    pub fn build(self) -> Result<WarGame> {
        self.config.verify()?;

        let seed = self.config.seed.unwrap_or_else(GameRng::random_seed);
        let mut deck = create_deck();
        if self.config.shuffle {
            let mut rng = GameRng::new(seed).for_context(SHUFFLE_CONTEXT);
            deck = deck.shuffled(&mut rng);
        }

        let round_limit = self.config.round_limit();
        info!(seed, round_limit, shuffle = self.config.shuffle, "starting game");

        Ok(WarGame {
            seed,
            deck,
            round_limit,
            history: Vec::with_capacity(round_limit),
            wins: SideMap::default(),
            draws: 0,
        })
    }
}

impl WarGame {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The deck in dealing order.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds played so far, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn round_limit(&self) -> usize {
        self.round_limit
    }

    /// Cards not dealt yet.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.deck.cards()[self.history.len() * 2..]
    }

    pub fn wins(&self) -> &SideMap<u32> {
        &self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Deal one card to each side and resolve the round.
    ///
    /// The user is dealt first. Fails with [`WarError::DeckExhausted`] once
    /// the round limit is reached.
    pub fn play_round(&mut self) -> Result<RoundRecord> {
        if self.is_terminal().is_some() {
            return Err(WarError::DeckExhausted);
        }

        let (user_card, computer_card) = match self.remaining_cards() {
            [user, computer, ..] => (*user, *computer),
            _ => return Err(WarError::DeckExhausted),
        };

        let outcome = resolve_round(&user_card, &computer_card);
        let record = RoundRecord {
            round: self.history.len() + 1,
            user_card,
            computer_card,
            outcome,
        };

        match record.winner() {
            Some(side) => self.wins[side] += 1,
            None => self.draws += 1,
        }
        trace!(round = record.round, user = %user_card, computer = %computer_card, %outcome, "resolved round");

        self.history.push(record);
        Ok(record)
    }

    /// Play every remaining round and summarise the game.
    pub fn play_to_end(&mut self) -> Result<GameSummary> {
        while self.is_terminal().is_none() {
            self.play_round()?;
        }
        let summary = self.summary().ok_or(WarError::DeckExhausted)?;
        info!(
            seed = self.seed,
            user_wins = summary.wins[Side::User],
            computer_wins = summary.wins[Side::Computer],
            draws = summary.draws,
            result = %summary.result,
            "game finished"
        );
        Ok(summary)
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once the round limit is reached, `None` while
    /// rounds remain.
    pub fn is_terminal(&self) -> Option<GameResult> {
        (self.history.len() >= self.round_limit).then(|| GameResult::from_wins(&self.wins))
    }

    /// Summary of a finished game, `None` while it is still running.
    pub fn summary(&self) -> Option<GameSummary> {
        let result = self.is_terminal()?;
        Some(GameSummary {
            seed: self.seed,
            rounds: self.history.len(),
            wins: self.wins.clone(),
            draws: self.draws,
            result,
        })
    }
}
