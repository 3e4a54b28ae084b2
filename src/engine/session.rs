use tracing::{info, warn};

use crate::domain::{Chips, GameConfig, RoundPhase, ShuffledDeck};
use crate::engine::actions::{GameAction, PlayerAction};
use crate::engine::errors::{DeckIntegrityError, EngineError};
use crate::engine::game_loop::{self, RoundEngine, RoundStatus};
use crate::engine::ledger::BetLedger;
use crate::engine::shuffle::fresh_shuffled_deck;
use crate::engine::RandomSource;

/// Игровая сессия — единственное авторитетное состояние игры:
/// - колода (раздаёт из неё только движок раунда);
/// - учёт ставок и банкролла;
/// - текущий раунд;
/// - RNG.
///
/// Все мутации синхронные и идут по одной: `&mut self` не даёт двум
/// действиям пересечься.
pub struct GameSession<R: RandomSource> {
    config: GameConfig,
    rng: R,
    deck: ShuffledDeck,
    deck_shuffled: bool,
    ledger: BetLedger,
    round: RoundEngine,
    rounds_played: u64,
}

impl<R: RandomSource> GameSession<R> {
    /// Новая игра с конфигом по умолчанию (банкролл 1000). Колоду ещё нужно перетасовать.
    pub fn new_game(rng: R) -> Self {
        let config = GameConfig::default();
        let ledger = BetLedger::new(config.starting_bankroll, config.blackjack_payout);
        Self {
            config,
            rng,
            deck: ShuffledDeck::empty(),
            deck_shuffled: false,
            ledger,
            round: RoundEngine::new(1),
            rounds_played: 0,
        }
    }

    /// Новая игра с заданным конфигом.
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        let ledger = BetLedger::new(config.starting_bankroll, config.blackjack_payout);
        Ok(Self {
            config,
            rng,
            deck: ShuffledDeck::empty(),
            deck_shuffled: false,
            ledger,
            round: RoundEngine::new(1),
            rounds_played: 0,
        })
    }

    /// Новая игра с заранее сложенной колодой (реплеи, сценарные тесты).
    ///
    /// Колода может быть неполной, но дубли не принимаются.
    pub fn with_deck(config: GameConfig, rng: R, deck: ShuffledDeck) -> Result<Self, EngineError> {
        if !deck.has_unique_cards() {
            warn!(cards = deck.remaining(), "сложенная колода содержит дубли");
            return Err(DeckIntegrityError::DuplicateCards.into());
        }
        let mut session = Self::with_config(config, rng)?;
        session.deck = deck;
        session.deck_shuffled = true;
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundEngine {
        &self.round
    }

    pub fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    pub fn deck(&self) -> &ShuffledDeck {
        &self.deck
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn bankroll(&self) -> Chips {
        self.ledger.bankroll()
    }

    pub fn current_bet(&self) -> Chips {
        self.ledger.current_bet()
    }

    pub fn is_deck_shuffled(&self) -> bool {
        self.deck_shuffled
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Перетасовать свежую колоду.
    ///
    /// Между раундами — все 52 карты. Посреди раунда — 52 за вычетом карт на руках,
    /// чтобы не появилось дублей. Ошибка оставляет старую колоду на месте.
    pub fn shuffle(&mut self) -> Result<&ShuffledDeck, EngineError> {
        let in_play = if self.round.is_in_progress() {
            self.round.cards_in_play()
        } else {
            Vec::new()
        };

        let fresh = fresh_shuffled_deck(&mut self.rng, &in_play, self.config.max_shuffle_attempts)?;
        self.deck = fresh;
        self.deck_shuffled = true;
        Ok(&self.deck)
    }

    /// Ставка: `AwaitingBet → Dealt → PlayerTurn | Concluded`.
    pub fn place_bet(&mut self, amount: i64) -> Result<RoundStatus, EngineError> {
        let status = game_loop::start_round(&mut self.round, &mut self.deck, &mut self.ledger, amount)?;
        self.track(&status);
        Ok(status)
    }

    pub fn hit(&mut self) -> Result<RoundStatus, EngineError> {
        self.apply_action(PlayerAction::Hit)
    }

    pub fn stay(&mut self) -> Result<RoundStatus, EngineError> {
        self.apply_action(PlayerAction::Stay)
    }

    pub fn apply_action(&mut self, action: PlayerAction) -> Result<RoundStatus, EngineError> {
        let status = game_loop::apply_action(&mut self.round, &mut self.deck, &mut self.ledger, action)?;
        self.track(&status);
        Ok(status)
    }

    /// `Concluded → AwaitingBet`. Если карт осталось меньше порога — новая колода.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        if self.round.phase != RoundPhase::Concluded {
            warn!(phase = %self.round.phase, "new_round вне фазы Concluded");
            return Err(EngineError::InvalidPhaseTransition {
                action: GameAction::NewRound,
                phase: self.round.phase,
            });
        }

        if self.deck.remaining() < self.config.reshuffle_threshold {
            info!(
                remaining = self.deck.remaining(),
                threshold = self.config.reshuffle_threshold,
                "карт меньше порога, тасуем новую колоду"
            );
            self.deck = fresh_shuffled_deck(&mut self.rng, &[], self.config.max_shuffle_attempts)?;
            self.deck_shuffled = true;
        }

        self.round = RoundEngine::new(self.round.round_id + 1);
        Ok(())
    }

    /// Полный сброс из любой фазы: стартовый банкролл, пустой раунд, колоду нужно перетасовать.
    pub fn reset_game(&mut self) {
        info!(phase = %self.round.phase, "сброс игры");
        self.ledger = BetLedger::new(self.config.starting_bankroll, self.config.blackjack_payout);
        self.deck = ShuffledDeck::empty();
        self.deck_shuffled = false;
        self.round = RoundEngine::new(1);
        self.rounds_played = 0;
    }

    fn track(&mut self, status: &RoundStatus) {
        if status.is_finished() {
            self.rounds_played += 1;
        }
    }
}
