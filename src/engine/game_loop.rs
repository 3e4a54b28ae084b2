use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{
    Card, Chips, Hand, Outcome, Participant, RoundId, RoundPhase, RoundSummary, ShuffledDeck,
    INITIAL_DEAL_CARDS,
};
use crate::engine::actions::{GameAction, PlayerAction};
use crate::engine::dealer;
use crate::engine::errors::EngineError;
use crate::engine::ledger::BetLedger;
use crate::engine::round_history::{RoundEventKind, RoundHistory};

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

impl RoundStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundStatus::Finished(_))
    }
}

/// Внутреннее состояние раунда: руки, фаза, исход, ставка, история.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEngine {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub player: Hand,
    pub dealer: Hand,
    pub outcome: Option<Outcome>,
    /// Игрок выиграл натуральным блэкджеком.
    pub player_blackjack: bool,
    pub bet: Chips,
    /// Открыта ли закрытая карта дилера (видно фронту).
    pub hole_card_revealed: bool,
    pub history: RoundHistory,
    pub summary: Option<RoundSummary>,
}

impl RoundEngine {
    pub fn new(round_id: RoundId) -> Self {
        Self {
            round_id,
            phase: RoundPhase::AwaitingBet,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            player_blackjack: false,
            bet: Chips::ZERO,
            hole_card_revealed: false,
            history: RoundHistory::new(),
            summary: None,
        }
    }

    /// Раунд идёт: карты на столе ещё нужны, из колоды их выдавать нельзя.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self.phase,
            RoundPhase::Dealt | RoundPhase::PlayerTurn | RoundPhase::DealerTurn
        )
    }

    /// Все карты на руках у игрока и дилера.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.player
            .cards()
            .iter()
            .chain(self.dealer.cards())
            .copied()
            .collect()
    }

    /// Закрытая карта дилера (вторая карта раздачи).
    pub fn hole_card(&self) -> Option<Card> {
        self.dealer.cards().get(1).copied()
    }
}

fn ensure_phase(round: &RoundEngine, expected: RoundPhase, action: GameAction) -> Result<(), EngineError> {
    if round.phase == expected {
        return Ok(());
    }
    warn!(
        round_id = round.round_id,
        ?action,
        phase = %round.phase,
        "действие вне своей фазы"
    );
    Err(EngineError::InvalidPhaseTransition {
        action,
        phase: round.phase,
    })
}

fn ensure_cards(deck: &ShuffledDeck, needed: usize) -> Result<(), EngineError> {
    if deck.remaining() < needed {
        warn!(needed, remaining = deck.remaining(), "в колоде не хватает карт");
        return Err(EngineError::InsufficientCards {
            needed,
            remaining: deck.remaining(),
        });
    }
    Ok(())
}

/// Старт раунда по ставке:
/// - принимает ставку (списание сразу);
/// - раздаёт по две карты: игрок, дилер, игрок, дилер;
/// - проверяет натуральные блэкджеки и либо завершает раунд, либо передаёт ход игроку.
///
/// Все проверки (фаза, ставка, 4 карты в колоде) идут до первой мутации.
pub fn start_round(
    round: &mut RoundEngine,
    deck: &mut ShuffledDeck,
    ledger: &mut BetLedger,
    amount: i64,
) -> Result<RoundStatus, EngineError> {
    ensure_phase(round, RoundPhase::AwaitingBet, GameAction::PlaceBet)?;
    ledger.validate_bet(amount)?;
    ensure_cards(deck, INITIAL_DEAL_CARDS)?;

    let bet = ledger.place_bet(amount)?;
    round.bet = bet;
    round.history.push(RoundEventKind::BetPlaced {
        round_id: round.round_id,
        amount: bet,
        bankroll_after: ledger.bankroll(),
    });
    info!(round_id = round.round_id, bet = bet.0, "раунд начат");

    for i in 0..INITIAL_DEAL_CARDS {
        let card = deck
            .draw_one()
            .ok_or(EngineError::Internal("колода опустела во время раздачи"))?;
        let (to, face_up) = match i {
            0 | 2 => (Participant::Player, true),
            1 => (Participant::Dealer, true),
            _ => (Participant::Dealer, false),
        };
        match to {
            Participant::Player => round.player.push(card),
            Participant::Dealer => round.dealer.push(card),
        }
        debug!(round_id = round.round_id, ?to, %card, face_up, "карта сдана");
        let event = if face_up {
            RoundEventKind::CardDealt { to, card }
        } else {
            RoundEventKind::HoleCardDealt
        };
        round.history.push(event);
    }
    round.phase = RoundPhase::Dealt;

    check_naturals(round, ledger)
}

/// `Dealt → Concluded | PlayerTurn`.
fn check_naturals(round: &mut RoundEngine, ledger: &mut BetLedger) -> Result<RoundStatus, EngineError> {
    let player_bj = round.player.is_blackjack();
    let dealer_bj = round.dealer.is_blackjack();
    round.history.push(RoundEventKind::BlackjackCheck {
        player: player_bj,
        dealer: dealer_bj,
    });

    let decided = match (player_bj, dealer_bj) {
        (true, true) => Some((Outcome::Push, false)),
        (true, false) => Some((Outcome::PlayerWins, true)),
        (false, true) => Some((Outcome::DealerWins, false)),
        (false, false) => None,
    };

    match decided {
        Some((outcome, blackjack)) => {
            reveal_hole_card(round);
            conclude(round, ledger, outcome, blackjack)
        }
        None => {
            round.phase = RoundPhase::PlayerTurn;
            Ok(RoundStatus::Ongoing)
        }
    }
}

/// Применить решение игрока (только в `PlayerTurn`).
pub fn apply_action(
    round: &mut RoundEngine,
    deck: &mut ShuffledDeck,
    ledger: &mut BetLedger,
    action: PlayerAction,
) -> Result<RoundStatus, EngineError> {
    ensure_phase(round, RoundPhase::PlayerTurn, action.into())?;

    match action {
        PlayerAction::Hit => player_hit(round, deck, ledger),
        PlayerAction::Stay => player_stay(round, deck, ledger),
    }
}

fn player_hit(
    round: &mut RoundEngine,
    deck: &mut ShuffledDeck,
    ledger: &mut BetLedger,
) -> Result<RoundStatus, EngineError> {
    ensure_cards(deck, 1)?;
    let card = deck
        .draw_one()
        .ok_or(EngineError::Internal("колода опустела при доборе"))?;
    round.player.push(card);

    let value = round.player.value();
    debug!(round_id = round.round_id, %card, total = value.total, "игрок взял карту");
    round.history.push(RoundEventKind::PlayerHit {
        card,
        total: value.total,
    });

    if value.is_bust {
        // Игрок перебрал — дилер не доигрывает.
        round.history.push(RoundEventKind::PlayerBusted { total: value.total });
        reveal_hole_card(round);
        return conclude(round, ledger, Outcome::DealerWins, false);
    }
    Ok(RoundStatus::Ongoing)
}

/// `PlayerTurn → DealerTurn → Concluded`.
///
/// Ход дилера считается на копиях руки и колоды и применяется целиком,
/// так что нехватка карт не оставляет раунд наполовину сыгранным.
fn player_stay(
    round: &mut RoundEngine,
    deck: &mut ShuffledDeck,
    ledger: &mut BetLedger,
) -> Result<RoundStatus, EngineError> {
    let mut dealer_hand = round.dealer.clone();
    let mut scratch = deck.clone();
    let drawn = dealer::play_out(&mut dealer_hand, &mut scratch).map_err(|e| {
        warn!(round_id = round.round_id, error = %e, "дилеру не хватит карт, ход не начат");
        match e {
            // Копия колоды опустела целиком: дилеру нужна хотя бы ещё одна карта сверх того, что было.
            EngineError::InsufficientCards { .. } => EngineError::InsufficientCards {
                needed: deck.remaining() + 1,
                remaining: deck.remaining(),
            },
            other => other,
        }
    })?;

    round.history.push(RoundEventKind::PlayerStood {
        total: round.player.total(),
    });
    round.phase = RoundPhase::DealerTurn;
    reveal_hole_card(round);

    for card in drawn {
        round.dealer.push(card);
        let total = round.dealer.total();
        debug!(round_id = round.round_id, %card, total, "дилер добрал");
        round.history.push(RoundEventKind::DealerDrew { card, total });
    }
    *deck = scratch;

    let dealer_value = round.dealer.value();
    let player_total = round.player.total();

    let outcome = if dealer_value.is_bust {
        round.history.push(RoundEventKind::DealerBusted {
            total: dealer_value.total,
        });
        Outcome::PlayerWins
    } else {
        round.history.push(RoundEventKind::DealerStood {
            total: dealer_value.total,
        });
        compare_totals(player_total, dealer_value.total)
    };

    conclude(round, ledger, outcome, false)
}

/// Сравнение сумм, когда никто не перебрал.
pub fn compare_totals(player_total: u8, dealer_total: u8) -> Outcome {
    match player_total.cmp(&dealer_total) {
        std::cmp::Ordering::Greater => Outcome::PlayerWins,
        std::cmp::Ordering::Less => Outcome::DealerWins,
        std::cmp::Ordering::Equal => Outcome::Push,
    }
}

fn reveal_hole_card(round: &mut RoundEngine) {
    if round.hole_card_revealed {
        return;
    }
    round.hole_card_revealed = true;
    if let Some(card) = round.hole_card() {
        round.history.push(RoundEventKind::HoleCardRevealed {
            card,
            total: round.dealer.total(),
        });
    }
}

/// Переход в `Concluded` и единственный на раунд расчёт ставки.
fn conclude(
    round: &mut RoundEngine,
    ledger: &mut BetLedger,
    outcome: Outcome,
    blackjack: bool,
) -> Result<RoundStatus, EngineError> {
    let credited = ledger.settle(outcome, blackjack)?;

    round.phase = RoundPhase::Concluded;
    round.outcome = Some(outcome);
    round.player_blackjack = blackjack;
    round.history.push(RoundEventKind::RoundConcluded {
        outcome,
        blackjack,
        credited,
    });

    let summary = RoundSummary {
        round_id: round.round_id,
        outcome,
        blackjack,
        bet: round.bet,
        credited,
        net: credited.signed_diff(round.bet),
        player_total: round.player.total(),
        dealer_total: round.dealer.total(),
        bankroll_after: ledger.bankroll(),
    };
    info!(
        round_id = round.round_id,
        %outcome,
        blackjack,
        net = summary.net,
        bankroll = summary.bankroll_after.0,
        "раунд завершён"
    );
    round.summary = Some(summary.clone());

    Ok(RoundStatus::Finished(summary))
}
