use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::RoundId;

/// Фаза раунда.
///
/// `AwaitingBet → Dealt → PlayerTurn → DealerTurn → Concluded`,
/// из `Concluded` новый раунд снова начинается с `AwaitingBet`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    #[default]
    AwaitingBet,
    Dealt,
    PlayerTurn,
    DealerTurn,
    Concluded,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundPhase::AwaitingBet => "AwaitingBet",
            RoundPhase::Dealt => "Dealt",
            RoundPhase::PlayerTurn => "PlayerTurn",
            RoundPhase::DealerTurn => "DealerTurn",
            RoundPhase::Concluded => "Concluded",
        };
        f.write_str(s)
    }
}

/// Чья рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Participant {
    Player,
    Dealer,
}

/// Исход раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::PlayerWins => "PlayerWins",
            Outcome::DealerWins => "DealerWins",
            Outcome::Push => "Push",
        };
        f.write_str(s)
    }
}

/// Краткое описание завершённого раунда. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub outcome: Outcome,
    /// Игрок выиграл натуральным блэкджеком (выплата по коэффициенту блэкджека).
    pub blackjack: bool,
    pub bet: Chips,
    /// Сколько вернулось в банкролл при расчёте (ставка + выигрыш).
    pub credited: Chips,
    /// Итог раунда для игрока относительно ставки: +выигрыш / −ставка / 0.
    pub net: i64,
    pub player_total: u8,
    pub dealer_total: u8,
    pub bankroll_after: Chips,
}
