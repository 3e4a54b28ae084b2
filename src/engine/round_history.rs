use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Outcome, Participant, RoundId};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка принята, раунд начался.
    BetPlaced {
        round_id: RoundId,
        amount: Chips,
        bankroll_after: Chips,
    },

    /// Открытая карта стартовой раздачи.
    CardDealt { to: Participant, card: Card },

    /// Дилеру сдана закрытая карта. Сама карта появится только в `HoleCardRevealed`.
    HoleCardDealt,

    /// Проверка натуральных блэкджеков сразу после раздачи.
    BlackjackCheck { player: bool, dealer: bool },

    /// Игрок взял карту.
    PlayerHit { card: Card, total: u8 },

    /// Игрок остановился.
    PlayerStood { total: u8 },

    /// Игрок перебрал.
    PlayerBusted { total: u8 },

    /// Открыта закрытая карта дилера.
    HoleCardRevealed { card: Card, total: u8 },

    /// Дилер добрал карту по правилу дома.
    DealerDrew { card: Card, total: u8 },

    /// Дилер остановился (сумма ≥ 17).
    DealerStood { total: u8 },

    /// Дилер перебрал.
    DealerBusted { total: u8 },

    /// Раунд завершён и рассчитан.
    RoundConcluded {
        outcome: Outcome,
        blackjack: bool,
        credited: Chips,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// События, начиная с `from` (для фронта, который проигрывает ход дилера с паузами).
    pub fn since(&self, from: usize) -> &[RoundEvent] {
        self.events.get(from..).unwrap_or(&[])
    }
}
