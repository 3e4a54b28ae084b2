use thiserror::Error;

use crate::domain::{Card, Chips, RoundPhase};
use crate::engine::actions::GameAction;

/// Нарушение целостности перемешанной колоды.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckIntegrityError {
    #[error("в колоде {actual} карт, ожидалось {expected}")]
    WrongSize { expected: usize, actual: usize },

    #[error("в колоде есть повторяющиеся карты")]
    DuplicateCards,

    #[error("в колоде есть карты, которые уже на руках")]
    CardsInPlay,

    #[error("в колоде есть чужая карта {card}, не хватает {missing}")]
    ForeignCard { card: Card, missing: Card },
}

/// Ошибки движка блэкджека.
///
/// Любая ошибка возвращается до первой мутации: состояние раунда и банкролла не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимая ставка: {amount} (ставка должна быть положительной)")]
    InvalidBet { amount: i64 },

    #[error("Недостаточно фишек: ставка {bet}, на счету {bankroll}")]
    InsufficientFunds { bet: Chips, bankroll: Chips },

    #[error("Действие {action:?} недопустимо в фазе {phase}")]
    InvalidPhaseTransition { action: GameAction, phase: RoundPhase },

    /// `needed` — нижняя граница: сколько карт понадобится дилеру, заранее не известно,
    /// поэтому для его хода это `remaining + 1`.
    #[error("В колоде недостаточно карт: нужно не меньше {needed}, осталось {remaining}; перетасуйте колоду")]
    InsufficientCards { needed: usize, remaining: usize },

    #[error("Колода повреждена: {0}")]
    DeckIntegrity(#[from] DeckIntegrityError),

    #[error("Нет активной ставки для расчёта")]
    NoActiveBet,

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Ошибки, после которых раздавать дальше можно только из новой колоды.
    pub fn requires_reshuffle(&self) -> bool {
        matches!(
            self,
            EngineError::InsufficientCards { .. } | EngineError::DeckIntegrity(_)
        )
    }
}
