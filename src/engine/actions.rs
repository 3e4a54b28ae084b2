use serde::{Deserialize, Serialize};

/// Решение игрока в свой ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Взять ещё карту.
    Hit,
    /// Остановиться, ход переходит к дилеру.
    Stay,
}

/// Любое мутирующее действие над сессией. Нужен для ошибок фазы и логов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameAction {
    PlaceBet,
    Hit,
    Stay,
    NewRound,
}

impl From<PlayerAction> for GameAction {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::Hit => GameAction::Hit,
            PlayerAction::Stay => GameAction::Stay,
        }
    }
}
