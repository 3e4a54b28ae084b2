use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Outcome, RoundId, RoundPhase, RoundSummary};
use crate::engine::RoundEvent;

/// Рука игрока — всегда открыта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandDto {
    pub cards: Vec<Card>,
    pub total: u8,
    pub is_soft: bool,
    pub is_bust: bool,
    pub is_blackjack: bool,
}

/// Рука дилера. Закрытая карта отдаётся как `None`, пока её не открыли.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerHandDto {
    pub cards: Vec<Option<Card>>,
    pub hole_card_revealed: bool,
    /// Сумма дилера — только после открытия закрытой карты.
    pub total: Option<u8>,
}

/// Итог последнего завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResultDto {
    pub outcome: Outcome,
    pub blackjack: bool,
    pub bet: Chips,
    pub credited: Chips,
    pub net: i64,
}

impl From<&RoundSummary> for RoundResultDto {
    fn from(s: &RoundSummary) -> Self {
        Self {
            outcome: s.outcome,
            blackjack: s.blackjack,
            bet: s.bet,
            credited: s.credited,
            net: s.net,
        }
    }
}

/// Полное состояние игры для фронта (`getState`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub player_hand: PlayerHandDto,
    pub dealer_hand: DealerHandDto,
    pub outcome: Option<Outcome>,
    pub result: Option<RoundResultDto>,
    pub bankroll: Chips,
    pub current_bet: Chips,
    /// Можно ли сейчас ставить (только `AwaitingBet`).
    pub can_bet: bool,
    /// Можно ли жать Hit/Stay (только `PlayerTurn`; во время хода дилера — нет).
    pub player_can_act: bool,
    pub deck_shuffled: bool,
    pub cards_remaining: usize,
    pub rounds_played: u64,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Обновлённое состояние (раунд продолжается или ждёт ставку).
    State(GameViewDto),

    /// Колода перетасована.
    Shuffled { cards_remaining: usize },

    /// Раунд завершён: состояние + события раунда для проигрывания с паузами.
    RoundFinished {
        state: GameViewDto,
        events: Vec<RoundEvent>,
    },
}
