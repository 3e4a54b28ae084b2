use serde::{Deserialize, Serialize};

use crate::domain::RoundPhase;
use crate::engine::{GameSession, RandomSource, RoundEngine, RoundEvent};

use super::dto::{DealerHandDto, GameViewDto, PlayerHandDto, RoundResultDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полное состояние игры.
    GetState,

    /// События текущего раунда, начиная с индекса `from`.
    GetRoundEvents { from: usize },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    State(GameViewDto),
    RoundEvents(Vec<RoundEvent>),
}

/// Сформировать DTO состояния игры из сессии.
pub fn build_game_view<R: RandomSource>(session: &GameSession<R>) -> GameViewDto {
    let round = session.round();
    let phase = round.phase;

    GameViewDto {
        round_id: round.round_id,
        phase,
        player_hand: build_player_dto(round),
        dealer_hand: build_dealer_dto(round),
        outcome: round.outcome,
        result: round.summary.as_ref().map(RoundResultDto::from),
        bankroll: session.bankroll(),
        current_bet: session.current_bet(),
        can_bet: phase == RoundPhase::AwaitingBet,
        player_can_act: phase == RoundPhase::PlayerTurn,
        deck_shuffled: session.is_deck_shuffled(),
        cards_remaining: session.deck().remaining(),
        rounds_played: session.rounds_played(),
    }
}

fn build_player_dto(round: &RoundEngine) -> PlayerHandDto {
    let value = round.player.value();
    PlayerHandDto {
        cards: round.player.cards().to_vec(),
        total: value.total,
        is_soft: value.is_soft,
        is_bust: value.is_bust,
        is_blackjack: value.is_blackjack,
    }
}

/// Закрытая карта (индекс 1) маскируется, пока дилер её не открыл.
fn build_dealer_dto(round: &RoundEngine) -> DealerHandDto {
    let revealed = round.hole_card_revealed;
    let cards = round
        .dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(idx, card)| if idx == 1 && !revealed { None } else { Some(*card) })
        .collect();

    DealerHandDto {
        cards,
        hole_card_revealed: revealed,
        total: revealed.then(|| round.dealer.total()),
    }
}
