use crate::domain::{Card, Hand, ShuffledDeck, DEALER_STAND_TOTAL};
use crate::engine::errors::EngineError;

/// Правило дома: добирать, пока сумма < 17. Soft 17 — стоим.
pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.total() < DEALER_STAND_TOTAL
}

/// Сыграть руку дилера до конца по правилу дома.
///
/// Возвращает карты в порядке добора. Если колода кончилась раньше, чем
/// дилер дошёл до 17, возвращает `InsufficientCards`; руку и колоду при этом
/// вызывающий должен откатить (движок играет на копиях).
pub fn play_out(hand: &mut Hand, deck: &mut ShuffledDeck) -> Result<Vec<Card>, EngineError> {
    let mut drawn = Vec::new();
    while dealer_should_hit(hand) {
        let card = deck.draw_one().ok_or(EngineError::InsufficientCards {
            needed: 1,
            remaining: 0,
        })?;
        hand.push(card);
        drawn.push(card);
    }
    Ok(drawn)
}
