use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Лучшая сумма, выше которой рука перебрана.
pub const BLACKJACK_TOTAL: u8 = 21;

/// На сколько вырастает сумма, если один туз считать за 11, а не за 1.
const ACE_UPGRADE: u8 = 10;

/// Оценка руки. Не хранится отдельно — всегда выводится из карт через `score`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandValue {
    /// Лучшая сумма ≤ 21, если такая есть; иначе минимальная (все тузы = 1).
    pub total: u8,
    /// Есть туз, посчитанный как 11.
    pub is_soft: bool,
    /// total > 21.
    pub is_bust: bool,
    /// Ровно две карты: туз + десятка/картинка.
    pub is_blackjack: bool,
}

/// Посчитать руку.
///
/// Все тузы сначала идут за 1; затем один туз повышается до 11, если сумма
/// остаётся ≤ 21. Больше одного туза за 11 не бывает (2 × 11 = 22), поэтому
/// результат — максимум ≤ 21 и не зависит от порядка карт.
pub fn score(cards: &[Card]) -> HandValue {
    let hard_total: u32 = cards.iter().map(|c| c.points() as u32).sum();
    let has_ace = cards.iter().any(|c| c.is_ace());

    let is_soft = has_ace && hard_total + ACE_UPGRADE as u32 <= BLACKJACK_TOTAL as u32;
    let total = if is_soft {
        hard_total + ACE_UPGRADE as u32
    } else {
        hard_total
    };
    // После перебора рука не растёт, так что в игре сумма ≤ 30.
    // Искусственно длинные руки насыщаем.
    let total = u8::try_from(total).unwrap_or(u8::MAX);

    HandValue {
        total,
        is_soft,
        is_bust: total > BLACKJACK_TOTAL,
        is_blackjack: is_natural(cards),
    }
}

/// Натуральный блэкджек: 2 карты, туз и десятка/картинка.
pub fn is_natural(cards: &[Card]) -> bool {
    match cards {
        [a, b] => {
            (a.is_ace() && b.rank.is_ten_valued()) || (b.is_ace() && a.rank.is_ten_valued())
        }
        _ => false,
    }
}

/// Рука игрока или дилера. Только растёт в пределах раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn value(&self) -> HandValue {
        score(&self.cards)
    }

    pub fn total(&self) -> u8 {
        self.value().total
    }

    pub fn is_bust(&self) -> bool {
        self.value().is_bust
    }

    pub fn is_blackjack(&self) -> bool {
        is_natural(&self.cards)
    }
}
