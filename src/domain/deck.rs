use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в детерминированном порядке:
    /// Clubs A..K, Diamonds A..K, Hearts A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Убрать из колоды карты, которые сейчас на руках (пересборка посреди раунда).
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }

    /// Все ли карты уникальны.
    pub fn has_unique_cards(&self) -> bool {
        let set: HashSet<&Card> = self.cards.iter().collect();
        set.len() == self.cards.len()
    }
}

/// Перемешанная колода, из которой идёт раздача.
///
/// Верх колоды — конец вектора: `draw_one` снимает последнюю карту.
/// Раздавать из неё имеет право только движок раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
}

impl ShuffledDeck {
    /// Пустая колода: состояние «ещё не перемешивали».
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Обернуть уже перемешанную последовательность (верх = последний элемент).
    /// Проверку целостности делает `engine::shuffle`.
    pub(crate) fn from_shuffled(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Колода с заранее заданным порядком выдачи: первая карта списка уйдёт первой.
    ///
    /// Нужна для реплеев и сценарных тестов. Колода может быть короче 52 карт;
    /// на дубли её проверяет `GameSession::with_deck`.
    pub fn stacked(draw_order: Vec<Card>) -> Self {
        let mut cards = draw_order;
        cards.reverse();
        Self { cards }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Следующая карта без снятия.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Карты в порядке выдачи (первая — та, что уйдёт следующей).
    pub fn draw_order(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Все ли карты уникальны.
    pub fn has_unique_cards(&self) -> bool {
        let set: HashSet<&Card> = self.cards.iter().collect();
        set.len() == self.cards.len()
    }
}
