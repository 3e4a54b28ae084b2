use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::domain::{Card, Deck, ShuffledDeck, DECK_SIZE};
use crate::engine::errors::{DeckIntegrityError, EngineError};
use crate::engine::RandomSource;

/// Перемешать колоду. Исходная колода не трогается — возвращается новая.
pub fn shuffle<R: RandomSource>(deck: &Deck, rng: &mut R) -> ShuffledDeck {
    let mut cards = deck.cards.clone();
    rng.shuffle(&mut cards);
    ShuffledDeck::from_shuffled(cards)
}

/// Проверка, что перемешанная колода — перестановка `source`, без дублей и потерь.
pub fn verify_permutation(source: &Deck, shuffled: &ShuffledDeck) -> Result<(), DeckIntegrityError> {
    if shuffled.remaining() != source.len() {
        return Err(DeckIntegrityError::WrongSize {
            expected: source.len(),
            actual: shuffled.remaining(),
        });
    }

    let seen: HashSet<&Card> = shuffled.cards().iter().collect();
    if seen.len() != shuffled.remaining() {
        return Err(DeckIntegrityError::DuplicateCards);
    }
    if let Some(missing) = source.cards.iter().find(|c| !seen.contains(c)) {
        // Размер совпал, дублей нет, но чего-то не хватает — значит, есть чужая карта.
        let source_set: HashSet<&Card> = source.cards.iter().collect();
        let foreign = shuffled.cards().iter().find(|c| !source_set.contains(c));
        return Err(match foreign {
            Some(card) => DeckIntegrityError::ForeignCard {
                card: *card,
                missing: *missing,
            },
            None => DeckIntegrityError::DuplicateCards,
        });
    }
    Ok(())
}

/// Свежая перемешанная колода из 52 карт за вычетом карт на руках.
///
/// Тасует заново, пока не получится корректная перестановка, но не больше
/// `max_attempts` раз. Короткую или битую колоду наружу не отдаёт никогда.
pub fn fresh_shuffled_deck<R: RandomSource>(
    rng: &mut R,
    in_play: &[Card],
    max_attempts: u32,
) -> Result<ShuffledDeck, EngineError> {
    let mut source = Deck::standard_52();
    source.remove_cards(in_play);

    if source.len() + in_play.len() != DECK_SIZE || !source.has_unique_cards() {
        error!(in_play = in_play.len(), "карты на руках не складываются в колоду");
        return Err(DeckIntegrityError::CardsInPlay.into());
    }

    let mut last_err = DeckIntegrityError::WrongSize {
        expected: source.len(),
        actual: 0,
    };

    for attempt in 1..=max_attempts.max(1) {
        let shuffled = shuffle(&source, rng);
        match verify_permutation(&source, &shuffled) {
            Ok(()) => {
                info!(attempt, cards = shuffled.remaining(), "колода перетасована");
                return Ok(shuffled);
            }
            Err(e) => {
                warn!(attempt, error = %e, "перетасовка дала битую колоду, повторяем");
                last_err = e;
            }
        }
    }

    error!(error = %last_err, "не удалось получить целую колоду");
    Err(last_err.into())
}
