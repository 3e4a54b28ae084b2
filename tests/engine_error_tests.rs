// tests/engine_error_tests.rs
//
// Ошибки движка: каждая отклонённая операция не меняет ни раунд, ни банкролл.
//
// Мы тестируем:
//  1) hit / stay вне PlayerTurn -> InvalidPhaseTransition
//  2) ставка вне AwaitingBet -> InvalidPhaseTransition
//  3) неположительная ставка -> InvalidBet
//  4) ставка больше банкролла -> InsufficientFunds
//  5) ставка без перетасованной колоды / в короткой колоде -> InsufficientCards
//  6) hit / stay при пустой колоде -> InsufficientCards, затем перетасовка посреди раунда
//  7) new_round вне Concluded -> InvalidPhaseTransition
//  8) reset_game из любой фазы
//  9) некорректный конфиг -> InvalidConfig

use blackjack_engine::domain::{Card, Chips, GameConfig, RoundPhase, ShuffledDeck};
use blackjack_engine::engine::{DeckIntegrityError, EngineError, GameAction, GameSession, RoundStatus};
use blackjack_engine::infra::DeterministicRng;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn c(s: &str) -> Card {
    s.parse().expect("valid card notation")
}

fn stacked_session(draw_order: &[&str]) -> GameSession<DeterministicRng> {
    GameSession::with_deck(
        GameConfig::default(),
        DeterministicRng::from_seed(7),
        ShuffledDeck::stacked(draw_order.iter().map(|s| c(s)).collect()),
    )
    .expect("default config is valid")
}

fn shuffled_session(seed: u64) -> GameSession<DeterministicRng> {
    let mut session = GameSession::new_game(DeterministicRng::from_seed(seed));
    session.shuffle().expect("shuffle of a fresh deck");
    session
}

// 1) -------------------------------------------------------------

#[test]
fn hit_before_bet_is_rejected_without_changes() {
    let mut session = shuffled_session(1);
    let deck_before = session.deck().clone();

    let err = session.hit().unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPhaseTransition {
            action: GameAction::Hit,
            phase: RoundPhase::AwaitingBet,
        }
    );
    assert_eq!(session.phase(), RoundPhase::AwaitingBet);
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.deck(), &deck_before);
    assert!(session.round().player.is_empty());
}

#[test]
fn stay_after_conclusion_is_rejected() {
    let mut session = stacked_session(&["Tc", "9h", "8c", "9d"]);
    session.place_bet(100).unwrap();
    session.stay().unwrap();
    let round_before = session.round().clone();

    let err = session.stay().unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidPhaseTransition {
            action: GameAction::Stay,
            phase: RoundPhase::Concluded
        }
    ));
    assert_eq!(session.round(), &round_before);

    let err = session.hit().unwrap_err();
    assert!(matches!(err, EngineError::InvalidPhaseTransition { .. }));
    assert_eq!(session.bankroll(), Chips(1000));
}

// 2) -------------------------------------------------------------

#[test]
fn second_bet_in_player_turn_is_rejected() {
    let mut session = stacked_session(&["Tc", "9h", "8c", "9d"]);
    session.place_bet(100).unwrap();
    assert_eq!(session.phase(), RoundPhase::PlayerTurn);

    let err = session.place_bet(50).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPhaseTransition {
            action: GameAction::PlaceBet,
            phase: RoundPhase::PlayerTurn,
        }
    );
    assert_eq!(session.bankroll(), Chips(900));
    assert_eq!(session.current_bet(), Chips(100));
}

// 3) -------------------------------------------------------------

#[test]
fn non_positive_bets_are_rejected() {
    let mut session = shuffled_session(2);

    for amount in [0, -5, i64::MIN] {
        let err = session.place_bet(amount).unwrap_err();
        assert_eq!(err, EngineError::InvalidBet { amount });
        assert!(!err.requires_reshuffle());
    }
    assert_eq!(session.phase(), RoundPhase::AwaitingBet);
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.deck().remaining(), 52);
}

// 4) -------------------------------------------------------------

#[test]
fn bet_above_bankroll_is_rejected() {
    let mut session = shuffled_session(3);

    let err = session.place_bet(1001).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            bet: Chips(1001),
            bankroll: Chips(1000),
        }
    );
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.phase(), RoundPhase::AwaitingBet);
    assert_eq!(session.deck().remaining(), 52);
}

// 5) -------------------------------------------------------------

#[test]
fn bet_before_shuffle_needs_a_deck() {
    let mut session = GameSession::new_game(DeterministicRng::from_seed(4));
    assert!(!session.is_deck_shuffled());

    let err = session.place_bet(10).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            needed: 4,
            remaining: 0,
        }
    );
    assert!(err.requires_reshuffle());
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.phase(), RoundPhase::AwaitingBet);
}

#[test]
fn bet_with_three_cards_left_is_rejected_without_debit() {
    let mut session = stacked_session(&["Tc", "9h", "8c"]);

    let err = session.place_bet(10).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            needed: 4,
            remaining: 3,
        }
    );
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.current_bet(), Chips::ZERO);
    assert_eq!(session.deck().remaining(), 3);
    assert!(session.round().history.is_empty());
}

// 6) -------------------------------------------------------------

#[test]
fn hit_on_empty_deck_then_reshuffle_mid_round() {
    let mut session = stacked_session(&["Tc", "9h", "6c", "7d"]);
    session.place_bet(100).unwrap();
    let round_before = session.round().clone();

    let err = session.hit().unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            needed: 1,
            remaining: 0,
        }
    );
    assert_eq!(session.round(), &round_before);
    assert_eq!(session.bankroll(), Chips(900));

    // Перетасовка посреди раунда: 52 минус 4 карты на руках.
    let remaining = session.shuffle().unwrap().remaining();
    assert_eq!(remaining, 48);
    let in_play = session.round().cards_in_play();
    for card in &in_play {
        assert!(!session.deck().cards().contains(card));
    }
    assert_eq!(session.phase(), RoundPhase::PlayerTurn);

    // Раунд продолжается как ни в чём не бывало.
    session.hit().unwrap();
    assert_eq!(session.round().player.len(), 3);
}

/// Дилеру нужна карта, а колода пуста: stay отклоняется целиком.
#[test]
fn stay_with_empty_deck_is_atomic() {
    let mut session = stacked_session(&["Tc", "Th", "6c", "6d"]);
    session.place_bet(100).unwrap();
    let round_before = session.round().clone();

    let err = session.stay().unwrap_err();
    assert!(matches!(err, EngineError::InsufficientCards { remaining: 0, .. }));
    assert_eq!(session.round(), &round_before);
    assert_eq!(session.phase(), RoundPhase::PlayerTurn);
    assert_eq!(session.round().dealer.len(), 2);
    assert!(!session.round().hole_card_revealed);
    assert_eq!(session.bankroll(), Chips(900));

    session.shuffle().unwrap();
    let status = session.stay().unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));
    assert_eq!(session.phase(), RoundPhase::Concluded);
    assert!(session.round().dealer.total() >= 17);
}

#[test]
fn dealer_runs_out_after_partial_draw() {
    // Дилер 12: добирает 2 → 14, дальше колода пуста.
    let mut session = stacked_session(&["Tc", "Th", "9c", "2d", "2s"]);
    session.place_bet(100).unwrap();

    let err = session.stay().unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            needed: 2,
            remaining: 1,
        }
    );
    assert!(err.to_string().contains("не меньше 2"));
    assert_eq!(session.deck().remaining(), 1);
    assert_eq!(session.round().dealer.len(), 2);
}

#[test]
fn stacked_deck_with_duplicates_is_rejected() {
    let deck = ShuffledDeck::stacked(vec![c("Ah"), c("Kd"), c("Ah"), c("7c")]);
    let err = GameSession::with_deck(GameConfig::default(), DeterministicRng::from_seed(8), deck)
        .err()
        .expect("duplicate cards must be rejected");
    assert_eq!(err, EngineError::DeckIntegrity(DeckIntegrityError::DuplicateCards));
    assert!(err.requires_reshuffle());

    // Неполная колода без дублей допустима.
    let short = ShuffledDeck::stacked(vec![c("Ah"), c("Kd")]);
    assert!(GameSession::with_deck(GameConfig::default(), DeterministicRng::from_seed(8), short).is_ok());
}

// 7) -------------------------------------------------------------

#[test]
fn new_round_outside_concluded_is_rejected() {
    let mut session = shuffled_session(5);

    let err = session.new_round().unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPhaseTransition {
            action: GameAction::NewRound,
            phase: RoundPhase::AwaitingBet,
        }
    );
    assert_eq!(session.round().round_id, 1);

    let mut session = stacked_session(&["Tc", "9h", "8c", "9d"]);
    session.place_bet(10).unwrap();
    assert!(session.new_round().is_err());
    assert_eq!(session.phase(), RoundPhase::PlayerTurn);
}

// 8) -------------------------------------------------------------

#[test]
fn reset_game_from_player_turn() {
    let mut session = stacked_session(&["Tc", "9h", "8c", "9d"]);
    session.place_bet(300).unwrap();
    assert_eq!(session.bankroll(), Chips(700));

    session.reset_game();
    assert_eq!(session.phase(), RoundPhase::AwaitingBet);
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.current_bet(), Chips::ZERO);
    assert!(session.round().player.is_empty());
    assert!(session.round().dealer.is_empty());
    assert!(!session.is_deck_shuffled());
    assert_eq!(session.rounds_played(), 0);

    // После сброса снова нужна перетасовка.
    assert!(matches!(
        session.place_bet(10),
        Err(EngineError::InsufficientCards { .. })
    ));
    session.shuffle().unwrap();
    assert!(session.place_bet(10).is_ok());
}

#[test]
fn reset_game_after_conclusion_restores_bankroll() {
    let mut session = stacked_session(&["Ah", "9c", "Kd", "7s"]);
    session.place_bet(100).unwrap();
    assert_eq!(session.bankroll(), Chips(1150));

    session.reset_game();
    assert_eq!(session.bankroll(), Chips(1000));
    assert_eq!(session.round().round_id, 1);
}

// 9) -------------------------------------------------------------

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        reshuffle_threshold: 100,
        ..GameConfig::default()
    };
    let err = GameSession::with_config(config, DeterministicRng::from_seed(0))
        .err()
        .expect("config must be rejected");
    assert!(matches!(err, EngineError::InvalidConfig(_)));
}
