// tests/engine_stress_tests.rs
//
// Стресс-тесты: проверяем устойчивость движка на длинных сериях раундов.
//
// 1) many_seeds_keep_invariants
//    - 50 сессий по 300 раундов, стратегия «добираем до 17».
//    - После каждого шага: нет дублей карт, колода + руки ≤ 52, фишки сходятся.
//
// 2) random_commands_never_corrupt_state
//    - Случайные команды (в том числе недопустимые в текущей фазе).
//    - Ошибка не меняет состояние; успешные шаги держат инварианты.
//
// 3) long_session_with_system_rng (#[ignore])
//    - 20_000 раундов на SystemRng.

use std::collections::HashSet;

use blackjack_engine::domain::{Card, Chips, GameConfig, RoundPhase};
use blackjack_engine::engine::{EngineError, GameSession, RandomSource, RoundStatus};
use blackjack_engine::infra::{DeterministicRng, SystemRng};

// ---------------------------------------------------------
// ИНВАРИАНТЫ
// ---------------------------------------------------------

fn assert_invariants<R: RandomSource>(session: &GameSession<R>) {
    let in_play = session.round().cards_in_play();
    let mut all: Vec<Card> = session.deck().cards().to_vec();
    // Карты завершённого раунда уже в сбросе: свежая колода может их содержать.
    if session.round().is_in_progress() {
        all.extend(in_play.iter().copied());
    }

    assert!(all.len() <= 52, "карт больше 52: {}", all.len());
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "дубли карт в колоде и на руках");

    let round = session.round();
    match round.phase {
        RoundPhase::AwaitingBet => {
            assert!(in_play.is_empty());
            assert_eq!(session.current_bet(), Chips::ZERO);
            assert!(round.outcome.is_none());
        }
        RoundPhase::PlayerTurn => {
            assert!(!round.player.is_bust());
            assert!(!round.hole_card_revealed);
            assert_eq!(round.dealer.len(), 2);
            assert!(session.current_bet() > Chips::ZERO);
        }
        RoundPhase::Concluded => {
            assert!(round.outcome.is_some());
            assert!(round.summary.is_some());
            assert!(round.hole_card_revealed);
            assert_eq!(session.current_bet(), Chips::ZERO);
        }
        // Промежуточные фазы снаружи не видны.
        RoundPhase::Dealt | RoundPhase::DealerTurn => {
            panic!("промежуточная фаза {} видна снаружи", round.phase)
        }
    }
}

fn play_hit_to_17<R: RandomSource>(session: &mut GameSession<R>, bet: i64) -> RoundStatus {
    let mut status = session.place_bet(bet).expect("bet accepted");
    assert_invariants(session);

    while !status.is_finished() {
        let result = if session.round().player.total() < 17 {
            session.hit()
        } else {
            session.stay()
        };
        status = match result {
            Ok(s) => s,
            Err(e) if e.requires_reshuffle() => {
                session.shuffle().expect("mid-round shuffle");
                continue;
            }
            Err(e) => panic!("неожиданная ошибка: {e}"),
        };
        assert_invariants(session);
    }
    status
}

// ---------------------------------------------------------
// 1) many_seeds_keep_invariants
// ---------------------------------------------------------

#[test]
fn many_seeds_keep_invariants() {
    let config = GameConfig {
        starting_bankroll: Chips(1_000_000),
        ..GameConfig::default()
    };

    for seed in 0..50u64 {
        let mut session =
            GameSession::with_config(config.clone(), DeterministicRng::from_seed(seed)).unwrap();
        session.shuffle().unwrap();

        for _ in 0..300 {
            let before = session.bankroll();
            let RoundStatus::Finished(summary) = play_hit_to_17(&mut session, 25) else {
                panic!("раунд не завершился");
            };
            assert_eq!(
                session.bankroll().signed_diff(Chips::ZERO),
                before.signed_diff(Chips::ZERO) + summary.net,
                "seed={seed}"
            );
            session.new_round().unwrap();
            assert_invariants(&session);
        }
        assert_eq!(session.rounds_played(), 300);
    }
}

// ---------------------------------------------------------
// 2) random_commands_never_corrupt_state
// ---------------------------------------------------------

#[test]
fn random_commands_never_corrupt_state() {
    let mut session = GameSession::new_game(DeterministicRng::from_seed(777));
    let mut picker = DeterministicRng::from_seed(4242);

    for _ in 0..5_000 {
        let round_before = session.round().clone();
        let bankroll_before = session.bankroll();
        let deck_before = session.deck().clone();

        let result: Result<(), EngineError> = match picker.index_inclusive(7) {
            0 => session.shuffle().map(|_| ()),
            1 => {
                let amount = picker.index_inclusive(200) as i64 - 20;
                session.place_bet(amount).map(|_| ())
            }
            2 | 3 => session.hit().map(|_| ()),
            4 => session.stay().map(|_| ()),
            5 | 6 => session.new_round(),
            _ => {
                if picker.index_inclusive(20) == 0 {
                    session.reset_game();
                }
                Ok(())
            }
        };

        if result.is_err() {
            assert_eq!(session.round(), &round_before);
            assert_eq!(session.bankroll(), bankroll_before);
            assert_eq!(session.deck(), &deck_before);
        }
        assert_invariants(&session);

        // Игрок разорился — начинаем заново.
        if session.bankroll() == Chips::ZERO && session.phase() != RoundPhase::PlayerTurn {
            session.reset_game();
        }
    }
}

// ---------------------------------------------------------
// 3) long_session_with_system_rng
// ---------------------------------------------------------

#[test]
#[ignore]
fn long_session_with_system_rng() {
    let config = GameConfig {
        starting_bankroll: Chips(100_000_000),
        ..GameConfig::default()
    };
    let mut session = GameSession::with_config(config, SystemRng).unwrap();
    session.shuffle().unwrap();

    for _ in 0..20_000 {
        play_hit_to_17(&mut session, 100);
        session.new_round().unwrap();
    }
    assert_eq!(session.rounds_played(), 20_000);
}
