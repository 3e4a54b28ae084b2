//! Движок блэкджека: колода, ставки, ход игрока, правило дилера, расчёт.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `shuffle` – свежая перемешанная колода
//!   - `place_bet` – ставка + стартовая раздача + проверка блэкджеков
//!   - `hit` / `stay` – ход игрока; `stay` доигрывает дилера и рассчитывает раунд
//!   - `new_round` / `reset_game` – следующий раунд / сброс сессии

pub mod actions;
pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod ledger;
pub mod round_history;
pub mod session;
pub mod shuffle;

pub use actions::{GameAction, PlayerAction};
pub use errors::{DeckIntegrityError, EngineError};
pub use game_loop::{apply_action, start_round, RoundEngine, RoundStatus};
pub use ledger::BetLedger;
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use session::GameSession;

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс из `[0, upper]` (включительно).
    fn index_inclusive(&mut self, upper: usize) -> usize;

    /// Fisher–Yates: от последнего индекса вниз до 1, обмен с равномерно выбранным из `[0, i]`.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_inclusive(i);
            slice.swap(i, j);
        }
    }
}
