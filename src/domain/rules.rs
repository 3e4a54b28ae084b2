use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::deck::DECK_SIZE;

/// Порог дилера: добирает, пока сумма меньше, стоит на ней и выше (включая soft 17).
pub const DEALER_STAND_TOTAL: u8 = 17;

/// Сколько карт нужно на стартовую раздачу (игрок, дилер, игрок, дилер).
pub const INITIAL_DEAL_CARDS: usize = 4;

/// Коэффициент выплаты за блэкджек как дробь.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };

    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Выигрыш (без ставки) с округлением вниз.
    pub fn winnings(&self, bet: Chips) -> Chips {
        bet.mul_ratio_floor(self.numerator, self.denominator)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::THREE_TO_TWO
    }
}

/// Конфиг игры: стартовый банкролл, перетасовка, выплаты, темп анимации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Банкролл новой игры / после reset.
    pub starting_bankroll: Chips,
    /// Если в колоде осталось меньше карт, `new_round` тасует свежую колоду.
    pub reshuffle_threshold: usize,
    /// Сколько раз пытаться перетасовать, пока не получится целая колода.
    pub max_shuffle_attempts: u32,
    /// Выплата за натуральный блэкджек.
    pub blackjack_payout: PayoutRatio,
    /// Пауза между картами дилера. Только для фронта, движок её не читает.
    pub dealer_draw_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_bankroll: Chips(1000),
            reshuffle_threshold: 15,
            max_shuffle_attempts: 3,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            dealer_draw_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Проверка конфига. Возвращает описание первой найденной проблемы.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_bankroll.is_zero() {
            return Err("starting_bankroll must be positive".into());
        }
        if self.reshuffle_threshold < INITIAL_DEAL_CARDS || self.reshuffle_threshold > DECK_SIZE {
            return Err(format!(
                "reshuffle_threshold must be in {INITIAL_DEAL_CARDS}..={DECK_SIZE}, got {}",
                self.reshuffle_threshold
            ));
        }
        if self.max_shuffle_attempts == 0 {
            return Err("max_shuffle_attempts must be at least 1".into());
        }
        if self.blackjack_payout.denominator == 0 {
            return Err("blackjack_payout denominator cannot be zero".into());
        }
        Ok(())
    }
}
