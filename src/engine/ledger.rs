use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Chips, Outcome, PayoutRatio};
use crate::engine::errors::EngineError;

/// Учёт ставки и банкролла игрока.
///
/// Политика «списание при ставке»: ставка уходит из банкролла сразу,
/// проигрыш ничего не делает, выигрыш и пуш возвращают фишки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLedger {
    bankroll: Chips,
    /// Ставка текущего раунда (0, пока приём ставок открыт).
    current_bet: Chips,
    /// Открыт ли приём ставок.
    betting_open: bool,
    blackjack_payout: PayoutRatio,
}

impl BetLedger {
    pub fn new(bankroll: Chips, blackjack_payout: PayoutRatio) -> Self {
        Self {
            bankroll,
            current_bet: Chips::ZERO,
            betting_open: true,
            blackjack_payout,
        }
    }

    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn is_betting_open(&self) -> bool {
        self.betting_open
    }

    /// Проверить ставку без изменения состояния.
    pub fn validate_bet(&self, amount: i64) -> Result<Chips, EngineError> {
        if !self.betting_open {
            return Err(EngineError::Internal("ставка уже принята в этом раунде"));
        }
        if amount <= 0 {
            return Err(EngineError::InvalidBet { amount });
        }
        let bet = Chips(amount as u64);
        if bet > self.bankroll {
            return Err(EngineError::InsufficientFunds {
                bet,
                bankroll: self.bankroll,
            });
        }
        Ok(bet)
    }

    /// Принять ставку: списать из банкролла и закрыть приём ставок.
    pub fn place_bet(&mut self, amount: i64) -> Result<Chips, EngineError> {
        let bet = match self.validate_bet(amount) {
            Ok(bet) => bet,
            Err(e) => {
                warn!(amount, bankroll = self.bankroll.0, error = %e, "ставка отклонена");
                return Err(e);
            }
        };

        self.bankroll -= bet;
        self.current_bet = bet;
        self.betting_open = false;
        debug!(bet = bet.0, bankroll = self.bankroll.0, "ставка принята");
        Ok(bet)
    }

    /// Сколько вернётся в банкролл при данном исходе (ставка + выигрыш).
    pub fn payout_for(&self, outcome: Outcome, is_blackjack: bool) -> Chips {
        let bet = self.current_bet;
        match outcome {
            Outcome::PlayerWins if is_blackjack => bet + self.blackjack_payout.winnings(bet),
            Outcome::PlayerWins => bet + bet,
            Outcome::Push => bet,
            Outcome::DealerWins => Chips::ZERO,
        }
    }

    /// Расчёт раунда. Вызывается ровно один раз на раунд: повторный вызов
    /// без новой ставки вернёт `NoActiveBet` и ничего не зачислит.
    pub fn settle(&mut self, outcome: Outcome, is_blackjack: bool) -> Result<Chips, EngineError> {
        if self.betting_open {
            return Err(EngineError::NoActiveBet);
        }

        let credit = self.payout_for(outcome, is_blackjack);
        self.bankroll += credit;
        debug!(
            ?outcome,
            is_blackjack,
            bet = self.current_bet.0,
            credit = credit.0,
            bankroll = self.bankroll.0,
            "ставка рассчитана"
        );

        self.current_bet = Chips::ZERO;
        self.betting_open = true;
        Ok(credit)
    }
}
