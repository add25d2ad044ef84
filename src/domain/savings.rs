use serde::Deserialize;

use crate::domain::account::ensure_positive;
use crate::domain::{
    Account, AccountStatus, Action, BankAccount, Limit, Money, Outcome, Rejection, Verdict,
};

/// Opaque credential compared by exact match.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    pub fn new(pin: impl Into<String>) -> Self {
        Self(pin.into())
    }
}

impl From<&str> for Pin {
    fn from(pin: &str) -> Self {
        Self::new(pin)
    }
}

impl From<u32> for Pin {
    fn from(pin: u32) -> Self {
        Self(pin.to_string())
    }
}

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// PIN protected account with a daily withdrawal allowance.
///
/// Every PIN gated operation checks, in order: the account is active, the PIN
/// matches, the amount is valid. A frozen account therefore reports being
/// frozen even when the PIN is wrong.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    account: Account,
    pin: Pin,
    atm_card_requested: bool,
    daily_withdrawal_limit: Money,
    daily_withdrawn: Money,
}

impl SavingsAccount {
    pub const DAILY_WITHDRAWAL_LIMIT: i64 = 1000;

    pub fn new(holder: impl Into<String>, initial_balance: Money, pin: Pin) -> Self {
        Self {
            account: Account::new(holder, initial_balance),
            pin,
            atm_card_requested: false,
            daily_withdrawal_limit: Money::from(Self::DAILY_WITHDRAWAL_LIMIT),
            daily_withdrawn: Money::zero(),
        }
    }

    pub fn daily_withdrawal_limit(&self) -> Money {
        self.daily_withdrawal_limit
    }

    pub fn daily_withdrawn(&self) -> Money {
        self.daily_withdrawn
    }

    fn verify_pin(&self, pin: &Pin) -> Result<(), Rejection> {
        if &self.pin == pin {
            Ok(())
        } else {
            Err(Rejection::InvalidCredential)
        }
    }

    pub fn check_balance(&self, pin: &Pin) -> Verdict {
        self.account.ensure_active(Action::Balance)?;
        self.verify_pin(pin)?;
        self.account.check_balance()
    }

    pub fn deposit(&mut self, amount: Money, pin: &Pin) -> Verdict {
        self.account.ensure_active(Action::Deposit)?;
        self.verify_pin(pin)?;
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Money, pin: &Pin) -> Verdict {
        self.account.ensure_active(Action::Withdrawal)?;
        self.verify_pin(pin)?;
        ensure_positive(amount, Action::Withdrawal)?;
        if amount > self.account.balance() {
            return Err(Rejection::InsufficientFunds);
        }
        let withdrawn = self
            .daily_withdrawn
            .checked_add(amount)
            .filter(|withdrawn| *withdrawn <= self.daily_withdrawal_limit)
            .ok_or(Rejection::LimitExceeded(Limit::DailyWithdrawal))?;

        self.account.update_balance(-amount)?;
        self.daily_withdrawn = withdrawn;
        Ok(Outcome::Withdrew {
            amount,
            balance: self.account.balance(),
        })
    }

    pub fn request_atm_card(&mut self) -> Verdict {
        self.account.ensure_active(Action::AtmCard)?;
        if self.atm_card_requested {
            return Err(Rejection::DuplicateRequest(Action::AtmCard));
        }
        self.atm_card_requested = true;
        Ok(Outcome::Approved(Action::AtmCard))
    }

    /// There is no clock behind the allowance; callers decide when a day ends.
    pub fn reset_daily_withdrawal(&mut self) {
        self.daily_withdrawn = Money::zero();
    }
}

impl BankAccount for SavingsAccount {
    fn holder(&self) -> &str {
        self.account.holder()
    }

    fn balance(&self) -> Money {
        self.account.balance()
    }

    fn status(&self) -> AccountStatus {
        self.account.status()
    }

    fn request_cheque_book(&mut self) -> Verdict {
        self.account.request_cheque_book()
    }

    fn freeze(&mut self) -> Verdict {
        self.account.freeze()
    }

    fn unfreeze(&mut self) -> Verdict {
        self.account.unfreeze()
    }
}
