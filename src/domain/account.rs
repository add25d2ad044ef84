use crate::domain::{Action, BankAccount, Limit, Money, Outcome, Rejection, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Frozen, // blocks balance queries, deposits, withdrawals and requests
}

/// State shared by every kind of account. Savings and business accounts embed
/// one of these and build their rules on top of it.
#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    balance: Money,
    status: AccountStatus,
    cheque_book_requested: bool,
}

impl Account {
    pub fn new(holder: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            holder: holder.into(),
            balance: initial_balance,
            status: AccountStatus::Active,
            cheque_book_requested: false,
        }
    }

    pub fn check_balance(&self) -> Verdict {
        self.ensure_active(Action::Balance)?;
        Ok(Outcome::Balance(self.balance))
    }

    pub fn deposit(&mut self, amount: Money) -> Verdict {
        self.ensure_active(Action::Deposit)?;
        ensure_positive(amount, Action::Deposit)?;
        self.update_balance(amount)?;
        Ok(Outcome::Deposited {
            amount,
            balance: self.balance,
        })
    }

    pub(super) fn ensure_active(&self, action: Action) -> Result<(), Rejection> {
        match self.status {
            AccountStatus::Active => Ok(()),
            AccountStatus::Frozen => Err(Rejection::FrozenAccount(action)),
        }
    }

    /// Signed adjustment. Callers have already validated the movement; the
    /// balance is left untouched when the result would overflow.
    pub(super) fn update_balance(&mut self, delta: Money) -> Result<(), Rejection> {
        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or(Rejection::LimitExceeded(Limit::Balance))?;
        Ok(())
    }
}

pub(super) fn ensure_positive(amount: Money, action: Action) -> Result<(), Rejection> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(Rejection::InvalidAmount(action))
    }
}

impl BankAccount for Account {
    fn holder(&self) -> &str {
        &self.holder
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn status(&self) -> AccountStatus {
        self.status
    }

    fn request_cheque_book(&mut self) -> Verdict {
        self.ensure_active(Action::ChequeBook)?;
        if self.cheque_book_requested {
            return Err(Rejection::DuplicateRequest(Action::ChequeBook));
        }
        self.cheque_book_requested = true;
        Ok(Outcome::Approved(Action::ChequeBook))
    }

    fn freeze(&mut self) -> Verdict {
        if self.status == AccountStatus::Frozen {
            return Err(Rejection::NoOpTransition(AccountStatus::Frozen));
        }
        self.status = AccountStatus::Frozen;
        Ok(Outcome::Frozen)
    }

    fn unfreeze(&mut self) -> Verdict {
        if self.status == AccountStatus::Active {
            return Err(Rejection::NoOpTransition(AccountStatus::Active));
        }
        self.status = AccountStatus::Active;
        Ok(Outcome::Unfrozen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new("Alice", Money::from(100))
    }

    #[test]
    fn reports_balance_while_active() {
        let account = account();
        assert_eq!(account.holder(), "Alice");
        assert_eq!(account.check_balance(), Ok(Outcome::Balance(Money::from(100))));
        assert_eq!(account.check_balance().unwrap().to_string(), "Balance: $100");
    }

    #[test]
    fn deposit_adds_positive_amounts_only() {
        let mut account = account();
        assert_eq!(
            account.deposit(Money::from(50)),
            Ok(Outcome::Deposited {
                amount: Money::from(50),
                balance: Money::from(150),
            })
        );

        for amount in [0, -10] {
            assert_eq!(
                account.deposit(Money::from(amount)),
                Err(Rejection::InvalidAmount(Action::Deposit))
            );
        }
        assert_eq!(account.balance(), Money::from(150));
    }

    #[test]
    fn frozen_account_rejects_everything_but_unfreeze() {
        let mut account = account();
        assert_eq!(account.freeze(), Ok(Outcome::Frozen));
        assert!(!account.is_active());

        assert_eq!(
            account.check_balance(),
            Err(Rejection::FrozenAccount(Action::Balance))
        );
        let rejected = account.deposit(Money::from(10));
        assert_eq!(rejected, Err(Rejection::FrozenAccount(Action::Deposit)));
        assert_eq!(
            rejected.unwrap_err().to_string(),
            "Account is frozen. Cannot deposit."
        );
        assert_eq!(
            account.request_cheque_book(),
            Err(Rejection::FrozenAccount(Action::ChequeBook))
        );
        assert_eq!(account.balance(), Money::from(100));

        assert_eq!(account.unfreeze(), Ok(Outcome::Unfrozen));
        assert_eq!(
            account.request_cheque_book(),
            Ok(Outcome::Approved(Action::ChequeBook))
        );
    }

    #[test]
    fn redundant_transitions_are_reported() {
        let mut account = account();
        assert_eq!(
            account.unfreeze(),
            Err(Rejection::NoOpTransition(AccountStatus::Active))
        );
        account.freeze().unwrap();
        assert_eq!(
            account.freeze(),
            Err(Rejection::NoOpTransition(AccountStatus::Frozen))
        );
        assert_eq!(account.status(), AccountStatus::Frozen);
    }

    #[test]
    fn deposit_past_the_representable_range_is_rejected() {
        let max = Money::from_decimal_str("79228162514264337593543950335").unwrap();
        let mut account = Account::new("Alice", max);
        assert_eq!(
            account.deposit(Money::from(1)),
            Err(Rejection::LimitExceeded(Limit::Balance))
        );
        assert_eq!(account.balance(), max);
        assert_eq!(
            account.check_balance().unwrap().to_string(),
            "Balance: $79228162514264337593543950335"
        );
    }

    #[test]
    fn cheque_book_is_one_shot() {
        let mut account = account();
        assert_eq!(
            account.request_cheque_book(),
            Ok(Outcome::Approved(Action::ChequeBook))
        );
        assert_eq!(
            account.request_cheque_book(),
            Err(Rejection::DuplicateRequest(Action::ChequeBook))
        );
    }
}
