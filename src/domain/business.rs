use crate::domain::account::ensure_positive;
use crate::domain::{
    Account, AccountStatus, Action, BankAccount, Limit, Money, Outcome, Rejection, Verdict,
};

/// Account without PIN gating that may run an overdraft and carry one loan.
#[derive(Debug, Clone)]
pub struct BusinessAccount {
    account: Account,
    overdraft_limit: Money,
    loan_limit: Money,
    current_loan: Money, // zero means no outstanding loan
}

impl BusinessAccount {
    pub const OVERDRAFT_LIMIT: i64 = 5000;
    pub const LOAN_LIMIT: i64 = 10_000;

    pub fn new(business_name: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            account: Account::new(business_name, initial_balance),
            overdraft_limit: Money::from(Self::OVERDRAFT_LIMIT),
            loan_limit: Money::from(Self::LOAN_LIMIT),
            current_loan: Money::zero(),
        }
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    pub fn loan_limit(&self) -> Money {
        self.loan_limit
    }

    pub fn current_loan(&self) -> Money {
        self.current_loan
    }

    pub fn check_balance(&self) -> Verdict {
        self.account.check_balance()
    }

    pub fn deposit(&mut self, amount: Money) -> Verdict {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Money) -> Verdict {
        self.account.ensure_active(Action::Withdrawal)?;
        ensure_positive(amount, Action::Withdrawal)?;

        // only an upward overflow is possible here, and then funds are ample
        let available_funds = self.account.balance().checked_add(self.overdraft_limit);
        if available_funds.is_some_and(|available| amount > available) {
            return Err(Rejection::LimitExceeded(Limit::Overdraft));
        }

        self.account.update_balance(-amount)?;
        Ok(Outcome::Withdrew {
            amount,
            balance: self.account.balance(),
        })
    }

    /// Loan proceeds are credited immediately. There is no repayment, so an
    /// approved loan blocks every later request.
    pub fn request_loan(&mut self, amount: Money) -> Verdict {
        self.account.ensure_active(Action::Loan)?;
        ensure_positive(amount, Action::Loan)?;
        if amount > self.loan_limit {
            return Err(Rejection::LimitExceeded(Limit::Loan));
        }
        if self.current_loan.is_positive() {
            return Err(Rejection::ExistingLoan);
        }

        self.account.update_balance(amount)?;
        self.current_loan = amount;
        Ok(Outcome::LoanApproved {
            amount,
            balance: self.account.balance(),
        })
    }
}

impl BankAccount for BusinessAccount {
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
