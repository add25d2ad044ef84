use crate::domain::{AccountStatus, Money};

/// Result of a single account operation. Both sides render the customer
/// facing message through `Display`.
pub type Verdict = Result<Outcome, Rejection>;

/// What an operation was trying to do, used to pick the wording of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Deposit,
    Withdrawal,
    Loan,
    ChequeBook,
    AtmCard,
}

fn frozen_message(action: &Action) -> &'static str {
    match action {
        Action::Deposit => "Account is frozen. Cannot deposit.",
        _ => "Account is frozen",
    }
}

fn label(action: &Action) -> &'static str {
    match action {
        Action::Balance => "Balance",
        Action::Deposit => "Deposit",
        Action::Withdrawal => "Withdrawal",
        Action::Loan => "Loan",
        Action::ChequeBook => "Cheque book",
        Action::AtmCard => "ATM card",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    DailyWithdrawal,
    Overdraft,
    Loan,
    Balance, // the resulting balance would not be representable
}

fn limit_message(limit: &Limit) -> &'static str {
    match limit {
        Limit::DailyWithdrawal => "Daily withdrawal limit exceeded",
        Limit::Overdraft => "Insufficient funds (exceeds overdraft limit)",
        Limit::Loan => "Loan amount exceeds limit",
        Limit::Balance => "Balance limit exceeded",
    }
}

fn already_message(status: &AccountStatus) -> &'static str {
    match status {
        AccountStatus::Frozen => "Account already frozen",
        AccountStatus::Active => "Account already active",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Deposited { amount: Money, balance: Money },
    Withdrew { amount: Money, balance: Money },
    Approved(Action),
    Frozen,
    Unfrozen,
    LoanApproved { amount: Money, balance: Money },
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Balance(balance) => write!(f, "Balance: ${}", balance),
            Outcome::Deposited { amount, balance } => {
                write!(f, "Deposited ${}. New balance: ${}", amount, balance)
            }
            Outcome::Withdrew { amount, balance } => {
                write!(f, "Withdrew ${}. New balance: ${}", amount, balance)
            }
            Outcome::Approved(item) => write!(f, "{} request approved", label(item)),
            Outcome::Frozen => write!(f, "Account frozen successfully"),
            Outcome::Unfrozen => write!(f, "Account unfrozen successfully"),
            Outcome::LoanApproved { amount, balance } => {
                write!(f, "Loan of ${} approved. New balance: ${}", amount, balance)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{}", frozen_message(.0))]
    FrozenAccount(Action),

    #[error("{} amount must be positive", label(.0))]
    InvalidAmount(Action),

    #[error("Invalid PIN")]
    InvalidCredential,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("{}", limit_message(.0))]
    LimitExceeded(Limit),

    #[error("{} already requested", label(.0))]
    DuplicateRequest(Action),

    /// Carries the status the account was already in.
    #[error("{}", already_message(.0))]
    NoOpTransition(AccountStatus),

    #[error("Existing loan must be paid first")]
    ExistingLoan,
}
