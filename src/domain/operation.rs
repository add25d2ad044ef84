use crate::domain::{Money, Pin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    OpenSavings {
        holder: String,
        initial_balance: Money,
        pin: Pin,
    },
    OpenBusiness {
        holder: String,
        initial_balance: Money,
    },
    CheckBalance {
        pin: Option<Pin>,
    },
    Deposit {
        amount: Money,
        pin: Option<Pin>,
    },
    Withdraw {
        amount: Money,
        pin: Option<Pin>,
    },
    RequestChequeBook,
    RequestAtmCard,
    Freeze,
    Unfreeze,
    ResetDailyWithdrawal,
    RequestLoan {
        amount: Money,
    },
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::OpenSavings { .. } => "open_savings",
            OperationKind::OpenBusiness { .. } => "open_business",
            OperationKind::CheckBalance { .. } => "balance",
            OperationKind::Deposit { .. } => "deposit",
            OperationKind::Withdraw { .. } => "withdraw",
            OperationKind::RequestChequeBook => "cheque_book",
            OperationKind::RequestAtmCard => "atm_card",
            OperationKind::Freeze => "freeze",
            OperationKind::Unfreeze => "unfreeze",
            OperationKind::ResetDailyWithdrawal => "reset_daily",
            OperationKind::RequestLoan { .. } => "loan",
        }
    }

    fn amount(&self) -> Option<Money> {
        match self {
            OperationKind::OpenSavings {
                initial_balance, ..
            }
            | OperationKind::OpenBusiness {
                initial_balance, ..
            } => Some(*initial_balance),
            OperationKind::Deposit { amount, .. }
            | OperationKind::Withdraw { amount, .. }
            | OperationKind::RequestLoan { amount } => Some(*amount),
            _ => None,
        }
    }
}

/// One scripted step against the account registered under `account`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub account: String,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // PINs stay out of the rendering, it ends up in logs
        match self.kind.amount() {
            Some(amount) => write!(
                f,
                "{},account={},amount={}",
                self.kind.name(),
                self.account,
                amount
            ),
            None => write!(f, "{},account={}", self.kind.name(), self.account),
        }
    }
}
