pub mod account;
pub mod account_kind;
pub mod business;
pub mod error;
pub mod money;
pub mod operation;
pub mod outcome;
pub mod savings;
pub mod traits;

pub use account::{Account, AccountStatus};
pub use account_kind::AccountKind;
pub use business::BusinessAccount;
pub use error::Error;
pub use money::Money;
pub use operation::{Operation, OperationKind};
pub use outcome::{Action, Limit, Outcome, Rejection, Verdict};
pub use savings::{Pin, SavingsAccount};
pub use traits::{AccountRepository, BankAccount, DeadLetterQueue, OperationStream};
