use futures::Stream;

use crate::domain::{AccountKind, AccountStatus, Error, Money, Operation, Verdict};

/// Capabilities every account inherits from the base account.
pub trait BankAccount {
    fn holder(&self) -> &str;
    fn balance(&self) -> Money;
    fn status(&self) -> AccountStatus;

    fn is_active(&self) -> bool {
        self.status() == AccountStatus::Active
    }

    fn request_cheque_book(&mut self) -> Verdict;
    fn freeze(&mut self) -> Verdict;
    fn unfreeze(&mut self) -> Verdict;
}

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait AccountRepository {
    fn open_account(&mut self, key: &str, account: AccountKind) -> Result<(), Error>;

    fn get_account(&mut self, key: &str) -> Option<&mut AccountKind>;

    fn record(&mut self, key: &str, message: String);

    fn flush(&mut self);
}
