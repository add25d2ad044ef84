use crate::domain::{
    AccountStatus, BankAccount, BusinessAccount, Error, Money, OperationKind, Pin, SavingsAccount,
    Verdict,
};

/// An account held by the engine, whichever variant it is.
#[derive(Debug, Clone)]
pub enum AccountKind {
    Savings(SavingsAccount),
    Business(BusinessAccount),
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings(_) => "savings",
            AccountKind::Business(_) => "business",
        }
    }

    fn as_bank_account(&self) -> &dyn BankAccount {
        match self {
            AccountKind::Savings(account) => account,
            AccountKind::Business(account) => account,
        }
    }

    fn as_bank_account_mut(&mut self) -> &mut dyn BankAccount {
        match self {
            AccountKind::Savings(account) => account,
            AccountKind::Business(account) => account,
        }
    }

    pub fn holder(&self) -> &str {
        self.as_bank_account().holder()
    }

    pub fn balance(&self) -> Money {
        self.as_bank_account().balance()
    }

    pub fn status(&self) -> AccountStatus {
        self.as_bank_account().status()
    }

    /// Applies one operation. `Ok(None)` means the operation succeeded without
    /// anything to report; `Err` means it cannot be applied to this account at
    /// all, which is different from the account rejecting it.
    pub fn perform(&mut self, kind: &OperationKind) -> Result<Option<Verdict>, Error> {
        let verdict = match (self, kind) {
            (account, OperationKind::RequestChequeBook) => {
                account.as_bank_account_mut().request_cheque_book()
            }
            (account, OperationKind::Freeze) => account.as_bank_account_mut().freeze(),
            (account, OperationKind::Unfreeze) => account.as_bank_account_mut().unfreeze(),

            (AccountKind::Savings(account), OperationKind::CheckBalance { pin }) => {
                account.check_balance(required_pin(pin)?)
            }
            (AccountKind::Savings(account), OperationKind::Deposit { amount, pin }) => {
                account.deposit(*amount, required_pin(pin)?)
            }
            (AccountKind::Savings(account), OperationKind::Withdraw { amount, pin }) => {
                account.withdraw(*amount, required_pin(pin)?)
            }
            (AccountKind::Savings(account), OperationKind::RequestAtmCard) => {
                account.request_atm_card()
            }
            (AccountKind::Savings(account), OperationKind::ResetDailyWithdrawal) => {
                account.reset_daily_withdrawal();
                return Ok(None);
            }

            (AccountKind::Business(account), OperationKind::CheckBalance { pin }) => {
                no_pin(pin)?;
                account.check_balance()
            }
            (AccountKind::Business(account), OperationKind::Deposit { amount, pin }) => {
                no_pin(pin)?;
                account.deposit(*amount)
            }
            (AccountKind::Business(account), OperationKind::Withdraw { amount, pin }) => {
                no_pin(pin)?;
                account.withdraw(*amount)
            }
            (AccountKind::Business(account), OperationKind::RequestLoan { amount }) => {
                account.request_loan(*amount)
            }

            (account, kind) => {
                return Err(Error::Engine(format!(
                    "{} is not supported by {} accounts",
                    kind.name(),
                    account.label()
                )));
            }
        };

        Ok(Some(verdict))
    }
}

fn required_pin(pin: &Option<Pin>) -> Result<&Pin, Error> {
    pin.as_ref()
        .ok_or_else(|| Error::Engine("Savings accounts require a PIN".to_string()))
}

fn no_pin(pin: &Option<Pin>) -> Result<(), Error> {
    match pin {
        Some(_) => Err(Error::Engine(
            "Business accounts do not take a PIN".to_string(),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, Outcome, Rejection};

    fn savings() -> AccountKind {
        AccountKind::Savings(SavingsAccount::new(
            "Narendra",
            Money::from(1000),
            Pin::from(1234),
        ))
    }

    fn business() -> AccountKind {
        AccountKind::Business(BusinessAccount::new("Tech Corp", Money::from(5000)))
    }

    #[test]
    fn dispatches_to_the_variant() {
        let mut account = savings();
        let verdict = account
            .perform(&OperationKind::Withdraw {
                amount: Money::from(200),
                pin: Some(Pin::from(1234)),
            })
            .unwrap();
        assert_eq!(
            verdict,
            Some(Ok(Outcome::Withdrew {
                amount: Money::from(200),
                balance: Money::from(800),
            }))
        );
        assert_eq!(account.perform(&OperationKind::ResetDailyWithdrawal).unwrap(), None);

        let mut account = business();
        assert_eq!(
            account
                .perform(&OperationKind::RequestChequeBook)
                .unwrap(),
            Some(Ok(Outcome::Approved(Action::ChequeBook)))
        );
        assert_eq!(
            account.perform(&OperationKind::Freeze).unwrap(),
            Some(Ok(Outcome::Frozen))
        );
        assert_eq!(
            account
                .perform(&OperationKind::RequestLoan {
                    amount: Money::from(10),
                })
                .unwrap(),
            Some(Err(Rejection::FrozenAccount(Action::Loan)))
        );
        assert_eq!(account.status(), AccountStatus::Frozen);
    }

    #[test]
    fn rejects_operations_the_variant_lacks() {
        let mut account = savings();
        assert!(matches!(
            account.perform(&OperationKind::RequestLoan {
                amount: Money::from(10),
            }),
            Err(Error::Engine(_))
        ));
        assert!(matches!(
            account.perform(&OperationKind::CheckBalance { pin: None }),
            Err(Error::Engine(_))
        ));

        let mut account = business();
        assert!(matches!(
            account.perform(&OperationKind::RequestAtmCard),
            Err(Error::Engine(_))
        ));
        assert!(matches!(
            account.perform(&OperationKind::Deposit {
                amount: Money::from(10),
                pin: Some(Pin::from(1)),
            }),
            Err(Error::Engine(_))
        ));
        assert_eq!(account.balance(), Money::from(5000));
    }
}
