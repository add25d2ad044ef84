use crate::domain::{
    AccountKind, BusinessAccount, Error, Operation, OperationKind, SavingsAccount,
    traits::{AccountRepository, DeadLetterQueue, OperationStream},
};

use futures::StreamExt;

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => match self.apply_operation(op) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!(operation = %op, "applying");

        match op.kind {
            OperationKind::OpenSavings {
                holder,
                initial_balance,
                pin,
            } => {
                let account = SavingsAccount::new(holder.clone(), initial_balance, pin);
                self.open(&op.account, AccountKind::Savings(account))?;
                self.output_repository.record(
                    &op.account,
                    format!(
                        "Savings account created for {} with initial balance ${}",
                        holder, initial_balance
                    ),
                );
                Ok(())
            }
            OperationKind::OpenBusiness {
                holder,
                initial_balance,
            } => {
                let account = BusinessAccount::new(holder.clone(), initial_balance);
                self.open(&op.account, AccountKind::Business(account))?;
                self.output_repository.record(
                    &op.account,
                    format!(
                        "Business account created for {} with initial balance ${}",
                        holder, initial_balance
                    ),
                );
                Ok(())
            }
            ref kind => {
                let account = self
                    .output_repository
                    .get_account(&op.account)
                    .ok_or_else(|| Error::Engine(format!("Unknown account {}", op.account)))?;

                let message = match account.perform(kind)? {
                    Some(Ok(outcome)) => {
                        if matches!(kind, OperationKind::Freeze | OperationKind::Unfreeze) {
                            tracing::info!(account = %op.account, %outcome, "status changed");
                        }
                        outcome.to_string()
                    }
                    Some(Err(rejection)) => {
                        tracing::debug!(account = %op.account, %rejection, "rejected");
                        rejection.to_string()
                    }
                    None => "Daily withdrawal counter reset".to_string(),
                };

                self.output_repository.record(&op.account, message);
                Ok(())
            }
        }
    }

    fn open(&mut self, key: &str, account: AccountKind) -> Result<(), Error> {
        let kind = account.label();
        self.output_repository.open_account(key, account)?;
        tracing::info!(account = key, kind, "account opened");
        Ok(())
    }

    pub fn flush(&mut self) {
        self.output_repository.flush();
    }

    pub fn output_repository(&self) -> &O {
        &self.output_repository
    }
}
