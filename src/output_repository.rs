use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::{AccountKind, AccountRepository, AccountStatus, Error};

/// Keeps accounts in memory and prints the results on flush.
#[derive(Default, Debug)]
pub struct StdOutOutput {
    accounts: BTreeMap<String, AccountKind>, // ordered so the summary is stable
    journal: Vec<String>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            journal: Vec::new(),
        }
    }

    pub fn journal(&self) -> &[String] {
        &self.journal
    }

    /// CSV table of every account, quoted where a field needs it.
    pub fn summary(&self) -> Result<String, Error> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        wtr.write_record(["account", "kind", "holder", "balance", "active"])
            .map_err(|e| Error::Engine(e.to_string()))?;
        for (key, account) in &self.accounts {
            let balance = account.balance().to_string();
            let active = (account.status() == AccountStatus::Active).to_string();
            wtr.write_record([
                key.as_str(),
                account.label(),
                account.holder(),
                balance.as_str(),
                active.as_str(),
            ])
            .map_err(|e| Error::Engine(e.to_string()))?;
        }

        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(bytes).map_err(|e| Error::Engine(e.to_string()))
    }
}

impl AccountRepository for StdOutOutput {
    fn open_account(&mut self, key: &str, account: AccountKind) -> Result<(), Error> {
        match self.accounts.entry(key.to_string()) {
            Entry::Vacant(e) => {
                e.insert(account);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::Engine(format!(
                "Account {} already exists",
                key
            ))),
        }
    }

    fn get_account(&mut self, key: &str) -> Option<&mut AccountKind> {
        self.accounts.get_mut(key)
    }

    fn record(&mut self, key: &str, message: String) {
        self.journal.push(format!("{}: {}", key, message));
    }

    fn flush(&mut self) {
        for line in self.journal.drain(..) {
            println!("{}", line);
        }
        match self.summary() {
            Ok(summary) => print!("{}", summary),
            Err(error) => tracing::error!(%error, "failed to render the account summary"),
        }
    }
}
