use std::fs::File;
use std::io::Read;
use std::path::Path;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation, OperationKind, Pin};

/// Reads an operation script: `type, account, amount, pin, holder`.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

impl CsvReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::new(file)
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    account: String,
    amount: Option<Money>,
    pin: Option<Pin>,
    holder: Option<String>,
}

fn require_amount(kind: &str, amount: Option<Money>) -> Result<Money, Error> {
    amount.ok_or_else(|| Error::Ingestion(format!("{} requires an amount", kind)))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if row.account.is_empty() {
            return Err(Error::Ingestion("Missing account key".to_string()));
        }

        let name = row.kind.trim().to_ascii_lowercase();
        let kind = match name.as_str() {
            "open_savings" => OperationKind::OpenSavings {
                holder: row.holder.unwrap_or_else(|| row.account.clone()),
                initial_balance: require_amount(&name, row.amount)?,
                pin: row
                    .pin
                    .ok_or_else(|| Error::Ingestion("open_savings requires a pin".to_string()))?,
            },
            "open_business" => OperationKind::OpenBusiness {
                holder: row.holder.unwrap_or_else(|| row.account.clone()),
                initial_balance: require_amount(&name, row.amount)?,
            },
            "balance" => OperationKind::CheckBalance { pin: row.pin },
            "deposit" => OperationKind::Deposit {
                amount: require_amount(&name, row.amount)?,
                pin: row.pin,
            },
            "withdraw" => OperationKind::Withdraw {
                amount: require_amount(&name, row.amount)?,
                pin: row.pin,
            },
            "cheque_book" => OperationKind::RequestChequeBook,
            "atm_card" => OperationKind::RequestAtmCard,
            "freeze" => OperationKind::Freeze,
            "unfreeze" => OperationKind::Unfreeze,
            "reset_daily" => OperationKind::ResetDailyWithdrawal,
            "loan" => OperationKind::RequestLoan {
                amount: require_amount(&name, row.amount)?,
            },
            other => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(Operation {
            kind,
            account: row.account,
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = std::pin::Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
