use crate::domain::{DeadLetterQueue, Error};

#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        tracing::debug!(%error, "operation dead-lettered");
        eprintln!("DLQ Report - Error: {}", error);
    }
}
