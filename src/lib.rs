//! In-memory bank accounts: a base account with savings and business
//! variants, plus a small engine that runs operation scripts against them.

pub mod config;
pub mod demo;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output_repository;
pub mod shared;

pub use domain::{
    Account, AccountStatus, BankAccount, BusinessAccount, Error, Money, Outcome, Pin, Rejection,
    SavingsAccount, Verdict,
};
pub use shared::SharedAccount;
