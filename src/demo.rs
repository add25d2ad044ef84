use crate::domain::{BankAccount, BusinessAccount, Money, Pin, SavingsAccount, Verdict};

fn render(verdict: Verdict) -> String {
    match verdict {
        Ok(outcome) => outcome.to_string(),
        Err(rejection) => rejection.to_string(),
    }
}

struct Walkthrough {
    lines: Vec<String>,
    step: usize,
}

impl Walkthrough {
    fn step(&mut self, title: &str, result: String) {
        self.step += 1;
        let indent = if self.step < 10 { "   " } else { "    " };
        self.lines.push(format!("{}. {}", self.step, title));
        self.lines.push(format!("{}{}", indent, result));
        self.lines.push(String::new());
    }
}

/// The fixed customer walkthrough over one savings and one business account.
pub fn run_complete_test_flow() -> Vec<String> {
    let mut flow = Walkthrough {
        lines: vec![
            "=== BANK CUSTOMERWISE COMPLETE TEST FLOW ===".to_string(),
            String::new(),
        ],
        step: 0,
    };

    let pin = Pin::from(1234);
    let wrong_pin = Pin::from(9999);

    let mut savings = SavingsAccount::new("Narendra", Money::from(1000), pin.clone());
    flow.step(
        "Creating Savings Account...",
        "Savings account created for Narendra with initial balance $1000".to_string(),
    );
    flow.step(
        "Check balance with correct PIN (1234):",
        render(savings.check_balance(&pin)),
    );
    flow.step(
        "Check balance with wrong PIN (9999):",
        render(savings.check_balance(&wrong_pin)),
    );
    flow.step(
        "Withdraw $200 with correct PIN:",
        render(savings.withdraw(Money::from(200), &pin)),
    );
    flow.step(
        "Withdraw $900 (exceeds daily limit):",
        render(savings.withdraw(Money::from(900), &pin)),
    );
    flow.step(
        "Withdraw $100 with wrong PIN:",
        render(savings.withdraw(Money::from(100), &wrong_pin)),
    );
    flow.step(
        "Deposit $500 with correct PIN:",
        render(savings.deposit(Money::from(500), &pin)),
    );
    flow.step(
        "Deposit $100 with wrong PIN:",
        render(savings.deposit(Money::from(100), &wrong_pin)),
    );
    flow.step("Request ATM card:", render(savings.request_atm_card()));
    flow.step("Request ATM card again:", render(savings.request_atm_card()));
    flow.step("Request cheque book:", render(savings.request_cheque_book()));
    flow.step(
        "Request cheque book again:",
        render(savings.request_cheque_book()),
    );
    flow.step("Freeze account:", render(savings.freeze()));
    flow.step(
        "Withdraw after freeze:",
        render(savings.withdraw(Money::from(100), &pin)),
    );
    flow.step("Unfreeze account:", render(savings.unfreeze()));

    let mut business = BusinessAccount::new("Tech Corp", Money::from(5000));
    flow.step(
        "Create Business Account object:",
        "Business account created for Tech Corp with initial balance $5000".to_string(),
    );
    flow.step("Check balance:", render(business.check_balance()));
    flow.step(
        "Withdraw money within overdraft limit:",
        render(business.withdraw(Money::from(7000))),
    );
    flow.step(
        "Withdraw money above overdraft limit:",
        render(business.withdraw(Money::from(4000))),
    );
    flow.step(
        "Request loan within limit:",
        render(business.request_loan(Money::from(5000))),
    );
    flow.step(
        "Request loan above limit:",
        render(business.request_loan(Money::from(15_000))),
    );
    flow.step("Request cheque book:", render(business.request_cheque_book()));

    flow.lines.push("=== TEST FLOW COMPLETED ===".to_string());
    flow.lines
}
