// Facade: one `apply` call sequencing the bank, credit and background checks
// a mortgage application needs.

mod subsystems {
    use super::Customer;

    pub struct Bank;
    impl Bank {
        /// Savings must cover a tenth of the loan.
        pub fn verify(&self, customer: &Customer, amount: u64) -> bool {
            customer.savings.saturating_mul(10) >= amount
        }
    }

    pub struct Credit;
    impl Credit {
        pub fn score_ok(&self, customer: &Customer) -> bool {
            customer.credit_score >= 620
        }
    }

    pub struct Background;
    impl Background {
        pub fn clear(&self, customer: &Customer) -> bool {
            !customer.flagged
        }
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub savings: u64,
    pub credit_score: u32,
    pub flagged: bool,
}

impl Customer {
    pub fn new(name: impl Into<String>, savings: u64, credit_score: u32) -> Self {
        Self {
            name: name.into(),
            savings,
            credit_score,
            flagged: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub approved: bool,
    /// `(check, passed)` in the order the checks ran.
    pub checks: Vec<(&'static str, bool)>,
}

pub struct MortgageFacade {
    bank: subsystems::Bank,
    credit: subsystems::Credit,
    background: subsystems::Background,
}

impl Default for MortgageFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl MortgageFacade {
    pub fn new() -> Self {
        Self {
            bank: subsystems::Bank,
            credit: subsystems::Credit,
            background: subsystems::Background,
        }
    }

    /// Every check runs, always bank -> credit -> background.
    pub fn apply(&self, customer: &Customer, amount: u64) -> Application {
        let checks = vec![
            ("bank", self.bank.verify(customer, amount)),
            ("credit", self.credit.score_ok(customer)),
            ("background", self.background.clear(customer)),
        ];
        let approved = checks.iter().all(|(_, passed)| *passed);
        Application { approved, checks }
    }
}

pub fn demo() -> Vec<String> {
    let facade = MortgageFacade::new();
    let customer = Customer::new("Joan Templeton", 12_500, 700);
    let application = facade.apply(&customer, 100_000);

    let mut lines: Vec<String> = application
        .checks
        .iter()
        .map(|(check, passed)| {
            format!("{} check: {}", check, if *passed { "ok" } else { "failed" })
        })
        .collect();
    lines.push(format!(
        "{} has been {}",
        customer.name,
        if application.approved { "approved" } else { "denied" }
    ));
    lines
}
