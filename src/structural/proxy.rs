// Proxy: an account front that checks who is calling and keeps an audit trail
// before handing the call to the real account. The subject's result is passed
// back unchanged.

use std::cell::RefCell;

use tracing::{debug, warn};

use crate::error::{PatternError, Result};

/// Operations on a bank account. A proxy may refuse any of them.
pub trait Account {
    fn balance(&self) -> Result<u64>;
    /// Returns the new balance, or `CapacityExceeded` when the balance would
    /// overflow.
    fn deposit(&mut self, amount: u64) -> Result<u64>;
    /// Returns the new balance, or `InsufficientResource` when `amount`
    /// exceeds the balance. The balance is untouched on failure.
    fn withdraw(&mut self, amount: u64) -> Result<u64>;
}

#[derive(Debug, Default)]
pub struct BankAccount {
    balance: u64,
}

impl BankAccount {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }
}

impl Account for BankAccount {
    fn balance(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn deposit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(PatternError::CapacityExceeded {
                requested: amount,
                headroom: u64::MAX - self.balance,
            })?;
        Ok(self.balance)
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64> {
        if amount > self.balance {
            return Err(PatternError::InsufficientResource {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

/// Protection and logging proxy around any [`Account`]. It is an `Account`
/// itself, so it stands in wherever the real subject is expected.
pub struct AccountProxy<A> {
    subject: A,
    owner: String,
    caller: String,
    audit: RefCell<Vec<String>>,
}

impl<A: Account> AccountProxy<A> {
    pub fn new(subject: A, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        Self {
            subject,
            caller: owner.clone(),
            owner,
            audit: RefCell::new(Vec::new()),
        }
    }

    /// Act on behalf of `caller` for subsequent calls.
    pub fn login(&mut self, caller: impl Into<String>) {
        self.caller = caller.into();
    }

    pub fn audit(&self) -> Vec<String> {
        self.audit.borrow().clone()
    }

    pub fn into_inner(self) -> A {
        self.subject
    }

    fn authorize(&self, action: &str) -> Result<()> {
        if self.caller != self.owner {
            warn!(caller = %self.caller, action, "access denied");
            self.record(format!("denied {} for {}", action, self.caller));
            return Err(PatternError::AccessDenied(self.caller.clone()));
        }
        debug!(caller = %self.caller, action, "forwarding to account");
        self.record(format!("before {}", action));
        Ok(())
    }

    fn record(&self, entry: String) {
        self.audit.borrow_mut().push(entry);
    }

    fn record_result(&self, action: &str, result: &Result<u64>) {
        match result {
            Ok(balance) => self.record(format!("after {}: {}", action, balance)),
            Err(e) => self.record(format!("after {}: {}", action, e)),
        }
    }
}

impl<A: Account> Account for AccountProxy<A> {
    fn balance(&self) -> Result<u64> {
        self.authorize("balance")?;
        let result = self.subject.balance();
        self.record_result("balance", &result);
        result
    }

    fn deposit(&mut self, amount: u64) -> Result<u64> {
        self.authorize("deposit")?;
        let result = self.subject.deposit(amount);
        self.record_result("deposit", &result);
        result
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64> {
        self.authorize("withdraw")?;
        let result = self.subject.withdraw(amount);
        self.record_result("withdraw", &result);
        result
    }
}

pub fn demo() -> Vec<String> {
    let mut proxy = AccountProxy::new(BankAccount::new(100), "alice");
    let mut lines = Vec::new();

    match proxy.withdraw(30) {
        Ok(balance) => lines.push(format!("withdrew 30, balance {}", balance)),
        Err(e) => lines.push(format!("error: {}", e)),
    }
    match proxy.withdraw(500) {
        Ok(balance) => lines.push(format!("withdrew 500, balance {}", balance)),
        Err(e) => lines.push(format!("error: {}", e)),
    }
    proxy.login("mallory");
    if let Err(e) = proxy.balance() {
        lines.push(format!("error: {}", e));
    }
    lines.extend(proxy.audit().iter().map(|entry| format!("audit: {}", entry)));
    lines
}
