// Command: calculator operations wrapped as objects that can be executed,
// recorded and, where possible, undone.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

pub trait Command {
    fn name(&self) -> &str;
    fn execute(&mut self);

    /// Revert the last `execute`. Irreversible commands keep the default and
    /// report `false`.
    fn undo(&mut self) -> bool {
        false
    }
}

/// The receiver.
#[derive(Debug, Default)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    fn set(&mut self, value: f64) {
        self.value = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn apply(self, current: f64, operand: f64) -> f64 {
        match self {
            Operation::Add => current + operand,
            Operation::Subtract => current - operand,
            Operation::Multiply => current * operand,
            Operation::Divide => current / operand,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

/// Reversible arithmetic command. It remembers the receiver's value before
/// running, so undo is exact even for multiply-by-zero.
pub struct ArithmeticCommand {
    calculator: Rc<RefCell<Calculator>>,
    operation: Operation,
    operand: f64,
    previous: Option<f64>,
}

impl ArithmeticCommand {
    pub fn new(calculator: Rc<RefCell<Calculator>>, operation: Operation, operand: f64) -> Self {
        Self {
            calculator,
            operation,
            operand,
            previous: None,
        }
    }
}

impl Command for ArithmeticCommand {
    fn name(&self) -> &str {
        self.operation.name()
    }

    fn execute(&mut self) {
        let mut calculator = self.calculator.borrow_mut();
        let current = calculator.value();
        self.previous = Some(current);
        calculator.set(self.operation.apply(current, self.operand));
    }

    fn undo(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.calculator.borrow_mut().set(previous);
                true
            }
            None => false,
        }
    }
}

/// Resets the receiver to zero; cannot be undone.
pub struct ClearCommand {
    calculator: Rc<RefCell<Calculator>>,
}

impl ClearCommand {
    pub fn new(calculator: Rc<RefCell<Calculator>>) -> Self {
        Self { calculator }
    }
}

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn execute(&mut self) {
        self.calculator.borrow_mut().set(0.0);
    }
}

/// Invoker keeping executed commands for undo/redo.
pub struct CommandHistory {
    history: Vec<Box<dyn Command>>,
    current: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            current: 0,
        }
    }

    pub fn execute(&mut self, mut command: Box<dyn Command>) {
        command.execute();
        debug!(command = command.name(), "executed");
        // Anything undone before this point can no longer be redone.
        self.history.truncate(self.current);
        self.history.push(command);
        self.current += 1;
    }

    /// Undo the most recent command. Returns `false` when there is nothing
    /// to undo or the command is irreversible; an irreversible command stays
    /// in place and blocks further undo.
    pub fn undo(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        if self.history[self.current - 1].undo() {
            self.current -= 1;
            debug!(command = self.history[self.current].name(), "undone");
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.current < self.history.len() {
            self.history[self.current].execute();
            debug!(command = self.history[self.current].name(), "redone");
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn executed(&self) -> Vec<&str> {
        self.history[..self.current]
            .iter()
            .map(|command| command.name())
            .collect()
    }
}

pub fn demo() -> Vec<String> {
    let calculator = Rc::new(RefCell::new(Calculator::new()));
    let mut history = CommandHistory::new();
    let mut lines = Vec::new();

    for (operation, operand) in [
        (Operation::Add, 100.0),
        (Operation::Subtract, 24.0),
        (Operation::Multiply, 6.0),
        (Operation::Divide, 2.0),
    ] {
        history.execute(Box::new(ArithmeticCommand::new(
            calculator.clone(),
            operation,
            operand,
        )));
        lines.push(format!("{} {} -> {}", operation.name(), operand, calculator.borrow().value()));
    }

    history.undo();
    lines.push(format!("undo -> {}", calculator.borrow().value()));
    history.redo();
    lines.push(format!("redo -> {}", calculator.borrow().value()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(calc: &Rc<RefCell<Calculator>>, op: Operation, operand: f64) -> Box<dyn Command> {
        Box::new(ArithmeticCommand::new(calc.clone(), op, operand))
    }

    #[test]
    fn test_execute_updates_receiver() {
        let calc = Rc::new(RefCell::new(Calculator::new()));
        let mut history = CommandHistory::new();
        history.execute(command(&calc, Operation::Add, 10.0));
        history.execute(command(&calc, Operation::Multiply, 3.0));
        assert_eq!(calc.borrow().value(), 30.0);
        assert_eq!(history.executed(), vec!["add", "multiply"]);
    }

    #[test]
    fn test_undo_redo() {
        let calc = Rc::new(RefCell::new(Calculator::new()));
        let mut history = CommandHistory::new();
        history.execute(command(&calc, Operation::Add, 10.0));
        history.execute(command(&calc, Operation::Multiply, 0.0));
        assert_eq!(calc.borrow().value(), 0.0);

        assert!(history.undo());
        assert_eq!(calc.borrow().value(), 10.0);
        assert!(history.redo());
        assert_eq!(calc.borrow().value(), 0.0);
        assert!(!history.redo());
    }

    #[test]
    fn test_new_command_drops_redo_tail() {
        let calc = Rc::new(RefCell::new(Calculator::new()));
        let mut history = CommandHistory::new();
        history.execute(command(&calc, Operation::Add, 1.0));
        history.execute(command(&calc, Operation::Add, 2.0));
        history.undo();
        history.execute(command(&calc, Operation::Subtract, 5.0));

        assert!(!history.redo());
        assert_eq!(calc.borrow().value(), -4.0);
    }

    #[test]
    fn test_irreversible_command_blocks_undo() {
        let calc = Rc::new(RefCell::new(Calculator::new()));
        let mut history = CommandHistory::new();
        history.execute(command(&calc, Operation::Add, 7.0));
        history.execute(Box::new(ClearCommand::new(calc.clone())));

        assert!(!history.undo());
        assert_eq!(calc.borrow().value(), 0.0);
        assert_eq!(history.executed(), vec!["add", "clear"]);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = CommandHistory::new();
        assert!(!history.undo());
    }

    #[test]
    fn test_divide_by_zero_follows_float_rules() {
        let calc = Rc::new(RefCell::new(Calculator::new()));
        let mut cmd = ArithmeticCommand::new(calc.clone(), Operation::Add, 1.0);
        cmd.execute();
        let mut cmd = ArithmeticCommand::new(calc.clone(), Operation::Divide, 0.0);
        cmd.execute();
        assert!(calc.borrow().value().is_infinite());
        assert!(cmd.undo());
        assert_eq!(calc.borrow().value(), 1.0);
    }
}
