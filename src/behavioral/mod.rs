//! Behavioral patterns: Chain of Responsibility, Command, Interpreter,
//! Iterator, Mediator, Memento, Observer, State, Strategy, Template Method,
//! Visitor.

pub mod chain;
pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;

pub use chain::{Chain, FoodHandler, Handler, Outcome};
pub use command::{
    ArithmeticCommand, Calculator, ClearCommand, Command, CommandHistory, Operation,
};
pub use interpreter::{BinaryOp, Expr};
pub use iterator::{Cursor, Step};
pub use mediator::{ChatRoom, Message, Participant};
pub use memento::{Caretaker, Memento, Person};
pub use observer::{Subject, SubscriptionId};
pub use state::{LightState, TrafficLight};
pub use strategy::{FnStrategy, Parcel, Shipping, ShippingStrategy};
pub use template::{prepare, Drink};
pub use visitor::{Employee, EmployeeVisitor, Visit};
