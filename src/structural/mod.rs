//! Structural patterns: Adapter, Bridge, Composite, Decorator, Facade,
//! Flyweight, Proxy.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

pub use adapter::{AdvancedShippingAdapter, ShippingQuote};
pub use bridge::{AdvancedRemote, Device, RemoteControl};
pub use composite::{Node, NodeVisitor};
pub use decorator::{Coffee, DoubleShot, Milk, SimpleCoffee, Sugar, Topping};
pub use facade::{Customer, MortgageFacade};
pub use flyweight::{CarModel, FlyweightPool, ParkedCar};
pub use proxy::{Account, AccountProxy, BankAccount};
