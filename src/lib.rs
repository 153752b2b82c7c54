//! # Pattern Catalog
//!
//! Classic object-oriented design patterns as small, self-contained and
//! tested components.
//!
//! ## Creational
//! - Singleton (keyed registry, `OnceLock` global)
//! - Factory and Abstract Factory
//! - Builder (reusable, `&mut self` setters)
//! - Prototype (`Clone` plus overrides)
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade
//! - Flyweight (shared `Arc` pool)
//! - Proxy (access check and audit trail)
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Interpreter, Iterator, Mediator
//! - Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! The modules are independent of each other; the [`catalog`] module lists
//! them and runs their demonstrations:
//!
//! ```
//! use pattern_catalog::catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! let transcript = catalog.demo("builder").unwrap();
//! assert!(!transcript.is_empty());
//! ```
//!
//! The crate logs through `tracing` and never installs a subscriber itself.

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod error;
pub mod model;
pub mod structural;

pub use catalog::{Catalog, Category, PatternEntry};
pub use error::{PatternError, Result};
pub use model::{Car, File, Folder, Truck, Vehicle, VehicleOptions};
