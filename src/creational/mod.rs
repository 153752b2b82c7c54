//! Creational patterns: Singleton, Factory, Abstract Factory, Builder,
//! Prototype.

pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;

pub use builder::{BuiltCar, CarBuilder};
pub use factory::{AbstractVehicleFactory, VehicleFactory, VehicleFamily};
pub use prototype::{Prototype, PrototypeRegistry};
pub use singleton::{singleton, Singleton, SingletonRegistry};
