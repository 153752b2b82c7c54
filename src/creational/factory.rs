// Factory and Abstract Factory.
//
// `VehicleFactory` dispatches on a product kind name to a registered
// constructor. `AbstractVehicleFactory` hands out a whole family of related
// constructors bound to one family name.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{PatternError, Result};
use crate::model::{Car, Truck, Vehicle, VehicleOptions};

type Constructor = Box<dyn Fn(&VehicleOptions) -> Vehicle + Send + Sync>;

// ============================================================================
// Factory
// ============================================================================

pub struct VehicleFactory {
    constructors: BTreeMap<String, Constructor>,
}

impl Default for VehicleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleFactory {
    /// A factory that knows `car` and `truck`.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("car", |options| Vehicle::Car(Car::new(options)));
        factory.register("truck", |options| Vehicle::Truck(Truck::new(options)));
        factory
    }

    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Register (or replace) the constructor for `kind`.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(&VehicleOptions) -> Vehicle + Send + Sync + 'static,
    {
        let kind = kind.into();
        debug!(kind = %kind, "registering vehicle kind");
        self.constructors.insert(kind, Box::new(constructor));
    }

    pub fn create(&self, kind: &str, options: &VehicleOptions) -> Result<Vehicle> {
        match self.constructors.get(kind) {
            Some(constructor) => Ok(constructor(options)),
            None => {
                warn!(kind, "no constructor registered");
                Err(PatternError::UnknownVariant(kind.to_string()))
            }
        }
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }
}

// ============================================================================
// Abstract Factory
// ============================================================================

/// A family of related products.
pub trait VehicleFamily: Send + Sync {
    fn family(&self) -> &str;
    fn create_car(&self, options: &VehicleOptions) -> Car;
    fn create_truck(&self, options: &VehicleOptions) -> Truck;
}

pub struct ElectricFamily;

impl VehicleFamily for ElectricFamily {
    fn family(&self) -> &str {
        "electric"
    }

    fn create_car(&self, options: &VehicleOptions) -> Car {
        let mut car = Car::new(options);
        if options.model.is_none() {
            car.model = "e-sedan".to_string();
        }
        car
    }

    fn create_truck(&self, options: &VehicleOptions) -> Truck {
        let mut truck = Truck::new(options);
        if options.model.is_none() {
            truck.model = "e-hauler".to_string();
        }
        truck
    }
}

pub struct DieselFamily;

impl VehicleFamily for DieselFamily {
    fn family(&self) -> &str {
        "diesel"
    }

    fn create_car(&self, options: &VehicleOptions) -> Car {
        let mut car = Car::new(options);
        if options.model.is_none() {
            car.model = "td-sedan".to_string();
        }
        car
    }

    fn create_truck(&self, options: &VehicleOptions) -> Truck {
        let mut truck = Truck::new(options);
        if options.model.is_none() {
            truck.model = "td-hauler".to_string();
        }
        truck
    }
}

pub struct AbstractVehicleFactory {
    families: BTreeMap<String, Arc<dyn VehicleFamily>>,
}

impl Default for AbstractVehicleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AbstractVehicleFactory {
    pub fn new() -> Self {
        let mut factory = Self {
            families: BTreeMap::new(),
        };
        factory.register_family(Arc::new(ElectricFamily));
        factory.register_family(Arc::new(DieselFamily));
        factory
    }

    pub fn register_family(&mut self, family: Arc<dyn VehicleFamily>) {
        self.families.insert(family.family().to_string(), family);
    }

    pub fn get_factory(&self, family: &str) -> Result<Arc<dyn VehicleFamily>> {
        self.families
            .get(family)
            .cloned()
            .ok_or_else(|| PatternError::UnknownFamily(family.to_string()))
    }

    pub fn families(&self) -> Vec<&str> {
        self.families.keys().map(String::as_str).collect()
    }
}

pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();
    let factory = VehicleFactory::new();
    let options = VehicleOptions::new().color("yellow");

    for kind in ["car", "truck", "bicycle"] {
        match factory.create(kind, &options) {
            Ok(vehicle) => lines.push(format!(
                "created {} ({}, {})",
                vehicle.kind(),
                vehicle.model(),
                vehicle.color()
            )),
            Err(e) => lines.push(format!("error: {}", e)),
        }
    }
    lines
}

pub fn abstract_demo() -> Vec<String> {
    let mut lines = Vec::new();
    let families = AbstractVehicleFactory::new();
    for name in families.families() {
        if let Ok(family) = families.get_factory(name) {
            let car = family.create_car(&VehicleOptions::default());
            lines.push(format!("{} family builds {}", family.family(), car.model));
        }
    }
    if let Err(e) = families.get_factory("steam") {
        lines.push(format!("error: {}", e));
    }
    lines
}
