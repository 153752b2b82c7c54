// Prototype: new objects are copies of a template with some fields replaced.
//
// There is no live link back to the template; `clone_with` borrows it and
// returns an independent value.

use std::collections::BTreeMap;

use crate::error::{PatternError, Result};
use crate::model::{Car, Truck, Vehicle, VehicleOptions};

pub trait Prototype: Clone {
    type Overrides;

    fn clone_with(&self, overrides: &Self::Overrides) -> Self;
}

impl Prototype for Car {
    type Overrides = VehicleOptions;

    fn clone_with(&self, overrides: &VehicleOptions) -> Self {
        let mut car = self.clone();
        if let Some(model) = &overrides.model {
            car.model = model.clone();
        }
        if let Some(doors) = overrides.doors {
            car.doors = doors;
        }
        if let Some(color) = &overrides.color {
            car.color = color.clone();
        }
        if let Some(state) = &overrides.state {
            car.state = state.clone();
        }
        car
    }
}

impl Prototype for Truck {
    type Overrides = VehicleOptions;

    fn clone_with(&self, overrides: &VehicleOptions) -> Self {
        let mut truck = self.clone();
        if let Some(model) = &overrides.model {
            truck.model = model.clone();
        }
        if let Some(size) = &overrides.wheel_size {
            truck.wheel_size = size.clone();
        }
        if let Some(color) = &overrides.color {
            truck.color = color.clone();
        }
        if let Some(state) = &overrides.state {
            truck.state = state.clone();
        }
        truck
    }
}

impl Prototype for Vehicle {
    type Overrides = VehicleOptions;

    fn clone_with(&self, overrides: &VehicleOptions) -> Self {
        match self {
            Vehicle::Car(car) => Vehicle::Car(car.clone_with(overrides)),
            Vehicle::Truck(truck) => Vehicle::Truck(truck.clone_with(overrides)),
        }
    }
}

/// Named templates that are cloned on request.
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    templates: BTreeMap<String, Vehicle>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: Vehicle) {
        self.templates.insert(name.into(), template);
    }

    pub fn spawn(&self, name: &str, overrides: &VehicleOptions) -> Result<Vehicle> {
        self.templates
            .get(name)
            .map(|template| template.clone_with(overrides))
            .ok_or_else(|| PatternError::UnknownVariant(name.to_string()))
    }

    pub fn template(&self, name: &str) -> Option<&Vehicle> {
        self.templates.get(name)
    }
}

pub fn demo() -> Vec<String> {
    let template = Car::new(&VehicleOptions::new().model("Ford Escort"));
    let red = template.clone_with(&VehicleOptions::new().color("red"));

    vec![
        format!("template: {} {}", template.model, template.color),
        format!("clone:    {} {}", red.model, red.color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_with_overrides() {
        let template = Car::new(&VehicleOptions::new().model("Escort"));
        let clone = template.clone_with(&VehicleOptions::new().doors(2).color("green"));

        assert_eq!(clone.model, "Escort");
        assert_eq!(clone.doors, 2);
        assert_eq!(clone.color, "green");
        assert_eq!(clone.state, template.state);
    }

    #[test]
    fn test_template_untouched() {
        let template = Truck::default();
        let snapshot = template.clone();
        let _ = template.clone_with(&VehicleOptions::new().state("wrecked"));
        assert_eq!(template, snapshot);
    }

    #[test]
    fn test_empty_overrides_is_plain_clone() {
        let template = Vehicle::Car(Car::default());
        assert_eq!(template.clone_with(&VehicleOptions::default()), template);
    }

    #[test]
    fn test_registry_spawn() {
        let mut registry = PrototypeRegistry::new();
        registry.insert("taxi", Vehicle::Car(Car::new(&VehicleOptions::new().color("yellow"))));

        let spawned = registry
            .spawn("taxi", &VehicleOptions::new().model("cab-42"))
            .unwrap();
        assert_eq!(spawned.model(), "cab-42");
        assert_eq!(spawned.color(), "yellow");
        assert_eq!(registry.template("taxi").unwrap().model(), "generic");
    }

    #[test]
    fn test_registry_unknown_template() {
        let registry = PrototypeRegistry::new();
        let err = registry.spawn("bus", &VehicleOptions::default()).unwrap_err();
        assert!(matches!(err, PatternError::UnknownVariant(_)));
    }
}
