//! Plain value types shared by several patterns.
//!
//! Vehicles are produced by the factories and cloned by the prototype
//! module; files and folders form the composite tree.

use serde::Serialize;

// ============================================================================
// Vehicles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub model: String,
    pub doors: u32,
    pub color: String,
    pub state: String,
}

impl Car {
    pub fn new(options: &VehicleOptions) -> Self {
        Self {
            model: options.model.clone().unwrap_or_else(|| "generic".to_string()),
            doors: options.doors.unwrap_or(4),
            color: options.color.clone().unwrap_or_else(|| "silver".to_string()),
            state: options.state.clone().unwrap_or_else(|| "brand new".to_string()),
        }
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new(&VehicleOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truck {
    pub model: String,
    pub wheel_size: String,
    pub color: String,
    pub state: String,
}

impl Truck {
    pub fn new(options: &VehicleOptions) -> Self {
        Self {
            model: options.model.clone().unwrap_or_else(|| "generic".to_string()),
            wheel_size: options
                .wheel_size
                .clone()
                .unwrap_or_else(|| "large".to_string()),
            color: options.color.clone().unwrap_or_else(|| "blue".to_string()),
            state: options.state.clone().unwrap_or_else(|| "used".to_string()),
        }
    }
}

impl Default for Truck {
    fn default() -> Self {
        Self::new(&VehicleOptions::default())
    }
}

/// Closed set of products the factories can hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Vehicle {
    Car(Car),
    Truck(Truck),
}

impl Vehicle {
    pub fn kind(&self) -> &'static str {
        match self {
            Vehicle::Car(_) => "car",
            Vehicle::Truck(_) => "truck",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Vehicle::Car(car) => &car.model,
            Vehicle::Truck(truck) => &truck.model,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Vehicle::Car(car) => &car.color,
            Vehicle::Truck(truck) => &truck.color,
        }
    }
}

/// Optional field overrides used as constructor arguments and as prototype
/// overrides. `None` keeps the default (or the template's value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleOptions {
    pub model: Option<String>,
    pub doors: Option<u32>,
    pub wheel_size: Option<String>,
    pub color: Option<String>,
    pub state: Option<String>,
}

impl VehicleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn doors(mut self, doors: u32) -> Self {
        self.doors = Some(doors);
        self
    }

    pub fn wheel_size(mut self, size: impl Into<String>) -> Self {
        self.wheel_size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

// ============================================================================
// Files and folders
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    pub name: String,
    pub size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A folder owns its children in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    pub name: String,
    pub children: Vec<crate::structural::composite::Node>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_defaults() {
        let car = Car::default();
        assert_eq!(car.doors, 4);
        assert_eq!(car.color, "silver");
        assert_eq!(car.state, "brand new");
    }

    #[test]
    fn test_truck_overrides() {
        let truck = Truck::new(&VehicleOptions::new().wheel_size("small").color("red"));
        assert_eq!(truck.wheel_size, "small");
        assert_eq!(truck.color, "red");
        assert_eq!(truck.state, "used");
    }

    #[test]
    fn test_vehicle_serializes_with_kind_tag() {
        let vehicle = Vehicle::Car(Car::default());
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["kind"], "car");
        assert_eq!(json["doors"], 4);
    }
}
