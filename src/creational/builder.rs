// Builder: a mutable accumulator with chainable setters.
//
// Setters take `&mut self` and return the same builder, so a builder can be
// kept around and built more than once. `build` copies the accumulated state
// into a new product; later setter calls never reach products built earlier.

/// Immutable product of [`CarBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCar {
    engine: Option<String>,
    wheels: u32,
    color: String,
    gps: bool,
}

impl BuiltCar {
    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn has_gps(&self) -> bool {
        self.gps
    }
}

#[derive(Debug, Clone)]
pub struct CarBuilder {
    engine: Option<String>,
    wheels: u32,
    color: Option<String>,
    gps: bool,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CarBuilder {
    pub fn new() -> Self {
        Self {
            engine: None,
            wheels: 0,
            color: None,
            gps: false,
        }
    }

    pub fn add_engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn add_wheels(&mut self, wheels: u32) -> &mut Self {
        self.wheels = wheels;
        self
    }

    pub fn paint(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn add_gps(&mut self) -> &mut Self {
        self.gps = true;
        self
    }

    /// Clear everything accumulated so far.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    pub fn build(&self) -> BuiltCar {
        BuiltCar {
            engine: self.engine.clone(),
            wheels: self.wheels,
            color: self.color.clone().unwrap_or_else(|| "unpainted".to_string()),
            gps: self.gps,
        }
    }
}

pub fn demo() -> Vec<String> {
    let mut builder = CarBuilder::new();
    builder.add_engine("V8").add_wheels(4).paint("red");
    let first = builder.build();
    builder.add_gps();
    let second = builder.build();

    vec![
        format!("{:?}", first),
        format!("{:?}", second),
        format!("first build unaffected by later setters: {}", !first.has_gps()),
    ]
}
