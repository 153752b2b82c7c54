// Strategy: the shipping context delegates pricing to a swappable algorithm.

#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Parcel {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

pub trait ShippingStrategy {
    fn name(&self) -> &str;
    fn calculate(&self, parcel: &Parcel) -> f64;
}

pub struct Ups;
impl ShippingStrategy for Ups {
    fn name(&self) -> &str {
        "UPS"
    }

    fn calculate(&self, _parcel: &Parcel) -> f64 {
        45.95
    }
}

pub struct Usps;
impl ShippingStrategy for Usps {
    fn name(&self) -> &str {
        "USPS"
    }

    fn calculate(&self, _parcel: &Parcel) -> f64 {
        39.40
    }
}

/// Weight-based pricing.
pub struct Fedex;
impl ShippingStrategy for Fedex {
    fn name(&self) -> &str {
        "Fedex"
    }

    fn calculate(&self, parcel: &Parcel) -> f64 {
        20.0 + parcel.weight * 4.6
    }
}

/// Strategy from a closure.
pub struct FnStrategy<F> {
    name: String,
    calculate: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&Parcel) -> f64,
{
    pub fn new(name: impl Into<String>, calculate: F) -> Self {
        Self {
            name: name.into(),
            calculate,
        }
    }
}

impl<F> ShippingStrategy for FnStrategy<F>
where
    F: Fn(&Parcel) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, parcel: &Parcel) -> f64 {
        (self.calculate)(parcel)
    }
}

pub struct Shipping {
    strategy: Box<dyn ShippingStrategy>,
}

impl Shipping {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn calculate(&self, parcel: &Parcel) -> f64 {
        self.strategy.calculate(parcel)
    }
}

pub fn demo() -> Vec<String> {
    let parcel = Parcel::new("76712", "10012", 2.0);
    let mut shipping = Shipping::new(Box::new(Ups));
    let mut lines = Vec::new();

    let strategies: Vec<Box<dyn ShippingStrategy>> = vec![
        Box::new(Usps),
        Box::new(Fedex),
        Box::new(FnStrategy::new("pickup", |_: &Parcel| 0.0)),
    ];
    lines.push(format!("{}: {:.2}", shipping.strategy_name(), shipping.calculate(&parcel)));
    for strategy in strategies {
        shipping.set_strategy(strategy);
        lines.push(format!("{}: {:.2}", shipping.strategy_name(), shipping.calculate(&parcel)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rate_strategies() {
        let parcel = Parcel::new("a", "b", 1.0);
        let shipping = Shipping::new(Box::new(Ups));
        assert_eq!(shipping.calculate(&parcel), 45.95);
        assert_eq!(Usps.calculate(&parcel), 39.40);
    }

    #[test]
    fn test_switch_strategy() {
        let parcel = Parcel::new("a", "b", 5.0);
        let mut shipping = Shipping::new(Box::new(Ups));
        assert_eq!(shipping.strategy_name(), "UPS");

        shipping.set_strategy(Box::new(Fedex));
        assert_eq!(shipping.strategy_name(), "Fedex");
        assert!((shipping.calculate(&parcel) - 43.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_strategy() {
        let parcel = Parcel::new("a", "b", 3.0);
        let per_kg = FnStrategy::new("per-kg", |p: &Parcel| p.weight * 2.0);
        let shipping = Shipping::new(Box::new(per_kg));
        assert_eq!(shipping.calculate(&parcel), 6.0);
        assert_eq!(shipping.strategy_name(), "per-kg");
    }

    #[test]
    fn test_strategies_do_not_keep_state() {
        let parcel = Parcel::new("a", "b", 2.0);
        let shipping = Shipping::new(Box::new(Fedex));
        let first = shipping.calculate(&parcel);
        let second = shipping.calculate(&parcel);
        assert_eq!(first, second);
    }
}
