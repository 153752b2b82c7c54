// Adapter: expose a newer shipping API through the interface existing callers
// already use.

/// Target interface: a formatted price for moving `weight` kg between two
/// postal codes.
pub trait ShippingQuote {
    fn request(&self, from: &str, to: &str, weight: f64) -> String;
}

/// The interface callers were written against.
pub struct LegacyShipping;

impl ShippingQuote for LegacyShipping {
    fn request(&self, _from: &str, _to: &str, _weight: f64) -> String {
        "$49.75".to_string()
    }
}

/// Newer service with a different, stateful interface and prices in cents.
#[derive(Debug, Default)]
pub struct AdvancedShipping {
    session: Option<String>,
    start: Option<String>,
    destination: Option<String>,
}

impl AdvancedShipping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, credentials: &str) {
        self.session = Some(credentials.to_string());
    }

    pub fn set_start(&mut self, start: &str) {
        self.start = Some(start.to_string());
    }

    pub fn set_destination(&mut self, destination: &str) {
        self.destination = Some(destination.to_string());
    }

    /// Price in cents; logged-in customers get the discounted rate and
    /// routes between postal zones pay a flat surcharge.
    pub fn calculate(&self, weight: f64) -> u64 {
        let base = (weight * 310.0).round() as u64;
        let guest = if self.session.is_some() { 0 } else { 500 };
        base.saturating_add(guest).saturating_add(self.zone_surcharge())
    }

    /// The first character of a postal code names its zone.
    fn zone_surcharge(&self) -> u64 {
        let zone = |code: &Option<String>| code.as_deref().and_then(|c| c.chars().next());
        match (zone(&self.start), zone(&self.destination)) {
            (Some(from), Some(to)) if from != to => 200,
            _ => 0,
        }
    }
}

pub struct AdvancedShippingAdapter {
    credentials: String,
}

impl AdvancedShippingAdapter {
    pub fn new(credentials: impl Into<String>) -> Self {
        Self {
            credentials: credentials.into(),
        }
    }
}

impl ShippingQuote for AdvancedShippingAdapter {
    fn request(&self, from: &str, to: &str, weight: f64) -> String {
        let mut shipping = AdvancedShipping::new();
        shipping.login(&self.credentials);
        shipping.set_start(from);
        shipping.set_destination(to);
        let cents = shipping.calculate(weight);
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

pub fn demo() -> Vec<String> {
    let quotes: Vec<(&str, Box<dyn ShippingQuote>)> = vec![
        ("legacy", Box::new(LegacyShipping)),
        ("adapter", Box::new(AdvancedShippingAdapter::new("token"))),
    ];

    quotes
        .iter()
        .map(|(name, quote)| format!("{}: {}", name, quote.request("78701", "10010", 2.5)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_quote() {
        assert_eq!(LegacyShipping.request("a", "b", 1.0), "$49.75");
    }

    #[test]
    fn test_adapter_translates_cents() {
        let adapter = AdvancedShippingAdapter::new("token");
        // 2.5 kg * 310 = 775 cents, same zone
        assert_eq!(adapter.request("78701", "78702", 2.5), "$7.75");
    }

    #[test]
    fn test_adapter_passes_route_through() {
        let adapter = AdvancedShippingAdapter::new("token");
        // 775 cents plus the cross-zone surcharge
        assert_eq!(adapter.request("78701", "10010", 2.5), "$9.75");
    }

    #[test]
    fn test_adaptee_charges_guests_more() {
        let shipping = AdvancedShipping::new();
        assert_eq!(shipping.calculate(1.0), 810);
    }

    #[test]
    fn test_adaptee_zone_surcharge_needs_both_ends() {
        let mut shipping = AdvancedShipping::new();
        shipping.login("token");
        shipping.set_start("10001");
        assert_eq!(shipping.calculate(1.0), 310);
        shipping.set_destination("90210");
        assert_eq!(shipping.calculate(1.0), 510);
    }

    #[test]
    fn test_adapter_as_trait_object() {
        let quote: &dyn ShippingQuote = &AdvancedShippingAdapter::new("t");
        assert_eq!(quote.request("x1", "x2", 10.0), "$31.00");
    }
}
