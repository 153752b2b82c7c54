// Decorator: wrap a coffee to change its cost and description while keeping
// the same interface. Decorators accept any `Coffee`, including other
// decorators, so they stack. Costs saturate at `u32::MAX`.

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

pub struct SimpleCoffee {
    price: u32,
}

impl SimpleCoffee {
    pub fn new(price: u32) -> Self {
        Self { price }
    }
}

impl Default for SimpleCoffee {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        self.price
    }

    fn description(&self) -> String {
        "coffee".to_string()
    }
}

/// Additive decorator with an arbitrary label and surcharge.
pub struct Topping<C> {
    inner: C,
    label: String,
    extra: u32,
}

impl<C: Coffee> Topping<C> {
    pub fn new(inner: C, label: impl Into<String>, extra: u32) -> Self {
        Self {
            inner,
            label: label.into(),
            extra,
        }
    }
}

impl<C: Coffee> Coffee for Topping<C> {
    fn cost(&self) -> u32 {
        self.inner.cost().saturating_add(self.extra)
    }

    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.label)
    }
}

pub struct Milk<C>(Topping<C>);

impl<C: Coffee> Milk<C> {
    pub fn new(inner: C) -> Self {
        Milk(Topping::new(inner, "milk", 2))
    }
}

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> u32 {
        self.0.cost()
    }

    fn description(&self) -> String {
        self.0.description()
    }
}

pub struct Sugar<C>(Topping<C>);

impl<C: Coffee> Sugar<C> {
    pub fn new(inner: C) -> Self {
        Sugar(Topping::new(inner, "sugar", 3))
    }
}

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> u32 {
        self.0.cost()
    }

    fn description(&self) -> String {
        self.0.description()
    }
}

/// Doubles everything wrapped so far. Not commutative with the additive
/// decorators: the result depends on wrap order.
pub struct DoubleShot<C> {
    inner: C,
}

impl<C: Coffee> DoubleShot<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for DoubleShot<C> {
    fn cost(&self) -> u32 {
        self.inner.cost().saturating_mul(2)
    }

    fn description(&self) -> String {
        format!("double ({})", self.inner.description())
    }
}

pub fn demo() -> Vec<String> {
    // Runtime composition through trait objects.
    let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee::default());
    order = Box::new(Milk::new(order));
    order = Box::new(Sugar::new(order));

    let doubled = DoubleShot::new(Milk::new(SimpleCoffee::default()));

    vec![
        format!("{} = {}", order.description(), order.cost()),
        format!("{} = {}", doubled.description(), doubled.cost()),
    ]
}
