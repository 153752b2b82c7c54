//! Chain of Responsibility.
//!
//! Each [`Chain`] link owns one handler and at most one next link. A request
//! walks the links in order until a handler resolves it; if none does, the
//! result is the [`Outcome::Unhandled`] sentinel rather than an error.

use std::fmt;

use tracing::trace;

pub trait Handler {
    fn name(&self) -> &str;

    /// `Some(response)` when this handler deals with the request.
    fn resolve(&self, request: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled { by: String, response: String },
    /// Nobody in the chain took the request.
    Unhandled,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Handled { response, .. } => write!(f, "{}", response),
            Outcome::Unhandled => write!(f, "Chain is over"),
        }
    }
}

pub struct Chain {
    handler: Box<dyn Handler>,
    next: Option<Box<Chain>>,
}

impl Chain {
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            next: None,
        }
    }

    /// Link `handler` after this one and return the new link so calls can be
    /// chained: `a.set_next(b).set_next(c)`. Replaces any existing tail.
    pub fn set_next(&mut self, handler: impl Handler + 'static) -> &mut Chain {
        self.next.insert(Box::new(Chain::new(handler)))
    }

    pub fn handle(&self, request: &str) -> Outcome {
        let mut link = Some(self);
        while let Some(current) = link {
            if let Some(response) = current.handler.resolve(request) {
                return Outcome::Handled {
                    by: current.handler.name().to_string(),
                    response,
                };
            }
            trace!(handler = current.handler.name(), request, "passing request on");
            link = current.next.as_deref();
        }
        Outcome::Unhandled
    }

    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut link = self.next.as_deref();
        while let Some(current) = link {
            count += 1;
            link = current.next.as_deref();
        }
        count
    }
}

/// Resolves requests naming one of the foods it eats.
pub struct FoodHandler {
    name: String,
    eats: Vec<String>,
}

impl FoodHandler {
    pub fn new(name: impl Into<String>, eats: &[&str]) -> Self {
        Self {
            name: name.into(),
            eats: eats.iter().map(|food| food.to_string()).collect(),
        }
    }
}

impl Handler for FoodHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, request: &str) -> Option<String> {
        self.eats
            .iter()
            .any(|food| food == request)
            .then(|| format!("{}: I'll eat the {}.", self.name, request))
    }
}

pub fn demo() -> Vec<String> {
    let mut chain = Chain::new(FoodHandler::new("Monkey", &["Banana"]));
    chain
        .set_next(FoodHandler::new("Squirrel", &["Nut"]))
        .set_next(FoodHandler::new("Dog", &["MeatBall"]));

    ["Nut", "Banana", "Cup of coffee"]
        .iter()
        .map(|food| format!("{} -> {}", food, chain.handle(food)))
        .collect()
}
