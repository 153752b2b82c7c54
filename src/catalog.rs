//! Catalog of the implemented patterns.
//!
//! Maps each pattern name to a short description, its trade-offs and a
//! demonstration that exercises the module and returns a transcript.

use serde::Serialize;
use tracing::debug;

use crate::behavioral::{
    chain, command, interpreter, iterator, mediator, memento, observer, state, strategy, template,
    visitor,
};
use crate::creational::{builder, factory, prototype, singleton};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternEntry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    #[serde(skip)]
    demo: fn() -> Vec<String>,
}

impl PatternEntry {
    pub fn run_demo(&self) -> Vec<String> {
        (self.demo)()
    }
}

pub struct Catalog {
    entries: Vec<PatternEntry>,
}

macro_rules! entry {
    (
        $name:literal, $category:ident, $summary:literal,
        [$($pro:literal),*], [$($con:literal),*], $demo:path
    ) => {
        PatternEntry {
            name: $name,
            category: Category::$category,
            summary: $summary,
            pros: &[$($pro),*],
            cons: &[$($con),*],
            demo: $demo,
        }
    };
}

impl Catalog {
    /// Every pattern this crate implements.
    pub fn standard() -> Self {
        let entries = vec![
            entry!("singleton", Creational,
                "One shared instance per key, created on first request.",
                ["Single point of access", "Lazy creation"],
                ["Hidden global state", "Harder to test in isolation"],
                singleton::demo),
            entry!("factory", Creational,
                "Create products by kind name without naming concrete types.",
                ["Callers depend only on the product interface", "New kinds register at runtime"],
                ["Unknown kinds surface only at runtime"],
                factory::demo),
            entry!("abstract-factory", Creational,
                "Hand out a family of related constructors bound to one family name.",
                ["Products of one family stay consistent"],
                ["Adding a product type touches every family"],
                factory::abstract_demo),
            entry!("builder", Creational,
                "Accumulate options step by step, then produce an immutable product.",
                ["Readable construction of many optional fields", "Builders are reusable"],
                ["Extra type per product"],
                builder::demo),
            entry!("prototype", Creational,
                "Copy a template and apply overrides.",
                ["Reuses expensive setup", "No subclass per configuration"],
                ["Deep structures need care when cloning"],
                prototype::demo),
            entry!("adapter", Structural,
                "Expose an existing type through the interface callers expect.",
                ["Reuse code without changing it"],
                ["Another layer of indirection"],
                adapter::demo),
            entry!("bridge", Structural,
                "Separate an abstraction from its implementation so both vary.",
                ["Implementations swap at runtime"],
                ["More types for simple cases"],
                bridge::demo),
            entry!("composite", Structural,
                "Treat leaves and containers uniformly in a tree.",
                ["Recursive operations stay simple"],
                ["Leaf-only operations are awkward to express"],
                composite::demo),
            entry!("decorator", Structural,
                "Wrap an object to extend behaviour behind the same interface.",
                ["Stackable extensions", "No subclass explosion"],
                ["Order of wrapping can matter"],
                decorator::demo),
            entry!("facade", Structural,
                "One simple operation over several subsystems.",
                ["Callers see one entry point"],
                ["Can grow into a god object"],
                facade::demo),
            entry!("flyweight", Structural,
                "Share intrinsic state between many fine-grained objects.",
                ["Lower memory use"],
                ["Extrinsic state must be passed around"],
                flyweight::demo),
            entry!("proxy", Structural,
                "Control access to a subject behind the same interface.",
                ["Access checks and auditing without touching the subject"],
                ["Extra call on every operation"],
                proxy::demo),
            entry!("chain-of-responsibility", Behavioral,
                "Pass a request along handlers until one deals with it.",
                ["Senders do not know the receiver", "Handlers are reorderable"],
                ["A request may go unhandled"],
                chain::demo),
            entry!("command", Behavioral,
                "Wrap an action on a receiver as an object.",
                ["Undo and redo", "Commands can be queued and logged"],
                ["One type per action"],
                command::demo),
            entry!("interpreter", Behavioral,
                "Evaluate a small language represented as a tree.",
                ["Easy to extend with new node kinds"],
                ["Large grammars become unwieldy"],
                interpreter::demo),
            entry!("iterator", Behavioral,
                "Walk a sequence without exposing its layout.",
                ["Uniform traversal", "Lazy"],
                ["One-shot cursors cannot be rewound"],
                iterator::demo),
            entry!("mediator", Behavioral,
                "Route communication between participants through one object.",
                ["Participants stay decoupled"],
                ["The mediator concentrates logic"],
                mediator::demo),
            entry!("memento", Behavioral,
                "Capture and restore an object's state without exposing it.",
                ["Undo without breaking encapsulation"],
                ["Snapshots cost memory"],
                memento::demo),
            entry!("observer", Behavioral,
                "Notify subscribers in order when something happens.",
                ["Loose coupling between publisher and subscribers"],
                ["Notification order and re-entrancy need rules"],
                observer::demo),
            entry!("state", Behavioral,
                "Delegate behaviour to the object for the current state.",
                ["State-specific logic lives in one place"],
                ["Overkill for few states"],
                state::demo),
            entry!("strategy", Behavioral,
                "Swap the algorithm a context uses.",
                ["Algorithms vary independently of callers"],
                ["Callers must pick a strategy"],
                strategy::demo),
            entry!("template-method", Behavioral,
                "Fix the order of steps; variants fill in some of them.",
                ["Shared steps written once"],
                ["Skeleton changes affect every variant"],
                template::demo),
            entry!("visitor", Behavioral,
                "Add operations over a closed set of element kinds.",
                ["New operations without touching elements"],
                ["New element kinds touch every visitor"],
                visitor::demo),
        ];
        Self { entries }
    }

    /// Lookup is case-insensitive; `_` and spaces count as `-`.
    pub fn get(&self, name: &str) -> Result<&PatternEntry> {
        let wanted = normalize(name);
        self.entries
            .iter()
            .find(|entry| entry.name == wanted)
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&PatternEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn demo(&self, name: &str) -> Result<Vec<String>> {
        let entry = self.get(name)?;
        debug!(pattern = entry.name, "running demo");
        Ok(entry.run_demo())
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.entries().len(), 23);
        assert_eq!(catalog.by_category(Category::Creational).len(), 5);
        assert_eq!(catalog.by_category(Category::Structural).len(), 7);
        assert_eq!(catalog.by_category(Category::Behavioral).len(), 11);
    }

    #[test]
    fn test_lookup_normalizes_names() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("Chain of Responsibility").unwrap().name, "chain-of-responsibility");
        assert_eq!(catalog.get("template_method").unwrap().name, "template-method");
        assert!(matches!(
            catalog.get("monad"),
            Err(PatternError::UnknownPattern(ref n)) if n == "monad"
        ));
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::standard();
        let mut names = catalog.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.entries().len());
    }

    #[test]
    fn test_json_export() {
        let catalog = Catalog::standard();
        let json = catalog.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 23);
        assert_eq!(parsed[0]["name"], "singleton");
        assert_eq!(parsed[0]["category"], "creational");
        assert!(parsed[0].get("demo").is_none());
    }

    #[test]
    fn test_demo_runs() {
        let catalog = Catalog::standard();
        let transcript = catalog.demo("chain-of-responsibility").unwrap();
        assert_eq!(transcript.last().unwrap(), "Cup of coffee -> Chain is over");
    }

    #[test]
    fn test_factory_demos_are_separate() {
        let catalog = Catalog::standard();
        let simple = catalog.demo("factory").unwrap();
        let families = catalog.demo("abstract-factory").unwrap();
        assert!(simple.iter().all(|line| !line.contains("family")));
        assert!(families.iter().any(|line| line.contains("family builds")));
        assert!(families.iter().all(|line| !line.starts_with("created")));
    }
}
