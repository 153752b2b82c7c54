// Template method: `prepare` fixes the order of steps; drinks only fill in the
// steps that differ. Boiling, pouring and serving are shared by every drink
// and are not part of the trait, so no variant can override them.

pub trait Drink {
    fn name(&self) -> &str;
    fn brew(&self) -> String;
    fn add_condiments(&self) -> String;

    /// Hook: drinks may skip the condiment step.
    fn wants_condiments(&self) -> bool {
        true
    }
}

fn boil_water() -> String {
    "Boiling water".to_string()
}

fn pour_in_cup(drink: &dyn Drink) -> String {
    format!("Pouring {} into cup", drink.name())
}

fn serve(drink: &dyn Drink) -> String {
    format!("Serving {}", drink.name())
}

/// Run the recipe: boil, brew, pour, optional condiments, serve.
pub fn prepare(drink: &dyn Drink) -> Vec<String> {
    let mut steps = vec![boil_water(), drink.brew(), pour_in_cup(drink)];
    if drink.wants_condiments() {
        steps.push(drink.add_condiments());
    }
    steps.push(serve(drink));
    steps
}

pub struct Tea;

impl Drink for Tea {
    fn name(&self) -> &str {
        "tea"
    }

    fn brew(&self) -> String {
        "Steeping the tea".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding lemon".to_string()
    }
}

#[derive(Default)]
pub struct Coffee {
    pub black: bool,
}

impl Drink for Coffee {
    fn name(&self) -> &str {
        "coffee"
    }

    fn brew(&self) -> String {
        "Dripping coffee through filter".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding sugar and milk".to_string()
    }

    fn wants_condiments(&self) -> bool {
        !self.black
    }
}

pub fn demo() -> Vec<String> {
    let drinks: Vec<Box<dyn Drink>> = vec![Box::new(Tea), Box::new(Coffee::default())];
    drinks.iter().flat_map(|drink| prepare(drink.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tea_recipe() {
        assert_eq!(
            prepare(&Tea),
            vec![
                "Boiling water",
                "Steeping the tea",
                "Pouring tea into cup",
                "Adding lemon",
                "Serving tea",
            ]
        );
    }

    #[test]
    fn test_black_coffee_skips_condiments() {
        let steps = prepare(&Coffee { black: true });
        assert_eq!(steps.len(), 4);
        assert!(!steps.iter().any(|s| s.contains("sugar")));
    }

    #[test]
    fn test_every_drink_ends_with_serve() {
        let drinks: Vec<Box<dyn Drink>> = vec![Box::new(Tea), Box::new(Coffee::default())];
        for drink in &drinks {
            let steps = prepare(drink.as_ref());
            assert_eq!(steps.first().map(String::as_str), Some("Boiling water"));
            assert_eq!(steps.last().unwrap(), &format!("Serving {}", drink.name()));
        }
    }
}
