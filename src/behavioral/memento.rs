// Memento: capture a person's record and put it back later.
//
// `Memento` has no public fields and no setters, so a saved snapshot can only
// be handed back to `Person::restore`, which reads it without changing it.

#[derive(Debug, Clone, PartialEq, Eq)]
struct PersonState {
    name: String,
    street: String,
    city: String,
    state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: PersonState,
}

/// The originator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn save(&self) -> Memento {
        Memento {
            state: PersonState {
                name: self.name.clone(),
                street: self.street.clone(),
                city: self.city.clone(),
                state: self.state.clone(),
            },
        }
    }

    /// Replace every field with the snapshot's content.
    pub fn restore(&mut self, memento: &Memento) {
        let snapshot = &memento.state;
        self.name = snapshot.name.clone();
        self.street = snapshot.street.clone();
        self.city = snapshot.city.clone();
        self.state = snapshot.state.clone();
    }
}

/// Keeps snapshots by index, oldest first.
#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot and return its index.
    pub fn add(&mut self, memento: Memento) -> usize {
        self.mementos.push(memento);
        self.mementos.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Memento> {
        self.mementos.get(index)
    }

    pub fn latest(&self) -> Option<&Memento> {
        self.mementos.last()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn demo() -> Vec<String> {
    let mut mike = Person::new("Mike Foley", "1112 Main", "Dallas", "TX");
    let mut caretaker = Caretaker::new();
    let saved = caretaker.add(mike.save());

    mike.name = "King Kong".to_string();
    mike.city = "Empire State Building".to_string();
    let mut lines = vec![format!("changed: {} / {}", mike.name, mike.city)];

    if let Some(memento) = caretaker.get(saved) {
        mike.restore(memento);
    }
    lines.push(format!("restored: {} / {}", mike.name, mike.city));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Person {
        Person::new("Mike", "1112 Main", "Dallas", "TX")
    }

    #[test]
    fn test_restore_immediately_is_noop() {
        let mut person = sample();
        let before = person.clone();
        let memento = person.save();
        person.restore(&memento);
        assert_eq!(person, before);
    }

    #[test]
    fn test_restore_earlier_snapshot_reverts_exactly() {
        let mut person = sample();
        let mut caretaker = Caretaker::new();
        let first = caretaker.add(person.save());

        person.name = "John".to_string();
        person.street = "48th Street".to_string();
        caretaker.add(person.save());

        person.city = "San Jose".to_string();
        person.restore(caretaker.get(first).unwrap());
        assert_eq!(person, sample());
    }

    #[test]
    fn test_snapshot_unchanged_by_restore() {
        let mut person = sample();
        let memento = person.save();
        let copy = memento.clone();

        person.state = "CA".to_string();
        person.restore(&memento);
        person.state = "NY".to_string();
        assert_eq!(memento, copy);
    }

    #[test]
    fn test_caretaker_indexing() {
        let mut caretaker = Caretaker::new();
        assert!(caretaker.is_empty());
        assert!(caretaker.latest().is_none());

        let person = sample();
        assert_eq!(caretaker.add(person.save()), 0);
        assert_eq!(caretaker.add(person.save()), 1);
        assert_eq!(caretaker.len(), 2);
        assert!(caretaker.get(2).is_none());
    }

    proptest! {
        #[test]
        fn test_round_trip_after_mutation(name in ".*", city in ".*") {
            let mut person = sample();
            let memento = person.save();
            person.name = name;
            person.city = city;
            person.restore(&memento);
            prop_assert_eq!(person, sample());
        }
    }
}
