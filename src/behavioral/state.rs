// State: a traffic light whose behaviour depends on the active light.
//
// States are a closed enum. A state's handler only names its successor; the
// context installs it when `change` is called from outside, and `set_state`
// switches to any state directly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    pub fn sign(self) -> &'static str {
        match self {
            LightState::Red => "STOP",
            LightState::Green => "GO",
            LightState::Yellow => "STEADY",
        }
    }

    /// The state this one hands over to.
    fn successor(self) -> LightState {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LightState::Red => "red",
            LightState::Green => "green",
            LightState::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub struct TrafficLight {
    state: LightState,
    transitions: usize,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLight {
    pub fn new() -> Self {
        Self {
            state: LightState::Red,
            transitions: 0,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn sign(&self) -> &'static str {
        self.state.sign()
    }

    /// Move to the successor of the active state and return the new state.
    pub fn change(&mut self) -> LightState {
        self.set_state(self.state.successor());
        self.state
    }

    pub fn set_state(&mut self, state: LightState) {
        self.state = state;
        self.transitions += 1;
    }

    pub fn transitions(&self) -> usize {
        self.transitions
    }
}

pub fn demo() -> Vec<String> {
    let mut light = TrafficLight::new();
    let mut lines = vec![format!("{}: {}", light.state(), light.sign())];
    for _ in 0..3 {
        light.change();
        lines.push(format!("{}: {}", light.state(), light.sign()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_red() {
        let light = TrafficLight::new();
        assert_eq!(light.state(), LightState::Red);
        assert_eq!(light.sign(), "STOP");
    }

    #[test]
    fn test_change_cycles() {
        let mut light = TrafficLight::new();
        assert_eq!(light.change(), LightState::Green);
        assert_eq!(light.sign(), "GO");
        assert_eq!(light.change(), LightState::Yellow);
        assert_eq!(light.change(), LightState::Red);
        assert_eq!(light.transitions(), 3);
    }

    #[test]
    fn test_state_does_not_change_by_itself() {
        let light = TrafficLight::new();
        for _ in 0..5 {
            assert_eq!(light.sign(), "STOP");
        }
        assert_eq!(light.transitions(), 0);
    }

    #[test]
    fn test_explicit_switch() {
        let mut light = TrafficLight::new();
        light.set_state(LightState::Yellow);
        assert_eq!(light.sign(), "STEADY");
        assert_eq!(light.change(), LightState::Red);
    }
}
