// Bridge: remotes (abstraction) drive devices (implementation) through the
// `Device` trait, so either side can vary without touching the other.

pub trait Device {
    fn name(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, volume: u8);
}

#[derive(Debug)]
pub struct Tv {
    on: bool,
    volume: u8,
}

impl Default for Tv {
    fn default() -> Self {
        Self { on: false, volume: 30 }
    }
}

impl Device for Tv {
    fn name(&self) -> &str {
        "tv"
    }

    fn is_enabled(&self) -> bool {
        self.on
    }

    fn enable(&mut self) {
        self.on = true;
    }

    fn disable(&mut self) {
        self.on = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }
}

/// Radios cap out lower than TVs.
#[derive(Debug)]
pub struct Radio {
    on: bool,
    volume: u8,
}

impl Default for Radio {
    fn default() -> Self {
        Self { on: false, volume: 10 }
    }
}

impl Device for Radio {
    fn name(&self) -> &str {
        "radio"
    }

    fn is_enabled(&self) -> bool {
        self.on
    }

    fn enable(&mut self) {
        self.on = true;
    }

    fn disable(&mut self) {
        self.on = false;
    }

    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(40);
    }
}

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    /// Swap the implementation; returns the previous device.
    pub fn set_device(&mut self, device: Box<dyn Device>) -> Box<dyn Device> {
        std::mem::replace(&mut self.device, device)
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_up(&mut self) {
        let volume = self.device.volume().saturating_add(10);
        self.device.set_volume(volume);
    }

    pub fn volume_down(&mut self) {
        let volume = self.device.volume().saturating_sub(10);
        self.device.set_volume(volume);
    }
}

/// Refined abstraction adding `mute` on top of the basic remote.
pub struct AdvancedRemote {
    remote: RemoteControl,
}

impl AdvancedRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }

    pub fn remote(&mut self) -> &mut RemoteControl {
        &mut self.remote
    }
}

pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();
    let mut remote = RemoteControl::new(Box::new(Tv::default()));
    remote.toggle_power();
    remote.volume_up();
    lines.push(format!(
        "{}: on={} volume={}",
        remote.device().name(),
        remote.device().is_enabled(),
        remote.device().volume()
    ));

    remote.set_device(Box::new(Radio::default()));
    remote.volume_up();
    lines.push(format!(
        "{}: on={} volume={}",
        remote.device().name(),
        remote.device().is_enabled(),
        remote.device().volume()
    ));

    let mut advanced = AdvancedRemote::new(Box::new(Tv::default()));
    advanced.mute();
    lines.push(format!("muted tv volume={}", advanced.remote().device().volume()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_drives_tv() {
        let mut remote = RemoteControl::new(Box::new(Tv::default()));
        remote.toggle_power();
        remote.volume_up();
        assert!(remote.device().is_enabled());
        assert_eq!(remote.device().volume(), 40);
    }

    #[test]
    fn test_swap_device_keeps_interface() {
        let mut remote = RemoteControl::new(Box::new(Tv::default()));
        let old = remote.set_device(Box::new(Radio::default()));
        assert_eq!(old.name(), "tv");

        for _ in 0..10 {
            remote.volume_up();
        }
        assert_eq!(remote.device().name(), "radio");
        assert_eq!(remote.device().volume(), 40);
    }

    #[test]
    fn test_volume_down_saturates() {
        let mut remote = RemoteControl::new(Box::new(Radio::default()));
        remote.volume_down();
        remote.volume_down();
        assert_eq!(remote.device().volume(), 0);
    }

    #[test]
    fn test_advanced_remote_mute() {
        let mut remote = AdvancedRemote::new(Box::new(Tv::default()));
        remote.remote().volume_up();
        remote.mute();
        assert_eq!(remote.remote().device().volume(), 0);
    }
}
