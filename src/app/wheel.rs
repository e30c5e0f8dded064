use std::collections::HashMap;

use ggez::input::keyboard::KeyCode;

use crate::basic::Dir;
use crate::hardware::Input;

/// Buttons on the encoder wheel breakout
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Button {
    Dir(Dir),
    Centre,
}

lazy_static! {
    static ref KEY_BINDINGS: HashMap<KeyCode, Button> = {
        use KeyCode::*;
        let mut map = HashMap::new();
        for (keys, button) in [
            ([Up, W], Button::Dir(Dir::U)),
            ([Down, S], Button::Dir(Dir::D)),
            ([Left, A], Button::Dir(Dir::L)),
            ([Right, D], Button::Dir(Dir::R)),
            ([Space, Return], Button::Centre),
        ] {
            for key in keys {
                map.insert(key, button);
            }
        }
        map
    };
}

/// Keyboard stand-in for the encoder wheel
///
/// Only the last direction pressed since the previous poll
/// is reported, a confirm press is reported once
#[derive(Default)]
pub struct Wheel {
    direction: Option<Dir>,
    confirm: bool,
}

impl Wheel {
    /// Returns false for keys that aren't bound to a button
    pub fn key_pressed(&mut self, key: KeyCode) -> bool {
        match KEY_BINDINGS.get(&key) {
            Some(Button::Dir(dir)) => self.direction = Some(*dir),
            Some(Button::Centre) => self.confirm = true,
            None => return false,
        }
        true
    }
}

impl Input for Wheel {
    fn direction_pressed(&mut self) -> Option<Dir> {
        self.direction.take()
    }

    fn confirm_pressed(&mut self) -> bool {
        std::mem::take(&mut self.confirm)
    }
}

#[test]
fn test_last_direction_wins() {
    let mut wheel = Wheel::default();
    assert!(wheel.key_pressed(KeyCode::Up));
    assert!(wheel.key_pressed(KeyCode::A));
    assert_eq!(wheel.direction_pressed(), Some(Dir::L));
    assert_eq!(wheel.direction_pressed(), None);
}

#[test]
fn test_confirm_reported_once() {
    let mut wheel = Wheel::default();
    assert!(!wheel.confirm_pressed());
    assert!(wheel.key_pressed(KeyCode::Return));
    assert!(wheel.confirm_pressed());
    assert!(!wheel.confirm_pressed());
}

#[test]
fn test_unbound_key() {
    let mut wheel = Wheel::default();
    assert!(!wheel.key_pressed(KeyCode::Q));
    assert_eq!(wheel.direction_pressed(), None);
    assert!(!wheel.confirm_pressed());
}
