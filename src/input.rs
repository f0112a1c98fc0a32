use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Forward, Key::Back, Key::TurnLeft, Key::TurnRight];

    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::KeyW => Some(Key::Forward),
            KeyCode::KeyS => Some(Key::Back),
            KeyCode::KeyA => Some(Key::TurnLeft),
            KeyCode::KeyD => Some(Key::TurnRight),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Keys currently held down. Pressing twice or releasing an unheld key is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u8);

impl KeySet {
    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.contains(*k))
    }
}
