use crate::geometry::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Start,
}

impl Key {
    pub const ALL: [Key; 5] = [Self::Up, Self::Down, Self::Left, Self::Right, Self::Start];

    fn bit(self) -> u8 {
        match self {
            Self::Up => 0x01,
            Self::Down => 0x02,
            Self::Left => 0x04,
            Self::Right => 0x08,
            Self::Start => 0x10,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Start => None,
        }
    }
}

pub const INPUT_KEY_MASK: u8 = 0x1F;

/// Per-frame key queries the game loop consumes.
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
    fn was_pressed_this_frame(&self, key: Key) -> bool;
}

/// Keys held during one frame, packed into the low five bits of a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub start: bool,
}

impl FrameInput {
    pub fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Start => self.start,
        }
    }
}

#[inline]
pub fn encode_input_byte(input: FrameInput) -> u8 {
    Key::ALL
        .iter()
        .filter(|key| input.is_down(**key))
        .fold(0, |byte, key| byte | key.bit())
}

/// Bits above `INPUT_KEY_MASK` are ignored.
#[inline]
pub fn decode_input_byte(byte: u8) -> FrameInput {
    FrameInput {
        up: byte & Key::Up.bit() != 0,
        down: byte & Key::Down.bit() != 0,
        left: byte & Key::Left.bit() != 0,
        right: byte & Key::Right.bit() != 0,
        start: byte & Key::Start.bit() != 0,
    }
}

/// Current and previous frame snapshots; a press is a key that is down now
/// and was up last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    current: FrameInput,
    last: FrameInput,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the current snapshot into the previous one.
    pub fn update(&mut self, input: FrameInput) {
        self.last = self.current;
        self.current = input;
    }

    pub fn update_from_byte(&mut self, byte: u8) {
        self.update(decode_input_byte(byte));
    }

    pub fn was_key_down(&self, key: Key) -> bool {
        self.last.is_down(key)
    }

    pub fn was_released_this_frame(&self, key: Key) -> bool {
        !self.current.is_down(key) && self.last.is_down(key)
    }

    pub fn is_held_down(&self, key: Key) -> bool {
        self.current.is_down(key) && self.last.is_down(key)
    }
}

impl InputSource for KeyboardState {
    fn is_key_down(&self, key: Key) -> bool {
        self.current.is_down(key)
    }

    fn was_pressed_this_frame(&self, key: Key) -> bool {
        self.current.is_down(key) && !self.last.is_down(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_layout() {
        let input = FrameInput {
            up: true,
            right: true,
            start: true,
            ..FrameInput::default()
        };
        assert_eq!(encode_input_byte(input), 0x19);
        assert_eq!(decode_input_byte(0x19), input);
    }

    #[test]
    fn reserved_bits_are_ignored() {
        assert_eq!(decode_input_byte(0xE0), FrameInput::default());
        assert_eq!(decode_input_byte(0xE4), decode_input_byte(0x04));
    }

    #[test]
    fn press_is_edge_triggered() {
        let mut keyboard = KeyboardState::new();
        keyboard.update_from_byte(0x01);
        assert!(keyboard.was_pressed_this_frame(Key::Up));
        assert!(keyboard.is_key_down(Key::Up));

        keyboard.update_from_byte(0x01);
        assert!(!keyboard.was_pressed_this_frame(Key::Up));
        assert!(keyboard.is_held_down(Key::Up));

        keyboard.update_from_byte(0x00);
        assert!(keyboard.was_released_this_frame(Key::Up));
        assert!(keyboard.was_key_down(Key::Up));
        assert!(!keyboard.is_key_down(Key::Up));
    }
}
