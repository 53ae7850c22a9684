use super::queue::InputEvent;

/// Discrete user commands understood by the control state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Explode,
    ToggleFreeze,
    ToggleGravityDamping,
    BeginReverse,
    CameraIn,
    CameraOut,
    RotateRight,
    RotateLeft,
    Quit,
}

const KEY_ESCAPE: u32 = 27;

impl Command {
    /// Map a key code to a command. Letters match either case.
    ///
    /// | key   | command              |
    /// |-------|----------------------|
    /// | space | explode              |
    /// | x     | toggle freeze        |
    /// | c     | toggle gravity/damping |
    /// | z     | begin reverse        |
    /// | w / s | camera in / out      |
    /// | d / a | rotate right / left  |
    /// | esc   | quit                 |
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        if key_code == KEY_ESCAPE {
            return Some(Command::Quit);
        }
        let key = char::from_u32(key_code)?.to_ascii_lowercase();
        match key {
            ' ' => Some(Command::Explode),
            'x' => Some(Command::ToggleFreeze),
            'c' => Some(Command::ToggleGravityDamping),
            'z' => Some(Command::BeginReverse),
            'w' => Some(Command::CameraIn),
            's' => Some(Command::CameraOut),
            'd' => Some(Command::RotateRight),
            'a' => Some(Command::RotateLeft),
            _ => None,
        }
    }

    /// Commands fire on key-down only.
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match event {
            InputEvent::KeyDown { key_code } => Self::from_key_code(*key_code),
            InputEvent::KeyUp { .. } => None,
        }
    }
}
