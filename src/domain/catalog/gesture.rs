//! Gesture type and subtype identifiers exposed to automations

// Gesture types
pub const SHORT_PRESS: &str = "remote_button_short_press";
pub const SHORT_RELEASE: &str = "remote_button_short_release";
pub const LONG_PRESS: &str = "remote_button_long_press";
pub const LONG_RELEASE: &str = "remote_button_long_release";
pub const DOUBLE_PRESS: &str = "remote_button_double_press";
pub const TRIPLE_PRESS: &str = "remote_button_triple_press";
pub const QUADRUPLE_PRESS: &str = "remote_button_quadruple_press";
pub const QUINTUPLE_PRESS: &str = "remote_button_quintuple_press";
pub const ROTATED: &str = "remote_button_rotated";
pub const ROTATION_STOPPED: &str = "remote_button_rotation_stopped";
pub const AWAKE: &str = "remote_awakened";
pub const MOVE: &str = "remote_moved";
pub const DOUBLE_TAP: &str = "remote_double_tap";
pub const SHAKE: &str = "remote_gyro_activated";
pub const FREE_FALL: &str = "remote_falling";
pub const ROTATE_FROM_SIDE_1: &str = "remote_rotate_from_side_1";
pub const ROTATE_FROM_SIDE_2: &str = "remote_rotate_from_side_2";
pub const ROTATE_FROM_SIDE_3: &str = "remote_rotate_from_side_3";
pub const ROTATE_FROM_SIDE_4: &str = "remote_rotate_from_side_4";
pub const ROTATE_FROM_SIDE_5: &str = "remote_rotate_from_side_5";
pub const ROTATE_FROM_SIDE_6: &str = "remote_rotate_from_side_6";

// Gesture subtypes
pub const TURN_ON: &str = "turn_on";
pub const TURN_OFF: &str = "turn_off";
pub const DIM_UP: &str = "dim_up";
pub const DIM_DOWN: &str = "dim_down";
pub const LEFT: &str = "left";
pub const RIGHT: &str = "right";
pub const OPEN: &str = "open";
pub const CLOSE: &str = "close";
pub const BOTH_BUTTONS: &str = "both_buttons";
pub const BUTTON_1: &str = "button_1";
pub const BUTTON_2: &str = "button_2";
pub const BUTTON_3: &str = "button_3";
pub const BUTTON_4: &str = "button_4";
pub const SIDE_1: &str = "side_1";
pub const SIDE_2: &str = "side_2";
pub const SIDE_3: &str = "side_3";
pub const SIDE_4: &str = "side_4";
pub const SIDE_5: &str = "side_5";
pub const SIDE_6: &str = "side_6";
/// Subtype for gestures that have no button or side (shake, free fall, wake)
pub const NONE: &str = "";

/// A (gesture type, gesture subtype) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gesture {
    pub kind: &'static str,
    pub subtype: &'static str,
}

impl Gesture {
    pub const fn new(kind: &'static str, subtype: &'static str) -> Self {
        Self { kind, subtype }
    }

    /// Compare against a borrowed (type, subtype) pair
    pub fn is(&self, kind: &str, subtype: &str) -> bool {
        self.kind == kind && self.subtype == subtype
    }
}
