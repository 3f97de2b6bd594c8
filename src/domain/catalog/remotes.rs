//! Supported remote models and the deCONZ button event code of each gesture
//!
//! Codes are the values of the `event` field of `deconz_event`. Most remotes use
//! `button * 1000 + action` where action is 0 (initial press), 1 (hold),
//! 2 (short release), 3 (long release), 4/5/6/10 (multi press).
//! The Aqara cube encodes flips as `target_side * 1000 + source_side`.

use super::gesture::Gesture as G;
use super::gesture::*;
use super::Remote;

pub const HUE_DIMMER_REMOTE_MODEL_GEN1: &str = "RWL020";
pub const HUE_DIMMER_REMOTE_MODEL_GEN2: &str = "RWL021";
pub static HUE_DIMMER_REMOTE: Remote = Remote::new(
    "Philips Hue dimmer switch",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1000),
        (G::new(SHORT_RELEASE, TURN_ON), 1002),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(LONG_RELEASE, TURN_ON), 1003),
        (G::new(SHORT_PRESS, DIM_UP), 2000),
        (G::new(SHORT_RELEASE, DIM_UP), 2002),
        (G::new(LONG_PRESS, DIM_UP), 2001),
        (G::new(LONG_RELEASE, DIM_UP), 2003),
        (G::new(SHORT_PRESS, DIM_DOWN), 3000),
        (G::new(SHORT_RELEASE, DIM_DOWN), 3002),
        (G::new(LONG_PRESS, DIM_DOWN), 3001),
        (G::new(LONG_RELEASE, DIM_DOWN), 3003),
        (G::new(SHORT_PRESS, TURN_OFF), 4000),
        (G::new(SHORT_RELEASE, TURN_OFF), 4002),
        (G::new(LONG_PRESS, TURN_OFF), 4001),
        (G::new(LONG_RELEASE, TURN_OFF), 4003),
    ],
);

pub const HUE_TAP_REMOTE_MODEL: &str = "ZGPSWITCH";
pub static HUE_TAP_REMOTE: Remote = Remote::new(
    "Philips Hue tap switch",
    &[
        (G::new(SHORT_PRESS, BUTTON_1), 34),
        (G::new(SHORT_PRESS, BUTTON_2), 16),
        (G::new(SHORT_PRESS, BUTTON_3), 17),
        (G::new(SHORT_PRESS, BUTTON_4), 18),
    ],
);

pub const SYMFONISK_SOUND_CONTROLLER_MODEL: &str = "SYMFONISK Sound Controller";
pub static SYMFONISK_SOUND_CONTROLLER: Remote = Remote::new(
    "IKEA SYMFONISK sound controller",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(DOUBLE_PRESS, TURN_ON), 1004),
        (G::new(TRIPLE_PRESS, TURN_ON), 1005),
        (G::new(ROTATED, LEFT), 2001),
        (G::new(ROTATION_STOPPED, LEFT), 2003),
        (G::new(ROTATED, RIGHT), 3001),
        (G::new(ROTATION_STOPPED, RIGHT), 3003),
    ],
);

pub const TRADFRI_ON_OFF_SWITCH_MODEL: &str = "TRADFRI on/off switch";
pub static TRADFRI_ON_OFF_SWITCH: Remote = Remote::new(
    "IKEA TRADFRI on/off switch",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(LONG_RELEASE, TURN_ON), 1003),
        (G::new(SHORT_PRESS, TURN_OFF), 2002),
        (G::new(LONG_PRESS, TURN_OFF), 2001),
        (G::new(LONG_RELEASE, TURN_OFF), 2003),
    ],
);

pub const TRADFRI_OPEN_CLOSE_REMOTE_MODEL: &str = "TRADFRI open/close remote";
pub static TRADFRI_OPEN_CLOSE_REMOTE: Remote = Remote::new(
    "IKEA TRADFRI open/close remote",
    &[
        (G::new(SHORT_PRESS, OPEN), 1002),
        (G::new(LONG_PRESS, OPEN), 1003),
        (G::new(SHORT_PRESS, CLOSE), 2002),
        (G::new(LONG_PRESS, CLOSE), 2003),
    ],
);

pub const TRADFRI_REMOTE_MODEL: &str = "TRADFRI remote control";
pub static TRADFRI_REMOTE: Remote = Remote::new(
    "IKEA TRADFRI remote control",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(SHORT_PRESS, DIM_UP), 2002),
        (G::new(LONG_PRESS, DIM_UP), 2001),
        (G::new(LONG_RELEASE, DIM_UP), 2003),
        (G::new(SHORT_PRESS, DIM_DOWN), 3002),
        (G::new(LONG_PRESS, DIM_DOWN), 3001),
        (G::new(LONG_RELEASE, DIM_DOWN), 3003),
        (G::new(SHORT_PRESS, LEFT), 4002),
        (G::new(LONG_PRESS, LEFT), 4001),
        (G::new(LONG_RELEASE, LEFT), 4003),
        (G::new(SHORT_PRESS, RIGHT), 5002),
        (G::new(LONG_PRESS, RIGHT), 5001),
        (G::new(LONG_RELEASE, RIGHT), 5003),
    ],
);

pub const TRADFRI_WIRELESS_DIMMER_MODEL: &str = "TRADFRI wireless dimmer";
pub static TRADFRI_WIRELESS_DIMMER: Remote = Remote::new(
    "IKEA TRADFRI wireless dimmer",
    &[
        (G::new(ROTATED, LEFT), 3002),
        (G::new(ROTATED, RIGHT), 2002),
    ],
);

pub const AQARA_CUBE_MODEL: &str = "lumi.sensor_cube";
pub static AQARA_CUBE: Remote = Remote::new(
    "Aqara magic cube",
    &[
        (G::new(ROTATE_FROM_SIDE_1, SIDE_2), 6002),
        (G::new(ROTATE_FROM_SIDE_1, SIDE_3), 3002),
        (G::new(ROTATE_FROM_SIDE_1, SIDE_4), 4002),
        (G::new(ROTATE_FROM_SIDE_1, SIDE_5), 1002),
        (G::new(ROTATE_FROM_SIDE_1, SIDE_6), 5002),
        (G::new(ROTATE_FROM_SIDE_2, SIDE_1), 2006),
        (G::new(ROTATE_FROM_SIDE_2, SIDE_3), 3006),
        (G::new(ROTATE_FROM_SIDE_2, SIDE_4), 4006),
        (G::new(ROTATE_FROM_SIDE_2, SIDE_5), 1006),
        (G::new(ROTATE_FROM_SIDE_2, SIDE_6), 5006),
        (G::new(ROTATE_FROM_SIDE_3, SIDE_1), 2003),
        (G::new(ROTATE_FROM_SIDE_3, SIDE_2), 6003),
        (G::new(ROTATE_FROM_SIDE_3, SIDE_4), 4003),
        (G::new(ROTATE_FROM_SIDE_3, SIDE_5), 1003),
        (G::new(ROTATE_FROM_SIDE_3, SIDE_6), 5003),
        (G::new(ROTATE_FROM_SIDE_4, SIDE_1), 2004),
        (G::new(ROTATE_FROM_SIDE_4, SIDE_2), 6004),
        (G::new(ROTATE_FROM_SIDE_4, SIDE_3), 3004),
        (G::new(ROTATE_FROM_SIDE_4, SIDE_5), 1004),
        (G::new(ROTATE_FROM_SIDE_4, SIDE_6), 5004),
        (G::new(ROTATE_FROM_SIDE_5, SIDE_1), 2001),
        (G::new(ROTATE_FROM_SIDE_5, SIDE_2), 6001),
        (G::new(ROTATE_FROM_SIDE_5, SIDE_3), 3001),
        (G::new(ROTATE_FROM_SIDE_5, SIDE_4), 4001),
        (G::new(ROTATE_FROM_SIDE_5, SIDE_6), 5001),
        (G::new(ROTATE_FROM_SIDE_6, SIDE_1), 2005),
        (G::new(ROTATE_FROM_SIDE_6, SIDE_2), 6005),
        (G::new(ROTATE_FROM_SIDE_6, SIDE_3), 3005),
        (G::new(ROTATE_FROM_SIDE_6, SIDE_4), 4005),
        (G::new(ROTATE_FROM_SIDE_6, SIDE_5), 1005),
        (G::new(MOVE, SIDE_1), 2000),
        (G::new(MOVE, SIDE_2), 6000),
        (G::new(MOVE, SIDE_3), 3000),
        (G::new(MOVE, SIDE_4), 4000),
        (G::new(MOVE, SIDE_5), 1000),
        (G::new(MOVE, SIDE_6), 5000),
        (G::new(DOUBLE_TAP, SIDE_1), 2002),
        // Same-side code. Upstream deCONZ lists 6002 here, which collides with the
        // flip from side 1; keep 6006 so codes stay unique within the cube.
        (G::new(DOUBLE_TAP, SIDE_2), 6006),
        (G::new(DOUBLE_TAP, SIDE_3), 3003),
        (G::new(DOUBLE_TAP, SIDE_4), 4004),
        (G::new(DOUBLE_TAP, SIDE_5), 1001),
        (G::new(DOUBLE_TAP, SIDE_6), 5005),
        (G::new(AWAKE, NONE), 7000),
        (G::new(FREE_FALL, NONE), 7008),
        (G::new(SHAKE, NONE), 7007),
    ],
);

pub const AQARA_DOUBLE_WALL_SWITCH_MODEL: &str = "lumi.remote.b286acn01";
pub static AQARA_DOUBLE_WALL_SWITCH: Remote = Remote::new(
    "Aqara double wall switch",
    &[
        (G::new(SHORT_PRESS, LEFT), 1002),
        (G::new(LONG_PRESS, LEFT), 1001),
        (G::new(DOUBLE_PRESS, LEFT), 1004),
        (G::new(SHORT_PRESS, RIGHT), 2002),
        (G::new(LONG_PRESS, RIGHT), 2001),
        (G::new(DOUBLE_PRESS, RIGHT), 2004),
        (G::new(SHORT_PRESS, BOTH_BUTTONS), 3002),
        (G::new(LONG_PRESS, BOTH_BUTTONS), 3001),
        (G::new(DOUBLE_PRESS, BOTH_BUTTONS), 3004),
    ],
);

pub const AQARA_DOUBLE_WALL_SWITCH_WXKG02LM_MODEL: &str = "lumi.sensor_86sw2";
pub static AQARA_DOUBLE_WALL_SWITCH_WXKG02LM: Remote = Remote::new(
    "Aqara double wall switch WXKG02LM",
    &[
        (G::new(SHORT_PRESS, LEFT), 1002),
        (G::new(SHORT_PRESS, RIGHT), 2002),
        (G::new(SHORT_PRESS, BOTH_BUTTONS), 3002),
    ],
);

pub const AQARA_MINI_SWITCH_MODEL: &str = "lumi.remote.b1acn01";
pub static AQARA_MINI_SWITCH: Remote = Remote::new(
    "Aqara mini switch",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(DOUBLE_PRESS, TURN_ON), 1004),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(LONG_RELEASE, TURN_ON), 1003),
    ],
);

pub const AQARA_ROUND_SWITCH_MODEL: &str = "lumi.sensor_switch";
pub static AQARA_ROUND_SWITCH: Remote = Remote::new(
    "Aqara round switch",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1000),
        (G::new(SHORT_RELEASE, TURN_ON), 1002),
        (G::new(DOUBLE_PRESS, TURN_ON), 1004),
        (G::new(TRIPLE_PRESS, TURN_ON), 1005),
        (G::new(QUADRUPLE_PRESS, TURN_ON), 1006),
        (G::new(QUINTUPLE_PRESS, TURN_ON), 1010),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(LONG_RELEASE, TURN_ON), 1003),
    ],
);

pub const AQARA_SQUARE_SWITCH_MODEL: &str = "lumi.sensor_switch.aq3";
pub static AQARA_SQUARE_SWITCH: Remote = Remote::new(
    "Aqara square switch",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(DOUBLE_PRESS, TURN_ON), 1004),
        (G::new(LONG_PRESS, TURN_ON), 1001),
        (G::new(LONG_RELEASE, TURN_ON), 1003),
        (G::new(SHAKE, NONE), 1007),
    ],
);

pub const AQARA_SQUARE_SWITCH_WXKG11LM_2016_MODEL: &str = "lumi.sensor_switch.aq2";
pub static AQARA_SQUARE_SWITCH_WXKG11LM_2016: Remote = Remote::new(
    "Aqara square switch WXKG11LM (2016)",
    &[
        (G::new(SHORT_PRESS, TURN_ON), 1002),
        (G::new(DOUBLE_PRESS, TURN_ON), 1004),
        (G::new(TRIPLE_PRESS, TURN_ON), 1005),
        (G::new(QUADRUPLE_PRESS, TURN_ON), 1006),
    ],
);

/// Model identifier → remote table, in lookup and enumeration order
pub static REMOTES: &[(&str, &Remote)] = &[
    (HUE_DIMMER_REMOTE_MODEL_GEN1, &HUE_DIMMER_REMOTE),
    (HUE_DIMMER_REMOTE_MODEL_GEN2, &HUE_DIMMER_REMOTE),
    (HUE_TAP_REMOTE_MODEL, &HUE_TAP_REMOTE),
    (SYMFONISK_SOUND_CONTROLLER_MODEL, &SYMFONISK_SOUND_CONTROLLER),
    (TRADFRI_ON_OFF_SWITCH_MODEL, &TRADFRI_ON_OFF_SWITCH),
    (TRADFRI_OPEN_CLOSE_REMOTE_MODEL, &TRADFRI_OPEN_CLOSE_REMOTE),
    (TRADFRI_REMOTE_MODEL, &TRADFRI_REMOTE),
    (TRADFRI_WIRELESS_DIMMER_MODEL, &TRADFRI_WIRELESS_DIMMER),
    (AQARA_CUBE_MODEL, &AQARA_CUBE),
    (AQARA_DOUBLE_WALL_SWITCH_MODEL, &AQARA_DOUBLE_WALL_SWITCH),
    (
        AQARA_DOUBLE_WALL_SWITCH_WXKG02LM_MODEL,
        &AQARA_DOUBLE_WALL_SWITCH_WXKG02LM,
    ),
    (AQARA_MINI_SWITCH_MODEL, &AQARA_MINI_SWITCH),
    (AQARA_ROUND_SWITCH_MODEL, &AQARA_ROUND_SWITCH),
    (AQARA_SQUARE_SWITCH_MODEL, &AQARA_SQUARE_SWITCH),
    (
        AQARA_SQUARE_SWITCH_WXKG11LM_2016_MODEL,
        &AQARA_SQUARE_SWITCH_WXKG11LM_2016,
    ),
];
