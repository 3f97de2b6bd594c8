//! Capability catalog tests
//!
//! Checks that every gesture of every model maps to the event code deCONZ reports.

use deconz_device_trigger::catalog::{self, gesture::*};

/// Every (model, type, subtype, code) row deCONZ documents, spelled out
const DOCUMENTED: &[(&str, &str, &str, u32)] = &[
    // Philips Hue dimmer switch (RWL021 shares the table, checked below)
    ("RWL020", SHORT_PRESS, TURN_ON, 1000),
    ("RWL020", SHORT_RELEASE, TURN_ON, 1002),
    ("RWL020", LONG_PRESS, TURN_ON, 1001),
    ("RWL020", LONG_RELEASE, TURN_ON, 1003),
    ("RWL020", SHORT_PRESS, DIM_UP, 2000),
    ("RWL020", SHORT_RELEASE, DIM_UP, 2002),
    ("RWL020", LONG_PRESS, DIM_UP, 2001),
    ("RWL020", LONG_RELEASE, DIM_UP, 2003),
    ("RWL020", SHORT_PRESS, DIM_DOWN, 3000),
    ("RWL020", SHORT_RELEASE, DIM_DOWN, 3002),
    ("RWL020", LONG_PRESS, DIM_DOWN, 3001),
    ("RWL020", LONG_RELEASE, DIM_DOWN, 3003),
    ("RWL020", SHORT_PRESS, TURN_OFF, 4000),
    ("RWL020", SHORT_RELEASE, TURN_OFF, 4002),
    ("RWL020", LONG_PRESS, TURN_OFF, 4001),
    ("RWL020", LONG_RELEASE, TURN_OFF, 4003),
    // Philips Hue tap switch
    ("ZGPSWITCH", SHORT_PRESS, BUTTON_1, 34),
    ("ZGPSWITCH", SHORT_PRESS, BUTTON_2, 16),
    ("ZGPSWITCH", SHORT_PRESS, BUTTON_3, 17),
    ("ZGPSWITCH", SHORT_PRESS, BUTTON_4, 18),
    // IKEA SYMFONISK sound controller
    ("SYMFONISK Sound Controller", SHORT_PRESS, TURN_ON, 1002),
    ("SYMFONISK Sound Controller", DOUBLE_PRESS, TURN_ON, 1004),
    ("SYMFONISK Sound Controller", TRIPLE_PRESS, TURN_ON, 1005),
    ("SYMFONISK Sound Controller", ROTATED, LEFT, 2001),
    ("SYMFONISK Sound Controller", ROTATION_STOPPED, LEFT, 2003),
    ("SYMFONISK Sound Controller", ROTATED, RIGHT, 3001),
    ("SYMFONISK Sound Controller", ROTATION_STOPPED, RIGHT, 3003),
    // IKEA TRADFRI on/off switch
    ("TRADFRI on/off switch", SHORT_PRESS, TURN_ON, 1002),
    ("TRADFRI on/off switch", LONG_PRESS, TURN_ON, 1001),
    ("TRADFRI on/off switch", LONG_RELEASE, TURN_ON, 1003),
    ("TRADFRI on/off switch", SHORT_PRESS, TURN_OFF, 2002),
    ("TRADFRI on/off switch", LONG_PRESS, TURN_OFF, 2001),
    ("TRADFRI on/off switch", LONG_RELEASE, TURN_OFF, 2003),
    // IKEA TRADFRI open/close remote
    ("TRADFRI open/close remote", SHORT_PRESS, OPEN, 1002),
    ("TRADFRI open/close remote", LONG_PRESS, OPEN, 1003),
    ("TRADFRI open/close remote", SHORT_PRESS, CLOSE, 2002),
    ("TRADFRI open/close remote", LONG_PRESS, CLOSE, 2003),
    // IKEA TRADFRI remote control
    ("TRADFRI remote control", SHORT_PRESS, TURN_ON, 1002),
    ("TRADFRI remote control", LONG_PRESS, TURN_ON, 1001),
    ("TRADFRI remote control", SHORT_PRESS, DIM_UP, 2002),
    ("TRADFRI remote control", LONG_PRESS, DIM_UP, 2001),
    ("TRADFRI remote control", LONG_RELEASE, DIM_UP, 2003),
    ("TRADFRI remote control", SHORT_PRESS, DIM_DOWN, 3002),
    ("TRADFRI remote control", LONG_PRESS, DIM_DOWN, 3001),
    ("TRADFRI remote control", LONG_RELEASE, DIM_DOWN, 3003),
    ("TRADFRI remote control", SHORT_PRESS, LEFT, 4002),
    ("TRADFRI remote control", LONG_PRESS, LEFT, 4001),
    ("TRADFRI remote control", LONG_RELEASE, LEFT, 4003),
    ("TRADFRI remote control", SHORT_PRESS, RIGHT, 5002),
    ("TRADFRI remote control", LONG_PRESS, RIGHT, 5001),
    ("TRADFRI remote control", LONG_RELEASE, RIGHT, 5003),
    // IKEA TRADFRI wireless dimmer
    ("TRADFRI wireless dimmer", ROTATED, LEFT, 3002),
    ("TRADFRI wireless dimmer", ROTATED, RIGHT, 2002),
    // Aqara magic cube
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_2, 6002),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_3, 3002),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_4, 4002),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_5, 1002),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_6, 5002),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_2, SIDE_1, 2006),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_2, SIDE_3, 3006),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_2, SIDE_4, 4006),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_2, SIDE_5, 1006),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_2, SIDE_6, 5006),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_3, SIDE_1, 2003),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_3, SIDE_2, 6003),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_3, SIDE_4, 4003),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_3, SIDE_5, 1003),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_3, SIDE_6, 5003),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_4, SIDE_1, 2004),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_4, SIDE_2, 6004),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_4, SIDE_3, 3004),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_4, SIDE_5, 1004),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_4, SIDE_6, 5004),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_5, SIDE_1, 2001),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_5, SIDE_2, 6001),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_5, SIDE_3, 3001),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_5, SIDE_4, 4001),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_5, SIDE_6, 5001),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_6, SIDE_1, 2005),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_6, SIDE_2, 6005),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_6, SIDE_3, 3005),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_6, SIDE_4, 4005),
    ("lumi.sensor_cube", ROTATE_FROM_SIDE_6, SIDE_5, 1005),
    ("lumi.sensor_cube", MOVE, SIDE_1, 2000),
    ("lumi.sensor_cube", MOVE, SIDE_2, 6000),
    ("lumi.sensor_cube", MOVE, SIDE_3, 3000),
    ("lumi.sensor_cube", MOVE, SIDE_4, 4000),
    ("lumi.sensor_cube", MOVE, SIDE_5, 1000),
    ("lumi.sensor_cube", MOVE, SIDE_6, 5000),
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_1, 2002),
    // Not the upstream 6002, which belongs to the flip from side 1
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_2, 6006),
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_3, 3003),
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_4, 4004),
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_5, 1001),
    ("lumi.sensor_cube", DOUBLE_TAP, SIDE_6, 5005),
    ("lumi.sensor_cube", AWAKE, NONE, 7000),
    ("lumi.sensor_cube", FREE_FALL, NONE, 7008),
    ("lumi.sensor_cube", SHAKE, NONE, 7007),
    // Aqara double wireless switch
    ("lumi.remote.b286acn01", SHORT_PRESS, LEFT, 1002),
    ("lumi.remote.b286acn01", LONG_PRESS, LEFT, 1001),
    ("lumi.remote.b286acn01", DOUBLE_PRESS, LEFT, 1004),
    ("lumi.remote.b286acn01", SHORT_PRESS, RIGHT, 2002),
    ("lumi.remote.b286acn01", LONG_PRESS, RIGHT, 2001),
    ("lumi.remote.b286acn01", DOUBLE_PRESS, RIGHT, 2004),
    ("lumi.remote.b286acn01", SHORT_PRESS, BOTH_BUTTONS, 3002),
    ("lumi.remote.b286acn01", LONG_PRESS, BOTH_BUTTONS, 3001),
    ("lumi.remote.b286acn01", DOUBLE_PRESS, BOTH_BUTTONS, 3004),
    // Aqara double wall switch
    ("lumi.sensor_86sw2", SHORT_PRESS, LEFT, 1002),
    ("lumi.sensor_86sw2", SHORT_PRESS, RIGHT, 2002),
    ("lumi.sensor_86sw2", SHORT_PRESS, BOTH_BUTTONS, 3002),
    // Aqara mini switch
    ("lumi.remote.b1acn01", SHORT_PRESS, TURN_ON, 1002),
    ("lumi.remote.b1acn01", DOUBLE_PRESS, TURN_ON, 1004),
    ("lumi.remote.b1acn01", LONG_PRESS, TURN_ON, 1001),
    ("lumi.remote.b1acn01", LONG_RELEASE, TURN_ON, 1003),
    // Xiaomi round button
    ("lumi.sensor_switch", SHORT_PRESS, TURN_ON, 1000),
    ("lumi.sensor_switch", SHORT_RELEASE, TURN_ON, 1002),
    ("lumi.sensor_switch", DOUBLE_PRESS, TURN_ON, 1004),
    ("lumi.sensor_switch", TRIPLE_PRESS, TURN_ON, 1005),
    ("lumi.sensor_switch", QUADRUPLE_PRESS, TURN_ON, 1006),
    ("lumi.sensor_switch", QUINTUPLE_PRESS, TURN_ON, 1010),
    ("lumi.sensor_switch", LONG_PRESS, TURN_ON, 1001),
    ("lumi.sensor_switch", LONG_RELEASE, TURN_ON, 1003),
    // Aqara switch with gyro
    ("lumi.sensor_switch.aq3", SHORT_PRESS, TURN_ON, 1002),
    ("lumi.sensor_switch.aq3", DOUBLE_PRESS, TURN_ON, 1004),
    ("lumi.sensor_switch.aq3", LONG_PRESS, TURN_ON, 1001),
    ("lumi.sensor_switch.aq3", LONG_RELEASE, TURN_ON, 1003),
    ("lumi.sensor_switch.aq3", SHAKE, NONE, 1007),
    // Aqara square switch
    ("lumi.sensor_switch.aq2", SHORT_PRESS, TURN_ON, 1002),
    ("lumi.sensor_switch.aq2", DOUBLE_PRESS, TURN_ON, 1004),
    ("lumi.sensor_switch.aq2", TRIPLE_PRESS, TURN_ON, 1005),
    ("lumi.sensor_switch.aq2", QUADRUPLE_PRESS, TURN_ON, 1006),
];

#[test]
fn should_resolve_every_documented_code() {
    for (model, kind, subtype, code) in DOCUMENTED {
        assert!(catalog::contains(model, kind, subtype), "{} {} {}", model, kind, subtype);
        assert_eq!(catalog::code_of(model, kind, subtype), Some(*code), "{} {} {}", model, kind, subtype);
    }
}

#[test]
fn should_resolve_gen1_dimmer_rows_for_gen2() {
    let gen1_rows = DOCUMENTED.iter().filter(|(model, ..)| *model == "RWL020");

    for (_, kind, subtype, code) in gen1_rows {
        assert_eq!(catalog::code_of("RWL021", kind, subtype), Some(*code), "{} {}", kind, subtype);
    }
}

#[test]
fn should_document_every_catalogued_entry() {
    // Arrange
    let documented_models: Vec<&str> = catalog::models().filter(|m| *m != "RWL021").collect();

    // Act
    let catalogued: usize = documented_models
        .iter()
        .map(|model| catalog::lookup(model).unwrap().len())
        .sum();

    // Assert
    assert_eq!(DOCUMENTED.len(), 131);
    assert_eq!(catalogued, DOCUMENTED.len());
    for model in documented_models {
        let rows = DOCUMENTED.iter().filter(|(m, ..)| *m == model).count();
        assert_eq!(rows, catalog::lookup(model).unwrap().len(), "{}", model);
    }
}

#[test]
fn should_contain_every_enumerated_gesture() {
    for model in catalog::models() {
        let remote = catalog::lookup(model).unwrap();
        for (gesture, code) in remote.gestures() {
            assert!(catalog::contains(model, gesture.kind, gesture.subtype));
            assert_eq!(catalog::code_of(model, gesture.kind, gesture.subtype), Some(code));
            assert_eq!(remote.gesture_of(code), Some(gesture));
        }
    }
}

#[test]
fn should_not_contain_gestures_of_other_models() {
    // Rotation exists only on the SYMFONISK and the wireless dimmer
    assert!(!catalog::contains("RWL020", ROTATED, LEFT));
    assert!(!catalog::contains("TRADFRI remote control", ROTATED, LEFT));
    // Hue dimmer has no double press
    assert!(!catalog::contains("RWL021", DOUBLE_PRESS, TURN_ON));
    // Cube gestures need the right subtype
    assert!(!catalog::contains("lumi.sensor_cube", SHAKE, SIDE_1));
    assert!(!catalog::contains("lumi.sensor_cube", ROTATE_FROM_SIDE_1, SIDE_1));
}
