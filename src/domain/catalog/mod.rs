//! Capability catalog of supported deCONZ remotes
//!
//! Maps a manufacturer model identifier to the gestures the remote can emit and the
//! numeric event code deCONZ reports for each of them. The tables are `'static`
//! data and are never modified, so they can be read from any task without locking.

pub mod gesture;
pub mod remotes;

pub use gesture::Gesture;

use remotes::REMOTES;

/// Gesture table of one remote model
#[derive(Debug)]
pub struct Remote {
    name: &'static str,
    gestures: &'static [(Gesture, u32)],
}

impl Remote {
    pub const fn new(name: &'static str, gestures: &'static [(Gesture, u32)]) -> Self {
        Self { name, gestures }
    }

    /// Human readable product name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// (gesture, code) entries in table order
    pub fn gestures(&self) -> impl Iterator<Item = (Gesture, u32)> + Clone {
        let gestures: &'static [(Gesture, u32)] = self.gestures;
        gestures.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    pub fn contains(&self, kind: &str, subtype: &str) -> bool {
        self.code_of(kind, subtype).is_some()
    }

    /// Event code for a gesture of this remote
    pub fn code_of(&self, kind: &str, subtype: &str) -> Option<u32> {
        self.gestures
            .iter()
            .find(|(gesture, _)| gesture.is(kind, subtype))
            .map(|(_, code)| *code)
    }

    /// Reverse lookup: which gesture produced an event code
    pub fn gesture_of(&self, code: u32) -> Option<Gesture> {
        self.gestures
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(gesture, _)| *gesture)
    }
}

/// Gesture table for a model, `None` when the model is not a supported remote
pub fn lookup(model: &str) -> Option<&'static Remote> {
    REMOTES
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, remote)| *remote)
}

pub fn contains(model: &str, kind: &str, subtype: &str) -> bool {
    lookup(model).is_some_and(|remote| remote.contains(kind, subtype))
}

pub fn code_of(model: &str, kind: &str, subtype: &str) -> Option<u32> {
    lookup(model).and_then(|remote| remote.code_of(kind, subtype))
}

/// All catalogued model identifiers in table order
pub fn models() -> impl Iterator<Item = &'static str> {
    REMOTES.iter().map(|(model, _)| *model)
}
