use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A discrete camera trigger produced by the windowing layer.
///
/// Actions are applied once per frame while held, scaled by frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraAction {
    /// Increase yaw.
    RotateLeft,
    /// Decrease yaw.
    RotateRight,
    /// Increase pitch.
    RotateUp,
    /// Decrease pitch.
    RotateDown,
    /// Move towards the target.
    ZoomIn,
    /// Move away from the target.
    ZoomOut,
}

impl CameraAction {
    pub const ALL: [CameraAction; 6] = [
        CameraAction::RotateLeft,
        CameraAction::RotateRight,
        CameraAction::RotateUp,
        CameraAction::RotateDown,
        CameraAction::ZoomIn,
        CameraAction::ZoomOut,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RotateLeft => "rotate-left",
            Self::RotateRight => "rotate-right",
            Self::RotateUp => "rotate-up",
            Self::RotateDown => "rotate-down",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }

    /// Look an action up by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// The set of actions whose keys are currently down.
///
/// Iteration order is fixed so a frame applies held actions in the same
/// order regardless of press order.
#[derive(Debug, Clone, Default)]
pub struct HeldActions {
    held: BTreeSet<CameraAction>,
}

impl HeldActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: CameraAction) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: CameraAction) {
        self.held.remove(&action);
    }

    /// Record a key transition.
    pub fn set(&mut self, action: CameraAction, pressed: bool) {
        if pressed {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held.contains(&action)
    }

    pub fn iter(&self) -> impl Iterator<Item = CameraAction> + '_ {
        self.held.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Drop everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_back_to_actions() {
        for action in CameraAction::ALL {
            assert_eq!(CameraAction::from_name(action.name()), Some(action));
        }
        assert_eq!(CameraAction::from_name("strafe"), None);
    }

    #[test]
    fn held_actions_track_press_and_release() {
        let mut held = HeldActions::new();
        held.set(CameraAction::ZoomOut, true);
        held.set(CameraAction::RotateLeft, true);
        assert!(held.is_held(CameraAction::ZoomOut));

        held.set(CameraAction::ZoomOut, false);
        assert!(!held.is_held(CameraAction::ZoomOut));
        assert_eq!(held.iter().collect::<Vec<_>>(), vec![CameraAction::RotateLeft]);

        held.clear();
        assert!(held.is_empty());
    }

    #[test]
    fn held_order_is_independent_of_press_order() {
        let mut a = HeldActions::new();
        a.press(CameraAction::ZoomIn);
        a.press(CameraAction::RotateUp);
        let mut b = HeldActions::new();
        b.press(CameraAction::RotateUp);
        b.press(CameraAction::ZoomIn);
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut held = HeldActions::new();
        held.press(CameraAction::RotateDown);
        held.press(CameraAction::RotateDown);
        assert_eq!(held.iter().count(), 1);
    }
}
