use crate::action::CameraAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors from editing or validating key bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("key {key:?} is bound to both {first:?} and {second:?}")]
    DuplicateKey {
        key: String,
        first: CameraAction,
        second: CameraAction,
    },
    #[error("empty key name for {0:?}")]
    EmptyKey(CameraAction),
}

/// Key-name to camera-action mapping.
///
/// Key names are the windowing layer's physical key codes (`"KeyA"`,
/// `"Equal"`, ...). A partial map in a config file overrides only the
/// actions it names; the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<CameraAction, String>",
    into = "BTreeMap<CameraAction, String>"
)]
pub struct KeyBindings {
    keys: BTreeMap<CameraAction, String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            (CameraAction::RotateLeft, "KeyA"),
            (CameraAction::RotateRight, "KeyD"),
            (CameraAction::RotateUp, "KeyW"),
            (CameraAction::RotateDown, "KeyS"),
            (CameraAction::ZoomIn, "Equal"),
            (CameraAction::ZoomOut, "Minus"),
        ]
        .into_iter()
        .map(|(action, key)| (action, key.to_string()))
        .collect();
        Self { keys }
    }
}

impl From<BTreeMap<CameraAction, String>> for KeyBindings {
    fn from(overrides: BTreeMap<CameraAction, String>) -> Self {
        let mut bindings = Self::default();
        bindings.keys.extend(overrides);
        bindings
    }
}

impl From<KeyBindings> for BTreeMap<CameraAction, String> {
    fn from(bindings: KeyBindings) -> Self {
        bindings.keys
    }
}

impl KeyBindings {
    /// The action bound to `key`, if any.
    pub fn action_for_key(&self, key: &str) -> Option<CameraAction> {
        self.keys
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    pub fn key_for(&self, action: CameraAction) -> Option<&str> {
        self.keys.get(&action).map(String::as_str)
    }

    /// Rebind one action. Rejects a key already used by another action.
    pub fn bind(
        &mut self,
        action: CameraAction,
        key: impl Into<String>,
    ) -> Result<(), BindingError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BindingError::EmptyKey(action));
        }
        if let Some(other) = self.action_for_key(&key).filter(|a| *a != action) {
            return Err(BindingError::DuplicateKey {
                key,
                first: other,
                second: action,
            });
        }
        tracing::debug!("bound {} to {key}", action.name());
        self.keys.insert(action, key);
        Ok(())
    }

    /// Check that no key drives two actions and no key name is empty.
    pub fn validate(&self) -> Result<(), BindingError> {
        let mut seen: BTreeMap<&str, CameraAction> = BTreeMap::new();
        for (action, key) in &self.keys {
            if key.is_empty() {
                return Err(BindingError::EmptyKey(*action));
            }
            if let Some(first) = seen.insert(key.as_str(), *action) {
                return Err(BindingError::DuplicateKey {
                    key: key.clone(),
                    first,
                    second: *action,
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraAction, &str)> {
        self.keys.iter().map(|(action, key)| (*action, key.as_str()))
    }
}
