use anyhow::{Context, Result, bail};
use pixelpets_common::ViewerConfig;
use pixelpets_input::KeyBindings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewer settings plus the desktop key map, read from one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub viewer: ViewerConfig,
    pub keys: KeyBindings,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config: Self = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?,
            "json" => serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => bail!("unsupported config format {ext:?} (expected .yaml, .yml or .json)"),
        };
        config.viewer.validate()?;
        config.keys.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpets_common::ShapeKind;
    use pixelpets_input::CameraAction;
    use std::io::Write;

    fn write_config(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.keys.key_for(CameraAction::ZoomIn), Some("Equal"));
    }

    #[test]
    fn viewer_sections_and_keys_share_one_file() {
        let file = write_config(
            ".yaml",
            "camera:\n  radius: 8\nscene:\n  creatures:\n    - shape: bird\nkeys:\n  zoom-in: KeyE\n",
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.viewer.camera.radius, 8.0);
        assert_eq!(config.viewer.scene.creatures[0].shape, ShapeKind::Bird);
        assert_eq!(config.keys.key_for(CameraAction::ZoomIn), Some("KeyE"));
        assert_eq!(config.keys.key_for(CameraAction::ZoomOut), Some("Minus"));
    }

    #[test]
    fn json_is_accepted() {
        let file = write_config(".json", r#"{"window": {"title": "pets"}}"#);
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.viewer.window.title, "pets");
    }

    #[test]
    fn clashing_keys_are_rejected() {
        let file = write_config(".yml", "keys:\n  zoom-out: KeyW\n");
        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_config(".toml", "");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }
}
