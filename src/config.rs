// config.rs - Viewer configuration, JSON-overridable
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Camera rig tuning: initial pose, clamp ranges, gesture divisors.
///
/// The defaults reproduce the stock viewer feel; every field can be
/// overridden from the JSON config file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Initial orbit angle around the vertical axis, in turns
    pub azimuth: f32,
    /// Initial orbit angle above the horizon, in half-turns
    pub elevation: f32,
    pub zoom: f32,
    pub offset_x: f32,
    pub offset_y: f32,

    pub elevation_min: f32,
    pub elevation_max: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub offset_x_min: f32,
    pub offset_x_max: f32,
    pub offset_y_min: f32,
    pub offset_y_max: f32,

    /// Fraction of the remaining distance covered per frame
    pub smoothing: f32,
    /// Screen pixels per world unit for two-finger pans
    pub pan_divisor: f32,
    /// Pinch velocity to zoom delta divisor
    pub pinch_divisor: f32,
    /// Zoom distance used by tap-to-focus; intentionally closer than zoom_min
    pub focus_zoom: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            azimuth: 0.87,
            elevation: 0.20,
            zoom: 10.0,
            offset_x: 0.0,
            offset_y: 0.0,
            elevation_min: 0.05,
            elevation_max: 0.40,
            zoom_min: 5.0,
            zoom_max: 15.0,
            offset_x_min: -4.0,
            offset_x_max: 4.0,
            offset_y_min: -3.0,
            offset_y_max: 3.0,
            smoothing: 0.075,
            pan_divisor: 30.0,
            pinch_divisor: 10.0,
            focus_zoom: 3.0,
        }
    }
}

/// A selectable body part: nodes with this name respond to taps.
#[derive(Debug, Clone, Deserialize)]
pub struct PartInfo {
    pub name: String,
    pub blurb: String,
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub rig: RigConfig,
    /// Interactive label set; a tapped node resolves to its nearest
    /// ancestor-or-self carrying one of these names
    pub parts: Vec<PartInfo>,
    /// Placement of a loaded model under the scene root
    pub model_offset: [f32; 3],
    pub model_scale: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rig: RigConfig::default(),
            parts: vec![
                PartInfo {
                    name: "body".to_string(),
                    blurb: "You are healthy".to_string(),
                },
                PartInfo {
                    name: "eye".to_string(),
                    blurb: "Eye".to_string(),
                },
            ],
            model_offset: [0.0, -5.0, 0.0],
            model_scale: 0.5,
        }
    }
}

impl ViewerConfig {
    /// Read a JSON config; missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text).context(format!("Failed to parse config file: {:?}", path))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn blurb_for(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.blurb.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_are_ordered() {
        let cfg = RigConfig::default();
        assert!(cfg.elevation_min < cfg.elevation_max);
        assert!(cfg.zoom_min < cfg.zoom_max);
        assert!(cfg.offset_x_min < cfg.offset_x_max);
        assert!(cfg.offset_y_min < cfg.offset_y_max);
        assert!(cfg.elevation >= cfg.elevation_min && cfg.elevation <= cfg.elevation_max);
    }

    #[test]
    fn test_partial_json_overrides() {
        let cfg: ViewerConfig =
            serde_json::from_str(r#"{"rig": {"zoom": 12.0}, "model_scale": 1.0}"#).unwrap();
        assert_eq!(cfg.rig.zoom, 12.0);
        assert_eq!(cfg.rig.zoom_max, 15.0, "untouched fields keep defaults");
        assert_eq!(cfg.model_scale, 1.0);
        assert!(cfg.blurb_for("body").is_some());
    }
}
