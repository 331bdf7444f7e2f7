//! Page configuration file handling
//!
//! Every threshold the components use is tunable through a TOML file.
//! Missing sections and fields fall back to the stock values, so an
//! empty file yields the default behavior.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level page configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub anchor: AnchorConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub parallax: ParallaxConfig,
    #[serde(default)]
    pub glow: GlowConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

impl PageConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Scroll-reactive navbar thresholds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavbarConfig {
    /// Scroll offset past which the navbar turns solid
    #[serde(default = "default_solid_threshold")]
    pub solid_threshold: f32,
    /// Scroll offset past which downward scrolling hides the navbar
    #[serde(default = "default_hide_threshold")]
    pub hide_threshold: f32,
}

fn default_solid_threshold() -> f32 {
    50.0
}

fn default_hide_threshold() -> f32 {
    300.0
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            solid_threshold: default_solid_threshold(),
            hide_threshold: default_hide_threshold(),
        }
    }
}

/// Anchor scrolling offsets
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnchorConfig {
    /// Extra gap kept between the navbar and the scrolled-to section
    #[serde(default = "default_anchor_margin")]
    pub margin: f32,
}

fn default_anchor_margin() -> f32 {
    20.0
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            margin: default_anchor_margin(),
        }
    }
}

/// Viewport reveal tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f32,
    /// Contraction of the viewport bottom edge when testing visibility
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f32,
    /// Delay between consecutive child card reveals
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: f32,
    /// Child classes that participate in the staggered reveal
    #[serde(default = "default_card_classes")]
    pub card_classes: Vec<String>,
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_bottom_margin() -> f32 {
    50.0
}

fn default_stagger_ms() -> f32 {
    100.0
}

fn default_card_classes() -> Vec<String> {
    [
        "problem-card",
        "tech-card",
        "traction-card",
        "market-item",
        "team-card",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin: default_bottom_margin(),
            stagger_ms: default_stagger_ms(),
            card_classes: default_card_classes(),
        }
    }
}

/// Pointer parallax tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParallaxConfig {
    /// Per-frame fraction of the remaining distance each layer closes
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    /// Displacement multiplier added per layer depth
    #[serde(default = "default_depth_step")]
    pub depth_step: f32,
}

fn default_smoothing() -> f32 {
    0.05
}

fn default_depth_step() -> f32 {
    10.0
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            depth_step: default_depth_step(),
        }
    }
}

/// Cursor glow tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlowConfig {
    /// Minimum viewport width for the glow to be created at all
    #[serde(default = "default_min_viewport_width")]
    pub min_viewport_width: f32,
    /// Diameter of the glow element
    #[serde(default = "default_glow_size")]
    pub size: f32,
}

fn default_min_viewport_width() -> f32 {
    1024.0
}

fn default_glow_size() -> f32 {
    400.0
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: default_min_viewport_width(),
            size: default_glow_size(),
        }
    }
}

/// Counter ramp-up tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CounterConfig {
    /// Total ramp duration
    #[serde(default = "default_counter_duration")]
    pub duration_ms: f32,
}

fn default_counter_duration() -> f32 {
    2000.0
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
        }
    }
}

/// Typewriter tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypewriterConfig {
    /// Delay between revealed characters
    #[serde(default = "default_typewriter_interval")]
    pub interval_ms: f32,
}

fn default_typewriter_interval() -> f32 {
    50.0
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_typewriter_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config.navbar.solid_threshold, 50.0);
        assert_eq!(config.navbar.hide_threshold, 300.0);
        assert_eq!(config.anchor.margin, 20.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.stagger_ms, 100.0);
        assert_eq!(config.parallax.smoothing, 0.05);
        assert_eq!(config.glow.min_viewport_width, 1024.0);
        assert_eq!(config.counter.duration_ms, 2000.0);
        assert_eq!(config.typewriter.interval_ms, 50.0);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = PageConfig::from_toml_str(
            r#"
            [navbar]
            solid_threshold = 80.0

            [reveal]
            card_classes = ["feature-card"]
            "#,
        )
        .unwrap();

        assert_eq!(config.navbar.solid_threshold, 80.0);
        // Sibling field in the same section keeps its default
        assert_eq!(config.navbar.hide_threshold, 300.0);
        assert_eq!(config.reveal.card_classes, vec!["feature-card"]);
        // Untouched sections keep their defaults
        assert_eq!(config.parallax.depth_step, 10.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(PageConfig::from_toml_str("navbar = [").is_err());
    }

    #[test]
    fn test_default_card_classes() {
        let config = PageConfig::default();
        assert_eq!(config.reveal.card_classes.len(), 5);
        assert!(config.reveal.card_classes.contains(&"tech-card".to_string()));
    }
}
