//! Viewer tuning: scale limits, zoom steps and the key that unlocks wheel zoom.
//! Read once at startup from the `#viewer-config` JSON block in `index.html`.

use serde::Deserialize;

use crate::error::ViewerError;

const CONFIG_ELEMENT_ID: &str = "viewer-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_scale: f64,
    /// Increment used by the zoom in/out buttons.
    pub button_step: f64,
    /// Increment applied per wheel notch while the modifier is held.
    pub wheel_step: f64,
    /// 1.0 follows the finger spread exactly; smaller values damp it.
    pub pinch_step: f64,
    /// `KeyboardEvent.key` value of the modifier, e.g. "Control".
    pub modifier_key: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.2,
            max_scale: 5.0,
            initial_scale: 1.0,
            button_step: 0.15,
            wheel_step: 0.1,
            pinch_step: 1.0,
            modifier_key: "Control".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let cfg: ViewerConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        if !finite_positive(self.min_scale) || !finite_positive(self.max_scale) {
            return Err(ViewerError::InvalidConfig(
                "scale limits must be positive".into(),
            ));
        }
        if self.min_scale > self.max_scale {
            return Err(ViewerError::InvalidConfig(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(ViewerError::InvalidConfig(format!(
                "initial_scale {} outside [{}, {}]",
                self.initial_scale, self.min_scale, self.max_scale
            )));
        }
        for (name, step) in [
            ("button_step", self.button_step),
            ("wheel_step", self.wheel_step),
            ("pinch_step", self.pinch_step),
        ] {
            if !finite_positive(step) {
                return Err(ViewerError::InvalidConfig(format!(
                    "{name} must be positive, got {step}"
                )));
            }
        }
        if self.modifier_key.trim().is_empty() {
            return Err(ViewerError::InvalidConfig("modifier_key is empty".into()));
        }
        Ok(())
    }

    /// Falls back to defaults when the block is missing or unusable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => {
                    log::info!("viewer config loaded from #{CONFIG_ELEMENT_ID}");
                    cfg
                }
                Err(err) => {
                    log::warn!("{err}; using defaults");
                    Self::default()
                }
            },
            _ => {
                log::info!("no #{CONFIG_ELEMENT_ID} block, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ViewerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_scale, 0.2);
        assert_eq!(cfg.max_scale, 5.0);
        assert_eq!(cfg.button_step, 0.15);
        assert_eq!(cfg.modifier_key, "Control");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = ViewerConfig::from_json(r#"{ "wheel_step": 0.25, "modifier_key": "Meta" }"#)
            .unwrap();
        assert_eq!(cfg.wheel_step, 0.25);
        assert_eq!(cfg.modifier_key, "Meta");
        assert_eq!(cfg.max_scale, 5.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ViewerConfig::from_json("{ min_scale: ").unwrap_err();
        assert!(matches!(err, ViewerError::ConfigParse(_)));
    }

    #[test]
    fn rejects_inverted_limits() {
        let err = ViewerConfig::from_json(r#"{ "min_scale": 3.0, "max_scale": 2.0 }"#).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_initial_scale_out_of_range() {
        let cfg = ViewerConfig {
            initial_scale: 9.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_step() {
        let cfg = ViewerConfig {
            wheel_step: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = ViewerConfig {
            pinch_step: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_blank_modifier() {
        let cfg = ViewerConfig {
            modifier_key: "  ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
