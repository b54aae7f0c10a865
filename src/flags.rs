//! Global behavior flags.

use crate::layout::Match;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// What to do when a window asks to be activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Focus only if the window is on the current group, otherwise mark urgent.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Whether clicking a window raises it.
///
/// On the wire this is `false`, `true` or `"floating_only"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BringFrontClick {
    #[default]
    Disabled,
    Enabled,
    FloatingOnly,
}

impl Serialize for BringFrontClick {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BringFrontClick::Disabled => serializer.serialize_bool(false),
            BringFrontClick::Enabled => serializer.serialize_bool(true),
            BringFrontClick::FloatingOnly => serializer.serialize_str("floating_only"),
        }
    }
}

impl<'de> Deserialize<'de> for BringFrontClick {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(false) => Ok(BringFrontClick::Disabled),
            Raw::Bool(true) => Ok(BringFrontClick::Enabled),
            Raw::Name(s) if s == "floating_only" => Ok(BringFrontClick::FloatingOnly),
            Raw::Name(s) => Err(DeError::custom(format!("invalid bring_front_click: {:?}", s))),
        }
    }
}

/// Per-device settings for the Wayland backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRule {
    pub tap: Option<bool>,
    pub natural_scroll: Option<bool>,
    pub pointer_accel: Option<f64>,
}

/// The name reported in `_NET_WM_NAME`.  Java UI toolkits only work with
/// window managers on their whitelist, so claim to be one.
pub const JAVA_COMPAT_WMNAME: &str = "LG3D";

/// Settings the host reads once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalFlags {
    /// Binder for dynamically created groups; `None` leaves them unbound.
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<Match>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    /// Warp the pointer to the center of a newly focused screen.
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Honor windows (mostly games) that minimize themselves on focus loss.
    pub auto_minimize: bool,
    pub wl_input_rules: Option<BTreeMap<String, InputRule>>,
    pub wmname: String,
}

impl Default for GlobalFlags {
    fn default() -> Self {
        Self {
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Disabled,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            wmname: JAVA_COMPAT_WMNAME.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let f = GlobalFlags::default();
        assert!(f.dgroups_key_binder.is_none());
        assert!(f.dgroups_app_rules.is_empty());
        assert!(f.follow_mouse_focus);
        assert_eq!(f.bring_front_click, BringFrontClick::Disabled);
        assert!(!f.cursor_warp);
        assert!(f.auto_fullscreen);
        assert_eq!(f.focus_on_window_activation, FocusOnActivation::Smart);
        assert!(f.reconfigure_screens);
        assert!(f.auto_minimize);
        assert!(f.wl_input_rules.is_none());
        assert_eq!(f.wmname, "LG3D");
    }

    #[test]
    fn enum_wire_names() {
        let json = serde_json::to_string(&GlobalFlags::default()).unwrap();
        assert!(json.contains(r#""focus_on_window_activation":"smart""#));
        assert!(json.contains(r#""bring_front_click":false"#));
    }

    #[test]
    fn bring_front_click_is_bool_or_floating_only() {
        use serde_json::json;
        assert_eq!(serde_json::to_value(BringFrontClick::Disabled).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(BringFrontClick::Enabled).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(BringFrontClick::FloatingOnly).unwrap(),
            json!("floating_only")
        );
        let b: BringFrontClick = serde_json::from_str("true").unwrap();
        assert_eq!(b, BringFrontClick::Enabled);
        let b: BringFrontClick = serde_json::from_str(r#""floating_only""#).unwrap();
        assert_eq!(b, BringFrontClick::FloatingOnly);
        assert!(serde_json::from_str::<BringFrontClick>(r#""disabled""#).is_err());
    }

    #[test]
    fn input_rules_partial() {
        let rules: BTreeMap<String, InputRule> =
            serde_json::from_str(r#"{ "type:touchpad": { "tap": true } }"#).unwrap();
        let r = &rules["type:touchpad"];
        assert_eq!(r.tap, Some(true));
        assert!(r.natural_scroll.is_none());
    }
}
