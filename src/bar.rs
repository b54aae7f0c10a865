//! Status bar, widgets and screens.
//!
//! Widgets here are descriptors only.  Data collection (battery level,
//! mixer volume, memory, network counters) and rendering are done by the
//! host at each widget's update interval; thresholds such as the battery
//! low percentage are passed through untouched.

use crate::palette::{HexColor, Palette};
use serde::{Deserialize, Serialize};

/// Font settings applied to every widget unless it overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "MesloLGSDZ Nerd Font Mono style = Bold".into(),
            fontsize: 17,
            padding: 3,
        }
    }
}

/// How the group indicator highlights the current group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMethod {
    Border,
    Block,
    Text,
    Line,
}

/// One widget in a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    /// A static label or icon.
    TextBox {
        text: String,
        padding: Option<u32>,
        fontsize: Option<u32>,
        foreground: Option<HexColor>,
    },
    /// The group indicator.
    GroupBox {
        highlight_method: HighlightMethod,
        block_highlight_text_color: HexColor,
        borderwidth: u32,
        /// Groups that hold windows.
        active: HexColor,
        /// Empty groups.
        inactive: HexColor,
        this_current_screen_border: HexColor,
        highlight_color: HexColor,
    },
    /// Title of the focused window.
    WindowName {
        fontsize: Option<u32>,
        foreground: Option<HexColor>,
    },
    Systray,
    Battery {
        format: String,
        foreground: HexColor,
        charge_char: String,
        full_char: String,
        discharge_char: String,
        unknown_char: String,
        empty_char: String,
        low_foreground: HexColor,
        /// Fraction in `[0, 1]` below which `low_foreground` is used.
        low_percentage: f64,
        update_interval: f64,
    },
    Volume {
        fmt: String,
        foreground: HexColor,
        /// Seconds between polls; `0` means refresh only on mixer events.
        update_interval: f64,
    },
    Memory {
        format: String,
        foreground: HexColor,
    },
    Net {
        format: String,
        foreground: HexColor,
    },
    /// `format` uses strftime directives.
    Clock {
        format: String,
        foreground: HexColor,
    },
    CurrentLayoutIcon {
        scale: f64,
    },
}

impl Widget {
    /// A short kind name, stable across configurations.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::TextBox { .. } => "textbox",
            Widget::GroupBox { .. } => "groupbox",
            Widget::WindowName { .. } => "windowname",
            Widget::Systray => "systray",
            Widget::Battery { .. } => "battery",
            Widget::Volume { .. } => "volume",
            Widget::Memory { .. } => "memory",
            Widget::Net { .. } => "net",
            Widget::Clock { .. } => "clock",
            Widget::CurrentLayoutIcon { .. } => "currentlayouticon",
        }
    }

    /// Seconds between refreshes, for widgets that declare one.
    pub fn update_interval(&self) -> Option<f64> {
        match self {
            Widget::Battery { update_interval, .. } | Widget::Volume { update_interval, .. } => {
                Some(*update_interval)
            }
            _ => None,
        }
    }

    /// Text color, for widgets that accept one.
    pub fn foreground(&self) -> Option<&HexColor> {
        match self {
            Widget::TextBox { foreground, .. } | Widget::WindowName { foreground, .. } => {
                foreground.as_ref()
            }
            Widget::Battery { foreground, .. }
            | Widget::Volume { foreground, .. }
            | Widget::Memory { foreground, .. }
            | Widget::Net { foreground, .. }
            | Widget::Clock { foreground, .. } => Some(foreground),
            Widget::GroupBox { .. } | Widget::Systray | Widget::CurrentLayoutIcon { .. } => None,
        }
    }
}

/// An ordered widget row with a fixed height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    pub background: HexColor,
}

impl Bar {
    /// Number of widgets of the given [`kind`](Widget::kind).
    pub fn count(&self, kind: &str) -> usize {
        self.widgets.iter().filter(|w| w.kind() == kind).count()
    }
}

/// A display output slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Bar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Bar>,
}

impl Screen {
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }
}

fn label(text: &str, palette: &Palette) -> Widget {
    Widget::TextBox {
        text: text.into(),
        padding: Some(0),
        fontsize: Some(35),
        foreground: Some(palette.color("gray")),
    }
}

/// The bottom bar: launcher icon, groups, separator, window title, tray,
/// then the meters and clocks, with the layout icon last.
pub fn default_bar(palette: &Palette) -> Bar {
    let white = palette.color("white");
    let battery_char = "🔋".to_string();
    let widgets = vec![
        label("🚀", palette),
        Widget::GroupBox {
            highlight_method: HighlightMethod::Line,
            block_highlight_text_color: palette.color("black"),
            borderwidth: 4,
            active: palette.color("gray"),
            inactive: palette.color("black"),
            this_current_screen_border: palette.color("gray"),
            highlight_color: palette.color("white"),
        },
        label("|", palette),
        Widget::WindowName {
            fontsize: Some(13),
            foreground: Some(white.clone()),
        },
        Widget::Systray,
        Widget::Battery {
            format: "{char}{percent:2.0%}".into(),
            foreground: white.clone(),
            charge_char: battery_char.clone(),
            full_char: battery_char.clone(),
            discharge_char: battery_char.clone(),
            unknown_char: battery_char,
            empty_char: "🪫".into(),
            low_foreground: palette.color("red"),
            low_percentage: 0.25,
            update_interval: 30.0,
        },
        Widget::Volume {
            fmt: " 📢{}".into(),
            foreground: white.clone(),
            update_interval: 0.0,
        },
        Widget::Memory {
            format: " 💾{MemUsed:.0f}{mm}/{MemTotal:.0f}{mm}".into(),
            foreground: white.clone(),
        },
        Widget::Net {
            format: " 🔺{up}🔻{down}".into(),
            foreground: white.clone(),
        },
        Widget::Clock {
            format: " 📅%a,%d %b %y".into(),
            foreground: white.clone(),
        },
        Widget::Clock {
            format: " ⏳%H:%M".into(),
            foreground: white,
        },
        Widget::CurrentLayoutIcon { scale: 0.8 },
    ];
    Bar {
        widgets,
        size: 30,
        background: HexColor::trusted("#242222"),
    }
}

/// One screen with the default bar at the bottom.
pub fn default_screens(palette: &Palette) -> Vec<Screen> {
    vec![Screen {
        top: None,
        bottom: Some(default_bar(palette)),
    }]
}
