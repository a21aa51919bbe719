//! Theme for rendering classified spans.
//!
//! Provides YAML-based theming with a compile-time embedded default. The
//! theme is the thin styling layer: it maps each [`SpanRole`] to the
//! presentation attributes (font style, weight, color) a rendering layer
//! applies to the spans produced by [`classify`].
//!
//! [`classify`]: crate::style::classify

use serde::Deserialize;

use crate::style::SpanRole;

/// Embedded default theme, reproducing the standard note styling: plain
/// body text, secondary subheadline prescriptions, semibold title3 headers,
/// and medium-weight accent labels at 0.65 alpha.
pub const DEFAULT_THEME_YAML: &str = include_str!("../themes/default.yaml");

/// Relative font style, resolved to a concrete font by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Body,
    Subheadline,
    Title3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
}

/// RGBA color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
struct ThemeData {
    #[allow(dead_code)]
    version: u32,
    name: String,
    #[serde(default)]
    #[allow(dead_code)]
    description: Option<String>,
    roles: RolesData,
}

#[derive(Debug, Clone, Deserialize)]
struct RolesData {
    body: RoleStyleData,
    prescription: RoleStyleData,
    header: RoleStyleData,
    label: RoleStyleData,
}

/// Per-role attributes (raw color string from YAML)
#[derive(Debug, Clone, Deserialize)]
struct RoleStyleData {
    font: FontStyle,
    weight: FontWeight,
    color: String,
}

/// Presentation attributes for one span role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: FontStyle,
    pub weight: FontWeight,
    pub color: Color,
}

/// Resolved theme with parsed colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub body: TextStyle,
    pub prescription: TextStyle,
    pub header: TextStyle,
    pub label: TextStyle,
}

impl Theme {
    /// Parse and resolve a theme from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Theme, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Ok(Theme {
            name: data.name,
            body: resolve(&data.roles.body)?,
            prescription: resolve(&data.roles.prescription)?,
            header: resolve(&data.roles.header)?,
            label: resolve(&data.roles.label)?,
        })
    }

    /// The presentation attributes for a span role.
    pub fn style_for(&self, role: SpanRole) -> TextStyle {
        match role {
            SpanRole::Body => self.body,
            SpanRole::Prescription => self.prescription,
            SpanRole::Header => self.header,
            SpanRole::Label => self.label,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_yaml(DEFAULT_THEME_YAML).expect("embedded default theme parses")
    }
}

fn resolve(data: &RoleStyleData) -> Result<TextStyle, String> {
    Ok(TextStyle {
        font: data.font,
        weight: data.weight,
        color: Color::from_hex(&data.color)?,
    })
}
