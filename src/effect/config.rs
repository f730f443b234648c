use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Viewports narrower than this use [`EffectConfig::scale_mobile`].
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }

    /// CSS `rgba()` string, as accepted by canvas fill and stroke styles.
    pub fn rgba(&self, alpha: f64) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {alpha:.3})", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color must look like #rrggbb, got {0:?}")]
    Format(String),
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6)
            .ok_or_else(|| ColorError::Format(s.to_string()))?;
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorError::Format(s.to_string()))?;
        Ok(Rgb::from_hex(value))
    }
}

/// Static settings for the hero background. Fixed for the lifetime of a mount.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    pub color: Rgb,
    pub background_color: Rgb,
    pub min_width: f64,
    pub min_height: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    /// Lattice density. Higher values give more points per row.
    pub points: f64,
    pub max_distance: f64,
    pub spacing: f64,
    /// Peak displacement of a point around its anchor, in unscaled px.
    pub amplitude: f64,
    /// Oscillation speed in radians per second.
    pub speed: f64,
    pub show_dots: bool,
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(0xff3f81),
            background_color: Rgb::from_hex(0x23153c),
            min_width: 200.0,
            min_height: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            points: 10.0,
            max_distance: 20.0,
            spacing: 15.0,
            amplitude: 6.0,
            speed: 0.6,
            show_dots: true,
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
        }
    }
}

impl EffectConfig {
    /// Configuration used behind the hero section.
    pub fn hero() -> Self {
        Self {
            color: Rgb::from_hex(0x3f83f8),
            background_color: Rgb::from_hex(0x111827),
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            points: 12.0,
            max_distance: 22.0,
            spacing: 18.0,
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            ..Self::default()
        }
    }

    /// Scale factor for a viewport of the given width.
    pub fn scale_for(&self, viewport_width: f64) -> f64 {
        if viewport_width < MOBILE_BREAKPOINT {
            self.scale_mobile
        } else {
            self.scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_literal() {
        assert_eq!(Rgb::from_hex(0x111827), Rgb(0x11, 0x18, 0x27));
        assert_eq!(Rgb::from_hex(0x111827).to_string(), "#111827");
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#3f83f8".parse::<Rgb>(), Ok(Rgb(0x3f, 0x83, 0xf8)));
        assert_eq!("#FFFFFF".parse::<Rgb>(), Ok(Rgb(255, 255, 255)));
        assert!("3f83f8".parse::<Rgb>().is_err());
        assert!("#3f83f".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        let c = Rgb(1, 2, 3);
        assert_eq!(c.rgba(0.5), "rgba(1, 2, 3, 0.500)");
        assert_eq!(c.rgba(4.0), "rgba(1, 2, 3, 1.000)");
        assert_eq!(c.rgba(-1.0), "rgba(1, 2, 3, 0.000)");
    }

    #[test]
    fn test_hero_config() {
        let cfg = EffectConfig::hero();
        assert_eq!(cfg.color.to_string(), "#3f83f8");
        assert_eq!(cfg.background_color.to_string(), "#111827");
        assert!(cfg.mouse_controls && cfg.touch_controls);
        assert!(!cfg.gyro_controls);
        assert!(cfg.show_dots);
    }

    #[test]
    fn test_scale_for_viewport() {
        let cfg = EffectConfig {
            scale: 1.0,
            scale_mobile: 0.5,
            ..EffectConfig::default()
        };
        assert_eq!(cfg.scale_for(1280.0), 1.0);
        assert_eq!(cfg.scale_for(MOBILE_BREAKPOINT), 1.0);
        assert_eq!(cfg.scale_for(375.0), 0.5);
    }
}
