//=========================================================================
// Widget Styling
//=========================================================================
//
// Color state attached to a widget (or to one button state overlay).
//
// State machine:
//   Default ──set_rgba()──> Rgba ──set_hue()──> Hue
//      └────────set_hue()─────────────┘ ↖──set_rgba()──┘
//
// set_alpha() writes the RGBA alpha channel, or is kept pending while the
// styling is not in RGBA mode.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::color::{unit_channel, validate_hue, ColorValue, Rgba};
use crate::core::error::Result;

//=== ColorMode ===========================================================

/// Which color representation is currently authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// No color override, the texture is drawn as is.
    #[default]
    Default,
    Rgba,
    Hue,
}

//=== Styling =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Styling {
    color: Option<ColorValue>,
    pending_alpha: Option<f32>,
}

impl Styling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ColorMode {
        match self.color {
            None => ColorMode::Default,
            Some(ColorValue::Rgba(_)) => ColorMode::Rgba,
            Some(ColorValue::Hue(_)) => ColorMode::Hue,
        }
    }

    /// Current color, `None` in default mode.
    pub fn color(&self) -> Option<ColorValue> {
        self.color
    }

    pub fn rgba(&self) -> Option<Rgba> {
        self.color.and_then(|c| c.to_rgba())
    }

    pub fn hue(&self) -> Option<u32> {
        self.color.and_then(|c| c.as_hue())
    }

    /// Sets an explicit color, clearing any hue override.
    pub fn set_rgba(&mut self, rgba: Rgba) {
        self.color = Some(ColorValue::Rgba(rgba));
        self.pending_alpha = None;
    }

    /// Sets a hue override, clearing any explicit color.
    ///
    /// The alpha of the replaced color is kept pending.
    pub fn set_hue(&mut self, hue: u32) -> Result<()> {
        let hue = validate_hue(hue)?;
        if let Some(rgba) = self.rgba() {
            self.pending_alpha = Some(rgba.a);
        }
        self.color = Some(ColorValue::Hue(hue));
        Ok(())
    }

    /// Applies a [`ColorValue`] through the matching setter.
    pub fn set_color(&mut self, color: ColorValue) -> Result<()> {
        match color {
            ColorValue::Rgba(rgba) => {
                self.set_rgba(rgba);
                Ok(())
            }
            ColorValue::Hue(hue) => self.set_hue(hue),
        }
    }

    /// Mutates only the alpha channel of the current color.
    pub fn set_alpha(&mut self, alpha: f32) -> Result<()> {
        let alpha = unit_channel("alpha", alpha)?;
        match &mut self.color {
            Some(ColorValue::Rgba(rgba)) => rgba.a = alpha,
            _ => self.pending_alpha = Some(alpha),
        }
        Ok(())
    }

    /// Alpha the renderer should apply.
    pub fn alpha(&self) -> f32 {
        match self.rgba() {
            Some(rgba) => rgba.a,
            None => self.pending_alpha.unwrap_or(1.0),
        }
    }

    /// Returns `true` if no color or alpha was ever set.
    pub fn is_unset(&self) -> bool {
        self.color.is_none() && self.pending_alpha.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GumpError;

    fn red() -> Rgba {
        Rgba::rgb(1.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn starts_in_default_mode() {
        let s = Styling::new();
        assert_eq!(s.mode(), ColorMode::Default);
        assert_eq!(s.alpha(), 1.0);
        assert!(s.is_unset());
    }

    #[test]
    fn hue_after_rgba_clears_rgba() {
        let mut s = Styling::new();
        s.set_rgba(red());
        s.set_hue(5).unwrap();
        assert_eq!(s.mode(), ColorMode::Hue);
        assert_eq!(s.rgba(), None);
        assert_eq!(s.hue(), Some(5));
    }

    #[test]
    fn rgba_after_hue_clears_hue() {
        let mut s = Styling::new();
        s.set_hue(13).unwrap();
        s.set_rgba(red());
        assert_eq!(s.mode(), ColorMode::Rgba);
        assert_eq!(s.hue(), None);
    }

    #[test]
    fn alpha_mutates_only_rgba_alpha() {
        let mut s = Styling::new();
        s.set_rgba(Rgba::rgb(0.8, 0.2, 0.0).unwrap());
        s.set_alpha(0.6).unwrap();
        let rgba = s.rgba().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0.8, 0.2, 0.0, 0.6));
    }

    #[test]
    fn alpha_in_hue_mode_is_pending() {
        let mut s = Styling::new();
        s.set_hue(2).unwrap();
        s.set_alpha(0.4).unwrap();
        assert_eq!(s.mode(), ColorMode::Hue);
        assert_eq!(s.alpha(), 0.4);
    }

    #[test]
    fn switching_to_hue_keeps_alpha() {
        let mut s = Styling::new();
        s.set_rgba(Rgba::rgb(0.8, 0.2, 0.0).unwrap());
        s.set_alpha(0.6).unwrap();
        s.set_hue(2).unwrap();
        assert_eq!(s.alpha(), 0.6);
    }

    #[test]
    fn explicit_rgba_drops_pending_alpha() {
        let mut s = Styling::new();
        s.set_alpha(0.3).unwrap();
        s.set_rgba(red());
        assert_eq!(s.alpha(), 1.0);
    }

    #[test]
    fn invalid_values_leave_styling_untouched() {
        let mut s = Styling::new();
        s.set_rgba(red());
        assert!(matches!(s.set_alpha(1.5), Err(GumpError::Value { .. })));
        assert!(matches!(s.set_hue(90_000), Err(GumpError::Value { .. })));
        assert_eq!(s.rgba(), Some(red()));
    }
}
