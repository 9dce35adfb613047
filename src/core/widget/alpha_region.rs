//=========================================================================
// Alpha Region Widget
//=========================================================================
//
// Purely visual dimming overlay. Never hit-tested, never interactive.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::{GumpError, Result};

//=== AlphaRegion =========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaRegion {
    opacity: f32,
}

impl AlphaRegion {
    /// Creates a region, `opacity` must lie in `[0, 1]`.
    pub fn new(opacity: f32) -> Result<Self> {
        Ok(Self {
            opacity: validate_opacity(opacity)?,
        })
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) -> Result<()> {
        self.opacity = validate_opacity(opacity)?;
        Ok(())
    }
}

fn validate_opacity(opacity: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(GumpError::value("opacity", opacity))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_range_checked() {
        assert_eq!(AlphaRegion::new(0.9).unwrap().opacity(), 0.9);
        assert!(AlphaRegion::new(1.1).is_err());
        assert!(AlphaRegion::new(f32::NAN).is_err());

        let mut region = AlphaRegion::new(0.5).unwrap();
        assert!(region.set_opacity(-0.2).is_err());
        assert_eq!(region.opacity(), 0.5);
    }
}
