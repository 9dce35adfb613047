//=========================================================================
// Background Widget
//=========================================================================

/// Framed background drawn from engine art.
///
/// `z_order` is an opaque layering hint handed to the renderer. Among
/// backgrounds the render traversal orders by it; the gump storage itself
/// is never re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    z_order: u32,
}

impl Background {
    pub fn new(z_order: u32) -> Self {
        Self { z_order }
    }

    pub fn z_order(&self) -> u32 {
        self.z_order
    }

    pub fn set_z_order(&mut self, z_order: u32) {
        self.z_order = z_order;
    }
}
