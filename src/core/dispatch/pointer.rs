//=========================================================================
// Pointer Events
//=========================================================================
//
// Input boundary: pointer events whose target widget has already been
// resolved by hit-testing (host side, or `platform::PointerRouter`).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::widget::WidgetId;

//=== PointerEventKind ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Enter,
    Leave,
    Press,
    Release,
    /// The press ended away from every widget; capture is dropped, no click.
    Cancel,
}

//=== PointerEvent ========================================================

/// Pointer event targeted at one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub widget: WidgetId,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub fn new(widget: WidgetId, kind: PointerEventKind) -> Self {
        Self { widget, kind }
    }

    pub fn enter(widget: WidgetId) -> Self {
        Self::new(widget, PointerEventKind::Enter)
    }

    pub fn leave(widget: WidgetId) -> Self {
        Self::new(widget, PointerEventKind::Leave)
    }

    pub fn press(widget: WidgetId) -> Self {
        Self::new(widget, PointerEventKind::Press)
    }

    pub fn release(widget: WidgetId) -> Self {
        Self::new(widget, PointerEventKind::Release)
    }

    pub fn cancel(widget: WidgetId) -> Self {
        Self::new(widget, PointerEventKind::Cancel)
    }
}
