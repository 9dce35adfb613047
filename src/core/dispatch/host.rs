//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Messages sent from the host's input thread to the thread owning a gump.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::pointer::PointerEvent;

//=== HostEvent ===========================================================

/// Events crossing from the host into a gump runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Batched pointer events, dispatched in order.
    Pointer(Vec<PointerEvent>),

    /// The host discarded the gump window.
    Close,
}
