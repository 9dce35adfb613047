//=========================================================================
// Event Dispatch
//=========================================================================
//
// Routes host pointer events to button state machines and callbacks.
//
// Flow:
//   host thread ──HostEvent──> EventCollector ──PointerEvent──> EventDispatcher
//                 (crossbeam)                                       │
//                                            Button state / ClickCallback
//
// Everything right of the channel runs on the thread owning the gump.
//
//=========================================================================

//=== Module Declarations =================================================

mod dispatcher;
pub(crate) mod event_collector;
mod host;
mod pointer;

//=== Public API ==========================================================

pub use dispatcher::{ClickContext, DispatchOutcome, EventDispatcher};
pub use event_collector::TickControl;
pub use host::HostEvent;
pub use pointer::{PointerEvent, PointerEventKind};

pub(crate) use event_collector::EventCollector;
