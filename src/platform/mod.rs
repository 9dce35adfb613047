//=========================================================================
// Platform Subsystem
//
// Bridges Winit window events to gump pointer events.
//
// Architecture:
// ```text
//  Winit WindowEvent
//   ↓ map_window_event()
//  RawPointerInput (window pixels, primary button only)
//   ↓ PointerRouter::route()  ── Gump::hit_test()
//  [PointerEvent]
//   ↓ HostEvent::Pointer(batch) over the runtime channel
//  EventDispatcher
// ```
//
// Owning the window and event loop stays with the host application.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod pointer_router;

//=== Public API ==========================================================

pub use event_mapper::{map_button, map_window_event, RawPointerInput};
pub use pointer_router::PointerRouter;
