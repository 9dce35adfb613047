//=========================================================================
// Aetheric Gump: Library Root
//
// Retained-mode scene graph for in-game windows ("gumps").
//
// Responsibilities:
// - Expose the gump scene and widget model (`core`)
// - Translate Winit pointer input into widget events (`platform`)
// - Drive one gump from a host event channel (`GumpRuntime`)
//
// Typical usage:
// ```no_run
// use aetheric_gump::prelude::*;
//
// let mut gump = Gump::new(30, 30);
// gump.add_background((0, 0, 500, 500), 3000);
// let (mut runtime, host) = GumpRuntimeBuilder::new().build(gump);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene graph and dispatch logic.
// `platform` holds the Winit-facing input mapping.
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod runtime;

//--- Public Exports ------------------------------------------------------

pub use runtime::{GumpRuntime, GumpRuntimeBuilder};
