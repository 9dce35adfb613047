//=========================================================================
// Style System
//=========================================================================
//
// Color representations shared by every widget.
//
//   ColorValue  : Rgba | Hue
//   Styling     : authoritative ColorValue + pending alpha
//
//=========================================================================

//=== Module Declarations =================================================

mod color;
mod styling;

//=== Public API ==========================================================

pub use color::{ColorValue, Rgba, MAX_HUE};
pub use styling::{ColorMode, Styling};
