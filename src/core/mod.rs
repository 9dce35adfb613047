//=========================================================================
// Gump Core
//
// Scene graph for in-game windows, independent of any windowing backend.
//
// Layers (bottom-up):
// - `error`       : `GumpError` and the crate `Result`
// - `style`       : colors (RGBA or hue) and per-widget styling
// - `texture`     : texture references and the renderer's size lookup
// - `localization`: cliloc ids and the string table boundary
// - `widget`      : widgets, geometry and typed subtypes
// - `gump`        : the scene: storage, names, store, pages, frames
// - `dispatch`    : pointer events, button state machine, host channel
//
//=========================================================================

pub mod dispatch;
pub mod error;
pub mod gump;
pub mod localization;
pub mod style;
pub mod texture;
pub mod widget;

//=== Re-exports ==========================================================

pub use error::{GumpError, Result};
pub use gump::Gump;
