//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_gump::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::runtime::{GumpRuntime, GumpRuntimeBuilder};

// Scene
pub use crate::core::gump::{ComponentStore, DrawCommand, DrawPrimitive, Gump};
pub use crate::core::error::GumpError;

// Widgets
pub use crate::core::widget::{
    ButtonState, Geometry, HAlign, LabelText, Rect, Widget, WidgetId, WidgetKind,
};

// Styling, textures, localization
pub use crate::core::localization::{ClilocTable, LocalizedString, Localizer, NoLocalizer};
pub use crate::core::style::{ColorValue, Rgba};
pub use crate::core::texture::{TextureRef, TextureResolver, UnresolvedTextures};

// Dispatch
pub use crate::core::dispatch::{ClickContext, DispatchOutcome, EventDispatcher, HostEvent, PointerEvent, TickControl};

// Platform
pub use crate::platform::{PointerRouter, RawPointerInput};
