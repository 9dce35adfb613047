//=========================================================================
// Widget System
//=========================================================================
//
// Positioned, styled nodes owned by a gump.
//
// Architecture:
//   Widget
//     ├─ id: WidgetId ──> owning GumpId (non-owning back-reference)
//     ├─ geometry, page, styling, name
//     └─ kind: WidgetKind
//          ├─ Background
//          ├─ Image
//          ├─ Label
//          ├─ Button
//          └─ AlphaRegion
//
// Widgets are created only through `Gump` factory methods and live exactly
// as long as their gump.
//
//=========================================================================

//=== Module Declarations =================================================

mod alpha_region;
mod background;
mod button;
mod geometry;
mod image;
mod label;

//=== Public API ==========================================================

pub use alpha_region::AlphaRegion;
pub use background::Background;
pub use button::{Button, ButtonState, ClickCallback, Font, StateStyle};
pub use geometry::{Geometry, Rect};
pub use image::Image;
pub use label::{HAlign, Label, LabelText};

//=== Internal Dependencies ===============================================

use crate::core::error::{GumpError, Result};
use crate::core::style::{ColorValue, Rgba, Styling};

//=== Identifiers =========================================================

/// Process-unique gump identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GumpId(pub(crate) u64);

/// Handle to a widget: owning gump plus insertion index.
///
/// Cheap to copy; resolving it against another gump fails with
/// [`GumpError::ForeignWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    pub(crate) gump: GumpId,
    pub(crate) index: usize,
}

impl WidgetId {
    pub fn gump(&self) -> GumpId {
        self.gump
    }

    /// Insertion position inside the owning gump.
    pub fn index(&self) -> usize {
        self.index
    }
}

//=== WidgetKind ==========================================================

#[derive(Debug)]
pub enum WidgetKind {
    Background(Background),
    Image(Image),
    Label(Label),
    Button(Button),
    AlphaRegion(AlphaRegion),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background(_) => "background",
            Self::Image(_) => "image",
            Self::Label(_) => "label",
            Self::Button(_) => "button",
            Self::AlphaRegion(_) => "alpha region",
        }
    }
}

//=== Widget ==============================================================

#[derive(Debug)]
pub struct Widget {
    id: WidgetId,
    name: Option<String>,
    geometry: Geometry,
    page: u32,
    styling: Styling,
    kind: WidgetKind,
}

macro_rules! typed_access {
    ($as_ref:ident, $as_mut:ident, $variant:ident, $ty:ty, $label:literal) => {
        pub fn $as_ref(&self) -> Result<&$ty> {
            match &self.kind {
                WidgetKind::$variant(inner) => Ok(inner),
                other => Err(GumpError::WrongWidgetKind {
                    expected: $label,
                    found: other.name(),
                }),
            }
        }

        pub fn $as_mut(&mut self) -> Result<&mut $ty> {
            match &mut self.kind {
                WidgetKind::$variant(inner) => Ok(inner),
                other => Err(GumpError::WrongWidgetKind {
                    expected: $label,
                    found: other.name(),
                }),
            }
        }
    };
}

impl Widget {
    pub(crate) fn new(id: WidgetId, geometry: Geometry, page: u32, kind: WidgetKind) -> Self {
        Self {
            id,
            name: None,
            geometry,
            page,
            styling: Styling::new(),
            kind,
        }
    }

    //--- Identity ---------------------------------------------------------

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The gump this widget belongs to.
    pub fn owning_gump(&self) -> GumpId {
        self.id.gump
    }

    /// Component name, set through [`Gump::set_name`](crate::core::gump::Gump::set_name).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name_unchecked(&mut self, name: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.name, name)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    //--- Geometry ---------------------------------------------------------

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: impl Into<Geometry>) {
        self.geometry = geometry.into();
    }

    /// Moves the widget, keeping its size.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.geometry = self.geometry.moved_to(x, y);
    }

    //--- Styling ----------------------------------------------------------

    pub fn styling(&self) -> &Styling {
        &self.styling
    }

    pub fn styling_mut(&mut self) -> &mut Styling {
        &mut self.styling
    }

    pub fn set_rgba(&mut self, rgba: Rgba) {
        self.styling.set_rgba(rgba);
    }

    pub fn set_hue(&mut self, hue: u32) -> Result<()> {
        self.styling.set_hue(hue)
    }

    pub fn set_alpha(&mut self, alpha: f32) -> Result<()> {
        self.styling.set_alpha(alpha)
    }

    pub fn set_color(&mut self, color: ColorValue) -> Result<()> {
        self.styling.set_color(color)
    }

    //--- Subtypes ---------------------------------------------------------

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, WidgetKind::Button(_))
    }

    typed_access!(as_background, as_background_mut, Background, Background, "background");
    typed_access!(as_image, as_image_mut, Image, Image, "image");
    typed_access!(as_label, as_label_mut, Label, Label, "label");
    typed_access!(as_button, as_button_mut, Button, Button, "button");
    typed_access!(as_alpha_region, as_alpha_region_mut, AlphaRegion, AlphaRegion, "alpha region");
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::ColorMode;
    use crate::core::texture::TextureRef;

    fn image_widget() -> Widget {
        let id = WidgetId { gump: GumpId(1), index: 0 };
        Widget::new(
            id,
            Geometry::from((0, 0, 100, 100)),
            0,
            WidgetKind::Image(Image::new(TextureRef::gump_art(13))),
        )
    }

    #[test]
    fn back_reference_names_owning_gump() {
        let w = image_widget();
        assert_eq!(w.owning_gump(), GumpId(1));
        assert_eq!(w.id().index(), 0);
    }

    #[test]
    fn typed_access_checks_kind() {
        let mut w = image_widget();
        assert!(w.as_image_mut().is_ok());
        let err = w.as_button().unwrap_err();
        assert!(matches!(
            err,
            GumpError::WrongWidgetKind { expected: "button", found: "image" }
        ));
    }

    #[test]
    fn color_setters_follow_mode_rules() {
        let mut w = image_widget();
        w.set_rgba(Rgba::rgb(1.0, 0.0, 0.0).unwrap());
        w.set_hue(5).unwrap();
        assert_eq!(w.styling().mode(), ColorMode::Hue);
    }

    #[test]
    fn set_position_keeps_size() {
        let mut w = image_widget();
        w.set_position(30, 30);
        assert_eq!(w.geometry(), Geometry::from((30, 30, 100, 100)));
    }
}
