//=========================================================================
// Frame Building
//=========================================================================
//
// Read-only traversal of a gump for the renderer.
//
// Pipeline:
//   Gump ──render_order()──> [WidgetId] ──resolve──> [DrawCommand]
//                                           ├─ TextureResolver (sizes)
//                                           └─ Localizer (label text)
//
// Draw commands are owned values; the renderer may keep them after the
// gump has been mutated again by a callback.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::localization::Localizer;
use crate::core::style::Styling;
use crate::core::texture::{TextureRef, TextureResolver};
use crate::core::widget::{ButtonState, Font, Geometry, HAlign, Rect, Widget, WidgetId, WidgetKind};

//=== DrawPrimitive =======================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Background {
        z_order: u32,
    },
    Image {
        texture: TextureRef,
        offset: (i32, i32),
        tiled: bool,
    },
    Label {
        text: String,
        halign: HAlign,
    },
    Button {
        texture: TextureRef,
        state: ButtonState,
        text: String,
        font: Option<Font>,
        font_styling: Styling,
    },
    AlphaRegion {
        opacity: f32,
    },
}

//=== DrawCommand =========================================================

/// One widget, fully resolved for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub widget: WidgetId,
    /// Absolute screen rect (gump origin applied).
    pub rect: Rect,
    /// Size is provisional; the renderer grows the widget once it knows better.
    pub auto_resize: bool,
    /// Styling in effect, button state overlays already applied.
    pub styling: Styling,
    pub primitive: DrawPrimitive,
}

//--- resolve_rect() ------------------------------------------------------
//
// Relative rect of a widget. Point-only geometry takes the natural size of
// the widget's texture; unknown sizes become 1x1 (textured) or 0x0 (text)
// and are flagged for auto resize.
//
pub(crate) fn resolve_rect(widget: &Widget, textures: &dyn TextureResolver) -> (Rect, bool) {
    let (x, y) = match widget.geometry() {
        Geometry::Rect(rect) => return (rect, false),
        Geometry::Point { x, y } => (x, y),
    };

    let texture = match widget.kind() {
        WidgetKind::Image(image) => Some(image.texture()),
        WidgetKind::Button(button) => Some(button.texture_for(button.state())),
        _ => None,
    };

    match texture {
        Some(texture) => match textures.natural_size(texture) {
            Some((width, height)) => (Rect::new(x, y, width, height), false),
            None => (Rect::new(x, y, 1, 1), true),
        },
        None => (Rect::new(x, y, 0, 0), true),
    }
}

//--- effective_styling() -------------------------------------------------
//
// Widget styling, replaced by the button overlay of the current state when
// that overlay carries a color or alpha.
//
pub(crate) fn effective_styling(widget: &Widget) -> Styling {
    if let WidgetKind::Button(button) = widget.kind() {
        let overlay = button.state_style(button.state()).styling;
        if !overlay.is_unset() {
            return overlay;
        }
    }
    *widget.styling()
}

pub(crate) fn draw_command(
    widget: &Widget,
    origin: (i32, i32),
    textures: &dyn TextureResolver,
    localizer: &dyn Localizer,
) -> DrawCommand {
    let (rect, auto_resize) = resolve_rect(widget, textures);

    let primitive = match widget.kind() {
        WidgetKind::Background(bg) => DrawPrimitive::Background {
            z_order: bg.z_order(),
        },
        WidgetKind::Image(image) => DrawPrimitive::Image {
            texture: image.texture().clone(),
            offset: image.offset(),
            // Point-only images take their texture size, so there is nothing to tile.
            tiled: image.is_tiled() && widget.geometry().rect().is_some(),
        },
        WidgetKind::Label(label) => DrawPrimitive::Label {
            text: label.text().resolve(localizer),
            halign: label.halign(),
        },
        WidgetKind::Button(button) => DrawPrimitive::Button {
            texture: button.texture_for(button.state()).clone(),
            state: button.state(),
            text: button.text().to_owned(),
            font: button.font().cloned(),
            font_styling: button.font_styling_for(button.state()),
        },
        WidgetKind::AlphaRegion(region) => DrawPrimitive::AlphaRegion {
            opacity: region.opacity(),
        },
    };

    DrawCommand {
        widget: widget.id(),
        rect: rect.translated(origin.0, origin.1),
        auto_resize,
        styling: effective_styling(widget),
        primitive,
    }
}
