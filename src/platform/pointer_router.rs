//=========================================================================
// Pointer Router
//=========================================================================
//
// Hit-tests raw pointer input against a gump and emits targeted events.
//
// Architecture:
//   RawPointerInput → route() → Gump::hit_test() → [PointerEvent]
//
// Hover is tracked across calls so motion produces Leave/Enter pairs only
// when the widget under the cursor changes. A release over no widget
// cancels the pending press.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::event_mapper::RawPointerInput;
use crate::core::dispatch::PointerEvent;
use crate::core::gump::Gump;
use crate::core::texture::TextureResolver;
use crate::core::widget::WidgetId;

//=== PointerRouter =======================================================

#[derive(Debug, Default)]
pub struct PointerRouter {
    position: Option<(i32, i32)>,
    hovered: Option<WidgetId>,
    pressed: Option<WidgetId>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Converts one raw input into events for the dispatcher.
    pub fn route(
        &mut self,
        input: RawPointerInput,
        gump: &Gump,
        textures: &dyn TextureResolver,
    ) -> Vec<PointerEvent> {
        match input {
            RawPointerInput::Moved { x, y } => {
                self.position = Some((x, y));
                let hit = gump.hit_test(x, y, textures);
                self.hover(hit)
            }
            RawPointerInput::Pressed => {
                self.pressed = self.hovered;
                self.hovered.map(PointerEvent::press).into_iter().collect()
            }
            RawPointerInput::Released => {
                let pressed = self.pressed.take();
                match self.hovered {
                    Some(hovered) => vec![PointerEvent::release(hovered)],
                    None => pressed.map(PointerEvent::cancel).into_iter().collect(),
                }
            }
            RawPointerInput::Left => {
                self.position = None;
                self.hover(None)
            }
        }
    }

    /// Re-runs hit-testing at the last position, e.g. after a page switch.
    pub fn refresh(&mut self, gump: &Gump, textures: &dyn TextureResolver) -> Vec<PointerEvent> {
        let hit = self
            .position
            .and_then(|(x, y)| gump.hit_test(x, y, textures));
        self.hover(hit)
    }

    fn hover(&mut self, hit: Option<WidgetId>) -> Vec<PointerEvent> {
        if hit == self.hovered {
            return Vec::new();
        }

        trace!("Hover {:?} → {:?}", self.hovered, hit);

        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.hovered {
            events.push(PointerEvent::leave(old));
        }
        if let Some(new) = hit {
            events.push(PointerEvent::enter(new));
        }
        self.hovered = hit;
        events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
