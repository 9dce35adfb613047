//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Maps (hit widget, pointer event kind) to button state transitions and
// click callbacks.
//
// Click rule:
//   Press(A) … Release(A)  → A's callback runs once
//   Press(A) … Release(B)  → nothing runs, A returns to Normal
//   Press(A) … Cancel(A)   → nothing runs, capture is dropped
//
// Callbacks run synchronously and to completion before the next event is
// dispatched. Their mutations are visible to the next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::pointer::{PointerEvent, PointerEventKind};
use crate::core::error::{GumpError, Result};
use crate::core::gump::Gump;
use crate::core::widget::{ButtonState, Widget, WidgetId};

//=== ClickContext ========================================================

/// Argument of a click callback: the clicked button and its gump.
pub struct ClickContext<'a> {
    gump: &'a mut Gump,
    button: WidgetId,
}

impl<'a> ClickContext<'a> {
    pub(crate) fn new(gump: &'a mut Gump, button: WidgetId) -> Self {
        Self { gump, button }
    }

    pub fn button_id(&self) -> WidgetId {
        self.button
    }

    pub fn button(&self) -> Result<&Widget> {
        self.gump.widget(self.button)
    }

    pub fn button_mut(&mut self) -> Result<&mut Widget> {
        self.gump.widget_mut(self.button)
    }

    pub fn gump(&self) -> &Gump {
        &*self.gump
    }

    pub fn gump_mut(&mut self) -> &mut Gump {
        &mut *self.gump
    }
}

//=== DispatchOutcome =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event touched no button.
    Ignored,

    /// A button changed (or kept) its visual state.
    StateChanged { widget: WidgetId, state: ButtonState },

    /// A button completed a click; its callback, if any, has run.
    /// `server_button` is the id the host forwards to the server.
    Clicked { widget: WidgetId, server_button: Option<u32> },
}

//=== EventDispatcher =====================================================

/// Pointer capture and hover tracking for one gump.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    pressed: Option<WidgetId>,
    hovered: Option<WidgetId>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget that received the last unreleased press.
    pub fn pressed(&self) -> Option<WidgetId> {
        self.pressed
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    /// Forgets capture and hover state, e.g. after the gump was replaced.
    pub fn reset(&mut self) {
        self.pressed = None;
        self.hovered = None;
    }

    //--- dispatch() -------------------------------------------------------
    //
    // Applies one event. Unknown or foreign widgets fail without touching
    // any state. Callback errors propagate after the callback was put back.
    //
    pub fn dispatch(&mut self, gump: &mut Gump, event: PointerEvent) -> Result<DispatchOutcome> {
        let target = event.widget;
        let is_button = gump.widget(target)?.is_interactive();

        match event.kind {
            PointerEventKind::Enter => {
                self.hovered = Some(target);
                if !is_button {
                    return Ok(DispatchOutcome::Ignored);
                }
                let state = if self.pressed == Some(target) {
                    ButtonState::MouseDown
                } else {
                    ButtonState::MouseOver
                };
                set_state(gump, target, state)
            }

            PointerEventKind::Leave => {
                if self.hovered == Some(target) {
                    self.hovered = None;
                }
                if !is_button {
                    return Ok(DispatchOutcome::Ignored);
                }
                set_state(gump, target, ButtonState::Normal)
            }

            PointerEventKind::Press => {
                self.pressed = Some(target);
                if !is_button {
                    return Ok(DispatchOutcome::Ignored);
                }
                set_state(gump, target, ButtonState::MouseDown)
            }

            PointerEventKind::Cancel => {
                if self.pressed != Some(target) {
                    return Ok(DispatchOutcome::Ignored);
                }
                self.pressed = None;
                if !is_button {
                    return Ok(DispatchOutcome::Ignored);
                }
                let state = if self.hovered == Some(target) {
                    ButtonState::MouseOver
                } else {
                    ButtonState::Normal
                };
                set_state(gump, target, state)
            }

            PointerEventKind::Release => {
                let origin = self.pressed.take();

                if let Some(origin) = origin.filter(|o| *o != target) {
                    let origin_is_button = gump
                        .widget(origin)
                        .map(Widget::is_interactive)
                        .unwrap_or(false);
                    if origin_is_button {
                        set_state(gump, origin, ButtonState::Normal)?;
                    }
                }

                if !is_button {
                    return Ok(DispatchOutcome::Ignored);
                }

                set_state(gump, target, ButtonState::MouseOver)?;

                if origin == Some(target) {
                    self.click(gump, target)
                } else {
                    Ok(DispatchOutcome::StateChanged {
                        widget: target,
                        state: ButtonState::MouseOver,
                    })
                }
            }
        }
    }

    fn click(&mut self, gump: &mut Gump, target: WidgetId) -> Result<DispatchOutcome> {
        debug!("Click on {:?}", target);

        let callback = gump.widget_mut(target)?.as_button_mut()?.take_callback();

        if let Some(mut callback) = callback {
            let result = {
                let mut context = ClickContext::new(gump, target);
                callback(&mut context)
            };
            gump.restore_callback(target, callback);
            result.map_err(|source| GumpError::Callback {
                widget: target,
                source,
            })?;
        }

        let button = gump.widget(target)?.as_button()?;
        let (page_target, server_button) = (button.page_target(), button.server_button());

        // The callback already ran, so a missing page does not fail the click.
        if let Some(page) = page_target {
            if let Err(e) = gump.activate_page(page) {
                warn!("Button {:?} targets a missing page: {}", target, e);
            }
        }

        Ok(DispatchOutcome::Clicked {
            widget: target,
            server_button,
        })
    }
}

fn set_state(gump: &mut Gump, widget: WidgetId, state: ButtonState) -> Result<DispatchOutcome> {
    let button = gump.widget_mut(widget)?.as_button_mut()?;
    if button.state() != state {
        debug!("Button {:?}: {:?} → {:?}", widget, button.state(), state);
        button.set_state(state);
    }
    Ok(DispatchOutcome::StateChanged { widget, state })
}

//=========================================================================
// Unit Tests
//=========================================================================
