//=========================================================================
// Button Widget
//=========================================================================
//
// Interactive widget with per-state style overlays and a click callback.
//
// States:
//   Normal ──enter──> MouseOver ──press──> MouseDown
//     ↑                  ↑ └─────leave──────┘ │
//     └──────leave───────┴──────release───────┘
//
// Transitions are applied by the `EventDispatcher`; the button only stores
// the current state so the renderer can pick the matching overlay.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::dispatch::ClickContext;
use crate::core::error::{CallbackError, GumpError, Result};
use crate::core::style::Styling;
use crate::core::texture::TextureRef;

//=== ClickCallback =======================================================

/// Caller-supplied click handler.
///
/// Runs synchronously on the gump's thread with access to the whole gump.
pub type ClickCallback = Box<dyn FnMut(&mut ClickContext<'_>) -> std::result::Result<(), CallbackError>>;

//=== ButtonState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    MouseOver,
    MouseDown,
}

impl ButtonState {
    const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::MouseOver => 1,
            Self::MouseDown => 2,
        }
    }
}

//=== StateStyle ==========================================================

/// Overlay applied while the button is in one state.
///
/// Unset stylings fall back to the widget styling (body) or to the normal
/// overlay (font).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateStyle {
    pub styling: Styling,
    pub font_styling: Styling,
    pub texture: Option<TextureRef>,
}

//=== CallbackSlot ========================================================
//
// `InFlight` marks a callback taken out for dispatch. Clearing during the
// call records `Cleared` so the restore does not undo it.
//
enum CallbackSlot {
    Empty,
    Set(ClickCallback),
    InFlight,
    Cleared,
}

//=== Font ================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub name: String,
    pub size: u32,
}

//=== Button ==============================================================

pub struct Button {
    texture: TextureRef,
    state: ButtonState,
    overlays: [StateStyle; 3],
    text: String,
    font: Option<Font>,
    page_target: Option<u32>,
    server_button: Option<u32>,
    callback: CallbackSlot,
}

impl Button {
    pub fn new(texture: TextureRef) -> Self {
        Self {
            texture,
            state: ButtonState::Normal,
            overlays: Default::default(),
            text: String::new(),
            font: None,
            page_target: None,
            server_button: None,
            callback: CallbackSlot::Empty,
        }
    }

    //--- Appearance -------------------------------------------------------

    pub fn texture(&self) -> &TextureRef {
        &self.texture
    }

    pub fn set_texture(&mut self, texture: TextureRef) {
        self.texture = texture;
    }

    /// Texture drawn in `state`, honoring the overlay override.
    pub fn texture_for(&self, state: ButtonState) -> &TextureRef {
        self.overlays[state.index()]
            .texture
            .as_ref()
            .unwrap_or(&self.texture)
    }

    pub fn state_style(&self, state: ButtonState) -> &StateStyle {
        &self.overlays[state.index()]
    }

    pub fn state_style_mut(&mut self, state: ButtonState) -> &mut StateStyle {
        &mut self.overlays[state.index()]
    }

    pub fn normal_mut(&mut self) -> &mut StateStyle {
        self.state_style_mut(ButtonState::Normal)
    }

    pub fn mouseover_mut(&mut self) -> &mut StateStyle {
        self.state_style_mut(ButtonState::MouseOver)
    }

    pub fn mousedown_mut(&mut self) -> &mut StateStyle {
        self.state_style_mut(ButtonState::MouseDown)
    }

    /// Font color in `state`, falling back to the normal overlay.
    pub fn font_styling_for(&self, state: ButtonState) -> Styling {
        let own = self.overlays[state.index()].font_styling;
        if own.is_unset() {
            self.overlays[ButtonState::Normal.index()].font_styling
        } else {
            own
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, name: impl Into<String>, size: u32) -> Result<()> {
        if size == 0 {
            return Err(GumpError::value("font size", size));
        }
        self.font = Some(Font {
            name: name.into(),
            size,
        });
        Ok(())
    }

    //--- Interaction ------------------------------------------------------

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ButtonState) {
        self.state = state;
    }

    /// Page activated after a click, once the callback has run.
    pub fn page_target(&self) -> Option<u32> {
        self.page_target
    }

    pub fn set_page_target(&mut self, page: Option<u32>) {
        self.page_target = page;
    }

    /// Id reported to the host when the button is clicked.
    pub fn server_button(&self) -> Option<u32> {
        self.server_button
    }

    pub fn set_server_button(&mut self, id: Option<u32>) {
        self.server_button = id;
    }

    pub fn has_callback(&self) -> bool {
        matches!(self.callback, CallbackSlot::Set(_))
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut ClickContext<'_>) -> std::result::Result<(), CallbackError> + 'static,
    {
        self.callback = CallbackSlot::Set(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = match self.callback {
            CallbackSlot::InFlight | CallbackSlot::Cleared => CallbackSlot::Cleared,
            _ => CallbackSlot::Empty,
        };
    }

    pub(crate) fn take_callback(&mut self) -> Option<ClickCallback> {
        match std::mem::replace(&mut self.callback, CallbackSlot::InFlight) {
            CallbackSlot::Set(callback) => Some(callback),
            other => {
                self.callback = other;
                None
            }
        }
    }

    /// Puts a callback back after dispatch unless it was replaced or
    /// cleared meanwhile.
    pub(crate) fn restore_callback(&mut self, callback: ClickCallback) {
        match self.callback {
            CallbackSlot::InFlight => self.callback = CallbackSlot::Set(callback),
            CallbackSlot::Cleared => self.callback = CallbackSlot::Empty,
            _ => {}
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("texture", &self.texture)
            .field("state", &self.state)
            .field("text", &self.text)
            .field("font", &self.font)
            .field("page_target", &self.page_target)
            .field("server_button", &self.server_button)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
