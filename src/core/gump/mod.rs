//=========================================================================
// Gump (Scene)
//=========================================================================
//
// An in-game window: ordered widgets, an explicit component store and a
// screen origin.
//
// Architecture:
//   Gump
//     ├─ widgets: Vec<Widget>               (insertion order, never re-sorted)
//     ├─ names:   HashMap<String, WidgetId> (filled by set_name)
//     ├─ store:   ComponentStore            (filled explicitly)
//     └─ pages:   current (for adding) / active (for display)
//
// Lifecycle:
//   Gump::new() → add_*() / set_name() / store_insert() → frame() ... → close()
//
// Page 0 is always visible. Other pages are visible only while active.
//
//=========================================================================

//=== Module Declarations =================================================

mod frame;
mod store;

//=== Public API ==========================================================

pub use frame::{DrawCommand, DrawPrimitive};
pub use store::ComponentStore;

//=== External Dependencies ===============================================

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::error::{CallbackError, GumpError, Result};
use crate::core::dispatch::ClickContext;
use crate::core::localization::Localizer;
use crate::core::texture::{TextureRef, TextureResolver};
use crate::core::widget::{
    AlphaRegion, Background, Button, Geometry, GumpId, Image, Label, LabelText, Rect, Widget,
    WidgetId, WidgetKind,
};

static NEXT_GUMP_ID: AtomicU64 = AtomicU64::new(1);

//=== Gump ================================================================

#[derive(Debug)]
pub struct Gump {
    id: GumpId,
    origin: (i32, i32),
    closable: bool,
    draggable: bool,
    widgets: Vec<Widget>,
    names: HashMap<String, WidgetId>,
    store: ComponentStore,
    pages: BTreeSet<u32>,
    current_page: u32,
    active_page: u32,
}

impl Gump {
    //--- Construction -----------------------------------------------------

    /// Creates an empty gump anchored at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        let id = GumpId(NEXT_GUMP_ID.fetch_add(1, Ordering::Relaxed));
        debug!("Created gump {:?} at ({}, {})", id, x, y);

        Self {
            id,
            origin: (x, y),
            closable: false,
            draggable: false,
            widgets: Vec::new(),
            names: HashMap::new(),
            store: ComponentStore::new(),
            pages: BTreeSet::from([0]),
            current_page: 0,
            active_page: 0,
        }
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    //--- Window Properties ------------------------------------------------

    pub fn id(&self) -> GumpId {
        self.id
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin = (x, y);
    }

    pub fn is_closable(&self) -> bool {
        self.closable
    }

    pub fn set_closable(&mut self, closable: bool) {
        self.closable = closable;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    //--- Pages ------------------------------------------------------------

    /// Registers page `number` and makes it the target of further `add_*` calls.
    pub fn add_page(&mut self, number: u32) {
        if self.pages.insert(number) {
            debug!("Gump {:?}: added page {}", self.id, number);
        }
        self.current_page = number;
    }

    /// Page new widgets are added to.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page shown in addition to page 0.
    pub fn active_page(&self) -> u32 {
        self.active_page
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().copied()
    }

    pub fn activate_page(&mut self, number: u32) -> Result<()> {
        if !self.pages.contains(&number) {
            return Err(GumpError::NotFound(format!("page {number}")));
        }
        debug!("Gump {:?}: activating page {}", self.id, number);
        self.active_page = number;
        Ok(())
    }

    //--- Widget Factories -------------------------------------------------

    pub fn add_background(&mut self, rect: impl Into<Rect>, z_order: u32) -> WidgetId {
        self.push(
            Geometry::Rect(rect.into()),
            WidgetKind::Background(Background::new(z_order)),
        )
    }

    /// Adds an image; with point-only geometry it takes the texture's natural size.
    pub fn add_image(&mut self, geometry: impl Into<Geometry>, texture: TextureRef) -> WidgetId {
        self.push(geometry.into(), WidgetKind::Image(Image::new(texture)))
    }

    pub fn add_label(&mut self, x: i32, y: i32, text: impl Into<LabelText>) -> WidgetId {
        self.push(
            Geometry::Point { x, y },
            WidgetKind::Label(Label::new(text)),
        )
    }

    /// Adds a button whose click runs `callback`.
    pub fn add_button<F>(&mut self, rect: impl Into<Rect>, texture: TextureRef, callback: F) -> WidgetId
    where
        F: FnMut(&mut ClickContext<'_>) -> std::result::Result<(), CallbackError> + 'static,
    {
        let mut button = Button::new(texture);
        button.set_callback(callback);
        self.push(Geometry::Rect(rect.into()), WidgetKind::Button(button))
    }

    pub fn add_alpha_region(&mut self, rect: impl Into<Rect>, opacity: f32) -> Result<WidgetId> {
        let region = AlphaRegion::new(opacity)?;
        Ok(self.push(Geometry::Rect(rect.into()), WidgetKind::AlphaRegion(region)))
    }

    fn push(&mut self, geometry: Geometry, kind: WidgetKind) -> WidgetId {
        let id = WidgetId {
            gump: self.id,
            index: self.widgets.len(),
        };
        debug!(
            "Gump {:?}: added {} #{} on page {}",
            self.id,
            kind.name(),
            id.index,
            self.current_page
        );
        self.widgets.push(Widget::new(id, geometry, self.current_page, kind));
        id
    }

    //--- Widget Access ----------------------------------------------------

    pub fn widget(&self, id: WidgetId) -> Result<&Widget> {
        self.check_owner(id)?;
        self.widgets
            .get(id.index)
            .ok_or_else(|| GumpError::NotFound(format!("widget {id:?}")))
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        self.check_owner(id)?;
        self.widgets
            .get_mut(id.index)
            .ok_or_else(|| GumpError::NotFound(format!("widget {id:?}")))
    }

    /// All widgets in insertion order, visible or not.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn check_owner(&self, id: WidgetId) -> Result<()> {
        if id.gump == self.id {
            Ok(())
        } else {
            Err(GumpError::ForeignWidget {
                widget: id,
                gump: self.id,
            })
        }
    }

    //--- Component Names --------------------------------------------------

    /// Names a widget; names are unique within the gump.
    ///
    /// Naming does not touch the [`ComponentStore`].
    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.check_owner(id)?;

        match self.names.get(&name) {
            Some(owner) if *owner == id => return Ok(()),
            Some(_) => return Err(GumpError::DuplicateName(name)),
            None => {}
        }

        let widget = self.widget_mut(id)?;
        let previous = widget.set_name_unchecked(Some(name.clone()));
        if let Some(previous) = previous {
            self.names.remove(&previous);
        }
        self.names.insert(name, id);
        Ok(())
    }

    pub fn clear_name(&mut self, id: WidgetId) -> Result<()> {
        let previous = self.widget_mut(id)?.set_name_unchecked(None);
        if let Some(previous) = previous {
            self.names.remove(&previous);
        }
        Ok(())
    }

    /// Looks up a widget by the name given through [`set_name`](Self::set_name).
    pub fn component(&self, name: &str) -> Result<&Widget> {
        let id = self.component_id(name)?;
        self.widget(id)
    }

    pub fn component_mut(&mut self, name: &str) -> Result<&mut Widget> {
        let id = self.component_id(name)?;
        self.widget_mut(id)
    }

    pub fn component_id(&self, name: &str) -> Result<WidgetId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GumpError::NotFound(format!("component {name:?}")))
    }

    //--- Component Store --------------------------------------------------

    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Places a widget into the store under `key`, returning the replaced entry.
    pub fn store_insert(&mut self, key: impl Into<String>, id: WidgetId) -> Result<Option<WidgetId>> {
        self.widget(id)?;
        Ok(self.store.insert(key.into(), id))
    }

    pub fn store_get(&self, key: &str) -> Result<&Widget> {
        let id = self.store_id(key)?;
        self.widget(id)
    }

    pub fn store_get_mut(&mut self, key: &str) -> Result<&mut Widget> {
        let id = self.store_id(key)?;
        self.widget_mut(id)
    }

    pub fn store_remove(&mut self, key: &str) -> Result<WidgetId> {
        self.store
            .remove(key)
            .ok_or_else(|| GumpError::NotFound(format!("store key {key:?}")))
    }

    fn store_id(&self, key: &str) -> Result<WidgetId> {
        self.store
            .get(key)
            .ok_or_else(|| GumpError::NotFound(format!("store key {key:?}")))
    }

    //--- Render Traversal -------------------------------------------------

    pub fn is_visible(&self, widget: &Widget) -> bool {
        widget.page() == 0 || widget.page() == self.active_page
    }

    /// Visible widgets in the order the renderer draws them.
    ///
    /// Widgets keep their insertion slots; backgrounds are stable-sorted by
    /// z-order among the slots backgrounds occupy.
    pub fn render_order(&self) -> Vec<WidgetId> {
        let mut order: Vec<&Widget> = self.widgets.iter().filter(|w| self.is_visible(w)).collect();

        let slots: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|(_, w)| matches!(w.kind(), WidgetKind::Background(_)))
            .map(|(slot, _)| slot)
            .collect();

        let mut backgrounds: Vec<&Widget> = slots.iter().map(|&slot| order[slot]).collect();
        backgrounds.sort_by_key(|w| match w.kind() {
            WidgetKind::Background(bg) => bg.z_order(),
            _ => 0,
        });

        for (slot, bg) in slots.into_iter().zip(backgrounds) {
            order[slot] = bg;
        }

        order.into_iter().map(Widget::id).collect()
    }

    /// Builds the draw list for one render pass.
    pub fn frame(&self, textures: &dyn TextureResolver, localizer: &dyn Localizer) -> Vec<DrawCommand> {
        self.render_order()
            .into_iter()
            .filter_map(|id| self.widgets.get(id.index))
            .map(|w| frame::draw_command(w, self.origin, textures, localizer))
            .collect()
    }

    /// Topmost visible widget under the absolute point, alpha regions excluded.
    pub fn hit_test(&self, x: i32, y: i32, textures: &dyn TextureResolver) -> Option<WidgetId> {
        let (ox, oy) = self.origin;
        self.render_order()
            .into_iter()
            .rev()
            .filter_map(|id| self.widgets.get(id.index))
            .filter(|w| !matches!(w.kind(), WidgetKind::AlphaRegion(_)))
            .find(|w| {
                let (rect, _) = frame::resolve_rect(w, textures);
                rect.translated(ox, oy).contains(x, y)
            })
            .map(Widget::id)
    }

    /// Absolute rect covering every visible widget.
    pub fn bounds(&self, textures: &dyn TextureResolver) -> Option<Rect> {
        let (ox, oy) = self.origin;
        self.widgets
            .iter()
            .filter(|w| self.is_visible(w))
            .map(|w| frame::resolve_rect(w, textures).0.translated(ox, oy))
            .reduce(|acc, r| acc.union(&r))
    }

    //--- Teardown ---------------------------------------------------------

    /// Releases the gump together with all of its widgets.
    pub fn close(self) {
        info!("Closing gump {:?} ({} widgets)", self.id, self.widgets.len());
    }

    /// Re-inserts a click callback taken out for dispatch.
    pub(crate) fn restore_callback(&mut self, id: WidgetId, callback: crate::core::widget::ClickCallback) {
        if let Ok(button) = self.widget_mut(id).and_then(Widget::as_button_mut) {
            button.restore_callback(callback);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
