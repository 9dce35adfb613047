//=========================================================================
// Gump Runtime
//
// Owns one gump and drives it from host events.
//
// Architecture:
// ```text
//     GumpRuntimeBuilder ──build(gump)──> (GumpRuntime, Sender<HostEvent>)
//         │                                   │
//         ├─ with_channel_capacity()          └─ run_frame()
//         ├─ with_max_events_per_frame()         drains the channel
//         └─ with_idle_sleep()                   dispatches in order
// ```
//
// The sender goes to the host's input thread; the runtime stays on the
// thread that owns the gump.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::dispatch::{DispatchOutcome, EventCollector, EventDispatcher, HostEvent, PointerEvent, TickControl};
use crate::core::error::Result;
use crate::core::gump::{DrawCommand, Gump};
use crate::core::localization::Localizer;
use crate::core::texture::TextureResolver;

//=== GumpRuntimeBuilder ==================================================

/// Builder for configuring a [`GumpRuntime`].
///
/// # Default Values
///
/// - **Channel capacity**: 128 host messages
/// - **Max events per frame**: 100 host messages
/// - **Idle sleep**: 10 ms
///
/// # Examples
///
/// ```no_run
/// use aetheric_gump::prelude::*;
///
/// let gump = Gump::new(30, 30);
/// let (mut runtime, host) = GumpRuntimeBuilder::new()
///     .with_channel_capacity(256)
///     .build(gump);
///
/// host.send(HostEvent::Close).unwrap();
/// runtime.run_until_closed(|_gump| {});
/// ```
pub struct GumpRuntimeBuilder {
    channel_capacity: usize,
    max_events_per_frame: usize,
    idle_sleep: Duration,
}

impl GumpRuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            channel_capacity: 128,
            max_events_per_frame: 100,
            idle_sleep: Duration::from_millis(10),
        }
    }

    /// Sets the channel capacity for host → gump communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Caps the host messages drained in one frame.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_frame(mut self, max: usize) -> Self {
        assert!(max > 0, "Max events per frame must be positive");
        self.max_events_per_frame = max;
        self
    }

    /// Sleep applied when a frame received nothing. Zero disables it.
    ///
    /// Default: 10 ms
    pub fn with_idle_sleep(mut self, idle_sleep: Duration) -> Self {
        self.idle_sleep = idle_sleep;
        self
    }

    /// Builds the runtime around `gump` and returns the host-side sender.
    pub fn build(self, gump: Gump) -> (GumpRuntime, Sender<HostEvent>) {
        info!(
            "Building gump runtime for {:?} (channel: {}, events/frame: {})",
            gump.id(),
            self.channel_capacity,
            self.max_events_per_frame
        );

        let (tx, rx): (Sender<HostEvent>, Receiver<HostEvent>) = bounded(self.channel_capacity);

        let runtime = GumpRuntime {
            gump,
            dispatcher: EventDispatcher::new(),
            collector: EventCollector::new(rx, self.max_events_per_frame, self.idle_sleep),
            pending: VecDeque::new(),
            exit_requested: false,
        };

        (runtime, tx)
    }
}

impl Default for GumpRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== GumpRuntime =========================================================

/// A gump together with its dispatcher and host event queue.
pub struct GumpRuntime {
    gump: Gump,
    dispatcher: EventDispatcher,
    collector: EventCollector,
    pending: VecDeque<PointerEvent>,
    exit_requested: bool,
}

impl GumpRuntime {
    //--- Accessors --------------------------------------------------------

    pub fn gump(&self) -> &Gump {
        &self.gump
    }

    pub fn gump_mut(&mut self) -> &mut Gump {
        &mut self.gump
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Pointer events received but not yet dispatched.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Draw list for the gump's current state.
    pub fn frame(&self, textures: &dyn TextureResolver, localizer: &dyn Localizer) -> Vec<DrawCommand> {
        self.gump.frame(textures, localizer)
    }

    //--- Execution --------------------------------------------------------

    /// Drains host messages and dispatches the pointer events in order.
    ///
    /// Returns [`TickControl::Exit`] once the host sent `Close` or dropped
    /// its sender and every received event was dispatched. On a dispatch
    /// error the failing event is dropped and the rest stay queued for the
    /// next frame.
    pub fn run_frame(&mut self) -> Result<TickControl> {
        if !self.exit_requested && self.collector.collect_frame() == TickControl::Exit {
            debug!("Host requested exit for {:?}", self.gump.id());
            self.exit_requested = true;
        }
        self.pending.extend(self.collector.take_events());

        while let Some(event) = self.pending.pop_front() {
            match self.dispatcher.dispatch(&mut self.gump, event)? {
                DispatchOutcome::Ignored => {}
                outcome => debug!("{:?} → {:?}", event, outcome),
            }
        }

        Ok(if self.exit_requested {
            TickControl::Exit
        } else {
            TickControl::Continue
        })
    }

    /// Runs frames until the host closes the gump.
    ///
    /// `on_frame` sees the gump after every frame, e.g. to render it.
    /// Dispatch errors are logged and do not stop the loop.
    pub fn run_until_closed<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(&Gump),
    {
        info!("Running gump {:?}", self.gump.id());

        loop {
            let control = match self.run_frame() {
                Ok(control) => control,
                Err(e) => {
                    error!("Dispatch error in {:?}: {}", self.gump.id(), e);
                    TickControl::Continue
                }
            };

            on_frame(&self.gump);

            if control == TickControl::Exit && self.pending.is_empty() {
                break;
            }
        }

        info!("Gump {:?} loop exited", self.gump.id());
    }

    //--- Teardown ---------------------------------------------------------

    /// Hands the gump back, discarding queued events.
    pub fn into_gump(self) -> Gump {
        self.gump
    }

    /// Discards the runtime together with its gump.
    pub fn close(self) {
        self.gump.close();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::core::error::GumpError;
    use crate::core::texture::TextureRef;
    use crate::core::widget::{ButtonState, WidgetId};

    fn clicker(count: &Rc<Cell<u32>>) -> (Gump, WidgetId) {
        let mut gump = Gump::new(30, 30);
        let counter = Rc::clone(count);
        let button = gump.add_button((10, 10, 100, 60), TextureRef::theme("images/button.png"), move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });
        (gump, button)
    }

    fn quiet() -> GumpRuntimeBuilder {
        GumpRuntimeBuilder::new().with_idle_sleep(Duration::ZERO)
    }

    fn click(button: WidgetId) -> HostEvent {
        HostEvent::Pointer(vec![
            PointerEvent::enter(button),
            PointerEvent::press(button),
            PointerEvent::release(button),
        ])
    }

    //=====================================================================
    // GumpRuntimeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = GumpRuntimeBuilder::new();
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.max_events_per_frame, 100);
        assert_eq!(builder.idle_sleep, Duration::from_millis(10));
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = GumpRuntimeBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        GumpRuntimeBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Max events per frame must be positive")]
    fn builder_with_max_events_panics_on_zero() {
        GumpRuntimeBuilder::new().with_max_events_per_frame(0);
    }

    #[test]
    fn builder_build_uses_capacity() {
        let (_runtime, tx) = GumpRuntimeBuilder::new().with_channel_capacity(4).build(Gump::new(0, 0));
        assert_eq!(tx.capacity(), Some(4));
    }

    //=====================================================================
    // GumpRuntime Tests
    //=====================================================================

    #[test]
    fn frame_dispatches_click() {
        let count = Rc::new(Cell::new(0));
        let (gump, button) = clicker(&count);
        let (mut runtime, tx) = quiet().build(gump);

        tx.send(click(button)).unwrap();

        assert_eq!(runtime.run_frame().unwrap(), TickControl::Continue);
        assert_eq!(count.get(), 1);
        assert_eq!(
            runtime.gump().widget(button).unwrap().as_button().unwrap().state(),
            ButtonState::MouseOver
        );
    }

    #[test]
    fn frame_without_events_continues() {
        let (mut runtime, _tx) = quiet().build(Gump::new(0, 0));
        assert_eq!(runtime.run_frame().unwrap(), TickControl::Continue);
    }

    #[test]
    fn close_exits_after_dispatching_earlier_events() {
        let count = Rc::new(Cell::new(0));
        let (gump, button) = clicker(&count);
        let (mut runtime, tx) = quiet().build(gump);

        tx.send(click(button)).unwrap();
        tx.send(HostEvent::Close).unwrap();

        assert_eq!(runtime.run_frame().unwrap(), TickControl::Exit);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropped_sender_exits() {
        let (mut runtime, tx) = quiet().build(Gump::new(0, 0));
        drop(tx);
        assert_eq!(runtime.run_frame().unwrap(), TickControl::Exit);
    }

    #[test]
    fn dispatch_error_keeps_remaining_events() {
        let count = Rc::new(Cell::new(0));
        let (gump, button) = clicker(&count);
        let foreign = Gump::new(0, 0).add_background((0, 0, 10, 10), 0);
        let (mut runtime, tx) = quiet().build(gump);

        tx.send(HostEvent::Pointer(vec![
            PointerEvent::press(foreign),
            PointerEvent::press(button),
            PointerEvent::release(button),
        ]))
        .unwrap();

        assert!(matches!(runtime.run_frame(), Err(GumpError::ForeignWidget { .. })));
        assert_eq!(runtime.pending(), 2);
        assert_eq!(count.get(), 0);

        assert_eq!(runtime.run_frame().unwrap(), TickControl::Continue);
        assert_eq!(runtime.pending(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn run_until_closed_renders_each_frame() {
        let count = Rc::new(Cell::new(0));
        let (gump, button) = clicker(&count);
        let (mut runtime, tx) = quiet().with_max_events_per_frame(1).build(gump);

        tx.send(click(button)).unwrap();
        tx.send(click(button)).unwrap();
        tx.send(HostEvent::Close).unwrap();

        let mut frames = 0;
        runtime.run_until_closed(|_| frames += 1);

        assert_eq!(frames, 3);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn into_gump_returns_owned_gump() {
        let count = Rc::new(Cell::new(0));
        let (gump, button) = clicker(&count);
        let (runtime, _tx) = quiet().build(gump);

        let gump = runtime.into_gump();
        assert!(gump.widget(button).is_ok());
    }
}
