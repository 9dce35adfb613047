//=========================================================================
// Event Collector
//=========================================================================
//
// Host event collector with bounded polling and close detection.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → pointer events → TickControl
//
// Bounded polling keeps one busy host from starving the render pass.
// Idle sleep reduces CPU usage when nothing arrived.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::host::HostEvent;
use super::pointer::PointerEvent;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events with bounded polling.
pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    events: Vec<PointerEvent>,
    max_events_per_frame: usize,
    idle_sleep: Duration,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<HostEvent>, max_events_per_frame: usize, idle_sleep: Duration) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
            max_events_per_frame,
            idle_sleep,
        }
    }

    /// Collects pending host messages (bounded to prevent starvation).
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < self.max_events_per_frame {
            match self.receiver.try_recv() {
                Ok(event) => {
                    drained += 1;
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Host channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_events_per_frame {
            warn!("Host event backlog: drained {} messages this frame", drained);
        }

        if drained == 0 && !self.idle_sleep.is_zero() {
            thread::sleep(self.idle_sleep);
        }

        TickControl::Continue
    }

    /// Pointer events collected this frame.
    #[cfg(test)]
    pub(crate) fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Takes ownership of the collected events, leaving an empty vec.
    pub(crate) fn take_events(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    fn handle_event(&mut self, event: HostEvent) -> TickControl {
        match event {
            HostEvent::Pointer(batch) => {
                self.events.extend(batch);
                TickControl::Continue
            }
            HostEvent::Close => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use crate::core::widget::{GumpId, WidgetId};

    fn wid(index: usize) -> WidgetId {
        WidgetId { gump: GumpId(1), index }
    }

    fn collector(rx: Receiver<HostEvent>) -> EventCollector {
        EventCollector::new(rx, 100, Duration::ZERO)
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<HostEvent>();
        let mut collector = collector(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_flattens_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = collector(rx);

        tx.send(HostEvent::Pointer(vec![PointerEvent::press(wid(0))])).unwrap();
        tx.send(HostEvent::Pointer(vec![
            PointerEvent::release(wid(0)),
            PointerEvent::leave(wid(0)),
        ]))
        .unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.events(),
            [
                PointerEvent::press(wid(0)),
                PointerEvent::release(wid(0)),
                PointerEvent::leave(wid(0)),
            ]
        );
    }

    #[test]
    fn collect_returns_exit_on_close() {
        let (tx, rx) = unbounded();
        let mut collector = collector(rx);

        tx.send(HostEvent::Close).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<HostEvent>();
        let mut collector = collector(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx, 2, Duration::ZERO);

        for i in 0..3 {
            tx.send(HostEvent::Pointer(vec![PointerEvent::enter(wid(i))])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.take_events().len(), 2);

        collector.collect_frame();
        assert_eq!(collector.events(), [PointerEvent::enter(wid(2))]);
    }
}
