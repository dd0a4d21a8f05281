//! Event taxonomy and the FIFO event queue.

use std::collections::VecDeque;

use crate::domain::{OrderEvent, SignalEvent, TickEvent};

/// A queued simulation event, tagged by kind.
///
/// The enum is closed: dispatch over it is exhaustive, so adding a new
/// kind forces every consumer to decide how to handle it at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Tick(TickEvent),
    Signal(SignalEvent),
    Order(OrderEvent),
}

/// Unbounded FIFO queue of events.
///
/// Insertion order is preserved; events are never reordered or dropped,
/// and every pushed event is popped exactly once as long as the driver
/// keeps polling. An empty queue is a normal condition, not an error.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Appends an event at the tail. Never fails; no capacity bound is
    /// enforced at this layer.
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Removes and returns the head event, or `None` when there is
    /// nothing to do yet.
    pub fn try_pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn signal(strength: f64) -> Event {
        Event::Signal(SignalEvent {
            instrument: "GBPUSD".into(),
            direction: Direction::Long,
            strength,
        })
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut queue = EventQueue::new();
        assert!(queue.try_pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn events_pop_in_push_order() {
        let mut queue = EventQueue::new();
        for i in 0..5 {
            queue.push(signal(i as f64));
        }
        assert_eq!(queue.len(), 5);

        for i in 0..5 {
            match queue.try_pop() {
                Some(Event::Signal(s)) => assert_eq!(s.strength, i as f64),
                other => panic!("expected signal {i}, got {other:?}"),
            }
        }
        assert!(queue.try_pop().is_none());
    }

    #[test]
    fn push_after_drain_starts_fresh() {
        let mut queue = EventQueue::new();
        queue.push(signal(1.0));
        queue.try_pop();
        queue.push(signal(2.0));

        match queue.try_pop() {
            Some(Event::Signal(s)) => assert_eq!(s.strength, 2.0),
            other => panic!("unexpected {other:?}"),
        }
    }
}
