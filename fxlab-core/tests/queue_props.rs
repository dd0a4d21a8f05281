//! Property tests for event queue ordering.
//!
//! Uses proptest to verify:
//! 1. FIFO — events pop in exactly the order they were pushed
//! 2. Emptiness — try-pop returns None if and only if no unpopped event
//!    remains, under arbitrary push/pop interleavings

use proptest::prelude::*;
use std::collections::VecDeque;

use fxlab_core::domain::{Direction, SignalEvent};
use fxlab_core::event::{Event, EventQueue};

fn signal(index: usize) -> Event {
    Event::Signal(SignalEvent {
        instrument: "GBPUSD".into(),
        direction: Direction::Long,
        strength: index as f64,
    })
}

fn index_of(event: &Event) -> usize {
    match event {
        Event::Signal(s) => s.strength as usize,
        other => panic!("unexpected event {other:?}"),
    }
}

proptest! {
    /// Everything pushed pops back in push order, then the queue is empty.
    #[test]
    fn fifo_order(count in 0usize..200) {
        let mut queue = EventQueue::new();
        for i in 0..count {
            queue.push(signal(i));
        }

        for i in 0..count {
            let event = queue.try_pop();
            prop_assert!(event.is_some());
            prop_assert_eq!(index_of(&event.unwrap()), i);
        }
        prop_assert!(queue.try_pop().is_none());
        prop_assert!(queue.is_empty());
    }

    /// Under arbitrary push/pop interleavings the queue behaves exactly
    /// like a model deque: same pops, same emptiness, nothing reordered
    /// or dropped.
    #[test]
    fn interleaved_matches_model(ops in prop::collection::vec(prop::bool::ANY, 0..400)) {
        let mut queue = EventQueue::new();
        let mut model: VecDeque<usize> = VecDeque::new();
        let mut next = 0usize;

        for push in ops {
            if push {
                queue.push(signal(next));
                model.push_back(next);
                next += 1;
            } else {
                let popped = queue.try_pop().map(|e| index_of(&e));
                prop_assert_eq!(popped, model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
        }

        // Drain: remaining events come out in model order.
        while let Some(expected) = model.pop_front() {
            let event = queue.try_pop();
            prop_assert!(event.is_some());
            prop_assert_eq!(index_of(&event.unwrap()), expected);
        }
        prop_assert!(queue.try_pop().is_none());
    }
}
