//! Property tests for debounce timing on the virtual clock.

use katalog::{Debouncer, TimerService, VirtualClock};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const DELAY_MS: u64 = 400;

fn recorder(clock: &VirtualClock) -> (Debouncer<u32>, Rc<RefCell<Vec<(u32, Duration)>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let at = clock.clone();
    let timers: Rc<dyn TimerService> = Rc::new(clock.clone());
    let debouncer = Debouncer::new(timers, move |v| sink.borrow_mut().push((v, at.now())));
    (debouncer, seen)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a burst with every gap below the delay emits once, the last value.
    #[test]
    fn prop_burst_emits_last_once(gaps in prop::collection::vec(0u64..DELAY_MS, 1..30)) {
        let clock = VirtualClock::new();
        let (mut debouncer, seen) = recorder(&clock);

        let last = gaps.len() as u32 - 1;
        for (i, gap) in gaps.iter().enumerate() {
            debouncer.feed(i as u32, Duration::from_millis(DELAY_MS));
            clock.advance_ms(*gap);
        }
        clock.advance_ms(DELAY_MS);

        let seen = seen.borrow();
        prop_assert_eq!(seen.len(), 1);
        prop_assert_eq!(seen[0].0, last);
    }

    /// Property: emissions come in feed order, each exactly one delay after
    /// the last feed of its burst.
    #[test]
    fn prop_emissions_in_order_and_on_time(gaps in prop::collection::vec(0u64..1_000, 1..30)) {
        let clock = VirtualClock::new();
        let (mut debouncer, seen) = recorder(&clock);

        let mut expected = Vec::new();
        for (i, gap) in gaps.iter().enumerate() {
            let fed_at = clock.now();
            debouncer.feed(i as u32, Duration::from_millis(DELAY_MS));
            clock.advance_ms(*gap);
            if *gap >= DELAY_MS || i == gaps.len() - 1 {
                expected.push((i as u32, fed_at + Duration::from_millis(DELAY_MS)));
            }
        }
        clock.advance_ms(DELAY_MS);

        prop_assert_eq!(&*seen.borrow(), &expected);
    }

    /// Property: cancelling at any point means nothing is ever emitted.
    #[test]
    fn prop_cancel_silences(feeds in 1usize..10, wait in 0u64..DELAY_MS) {
        let clock = VirtualClock::new();
        let (mut debouncer, seen) = recorder(&clock);
        for i in 0..feeds {
            debouncer.feed(i as u32, Duration::from_millis(DELAY_MS));
        }
        clock.advance_ms(wait);
        debouncer.cancel();
        debouncer.cancel();
        clock.advance_ms(10 * DELAY_MS);
        prop_assert!(seen.borrow().is_empty());
        prop_assert_eq!(clock.pending(), 0);
    }
}
