//! Property tests for keyboard navigation.

use katalog::KeyboardNavigator;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Down,
    Up,
    Hover(usize),
    Resize(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => Just(Step::Down),
        4 => Just(Step::Up),
        1 => (0usize..12).prop_map(Step::Hover),
        1 => (0usize..=10).prop_map(Step::Resize),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: the highlight always stays in [-1, n-1].
    #[test]
    fn prop_highlight_in_range(
        initial in 0usize..=10,
        steps in prop::collection::vec(step_strategy(), 0..60),
        visible in any::<bool>()
    ) {
        let mut nav = KeyboardNavigator::new();
        let mut n = initial;
        for step in steps {
            match step {
                Step::Down => nav.arrow_down(n, visible),
                Step::Up => nav.arrow_up(n, visible),
                Step::Hover(i) => nav.hover(i, n),
                Step::Resize(len) => {
                    n = len;
                    nav.clamp(n);
                }
            }
            let index = nav.index();
            prop_assert!(index >= -1 && index < n as i64, "index {} for n {}", index, n);
        }
    }

    /// Property: n presses of ArrowDown from any index come back to it.
    #[test]
    fn prop_down_wraps_full_cycle(n in 1usize..=10, start in 0usize..10) {
        let start = start % n;
        let mut nav = KeyboardNavigator::new();
        nav.hover(start, n);
        for _ in 0..n {
            nav.arrow_down(n, true);
        }
        prop_assert_eq!(nav.highlight(), Some(start));
    }

    /// Property: ArrowUp undoes ArrowDown once something is highlighted.
    #[test]
    fn prop_up_inverts_down(n in 1usize..=10, start in 0usize..10) {
        let start = start % n;
        let mut nav = KeyboardNavigator::new();
        nav.hover(start, n);
        nav.arrow_down(n, true);
        nav.arrow_up(n, true);
        prop_assert_eq!(nav.highlight(), Some(start));
    }

    /// Property: hidden or empty lists ignore arrows entirely.
    #[test]
    fn prop_hidden_list_ignores_arrows(n in 0usize..=10, presses in 0usize..20) {
        let mut nav = KeyboardNavigator::new();
        for _ in 0..presses {
            nav.arrow_down(n, false);
            nav.arrow_up(n, false);
            nav.arrow_down(0, true);
        }
        prop_assert_eq!(nav.index(), -1);
    }
}
