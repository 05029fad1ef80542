//! Properties every sequence pipeline must satisfy, checked over generated inputs.

use std::cell::Cell;

use lazyseq::prelude::*;
use proptest::prelude::*;

fn groups() -> impl Strategy<Value = Vec<Vec<u16>>> {
    prop::collection::vec(prop::collection::vec(any::<u16>(), 0..6), 0..8)
}

proptest! {
    #[test]
    fn prop_from_vec_yields_items_in_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(to_vec(from_vec(items.clone())), items);
    }

    #[test]
    fn prop_exhaustion_is_sticky(items in prop::collection::vec(any::<u8>(), 0..16), extra in 1usize..8) {
        let mut seq = from_vec(items).filter(|x| x % 3 != 0).map(u32::from);
        while seq.pull().is_some() {}
        for _ in 0..extra {
            prop_assert_eq!(seq.pull(), None);
        }
    }

    #[test]
    fn prop_take_pulls_upstream_at_most_n_times(len in 0usize..32, n in 0usize..40, counted in any::<bool>()) {
        let calls = Cell::new(0);
        let source = from_fn(|| {
            calls.set(calls.get() + 1);
            (calls.get() <= len).then(|| calls.get())
        });
        let mut seq = take(source, n);
        let yielded = if counted { count(&mut seq) } else { to_vec(seq).len() };

        prop_assert_eq!(yielded, len.min(n));
        if len >= n {
            prop_assert!(calls.get() <= n);
        } else {
            prop_assert!(calls.get() <= len + 1);
        }
    }

    #[test]
    fn prop_map_count_matches_pulling(items in prop::collection::vec(any::<i64>(), 0..64), skip in 0usize..8) {
        let mut fast = from_vec(items.clone()).map(|x| x.wrapping_mul(3));
        let mut slow = from_iter(items).map(|x| x.wrapping_mul(3));
        for _ in 0..skip {
            prop_assert_eq!(fast.pull(), slow.pull());
        }

        prop_assert_eq!(count(&mut fast), count(&mut slow));
        prop_assert_eq!(fast.pull(), None);
    }

    #[test]
    fn prop_take_count_matches_pulling(items in prop::collection::vec(any::<u8>(), 0..64), n in 0usize..80, skip in 0usize..8) {
        let mut fast = take(from_vec(items.clone()), n);
        let mut slow = take(from_iter(items), n);
        for _ in 0..skip {
            prop_assert_eq!(fast.pull(), slow.pull());
        }

        prop_assert_eq!(count(&mut fast), count(&mut slow));
        prop_assert_eq!(fast.pull(), None);
        prop_assert_eq!(slow.pull(), None);
    }

    #[test]
    fn prop_flat_map_count_matches_pulling(groups in groups(), skip in 0usize..12) {
        let expected: usize = groups.iter().map(Vec::len).sum();
        let mut seq = from_vec(groups).flat_map(from_vec);

        let mut pulled = 0;
        while pulled < skip && seq.pull().is_some() {
            pulled += 1;
        }

        prop_assert_eq!(count(&mut seq), expected - pulled);
        prop_assert_eq!(seq.pull(), None);
        prop_assert_eq!(count(&mut seq), 0);
    }

    #[test]
    fn prop_flat_map_preserves_group_order(groups in groups()) {
        let expected: Vec<u16> = groups.iter().flatten().copied().collect();
        prop_assert_eq!(to_vec(from_vec(groups).flat_map(from_vec)), expected);
    }

    #[test]
    fn prop_go_delivers_every_element(items in prop::collection::vec(any::<u32>(), 0..32)) {
        let seq = go(from_vec(items.clone()), Cancellation::new());
        prop_assert_eq!(to_vec(seq), items);
    }
}
