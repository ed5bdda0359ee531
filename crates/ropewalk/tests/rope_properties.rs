use proptest::prelude::*;
use ropewalk::Rope;

/// Segment lists covering the empty rope, single leaves, and multi-leaf
/// trees, with arbitrary bytes and the occasional empty segment.
fn segments() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..8)
}

fn build(segments: &[Vec<u8>]) -> Rope {
    if segments.is_empty() {
        Rope::new()
    } else {
        Rope::from_segments(segments).unwrap()
    }
}

fn flat(segments: &[Vec<u8>]) -> Vec<u8> {
    segments.concat()
}

proptest! {
    #[test]
    fn length_is_additive_under_concat(a in segments(), b in segments()) {
        let (ra, rb) = (build(&a), build(&b));
        prop_assert_eq!(ra.concat(&rb).len(), ra.len() + rb.len());
    }

    #[test]
    fn flatten_distributes_over_concat(a in segments(), b in segments()) {
        let (ra, rb) = (build(&a), build(&b));
        let mut expected = ra.flatten();
        expected.extend_from_slice(&rb.flatten());
        prop_assert_eq!(ra.concat(&rb).flatten(), expected);
    }

    #[test]
    fn substring_matches_the_flat_model(
        segs in segments(),
        x in any::<usize>(),
        y in any::<usize>(),
    ) {
        let r = build(&segs);
        let flat = flat(&segs);
        let (mut lo, mut hi) = (x % (flat.len() + 1), y % (flat.len() + 1));
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        let cut = r.substring(lo, hi).unwrap();
        prop_assert!(cut.is_well_formed());
        prop_assert_eq!(cut.flatten(), &flat[lo..hi]);
    }

    #[test]
    fn full_range_substring_equals_the_source(segs in segments()) {
        let r = build(&segs);
        prop_assert_eq!(r.substring(0, r.len()).unwrap(), r);
    }

    #[test]
    fn byte_at_agrees_with_flatten(segs in segments()) {
        let r = build(&segs);
        let flat = r.flatten();
        for (i, byte) in flat.iter().enumerate() {
            prop_assert_eq!(r.byte_at(i).unwrap(), *byte);
        }
        prop_assert!(r.byte_at(flat.len()).is_err());
    }

    #[test]
    fn builder_concat_and_substring_stay_well_formed(
        a in segments(),
        b in segments(),
        x in any::<usize>(),
    ) {
        let (ra, rb) = (build(&a), build(&b));
        prop_assert!(ra.is_well_formed());
        prop_assert!(rb.is_well_formed());
        let joined = ra.concat(&rb);
        prop_assert!(joined.is_well_formed());
        let hi = x % (joined.len() + 1);
        prop_assert!(joined.substring(0, hi).unwrap().is_well_formed());
    }

    #[test]
    fn equality_is_shape_independent(segs in segments()) {
        let chunked = build(&segs);
        let flat = flat(&segs);
        let whole = Rope::from_chunk(&flat);
        prop_assert_eq!(chunked, whole);
    }
}
