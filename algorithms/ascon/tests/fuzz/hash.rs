use ascon::{hash, xof, HashVariant, XofVariant};
use bolero::check;

/// Determinism: every hash/XOF entry point is a pure function of its input.
#[test]
fn fuzz_hash_deterministic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in [HashVariant::Hash, HashVariant::Hasha] {
            assert_eq!(hash(variant, data), hash(variant, data));
        }
    });
}

/// XOF extension property: a shorter requested output is a prefix of a
/// longer one for the same input.
#[test]
fn fuzz_xof_extension() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in [XofVariant::Xof, XofVariant::Xofa] {
            let long = xof(variant, data, 96);
            for &n in &[0usize, 1, 8, 17, 63, 96] {
                let short = xof(variant, data, n);
                assert_eq!(short, long[..n], "extension mismatch at n={n}");
            }
        }
    });
}
