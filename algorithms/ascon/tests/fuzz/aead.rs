use ascon::{aead_decrypt, aead_encrypt, AeadVariant};
use bolero::check;

const VARIANTS: [AeadVariant; 3] = [
    AeadVariant::Ascon128,
    AeadVariant::Ascon128a,
    AeadVariant::Ascon80pq,
];

/// Split one fuzzer-supplied byte string into key/nonce/AD/message for a
/// given variant, padding with zeros rather than rejecting short inputs so
/// bolero's shrinker has something to chew on at every input length.
fn split(data: &[u8], variant: AeadVariant) -> (Vec<u8>, [u8; 16], Vec<u8>, Vec<u8>) {
    let key_len = variant.key_len();
    let mut key = vec![0u8; key_len];
    let mut nonce = [0u8; 16];
    let mut rest = data;

    let take = key_len.min(rest.len());
    key[..take].copy_from_slice(&rest[..take]);
    rest = &rest[take..];

    let take = 16.min(rest.len());
    nonce[..take].copy_from_slice(&rest[..take]);
    rest = &rest[take..];

    let split_at = rest.len() / 2;
    let (ad, msg) = rest.split_at(split_at);
    (key, nonce, ad.to_vec(), msg.to_vec())
}

/// Universal round-trip property: decrypting what was just encrypted
/// under the same `(K, N, A)` always recovers the original plaintext.
#[test]
fn fuzz_round_trip() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in VARIANTS {
            let (key, nonce, ad, msg) = split(data, variant);
            let (ct, tag) = aead_encrypt(variant, &key, &nonce, &ad, &msg).unwrap();
            let pt = aead_decrypt(variant, &key, &nonce, &ad, &ct, &tag).unwrap();
            assert_eq!(pt, msg, "round-trip mismatch for {variant:?}");
        }
    });
}

/// Universal tag-sensitivity property: flipping any single bit of the
/// ciphertext, AD or tag must cause authentication to fail.
#[test]
fn fuzz_tag_sensitivity() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let variant = AeadVariant::Ascon128;
        let (key, nonce, ad, msg) = split(data, variant);
        let (ct, tag) = aead_encrypt(variant, &key, &nonce, &ad, &msg).unwrap();

        if !ct.is_empty() {
            let mut bad_ct = ct.clone();
            bad_ct[0] ^= 1;
            assert!(aead_decrypt(variant, &key, &nonce, &ad, &bad_ct, &tag).is_err());
        }

        let mut bad_tag = tag;
        bad_tag[0] ^= 1;
        assert!(aead_decrypt(variant, &key, &nonce, &ad, &ct, &bad_tag).is_err());

        if !ad.is_empty() {
            let mut bad_ad = ad.clone();
            bad_ad[0] ^= 1;
            assert!(aead_decrypt(variant, &key, &nonce, &bad_ad, &ct, &tag).is_err());
        }
    });
}
