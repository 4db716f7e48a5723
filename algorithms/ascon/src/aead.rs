//! Ascon-128 / Ascon-128a / Ascon-80pq authenticated encryption.
//!
//! Structured the way the pack's own Ascon AEAD reference structures it
//! (a `Core` holding the permutation state plus the key, `process_*`
//! phases called in sequence by `encrypt_inplace`/`decrypt_inplace`), but
//! generalized from two variants to three via `AeadVariant` rather than a
//! per-variant generic `Parameters` trait.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{AeadError, LengthError};
use crate::params::AeadVariant;
use crate::state::{self, State};

/// Up to three key lanes: `key[0]`/`key[1]` for the 16-byte-key variants,
/// all three for Ascon-80pq (where `key[0]` holds only the key's top 32
/// bits, zero-extended — the remaining 32 bits of that conceptual lane
/// live folded into lane 0 of the state, see [`Core::new`]).
#[derive(Zeroize)]
#[zeroize(drop)]
struct AeadKey([u64; 3]);

struct Core {
    state: State,
    variant: AeadVariant,
    key: AeadKey,
}

/// `KEYROT(lo2hi, hi2lo)`: byte-wise nibble splice of two lanes, used only
/// by Ascon-80pq's finalization.
fn keyrot(lo2hi: u64, hi2lo: u64) -> u64 {
    let mut out = 0u64;
    for i in 0..8u32 {
        let lo = ((lo2hi >> (8 * i)) as u8) << 4;
        let hi = ((hi2lo >> (8 * i)) as u8) >> 4;
        out |= u64::from(lo | hi) << (8 * i);
    }
    out
}

impl Core {
    fn new(variant: AeadVariant, key: &[u8], nonce: &[u8; 16]) -> Self {
        debug_assert_eq!(key.len(), variant.key_len());

        let n0 = state::load(&nonce[..8]);
        let n1 = state::load(&nonce[8..]);

        match variant {
            AeadVariant::Ascon128 | AeadVariant::Ascon128a => {
                let k0 = state::load(&key[..8]);
                let k1 = state::load(&key[8..16]);
                let mut state = State::from_lanes([variant.iv_lane0(), k0, k1, n0, n1]);
                state.permute(variant.rounds_a());
                state.xor_lane(3, k0);
                state.xor_lane(4, k1);
                Self {
                    state,
                    variant,
                    key: AeadKey([k0, k1, 0]),
                }
            }
            AeadVariant::Ascon80pq => {
                // zero-extended: low 32 bits hold the key's top 32 bits
                let k0 = u64::from(u32::from_be_bytes(key[..4].try_into().unwrap()));
                let k1 = state::load(&key[4..12]);
                let k2 = state::load(&key[12..20]);
                let lane0 = variant.iv_lane0() | k0;
                let mut state = State::from_lanes([lane0, k1, k2, n0, n1]);
                state.permute(variant.rounds_a());
                state.xor_lane(2, k0);
                state.xor_lane(3, k1);
                state.xor_lane(4, k2);
                Self {
                    state,
                    variant,
                    key: AeadKey([k0, k1, k2]),
                }
            }
        }
    }

    fn process_ad(&mut self, ad: &[u8]) {
        let rate = self.variant.rate();
        let lanes = self.variant.rate_lanes();
        let rounds_b = self.variant.rounds_b();

        if !ad.is_empty() {
            let mut offset = 0;
            while ad.len() - offset >= rate {
                self.state.xor_lane(0, state::load(&ad[offset..offset + 8]));
                if lanes == 2 {
                    self.state
                        .xor_lane(1, state::load(&ad[offset + 8..offset + 16]));
                }
                self.state.permute(rounds_b);
                offset += rate;
            }

            let tail = &ad[offset..];
            if lanes == 2 && tail.len() >= 8 {
                self.state.xor_lane(0, state::load(&tail[..8]));
                let rem = &tail[8..];
                self.state.xor_lane(1, state::pad(rem.len()));
                if !rem.is_empty() {
                    self.state.xor_lane(1, state::load(rem));
                }
            } else {
                self.state.xor_lane(0, state::pad(tail.len()));
                if !tail.is_empty() {
                    self.state.xor_lane(0, state::load(tail));
                }
            }
            self.state.permute(rounds_b);
        }

        // Domain separation: unconditional, even for an empty AD.
        self.state.xor_lane(4, 1);
    }

    fn tail_encrypt(&mut self, buf: &mut [u8], lane_idx: usize) {
        let len = buf.len();
        let mut lane = self.state.lane(lane_idx) ^ state::pad(len);
        if len > 0 {
            lane ^= state::load(buf);
            buf.copy_from_slice(&lane.to_be_bytes()[..len]);
        }
        self.state.set_lane(lane_idx, lane);
    }

    fn tail_decrypt(&mut self, buf: &mut [u8], lane_idx: usize) {
        let len = buf.len();
        let mut lane = self.state.lane(lane_idx) ^ state::pad(len);
        if len > 0 {
            let ciphertext = state::load(buf);
            lane ^= ciphertext;
            buf.copy_from_slice(&lane.to_be_bytes()[..len]);
            lane = state::clear(lane, len) ^ ciphertext;
        }
        self.state.set_lane(lane_idx, lane);
    }

    fn process_encrypt(&mut self, buf: &mut [u8]) {
        let rate = self.variant.rate();
        let lanes = self.variant.rate_lanes();
        let rounds_b = self.variant.rounds_b();

        let mut offset = 0;
        while buf.len() - offset >= rate {
            for l in 0..lanes {
                let chunk = &mut buf[offset + l * 8..offset + l * 8 + 8];
                let c = self.state.lane(l) ^ state::load(chunk);
                self.state.set_lane(l, c);
                state::store(c, chunk);
            }
            self.state.permute(rounds_b);
            offset += rate;
        }

        let tail = &mut buf[offset..];
        if lanes == 2 && tail.len() >= 8 {
            let (chunk0, rem) = tail.split_at_mut(8);
            let c0 = self.state.lane(0) ^ state::load(chunk0);
            self.state.set_lane(0, c0);
            state::store(c0, chunk0);
            self.tail_encrypt(rem, 1);
        } else {
            self.tail_encrypt(tail, 0);
        }
    }

    fn process_decrypt(&mut self, buf: &mut [u8]) {
        let rate = self.variant.rate();
        let lanes = self.variant.rate_lanes();
        let rounds_b = self.variant.rounds_b();

        let mut offset = 0;
        while buf.len() - offset >= rate {
            for l in 0..lanes {
                let chunk = &mut buf[offset + l * 8..offset + l * 8 + 8];
                let ciphertext = state::load(chunk);
                let plaintext = self.state.lane(l) ^ ciphertext;
                state::store(plaintext, chunk);
                self.state.set_lane(l, ciphertext);
            }
            self.state.permute(rounds_b);
            offset += rate;
        }

        let tail = &mut buf[offset..];
        if lanes == 2 && tail.len() >= 8 {
            let (chunk0, rem) = tail.split_at_mut(8);
            let ciphertext = state::load(chunk0);
            let plaintext = self.state.lane(0) ^ ciphertext;
            state::store(plaintext, chunk0);
            self.state.set_lane(0, ciphertext);
            self.tail_decrypt(rem, 1);
        } else {
            self.tail_decrypt(tail, 0);
        }
    }

    fn process_final(&mut self) {
        match self.variant {
            AeadVariant::Ascon128 => {
                self.state.xor_lane(1, self.key.0[0]);
                self.state.xor_lane(2, self.key.0[1]);
            }
            AeadVariant::Ascon128a => {
                self.state.xor_lane(2, self.key.0[0]);
                self.state.xor_lane(3, self.key.0[1]);
            }
            AeadVariant::Ascon80pq => {
                self.state.xor_lane(1, keyrot(self.key.0[0], self.key.0[1]));
                self.state.xor_lane(2, keyrot(self.key.0[1], self.key.0[2]));
                self.state.xor_lane(3, keyrot(self.key.0[2], 0));
            }
        }
        self.state.permute(self.variant.rounds_a());
        match self.variant {
            AeadVariant::Ascon80pq => {
                self.state.xor_lane(3, self.key.0[1]);
                self.state.xor_lane(4, self.key.0[2]);
            }
            AeadVariant::Ascon128 | AeadVariant::Ascon128a => {
                self.state.xor_lane(3, self.key.0[0]);
                self.state.xor_lane(4, self.key.0[1]);
            }
        }
    }

    fn tag(&self) -> [u8; 16] {
        let mut tag = [0u8; 16];
        state::store(self.state.lane(3), &mut tag[..8]);
        state::store(self.state.lane(4), &mut tag[8..]);
        tag
    }

    fn encrypt_inplace(&mut self, buf: &mut [u8], ad: &[u8]) -> [u8; 16] {
        self.process_ad(ad);
        self.process_encrypt(buf);
        self.process_final();
        self.tag()
    }

    fn decrypt_inplace(&mut self, buf: &mut [u8], ad: &[u8], expected_tag: &[u8; 16]) -> bool {
        self.process_ad(ad);
        self.process_decrypt(buf);
        self.process_final();
        let tag = self.tag();
        tag.ct_eq(expected_tag).into()
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Error returned by [`aead_decrypt`]: either a length precondition was
/// violated before any cryptographic processing began, or the computed
/// tag did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadDecryptError {
    /// A caller-supplied buffer had the wrong length.
    Length(LengthError),
    /// Tag verification failed.
    Authentication(AeadError),
}

impl fmt::Display for AeadDecryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(e) => e.fmt(f),
            Self::Authentication(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for AeadDecryptError {}

fn check_lengths(variant: AeadVariant, key: &[u8]) -> Result<(), LengthError> {
    if key.len() != variant.key_len() {
        return Err(LengthError::new("key", variant.key_len(), key.len()));
    }
    Ok(())
}

/// Encrypt `plaintext` under `key`/`nonce`, authenticating `ad` alongside
/// it. Returns the ciphertext (same length as `plaintext`) and a 16-byte
/// tag.
///
/// # Errors
/// Returns [`LengthError`] if `key` does not match `variant`'s key length.
#[must_use = "discarding the tag defeats authentication"]
pub fn aead_encrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8; 16],
    ad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; 16]), LengthError> {
    check_lengths(variant, key)?;
    let mut core = Core::new(variant, key, nonce);
    let mut buf = plaintext.to_vec();
    let tag = core.encrypt_inplace(&mut buf, ad);
    Ok((buf, tag))
}

/// Encrypt `buf` in place, returning the tag. Equivalent to
/// [`aead_encrypt`] but avoids the extra allocation/copy when the caller
/// already owns a mutable plaintext buffer to overwrite.
///
/// # Errors
/// Returns [`LengthError`] if `key` does not match `variant`'s key length.
pub fn aead_encrypt_in_place(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8; 16],
    ad: &[u8],
    buf: &mut [u8],
) -> Result<[u8; 16], LengthError> {
    check_lengths(variant, key)?;
    let mut core = Core::new(variant, key, nonce);
    Ok(core.encrypt_inplace(buf, ad))
}

/// Decrypt `ciphertext` under `key`/`nonce`/`ad`/`tag`. On success returns
/// the plaintext; on any failure no partial plaintext is returned.
///
/// # Errors
/// Returns [`AeadDecryptError::Length`] if `key` does not match
/// `variant`'s key length, or [`AeadDecryptError::Authentication`] if the
/// tag does not verify.
pub fn aead_decrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8; 16],
    ad: &[u8],
    ciphertext: &[u8],
    tag: &[u8; 16],
) -> Result<Vec<u8>, AeadDecryptError> {
    check_lengths(variant, key).map_err(AeadDecryptError::Length)?;
    let mut core = Core::new(variant, key, nonce);
    let mut buf = ciphertext.to_vec();
    if core.decrypt_inplace(&mut buf, ad, tag) {
        Ok(buf)
    } else {
        // On failure, the caller must not be handed the garbage partial
        // plaintext: zero it before dropping.
        buf.zeroize();
        Err(AeadDecryptError::Authentication(AeadError))
    }
}

/// Decrypt `buf` in place. On success `buf` holds the plaintext and `Ok`
/// is returned; on authentication failure `buf`'s contents are
/// unspecified (the permutation already overwrote them with intermediate
/// values) and `Err` is returned — callers MUST treat `buf` as garbage
/// and zeroize it themselves in that case.
///
/// # Errors
/// Returns [`AeadDecryptError::Length`] if `key` does not match
/// `variant`'s key length, or [`AeadDecryptError::Authentication`] if the
/// tag does not verify.
pub fn aead_decrypt_in_place(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8; 16],
    ad: &[u8],
    buf: &mut [u8],
    tag: &[u8; 16],
) -> Result<(), AeadDecryptError> {
    check_lengths(variant, key).map_err(AeadDecryptError::Length)?;
    let mut core = Core::new(variant, key, nonce);
    if core.decrypt_inplace(buf, ad, tag) {
        Ok(())
    } else {
        Err(AeadDecryptError::Authentication(AeadError))
    }
}
