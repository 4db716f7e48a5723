//! Ascon-Mac / Ascon-Prf / Ascon-PrfShort.
//!
//! Mac and Prf reuse the hash module's absorb/squeeze core verbatim (the
//! only difference from Ascon-Hash is the dedicated keyed initialization);
//! PrfShort is its own single-permutation construction for messages of at
//! most 16 bytes.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::LengthError;
use crate::hash;
use crate::params::{MAC_IV, MAC_RATE, MAC_ROUNDS_A, MAC_ROUNDS_B, PRFSHORT_IV, PRF_IV};
use crate::state::{self, State};

fn init_keyed(iv: u64, key: &[u8; 16]) -> State {
    let k0 = state::load(&key[..8]);
    let k1 = state::load(&key[8..]);
    let mut state = State::from_lanes([iv, k0, k1, 0, 0]);
    state.permute(MAC_ROUNDS_A);
    state
}

/// Compute the 16-byte Ascon-Mac tag of `message` under `key`.
#[must_use]
pub fn mac(key: &[u8; 16], message: &[u8]) -> [u8; 16] {
    let mut state = init_keyed(MAC_IV, key);
    hash::absorb(&mut state, MAC_ROUNDS_B, message);
    let mut out = [0u8; 16];
    hash::squeeze(&mut state, MAC_ROUNDS_B, &mut out);
    debug_assert_eq!(MAC_RATE, 8);
    out
}

/// Compute `out_len` bytes of Ascon-Prf output for `message` under `key`.
#[must_use]
pub fn prf(key: &[u8; 16], message: &[u8], out_len: usize) -> Vec<u8> {
    let mut state = init_keyed(PRF_IV, key);
    hash::absorb(&mut state, MAC_ROUNDS_B, message);
    let mut out = vec![0u8; out_len];
    hash::squeeze(&mut state, MAC_ROUNDS_B, &mut out);
    out
}

/// `PRFS_MLEN`: bit-interleaved encoding of a 0..=16 length into the
/// high bits of the PrfShort IV lane, per the Ascon specification's
/// PrfShort construction.
fn prfs_mlen(len: usize) -> u64 {
    let len = len as u64;
    ((len & 1) << 30)
        | ((len & 2) << 37)
        | ((len & 4) << 44)
        | ((len & 8) << 51)
        | ((len & 16) << 58)
}

/// Load a message of at most 16 bytes into two padded lanes, the same
/// pad10* convention used everywhere else in the crate. A 16-byte message
/// fills both lanes exactly and has no room left for a pad marker; its
/// length is already unambiguous from `PRFS_MLEN`, so no marker is added
/// in that one case (see `DESIGN.md`).
fn load_padded_two_lanes(message: &[u8]) -> (u64, u64) {
    debug_assert!(message.len() <= 16);
    if message.len() == 16 {
        (state::load(&message[..8]), state::load(&message[8..]))
    } else if message.len() >= 8 {
        let lane0 = state::load(&message[..8]);
        let rem = &message[8..];
        let mut lane1 = state::pad(rem.len());
        if !rem.is_empty() {
            lane1 ^= state::load(rem);
        }
        (lane0, lane1)
    } else {
        let mut lane0 = state::pad(message.len());
        if !message.is_empty() {
            lane0 ^= state::load(message);
        }
        (lane0, 0)
    }
}

/// Compute the 16-byte Ascon-PrfShort tag of `message` (at most 16 bytes)
/// under `key`.
///
/// # Errors
/// Returns [`LengthError`] if `message` is longer than 16 bytes.
pub fn prf_short(key: &[u8; 16], message: &[u8]) -> Result<[u8; 16], LengthError> {
    if message.len() > 16 {
        return Err(LengthError::new("message", 16, message.len()));
    }
    let k0 = state::load(&key[..8]);
    let k1 = state::load(&key[8..]);
    let (m0, m1) = load_padded_two_lanes(message);
    let iv = PRFSHORT_IV | prfs_mlen(message.len());

    let mut state = State::from_lanes([iv, k0, k1, m0, m1]);
    state.permute(12);

    let mut out = [0u8; 16];
    state::store(state.lane(3) ^ k0, &mut out[..8]);
    state::store(state.lane(4) ^ k1, &mut out[8..]);
    Ok(out)
}
