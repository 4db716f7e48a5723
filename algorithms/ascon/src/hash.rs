//! Ascon-Hash / Ascon-Hasha / Ascon-Xof / Ascon-Xofa.
//!
//! One-shot `hash`/`xof` plus a streaming `HashState`/`XofState` pair: the
//! sponge's absorb/squeeze split is a strict linear duplex with no tree
//! mode, so incremental absorption is just buffering input to the next
//! rate boundary as it arrives.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::params::{HashVariant, XofVariant};
use crate::state::{self, State};

/// Absorb `message` into `state` at rate 8, consuming it fully. No
/// permutation follows the final (padded) block.
///
/// Shared with `mac` (Ascon-Mac/Ascon-Prf absorb their message exactly as
/// in hashing).
pub(crate) fn absorb(state: &mut State, rounds_b: u8, message: &[u8]) {
    let mut offset = 0;
    while message.len() - offset >= 8 {
        state.xor_lane(0, state::load(&message[offset..offset + 8]));
        state.permute(rounds_b);
        offset += 8;
    }
    let tail = &message[offset..];
    state.xor_lane(0, state::pad(tail.len()));
    if !tail.is_empty() {
        state.xor_lane(0, state::load(tail));
    }
}

/// Squeeze `out.len()` bytes from `state`. The first squeeze call always
/// runs a full 12-round permutation regardless of the variant's
/// `rounds_b`; subsequent blocks alternate `rounds_b` and emission.
pub(crate) fn squeeze(state: &mut State, rounds_b: u8, mut out: &mut [u8]) {
    state.permute(12);
    loop {
        let n = out.len().min(8);
        let lane_bytes = state.lane(0).to_be_bytes();
        out[..n].copy_from_slice(&lane_bytes[..n]);
        out = &mut out[n..];
        if out.is_empty() {
            break;
        }
        state.permute(rounds_b);
    }
}

/// Compute a fixed 32-byte Ascon-Hash or Ascon-Hasha digest of `message`.
#[must_use]
pub fn hash(variant: HashVariant, message: &[u8]) -> [u8; 32] {
    let mut state = State::from_lanes(variant.iv());
    absorb(&mut state, variant.rounds_b(), message);
    let mut out = [0u8; 32];
    squeeze(&mut state, variant.rounds_b(), &mut out);
    out
}

/// Compute `out_len` bytes of Ascon-Xof or Ascon-Xofa output for
/// `message`.
#[must_use]
pub fn xof(variant: XofVariant, message: &[u8], out_len: usize) -> Vec<u8> {
    let mut state = State::from_lanes(variant.iv());
    absorb(&mut state, variant.rounds_b(), message);
    let mut out = vec![0u8; out_len];
    squeeze(&mut state, variant.rounds_b(), &mut out);
    out
}

// =============================================================================
// STREAMING
// =============================================================================

/// Incremental Ascon-Hash/Ascon-Hasha. Produces byte-identical output to
/// [`hash`] for the same concatenated input.
pub struct HashState {
    variant: HashVariant,
    state: State,
    buffer: Vec<u8>,
}

impl HashState {
    /// Start a new streaming hash of the given variant.
    #[must_use]
    pub fn new(variant: HashVariant) -> Self {
        Self {
            variant,
            state: State::from_lanes(variant.iv()),
            buffer: Vec::new(),
        }
    }

    /// Absorb more input. May be called any number of times before
    /// [`finalize`](Self::finalize).
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        let rounds_b = self.variant.rounds_b();
        let mut offset = 0;
        while self.buffer.len() - offset >= 8 {
            self.state
                .xor_lane(0, state::load(&self.buffer[offset..offset + 8]));
            self.state.permute(rounds_b);
            offset += 8;
        }
        self.buffer.drain(..offset);
    }

    /// Finish absorbing and squeeze the fixed 32-byte digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; 32] {
        let rounds_b = self.variant.rounds_b();
        self.state.xor_lane(0, state::pad(self.buffer.len()));
        if !self.buffer.is_empty() {
            self.state.xor_lane(0, state::load(&self.buffer));
        }
        let mut out = [0u8; 32];
        squeeze(&mut self.state, rounds_b, &mut out);
        out
    }

    /// Reset to the initial state for the same variant, for reuse.
    pub fn reset(&mut self) {
        self.state = State::from_lanes(self.variant.iv());
        self.buffer.clear();
    }
}

/// Incremental Ascon-Xof/Ascon-Xofa. The absorb side streams; the squeeze
/// side, like [`xof`], is one-shot (the spec's streaming Design Note only
/// requires incremental *absorption*).
pub struct XofState {
    variant: XofVariant,
    state: State,
    buffer: Vec<u8>,
}

impl XofState {
    /// Start a new streaming XOF of the given variant.
    #[must_use]
    pub fn new(variant: XofVariant) -> Self {
        Self {
            variant,
            state: State::from_lanes(variant.iv()),
            buffer: Vec::new(),
        }
    }

    /// Absorb more input. May be called any number of times before
    /// [`finalize`](Self::finalize).
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        let rounds_b = self.variant.rounds_b();
        let mut offset = 0;
        while self.buffer.len() - offset >= 8 {
            self.state
                .xor_lane(0, state::load(&self.buffer[offset..offset + 8]));
            self.state.permute(rounds_b);
            offset += 8;
        }
        self.buffer.drain(..offset);
    }

    /// Finish absorbing and squeeze `out_len` bytes of output.
    #[must_use]
    pub fn finalize(mut self, out_len: usize) -> Vec<u8> {
        let rounds_b = self.variant.rounds_b();
        self.state.xor_lane(0, state::pad(self.buffer.len()));
        if !self.buffer.is_empty() {
            self.state.xor_lane(0, state::load(&self.buffer));
        }
        let mut out = vec![0u8; out_len];
        squeeze(&mut self.state, rounds_b, &mut out);
        out
    }

    /// Finish absorbing and return an incremental [`XofReader`] over the
    /// squeezed output, for callers that don't know the desired output
    /// length up front, or want it delivered in chunks not aligned to the
    /// rate. Produces byte-identical output to [`finalize`](Self::finalize)
    /// for equal-length reads.
    #[must_use]
    pub fn into_reader(mut self) -> XofReader {
        self.state.xor_lane(0, state::pad(self.buffer.len()));
        if !self.buffer.is_empty() {
            self.state.xor_lane(0, state::load(&self.buffer));
        }
        XofReader::new(self.state, self.variant.rounds_b())
    }
}

/// An incremental reader over Ascon-Xof/Ascon-Xofa squeezed output,
/// produced by [`XofState::into_reader`]. Each [`read`](Self::read) call
/// serves as many bytes as the caller asks for, squeezing additional
/// rate-sized blocks from the permutation as needed.
pub struct XofReader {
    state: State,
    rounds_b: u8,
    started: bool,
    leftover: Vec<u8>,
}

impl XofReader {
    fn new(state: State, rounds_b: u8) -> Self {
        Self {
            state,
            rounds_b,
            started: false,
            leftover: Vec::new(),
        }
    }

    /// Fill `buf` with the next `buf.len()` bytes of squeezed output.
    pub fn read(&mut self, buf: &mut [u8]) {
        let mut buf = buf;
        while !buf.is_empty() {
            if self.leftover.is_empty() {
                if self.started {
                    self.state.permute(self.rounds_b);
                } else {
                    self.state.permute(12);
                    self.started = true;
                }
                self.leftover = self.state.lane(0).to_be_bytes().to_vec();
            }
            let n = buf.len().min(self.leftover.len());
            buf[..n].copy_from_slice(&self.leftover[..n]);
            self.leftover.drain(..n);
            buf = &mut buf[n..];
        }
    }
}
