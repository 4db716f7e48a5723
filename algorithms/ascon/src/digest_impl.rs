//! Bridges to the `digest` crate, so Ascon's hash and XOF types interoperate
//! with the rest of the RustCrypto ecosystem. One zero-sized wrapper type
//! per algorithm, matching how the `digest` crate's other implementers
//! (e.g. `sha2::Sha256`, `sha3::Shake128`) are structured — `HashState`/
//! `XofState` themselves stay variant-generic for the crate's own
//! streaming API.

use digest::{
    typenum::U32, ExtendableOutput, FixedOutput, HashMarker, Output, OutputSizeUser, Reset,
    Update, XofReader as DigestXofReader,
};

use crate::hash::{HashState, XofReader, XofState};
use crate::params::{HashVariant, XofVariant};

/// `digest`-compatible Ascon-Hash.
#[derive(Clone)]
pub struct AsconHash(HashStateInner);

/// `digest`-compatible Ascon-Hasha.
#[derive(Clone)]
pub struct AsconHasha(HashStateInner);

// `HashState` itself isn't `Clone` (it owns a `Vec` buffer we'd rather not
// duplicate implicitly); these wrappers re-derive from variant + buffered
// bytes instead of cloning permutation state directly.
#[derive(Clone)]
struct HashStateInner {
    variant: HashVariant,
    buffered: alloc_vec::Vec<u8>,
}

#[cfg(feature = "std")]
mod alloc_vec {
    pub use std::vec::Vec;
}
#[cfg(not(feature = "std"))]
mod alloc_vec {
    pub use alloc::vec::Vec;
}

impl HashStateInner {
    fn new(variant: HashVariant) -> Self {
        Self {
            variant,
            buffered: alloc_vec::Vec::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.buffered.extend_from_slice(data);
    }

    fn finalize(&self) -> [u8; 32] {
        let mut state = HashState::new(self.variant);
        state.update(&self.buffered);
        state.finalize()
    }
}

macro_rules! impl_digest_bridge {
    ($ty:ident, $variant:expr) => {
        impl $ty {
            /// Start a new hasher.
            #[must_use]
            pub fn new() -> Self {
                Self(HashStateInner::new($variant))
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl OutputSizeUser for $ty {
            type OutputSize = U32;
        }

        impl Update for $ty {
            fn update(&mut self, data: &[u8]) {
                self.0.update(data);
            }
        }

        impl FixedOutput for $ty {
            fn finalize_into(self, out: &mut Output<Self>) {
                out.copy_from_slice(&self.0.finalize());
            }
        }

        impl Reset for $ty {
            fn reset(&mut self) {
                self.0.buffered.clear();
            }
        }

        impl HashMarker for $ty {}
    };
}

impl_digest_bridge!(AsconHash, HashVariant::Hash);
impl_digest_bridge!(AsconHasha, HashVariant::Hasha);

// =============================================================================
// EXTENDABLE OUTPUT (XOF)
// =============================================================================

/// `digest`-compatible Ascon-Xof.
#[derive(Clone)]
pub struct AsconXof(XofStateInner);

/// `digest`-compatible Ascon-Xofa.
#[derive(Clone)]
pub struct AsconXofa(XofStateInner);

#[derive(Clone)]
struct XofStateInner {
    variant: XofVariant,
    buffered: alloc_vec::Vec<u8>,
}

impl XofStateInner {
    fn new(variant: XofVariant) -> Self {
        Self {
            variant,
            buffered: alloc_vec::Vec::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.buffered.extend_from_slice(data);
    }

    fn finalize_xof(&self) -> XofReader {
        let mut state = XofState::new(self.variant);
        state.update(&self.buffered);
        state.into_reader()
    }
}

/// `digest`-compatible reader over Ascon-Xof/Ascon-Xofa squeezed output,
/// returned by [`ExtendableOutput::finalize_xof`].
pub struct AsconXofReader(XofReader);

impl DigestXofReader for AsconXofReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.0.read(buffer);
    }
}

macro_rules! impl_xof_bridge {
    ($ty:ident, $variant:expr) => {
        impl $ty {
            /// Start a new XOF hasher.
            #[must_use]
            pub fn new() -> Self {
                Self(XofStateInner::new($variant))
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Update for $ty {
            fn update(&mut self, data: &[u8]) {
                self.0.update(data);
            }
        }

        impl ExtendableOutput for $ty {
            type Reader = AsconXofReader;

            fn finalize_xof(self) -> Self::Reader {
                AsconXofReader(self.0.finalize_xof())
            }
        }

        impl Reset for $ty {
            fn reset(&mut self) {
                self.0.buffered.clear();
            }
        }

        impl HashMarker for $ty {}
    };
}

impl_xof_bridge!(AsconXof, XofVariant::Xof);
impl_xof_bridge!(AsconXofa, XofVariant::Xofa);
