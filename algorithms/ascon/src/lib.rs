#![cfg_attr(not(feature = "std"), no_std)]

//! # Ascon
//!
//! The Ascon family of lightweight cryptographic primitives, built around
//! a single 320-bit permutation: authenticated encryption (Ascon-128,
//! Ascon-128a, Ascon-80pq), fixed-output hashing and extendable-output
//! hashing (Ascon-Hash/Hasha, Ascon-Xof/Xofa), and keyed MAC/PRF
//! constructions (Ascon-Mac, Ascon-Prf, Ascon-PrfShort).

//! # Usage
//! ```rust
//! use ascon::{aead_encrypt, aead_decrypt, AeadVariant};
//!
//! let key = [0u8; 16];
//! let nonce = [0u8; 16];
//! let (ciphertext, tag) =
//!     aead_encrypt(AeadVariant::Ascon128, &key, &nonce, b"header", b"payload").unwrap();
//! let plaintext =
//!     aead_decrypt(AeadVariant::Ascon128, &key, &nonce, b"header", &ciphertext, &tag).unwrap();
//! assert_eq!(plaintext, b"payload");
//!
//! let digest = ascon::hash(ascon::HashVariant::Hash, b"message");
//! println!("{digest:x?}");
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod error;
mod params;
mod state;

mod aead;
mod hash;
mod mac;

#[cfg(feature = "digest-trait")]
mod digest_impl;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
#[cfg(feature = "digest-trait")]
pub use digest_impl::{AsconHash, AsconHasha, AsconXof, AsconXofReader, AsconXofa};

pub use aead::{
    aead_decrypt, aead_decrypt_in_place, aead_encrypt, aead_encrypt_in_place, AeadDecryptError,
};
pub use error::{AeadError, LengthError};
pub use hash::{hash, xof, HashState, XofReader, XofState};
pub use mac::{mac, prf, prf_short};
pub use params::{AeadVariant, HashVariant, XofVariant};
