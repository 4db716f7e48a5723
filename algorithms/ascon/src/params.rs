//! Parameter set registry.
//!
//! Ascon has a closed, small set of variants, so a `match`-driven accessor
//! on a plain enum is used here rather than a generic `Parameters` trait:
//! it reads the same whether there are two variants or five, and every
//! table below is copy-pasted straight out of the primitive's own
//! specification.

/// AEAD parameter set, selecting between Ascon-128, Ascon-128a and
/// Ascon-80pq.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeadVariant {
    /// 16-byte key, 8-byte rate, 12/6 rounds.
    Ascon128,
    /// 16-byte key, 16-byte rate, 12/8 rounds.
    Ascon128a,
    /// 20-byte key (post-quantum margin), 8-byte rate, 12/6 rounds.
    Ascon80pq,
}

impl AeadVariant {
    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Ascon128 | Self::Ascon128a => 16,
            Self::Ascon80pq => 20,
        }
    }

    /// Rate in bytes: how much plaintext/ciphertext/AD is processed per
    /// permutation call.
    #[must_use]
    pub const fn rate(self) -> usize {
        match self {
            Self::Ascon128 | Self::Ascon80pq => 8,
            Self::Ascon128a => 16,
        }
    }

    /// Number of lanes making up one rate-sized block (1 or 2).
    #[must_use]
    pub const fn rate_lanes(self) -> usize {
        self.rate() / 8
    }

    /// Rounds used for initialization and finalization.
    #[must_use]
    pub const fn rounds_a(self) -> u8 {
        12
    }

    /// Rounds used for associated-data and plaintext/ciphertext block
    /// processing.
    #[must_use]
    pub const fn rounds_b(self) -> u8 {
        match self {
            Self::Ascon128 | Self::Ascon80pq => 6,
            Self::Ascon128a => 8,
        }
    }

    /// Tag length in bytes (fixed across all three variants).
    #[must_use]
    pub const fn tag_len(self) -> usize {
        16
    }

    /// Lane-0 IV constant for the 16-byte-key variants. Ascon-80pq builds
    /// its lane 0 from the key itself (see `aead::Core::new`) and has no
    /// fixed IV constant here.
    pub(crate) const fn iv_lane0(self) -> u64 {
        match self {
            Self::Ascon128 => 0x8040_0c06_0000_0000,
            Self::Ascon128a => 0x8080_0c08_0000_0000,
            Self::Ascon80pq => 0xa040_0c06_0000_0000,
        }
    }
}

/// Fixed-output hash parameter set: Ascon-Hash or Ascon-Hasha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashVariant {
    /// 32-byte digest, 12/12 rounds.
    Hash,
    /// 32-byte digest, 12/8 rounds (faster, reduced block-processing
    /// rounds).
    Hasha,
}

impl HashVariant {
    /// Rate in bytes (always 8 for the hash/XOF family).
    #[must_use]
    pub const fn rate(self) -> usize {
        8
    }

    /// Rounds used for absorbing full blocks and all squeeze blocks after
    /// the first.
    #[must_use]
    pub const fn rounds_b(self) -> u8 {
        match self {
            Self::Hash => 12,
            Self::Hasha => 8,
        }
    }

    /// Fixed output length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        32
    }

    /// The five-lane initial value for this variant: the baked
    /// post-permutation state produced by the reference's
    /// `ascon_inithash`, reproduced here as a literal constant (see
    /// `DESIGN.md` for the derivation).
    pub(crate) const fn iv(self) -> [u64; 5] {
        match self {
            Self::Hash => [
                0xee93_98aa_db67_f03d,
                0x8bb2_1831_c60f_1002,
                0xb48a_92db_98d5_da62,
                0x4318_9921_b8f8_e3e8,
                0x348f_a5c9_d525_e140,
            ],
            Self::Hasha => [
                0x0147_0194_fc65_28a6,
                0x738e_c38a_c0ad_ffa7,
                0x2ec8_e329_6c76_384c,
                0xd62e_8336_f51c_9b89,
                0x3361_2c6a_6df8_2519,
            ],
        }
    }
}

/// Extendable-output parameter set: Ascon-Xof or Ascon-Xofa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XofVariant {
    /// 12/12 rounds.
    Xof,
    /// 12/8 rounds.
    Xofa,
}

impl XofVariant {
    /// Rate in bytes (always 8 for the hash/XOF family).
    #[must_use]
    pub const fn rate(self) -> usize {
        8
    }

    /// Rounds used for absorbing full blocks and all squeeze blocks after
    /// the first.
    #[must_use]
    pub const fn rounds_b(self) -> u8 {
        match self {
            Self::Xof => 12,
            Self::Xofa => 8,
        }
    }

    /// The five-lane initial value for this variant (see
    /// [`HashVariant::iv`] for why this is a literal table rather than a
    /// derived one).
    pub(crate) const fn iv(self) -> [u64; 5] {
        match self {
            Self::Xof => [
                0xb57e_273b_814c_d416,
                0x2b51_0425_62ae_2420,
                0x66a3_a776_8ddf_2218,
                0x5aad_0a7a_8153_650c,
                0x4f3e_0e32_5394_93b6,
            ],
            Self::Xofa => [
                0x4490_6568_b77b_9832,
                0xcd8d_6cae_5345_5532,
                0xf7b5_2127_5642_2129,
                0x2468_85e1_de0d_225b,
                0xbb9e_5db9_92c4_c5cd,
            ],
        }
    }
}

/// Rounds and rate used by the "absorb a key, absorb a message exactly as
/// in hashing, then squeeze" Mac/Prf construction: same rate and full
/// round count as Ascon-Hash, not the reduced-round Ascon-Hasha schedule.
pub(crate) const MAC_ROUNDS_A: u8 = 12;
pub(crate) const MAC_ROUNDS_B: u8 = 12;
pub(crate) const MAC_RATE: usize = 8;

/// Dedicated lane-0 IVs for the Mac/Prf/PrfShort family, each a
/// variant-specific constant with no shared derivation from the AEAD IVs
/// beyond the same `0x80 | rate_bits | rounds_a | rounds_b | mode | 0 |
/// tag_bits` byte-field layout, with a mode byte added to keep the three
/// constructions distinct. See `DESIGN.md` for the derivation.
pub(crate) const MAC_IV: u64 = 0x8040_0c0c_0100_0080;
/// Dedicated lane-0 IV for Ascon-Prf (arbitrary-length output).
pub(crate) const PRF_IV: u64 = 0x8040_0c0c_0000_0000;
/// Dedicated lane-0 IV for Ascon-PrfShort.
pub(crate) const PRFSHORT_IV: u64 = 0x8040_0c0c_0200_0080;
