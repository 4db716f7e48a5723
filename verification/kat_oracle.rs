//! # Ascon KAT Oracle
//!
//! Command-line oracle over the `ascon` crate: given hex-encoded inputs,
//! runs one primitive and prints the hex-encoded output. Used to check
//! this implementation's output against an external known-answer-test
//! suite without writing a bespoke harness per language.

use ascon::{
    aead_decrypt, aead_encrypt, hash, mac, prf, prf_short, xof, AeadVariant, HashVariant,
    XofVariant,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ascon-oracle", about = "Known-answer-test oracle for Ascon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, ValueEnum)]
enum AeadArg {
    Ascon128,
    Ascon128a,
    Ascon80pq,
}

impl From<AeadArg> for AeadVariant {
    fn from(v: AeadArg) -> Self {
        match v {
            AeadArg::Ascon128 => Self::Ascon128,
            AeadArg::Ascon128a => Self::Ascon128a,
            AeadArg::Ascon80pq => Self::Ascon80pq,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum HashArg {
    Hash,
    Hasha,
}

impl From<HashArg> for HashVariant {
    fn from(v: HashArg) -> Self {
        match v {
            HashArg::Hash => Self::Hash,
            HashArg::Hasha => Self::Hasha,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum XofArg {
    Xof,
    Xofa,
}

impl From<XofArg> for XofVariant {
    fn from(v: XofArg) -> Self {
        match v {
            XofArg::Xof => Self::Xof,
            XofArg::Xofa => Self::Xofa,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt and print `ciphertext || tag` as one hex string.
    AeadEncrypt {
        #[arg(value_enum)]
        variant: AeadArg,
        #[arg(long)]
        key: String,
        #[arg(long)]
        nonce: String,
        #[arg(long, default_value = "")]
        ad: String,
        #[arg(long, default_value = "")]
        plaintext: String,
    },
    /// Decrypt `ciphertext || tag` and print the plaintext, or fail loudly
    /// on an authentication error.
    AeadDecrypt {
        #[arg(value_enum)]
        variant: AeadArg,
        #[arg(long)]
        key: String,
        #[arg(long)]
        nonce: String,
        #[arg(long, default_value = "")]
        ad: String,
        #[arg(long)]
        ciphertext: String,
        #[arg(long)]
        tag: String,
    },
    /// Print the fixed-length digest.
    Hash {
        #[arg(value_enum)]
        variant: HashArg,
        #[arg(long)]
        message: String,
    },
    /// Print `out_len` bytes of extendable output.
    Xof {
        #[arg(value_enum)]
        variant: XofArg,
        #[arg(long)]
        message: String,
        #[arg(long)]
        out_len: usize,
    },
    /// Print the 16-byte Ascon-Mac tag.
    Mac {
        #[arg(long)]
        key: String,
        #[arg(long)]
        message: String,
    },
    /// Print `out_len` bytes of Ascon-Prf output.
    Prf {
        #[arg(long)]
        key: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        out_len: usize,
    },
    /// Print the 16-byte Ascon-PrfShort tag.
    PrfShort {
        #[arg(long)]
        key: String,
        #[arg(long)]
        message: String,
    },
}

fn decode(s: &str) -> anyhow::Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

fn fixed_key(bytes: &[u8]) -> anyhow::Result<[u8; 16]> {
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected a 16-byte key, got {} bytes", bytes.len()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::AeadEncrypt {
            variant,
            key,
            nonce,
            ad,
            plaintext,
        } => {
            let key = decode(&key)?;
            let nonce: [u8; 16] = decode(&nonce)?
                .try_into()
                .map_err(|_| anyhow::anyhow!("nonce must be 16 bytes"))?;
            let ad = decode(&ad)?;
            let plaintext = decode(&plaintext)?;
            let (ct, tag) = aead_encrypt(variant.into(), &key, &nonce, &ad, &plaintext)?;
            println!("{}{}", hex::encode(ct), hex::encode(tag));
        }
        Command::AeadDecrypt {
            variant,
            key,
            nonce,
            ad,
            ciphertext,
            tag,
        } => {
            let key = decode(&key)?;
            let nonce: [u8; 16] = decode(&nonce)?
                .try_into()
                .map_err(|_| anyhow::anyhow!("nonce must be 16 bytes"))?;
            let ad = decode(&ad)?;
            let ciphertext = decode(&ciphertext)?;
            let tag: [u8; 16] = decode(&tag)?
                .try_into()
                .map_err(|_| anyhow::anyhow!("tag must be 16 bytes"))?;
            let pt = aead_decrypt(variant.into(), &key, &nonce, &ad, &ciphertext, &tag)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("{}", hex::encode(pt));
        }
        Command::Hash { variant, message } => {
            let message = decode(&message)?;
            println!("{}", hex::encode(hash(variant.into(), &message)));
        }
        Command::Xof {
            variant,
            message,
            out_len,
        } => {
            let message = decode(&message)?;
            println!("{}", hex::encode(xof(variant.into(), &message, out_len)));
        }
        Command::Mac { key, message } => {
            let key = fixed_key(&decode(&key)?)?;
            let message = decode(&message)?;
            println!("{}", hex::encode(mac(&key, &message)));
        }
        Command::Prf {
            key,
            message,
            out_len,
        } => {
            let key = fixed_key(&decode(&key)?)?;
            let message = decode(&message)?;
            println!("{}", hex::encode(prf(&key, &message, out_len)));
        }
        Command::PrfShort { key, message } => {
            let key = fixed_key(&decode(&key)?)?;
            let message = decode(&message)?;
            let tag = prf_short(&key, &message).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("{}", hex::encode(tag));
        }
    }

    Ok(())
}
