//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_core::marshal::{blocks_from_bytes, blocks_to_bytes, packed_from_slice};
use aes_core::{expand_key, packed_key_from_slice, Aes128, Aes128Key, PackedBlock};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 packed-block CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "AES-128 ECB encryption over packed 128-bit blocks"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file of big-endian packed 16-byte blocks.
    Enc {
        /// Packed AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Encrypt on the calling thread instead of the rayon pool.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Encrypt packed blocks given as hex and print one ciphertext per line.
    Block {
        /// Packed AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Packed blocks, 32 hex characters each.
        #[arg(value_name = "BLOCK_HEX", required = true)]
        blocks: Vec<String>,
    },
    /// Print the expanded round keys.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Treat the key as a packed value instead of conventional bytes.
        #[arg(long, default_value_t = false)]
        packed: bool,
        /// Emit JSON instead of one hex round key per line.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Encrypt random blocks under a random key, in parallel and sequentially.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
            sequential,
        } => cmd_enc(&key_hex, &input, &output, sequential),
        Commands::Block { key_hex, blocks } => cmd_block(&key_hex, &blocks),
        Commands::Schedule {
            key_hex,
            packed,
            json,
        } => cmd_schedule(&key_hex, packed, json),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(
    key_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
    sequential: bool,
) -> Result<()> {
    let cipher = Aes128::from_packed_key(parse_key_hex(key_hex).context("parse key")?);
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let blocks = blocks_from_bytes(&data)
        .with_context(|| format!("split {} into blocks", input_path.display()))?;

    let encrypted = if sequential {
        cipher.encrypt_blocks(&blocks)
    } else {
        cipher.par_encrypt_blocks(&blocks)
    };
    log::info!(
        "encrypted {} block(s) from {}",
        encrypted.len(),
        input_path.display()
    );

    let bytes = blocks_to_bytes(&encrypted);
    fs::write(output_path, bytes).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_block(key_hex: &str, blocks_hex: &[String]) -> Result<()> {
    let cipher = Aes128::from_packed_key(parse_key_hex(key_hex).context("parse key")?);
    let blocks = blocks_hex
        .iter()
        .map(|block| parse_block_hex(block).with_context(|| format!("parse block `{block}`")))
        .collect::<Result<Vec<_>>>()?;
    for block in cipher.encrypt_blocks(&blocks) {
        println!("{}", hex::encode(block.to_be_bytes()));
    }
    Ok(())
}

fn cmd_schedule(key_hex: &str, packed: bool, json: bool) -> Result<()> {
    let key = if packed {
        Aes128Key::from_packed(parse_key_hex(key_hex).context("parse key")?)
    } else {
        let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
        Aes128Key::try_from(bytes.as_slice())?
    };
    let round_keys = expand_key(&key);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&round_keys).context("serialize schedule")?
        );
    } else {
        for (round, round_key) in round_keys.iter().enumerate() {
            println!("{round:2}: {}", hex::encode(round_key));
        }
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = u128::from_be_bytes(key_bytes);
    let cipher = Aes128::from_packed_key(key);

    let blocks: Vec<PackedBlock> = (0..4)
        .map(|_| {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            u128::from_be_bytes(bytes)
        })
        .collect();

    let parallel = cipher.par_encrypt_blocks(&blocks);
    let sequential = cipher.encrypt_blocks(&blocks);

    println!("demo key: {}", hex::encode(key_bytes));
    for (plain, ct) in blocks.iter().zip(parallel.iter()) {
        println!(
            "{} -> {}",
            hex::encode(plain.to_be_bytes()),
            hex::encode(ct.to_be_bytes())
        );
    }
    if parallel != sequential {
        bail!("parallel and sequential batches disagree");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<u128> {
    let bytes = hex::decode(hex_str.trim()).context("decode hex")?;
    Ok(packed_key_from_slice(&bytes)?)
}

fn parse_block_hex(hex_str: &str) -> Result<PackedBlock> {
    let bytes = hex::decode(hex_str.trim()).context("decode hex")?;
    Ok(packed_from_slice(&bytes)?)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
