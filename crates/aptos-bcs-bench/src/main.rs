//! Benchmark for signing request decoding.
//!
//! Times decoding over a set of transaction vectors. Vectors are read from a
//! JSON file when a path is given, otherwise a built-in set is generated with
//! the builder API.
//!
//! Vector file format:
//!
//! ```json
//! [{ "name": "coin transfer", "hex": "b5e97d...", "status": 1 }]
//! ```

use std::fs;
use std::hint::black_box;
use std::time::Instant;

use aptos_bcs::{
    decode_with_status, AccountAddress, DecodeOptions, ParseStatus, TransactionBuilder, TypeArg,
    requires_blind_signing,
};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DECODE_ITERS: u32 = 100_000;

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    hex: String,
    /// Expected status code, checked before timing when present.
    #[serde(default)]
    status: Option<i16>,
}

struct Input {
    name: String,
    bytes: Vec<u8>,
    status: Option<i16>,
}

fn builtin_inputs() -> Vec<Input> {
    let sender = AccountAddress::new([0x78; 32]);
    let receiver = AccountAddress::new([0x09; 32]);
    let base = || {
        TransactionBuilder::new(sender)
            .sequence_number(27)
            .max_gas_amount(20_000)
            .gas_unit_price(100)
            .expiration_timestamp_secs(1_700_000_000)
            .chain_id(1)
    };

    let mut swap_args = vec![vec![0u8; 8]; 2];
    swap_args[0][0] = 1;

    vec![
        ("aptos_account::transfer", base().aptos_account_transfer(receiver, 1_000_000).build()),
        ("coin::transfer", base().coin_transfer(TypeArg::aptos_coin(), receiver, 42).build()),
        (
            "aptos_account::transfer_coins",
            base().transfer_coins(TypeArg::aptos_coin(), receiver, 42).build(),
        ),
        (
            "unknown entry function",
            base()
                .entry_function(
                    AccountAddress::new([0x19; 32]),
                    "scripts_v2",
                    "swap",
                    vec![TypeArg::aptos_coin()],
                    swap_args,
                )
                .build(),
        ),
        ("script", base().script(vec![0xa1; 64]).build()),
        ("plain message", b"Hello Ledger!".to_vec()),
    ]
    .into_iter()
    .map(|(name, bytes)| Input {
        name: name.to_string(),
        bytes,
        status: Some(ParseStatus::Ok.code()),
    })
    .collect()
}

fn load_inputs(path: &str) -> Result<Vec<Input>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let vectors: Vec<Vector> = serde_json::from_str(&json)?;
    vectors
        .into_iter()
        .map(|v| -> Result<Input, Box<dyn std::error::Error>> {
            let bytes = hex::decode(v.hex.trim_start_matches("0x"))?;
            Ok(Input {
                name: v.name,
                bytes,
                status: v.status,
            })
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading vectors from: {}", path);
            load_inputs(&path).expect("Failed to load vectors")
        }
        None => builtin_inputs(),
    };
    let options = DecodeOptions::default();

    println!("\n=== Vectors ({}) ===", inputs.len());
    let mut total_time = std::time::Duration::ZERO;
    let mut total_bytes = 0usize;

    for input in &inputs {
        let (status, tx) = decode_with_status(&input.bytes, &options);
        if let Some(expected) = input.status {
            if status.code() != expected {
                warn!(name = %input.name, ?status, expected, "unexpected status");
            }
        }
        let blind = tx.as_ref().map(requires_blind_signing);
        info!(name = %input.name, ?status, ?blind, "decoded");

        // Warmup
        for _ in 0..1_000 {
            black_box(decode_with_status(black_box(&input.bytes), &options));
        }

        let start = Instant::now();
        for _ in 0..DECODE_ITERS {
            black_box(decode_with_status(black_box(&input.bytes), &options));
        }
        let elapsed = start.elapsed();
        let per_decode = elapsed / DECODE_ITERS;
        total_time += elapsed;
        total_bytes += input.bytes.len() * DECODE_ITERS as usize;

        println!(
            "{:<32} {:>4} bytes  {:>10?}/decode  status {}",
            input.name,
            input.bytes.len(),
            per_decode,
            status.code()
        );
    }

    println!("\n=== Summary ===");
    println!("Decodes: {}", inputs.len() as u64 * DECODE_ITERS as u64);
    println!(
        "Throughput: {:.2} MB/s",
        (total_bytes as f64 / 1_000_000.0) / total_time.as_secs_f64()
    );
}
