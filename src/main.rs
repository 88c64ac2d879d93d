//! ceelo-verify - independent audit tool for Cee-Lo rounds
//!
//! Lets anyone re-run the fairness pipeline from the public pieces of a
//! round: commit to a seed, derive and resolve a roll, verify a full
//! commit/reveal pair, or recompute a settlement. Output is JSON so the
//! records can be diffed against what a server published.

use clap::{Parser, Subcommand};
use serde::Serialize;

use ceelo::{
    commit, derive, derive_indexed, resolve, settle, verify, Chips, DiceTriple, Error, HouseEdge,
    Outcome, PendingSeed, Result,
};

#[derive(Parser)]
#[command(name = "ceelo-verify", version, about = "Verify provably-fair Cee-Lo rounds")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seed (or hash a supplied one) and print its commitment
    Commit {
        /// Hex-encoded seed; generated from OS entropy when omitted
        #[arg(long)]
        seed: Option<String>,
    },

    /// Derive and resolve the roll for a seed
    Roll {
        /// Hex-encoded seed
        seed: String,

        /// Reroll-chain index; omits the index domain when not given
        #[arg(long)]
        index: Option<u64>,
    },

    /// Re-check a full round: commitment, seed, dice, outcome
    Verify {
        /// Hex-encoded 32-byte commitment as published before the round
        commitment: String,

        /// Hex-encoded seed as revealed after the round
        seed: String,
    },

    /// Recompute the settlement for a stake and win/lose result
    Settle {
        /// Stake in smallest currency units
        stake: u64,

        /// Whether the player won
        #[arg(long)]
        won: bool,

        /// Fractional house edge, e.g. 0.03
        #[arg(long, default_value_t = ceelo::protocol::constants::DEFAULT_HOUSE_EDGE)]
        edge: f64,
    },
}

#[derive(Serialize)]
struct CommitOutput {
    seed: String,
    commitment: String,
}

#[derive(Serialize)]
struct RollOutput {
    seed: String,
    index: Option<u64>,
    dice: DiceTriple,
    outcome: Outcome,
    rank: i16,
}

#[derive(Serialize)]
struct VerifyOutput {
    commitment_valid: bool,
    dice: Option<DiceTriple>,
    outcome: Option<Outcome>,
}

fn decode_hex(label: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidInput(format!("Invalid {} hex: {}", label, e)))
}

fn decode_commitment(value: &str) -> Result<[u8; 32]> {
    let bytes = decode_hex("commitment", value)?;
    bytes
        .try_into()
        .map_err(|_| Error::InvalidInput("Commitment must be 32 bytes".to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Commit { seed } => {
            let seed_bytes = match seed {
                Some(s) => decode_hex("seed", &s)?,
                None => PendingSeed::generate().into_seed().to_vec(),
            };
            print_json(&CommitOutput {
                commitment: hex::encode(commit(&seed_bytes)),
                seed: hex::encode(seed_bytes),
            })?;
        }

        Commands::Roll { seed, index } => {
            let seed_bytes = decode_hex("seed", &seed)?;
            let dice = match index {
                Some(i) => derive_indexed(&seed_bytes, i),
                None => derive(&seed_bytes),
            };
            let outcome = resolve(dice)?;
            print_json(&RollOutput {
                seed,
                index,
                dice,
                outcome,
                rank: outcome.rank(),
            })?;
        }

        Commands::Verify { commitment, seed } => {
            let commitment = decode_commitment(&commitment)?;
            let seed_bytes = decode_hex("seed", &seed)?;

            let commitment_valid = verify(&commitment, &seed_bytes);
            let output = if commitment_valid {
                let dice = derive(&seed_bytes);
                VerifyOutput {
                    commitment_valid,
                    dice: Some(dice),
                    outcome: Some(resolve(dice)?),
                }
            } else {
                VerifyOutput {
                    commitment_valid,
                    dice: None,
                    outcome: None,
                }
            };
            print_json(&output)?;

            if !commitment_valid {
                // A failed verification is the whole point of the tool;
                // make it visible to scripts
                std::process::exit(1);
            }
        }

        Commands::Settle { stake, won, edge } => {
            let edge = HouseEdge::from_fraction(edge)?;
            let settlement = settle(Chips::new(stake)?, won, edge)?;
            print_json(&settlement)?;
        }
    }

    Ok(())
}
