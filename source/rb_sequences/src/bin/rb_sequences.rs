// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use clap::Parser;
use log::debug;
use rb_sequences::{Enumeration, RbConfig};

/// Generates single-qubit randomized benchmarking pulse sequences.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sequence lengths, counting the terminating Clifford
    #[arg(long, value_delimiter = ',')]
    lengths: Option<Vec<usize>>,

    /// Number of random sequences per length
    #[arg(long)]
    randomizations: Option<usize>,

    /// Order in which generator words are searched
    #[arg(long, value_enum)]
    enumeration: Option<Enumeration>,

    /// Seed for reproducible sequences
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for the identity-flavored sequences
    #[arg(long)]
    i_output: Option<PathBuf>,

    /// Output file for the X-flavored sequences
    #[arg(long)]
    x_output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> rb_sequences::Result<RbConfig> {
        let mut config = match &self.config {
            Some(path) => RbConfig::load(path)?,
            None => RbConfig::default(),
        };
        if let Some(lengths) = self.lengths {
            config.sequence_lengths = lengths;
        }
        if let Some(randomizations) = self.randomizations {
            config.num_randomizations = randomizations;
        }
        if let Some(enumeration) = self.enumeration {
            config.enumeration = enumeration;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path) = self.i_output {
            config.i_output = path;
        }
        if let Some(path) = self.x_output {
            config.x_output = path;
        }
        Ok(config)
    }
}

fn main() -> miette::Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config()?;
    debug!("running with {config:?}");
    let sequences = rb_sequences::run(&config)?;

    println!(
        "Mean number of generators per Clifford is {}",
        sequences.mean_word_length
    );
    println!(
        "Wrote {} sequences to {} and {}",
        sequences.pairs.len(),
        config.i_output.display(),
        config.x_output.display()
    );
    Ok(())
}
