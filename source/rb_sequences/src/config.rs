// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
    decomposition::Enumeration,
    error::{Error, Result},
    sequence::SequencePlan,
    writer::OutputPaths,
};

/// Settings of one generation run, as read from a JSON file. Missing fields
/// take the defaults of the standard experiment: 32 randomizations of the
/// lengths 4 through 64.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RbConfig {
    pub sequence_lengths: Vec<usize>,
    pub num_randomizations: usize,
    pub enumeration: Enumeration,
    /// Seed for the random source; a fresh entropy seed is used when absent.
    pub seed: Option<u64>,
    pub i_output: PathBuf,
    pub x_output: PathBuf,
}

impl Default for RbConfig {
    fn default() -> Self {
        Self {
            sequence_lengths: (2..7).map(|exponent| 1 << exponent).collect(),
            num_randomizations: 32,
            enumeration: Enumeration::default(),
            seed: None,
            i_output: PathBuf::from("RB_ISeqs.txt"),
            x_output: PathBuf::from("RB_XSeqs.txt"),
        }
    }
}

impl RbConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Parses `contents`; `path` is only used to report errors.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn plan(&self) -> Result<SequencePlan> {
        SequencePlan::new(self.sequence_lengths.iter().copied(), self.num_randomizations)
    }

    #[must_use]
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths {
            i_sequences: self.i_output.clone(),
            x_sequences: self.x_output.clone(),
        }
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
