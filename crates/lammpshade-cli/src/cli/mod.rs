// Dweve LAMMPShade - LAMMPS YAML dump reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use lammpshade_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a dump to an XYZ trajectory
    ///
    /// Every step becomes one frame. The comment line of each frame carries
    /// the step's thermo values and box bounds.
    Convert {
        /// Input dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output trajectory (must end in .xyz)
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Export the thermo output of a dump as CSV
    Thermo {
        /// Input dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append unit labels from the dump's unit style to the headers
        #[arg(long)]
        units: bool,
    },

    /// Print parsed steps as JSON lines
    Inspect {
        /// Input dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Stop after this many steps
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the dump cannot be read or converted, or if the
    /// output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Convert { input, output } => commands::convert(&input, &output),
            Commands::Thermo {
                input,
                output,
                units,
            } => commands::thermo(&input, output.as_deref(), units),
            Commands::Inspect { input, limit } => commands::inspect(&input, limit),
        }
    }
}
