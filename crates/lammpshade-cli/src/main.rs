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


//! LAMMPShade command-line interface

use clap::Parser;
use lammpshade_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// LAMMPShade - LAMMPS YAML dump tools
///
/// Converts `dump yaml` output into XYZ trajectories and thermo tables.
///
/// # Examples
///
/// ```bash
/// # Write an XYZ trajectory
/// lammpshade convert dump.yaml -o dump.xyz
///
/// # Thermo output as CSV with unit labels
/// lammpshade thermo dump.yaml -o thermo.csv --units
///
/// # First two steps as JSON lines
/// lammpshade inspect dump.yaml --limit 2
/// ```
#[derive(Parser)]
#[command(name = "lammpshade")]
#[command(author, version, about = "LAMMPShade - LAMMPS YAML dump tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lammpshade=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
