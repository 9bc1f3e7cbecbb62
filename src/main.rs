// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Convert the diagen game texts of Vangers into Gettext catalogs.
//!
//! Reads the fixed set of `.text` and `.query` dump files from the
//! diagen directory and writes one `en_US.po` catalog per dump under
//! the output directory.

use std::path::PathBuf;

use anyhow::ensure;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use log::info;

use diagen2po::catalog::{create_output_dir, write_catalog};
use diagen2po::manifest::{files_to_convert, DIAGEN_FILES};
use diagen2po::parser::parse_diagen;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// diagen directory with game texts
    diagen_dir: PathBuf,

    /// where to put generated files
    #[arg(short = 'D', long, value_name = "DIR", default_value = "./po")]
    output_dir: PathBuf,

    /// Only process a specific file, useful for debugging
    #[arg(short = 'F', long, value_parser = PossibleValuesParser::new(DIAGEN_FILES))]
    only_file: Option<String>,

    /// Skip parsing .text files, useful for debugging
    #[arg(short = 't', long)]
    skip_text: bool,

    /// Skip parsing .query files, useful for debugging
    #[arg(short = 'q', long)]
    skip_query: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let cli = Cli::parse();

    ensure!(
        create_output_dir(&cli.output_dir)?,
        "Could not create output dir {}",
        cli.output_dir.display()
    );
    ensure!(
        cli.diagen_dir.is_dir(),
        "diagen dir {} not found or not accessible",
        cli.diagen_dir.display()
    );

    let files = files_to_convert(
        &cli.diagen_dir,
        cli.only_file.as_deref(),
        cli.skip_text,
        cli.skip_query,
    )?;
    for file in files {
        info!("Processing {file}");
        let (lines_ru, lines_en) = parse_diagen(&cli.diagen_dir.join(&file))?;
        write_catalog(&cli.output_dir, &file, &lines_ru, &lines_en)?;
    }

    Ok(())
}
