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

//! Selection of the diagen files to convert.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::warn;

/// Base names of the diagen files shipped with the game.
///
/// Every entry names a `<name>.text` and a `<name>.query` file, except
/// `Inventory` which only has the `.text` variant.
pub const DIAGEN_FILES: [&str; 10] = [
    "B-Zone",
    "Incubator",
    "Lampasso",
    "Ogorod",
    "Podish",
    "Spobs",
    "Threall",
    "VigBoo",
    "ZeePa",
    "Inventory",
];

/// Select the diagen files present in `diagen_dir`, in manifest order
/// with `.text` before `.query` per entry.
///
/// Expected files that are absent are reported with a warning and
/// skipped; the warning fires even when the matching skip flag is set,
/// so the flags never hide the state of the source directory. Only
/// reading the directory itself can fail.
pub fn files_to_convert(
    diagen_dir: &Path,
    only_file: Option<&str>,
    skip_text: bool,
    skip_query: bool,
) -> anyhow::Result<Vec<String>> {
    let mut present = HashSet::new();
    for entry in fs::read_dir(diagen_dir)
        .with_context(|| format!("Could not read {}", diagen_dir.display()))?
    {
        present.insert(entry?.file_name().to_string_lossy().into_owned());
    }

    let names: Vec<&str> = match only_file {
        Some(name) => vec![name],
        None => DIAGEN_FILES.to_vec(),
    };

    let mut selected = Vec::new();
    for name in names {
        let text_file = format!("{name}.text");
        if !present.contains(&text_file) {
            warn!("{text_file} not found!");
        } else if !skip_text {
            selected.push(text_file);
        }

        if name == "Inventory" {
            // Inventory only has the .text variant.
            continue;
        }

        let query_file = format!("{name}.query");
        if !present.contains(&query_file) {
            warn!("{query_file} not found!");
        } else if !skip_query {
            selected.push(query_file);
        }
    }

    Ok(selected)
}
