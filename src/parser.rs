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

//! Parsing of a single diagen dump file into per-section Russian and
//! English line collections.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{bail, Context};
use encoding_rs::WINDOWS_1251;
use indexmap::IndexMap;
use log::warn;
use regex::Regex;

/// Section name to ordered lines, in section encounter order.
pub type SectionLines = IndexMap<String, Vec<String>>;

/// Which language an empty line belongs to.
///
/// An empty line carries no character-set evidence, so it is attributed
/// to the language of the last non-empty line. Every section header
/// resets the owner to Russian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlankOwner {
    Russian,
    English,
}

/// Lines collected for the section currently being read.
struct Section {
    name: String,
    ru: Vec<String>,
    en: Vec<String>,
    owner: BlankOwner,
}

impl Section {
    fn new(name: String) -> Self {
        Self {
            name,
            ru: Vec::new(),
            en: Vec::new(),
            owner: BlankOwner::Russian,
        }
    }

    /// Classify one line and append it to the matching collection.
    ///
    /// A line of plain ASCII is English; a line with any character at
    /// or above U+0080 is Russian. The two streams are appended in
    /// encounter order, so adjacent Russian and English lines without
    /// an intervening blank keep their relative order within each
    /// collection without any alternation being assumed.
    fn push(&mut self, line: String) {
        if line.is_empty() {
            match self.owner {
                BlankOwner::Russian => self.ru.push(line),
                BlankOwner::English => self.en.push(line),
            }
        } else if line.is_ascii() {
            self.en.push(line);
            self.owner = BlankOwner::English;
        } else {
            self.ru.push(line);
            self.owner = BlankOwner::Russian;
        }
    }
}

/// Parse one diagen file into Russian and English section collections.
///
/// The file is decoded from Windows-1251 as a whole; a byte sequence
/// with no mapping in that code page is an error, there is no recovery
/// for a malformed dump. Each line is trimmed of surrounding
/// whitespace (this also removes the line terminator) and has literal
/// double quotes escaped so it can later be embedded in a quoted
/// catalog string.
pub fn parse_diagen(path: &Path) -> anyhow::Result<(SectionLines, SectionLines)> {
    let bytes =
        fs::read(path).with_context(|| format!("Could not read {}", path.display()))?;
    let (text, _, had_errors) = WINDOWS_1251.decode(&bytes);
    if had_errors {
        bail!(
            "{} contains byte sequences that are not valid Windows-1251",
            path.display()
        );
    }
    Ok(parse_sections(&text))
}

fn parse_sections(text: &str) -> (SectionLines, SectionLines) {
    let mut lines_ru = SectionLines::new();
    let mut lines_en = SectionLines::new();
    let mut section: Option<Section> = None;

    for raw in text.lines() {
        let line = raw.trim().replace('"', "\\\"");
        if line.starts_with('[') {
            let next = Section::new(section_title(&line));
            if let Some(finished) = section.replace(next) {
                flush_section(finished, &mut lines_ru, &mut lines_en);
            }
            continue;
        }
        // Lines before the first header have no section context and
        // are discarded.
        if let Some(current) = section.as_mut() {
            current.push(line);
        }
    }
    if let Some(finished) = section {
        flush_section(finished, &mut lines_ru, &mut lines_en);
    }

    trim_trailing_blank(&mut lines_ru);
    trim_trailing_blank(&mut lines_en);
    (lines_ru, lines_en)
}

/// Extract the section name from a bracket header line.
///
/// `.query` files use weakly formalized compound headers like
/// `[Foo] [Bar]`, which are merged into `Foo_Bar`; a plain `[Title]`
/// header keeps the literal title.
fn section_title(line: &str) -> String {
    static COMPOUND_TITLE: OnceLock<Regex> = OnceLock::new();
    let re = COMPOUND_TITLE.get_or_init(|| Regex::new(r"\[(.+)\]\s+\[(.+)\]").unwrap());
    if re.is_match(line) {
        re.replace(line, "${1}_${2}").into_owned()
    } else {
        line.trim_matches(|c| c == '[' || c == ']').to_string()
    }
}

/// Record a finished section in both mappings.
///
/// A title seen twice in one file overwrites the earlier collections
/// and keeps the first occurrence's position in the mapping order.
fn flush_section(section: Section, lines_ru: &mut SectionLines, lines_en: &mut SectionLines) {
    if lines_ru.insert(section.name.clone(), section.ru).is_some() {
        warn!(
            "duplicate section [{}], earlier lines discarded",
            section.name
        );
    }
    lines_en.insert(section.name, section.en);
}

/// Drop the single dangling blank entry the dump formatting leaves at
/// the end of a collection. Internal blank lines are kept.
fn trim_trailing_blank(sections: &mut SectionLines) {
    for (name, lines) in sections.iter_mut() {
        match lines.last() {
            Some(last) if last.is_empty() => {
                lines.pop();
            }
            Some(_) => {}
            None => warn!("Weird section name: {name}"),
        }
    }
}
