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

//! Serialization of parsed sections into Gettext catalog files.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::parser::SectionLines;

/// Serialize the paired section collections into catalog text.
///
/// Each section becomes one message block: `msgctxt` carries the
/// section name, `msgid` the Russian lines and `msgstr` the English
/// lines, one quoted string per line with an explicit `\n` token. A
/// stored empty line renders as a bare `"\n"`. Blocks are separated by
/// a blank line and appear in section encounter order.
pub fn render_catalog(lines_ru: &SectionLines, lines_en: &SectionLines) -> String {
    let mut catalog = String::new();
    for (section, russian) in lines_ru {
        catalog.push_str(&format!("msgctxt \"{section}\"\n"));
        catalog.push_str("msgid \"\"\n");
        push_quoted_lines(&mut catalog, russian);
        catalog.push_str("msgstr \"\"\n");
        if let Some(english) = lines_en.get(section) {
            push_quoted_lines(&mut catalog, english);
        }
        catalog.push('\n');
    }
    catalog
}

fn push_quoted_lines(catalog: &mut String, lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            catalog.push_str("\"\\n\"\n");
        } else {
            catalog.push_str(&format!("\"{line}\\n\"\n"));
        }
    }
}

/// Write one component's catalog to `<output_dir>/<component>/en_US.po`.
///
/// The component is the source filename, extension included, so the
/// `.text` and `.query` catalogs of one manifest entry do not collide.
/// When the component directory cannot be created for lack of
/// permissions, the rendered catalog is printed to stdout instead of
/// being lost and the run continues.
pub fn write_catalog(
    output_dir: &Path,
    component: &str,
    lines_ru: &SectionLines,
    lines_en: &SectionLines,
) -> anyhow::Result<()> {
    let catalog = render_catalog(lines_ru, lines_en);
    let component_dir = output_dir.join(component);
    if !create_output_dir(&component_dir)? {
        warn!("printing the catalog for {component} to stdout instead");
        print!("{catalog}");
        return Ok(());
    }

    let po_file = component_dir.join("en_US.po");
    fs::write(&po_file, catalog)
        .with_context(|| format!("Could not write {}", po_file.display()))
}

/// Create `dir` unless it already exists.
///
/// Returns `false` when creation was denied for lack of permissions,
/// the one condition callers degrade on; any other failure is an
/// error.
pub fn create_output_dir(dir: &Path) -> anyhow::Result<bool> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            info!("output dir {} exists, continuing", dir.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warn!("permission denied when trying to create {}", dir.display());
            Ok(false)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Could not create {}", dir.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(name: &str, items: &[&str]) -> SectionLines {
        let mut sections = SectionLines::new();
        sections.insert(
            name.to_string(),
            items.iter().map(|s| s.to_string()).collect(),
        );
        sections
    }

    #[test]
    fn test_render_single_section() {
        let ru = section("Greeting", &["Привет"]);
        let en = section("Greeting", &["Hello"]);
        assert_eq!(
            render_catalog(&ru, &en),
            "msgctxt \"Greeting\"\n\
             msgid \"\"\n\
             \"Привет\\n\"\n\
             msgstr \"\"\n\
             \"Hello\\n\"\n\
             \n"
        );
    }

    #[test]
    fn test_render_empty_line_as_newline_token() {
        let ru = section("S", &["Привет", "", "Мир"]);
        let en = section("S", &[]);
        assert_eq!(
            render_catalog(&ru, &en),
            "msgctxt \"S\"\n\
             msgid \"\"\n\
             \"Привет\\n\"\n\
             \"\\n\"\n\
             \"Мир\\n\"\n\
             msgstr \"\"\n\
             \n"
        );
    }

    #[test]
    fn test_render_preserves_section_order() {
        let mut ru = section("B", &["Б"]);
        ru.extend(section("A", &["А"]));
        let mut en = section("B", &["b"]);
        en.extend(section("A", &["a"]));

        let catalog = render_catalog(&ru, &en);
        let b = catalog.find("msgctxt \"B\"").unwrap();
        let a = catalog.find("msgctxt \"A\"").unwrap();
        assert!(b < a, "blocks must keep section encounter order");
    }

    #[test]
    fn test_write_catalog_creates_component_file() {
        let out = tempfile::tempdir().unwrap();
        let ru = section("S", &["Привет"]);
        let en = section("S", &["Hello"]);

        write_catalog(out.path(), "B-Zone.text", &ru, &en).unwrap();

        let po_file = out.path().join("B-Zone.text").join("en_US.po");
        assert_eq!(fs::read_to_string(po_file).unwrap(), render_catalog(&ru, &en));
    }

    #[test]
    fn test_write_catalog_is_idempotent_on_existing_dir() {
        let out = tempfile::tempdir().unwrap();
        let ru = section("S", &["Привет"]);
        let en = section("S", &["Hello"]);

        write_catalog(out.path(), "B-Zone.text", &ru, &en).unwrap();
        write_catalog(out.path(), "B-Zone.text", &ru, &en).unwrap();

        let po_file = out.path().join("B-Zone.text").join("en_US.po");
        assert!(po_file.exists());
    }

    #[test]
    fn test_create_output_dir_reports_existing_as_success() {
        let out = tempfile::tempdir().unwrap();
        assert!(create_output_dir(out.path()).unwrap());
        assert!(create_output_dir(&out.path().join("po")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_catalog_degrades_to_stdout_on_denied_dir() {
        use std::os::unix::fs::PermissionsExt;

        let out = tempfile::tempdir().unwrap();
        fs::set_permissions(out.path(), fs::Permissions::from_mode(0o555)).unwrap();
        if fs::create_dir(out.path().join("probe")).is_ok() {
            // Mode bits do not apply (e.g. running as root).
            return;
        }
        let ru = section("S", &["Привет"]);
        let en = section("S", &["Hello"]);

        // The component directory cannot be created, but the catalog
        // is not lost and the error is not propagated.
        write_catalog(out.path(), "B-Zone.text", &ru, &en).unwrap();
        assert!(!out.path().join("B-Zone.text").exists());

        fs::set_permissions(out.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }
}
