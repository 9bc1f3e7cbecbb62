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

//! Helpers for translating the game Vangers.
//!
//! The game ships its dialogue as `diagen` dump files: Windows-1251
//! encoded text split into bracket-headed sections, with the Russian
//! original and its English translation interleaved line by line. The
//! functions here convert those dumps into Gettext catalogs so the
//! texts can be translated with the usual PO tooling.
//!
//! The pipeline is linear: [`manifest::files_to_convert`] picks the
//! dump files to process, [`parser::parse_diagen`] splits one file
//! into per-section Russian and English line collections, and
//! [`catalog::write_catalog`] serializes the pair into a
//! `msgctxt`/`msgid`/`msgstr` catalog per file.

pub mod catalog;
pub mod manifest;
pub mod parser;
