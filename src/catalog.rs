//! Card catalog reading.
//!
//! The catalog is the list of `(id, color)` pairs the art is generated for.
//! It is read from the card registry, which comes in one of three shapes:
//!
//! - **Go source** (default): the repository file declaring the card list.
//!   Each card is a brace-delimited literal holding an `ID: "..."` field and
//!   a `Color: domain.CardColor<Name>` field at its own nesting level. Nested
//!   literals such as `Abilities: []string{"Undead"}` are skipped.
//! - **JSON**: an array of `{"id": "...", "color": "..."}` objects.
//! - **TOML**: a list of `[[cards]]` tables with `id` and `color` keys.
//!
//! # Example
//!
//! ```
//! use cardart::catalog::parse_catalog;
//!
//! let source = r#"
//!     {
//!         ID:    "red_pawn_goblin",
//!         Name:  "Goblin",
//!         Color: domain.CardColorRed,
//!     },
//! "#;
//! let cards = parse_catalog(source).unwrap();
//! assert_eq!(cards[0].id, "red_pawn_goblin");
//! assert_eq!(cards[0].color, "red");
//! ```

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// One card to generate art for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardEntry {
    /// Stable card identifier, used verbatim in file names
    pub id: String,
    /// Lower-case color category
    pub color: String,
}

impl CardEntry {
    /// Create an entry, lower-casing the color.
    pub fn new(id: impl Into<String>, color: impl AsRef<str>) -> Self {
        Self { id: id.into(), color: color.as_ref().to_lowercase() }
    }
}

/// Error reading the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The registry was read but contained no cards
    #[error("no cards found in registry")]
    Empty,
    /// The registry file could not be read
    #[error("failed to read registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON registry could not be parsed
    #[error("invalid JSON registry: {0}")]
    Json(#[from] serde_json::Error),
    /// A TOML registry could not be parsed
    #[error("invalid TOML registry: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Registry source format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFormat {
    /// Go source with card literals (any extension other than the below)
    GoSource,
    /// `.json` array of entries
    Json,
    /// `.toml` with `[[cards]]` tables
    Toml,
}

impl RegistryFormat {
    /// Detect the format of a registry path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ext) if ext == "json" => RegistryFormat::Json,
            Some(ext) if ext == "toml" => RegistryFormat::Toml,
            _ => RegistryFormat::GoSource,
        }
    }
}

fn id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bID:\s*"([^"]+)""#).expect("id pattern is valid"))
}

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bColor:\s*domain\.CardColor(\w+)").expect("color pattern is valid")
    })
}

/// Parse card records out of Go registry source.
///
/// Every balanced `{...}` block is a candidate record. Its fields are matched
/// against the block's own top level only, so values inside nested blocks
/// never leak into the enclosing record. Records missing either field are
/// ignored. Duplicate ids keep the first record.
///
/// # Errors
///
/// Returns [`CatalogError::Empty`] when no record matches.
pub fn parse_catalog(source: &str) -> Result<Vec<CardEntry>, CatalogError> {
    let entries = scan_records(source).into_iter().filter_map(|record| {
        let id = id_regex().captures(&record)?.get(1)?.as_str();
        let color = color_regex().captures(&record)?.get(1)?.as_str();
        Some(CardEntry::new(id, color))
    });
    finish(entries)
}

/// Lexer state of the record scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lex {
    Code,
    Str,
    RawStr,
    Rune,
    LineComment,
    BlockComment,
}

/// Split Go source into the top-level text of every balanced brace block,
/// ordered by where each block opens.
///
/// Nested blocks are replaced by `{}` in their parent's text. Braces inside
/// string, rune and raw string literals and inside comments do not count.
/// Blocks still open at end of input are discarded.
fn scan_records(source: &str) -> Vec<String> {
    let mut open: Vec<(usize, String)> = Vec::new();
    let mut closed: Vec<(usize, String)> = Vec::new();
    let mut state = Lex::Code;
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match state {
            Lex::Code => match c {
                '/' if next == Some('/') => {
                    chars.next();
                    state = Lex::LineComment;
                    continue;
                }
                '/' if next == Some('*') => {
                    chars.next();
                    state = Lex::BlockComment;
                    continue;
                }
                '{' => {
                    open.push((pos, String::new()));
                    continue;
                }
                '}' => {
                    if let Some((start, text)) = open.pop() {
                        closed.push((start, text));
                        if let Some((_, parent)) = open.last_mut() {
                            parent.push_str("{}");
                        }
                    }
                    continue;
                }
                '"' => state = Lex::Str,
                '`' => state = Lex::RawStr,
                '\'' => state = Lex::Rune,
                _ => {}
            },
            Lex::Str | Lex::Rune => {
                let close = if state == Lex::Str { '"' } else { '\'' };
                if c == '\\' {
                    if let Some((_, escaped)) = chars.next() {
                        if let Some((_, text)) = open.last_mut() {
                            text.push(c);
                            text.push(escaped);
                        }
                    }
                    continue;
                }
                if c == close || c == '\n' {
                    state = Lex::Code;
                }
            }
            Lex::RawStr => {
                if c == '`' {
                    state = Lex::Code;
                }
            }
            Lex::LineComment => {
                if c == '\n' {
                    state = Lex::Code;
                } else {
                    continue;
                }
            }
            Lex::BlockComment => {
                if c == '*' && next == Some('/') {
                    chars.next();
                    state = Lex::Code;
                }
                continue;
            }
        }

        if let Some((_, text)) = open.last_mut() {
            text.push(c);
        }
    }

    closed.sort_by_key(|(start, _)| *start);
    closed.into_iter().map(|(_, text)| text).collect()
}

#[derive(Deserialize)]
struct TomlRegistry {
    #[serde(default)]
    cards: Vec<CardEntry>,
}

/// Parse a JSON array of `{id, color}` objects.
pub fn parse_json_catalog(source: &str) -> Result<Vec<CardEntry>, CatalogError> {
    let entries: Vec<CardEntry> = serde_json::from_str(source)?;
    finish(entries.into_iter().map(|e| CardEntry::new(e.id, e.color)))
}

/// Parse `[[cards]]` tables from TOML.
pub fn parse_toml_catalog(source: &str) -> Result<Vec<CardEntry>, CatalogError> {
    let registry: TomlRegistry = toml::from_str(source)?;
    finish(registry.cards.into_iter().map(|e| CardEntry::new(e.id, e.color)))
}

/// Read the registry at `path` in the format its extension implies.
pub fn read_catalog(path: &Path) -> Result<Vec<CardEntry>, CatalogError> {
    let source = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;

    match RegistryFormat::from_path(path) {
        RegistryFormat::GoSource => parse_catalog(&source),
        RegistryFormat::Json => parse_json_catalog(&source),
        RegistryFormat::Toml => parse_toml_catalog(&source),
    }
}

/// Whether `id` can be used verbatim as a file name stem under the art dir.
///
/// Blank ids and ids that could name another directory are rejected.
pub fn is_usable_id(id: &str) -> bool {
    !id.trim().is_empty()
        && !id.contains(|c| matches!(c, '/' | '\\' | '\0'))
        && !id.contains("..")
        && !Path::new(id).is_absolute()
}

/// Drop unusable ids and duplicates (first wins), then reject an empty result.
fn finish(entries: impl Iterator<Item = CardEntry>) -> Result<Vec<CardEntry>, CatalogError> {
    let mut seen = HashSet::new();
    let cards: Vec<CardEntry> = entries
        .filter(|e| is_usable_id(&e.id))
        .filter(|e| seen.insert(e.id.clone()))
        .collect();

    if cards.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(cards)
}
