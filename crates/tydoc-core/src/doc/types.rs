//! Types for the extracted documentation model

use crate::provider::Tag;
use serde::Serialize;
use std::collections::BTreeMap;

/// The complete documentation model extracted from one typed program.
///
/// Built once per extraction run and immutable afterwards; consumers
/// (renderers, site generators) only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Documentation {
    /// Entries not assigned to any category, in source-position order per
    /// originating file.
    pub exports: Vec<DocEntry>,
    /// Named category buckets, in first-seen order of the category tag.
    pub categories: Vec<Category>,
}

impl Documentation {
    /// True when the model contains no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty() && self.categories.iter().all(|c| c.entries.is_empty())
    }

    /// Iterate over every entry, uncategorized first, then bucket by bucket.
    pub fn all_entries(&self) -> impl Iterator<Item = &DocEntry> {
        self.exports
            .iter()
            .chain(self.categories.iter().flat_map(|c| c.entries.iter()))
    }

    /// Serialize the model as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A named grouping of entries, assigned through the `category` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<DocEntry>,
}

/// One documented export.
///
/// Serializes with a `sort` discriminant (`"function"`, `"class"`,
/// `"variable"`) and the variant's fields inline; no variant ever carries
/// another variant's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "sort", rename_all = "lowercase")]
pub enum DocEntry {
    Function(FunctionDoc),
    Class(ClassDoc),
    Variable(VariableDoc),
}

impl DocEntry {
    /// The shared symbol record of this entry.
    #[must_use]
    pub fn symbol(&self) -> &SymbolDoc {
        match self {
            Self::Function(f) => &f.symbol,
            Self::Class(c) => &c.symbol,
            Self::Variable(v) => &v.symbol,
        }
    }

    /// The entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.symbol().name
    }

    /// Zero-based `(line, character)` of the backing declaration.
    #[must_use]
    pub fn position(&self) -> (u32, u32) {
        let symbol = self.symbol();
        (symbol.line, symbol.character)
    }

    /// The discriminant string used in serialized output.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Class(_) => "class",
            Self::Variable(_) => "variable",
        }
    }
}

/// The record shape shared by every documented symbol: top-level exports,
/// signature parameters, and class properties alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDoc {
    /// Identifier of the symbol.
    pub name: String,
    /// Fully-rendered display string of the symbol's type. Never truncated:
    /// an elided type string defeats the purpose of generated documentation.
    #[serde(rename = "type")]
    pub type_string: String,
    /// Plain-text documentation comment; empty string when absent.
    pub documentation: String,
    /// Tag name → tag text. Duplicate names fold last-write-wins; a tag with
    /// no text maps to the empty string, never omitted.
    pub tags: BTreeMap<String, String>,
    /// Every tag occurrence in declaration order, duplicates included.
    pub tags_array: Vec<Tag>,
    /// Zero-based line of the declaration.
    pub line: u32,
    /// Zero-based column of the declaration.
    pub character: u32,
}

impl SymbolDoc {
    /// True when the symbol carries a `private` tag. Presence alone gates
    /// visibility; the tag's text is ignored.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.tags.contains_key("private")
    }

    /// The symbol's category tag text, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.tags.get("category").map(String::as_str)
    }
}

/// Documentation for an exported function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDoc {
    #[serde(flatten)]
    pub symbol: SymbolDoc,
    /// One entry per call signature of the function's type, in checker
    /// order. Overloaded declarations yield several.
    pub signatures: Vec<SignatureDoc>,
}

/// Documentation for an exported class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDoc {
    #[serde(flatten)]
    pub symbol: SymbolDoc,
    /// One entry per construct signature, in checker order.
    pub constructors: Vec<SignatureDoc>,
    /// Instance properties of the class's canonical instance shape, with
    /// private properties removed. Empty when the class has no construct
    /// signatures.
    pub properties: Vec<SymbolDoc>,
}

/// Documentation for an exported variable. The declared type string is the
/// whole story; no signature or property expansion is attempted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDoc {
    #[serde(flatten)]
    pub symbol: SymbolDoc,
}

/// Documentation for one call or construct signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDoc {
    /// Rendered signature string.
    #[serde(rename = "type")]
    pub type_string: String,
    /// One record per parameter, in declared order.
    pub parameters: Vec<SymbolDoc>,
    /// Rendered return type string.
    pub return_type: String,
    /// The signature's own documentation comment, which can differ from the
    /// owning symbol's.
    pub documentation: String,
    /// Tag name → tag text for the signature's own tags.
    pub tags: BTreeMap<String, String>,
}
