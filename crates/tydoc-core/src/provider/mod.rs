//! Type-provider interface — the seam between tydoc and a type checker
//!
//! This module provides:
//! - The [`TypeProvider`] trait: builds a typed program from a root source file
//! - The [`TypedProgram`] trait: the narrow query surface the extractor
//!   consumes (exported symbols, types, signatures, doc comments, tags)
//! - Query-surface value types ([`SourceFileInfo`], [`DeclarationInfo`],
//!   [`Tag`], ...)
//!
//! tydoc performs no parsing, inference, or checking of its own. A provider
//! wraps an actual compiler front-end and answers these queries; the
//! extractor turns the answers into a [`Documentation`](crate::Documentation)
//! value.

mod config;

pub use config::{ConfigError, ModuleKind, ProviderConfig, ScriptTarget};

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported while constructing a typed program.
///
/// Program construction is the only fallible step of an extraction run;
/// failure here aborts the run with no partial output.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("root source file not found: {0}")]
    RootNotFound(PathBuf),

    #[error("failed to construct typed program: {0}")]
    ProgramBuild(String),
}

/// A source file of a typed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileInfo {
    /// Path of the file as the provider reports it.
    pub path: PathBuf,
    /// True for ambient/declaration-only files, which carry type
    /// declarations but no runtime exports. Ambient files are never visited.
    pub ambient: bool,
}

impl SourceFileInfo {
    /// Create a new source file record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, ambient: bool) -> Self {
        Self {
            path: path.into(),
            ambient,
        }
    }
}

/// The shape of the declaration backing a symbol.
///
/// Providers resolve this from the symbol's value declaration when present,
/// falling back to its first declaration otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Function,
    Class,
    Variable,
    /// A namespace/module declaration whose own exports are documented
    /// recursively; the namespace itself produces no record.
    Namespace,
    /// Any other declaration shape. Symbols backed by one are skipped,
    /// never treated as an error.
    Other,
}

/// Resolved declaration site of a symbol: its shape and zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationInfo {
    pub kind: DeclarationKind,
    /// Zero-based line of the declaration.
    pub line: u32,
    /// Zero-based column of the declaration.
    pub character: u32,
}

impl DeclarationInfo {
    /// Create a declaration record.
    #[must_use]
    pub fn new(kind: DeclarationKind, line: u32, character: u32) -> Self {
        Self {
            kind,
            line,
            character,
        }
    }
}

/// A structured annotation attached to a symbol or signature through its
/// documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name without the leading marker (`category`, `private`, ...).
    pub name: String,
    /// Free-form tag text; `None` when the tag carries no text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Tag {
    /// A tag with text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
        }
    }

    /// A bare tag with no text.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }
}

/// Builds typed programs on behalf of the extractor.
///
/// The configuration is forwarded opaquely; tydoc does not interpret it.
pub trait TypeProvider {
    /// The typed program representation this provider produces.
    type Program: TypedProgram;

    /// Construct a typed program rooted at `root`.
    ///
    /// # Errors
    /// Returns an error if the root file cannot be found or the program
    /// cannot be constructed. The extractor treats this as fatal.
    fn build_program(
        &self,
        root: &Path,
        config: &ProviderConfig,
    ) -> Result<Self::Program, ProviderError>;
}

/// Query surface of a fully type-checked program.
///
/// Handle types (`Symbol`, `Type`, `Signature`) are opaque to the extractor;
/// it only ever passes them back into further queries. All queries are
/// infallible: a question with no good answer (a nameless symbol, a type with
/// no call signatures) has an empty answer, not an error.
pub trait TypedProgram {
    type Symbol: Clone;
    type Type: Clone;
    type Signature: Clone;

    /// Every source file loaded into the program, ambient files included.
    fn source_files(&self) -> Vec<SourceFileInfo>;

    /// The symbols a single file exports — its own module export list, not a
    /// flattened closure of everything reachable. Order is not assumed
    /// stable; the extractor re-orders by source position.
    fn exported_symbols(&self, file: &SourceFileInfo) -> Vec<Self::Symbol>;

    /// The symbol's name, or `None` for nameless symbols (which are skipped).
    fn symbol_name(&self, symbol: &Self::Symbol) -> Option<String>;

    /// The symbol's backing declaration, or `None` when no declaration can
    /// be resolved (the symbol is then skipped).
    fn declaration(&self, symbol: &Self::Symbol) -> Option<DeclarationInfo>;

    /// The symbol's type at its declaration site.
    fn type_at_declaration(&self, symbol: &Self::Symbol) -> Self::Type;

    /// Call signatures of a type, in checker order. Empty for uncallable
    /// types.
    fn call_signatures(&self, ty: &Self::Type) -> Vec<Self::Signature>;

    /// Construct signatures of a type, in checker order. Empty for
    /// non-constructable types.
    fn construct_signatures(&self, ty: &Self::Type) -> Vec<Self::Signature>;

    /// A signature's parameter symbols in declared order.
    fn signature_parameters(&self, signature: &Self::Signature) -> Vec<Self::Symbol>;

    /// A signature's return type.
    fn signature_return_type(&self, signature: &Self::Signature) -> Self::Type;

    /// Instance properties of a type (for class instance shapes).
    fn instance_properties(&self, ty: &Self::Type) -> Vec<Self::Symbol>;

    /// Render a type as a display string. The rendering must be complete:
    /// truncated or elided type strings defeat the purpose of generated
    /// documentation.
    fn display_type(&self, ty: &Self::Type) -> String;

    /// Render a whole signature as a display string, untruncated.
    fn display_signature(&self, signature: &Self::Signature) -> String;

    /// Plain-text documentation comment of a symbol; empty when absent.
    fn symbol_documentation(&self, symbol: &Self::Symbol) -> String;

    /// Documentation tags of a symbol, in declaration order, duplicates
    /// preserved.
    fn symbol_tags(&self, symbol: &Self::Symbol) -> Vec<Tag>;

    /// Plain-text documentation comment of a signature. Signatures can carry
    /// doc comments distinct from their owning symbol's.
    fn signature_documentation(&self, signature: &Self::Signature) -> String;

    /// Documentation tags of a signature, in declaration order.
    fn signature_tags(&self, signature: &Self::Signature) -> Vec<Tag>;

    /// Exports of a namespace symbol, for recursive documentation of
    /// namespace-nested declarations. Empty for non-namespace symbols.
    fn namespace_exports(&self, symbol: &Self::Symbol) -> Vec<Self::Symbol>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_with_text() {
        let tag = Tag::new("category", "shapes");
        assert_eq!(tag.name, "category");
        assert_eq!(tag.text.as_deref(), Some("shapes"));
    }

    #[test]
    fn bare_tag_has_no_text() {
        let tag = Tag::bare("private");
        assert_eq!(tag.name, "private");
        assert!(tag.text.is_none());
    }

    #[test]
    fn source_file_info_new() {
        let file = SourceFileInfo::new("src/lib.ts", false);
        assert_eq!(file.path, PathBuf::from("src/lib.ts"));
        assert!(!file.ambient);
    }

    #[test]
    fn provider_error_display() {
        let err = ProviderError::RootNotFound(PathBuf::from("missing.ts"));
        assert!(err.to_string().contains("missing.ts"));

        let err = ProviderError::ProgramBuild("bad syntax".to_string());
        assert!(err.to_string().contains("bad syntax"));
    }
}
