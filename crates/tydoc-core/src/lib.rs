//! Tydoc Core - documentation-model extraction for statically-typed programs
//!
//! This crate provides the core functionality:
//! - Provider: the narrow query interface to an external type checker
//! - Extractor: symbol resolution, classification, and serialization
//! - Model: the serializable documentation value handed to renderers
//!
//! Tydoc is deliberately small: it does not parse source text, infer types,
//! render pages, or touch the filesystem. A type-checking provider answers
//! symbol/type/signature queries; tydoc folds the answers into one immutable
//! [`Documentation`] value per run.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provider interface - queries answered by an external type checker
pub mod provider;

/// Documentation extraction module
pub mod doc;

/// Test utilities - an in-memory scripted provider
pub mod testutil;

/// Convenience re-export of the extraction entry point
pub use doc::generate_documentation;

/// Convenience re-export of the extractor
pub use doc::DocExtractor;

/// Convenience re-export of the documentation model
pub use doc::{
    Category, ClassDoc, DocEntry, Documentation, FunctionDoc, SignatureDoc, SymbolDoc, VariableDoc,
};

/// Convenience re-export of extraction errors
pub use doc::ExtractError;

/// Convenience re-export of the provider traits and configuration
pub use provider::{
    ModuleKind, ProviderConfig, ProviderError, ScriptTarget, Tag, TypeProvider, TypedProgram,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
