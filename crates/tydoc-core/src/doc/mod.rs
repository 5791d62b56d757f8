//! Documentation-model extraction for typed programs
//!
//! This module turns the export surface of a type-checked program into a
//! serializable [`Documentation`] value: symbols are classified by
//! declaration kind, serialized into kind-specific records, filtered by
//! visibility tags, ordered by source position, and partitioned into
//! categories.

mod categorize;
mod error;
mod extractor;
mod types;

pub use categorize::categorize;
pub use error::ExtractError;
pub use extractor::{generate_documentation, DocExtractor};
pub use types::{
    Category, ClassDoc, DocEntry, Documentation, FunctionDoc, SignatureDoc, SymbolDoc, VariableDoc,
};
