//! Documentation extractor - walks a typed program's export surface and
//! builds the documentation model
//!
//! The extractor never parses or checks source text; it consumes the query
//! surface of an already-checked program ([`TypedProgram`]) and turns every
//! classifiable exported symbol into a [`DocEntry`]. Accumulation is a fold
//! per source file; each file's entries are ordered by source position
//! before files are concatenated, and the combined sequence is partitioned
//! into categories last.

use crate::doc::categorize::categorize;
use crate::doc::error::ExtractError;
use crate::doc::types::{
    ClassDoc, DocEntry, Documentation, FunctionDoc, SignatureDoc, SymbolDoc, VariableDoc,
};
use crate::provider::{
    DeclarationKind, ProviderConfig, SourceFileInfo, Tag, TypeProvider, TypedProgram,
};
use std::collections::BTreeMap;
use std::path::Path;

/// Build a typed program for `root` and extract its documentation model.
///
/// One invocation processes one root file to completion; there is no partial
/// output. Program construction is the only fallible step.
///
/// # Errors
/// Returns an error if the provider cannot construct the program.
pub fn generate_documentation<P: TypeProvider>(
    provider: &P,
    root: &Path,
    config: &ProviderConfig,
) -> Result<Documentation, ExtractError> {
    let program = provider.build_program(root, config)?;
    Ok(DocExtractor::new(&program).extract())
}

/// Extracts documentation from a typed program.
pub struct DocExtractor<'a, P: TypedProgram> {
    program: &'a P,
}

impl<'a, P: TypedProgram> DocExtractor<'a, P> {
    /// Create an extractor over a program.
    #[must_use]
    pub fn new(program: &'a P) -> Self {
        Self { program }
    }

    /// Extract the complete documentation model.
    ///
    /// Infallible by design: every query past program construction either
    /// answers or skips. Unclassifiable symbols are silently absent from the
    /// result.
    #[must_use]
    pub fn extract(&self) -> Documentation {
        let mut entries = Vec::new();

        for file in self.program.source_files() {
            // Ambient/declaration-only files carry no runtime exports.
            if file.ambient {
                continue;
            }
            entries.extend(self.extract_file(&file));
        }

        categorize(entries)
    }

    /// Extract one file's exports, ordered by source position.
    fn extract_file(&self, file: &SourceFileInfo) -> Vec<DocEntry> {
        let mut entries = self
            .program
            .exported_symbols(file)
            .iter()
            .fold(Vec::new(), |acc, symbol| self.extract_symbol(symbol, acc));

        // Symbol-table iteration order is not meaningful; source position is.
        // The sort is stable, so equal positions keep encounter order.
        entries.sort_by_key(DocEntry::position);
        entries
    }

    /// Classify one exported symbol and append its record (or, for a
    /// namespace, the records of its own exports) to the accumulator.
    fn extract_symbol(&self, symbol: &P::Symbol, mut acc: Vec<DocEntry>) -> Vec<DocEntry> {
        let Some(declaration) = self.program.declaration(symbol) else {
            return acc;
        };

        match declaration.kind {
            DeclarationKind::Function => {
                if let Some(doc) = self.build_function(symbol) {
                    acc.push(DocEntry::Function(doc));
                }
            }
            DeclarationKind::Class => {
                // A private class is dropped whole, computed properties and
                // all; it must not appear even as a redacted stub.
                if let Some(doc) = self.build_class(symbol) {
                    if !doc.symbol.is_private() {
                        acc.push(DocEntry::Class(doc));
                    }
                }
            }
            DeclarationKind::Variable => {
                if let Some(doc) = self.build_variable(symbol) {
                    acc.push(DocEntry::Variable(doc));
                }
            }
            DeclarationKind::Namespace => {
                acc = self
                    .program
                    .namespace_exports(symbol)
                    .iter()
                    .fold(acc, |acc, nested| self.extract_symbol(nested, acc));
            }
            DeclarationKind::Other => {}
        }

        acc
    }

    /// Build a function record: the base symbol plus every call signature of
    /// its type, in checker order.
    fn build_function(&self, symbol: &P::Symbol) -> Option<FunctionDoc> {
        let base = self.serialize_symbol(symbol)?;
        let ty = self.program.type_at_declaration(symbol);
        let signatures = self
            .program
            .call_signatures(&ty)
            .iter()
            .map(|signature| self.serialize_signature(signature))
            .collect();

        Some(FunctionDoc {
            symbol: base,
            signatures,
        })
    }

    /// Build a class record: construct signatures plus the instance
    /// properties of the first construct signature's return type.
    ///
    /// The first construct signature is authoritative for the instance
    /// shape; overloaded constructors with diverging return types are not
    /// merged. A class with no construct signatures gets empty lists.
    fn build_class(&self, symbol: &P::Symbol) -> Option<ClassDoc> {
        let base = self.serialize_symbol(symbol)?;
        let ty = self.program.type_at_declaration(symbol);
        let construct = self.program.construct_signatures(&ty);

        let constructors: Vec<SignatureDoc> = construct
            .iter()
            .map(|signature| self.serialize_signature(signature))
            .collect();

        let properties = construct
            .first()
            .map(|signature| {
                let instance = self.program.signature_return_type(signature);
                self.program
                    .instance_properties(&instance)
                    .iter()
                    .filter_map(|property| self.serialize_symbol(property))
                    .filter(|property| !property.is_private())
                    .collect()
            })
            .unwrap_or_default();

        Some(ClassDoc {
            symbol: base,
            constructors,
            properties,
        })
    }

    /// Build a variable record. The declared type string is sufficient; no
    /// signature or property enumeration is attempted even for function- or
    /// object-shaped variable types.
    fn build_variable(&self, symbol: &P::Symbol) -> Option<VariableDoc> {
        let base = self.serialize_symbol(symbol)?;
        Some(VariableDoc { symbol: base })
    }

    /// Serialize a symbol into the shared record shape.
    ///
    /// Returns `None` exactly when the symbol has no name or no resolvable
    /// declaration; skipped symbols are never an error.
    fn serialize_symbol(&self, symbol: &P::Symbol) -> Option<SymbolDoc> {
        let name = self.program.symbol_name(symbol)?;
        let declaration = self.program.declaration(symbol)?;
        let ty = self.program.type_at_declaration(symbol);
        let tags_array = self.program.symbol_tags(symbol);

        Some(SymbolDoc {
            name,
            type_string: self.program.display_type(&ty),
            documentation: self.program.symbol_documentation(symbol),
            tags: fold_tags(&tags_array),
            tags_array,
            line: declaration.line,
            character: declaration.character,
        })
    }

    /// Serialize a call or construct signature: rendered form, parameters in
    /// declared order, return type, and the signature's own docs and tags.
    fn serialize_signature(&self, signature: &P::Signature) -> SignatureDoc {
        let parameters = self
            .program
            .signature_parameters(signature)
            .iter()
            .filter_map(|parameter| self.serialize_symbol(parameter))
            .collect();
        let return_type = self.program.signature_return_type(signature);

        SignatureDoc {
            type_string: self.program.display_signature(signature),
            parameters,
            return_type: self.program.display_type(&return_type),
            documentation: self.program.signature_documentation(signature),
            tags: fold_tags(&self.program.signature_tags(signature)),
        }
    }
}

/// Fold an ordered tag list into a name → text map.
///
/// Duplicate names resolve last-write-wins; a tag with no text maps to the
/// empty string rather than being omitted.
pub(crate) fn fold_tags(tags: &[Tag]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for tag in tags {
        map.insert(tag.name.clone(), tag.text.clone().unwrap_or_default());
    }
    map
}
