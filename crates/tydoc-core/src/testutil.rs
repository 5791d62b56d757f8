//! Test utilities for tydoc
//!
//! This module provides an in-memory, arena-backed implementation of
//! [`TypeProvider`] and [`TypedProgram`] so the extraction pipeline can be
//! exercised without a real compiler front-end. Tests script a program out
//! of files, symbols, types, and signatures, then run the extractor over it.

use crate::provider::{
    DeclarationInfo, DeclarationKind, ProviderConfig, ProviderError, SourceFileInfo, Tag,
    TypeProvider, TypedProgram,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Handle to a file registered in a [`ScriptedProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileId(usize);

/// Handle to a symbol registered in a [`ScriptedProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolId(usize);

/// Handle to a type registered in a [`ScriptedProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeId(usize);

/// Handle to a signature registered in a [`ScriptedProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureId(usize);

/// Description of a symbol to register.
#[derive(Debug, Clone)]
pub struct SymbolSpec {
    name: Option<String>,
    declaration: Option<DeclarationInfo>,
    ty: TypeId,
    documentation: String,
    tags: Vec<Tag>,
    nested_exports: Vec<SymbolId>,
}

impl SymbolSpec {
    /// A named symbol with a resolved declaration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: DeclarationKind,
        line: u32,
        character: u32,
        ty: TypeId,
    ) -> Self {
        Self {
            name: Some(name.into()),
            declaration: Some(DeclarationInfo::new(kind, line, character)),
            ty,
            documentation: String::new(),
            tags: Vec::new(),
            nested_exports: Vec::new(),
        }
    }

    /// A symbol with no name. The extractor must skip it.
    #[must_use]
    pub fn nameless(kind: DeclarationKind, line: u32, character: u32, ty: TypeId) -> Self {
        Self {
            name: None,
            declaration: Some(DeclarationInfo::new(kind, line, character)),
            ty,
            documentation: String::new(),
            tags: Vec::new(),
            nested_exports: Vec::new(),
        }
    }

    /// A named symbol with no resolvable declaration. The extractor must
    /// skip it.
    #[must_use]
    pub fn undeclared(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: Some(name.into()),
            declaration: None,
            ty,
            documentation: String::new(),
            tags: Vec::new(),
            nested_exports: Vec::new(),
        }
    }

    /// Attach a documentation comment.
    #[must_use]
    pub fn with_doc(mut self, text: impl Into<String>) -> Self {
        self.documentation = text.into();
        self
    }

    /// Attach a tag with text.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, text));
        self
    }

    /// Attach a bare tag (no text).
    #[must_use]
    pub fn with_bare_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(Tag::bare(name));
        self
    }

    /// Attach nested exports, making this symbol behave as a namespace.
    #[must_use]
    pub fn with_exports(mut self, exports: Vec<SymbolId>) -> Self {
        self.nested_exports = exports;
        self
    }
}

/// Description of a type to register.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    display: String,
    call_signatures: Vec<SignatureId>,
    construct_signatures: Vec<SignatureId>,
    properties: Vec<SymbolId>,
}

impl TypeSpec {
    /// A type with the given display string and no structure.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            call_signatures: Vec::new(),
            construct_signatures: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Append a call signature.
    #[must_use]
    pub fn with_call_signature(mut self, signature: SignatureId) -> Self {
        self.call_signatures.push(signature);
        self
    }

    /// Append a construct signature.
    #[must_use]
    pub fn with_construct_signature(mut self, signature: SignatureId) -> Self {
        self.construct_signatures.push(signature);
        self
    }

    /// Append an instance property.
    #[must_use]
    pub fn with_property(mut self, property: SymbolId) -> Self {
        self.properties.push(property);
        self
    }
}

/// Description of a signature to register.
#[derive(Debug, Clone)]
pub struct SignatureSpec {
    display: String,
    parameters: Vec<SymbolId>,
    return_type: TypeId,
    documentation: String,
    tags: Vec<Tag>,
}

impl SignatureSpec {
    /// A signature with the given display string and return type.
    #[must_use]
    pub fn new(display: impl Into<String>, return_type: TypeId) -> Self {
        Self {
            display: display.into(),
            parameters: Vec::new(),
            return_type,
            documentation: String::new(),
            tags: Vec::new(),
        }
    }

    /// Append a parameter symbol.
    #[must_use]
    pub fn with_parameter(mut self, parameter: SymbolId) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Attach a documentation comment.
    #[must_use]
    pub fn with_doc(mut self, text: impl Into<String>) -> Self {
        self.documentation = text.into();
        self
    }

    /// Attach a tag with text.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, text));
        self
    }
}

#[derive(Debug, Clone)]
struct FileData {
    info: SourceFileInfo,
    exports: Vec<SymbolId>,
}

/// An in-memory typed program assembled by test code.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProgram {
    files: Vec<FileData>,
    symbols: Vec<SymbolSpec>,
    types: Vec<TypeSpec>,
    signatures: Vec<SignatureSpec>,
}

impl ScriptedProgram {
    /// An empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regular (non-ambient) source file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        self.files.push(FileData {
            info: SourceFileInfo::new(path.into(), false),
            exports: Vec::new(),
        });
        FileId(self.files.len() - 1)
    }

    /// Register an ambient/declaration-only file.
    pub fn add_ambient_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        self.files.push(FileData {
            info: SourceFileInfo::new(path.into(), true),
            exports: Vec::new(),
        });
        FileId(self.files.len() - 1)
    }

    /// Register a type.
    pub fn add_type(&mut self, spec: TypeSpec) -> TypeId {
        self.types.push(spec);
        TypeId(self.types.len() - 1)
    }

    /// Register a signature.
    pub fn add_signature(&mut self, spec: SignatureSpec) -> SignatureId {
        self.signatures.push(spec);
        SignatureId(self.signatures.len() - 1)
    }

    /// Register a symbol.
    pub fn add_symbol(&mut self, spec: SymbolSpec) -> SymbolId {
        self.symbols.push(spec);
        SymbolId(self.symbols.len() - 1)
    }

    /// Mark a symbol as exported from a file.
    pub fn export(&mut self, file: FileId, symbol: SymbolId) {
        self.files[file.0].exports.push(symbol);
    }
}

impl TypedProgram for ScriptedProgram {
    type Symbol = SymbolId;
    type Type = TypeId;
    type Signature = SignatureId;

    fn source_files(&self) -> Vec<SourceFileInfo> {
        self.files.iter().map(|f| f.info.clone()).collect()
    }

    fn exported_symbols(&self, file: &SourceFileInfo) -> Vec<SymbolId> {
        self.files
            .iter()
            .find(|f| f.info == *file)
            .map(|f| f.exports.clone())
            .unwrap_or_default()
    }

    fn symbol_name(&self, symbol: &SymbolId) -> Option<String> {
        self.symbols[symbol.0].name.clone()
    }

    fn declaration(&self, symbol: &SymbolId) -> Option<DeclarationInfo> {
        self.symbols[symbol.0].declaration
    }

    fn type_at_declaration(&self, symbol: &SymbolId) -> TypeId {
        self.symbols[symbol.0].ty
    }

    fn call_signatures(&self, ty: &TypeId) -> Vec<SignatureId> {
        self.types[ty.0].call_signatures.clone()
    }

    fn construct_signatures(&self, ty: &TypeId) -> Vec<SignatureId> {
        self.types[ty.0].construct_signatures.clone()
    }

    fn signature_parameters(&self, signature: &SignatureId) -> Vec<SymbolId> {
        self.signatures[signature.0].parameters.clone()
    }

    fn signature_return_type(&self, signature: &SignatureId) -> TypeId {
        self.signatures[signature.0].return_type
    }

    fn instance_properties(&self, ty: &TypeId) -> Vec<SymbolId> {
        self.types[ty.0].properties.clone()
    }

    fn display_type(&self, ty: &TypeId) -> String {
        self.types[ty.0].display.clone()
    }

    fn display_signature(&self, signature: &SignatureId) -> String {
        self.signatures[signature.0].display.clone()
    }

    fn symbol_documentation(&self, symbol: &SymbolId) -> String {
        self.symbols[symbol.0].documentation.clone()
    }

    fn symbol_tags(&self, symbol: &SymbolId) -> Vec<Tag> {
        self.symbols[symbol.0].tags.clone()
    }

    fn signature_documentation(&self, signature: &SignatureId) -> String {
        self.signatures[signature.0].documentation.clone()
    }

    fn signature_tags(&self, signature: &SignatureId) -> Vec<Tag> {
        self.signatures[signature.0].tags.clone()
    }

    fn namespace_exports(&self, symbol: &SymbolId) -> Vec<SymbolId> {
        self.symbols[symbol.0].nested_exports.clone()
    }
}

/// A provider serving programs registered ahead of time, keyed by root path.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    programs: HashMap<PathBuf, ScriptedProgram>,
}

impl ScriptedProvider {
    /// A provider with no programs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program under a root path.
    #[must_use]
    pub fn with_program(mut self, root: impl Into<PathBuf>, program: ScriptedProgram) -> Self {
        self.programs.insert(root.into(), program);
        self
    }
}

impl TypeProvider for ScriptedProvider {
    type Program = ScriptedProgram;

    fn build_program(
        &self,
        root: &Path,
        _config: &ProviderConfig,
    ) -> Result<ScriptedProgram, ProviderError> {
        self.programs
            .get(root)
            .cloned()
            .ok_or_else(|| ProviderError::RootNotFound(root.to_path_buf()))
    }
}
