//! Integration tests for the extraction pipeline
//!
//! Each test scripts a typed program through the in-memory provider and runs
//! the full pipeline (resolve → classify → serialize → filter → order →
//! categorize) end to end.

use std::path::Path;

use tydoc_core::provider::DeclarationKind;
use tydoc_core::testutil::{
    ScriptedProgram, ScriptedProvider, SignatureSpec, SymbolSpec, TypeSpec,
};
use tydoc_core::{generate_documentation, DocEntry, DocExtractor, ProviderConfig, ProviderError};

/// A module exporting `function add(a: number, b: number): number`.
fn add_function_program() -> ScriptedProgram {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/math.ts");
    let number = program.add_type(TypeSpec::new("number"));

    let a = program.add_symbol(SymbolSpec::new(
        "a",
        DeclarationKind::Variable,
        0,
        20,
        number,
    ));
    let b = program.add_symbol(SymbolSpec::new(
        "b",
        DeclarationKind::Variable,
        0,
        31,
        number,
    ));
    let signature = program.add_signature(
        SignatureSpec::new("(a: number, b: number) => number", number)
            .with_parameter(a)
            .with_parameter(b),
    );
    let fn_ty = program.add_type(
        TypeSpec::new("(a: number, b: number) => number").with_call_signature(signature),
    );
    let add = program.add_symbol(
        SymbolSpec::new("add", DeclarationKind::Function, 0, 16, fn_ty)
            .with_doc("Add two numbers."),
    );
    program.export(file, add);
    program
}

#[test]
fn test_exported_function_becomes_function_entry() {
    let doc = DocExtractor::new(&add_function_program()).extract();

    assert!(doc.categories.is_empty());
    assert_eq!(doc.exports.len(), 1);

    let DocEntry::Function(func) = &doc.exports[0] else {
        panic!("expected a function entry, got {:?}", doc.exports[0]);
    };
    assert_eq!(func.symbol.name, "add");
    assert_eq!(func.symbol.documentation, "Add two numbers.");
    assert!(func.symbol.tags.is_empty());
    assert_eq!(func.signatures.len(), 1);

    let signature = &func.signatures[0];
    assert_eq!(signature.return_type, "number");
    let params: Vec<&str> = signature.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["a", "b"]);
}

#[test]
fn test_function_entry_serializes_with_function_sort() {
    let doc = DocExtractor::new(&add_function_program()).extract();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["exports"][0]["sort"], "function");
    assert_eq!(value["exports"][0]["name"], "add");
    assert_eq!(
        value["exports"][0]["signatures"][0]["returnType"],
        "number"
    );
    assert_eq!(value["exports"][0]["line"], 0);
    assert_eq!(value["exports"][0]["character"], 16);
}

#[test]
fn test_class_with_private_method_keeps_public_properties() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/point.ts");
    let number = program.add_type(TypeSpec::new("number"));
    let helper_ty = program.add_type(TypeSpec::new("() => void"));

    let x = program.add_symbol(SymbolSpec::new(
        "x",
        DeclarationKind::Variable,
        1,
        2,
        number,
    ));
    let y = program.add_symbol(SymbolSpec::new(
        "y",
        DeclarationKind::Variable,
        2,
        2,
        number,
    ));
    let helper = program.add_symbol(
        SymbolSpec::new("helper", DeclarationKind::Variable, 3, 2, helper_ty)
            .with_bare_tag("private"),
    );
    let instance = program.add_type(
        TypeSpec::new("Point")
            .with_property(x)
            .with_property(y)
            .with_property(helper),
    );
    let ctor = program.add_signature(SignatureSpec::new("new () => Point", instance));
    let class_ty =
        program.add_type(TypeSpec::new("typeof Point").with_construct_signature(ctor));
    let point = program.add_symbol(SymbolSpec::new(
        "Point",
        DeclarationKind::Class,
        0,
        13,
        class_ty,
    ));
    program.export(file, point);

    let doc = DocExtractor::new(&program).extract();
    let DocEntry::Class(class) = &doc.exports[0] else {
        panic!("expected a class entry");
    };
    let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(class.constructors.len(), 1);
}

#[test]
fn test_private_class_leaves_no_trace() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/secret.ts");
    let number = program.add_type(TypeSpec::new("number"));

    let key = program.add_symbol(SymbolSpec::new(
        "key",
        DeclarationKind::Variable,
        1,
        2,
        number,
    ));
    let instance = program.add_type(TypeSpec::new("Vault").with_property(key));
    let ctor = program.add_signature(SignatureSpec::new("new () => Vault", instance));
    let class_ty =
        program.add_type(TypeSpec::new("typeof Vault").with_construct_signature(ctor));
    let vault = program.add_symbol(
        SymbolSpec::new("Vault", DeclarationKind::Class, 0, 13, class_ty)
            .with_bare_tag("private"),
    );
    program.export(file, vault);

    // A public sibling proves the file itself is still visited.
    let answer = program.add_symbol(SymbolSpec::new(
        "answer",
        DeclarationKind::Variable,
        5,
        13,
        number,
    ));
    program.export(file, answer);

    let doc = DocExtractor::new(&program).extract();
    assert_eq!(doc.exports.len(), 1);
    assert_eq!(doc.exports[0].name(), "answer");

    // Not even a redacted stub may survive serialization.
    let json = doc.to_json().unwrap();
    assert!(!json.contains("Vault"));
    assert!(!json.contains("key"));
}

#[test]
fn test_category_tag_moves_entries_out_of_exports() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/shapes.ts");
    let number = program.add_type(TypeSpec::new("number"));
    let sig = program.add_signature(SignatureSpec::new("(r: number) => number", number));
    let fn_ty = program.add_type(TypeSpec::new("(r: number) => number").with_call_signature(sig));

    let area = program.add_symbol(
        SymbolSpec::new("area", DeclarationKind::Function, 0, 16, fn_ty)
            .with_tag("category", "shapes"),
    );
    let perimeter = program.add_symbol(
        SymbolSpec::new("perimeter", DeclarationKind::Function, 4, 16, fn_ty)
            .with_tag("category", "shapes"),
    );
    program.export(file, perimeter);
    program.export(file, area);

    let doc = DocExtractor::new(&program).extract();
    assert!(doc.exports.is_empty());
    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].name, "shapes");

    // Position order survives categorization even though the symbols were
    // reported out of order.
    let names: Vec<&str> = doc.categories[0]
        .entries
        .iter()
        .map(DocEntry::name)
        .collect();
    assert_eq!(names, vec!["area", "perimeter"]);
}

#[test]
fn test_ambient_root_yields_empty_model() {
    let mut program = ScriptedProgram::new();
    let file = program.add_ambient_file("src/globals.d.ts");
    let number = program.add_type(TypeSpec::new("number"));
    let phantom = program.add_symbol(SymbolSpec::new(
        "phantom",
        DeclarationKind::Variable,
        0,
        13,
        number,
    ));
    program.export(file, phantom);

    let doc = DocExtractor::new(&program).extract();
    assert!(doc.exports.is_empty());
    assert!(doc.categories.is_empty());
}

#[test]
fn test_every_symbol_lands_in_exactly_one_place() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/mixed.ts");
    let number = program.add_type(TypeSpec::new("number"));

    let plain = program.add_symbol(SymbolSpec::new(
        "plain",
        DeclarationKind::Variable,
        0,
        13,
        number,
    ));
    let shaped = program.add_symbol(
        SymbolSpec::new("shaped", DeclarationKind::Variable, 1, 13, number)
            .with_tag("category", "shapes"),
    );
    let colored = program.add_symbol(
        SymbolSpec::new("colored", DeclarationKind::Variable, 2, 13, number)
            .with_tag("category", "colors"),
    );
    program.export(file, plain);
    program.export(file, shaped);
    program.export(file, colored);

    let doc = DocExtractor::new(&program).extract();
    let mut all: Vec<&str> = doc.all_entries().map(DocEntry::name).collect();
    all.sort_unstable();
    assert_eq!(all, vec!["colored", "plain", "shaped"]);
    assert_eq!(doc.exports.len(), 1);
    assert_eq!(doc.categories.len(), 2);
}

#[test]
fn test_positions_non_decreasing_within_file() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/order.ts");
    let number = program.add_type(TypeSpec::new("number"));

    // Export in scrambled order relative to source positions.
    for (name, line, character) in [("d", 7, 0), ("a", 1, 4), ("c", 3, 9), ("b", 3, 2)] {
        let symbol = program.add_symbol(SymbolSpec::new(
            name,
            DeclarationKind::Variable,
            line,
            character,
            number,
        ));
        program.export(file, symbol);
    }

    let doc = DocExtractor::new(&program).extract();
    let positions: Vec<(u32, u32)> = doc.exports.iter().map(DocEntry::position).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    let names: Vec<&str> = doc.exports.iter().map(DocEntry::name).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_ordering_is_per_file_then_concatenated() {
    let mut program = ScriptedProgram::new();
    let first = program.add_file("src/a.ts");
    let second = program.add_file("src/b.ts");
    let number = program.add_type(TypeSpec::new("number"));

    let a_late = program.add_symbol(SymbolSpec::new(
        "aLate",
        DeclarationKind::Variable,
        8,
        0,
        number,
    ));
    let a_early = program.add_symbol(SymbolSpec::new(
        "aEarly",
        DeclarationKind::Variable,
        2,
        0,
        number,
    ));
    let b_only = program.add_symbol(SymbolSpec::new(
        "bOnly",
        DeclarationKind::Variable,
        0,
        0,
        number,
    ));
    program.export(first, a_late);
    program.export(first, a_early);
    program.export(second, b_only);

    let doc = DocExtractor::new(&program).extract();
    // Each file is ordered internally; files concatenate in program order,
    // so b.ts's line 0 entry comes after a.ts's entries.
    let names: Vec<&str> = doc.exports.iter().map(DocEntry::name).collect();
    assert_eq!(names, vec!["aEarly", "aLate", "bOnly"]);
}

#[test]
fn test_repeated_tag_folds_last_wins_array_keeps_all() {
    let mut program = ScriptedProgram::new();
    let file = program.add_file("src/tags.ts");
    let number = program.add_type(TypeSpec::new("number"));
    let tagged = program.add_symbol(
        SymbolSpec::new("tagged", DeclarationKind::Variable, 0, 13, number)
            .with_tag("category", "first")
            .with_bare_tag("deprecated")
            .with_tag("category", "second"),
    );
    program.export(file, tagged);

    let doc = DocExtractor::new(&program).extract();
    // Last occurrence wins the map, so the entry lands in "second".
    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].name, "second");

    let symbol = doc.categories[0].entries[0].symbol();
    assert_eq!(symbol.tags["category"], "second");
    // Bare tag present as empty string, never omitted.
    assert_eq!(symbol.tags["deprecated"], "");
    // The array still carries every occurrence in declaration order.
    let array: Vec<&str> = symbol.tags_array.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(array, vec!["category", "deprecated", "category"]);
    assert_eq!(symbol.tags_array[0].text.as_deref(), Some("first"));
    assert_eq!(symbol.tags_array[2].text.as_deref(), Some("second"));
}

#[test]
fn test_generate_through_provider() {
    let provider = ScriptedProvider::new().with_program("src/math.ts", add_function_program());
    let config = ProviderConfig::default();

    let doc = generate_documentation(&provider, Path::new("src/math.ts"), &config).unwrap();
    assert_eq!(doc.exports.len(), 1);
    assert_eq!(doc.exports[0].name(), "add");
}

#[test]
fn test_missing_root_aborts_with_no_partial_model() {
    let provider = ScriptedProvider::new().with_program("src/math.ts", add_function_program());
    let config = ProviderConfig::default();

    let err = generate_documentation(&provider, Path::new("src/absent.ts"), &config).unwrap_err();
    assert!(matches!(
        err,
        tydoc_core::ExtractError::Provider(ProviderError::RootNotFound(_))
    ));
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let provider = ScriptedProvider::new().with_program("src/math.ts", add_function_program());
    let config = ProviderConfig::default();
    let root = Path::new("src/math.ts");

    let first = generate_documentation(&provider, root, &config).unwrap();
    let second = generate_documentation(&provider, root, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}
