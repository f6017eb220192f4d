use super::*;
use std::path::Path;

#[test]
fn from_path_maps_all_supported_extensions() {
    let cases = [
        ("a.rs", Some(LanguageId::Rust)),
        ("a.go", Some(LanguageId::Go)),
        ("a.py", Some(LanguageId::Python)),
        ("a.pyi", Some(LanguageId::Python)),
        ("a.js", Some(LanguageId::JavaScript)),
        ("a.mjs", Some(LanguageId::JavaScript)),
        ("a.cjs", Some(LanguageId::JavaScript)),
        ("a.ts", Some(LanguageId::TypeScript)),
        ("a.mts", Some(LanguageId::TypeScript)),
        ("a.cts", Some(LanguageId::TypeScript)),
        ("a.c", Some(LanguageId::C)),
        ("a.cpp", Some(LanguageId::Cpp)),
        ("a.cc", Some(LanguageId::Cpp)),
        ("a.cxx", Some(LanguageId::Cpp)),
        ("a.hpp", Some(LanguageId::Cpp)),
        ("a.h", Some(LanguageId::Cpp)),
        ("a.cs", Some(LanguageId::CSharp)),
        ("a.java", Some(LanguageId::Java)),
        ("a.rb", Some(LanguageId::Ruby)),
        ("a.php", Some(LanguageId::Php)),
        ("a.txt", None),
    ];

    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(Path::new(path)), expected);
    }
}

#[test]
fn runner_id_mapping_is_correct() {
    let cases = [
        (LanguageId::Rust, "rust"),
        (LanguageId::Go, "go"),
        (LanguageId::Python, "python"),
        (LanguageId::JavaScript, "javascript"),
        (LanguageId::TypeScript, "typescript"),
        (LanguageId::C, "c"),
        (LanguageId::Cpp, "c++"),
        (LanguageId::CSharp, "c#"),
        (LanguageId::Java, "java"),
        (LanguageId::Ruby, "ruby"),
        (LanguageId::Php, "php"),
    ];

    for (language, expected) in cases {
        assert_eq!(language.runner_id(), expected);
    }
}

#[test]
fn as_str_differs_from_runner_id_only_for_aliased_languages() {
    assert_eq!(LanguageId::Cpp.as_str(), "cpp");
    assert_eq!(LanguageId::CSharp.as_str(), "csharp");
    assert_eq!(LanguageId::Python.as_str(), LanguageId::Python.runner_id());
}
