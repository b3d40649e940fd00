//! C/C++ language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::ColorCategory;

/// Create C language definition (also works for C++)
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C");
    lang.add_extension("c");
    lang.add_extension("h");
    lang.add_extension("cpp");
    lang.add_extension("hpp");
    lang.add_extension("cc");
    lang.add_extension("cxx");

    lang.add_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
        "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn",
        "_Static_assert", "_Thread_local",
        // C++
        "bool", "catch", "class", "constexpr", "delete", "explicit", "false", "friend",
        "mutable", "namespace", "new", "noexcept", "nullptr", "operator", "private",
        "protected", "public", "template", "this", "throw", "true", "try", "typename", "using",
        "virtual",
    ]);

    lang.add_identifiers(&[
        "abort", "atoi", "calloc", "exit", "fclose", "fopen", "fprintf", "free", "malloc",
        "memcpy", "memset", "printf", "puts", "realloc", "size_t", "strcmp", "strcpy",
        "strlen", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "int8_t", "int16_t",
        "int32_t", "int64_t", "FILE", "NULL",
    ]);

    lang.set_comments("//", "/*", "*/");
    lang.preproc_char = Some('#');

    lang.add_rule(r#"L?"(?:[^"\\]|\\.)*""#, ColorCategory::String);
    lang.add_rule(r"'(?:\\.|[^'\\])'", ColorCategory::CharLiteral);
    lang.add_rule(r"0[xX][0-9a-fA-F]+[uUlL]*", ColorCategory::Number);
    lang.add_rule(
        r"[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?[fFlLuU]*",
        ColorCategory::Number,
    );
    lang.add_rule(r"[a-zA-Z_][a-zA-Z0-9_]*", ColorCategory::Identifier);
    lang.add_rule(r"[\[\]{}!%^&*()\-+=~|<>?/;,.:]", ColorCategory::Punctuation);

    lang
}
