//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::ColorCategory;

/// Create Python language definition
///
/// Python has no block comments; triple-quoted strings are only colored
/// when they open and close on the same line.
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    lang.add_keywords(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ]);

    lang.add_identifiers(&[
        "abs", "all", "any", "bool", "bytes", "callable", "chr", "dict", "dir", "enumerate",
        "filter", "float", "format", "getattr", "hasattr", "int", "isinstance", "iter", "len",
        "list", "map", "max", "min", "next", "object", "open", "ord", "print", "range", "repr",
        "reversed", "round", "set", "sorted", "str", "sum", "super", "tuple", "type", "zip",
    ]);

    lang.set_comments("#", "", "");

    lang.add_rule(r#"[fFrRbBuU]{0,2}"""(?:[^"\\]|\\.|"[^"]|""[^"])*""""#, ColorCategory::String);
    lang.add_rule(r#"[fFrRbBuU]{0,2}"(?:[^"\\]|\\.)*""#, ColorCategory::String);
    lang.add_rule(r"[fFrRbBuU]{0,2}'(?:[^'\\]|\\.)*'", ColorCategory::String);
    lang.add_rule(r"0[xX][0-9a-fA-F_]+", ColorCategory::Number);
    lang.add_rule(r"0[bB][01_]+", ColorCategory::Number);
    lang.add_rule(r"0[oO][0-7_]+", ColorCategory::Number);
    lang.add_rule(r"[0-9][0-9_]*\.?[0-9_]*(?:[eE][+-]?[0-9]+)?j?", ColorCategory::Number);
    lang.add_rule(r"[\p{L}_][\p{L}\p{N}_]*", ColorCategory::Identifier);
    lang.add_rule(r"[+\-*/%&|^!<>=@~()\[\]{}:;,.]", ColorCategory::Punctuation);

    lang
}
