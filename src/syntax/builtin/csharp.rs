//! C# language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::ColorCategory;

/// Name the built-in C# table registers under
pub const NAME: &str = "C#";

/// Create C# language definition
pub fn csharp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(NAME);
    lang.add_extension("cs");
    lang.add_extension("csx");

    lang.add_keywords(&[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
        "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
        "using", "virtual", "void", "volatile", "while",
        // contextual keywords
        "add", "alias", "and", "async", "await", "dynamic", "get", "global", "init", "nameof",
        "nint", "not", "notnull", "nuint", "or", "partial", "record", "remove", "required",
        "set", "value", "var", "when", "where", "with", "yield",
    ]);

    lang.add_identifiers(&[
        "Action", "Array", "Console", "DateTime", "Dictionary", "Enumerable", "Exception",
        "Func", "HashSet", "IDisposable", "IEnumerable", "List", "Math", "Nullable", "Object",
        "Span", "String", "StringBuilder", "Task", "TimeSpan", "Tuple", "Type", "ValueTask",
    ]);

    lang.set_comments("//", "/*", "*/");
    lang.preproc_char = Some('#');

    lang.add_rule(r#"@"(?:[^"]|"")*""#, ColorCategory::String);
    lang.add_rule(r#"\$?"(?:[^"\\]|\\.)*""#, ColorCategory::String);
    lang.add_rule(r"'(?:\\.|[^'\\])'", ColorCategory::CharLiteral);
    lang.add_rule(r"0[xX][0-9a-fA-F_]+[uUlL]*", ColorCategory::Number);
    lang.add_rule(
        r"[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9]+)?[fFdDmMuUlL]*",
        ColorCategory::Number,
    );
    lang.add_rule(r"@?[\p{L}_][\p{L}\p{N}_]*", ColorCategory::Identifier);
    lang.add_rule(r"[\[\]{}()\-+<>?:;!%^&|*/=~,.]", ColorCategory::Punctuation);

    lang
}
