//! Lua language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::ColorCategory;

/// Create Lua language definition
pub fn lua_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Lua");
    lang.add_extension("lua");

    lang.add_keywords(&[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto",
        "if", "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until",
        "while",
    ]);

    lang.add_identifiers(&[
        "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs", "load",
        "loadfile", "next", "pairs", "pcall", "print", "rawequal", "rawget", "rawlen",
        "rawset", "require", "select", "setmetatable", "tonumber", "tostring", "type",
        "xpcall", "coroutine", "io", "math", "os", "string", "table", "utf8",
    ]);

    // Block comments are tried before the line comment marker
    lang.set_comments("--", "--[[", "]]");

    lang.add_rule(r#""(?:[^"\\]|\\.)*""#, ColorCategory::String);
    lang.add_rule(r"'(?:[^'\\]|\\.)*'", ColorCategory::String);
    lang.add_rule(r"\[\[.*?\]\]", ColorCategory::String);
    lang.add_rule(r"0[xX][0-9a-fA-F]+", ColorCategory::Number);
    lang.add_rule(r"[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?", ColorCategory::Number);
    lang.add_rule(r"[a-zA-Z_][a-zA-Z0-9_]*", ColorCategory::Identifier);
    lang.add_rule(r"[\[\]{}()\-+*/%^#=~<>;:,.]", ColorCategory::Punctuation);

    lang
}
