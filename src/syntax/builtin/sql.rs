//! SQL language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::ColorCategory;

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("SQL");
    lang.add_extension("sql");
    lang.case_sensitive = false;
    lang.auto_indentation = false;

    lang.add_keywords(&[
        "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
        "CONSTRAINT", "CREATE", "DATABASE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
        "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN", "INDEX",
        "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL",
        "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET",
        "TABLE", "THEN", "TOP", "TRUNCATE", "UNION", "UNIQUE", "UPDATE", "VALUES", "VIEW",
        "WHEN", "WHERE",
    ]);

    lang.add_identifiers(&[
        "AVG", "CAST", "COALESCE", "CONVERT", "COUNT", "GETDATE", "ISNULL", "LEN", "LOWER",
        "MAX", "MIN", "NULLIF", "ROUND", "SUBSTRING", "SUM", "UPPER",
    ]);

    lang.set_comments("--", "/*", "*/");

    lang.add_rule(r"'(?:[^']|'')*'", ColorCategory::String);
    lang.add_rule(r#""(?:[^"]|"")*""#, ColorCategory::String);
    lang.add_rule(r"[0-9]+\.?[0-9]*(?:e[+-]?[0-9]+)?", ColorCategory::Number);
    lang.add_rule(r"[@#]?[a-z_][a-z0-9_]*", ColorCategory::Identifier);
    lang.add_rule(r"[\[\]{}()\-+*/%<>=!;,.]", ColorCategory::Punctuation);

    lang
}
