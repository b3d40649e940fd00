//! Built-in language definitions
//!
//! This module provides language tables for common programming
//! languages. C# is normally driven by the hardcoded tokenizer; the others
//! run under the generic pattern highlighter.

pub mod csharp;
mod c;
mod lua;
mod python;
mod sql;

use super::language::LanguageDefinition;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        csharp::csharp_language(),
        c::c_language(),
        lua::lua_language(),
        python::python_language(),
        sql::sql_language(),
    ]
}
