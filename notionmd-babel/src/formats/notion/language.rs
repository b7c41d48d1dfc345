//! Code-block language names accepted by the remote store.
//!
//! Fence info strings are free-form (`ts`, `c++`, `Dockerfile`); the store
//! only accepts its own vocabulary, so every language goes through
//! [`map_language`] on the way out.

use crate::ir::nodes::PLAIN_TEXT_LANGUAGE;

/// Alias → store language. Lookup keys are lower-case.
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("c", "c"),
    ("cpp", "c++"),
    ("cc", "c++"),
    ("cxx", "c++"),
    ("c++", "c++"),
    ("cs", "c#"),
    ("csharp", "c#"),
    ("c#", "c#"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("javascript", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("typescript", "typescript"),
    ("py", "python"),
    ("python", "python"),
    ("rb", "ruby"),
    ("ruby", "ruby"),
    ("sh", "shell"),
    ("shell", "shell"),
    ("zsh", "shell"),
    ("fish", "shell"),
    ("bash", "bash"),
    ("ps1", "powershell"),
    ("powershell", "powershell"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("tex", "latex"),
    ("latex", "latex"),
    ("hs", "haskell"),
    ("haskell", "haskell"),
    ("rs", "rust"),
    ("rust", "rust"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("kotlin", "kotlin"),
    ("scala", "scala"),
    ("clj", "clojure"),
    ("clojure", "clojure"),
    ("pl", "perl"),
    ("perl", "perl"),
    ("php", "php"),
    ("r", "r"),
    ("sql", "sql"),
    ("html", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("sass", "sass"),
    ("less", "less"),
    ("json", "json"),
    ("xml", "xml"),
    ("dockerfile", "docker"),
    ("docker", "docker"),
    ("makefile", "makefile"),
    ("text", PLAIN_TEXT_LANGUAGE),
    ("txt", PLAIN_TEXT_LANGUAGE),
    ("plain text", PLAIN_TEXT_LANGUAGE),
];

/// Map a fence language to the store vocabulary.
///
/// Input is trimmed and lower-cased first; anything unknown, including the
/// empty string, maps to `"plain text"`.
pub fn map_language(language: &str) -> &'static str {
    let key = language.trim().to_lowercase();
    LANGUAGE_TABLE
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, target)| *target)
        .unwrap_or(PLAIN_TEXT_LANGUAGE)
}
