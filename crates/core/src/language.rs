//! File-name based language classification.
//!
//! The extension table here is the one shared with syntax highlighting, so a
//! viewer never folds a file as one language and colours it as another.

use serde::{Deserialize, Serialize};

/// Language tag selecting which structural detection patterns apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Python,
    Java,
    Kotlin,
    Scala,
    C,
    Cpp,
    CSharp,
    Json,
    Yaml,
    Xml,
    Toml,
    Ini,
    Bash,
    Sql,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Dart,
    Lua,
    R,
    Matlab,
    Markdown,
    Latex,
    Dockerfile,
    Makefile,
    Clojure,
    Elixir,
    Erlang,
    /// Fallback for anything the table does not know
    Text,
}

/// Extension table, lower-case keys
const EXTENSIONS: &[(&str, Language)] = &[
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("javascript", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("typescript", Language::TypeScript),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("css", Language::Css),
    ("scss", Language::Css),
    ("sass", Language::Css),
    ("less", Language::Css),
    ("py", Language::Python),
    ("python", Language::Python),
    ("pyx", Language::Python),
    ("pyw", Language::Python),
    ("java", Language::Java),
    ("kt", Language::Kotlin),
    ("kotlin", Language::Kotlin),
    ("scala", Language::Scala),
    ("groovy", Language::Java),
    ("c", Language::C),
    ("h", Language::C),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("cxx", Language::Cpp),
    ("c++", Language::Cpp),
    ("hpp", Language::Cpp),
    ("cs", Language::CSharp),
    ("csharp", Language::CSharp),
    ("json", Language::Json),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("xml", Language::Xml),
    ("toml", Language::Toml),
    ("ini", Language::Ini),
    ("sh", Language::Bash),
    ("bash", Language::Bash),
    ("zsh", Language::Bash),
    ("fish", Language::Bash),
    ("sql", Language::Sql),
    ("go", Language::Go),
    ("rs", Language::Rust),
    ("rust", Language::Rust),
    ("php", Language::Php),
    ("rb", Language::Ruby),
    ("ruby", Language::Ruby),
    ("swift", Language::Swift),
    ("dart", Language::Dart),
    ("lua", Language::Lua),
    ("r", Language::R),
    ("matlab", Language::Matlab),
    ("md", Language::Markdown),
    ("markdown", Language::Markdown),
    ("tex", Language::Latex),
    ("latex", Language::Latex),
    ("csv", Language::Text),
    ("tsv", Language::Text),
    ("dockerfile", Language::Dockerfile),
    ("makefile", Language::Makefile),
    ("gitignore", Language::Text),
    ("gitattributes", Language::Text),
    ("vue", Language::JavaScript),
    ("svelte", Language::JavaScript),
    ("clj", Language::Clojure),
    ("clojure", Language::Clojure),
    ("ex", Language::Elixir),
    ("exs", Language::Elixir),
    ("elixir", Language::Elixir),
    ("erl", Language::Erlang),
    ("erlang", Language::Erlang),
    ("txt", Language::Text),
    ("text", Language::Text),
    ("log", Language::Text),
    ("conf", Language::Text),
    ("config", Language::Text),
];

impl Language {
    /// Look up a bare extension (without the dot), case-insensitively
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        EXTENSIONS
            .iter()
            .find(|(key, _)| *key == ext)
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Text)
    }

    /// Classify a file name by the text after its last `.`
    pub fn from_file_name(file_name: &str) -> Self {
        let ext = file_name.rsplit('.').next().unwrap_or_default();
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Python => "python",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Xml => "xml",
            Language::Toml => "toml",
            Language::Ini => "ini",
            Language::Bash => "bash",
            Language::Sql => "sql",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Dart => "dart",
            Language::Lua => "lua",
            Language::R => "r",
            Language::Matlab => "matlab",
            Language::Markdown => "markdown",
            Language::Latex => "latex",
            Language::Dockerfile => "dockerfile",
            Language::Makefile => "makefile",
            Language::Clojure => "clojure",
            Language::Elixir => "elixir",
            Language::Erlang => "erlang",
            Language::Text => "text",
        }
    }

    /// Whether a highlighter has a grammar for this tag
    pub fn is_highlightable(&self) -> bool {
        *self != Language::Text
    }

    /// Whether a viewer should offer fold glyphs for this language.
    ///
    /// This is a presentation hint only; detection runs for every language.
    pub fn supports_folding(&self) -> bool {
        matches!(
            self,
            Language::JavaScript
                | Language::TypeScript
                | Language::Json
                | Language::Python
                | Language::Java
                | Language::Cpp
                | Language::C
                | Language::CSharp
                | Language::Go
                | Language::Rust
                | Language::Php
                | Language::Ruby
        )
    }

    /// The full extension table, in declaration order
    pub fn extension_table() -> &'static [(&'static str, Language)] {
        EXTENSIONS
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a file name to its language tag
pub fn classify(file_name: &str) -> Language {
    Language::from_file_name(file_name)
}
