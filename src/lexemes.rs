//! Reserved words and lexeme patterns for each sublanguage and for the command shell.
//!
//! All patterns are anchored with `\A`: they only ever match at the cursor.
//! Word patterns are built longest-word-first and end in a word boundary, so
//! `lin` never matches the front of `lincat` and `in` never matches `incomplete`.

use regex::Regex;

// Grammar definitions (GF).
pub const GF_KEYWORDS: &[&str] = &[
    "flags", "startcat", "cat", "fun", "of", "lin", "lincat", "with", "open", "in", "param",
    "linref", "table", "let", "case", "overload", "lindef", "def", "data", "oper",
];
pub const GF_BUILTINS: &[&str] = &["Str"];
pub const GF_DEFINERS: &[&str] = &[
    "abstract",
    "concrete",
    "resource",
    "incomplete",
    "instance",
    "interface",
];

// Logic programs (ELPI).
pub const ELPI_KEYWORDS: &[&str] = &["kind", "type", "prop", "accumulate", "pi", "sigma"];
pub const ELPI_BUILTINS: &[&str] = &["int", "string", "list"];
pub const ELPI_DEFINERS: &[&str] = &["elpi"];

// Modules and theories (MMT).
pub const MMT_KEYWORDS: &[&str] = &["include"];
pub const MMT_BUILTINS: &[&str] = &["prop", "type"];
pub const MMT_DEFINERS: &[&str] = &["theory", "view"];

/// Commands understood by the kernel itself.
pub const KERNEL_COMMANDS: &[&str] = &[
    "show",
    "archive",
    "subdir",
    "clean",
    "help",
    "export",
    "construct",
];

/// Commands forwarded to the grammar tool, by full name.
pub const GF_COMMANDS: &[&str] = &[
    "abstract_info",
    "align_words",
    "clitic_analyse",
    "compute_conctete",
    "define_command",
    "depencency_graph",
    "define_tree",
    "empty",
    "example_based",
    "execute_history",
    "generate_random",
    "generate_trees",
    "import",
    "linearize",
    "linearize_chunks",
    "morpho_analyse",
    "morpho_quiz",
    "parse",
    "print_grammar",
    "print_history",
    "put_string",
    "put_tree",
    "quit",
    "reload",
    "read_file",
    "rank_trees",
    "show_dependencies",
    "set_encoding",
    "show_operations",
    "system_pipe",
    "show_source",
    "translation_quiz",
    "to_trie",
    "unicode_table",
    "visualize_dependency",
    "visualize_parse",
    "visualize_tree",
    "write_file",
];

/// Abbreviated grammar-tool commands.
pub const GF_COMMAND_ABBREVIATIONS: &[&str] = &[
    "ai", "al", "ca", "cc", "dc", "dg", "dt", "e", "eb", "eh", "gr", "gt", "h", "i", "l", "lc",
    "ma", "mq", "p", "pg", "ph", "ps", "pt", "q", "r", "rf", "rt", "sd", "se", "so", "sp", "ss",
    "tq", "tt", "ut", "vd", "vp", "vt", "wf",
];

/// Sequence the host uses when toggling line comments.
pub const LINE_COMMENT: &str = "--";

/// Length in bytes of the match of `re` at the very start of `text`.
///
/// Empty matches are reported as no match: a classifier that matched nothing
/// must not be allowed to claim a token.
pub fn match_len(re: &Regex, text: &str) -> Option<usize> {
    re.find(text)
        .filter(|m| m.start() == 0 && !m.is_empty())
        .map(|m| m.end())
}

/// Build an anchored pattern matching any of `words` as a whole word.
fn word_regex(words: &[&str]) -> Regex {
    let mut words = words.to_vec();
    // Longest first, so that no word is shadowed by one of its prefixes.
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"\A(?:{})\b", alternatives.join("|")))
        .expect("could not compile regex for word list")
}

/// Declare a lazily-compiled pattern accessor.
macro_rules! lexeme {
    ($(#[$meta:meta])* $name:ident = words $words:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static Regex {
            static MATCH: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
            MATCH.get_or_init(|| word_regex($words))
        }
    };
    ($(#[$meta:meta])* $name:ident = $pattern:literal) => {
        $(#[$meta])*
        pub fn $name() -> &'static Regex {
            static MATCH: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
            MATCH.get_or_init(|| {
                Regex::new($pattern)
                    .expect(concat!("could not compile regex for ", stringify!($name)))
            })
        }
    };
}

lexeme!(gf_keywords = words GF_KEYWORDS);
lexeme!(gf_builtins = words GF_BUILTINS);
lexeme!(gf_definers = words GF_DEFINERS);
lexeme!(gf_separators = r"\A[:;]");
lexeme!(gf_comment_open = r"\A\{-");
lexeme!(gf_comment_close = r"\A-\}");
lexeme!(gf_line_comment = r"\A--");

lexeme!(elpi_keywords = words ELPI_KEYWORDS);
lexeme!(elpi_builtins = words ELPI_BUILTINS);
lexeme!(elpi_definers = words ELPI_DEFINERS);
lexeme!(elpi_operators = r"\A(?::-|->)");
lexeme!(elpi_comment_open = r"\A/\*");
lexeme!(elpi_comment_close = r"\A\*/");
lexeme!(elpi_line_comment = r"\A%");

lexeme!(mmt_keywords = words MMT_KEYWORDS);
lexeme!(mmt_builtins = words MMT_BUILTINS);
lexeme!(mmt_definers = words MMT_DEFINERS);
lexeme!(mmt_separators = r"\A[:?]");
lexeme!(
    /// U+2758, separating the components of a declaration.
    mmt_object_delimiter = r"\A\x{2758}"
);
lexeme!(
    /// U+2759, ending a declaration.
    mmt_declaration_delimiter = r"\A\x{2759}"
);
lexeme!(
    /// U+275A, ending a module.
    mmt_module_delimiter = r"\A\x{275A}"
);
lexeme!(mmt_line_comment = r"\A(?:/T|//)");
lexeme!(
    /// Start of a URI reference.
    uri_scheme = r"\Ahttp"
);
lexeme!(
    /// A run of word characters and dots inside a URI.
    uri_word = r"\A[\w.]+"
);

lexeme!(
    /// Command options of the shape `-name=value`.
    command_option = r"\A-\w*=\w*"
);
lexeme!(
    /// Bare single-letter command flags.
    command_flag = r"\A(?:-v|-c)"
);

lexeme!(
    /// Letters, underscore and any character from U+00A1 up start an
    /// identifier; digits may follow.
    identifier = r"\A[_A-Za-z\x{A1}-\x{10FFFF}][_A-Za-z0-9\x{A1}-\x{10FFFF}]*"
);
lexeme!(operator = r"\A(?:[-+*/%&|^]=?|[<>=]+|//=?|\*\*=?|!=|[~!@])");
lexeme!(number = r"\A[0-9]+");

/// Whether `word` is one of the shell's commands, and which kind.
pub fn command_kind(word: &str) -> Option<CommandKind> {
    if KERNEL_COMMANDS.contains(&word) {
        Some(CommandKind::Kernel)
    } else if GF_COMMANDS.contains(&word) || GF_COMMAND_ABBREVIATIONS.contains(&word) {
        Some(CommandKind::GrammarTool)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Kernel,
    GrammarTool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_keyword_wins() {
        let cases = [
            ("lincat Foo", Some(6)),
            ("lin foo", Some(3)),
            ("lindef", Some(6)),
            ("linref;", Some(6)),
            ("in", Some(2)),
            ("incomplete", None),
            ("cats", None),
            ("startcat=S", Some(8)),
        ];
        for (i, (text, want)) in cases.into_iter().enumerate() {
            assert_eq!(
                match_len(gf_keywords(), text),
                want,
                "unexpected match in case {} ({:?})",
                i,
                text
            );
        }
    }

    #[test]
    fn words_are_whole() {
        assert_eq!(match_len(gf_definers(), "incomplete concrete"), Some(10));
        assert_eq!(match_len(gf_definers(), "abstracts"), None);
        assert_eq!(match_len(elpi_definers(), "elpi_x"), None);
        assert_eq!(match_len(mmt_definers(), "view:"), Some(4));
        assert_eq!(match_len(gf_builtins(), "Strs"), None);
    }

    #[test]
    fn only_matches_at_start() {
        assert_eq!(match_len(gf_keywords(), " cat"), None);
        assert_eq!(match_len(operator(), "a+b"), None);
        assert_eq!(match_len(number(), "x1"), None);
    }

    #[test]
    fn recognize_identifiers() -> Result<(), String> {
        for ident in ["hello", "_x", "N2", "ÄpfelBaum", "λx", "snake_case_1", "x𝔸y", "𝔸"] {
            if match_len(identifier(), ident) != Some(ident.len()) {
                return Err(format!("did not find identifier {}", ident));
            }
        }
        for not_ident in ["1abc", "-x", ";", " x"] {
            if match_len(identifier(), not_ident).is_some() {
                return Err(format!("unexpected identifier in {:?}", not_ident));
            }
        }
        Ok(())
    }

    #[test]
    fn identifier_stops_at_punctuation() {
        assert_eq!(match_len(identifier(), "Foo.bar"), Some(3));
        assert_eq!(match_len(identifier(), "f(x)"), Some(1));
    }

    #[test]
    fn operators() {
        let cases = [
            ("+", 1),
            ("+=", 2),
            ("<=>", 3),
            ("//", 1),
            ("!=", 2),
            ("!", 1),
            ("~x", 1),
            ("@", 1),
        ];
        for (i, (text, want)) in cases.into_iter().enumerate() {
            assert_eq!(
                match_len(operator(), text),
                Some(want),
                "unexpected operator length in case {}",
                i
            );
        }
        assert_eq!(match_len(operator(), "#"), None);
    }

    #[test]
    fn command_options() {
        assert_eq!(match_len(command_option(), "-number=5"), Some(9));
        assert_eq!(match_len(command_option(), "-lang=Eng rest"), Some(9));
        assert_eq!(match_len(command_option(), "-tr"), None);
        assert_eq!(match_len(command_flag(), "-v"), Some(2));
        assert_eq!(match_len(command_flag(), "-c"), Some(2));
        assert_eq!(match_len(command_flag(), "-x"), None);
    }

    #[test]
    fn commands() {
        assert_eq!(command_kind("archive"), Some(CommandKind::Kernel));
        assert_eq!(command_kind("export"), Some(CommandKind::Kernel));
        assert_eq!(command_kind("linearize"), Some(CommandKind::GrammarTool));
        assert_eq!(command_kind("gr"), Some(CommandKind::GrammarTool));
        assert_eq!(command_kind("import"), Some(CommandKind::GrammarTool));
        assert_eq!(command_kind("linearise"), None);
    }

    #[test]
    fn mmt_delimiters() {
        assert_eq!(match_len(mmt_object_delimiter(), "❘"), Some(3));
        assert_eq!(match_len(mmt_declaration_delimiter(), "❙ x"), Some(3));
        assert_eq!(match_len(mmt_module_delimiter(), "❚"), Some(3));
        assert_eq!(match_len(mmt_module_delimiter(), "❙"), None);
    }

    #[test]
    fn comments() {
        assert_eq!(match_len(gf_comment_open(), "{- x"), Some(2));
        assert_eq!(match_len(gf_comment_close(), "-} x"), Some(2));
        assert_eq!(match_len(elpi_comment_open(), "/* x"), Some(2));
        assert_eq!(match_len(elpi_comment_close(), "*/"), Some(2));
        assert_eq!(match_len(mmt_line_comment(), "/T note"), Some(2));
        assert_eq!(match_len(mmt_line_comment(), "// note"), Some(2));
        assert_eq!(match_len(mmt_line_comment(), "/ note"), None);
    }
}
