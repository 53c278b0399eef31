//! Per-language dialect configuration tables
//!
//! One shared extraction engine, parameterized by regex configuration.
//! Instead of implementing a separate extractor per language, each dialect
//! is a data record: definition patterns with capture roles, comment
//! markers, declaration-line shapes, and a reserved keyword set.
//!
//! Definition patterns run against the *stripped* buffer in multiline mode
//! and use the named groups `name` (required) and `params` (optional).
//! Declaration shapes run against trimmed raw lines during call-site
//! discovery to reject definition lines that would otherwise look like
//! invocations.

use lazy_static::lazy_static;
use regex::Regex;

use super::models::{EntityKind, Language};

/// How parameter tokens are reduced to a bare name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// Strip defaults after `=` and annotations after `:`, keep the rest
    /// (JS/TS, Python, Ruby, R)
    Plain,
    /// Strip `:` annotations, then take the last whitespace token
    /// (Rust, Swift)
    AnnotatedLast,
    /// Type precedes the name: take the last whitespace token
    /// (Java, C, C++, PHP)
    TypedLast,
    /// Name precedes the type: take the first whitespace token (Go)
    NameFirst,
}

/// A single definition pattern with the entity kind it yields
pub struct DefPattern {
    pub regex: Regex,
    pub kind: EntityKind,
}

/// Configuration record for one language family
pub struct DialectConfig {
    pub name: &'static str,
    /// Function/method/arrow patterns, in match-priority order
    pub function_patterns: Vec<DefPattern>,
    /// Type-definition patterns (class/struct/trait/module/namespace),
    /// scanned in a separate pass and appended after function-like entities
    pub type_patterns: Vec<DefPattern>,
    /// Line prefixes that mark a comment-only line
    pub comment_markers: &'static [&'static str],
    /// Trimmed-line shapes that mark a line as declaration-looking
    pub declaration_shapes: Vec<Regex>,
    /// Reserved control-flow words that regex matches must never yield
    pub keywords: &'static [&'static str],
    pub param_style: ParamStyle,
}

impl DialectConfig {
    fn new(
        name: &'static str,
        comment_markers: &'static [&'static str],
        keywords: &'static [&'static str],
        param_style: ParamStyle,
    ) -> Self {
        Self {
            name,
            function_patterns: Vec::new(),
            type_patterns: Vec::new(),
            comment_markers,
            declaration_shapes: Vec::new(),
            keywords,
            param_style,
        }
    }

    fn with_function(mut self, regex: Regex, kind: EntityKind) -> Self {
        self.function_patterns.push(DefPattern { regex, kind });
        self
    }

    fn with_type(mut self, regex: Regex) -> Self {
        self.type_patterns.push(DefPattern {
            regex,
            kind: EntityKind::TypeDefinition,
        });
        self
    }

    fn with_declaration_shape(mut self, regex: Regex) -> Self {
        self.declaration_shapes.push(regex);
        self
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.contains(&name)
    }
}

const SLASH_MARKERS: &[&str] = &["//", "/*", "*"];
const HASH_MARKERS: &[&str] = &["#"];
const PHP_MARKERS: &[&str] = &["//", "#", "/*", "*"];

const JS_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "switch", "catch", "do", "return", "function", "typeof", "new",
    "delete", "throw", "in", "of", "await", "yield",
];
const PYTHON_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "while", "for", "with", "return", "print", "lambda", "yield", "raise",
    "assert", "del", "except", "import",
];
const JAVA_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "switch", "catch", "return", "synchronized", "new", "throw",
    "try", "finally", "do", "assert", "super", "this",
];
const C_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "switch", "return", "sizeof", "do", "case",
];
const CPP_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "switch", "return", "sizeof", "do", "case", "catch", "throw",
    "new", "delete", "try", "operator",
];
const GO_KEYWORDS: &[&str] = &[
    "if", "for", "switch", "select", "return", "go", "defer", "range", "else", "case",
];
const RUST_KEYWORDS: &[&str] = &[
    "if", "while", "for", "match", "return", "loop", "move", "else", "let", "in",
];
const PHP_KEYWORDS: &[&str] = &[
    "if", "else", "elseif", "while", "for", "foreach", "switch", "catch", "return", "echo", "new",
    "isset", "unset", "empty", "die", "list", "array",
];
const RUBY_KEYWORDS: &[&str] = &[
    "if", "elsif", "unless", "while", "until", "case", "return", "puts", "self", "end", "yield",
    "raise", "require", "loop", "lambda", "proc",
];
const SWIFT_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "switch", "catch", "return", "guard", "repeat", "defer", "func",
    "init", "super", "self", "in",
];
const R_KEYWORDS: &[&str] = &["if", "else", "while", "for", "repeat", "function", "return"];

/// JavaScript and TypeScript share one dialect family; TypeScript-only
/// syntax (visibility modifiers, type annotations) is folded into the
/// shared patterns where it is harmless for plain JavaScript.
fn js_family(name: &'static str) -> DialectConfig {
    DialectConfig::new(name, SLASH_MARKERS, JS_KEYWORDS, ParamStyle::Plain)
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(?P<name>\w+)\s*\((?P<params>[^)]*)\)",
            )
            .unwrap(),
            EntityKind::Function,
        )
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:export\s+)?(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?\((?P<params>[^)]*)\)\s*(?::[^=]*)?=>",
            )
            .unwrap(),
            EntityKind::ArrowFunction,
        )
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:export\s+)?(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?(?P<params>[A-Za-z_]\w*)\s*=>",
            )
            .unwrap(),
            EntityKind::ArrowFunction,
        )
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|protected|readonly|static|async)\s+)*(?P<name>\w+)\s*\((?P<params>[^)]*)\)\s*\{",
            )
            .unwrap(),
            EntityKind::Method,
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(?P<name>\w+)")
                .unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\b").unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\b").unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:const|let|var)\s+\w+\s*=\s*(?:async\s+)?(?:\([^)]*\)\s*(?::[^=]*)?|\w+\s*)=>")
                .unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^(?:public|private|protected|readonly|static)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^@\w+").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:async\s+)?\w+\s*\([^)]*\)\s*\{\s*$").unwrap())
}

fn python_config() -> DialectConfig {
    DialectConfig::new("python", HASH_MARKERS, PYTHON_KEYWORDS, ParamStyle::Plain)
        .with_function(
            Regex::new(r"(?m)^[ \t]*(?:async\s+)?def\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)")
                .unwrap(),
            EntityKind::Function,
        )
        .with_type(Regex::new(r"(?m)^[ \t]*class\s+(?P<name>\w+)").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:async\s+)?def\b").unwrap())
        .with_declaration_shape(Regex::new(r"^class\b").unwrap())
        .with_declaration_shape(Regex::new(r"^@\w+").unwrap())
}

fn java_config() -> DialectConfig {
    DialectConfig::new("java", SLASH_MARKERS, JAVA_KEYWORDS, ParamStyle::TypedLast)
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|protected|static|final|abstract|synchronized|native|default)\s+)+(?:[\w$]+(?:<[^>]*>)?(?:\[\])*\s+)?(?P<name>[\w$]+)\s*\((?P<params>[^)]*)\)\s*(?:throws\s+[\w.,\s]+?)?\s*[{;]",
            )
            .unwrap(),
            EntityKind::Method,
        )
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*[\w$]+(?:<[^>]*>)?(?:\[\])*\s+(?P<name>[\w$]+)\s*\((?P<params>[^)]*)\)\s*(?:throws\s+[\w.,\s]+?)?\s*\{",
            )
            .unwrap(),
            EntityKind::Method,
        )
        .with_type(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|protected|abstract|final|static|strictfp)\s+)*(?:class|interface|enum)\s+(?P<name>[\w$]+)",
            )
            .unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:public|private|protected|static|final|abstract|synchronized|native)\b")
                .unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^@\w+").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:class|interface|enum|package|import)\b").unwrap())
        .with_declaration_shape(
            // generic "type identifier(params) {" shape; the brace matters —
            // without it, `return add(a, b);` statements would be rejected
            Regex::new(r"^[\w$<>\[\],\s]+\s[\w$]+\s*\([^)]*\)\s*(?:throws\s+[\w.,\s]+?)?\s*\{?\s*$")
                .unwrap(),
        )
}

fn c_config() -> DialectConfig {
    DialectConfig::new("c", SLASH_MARKERS, C_KEYWORDS, ParamStyle::TypedLast)
        .with_function(
            Regex::new(r"(?m)^[ \t]*(?:[\w*]+\s+)+\**(?P<name>\w+)\s*\((?P<params>[^)]*)\)\s*\{")
                .unwrap(),
            EntityKind::Function,
        )
        .with_type(Regex::new(r"(?m)^[ \t]*(?:typedef\s+)?struct\s+(?P<name>\w+)").unwrap())
        .with_declaration_shape(Regex::new(r"^#").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:typedef|struct|union|enum)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:static|inline|extern)\b").unwrap())
        .with_declaration_shape(
            Regex::new(r"^[\w*\s]+\s\**\w+\s*\([^)]*\)\s*\{?\s*$").unwrap(),
        )
}

fn cpp_config() -> DialectConfig {
    DialectConfig::new("cpp", SLASH_MARKERS, CPP_KEYWORDS, ParamStyle::TypedLast)
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:template\s*<[^>]*>\s*)?(?:[\w:~<>,&*]+\s+)*[\w<>]+::(?P<name>~?\w+)\s*\((?P<params>[^)]*)\)\s*(?:const\s*)?(?:noexcept\s*)?\{",
            )
            .unwrap(),
            EntityKind::Method,
        )
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:template\s*<[^>]*>\s*)?(?:[\w:<>,&*]+\s+)+\**&?(?P<name>\w+)\s*\((?P<params>[^)]*)\)\s*(?:const\s*)?(?:noexcept\s*)?\{",
            )
            .unwrap(),
            EntityKind::Function,
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:template\s*<[^>]*>\s*)?class\s+(?P<name>\w+)").unwrap(),
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:template\s*<[^>]*>\s*)?struct\s+(?P<name>\w+)").unwrap(),
        )
        .with_type(Regex::new(r"(?m)^[ \t]*namespace\s+(?P<name>\w+)").unwrap())
        .with_declaration_shape(Regex::new(r"^#").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:typedef|struct|union|enum)\b").unwrap())
        .with_declaration_shape(
            Regex::new(r"^(?:class|namespace|template|virtual|explicit|friend|constexpr)\b").unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^(?:static|inline|extern)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:public|private|protected)\s*:").unwrap())
        .with_declaration_shape(Regex::new(r"^[\w:<>,~&*\s]+::[\w~]+\s*\([^)]*\)").unwrap())
        .with_declaration_shape(
            Regex::new(r"^[\w*\s]+\s\**\w+\s*\([^)]*\)\s*(?:const\s*)?\{?\s*$").unwrap(),
        )
}

fn go_config() -> DialectConfig {
    DialectConfig::new("go", SLASH_MARKERS, GO_KEYWORDS, ParamStyle::NameFirst)
        .with_function(
            Regex::new(r"(?m)^[ \t]*func\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)").unwrap(),
            EntityKind::Function,
        )
        .with_function(
            Regex::new(r"(?m)^[ \t]*func\s+\([^)]*\)\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)")
                .unwrap(),
            EntityKind::Method,
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*type\s+(?P<name>\w+)\s+(?:struct|interface)\b").unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^func\b").unwrap())
        .with_declaration_shape(Regex::new(r"^type\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:package|import)\b").unwrap())
}

fn rust_config() -> DialectConfig {
    DialectConfig::new("rust", SLASH_MARKERS, RUST_KEYWORDS, ParamStyle::AnnotatedLast)
        .with_function(
            Regex::new(
                r#"(?m)^[ \t]*(?:pub(?:\([^)]*\))?\s+)?(?:(?:const|async|unsafe)\s+)*(?:extern\s+"[^"]*"\s+)?fn\s+(?P<name>\w+)(?:<[^>]*>)?\s*\((?P<params>[^)]*)\)"#,
            )
            .unwrap(),
            EntityKind::Function,
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?\s+)?struct\s+(?P<name>\w+)").unwrap(),
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?\s+)?trait\s+(?P<name>\w+)").unwrap(),
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?\s+)?enum\s+(?P<name>\w+)").unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:pub(?:\([^)]*\))?\s+)?(?:(?:const|async|unsafe)\s+)*fn\b").unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:pub(?:\([^)]*\))?\s+)?(?:struct|trait|enum|impl|mod|use)\b").unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^#\[").unwrap())
        .with_declaration_shape(Regex::new(r"^macro_rules!").unwrap())
}

fn php_config() -> DialectConfig {
    DialectConfig::new("php", PHP_MARKERS, PHP_KEYWORDS, ParamStyle::TypedLast)
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|protected|static|abstract|final)\s+)+function\s+&?(?P<name>\w+)\s*\((?P<params>[^)]*)\)",
            )
            .unwrap(),
            EntityKind::Method,
        )
        .with_function(
            Regex::new(r"(?m)^[ \t]*function\s+&?(?P<name>\w+)\s*\((?P<params>[^)]*)\)").unwrap(),
            EntityKind::Function,
        )
        .with_type(
            Regex::new(r"(?m)^[ \t]*(?:abstract\s+|final\s+)?class\s+(?P<name>\w+)").unwrap(),
        )
        .with_declaration_shape(
            Regex::new(r"^(?:(?:public|private|protected|static|abstract|final)\s+)*function\b")
                .unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^(?:abstract\s+|final\s+)?class\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:use|namespace)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:public|private|protected)\b").unwrap())
}

fn ruby_config() -> DialectConfig {
    DialectConfig::new("ruby", HASH_MARKERS, RUBY_KEYWORDS, ParamStyle::Plain)
        .with_function(
            Regex::new(r"(?m)^[ \t]*def\s+self\.(?P<name>\w+[?!]?)\s*(?:\((?P<params>[^)]*)\))?")
                .unwrap(),
            EntityKind::Method,
        )
        .with_function(
            // the reserved-word filter discards the `self` capture this
            // yields on `def self.x` lines (regex has no lookahead)
            Regex::new(r"(?m)^[ \t]*def\s+(?P<name>\w+[?!]?)\s*(?:\((?P<params>[^)]*)\))?")
                .unwrap(),
            EntityKind::Function,
        )
        .with_type(Regex::new(r"(?m)^[ \t]*(?:class|module)\s+(?P<name>\w+)").unwrap())
        .with_declaration_shape(Regex::new(r"^def\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:class|module)\b").unwrap())
}

fn swift_config() -> DialectConfig {
    DialectConfig::new("swift", SLASH_MARKERS, SWIFT_KEYWORDS, ParamStyle::AnnotatedLast)
        .with_function(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|internal|fileprivate|open|static|final|override|class|mutating|convenience|required)\s+)*func\s+(?P<name>\w+)(?:<[^>]*>)?\s*\((?P<params>[^)]*)\)",
            )
            .unwrap(),
            EntityKind::Function,
        )
        .with_type(
            Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|internal|fileprivate|open|final)\s+)*(?:class|struct)\s+(?P<name>\w+)",
            )
            .unwrap(),
        )
        .with_declaration_shape(
            Regex::new(
                r"^(?:(?:public|private|internal|fileprivate|open|static|final|override|class|mutating|convenience|required)\s+)*func\b",
            )
            .unwrap(),
        )
        .with_declaration_shape(Regex::new(r"^(?:class|struct|enum|protocol|extension)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^@\w+").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:import|init)\b").unwrap())
        .with_declaration_shape(Regex::new(r"^(?:public|private|internal|fileprivate|open)\b").unwrap())
}

fn r_config() -> DialectConfig {
    DialectConfig::new("r", HASH_MARKERS, R_KEYWORDS, ParamStyle::Plain)
        .with_function(
            Regex::new(r"(?m)^[ \t]*(?P<name>[\w.]+)\s*(?:<-|=)\s*function\s*\((?P<params>[^)]*)\)")
                .unwrap(),
            EntityKind::Function,
        )
        .with_declaration_shape(Regex::new(r"^[\w.]+\s*(?:<-|=)\s*function\b").unwrap())
}

lazy_static! {
    static ref JAVASCRIPT: DialectConfig = js_family("javascript");
    static ref TYPESCRIPT: DialectConfig = js_family("typescript");
    static ref PYTHON: DialectConfig = python_config();
    static ref JAVA: DialectConfig = java_config();
    static ref C_LANG: DialectConfig = c_config();
    static ref CPP: DialectConfig = cpp_config();
    static ref GO: DialectConfig = go_config();
    static ref RUST_LANG: DialectConfig = rust_config();
    static ref PHP: DialectConfig = php_config();
    static ref RUBY: DialectConfig = ruby_config();
    static ref SWIFT: DialectConfig = swift_config();
    static ref R_LANG: DialectConfig = r_config();
}

/// Route a language to its dialect configuration
pub fn config_for(lang: Language) -> &'static DialectConfig {
    match lang {
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Python => &PYTHON,
        Language::Java => &JAVA,
        Language::C => &C_LANG,
        Language::Cpp => &CPP,
        Language::Go => &GO,
        Language::Rust => &RUST_LANG,
        Language::Php => &PHP,
        Language::Ruby => &RUBY,
        Language::Swift => &SWIFT,
        Language::R => &R_LANG,
    }
}
