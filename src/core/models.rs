//! Core data structures for call graph extraction
//!
//! Everything here is produced fresh per parse invocation and owned by the
//! caller; the extractor keeps no state between invocations.

use serde::Serialize;

/// Sentinel caller name used when no enclosing entity can be found.
pub const GLOBAL_CALLER: &str = "global";

/// Maximum length (in characters) of a call's context snippet.
pub const CALL_CONTEXT_LEN: usize = 100;

/// Maximum length (in characters) of a call site's display snippet.
pub const SITE_CONTEXT_LEN: usize = 50;

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    C,
    Cpp,
    R,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
}

impl Language {
    /// All supported languages, in tag order.
    pub const ALL: [Language; 12] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::R,
        Language::Go,
        Language::Rust,
        Language::Php,
        Language::Ruby,
        Language::Swift,
    ];

    /// Resolve a language tag (e.g. `"python"`, `"cpp"`).
    ///
    /// Unrecognized tags return `None`; callers treat that as an empty
    /// parse result, not an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "javascript" | "js" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            "python" | "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "c" => Some(Language::C),
            "cpp" | "c++" => Some(Language::Cpp),
            "r" => Some(Language::R),
            "go" | "golang" => Some(Language::Go),
            "rust" | "rs" => Some(Language::Rust),
            "php" => Some(Language::Php),
            "ruby" | "rb" => Some(Language::Ruby),
            "swift" => Some(Language::Swift),
            _ => None,
        }
    }

    /// Detect language from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "py" | "pyw" => Some(Language::Python),
            "java" => Some(Language::Java),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Language::Cpp),
            "r" => Some(Language::R),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "php" => Some(Language::Php),
            "rb" => Some(Language::Ruby),
            "swift" => Some(Language::Swift),
            _ => None,
        }
    }

    /// The canonical lowercase tag for this language
    pub fn tag(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::R => "r",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Kind of a discovered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Function,
    Method,
    ArrowFunction,
    /// Classes, structs, traits, modules, namespaces — modeled as
    /// zero-parameter entities for uniformity.
    TypeDefinition,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Function => write!(f, "function"),
            EntityKind::Method => write!(f, "method"),
            EntityKind::ArrowFunction => write!(f, "arrow-function"),
            EntityKind::TypeDefinition => write!(f, "type-definition"),
        }
    }
}

/// A declared function/method/class-like unit found in the buffer.
///
/// Names are not required to be unique — overloaded methods legitimately
/// produce multiple entities with the same name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    /// 1-based line number of the declaration match
    pub declaring_line: usize,
    /// Best-effort parameter names, in declaration order
    pub parameters: Vec<String>,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(name: &str, declaring_line: usize, parameters: Vec<String>, kind: EntityKind) -> Self {
        Self {
            name: name.to_string(),
            declaring_line,
            parameters,
            kind,
        }
    }
}

/// One accepted invocation, as a caller → callee record with its line
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub from: String,
    pub to: String,
    /// 1-based source line of the invocation
    pub line: usize,
    /// Trimmed source line, truncated to 100 characters
    pub context: String,
}

/// One concrete textual call site, with a stable synthetic id.
///
/// Ids are unique within one parse pass and monotonically assigned in scan
/// order (`call_0`, `call_1`, …) by a counter local to the invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    pub id: String,
    pub caller_name: String,
    pub callee_name: String,
    /// 1-based source line
    pub line_number: usize,
    /// Trimmed source line, truncated to 50 characters for display
    pub context: String,
}

/// Reduced `from → to` projection for simple edge rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEdge {
    pub from: String,
    pub to: String,
}

/// Output of one parse invocation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub entities: Vec<Entity>,
    pub calls: Vec<Call>,
    pub call_sites: Vec<CallSite>,
}

impl ParseResult {
    /// Derive the edge list from the deduplicated call sites.
    ///
    /// One edge per surviving call site — repeat calls on distinct lines
    /// keep their duplicates.
    pub fn edges(&self) -> Vec<CallEdge> {
        self.call_sites
            .iter()
            .map(|site| CallEdge {
                from: site.caller_name.clone(),
                to: site.callee_name.clone(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.calls.is_empty() && self.call_sites.is_empty()
    }
}

/// Trim a source line and truncate it to at most `max` characters
pub fn snippet(line: &str, max: usize) -> String {
    line.trim().chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("python"), Some(Language::Python));
        assert_eq!(Language::from_tag("cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_tag("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_tag("JavaScript"), Some(Language::JavaScript)); // case insensitive
        assert_eq!(Language::from_tag("haskell"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("cc"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("txt"), None);
    }

    #[test]
    fn test_language_tag_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Function.to_string(), "function");
        assert_eq!(EntityKind::ArrowFunction.to_string(), "arrow-function");
        assert_eq!(EntityKind::TypeDefinition.to_string(), "type-definition");
    }

    #[test]
    fn test_entity_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&EntityKind::ArrowFunction).unwrap();
        assert_eq!(json, "\"arrow-function\"");
    }

    #[test]
    fn test_parse_result_edges_follow_call_sites() {
        let result = ParseResult {
            entities: Vec::new(),
            calls: Vec::new(),
            call_sites: vec![
                CallSite {
                    id: "call_0".to_string(),
                    caller_name: "main".to_string(),
                    callee_name: "greet".to_string(),
                    line_number: 5,
                    context: "greet(\"Alice\")".to_string(),
                },
                CallSite {
                    id: "call_1".to_string(),
                    caller_name: "main".to_string(),
                    callee_name: "greet".to_string(),
                    line_number: 6,
                    context: "greet(\"Bob\")".to_string(),
                },
            ],
        };

        let edges = result.edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from, "main");
        assert_eq!(edges[0].to, "greet");
        assert_eq!(edges[0], edges[1]); // repeat calls keep their duplicates
    }

    #[test]
    fn test_snippet_truncates_characters() {
        let long = "x".repeat(200);
        assert_eq!(snippet(&long, 100).chars().count(), 100);
        assert_eq!(snippet("  trimmed  ", 100), "trimmed");
        // multi-byte safe
        let accented = "é".repeat(60);
        assert_eq!(snippet(&accented, 50).chars().count(), 50);
    }

    #[test]
    fn test_parse_result_default_is_empty() {
        let result = ParseResult::default();
        assert!(result.is_empty());
        assert!(result.edges().is_empty());
    }

    #[test]
    fn test_entity_serializes_camel_case() {
        let entity = Entity::new("greet", 1, vec!["name".to_string()], EntityKind::Function);
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["declaringLine"], 1);
        assert_eq!(json["kind"], "function");
    }
}
