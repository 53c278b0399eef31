//! Shared extraction engine
//!
//! One engine drives every dialect: definition discovery over the stripped
//! buffer, call-site discovery over the raw line array, caller attribution,
//! and deduplication. Dialect differences live entirely in the
//! configuration tables (`dialect` module).
//!
//! The engine is deliberately not a parser. Scope resolution is
//! approximated by `attribute_caller`, and declaration-vs-call
//! disambiguation inspects line shape only. Both are documented heuristic
//! limitations of the approach, not bugs to be patched around.

use std::collections::HashSet;

use regex::Regex;

use super::dialect::{self, DialectConfig, ParamStyle};
use super::models::{
    snippet, Call, CallSite, Entity, Language, ParseResult, CALL_CONTEXT_LEN, GLOBAL_CALLER,
    SITE_CONTEXT_LEN,
};
use super::stripper::strip_comments;

/// Heuristic multi-language function/call extractor.
///
/// Stateless: each parse is a pure function of `(buffer, language)`, safe
/// to invoke repeatedly and concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse a buffer under a language tag.
    ///
    /// Unrecognized tags and empty/whitespace-only buffers yield an empty
    /// result — a quiet no-op, never an error.
    pub fn parse(&self, code: &str, language: &str) -> ParseResult {
        match Language::from_tag(language) {
            Some(lang) => self.parse_lang(code, lang),
            None => ParseResult::default(),
        }
    }

    /// Parse a buffer for a known language.
    pub fn parse_lang(&self, code: &str, lang: Language) -> ParseResult {
        if code.trim().is_empty() {
            return ParseResult::default();
        }

        let config = dialect::config_for(lang);
        let stripped = strip_comments(code, lang);
        let entities = discover_entities(&stripped, config);
        let (calls, call_sites) = discover_calls(code, &entities, config);

        ParseResult {
            entities,
            calls,
            call_sites,
        }
    }
}

/// Convenience wrapper over [`Extractor::parse`]
pub fn parse(code: &str, language: &str) -> ParseResult {
    Extractor::new().parse(code, language)
}

/// Step 1: definition discovery over the stripped buffer.
///
/// Function-like entities are appended in match order, pattern by pattern.
/// Type definitions are scanned in a separate pass and appended afterwards,
/// deduplicated against already-added entities on `(name, declaring_line)`.
fn discover_entities(stripped: &str, config: &DialectConfig) -> Vec<Entity> {
    let mut entities = Vec::new();

    for pattern in &config.function_patterns {
        for caps in pattern.regex.captures_iter(stripped) {
            let (name, start) = match caps.name("name") {
                Some(m) => (m.as_str(), whole_match_start(&caps)),
                None => continue,
            };
            if config.is_keyword(name) {
                continue;
            }
            let params = caps
                .name("params")
                .map(|m| split_parameters(m.as_str(), config.param_style))
                .unwrap_or_default();
            let line = line_of(stripped, start);
            entities.push(Entity::new(name, line, params, pattern.kind));
        }
    }

    for pattern in &config.type_patterns {
        for caps in pattern.regex.captures_iter(stripped) {
            let (name, start) = match caps.name("name") {
                Some(m) => (m.as_str(), whole_match_start(&caps)),
                None => continue,
            };
            if config.is_keyword(name) {
                continue;
            }
            let line = line_of(stripped, start);
            let duplicate = entities
                .iter()
                .any(|e| e.name == name && e.declaring_line == line);
            if !duplicate {
                entities.push(Entity::new(name, line, Vec::new(), pattern.kind));
            }
        }
    }

    entities
}

/// Steps 2–4: call-site discovery, attribution, and deduplication.
///
/// Runs over the original (unstripped) lines so context snippets reflect
/// real source; comment-only and declaration-shaped lines are skipped
/// before probing.
fn discover_calls(
    source: &str,
    entities: &[Entity],
    config: &DialectConfig,
) -> (Vec<Call>, Vec<CallSite>) {
    let mut calls = Vec::new();
    let mut sites = Vec::new();

    if entities.is_empty() {
        return (calls, sites);
    }

    let probes = build_probes(entities);
    let mut seen: HashSet<(String, String, usize)> = HashSet::new();
    // id counter local to this invocation, for reproducible ids
    let mut next_id = 0usize;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_number = idx + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if config
            .comment_markers
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            continue;
        }
        if config
            .declaration_shapes
            .iter()
            .any(|shape| shape.is_match(trimmed))
        {
            continue;
        }

        for (name, probe) in &probes {
            if !probe.is_match(raw_line) {
                continue;
            }

            let caller = attribute_caller(entities, line_number, name);
            let key = (caller.to_string(), name.to_string(), line_number);
            if seen.contains(&key) {
                continue;
            }
            seen.insert(key);

            calls.push(Call {
                from: caller.to_string(),
                to: name.to_string(),
                line: line_number,
                context: snippet(raw_line, CALL_CONTEXT_LEN),
            });
            sites.push(CallSite {
                id: format!("call_{}", next_id),
                caller_name: caller.to_string(),
                callee_name: name.to_string(),
                line_number,
                context: snippet(raw_line, SITE_CONTEXT_LEN),
            });
            next_id += 1;
        }
    }

    (calls, sites)
}

/// Step 3 in isolation: nearest-preceding-declaration caller attribution.
///
/// Scans the discovered entity list from the end, picking the first entity
/// declared strictly before `call_line` whose name differs from the
/// callee; falls back to the `"global"` sentinel. Textual-order heuristic
/// only — no brace or indentation awareness. Kept behind this single
/// function so a real scope tracker can replace it without touching the
/// dialect tables.
pub fn attribute_caller<'a>(entities: &'a [Entity], call_line: usize, callee: &str) -> &'a str {
    entities
        .iter()
        .rev()
        .find(|e| e.declaring_line < call_line && e.name != callee)
        .map(|e| e.name.as_str())
        .unwrap_or(GLOBAL_CALLER)
}

/// One word-boundary probe per distinct entity name, in first-seen order
fn build_probes(entities: &[Entity]) -> Vec<(String, Regex)> {
    let mut probes = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for entity in entities {
        if !seen.insert(entity.name.as_str()) {
            continue;
        }
        let pattern = format!(r"\b{}\s*\(", regex::escape(&entity.name));
        if let Ok(regex) = Regex::new(&pattern) {
            probes.push((entity.name.clone(), regex));
        }
    }

    probes
}

/// Line number of a byte offset: newlines before it, plus one
fn line_of(buffer: &str, offset: usize) -> usize {
    buffer[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

fn whole_match_start(caps: &regex::Captures<'_>) -> usize {
    caps.get(0).map(|m| m.start()).unwrap_or(0)
}

/// Split a raw parameter list on top-level commas and clean each token.
///
/// Depth is tracked across `()`, `[]`, `{}` and `<>` so generics, tuples
/// and destructuring patterns stay intact.
fn split_parameters(raw: &str, style: ParamStyle) -> Vec<String> {
    let mut params = Vec::new();
    let mut depth = 0i32;
    let mut token = String::new();

    for c in raw.chars() {
        match c {
            '(' | '[' | '{' | '<' => {
                depth += 1;
                token.push(c);
            }
            ')' | ']' | '}' | '>' => {
                depth -= 1;
                token.push(c);
            }
            ',' if depth <= 0 => {
                if let Some(name) = clean_parameter(&token, style) {
                    params.push(name);
                }
                token.clear();
            }
            _ => token.push(c),
        }
    }
    if let Some(name) = clean_parameter(&token, style) {
        params.push(name);
    }

    params
}

/// Reduce one parameter token to a best-effort name.
///
/// Defaults after `=` are always stripped; the rest depends on the
/// dialect's parameter style. Tokens that cannot be separated cleanly are
/// left attached rather than dropped.
fn clean_parameter(raw: &str, style: ParamStyle) -> Option<String> {
    let mut token = raw.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(eq) = token.find('=') {
        token = token[..eq].trim();
    }
    if token.is_empty() {
        return None;
    }

    let reduced: &str = match style {
        ParamStyle::Plain => match token.find(':') {
            Some(colon) => token[..colon].trim(),
            None => token,
        },
        ParamStyle::AnnotatedLast => {
            let before_colon = match token.find(':') {
                Some(colon) => token[..colon].trim(),
                None => token,
            };
            before_colon.split_whitespace().last().unwrap_or(before_colon)
        }
        ParamStyle::TypedLast => token.split_whitespace().last().unwrap_or(token),
        ParamStyle::NameFirst => token.split_whitespace().next().unwrap_or(token),
    };

    let name = reduced.trim_matches(|c| matches!(c, '*' | '&' | '$' | '.'));
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
