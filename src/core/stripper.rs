//! Comment/docstring stripping prior to structural matching
//!
//! Comment content is removed outright (not whitespace-padded), but every
//! newline is retained — including newlines inside block comments and
//! docstrings — so that line numbers computed by counting newlines from the
//! start of the stripped buffer stay accurate.
//!
//! Stripping is best-effort textual substitution: there is no string-literal
//! awareness, and an unterminated block region consumes to the end of the
//! buffer. Neither case is an error.

use super::models::Language;

/// Comment syntax family for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentFamily {
    /// `//` line comments and `/* ... */` block comments
    CLike,
    /// `#` line comments only
    Hash,
    /// `#` line comments plus triple-quoted docstring regions
    PythonStyle,
    /// `//` and `#` line comments plus `/* ... */` block comments
    PhpStyle,
}

fn family_of(lang: Language) -> CommentFamily {
    match lang {
        Language::Python => CommentFamily::PythonStyle,
        Language::R | Language::Ruby => CommentFamily::Hash,
        Language::Php => CommentFamily::PhpStyle,
        Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::C
        | Language::Cpp
        | Language::Go
        | Language::Rust
        | Language::Swift => CommentFamily::CLike,
    }
}

/// Return a copy of `source` with comment regions blanked for `lang`.
pub fn strip_comments(source: &str, lang: Language) -> String {
    match family_of(lang) {
        CommentFamily::CLike => strip_slashed(source, false),
        CommentFamily::PhpStyle => strip_slashed(source, true),
        CommentFamily::Hash => strip_hash(source),
        CommentFamily::PythonStyle => strip_python(source),
    }
}

/// Strip `//` line and `/* */` block comments; `hash_lines` adds `#`.
fn strip_slashed(source: &str, hash_lines: bool) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            i = skip_line(&chars, i);
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            // consume until */, keeping interior newlines
            loop {
                match chars.get(i) {
                    None => break,
                    Some('*') if chars.get(i + 1) == Some(&'/') => {
                        i += 2;
                        break;
                    }
                    Some('\n') => {
                        out.push('\n');
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }
            continue;
        }

        if hash_lines && c == '#' {
            i = skip_line(&chars, i);
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Strip `#` line comments only
fn strip_hash(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '#' {
            i = skip_line(&chars, i);
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Strip `#` line comments and triple-quoted docstring regions
fn strip_python(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '#' {
            i = skip_line(&chars, i);
            continue;
        }

        if (c == '"' || c == '\'') && chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c) {
            i += 3;
            // consume until the matching closing triple, keeping newlines
            loop {
                match chars.get(i) {
                    None => break,
                    Some(&q)
                        if q == c
                            && chars.get(i + 1) == Some(&c)
                            && chars.get(i + 2) == Some(&c) =>
                    {
                        i += 3;
                        break;
                    }
                    Some('\n') => {
                        out.push('\n');
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Advance past a line comment, leaving the newline for the caller's loop
fn skip_line(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != '\n' {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_removed_content_kept() {
        let src = "let x = 1; // trailing\nlet y = 2;";
        let out = strip_comments(src, Language::JavaScript);
        assert_eq!(out, "let x = 1; \nlet y = 2;");
    }

    #[test]
    fn test_block_comment_preserves_line_count() {
        let src = "a();\n/* one\ntwo\nthree */\nb();";
        let out = strip_comments(src, Language::C);
        assert_eq!(out.lines().count(), src.lines().count());
        assert!(!out.contains("two"));
        assert!(out.contains("a();"));
        assert!(out.contains("b();"));
    }

    #[test]
    fn test_unterminated_block_consumes_to_end() {
        let src = "before();\n/* never closed\nstill comment";
        let out = strip_comments(src, Language::Rust);
        assert!(out.contains("before();"));
        assert!(!out.contains("still comment"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_python_hash_and_docstrings() {
        let src = "def f():\n    \"\"\"doc\n    lines\"\"\"\n    return 1  # note\n";
        let out = strip_comments(src, Language::Python);
        assert!(!out.contains("doc"));
        assert!(!out.contains("note"));
        assert!(out.contains("def f():"));
        assert!(out.contains("return 1"));
        assert_eq!(out.lines().count(), src.lines().count());
    }

    #[test]
    fn test_python_single_quoted_docstring() {
        let src = "'''module doc'''\nx = 1\n";
        let out = strip_comments(src, Language::Python);
        assert!(!out.contains("module doc"));
        assert!(out.contains("x = 1"));
    }

    #[test]
    fn test_ruby_hash_only() {
        let src = "# header\ndef run\n  work # inline\nend\n";
        let out = strip_comments(src, Language::Ruby);
        assert!(!out.contains("header"));
        assert!(!out.contains("inline"));
        assert!(out.contains("def run"));
    }

    #[test]
    fn test_php_both_markers() {
        let src = "<?php\n// slash\n# hash\n/* block */\n$x = 1;\n";
        let out = strip_comments(src, Language::Php);
        assert!(!out.contains("slash"));
        assert!(!out.contains("hash"));
        assert!(!out.contains("block"));
        assert!(out.contains("$x = 1;"));
    }

    #[test]
    fn test_r_keeps_code() {
        let src = "f <- function(x) x + 1 # add\n";
        let out = strip_comments(src, Language::R);
        assert_eq!(out, "f <- function(x) x + 1 \n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_comments("", Language::Go), "");
    }

    #[test]
    fn test_division_not_treated_as_comment() {
        let src = "let r = a / b / c;";
        let out = strip_comments(src, Language::JavaScript);
        assert_eq!(out, src);
    }
}
