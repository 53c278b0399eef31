//! callscope CLI - extract call graphs from source files
//!
//! Thin wrapper over the callscope library: reads files, picks the dialect,
//! and emits the extracted entities and calls. All logic lives in the
//! library; this binary only handles arguments and IO.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use callscope::core::{ExportDocument, Extractor, Language};

/// Extract a heuristic call graph from source files.
#[derive(Parser, Debug)]
#[command(name = "callscope")]
#[command(version = callscope::VERSION)]
#[command(about = "Extract a heuristic call graph from source files")]
#[command(after_help = "EXAMPLES:
  # Parse one file, language inferred from the extension
  callscope src/app.py

  # Force the dialect and pretty-print the JSON document
  callscope --language typescript --pretty component.txt

  # Just the edges, one `caller -> callee` per line
  callscope --format edges main.go

  # Write the export document to a file
  callscope -o graph.json lib.rb
")]
struct Cli {
    /// Source files to parse
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Language tag [javascript, typescript, python, java, c, cpp, r, go,
    /// rust, php, ruby, swift]; inferred from the file extension if omitted
    #[arg(short = 'l', long = "language", value_name = "TAG")]
    language: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "json")]
    format: OutputFormatArg,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormatArg {
    /// Export document per file: {language, entities, calls, timestamp, checksum}
    Json,
    /// Human-readable per-file counts
    Summary,
    /// One `caller -> callee` line per call site
    Edges,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = render(&cli)?;

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

fn render(cli: &Cli) -> anyhow::Result<String> {
    let extractor = Extractor::new();
    let mut json_docs = Vec::new();
    let mut text = String::new();

    for path in &cli.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let lang = resolve_language(cli.language.as_deref(), path)?;
        let result = extractor.parse_lang(&source, lang);

        if result.is_empty() && !source.trim().is_empty() {
            eprintln!("[WARN] no entities found in {}", path.display());
        }

        match cli.format {
            OutputFormatArg::Json => {
                let doc = ExportDocument::new(&result, lang, &source);
                let json = if cli.pretty {
                    doc.to_json_pretty()?
                } else {
                    doc.to_json()?
                };
                json_docs.push(json);
            }
            OutputFormatArg::Summary => {
                text.push_str(&format!(
                    "{}: {} entities, {} call sites ({})\n",
                    path.display(),
                    result.entities.len(),
                    result.call_sites.len(),
                    lang
                ));
                for entity in &result.entities {
                    text.push_str(&format!(
                        "  {} {} (line {})\n",
                        entity.kind, entity.name, entity.declaring_line
                    ));
                }
            }
            OutputFormatArg::Edges => {
                for edge in result.edges() {
                    text.push_str(&format!("{} -> {}\n", edge.from, edge.to));
                }
            }
        }
    }

    if cli.format == OutputFormatArg::Json {
        // single document for one file, a JSON array for several
        if json_docs.len() == 1 {
            let mut doc = json_docs.remove(0);
            doc.push('\n');
            return Ok(doc);
        }
        return Ok(format!("[{}]\n", json_docs.join(",")));
    }

    Ok(text)
}

fn resolve_language(tag: Option<&str>, path: &Path) -> anyhow::Result<Language> {
    if let Some(tag) = tag {
        return match Language::from_tag(tag) {
            Some(lang) => Ok(lang),
            None => bail!("unknown language: {}", tag),
        };
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match Language::from_extension(ext) {
        Some(lang) => Ok(lang),
        None => bail!(
            "cannot infer language for {} (use --language)",
            path.display()
        ),
    }
}
