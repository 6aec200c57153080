//! Run article extraction over HTML files and emit JSONL.
//!
//! Usage:
//!   cargo run --features cli --bin pagegist -- <file-or-dir>...
//!
//! Directories are expanded to their `.html` files, sorted by name.
//!
//! Output (stdout): one JSON object per file: {"file", "title", "date", "content"}
//! Errors (stderr): {"file": "...", "error": "..."}
//! Summary (stderr): "Done: N ok, M errors"
//! Logs (stderr): filtered by `RUST_LOG`, e.g. `RUST_LOG=pagegist=debug`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pagegist::ParsedArticle;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Record<'a> {
    file: &'a str,
    #[serde(flatten)]
    article: &'a ParsedArticle,
}

fn collect_inputs(args: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for arg in args {
        let path = Path::new(arg);
        if path.is_dir() {
            let mut entries: Vec<_> = fs::read_dir(path)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|x| x == "html"))
                .collect();
            entries.sort();
            inputs.extend(entries);
        } else {
            inputs.push(path.to_path_buf());
        }
    }
    Ok(inputs)
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: pagegist <file-or-dir>...");
        return ExitCode::FAILURE;
    }

    let inputs = match collect_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("cannot read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = pagegist::Config::default();
    let mut ok = 0usize;
    let mut errors = 0usize;

    for path in &inputs {
        let file = path.display().to_string();

        let parsed = fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| pagegist::parse_article_bytes(&raw, &config).map_err(|e| e.to_string()));

        match parsed {
            Ok(article) => {
                let record = Record {
                    file: &file,
                    article: &article,
                };
                match serde_json::to_string(&record) {
                    Ok(line) => {
                        println!("{line}");
                        ok += 1;
                    }
                    Err(e) => {
                        eprintln!("{}", json!({ "file": file, "error": e.to_string() }));
                        errors += 1;
                    }
                }
            }
            Err(error) => {
                eprintln!("{}", json!({ "file": file, "error": error }));
                errors += 1;
            }
        }
    }

    eprintln!("Done: {ok} ok, {errors} errors  (total {})", ok + errors);
    if errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
