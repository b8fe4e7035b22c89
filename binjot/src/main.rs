//! Command-line tool for checking and inspecting JSON documents.
//!
//! Usage: jot [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   --summary              Print the top-level kind and a count of values by kind
//!   -h, --help             Print help
//!   -V, --version          Print version

use libjot::{Parser, Value};
use log::{info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

/// What to do with a successfully parsed document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Print the debug rendering of the value.
    Print,
    /// Only report whether the document parsed.
    Check,
    /// Print value counts by kind.
    Summary,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut mode = Mode::Print;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jot {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--check" => {
                if mode == Mode::Summary {
                    eprintln!("Error: --check and --summary are mutually exclusive");
                    process::exit(1);
                }
                mode = Mode::Check;
            }
            "--summary" => {
                if mode == Mode::Check {
                    eprintln!("Error: --check and --summary are mutually exclusive");
                    process::exit(1);
                }
                mode = Mode::Summary;
            }
            "-" => {
                // Explicit stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    if let Some(path) = input_path {
        if Path::new(path).is_dir() {
            process_directory(path, mode);
            return;
        }
    }

    let input: Vec<u8> = match input_path {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    process::exit(process_input(&input, input_path, mode));
}

/// Process every `.json` file in a directory, exiting non-zero if any fail.
fn process_directory(dir_path: &str, mode: Mode) {
    let entries = match fs::read_dir(dir_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir_path, e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "json").unwrap_or(false))
        .collect();
    paths.sort();
    info!("{} .json files in {}", paths.len(), dir_path);

    let mut had_errors = false;

    for path in paths {
        let path_str = path.to_string_lossy();
        let input = match fs::read(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path_str, e);
                had_errors = true;
                continue;
            }
        };

        if process_input(&input, Some(&path_str), mode) != 0 {
            had_errors = true;
        }
    }

    process::exit(if had_errors { 1 } else { 0 });
}

/// Parse one document and report it according to `mode`. Returns the exit code.
fn process_input(input: &[u8], input_file: Option<&str>, mode: Mode) -> i32 {
    let mut parser = Parser::new(input);
    let value = match parser.parse() {
        Ok(value) => value,
        Err(e) => {
            match input_file {
                Some(path) => eprintln!("{}: {}", path, e),
                None => eprintln!("Parse error: {}", e),
            }
            return 1;
        }
    };

    if has_trailing_content(&input[parser.position()..]) {
        warn!(
            "{}: trailing content after value ignored",
            input_file.unwrap_or("<stdin>")
        );
    }

    match mode {
        Mode::Check => match input_file {
            Some(path) => println!("{}: ok", path),
            None => println!("ok"),
        },
        Mode::Print => {
            if let Some(path) = input_file {
                println!("{}:", path);
            }
            println!("{:?}", value);
        }
        Mode::Summary => {
            if let Some(path) = input_file {
                println!("{}:", path);
            }
            print_summary(&value);
        }
    }

    value.release();
    0
}

/// True if anything other than space or line feed follows the parsed value.
fn has_trailing_content(rest: &[u8]) -> bool {
    rest.iter().any(|&b| b != b' ' && b != b'\n')
}

/// Kind names in the order `count_kinds` reports them.
const KINDS: [&str; 6] = ["null", "boolean", "number", "string", "array", "object"];

/// Count every value in the tree, the root included, indexed like [`KINDS`].
fn count_kinds(root: &Value<'_>) -> [usize; 6] {
    let mut counts = [0; 6];
    let mut pending = vec![root];
    while let Some(value) = pending.pop() {
        let slot = match value {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(elements) => {
                pending.extend(elements);
                4
            }
            Value::Object(entries) => {
                pending.extend(entries.values());
                5
            }
        };
        counts[slot] += 1;
    }
    counts
}

fn print_summary(value: &Value<'_>) {
    println!("{}", value.kind());
    for (kind, count) in KINDS.iter().zip(count_kinds(value)) {
        if count > 0 {
            println!("  {}: {}", kind, count);
        }
    }
}

fn print_help() {
    println!(
        "jot - JSON command-line tool

USAGE:
    jot [OPTIONS] [FILE|DIR]

ARGS:
    [FILE|DIR]    Input file or directory (reads from stdin if not provided)
                  When a directory is given, processes all .json files in it

OPTIONS:
    --check       Check if input is valid (exit 0 if valid, 1 if invalid)

    --summary     Print the kind of the top-level value and how many values
                  of each kind the document contains

    -h, --help    Print help

    -V, --version Print version

ENVIRONMENT:
    RUST_LOG      Log filter for diagnostics on stderr [default: warn]

EXAMPLES:
    # Print the parsed value
    jot data.json

    # Validate every JSON file in a directory
    jot --check ./fixtures/

    # Count values by kind from stdin
    cat data.json | jot --summary
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_kinds() {
        let value = libjot::parse(b"{\"a\": [1, 2, null], \"b\": {\"c\": \"d\"}, \"e\": true}")
            .unwrap();
        assert_eq!(count_kinds(&value), [1, 1, 2, 1, 1, 2]);
    }

    #[test]
    fn test_count_kinds_scalar_root() {
        let value = libjot::parse(b"42").unwrap();
        assert_eq!(count_kinds(&value), [0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_kind_order_matches_value_kind() {
        let value = libjot::parse(b"[null, true, 1, \"s\", [], {}]").unwrap();
        for element in value.as_array().unwrap() {
            let counts = count_kinds(element);
            let slot = counts.iter().position(|&n| n == 1).unwrap();
            assert_eq!(KINDS[slot], element.kind());
        }
    }

    #[test]
    fn test_trailing_content_ignores_whitespace() {
        assert!(!has_trailing_content(b""));
        assert!(!has_trailing_content(b" \n  \n"));
        assert!(has_trailing_content(b" x\n"));
        assert!(has_trailing_content(b"\t"));
    }

    #[test]
    fn test_process_input_exit_codes() {
        assert_eq!(process_input(b"[1, 2]", None, Mode::Check), 0);
        assert_eq!(process_input(b"[1, 2", None, Mode::Check), 1);
        assert_eq!(process_input(b"{\"a\" 1}", Some("bad.json"), Mode::Print), 1);
        assert_eq!(process_input(b"true trailing", None, Mode::Summary), 0);
    }
}
