//! The formatting command: files, directories, and stdin.
//!
//! Directories are walked recursively and the discovered files are
//! formatted in parallel. A `.swiftfmtignore` file (one `*`/`**` glob per
//! line) excludes paths; hidden files and build directories are skipped by
//! default.

use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use swiftfmt::{format_tokens, FormatOptions};
use swiftfmt_lexer::{tokenize, untokenize};
use tracing::debug;

/// Configuration for one formatter run.
#[derive(Default)]
pub struct FormatConfig {
    /// Report files that would change and exit 1 instead of writing.
    pub check: bool,
    /// Print a diff instead of writing.
    pub diff: bool,
    /// Read from stdin, write to stdout.
    pub stdin: bool,
    /// Ignore `.swiftfmtignore` files and format everything.
    pub no_ignore: bool,
    /// Style options handed to the core.
    pub options: FormatOptions,
}

/// Result of formatting a single file.
pub enum FormatResult {
    /// Already formatted.
    Unchanged,
    /// Rewritten in place.
    Formatted,
    /// Would be rewritten (check / diff mode).
    WouldFormat,
    /// The file could not be read or written.
    IoError(String),
}

/// Format source text with the full pipeline.
pub fn format_source(source: &str, options: &FormatOptions) -> String {
    untokenize(&format_tokens(tokenize(source), options.clone()))
}

/// Format a single file on disk.
pub fn format_file(path: &Path, config: &FormatConfig) -> FormatResult {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return FormatResult::IoError(format!("{}: {e}", path.display())),
    };
    let formatted = format_source(&source, &config.options);
    if formatted == source {
        return FormatResult::Unchanged;
    }
    if config.check {
        return FormatResult::WouldFormat;
    }
    if config.diff {
        print_diff(&path.display().to_string(), &source, &formatted);
        return FormatResult::WouldFormat;
    }
    match std::fs::write(path, formatted) {
        Ok(()) => FormatResult::Formatted,
        Err(e) => FormatResult::IoError(format!("{}: {e}", path.display())),
    }
}

/// Format stdin to stdout. Returns false when stdin could not be read.
pub fn format_stdin(options: &FormatOptions) -> bool {
    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("error reading stdin: {e}");
        return false;
    }
    print!("{}", format_source(&source, options));
    true
}

/// Format every Swift file under `path`, in parallel.
///
/// Returns `(formatted, unchanged, errors)` counts.
pub fn format_directory(path: &Path, config: &FormatConfig) -> (usize, usize, usize) {
    let ignore_patterns = if config.no_ignore {
        Vec::new()
    } else {
        load_ignore_patterns(path)
    };
    let mut files = Vec::new();
    visit_swift_files(path, path, config, &ignore_patterns, &mut |file| {
        files.push(file.to_path_buf());
    });
    debug!(count = files.len(), "formatting directory");

    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|file| match format_file(file, config) {
        FormatResult::Formatted => {
            println!("Formatted: {}", file.display());
            formatted_count.fetch_add(1, Ordering::Relaxed);
        }
        FormatResult::WouldFormat => {
            if config.check {
                println!("Would format: {}", file.display());
            }
            formatted_count.fetch_add(1, Ordering::Relaxed);
        }
        FormatResult::Unchanged => {
            unchanged_count.fetch_add(1, Ordering::Relaxed);
        }
        FormatResult::IoError(message) => {
            eprintln!("error: {message}");
            error_count.fetch_add(1, Ordering::Relaxed);
        }
    });

    (
        formatted_count.load(Ordering::Relaxed),
        unchanged_count.load(Ordering::Relaxed),
        error_count.load(Ordering::Relaxed),
    )
}

/// Print a simple unified-style diff between the original and formatted
/// content.
fn print_diff(path: &str, original: &str, formatted: &str) {
    println!("--- {path}");
    println!("+++ {path}");
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    let max_lines = original_lines.len().max(formatted_lines.len());
    let mut i = 0;
    while i < max_lines {
        if original_lines.get(i) == formatted_lines.get(i) {
            i += 1;
            continue;
        }
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max_lines);
        println!("@@ -{},{} +{},{} @@", start + 1, end - start, start + 1, end - start);
        for j in start..end {
            match (original_lines.get(j), formatted_lines.get(j)) {
                (Some(o), Some(f)) if o == f => println!(" {o}"),
                (Some(o), Some(f)) => {
                    println!("-{o}");
                    println!("+{f}");
                }
                (Some(o), None) => println!("-{o}"),
                (None, Some(f)) => println!("+{f}"),
                (None, None) => {}
            }
        }
        i = end;
    }
}

/// Load ignore patterns from `.swiftfmtignore` in the root directory.
fn load_ignore_patterns(root: &Path) -> Vec<String> {
    let ignore_file = root.join(".swiftfmtignore");
    match std::fs::read_to_string(ignore_file) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// `*` matches within one path segment, `**` across segments.
fn is_ignored(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let relative = relative.to_string_lossy();
    for pattern in patterns {
        if let Some((prefix, suffix)) = pattern.split_once("**") {
            let prefix = prefix.trim_end_matches('/');
            let suffix = suffix.trim_start_matches('/');
            let matches_prefix = prefix.is_empty()
                || relative.starts_with(&format!("{prefix}/"))
                || relative == prefix;
            let matches_suffix = suffix.is_empty() || relative.ends_with(suffix);
            if matches_prefix && matches_suffix {
                return true;
            }
        } else if let Some((prefix, suffix)) = pattern.split_once('*') {
            if relative.starts_with(prefix)
                && relative.ends_with(suffix)
                && !relative[prefix.len()..relative.len() - suffix.len()].contains('/')
            {
                return true;
            }
        } else if relative == pattern.as_str()
            || relative.starts_with(&format!("{pattern}/"))
            || path.file_name().and_then(|n| n.to_str()) == Some(pattern)
        {
            return true;
        }
    }
    false
}

fn visit_swift_files<F: FnMut(&Path)>(
    dir: &Path,
    root: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
    callback: &mut F,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("error reading directory '{}': {e}", dir.display());
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !config.no_ignore {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') || name == "target" || name == "node_modules" || name == ".build" {
                    continue;
                }
            }
            if is_ignored(&path, root, ignore_patterns) {
                continue;
            }
        }
        if path.is_dir() {
            visit_swift_files(&path, root, config, ignore_patterns, callback);
        } else if path.extension().is_some_and(|ext| ext == "swift") {
            callback(&path);
        }
    }
}

/// Entry point for the command line.
pub fn run(args: &[String]) -> i32 {
    let mut config = FormatConfig::default();
    let mut paths: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => config.check = true,
            "--diff" => config.diff = true,
            "--stdin" => config.stdin = true,
            "--fragment" => config.options.fragment = true,
            "--allman" => config.options.allman_braces = true,
            "--strip-header" => config.options.strip_header = true,
            "--no-ignore" => config.no_ignore = true,
            "--indent" => match iter.next().map(String::as_str) {
                Some("tab") => config.options.indent = "\t".to_string(),
                Some(n) => match n.parse::<usize>() {
                    Ok(width) if width > 0 && width <= 16 => {
                        config.options.indent = " ".repeat(width);
                    }
                    _ => {
                        eprintln!("invalid indent width: {n}");
                        return 1;
                    }
                },
                None => {
                    eprintln!("--indent requires a width or 'tab'");
                    return 1;
                }
            },
            "--linebreak" => match iter.next().map(String::as_str) {
                Some("lf") => config.options.linebreak = "\n".to_string(),
                Some("crlf") => config.options.linebreak = "\r\n".to_string(),
                Some("cr") => config.options.linebreak = "\r".to_string(),
                other => {
                    eprintln!("--linebreak must be lf, crlf, or cr (got {other:?})");
                    return 1;
                }
            },
            "--help" | "-h" => {
                print_help();
                return 0;
            }
            "--version" | "-v" => {
                println!("swiftfmtc {}", env!("CARGO_PKG_VERSION"));
                return 0;
            }
            other if other.starts_with('-') => {
                eprintln!("unknown option: {other}");
                eprintln!("run 'swiftfmtc --help' for usage");
                return 1;
            }
            path => paths.push(path.to_string()),
        }
    }

    if config.stdin {
        if !paths.is_empty() || config.check || config.diff {
            eprintln!("--stdin cannot be combined with paths, --check, or --diff");
            return 1;
        }
        return if format_stdin(&config.options) { 0 } else { 1 };
    }

    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut total_formatted = 0;
    let mut total_unchanged = 0;
    let mut total_errors = 0;

    for path in &paths {
        let path = PathBuf::from(path);
        if path.is_file() {
            match format_file(&path, &config) {
                FormatResult::Formatted => {
                    println!("Formatted: {}", path.display());
                    total_formatted += 1;
                }
                FormatResult::WouldFormat => {
                    if config.check {
                        println!("Would format: {}", path.display());
                    }
                    total_formatted += 1;
                }
                FormatResult::Unchanged => total_unchanged += 1,
                FormatResult::IoError(message) => {
                    eprintln!("error: {message}");
                    total_errors += 1;
                }
            }
        } else if path.is_dir() {
            let (formatted, unchanged, errors) = format_directory(&path, &config);
            total_formatted += formatted;
            total_unchanged += unchanged;
            total_errors += errors;
        } else {
            eprintln!("path not found: {}", path.display());
            total_errors += 1;
        }
    }

    if paths.len() > 1 || paths.iter().any(|p| PathBuf::from(p).is_dir()) {
        let verb = if config.check { "would format" } else { "formatted" };
        println!("\n{total_formatted} {verb}, {total_unchanged} unchanged");
    }

    if (config.check && total_formatted > 0) || total_errors > 0 {
        1
    } else {
        0
    }
}

fn print_help() {
    println!("Format Swift source files");
    println!();
    println!("Usage: swiftfmtc [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths              Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check            Check if files are formatted (exit 1 if not)");
    println!("  --diff             Show a diff instead of modifying files");
    println!("  --stdin            Read from stdin, write to stdout");
    println!("  --fragment         Treat input as a code fragment");
    println!("  --indent N|tab     Indent width in spaces, or a tab (default: 4)");
    println!("  --linebreak K      Line endings: lf, crlf, or cr (default: lf)");
    println!("  --allman           Allman-style braces");
    println!("  --strip-header     Remove leading // header comments");
    println!("  --no-ignore        Ignore .swiftfmtignore files and format everything");
    println!("  --help             Show this help message");
    println!("  --version          Show the version");
    println!();
    println!("Ignore files:");
    println!("  Create a .swiftfmtignore file to exclude paths from formatting.");
    println!("  Patterns support * (single segment) and ** (any segments).");
    println!("  Default ignores: hidden files (.*), target/, node_modules/, .build/");
}
