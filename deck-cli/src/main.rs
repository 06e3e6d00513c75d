// Command-line interface for deck
//
// This binary converts slide-separated Markdown documents into single-file
// continuous-scroll HTML pages. All conversion logic lives in the
// deck-render crate; this crate owns argument handling, file I/O, and
// failure reporting.
//
// Usage:
//  deck <input.md> [output.html] [--config <path>]   - Convert one deck
//  deck <directory> [output-dir] [--config <path>]   - Convert every .md in
//                                                      a directory
//
// Errors are printed and the run continues: in directory mode one file's
// failure never aborts the batch, and the process does not use distinct
// exit codes for conversion failures.

use clap::{Arg, Command, ValueHint};
use deck_config::{ConfigError, DeckConfig, Loader};
use deck_render::{ConvertError, PageOptions, Renderer};
use std::fs;
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("deck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown slide decks into continuous-scroll HTML")
        .long_about(
            "deck converts Marp-style Markdown slide decks (slides separated by ---,\n\
            optional YAML front matter) into single self-contained HTML pages.\n\n\
            Examples:\n  \
            deck slides.md                     # write slides_continuous.html next to the input\n  \
            deck slides.md out.html            # explicit output file\n  \
            deck decks/                        # convert every .md into decks/html_output/\n  \
            deck decks/ html/ --config my.toml # explicit output dir and config",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown deck file or directory of decks")
                .required(true)
                .index(1)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("output")
                .help("Output HTML file or directory")
                .index(2)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a deck.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    let config = match load_cli_config(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return;
        }
    };

    let input = PathBuf::from(matches.get_one::<String>("input").expect("input is required"));
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    if input.is_dir() {
        process_directory(&input, output.as_deref(), &config);
    } else {
        let renderer = Renderer::new();
        let output = output.unwrap_or_else(|| default_output_for(&input, &config.output.suffix));
        process_file(&renderer, &input, &output, &config);
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<DeckConfig, ConfigError> {
    let loader = Loader::new().with_optional_file("deck.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build()
}

/// Default output path: input stem + configured suffix, next to the input.
fn default_output_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deck".to_string());
    input.with_file_name(format!("{stem}{suffix}.html"))
}

/// Convert one deck file. Returns true on success; all failures are
/// reported here and never propagate.
fn process_file(renderer: &Renderer, input: &Path, output: &Path, config: &DeckConfig) -> bool {
    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading file '{}': {err}", input.display());
            return false;
        }
    };

    let options = PageOptions::from(&config.page);
    let html = match renderer.render_document(&source, &options) {
        Ok(html) => html,
        Err(ConvertError::NoContent) => {
            eprintln!("Error: no slides found in '{}'", input.display());
            return false;
        }
        Err(err) => {
            eprintln!("Conversion error for '{}': {err}", input.display());
            return false;
        }
    };

    if let Err(err) = fs::write(output, html) {
        eprintln!("Error writing file '{}': {err}", output.display());
        return false;
    }

    println!("Converted '{}' -> '{}'", input.display(), output.display());
    true
}

/// Convert every Markdown file in a directory, reporting a success count.
fn process_directory(input: &Path, output: Option<&Path>, config: &DeckConfig) {
    let out_dir = match output {
        Some(path) => path.to_path_buf(),
        None => input.join(&config.output.directory),
    };

    if let Err(err) = fs::create_dir_all(&out_dir) {
        eprintln!("Error creating output directory '{}': {err}", out_dir.display());
        return;
    }

    let mut deck_files = match markdown_files_in(input) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("Error reading directory '{}': {err}", input.display());
            return;
        }
    };
    deck_files.sort();

    if deck_files.is_empty() {
        eprintln!("No markdown files found in '{}'", input.display());
        return;
    }

    let renderer = Renderer::new();
    let total = deck_files.len();
    let mut success = 0;

    for file in &deck_files {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());
        let out = out_dir.join(format!("{stem}{}.html", config.output.suffix));
        if process_file(&renderer, file, &out, config) {
            success += 1;
        }
    }

    println!("Processed {success}/{total} files");
}

fn markdown_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(files)
}
