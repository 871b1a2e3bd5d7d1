use anyhow::{Context, Result};
use markdown_tiptap_config::{Config, OutputConfig};
use markdown_tiptap_engine::{Document, TiptapDoc, io, parse_markdown_with};
use std::{env, path::PathBuf, process};

/// Where the Markdown comes from.
enum Input {
    Stdin,
    File(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Input> {
    match args {
        [_] => Some(Input::Stdin),
        [_, arg] if arg == "-" => Some(Input::Stdin),
        [_, arg] if arg.starts_with('-') => None,
        [_, path] => Some(Input::File(PathBuf::from(path))),
        _ => None,
    }
}

fn render(doc: Document, output: &OutputConfig) -> serde_json::Result<String> {
    match (output.wrap_in_doc, output.pretty) {
        (true, true) => serde_json::to_string_pretty(&TiptapDoc::from(doc)),
        (true, false) => serde_json::to_string(&TiptapDoc::from(doc)),
        (false, true) => doc.to_json_pretty(),
        (false, false) => doc.to_json(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(input) = parse_args(&args) else {
        let program = args.first().map_or("markdown-tiptap", String::as_str);
        eprintln!("Usage: {program} [markdown-file | -]");
        eprintln!("Reads standard input when no file is given.");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!(
                "no config file at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let markdown = match &input {
        Input::Stdin => io::read_markdown_from(std::io::stdin().lock()),
        Input::File(path) => io::read_markdown(path),
    };
    let markdown = match markdown {
        Ok(markdown) => markdown,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let doc = parse_markdown_with(&markdown, &config.parse_options());
    log::info!("converted {} top-level blocks", doc.len());

    let json = render(doc, &config.output).context("Failed to serialize document")?;
    println!("{json}");
    Ok(())
}
