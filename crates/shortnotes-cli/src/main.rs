use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use relative_path::RelativePathBuf;
use shortnotes_config::Config;
use shortnotes_engine::{
    EnglishLocale, extract_reply_id, format_title, io, parse_note, transform_with,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  shortnotes status <file>
  shortnotes title <file> [<rfc3339 timestamp>]
  shortnotes reply-id <url>
  shortnotes list";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Status { file: PathBuf },
    Title { file: PathBuf, at: Option<DateTime<Utc>> },
    ReplyId { url: String },
    List,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
        match rest.as_slice() {
            ["status", file] => Ok(Command::Status { file: file.into() }),
            ["title", file] => Ok(Command::Title {
                file: file.into(),
                at: None,
            }),
            ["title", file, at] => {
                let at = DateTime::parse_from_rfc3339(at)
                    .with_context(|| format!("Invalid timestamp '{at}'"))?;
                Ok(Command::Title {
                    file: file.into(),
                    at: Some(at.with_timezone(&Utc)),
                })
            }
            ["reply-id", url] => Ok(Command::ReplyId {
                url: url.to_string(),
            }),
            ["list"] => Ok(Command::List),
            _ => bail!("{USAGE}"),
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let result = Command::parse(&args).and_then(|command| {
        let config = Config::load().context("Failed to load config file")?;
        run(command, config)
    });

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(command: Command, config: Option<Config>) -> Result<String> {
    match command {
        Command::Status { file } => {
            let markup = read_markup(&file)?;
            let options = config.map(|c| c.status_options()).unwrap_or_default();
            let result = transform_with(&markup, &options)
                .with_context(|| format!("Failed to transform '{}'", file.display()))?;
            Ok(result.text)
        }
        Command::Title { file, at } => {
            let markup = read_markup(&file)?;
            title_for(&markup, at.unwrap_or_else(Utc::now), config.as_ref())
                .with_context(|| format!("Failed to title '{}'", file.display()))
        }
        Command::ReplyId { url } => Ok(extract_reply_id(&url).status_id.to_string()),
        Command::List => {
            let Some(config) = config else {
                bail!(
                    "No config file found; create one at {} with a notes_path",
                    Config::config_path().display()
                );
            };
            list_notes(&config)
        }
    }
}

fn read_markup(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file.display()))
}

fn title_for(markup: &str, at: DateTime<Utc>, config: Option<&Config>) -> Result<String> {
    let doc = parse_note(markup)?;
    let defaults;
    let config = match config {
        Some(config) => config,
        None => {
            defaults = Config::new(PathBuf::new());
            &defaults
        }
    };
    Ok(format_title(
        &doc.blocks,
        at,
        &config.date_format,
        &config.time_format,
        &EnglishLocale::default(),
        config.title_scan,
    ))
}

/// One line per note: its path under the notes root and its title, dated by
/// the file's modification time.
fn list_notes(config: &Config) -> Result<String> {
    let root = &config.notes_path;
    let files = io::scan_note_files(root)
        .with_context(|| format!("Notes path '{}' is invalid", root.display()))?;

    let mut lines = Vec::with_capacity(files.len());
    for path in files {
        let relative = RelativePathBuf::from_path(path.strip_prefix(root)?)?;
        let markup = io::read_note(&relative, root)?;
        let modified: DateTime<Utc> = std::fs::metadata(&path)?.modified()?.into();

        match title_for(&markup, modified, Some(config)) {
            Ok(title) => lines.push(format!("{relative}\t{title}")),
            Err(e) => log::warn!("skipping {relative}: {e}"),
        }
    }

    Ok(lines.join("\n"))
}
