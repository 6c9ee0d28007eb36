use anyhow::{Context, Result, bail};
use std::{
    env,
    io::{Write, stdout},
    path::PathBuf,
    process,
};
use turtle_highlight_config::{ClassNameStyle, Config};
use turtle_highlight_engine::{
    ClassNames, HtmlOptions, decode_text_content, highlight_block, io, render_html, render_pre,
};

const USAGE: &str = "Usage: turtle-highlight [--config PATH] [--fragment] [--decode-entities] [FILE]

Reads Turtle from FILE (or stdin when FILE is absent or '-') and prints
highlighted HTML to stdout.

  --config PATH        read settings from PATH instead of the default config file
  --fragment           print the highlighted lines without the <pre> wrapper
  --decode-entities    decode HTML entities (&lt; etc.) before highlighting
  -h, --help           show this help";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    fragment: bool,
    decode_entities: bool,
    input: Option<PathBuf>,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--fragment" => parsed.fragment = true,
            "--decode-entities" => parsed.decode_entities = true,
            "--config" => match args.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a path"),
            },
            // stdin
            "-" => {}
            other if other.starts_with('-') => bail!("unknown option '{other}'"),
            other => {
                if parsed.input.is_some() {
                    bail!("only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(other));
            }
        }
    }

    Ok(parsed)
}

fn load_config(args: &Args) -> Result<Config> {
    let (path, loaded) = match &args.config {
        Some(path) => (path.clone(), Config::load_from_path(path)?),
        None => (Config::config_path(), Config::load()?),
    };

    match loaded {
        Some(config) => {
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None if args.config.is_some() => {
            bail!("config file '{}' does not exist", path.display())
        }
        None => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

fn html_options(config: &Config) -> HtmlOptions {
    HtmlOptions {
        class_prefix: config.class_prefix.clone(),
        class_names: match config.class_names {
            ClassNameStyle::Labels => ClassNames::Labels,
            ClassNameStyle::Legacy => ClassNames::Legacy,
        },
        wrap_lines: config.wrap_lines,
        pre_class: config.pre_class.clone(),
    }
}

/// Highlights `source` according to the parsed flags and config.
fn highlight(source: &str, args: &Args, config: &Config) -> String {
    let text = if args.decode_entities || config.decode_entities {
        decode_text_content(source)
    } else {
        source.into()
    };

    let block = highlight_block(&text);
    let options = html_options(config);
    if args.fragment {
        render_html(&block, &options)
    } else {
        render_pre(&block, &options)
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let source = match &args.input {
        Some(path) => {
            log::info!("Highlighting {}", path.display());
            io::read_file(path).with_context(|| format!("reading '{}'", path.display()))?
        }
        None => {
            log::info!("Highlighting standard input");
            io::read_stdin().context("reading standard input")?
        }
    };

    let html = highlight(&source, args, &config);
    let mut out = stdout().lock();
    out.write_all(html.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    run(&args)
}
