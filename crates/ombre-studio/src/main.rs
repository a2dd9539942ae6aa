mod session;

use std::io::Write;

use anyhow::{Context, Result};

use ombre_engine::logging::{init_logging, LoggingConfig};
use ombre_ui::prelude::CreatorConfig;

use session::Session;

const DEMO_SCRIPT: &str = include_str!("../scripts/demo.ombre");

#[derive(Debug, Default, PartialEq)]
struct Args {
    verbose: bool,
    script: Option<String>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        for arg in args {
            if arg == "-v" || arg == "--verbose" {
                parsed.verbose = true;
            } else if arg.starts_with('-') {
                anyhow::bail!("unknown option {arg}");
            } else if parsed.script.is_some() {
                anyhow::bail!("only one script path is accepted");
            } else {
                parsed.script = Some(arg);
            }
        }
        Ok(parsed)
    }
}

/// `ombre-studio [-v|--verbose] [SCRIPT]`
///
/// Replays an interaction script against a fresh gradient creator and prints
/// every gradient it renders. Without a path, the built-in demo runs.
/// `--verbose` traces every stop mutation and render.
fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    init_logging(if args.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    let (name, src) = match args.script {
        Some(path) => {
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("reading script {path}"))?;
            (path, src)
        }
        None => ("<demo>".to_string(), DEMO_SCRIPT.to_string()),
    };

    let script = ombre_script::parse_str(&src).with_context(|| format!("parsing {name}"))?;
    log::info!("replaying {} commands from {name}", script.commands.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "  ombre studio · {name}")?;
    writeln!(out, "  line | rendered gradient   (= render, : stops)")?;
    writeln!(out)?;

    let mut session = Session::new(CreatorConfig::default());
    session.run(&script, &mut out)?;

    writeln!(out)?;
    let creator = session.creator().borrow();
    writeln!(out, "  final: {}", creator.render())?;
    writeln!(out, "  stops: {}", creator.stops_json().context("serializing stops")?)?;
    Ok(())
}
