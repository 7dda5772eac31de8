use std::fs;
use std::path::PathBuf;

use tracegantt::api::{ColorPolicy, TimelineChart, TimelineChartConfig};
use tracegantt::color::PaletteOverflow;
use tracegantt::timeline::Granularity;

const USAGE: &str = "usage: tracegantt <trace.csv> [--coarse] [--discrete] [--out <frame.json>]";

/// Conventional exit status for command-line usage errors.
const EX_USAGE: i32 = 64;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    coarse: bool,
    discrete: bool,
    out: Option<PathBuf>,
}

fn main() {
    let _ = tracegantt::telemetry::init_default_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            std::process::exit(EX_USAGE);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut input = None;
    let mut coarse = false;
    let mut discrete = false;
    let mut out = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--coarse" => coarse = true,
            "--discrete" => discrete = true,
            "--out" => {
                let path = args
                    .next()
                    .ok_or_else(|| "`--out` expects a file path".to_owned())?;
                out = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag `{flag}`"));
            }
            positional => {
                if input.is_some() {
                    return Err(format!("unexpected argument `{positional}`"));
                }
                input = Some(PathBuf::from(positional));
            }
        }
    }

    let input = input.ok_or_else(|| "missing input trace path".to_owned())?;
    Ok(CliArgs {
        input,
        coarse,
        discrete,
        out,
    })
}

fn run(args: &CliArgs) -> Result<(), String> {
    let mut config = TimelineChartConfig::default();
    if args.coarse {
        config.granularity = Granularity::Coarse;
    }
    if args.discrete {
        config.color_policy = ColorPolicy::Discrete {
            overflow: PaletteOverflow::Wrap,
        };
    }

    let chart = TimelineChart::from_path(&args.input, &config)
        .map_err(|err| format!("failed to build chart from `{}`: {err}", args.input.display()))?;

    let json = serde_json::to_string_pretty(chart.frame())
        .map_err(|err| format!("failed to serialize chart frame: {err}"))?;

    match &args.out {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
