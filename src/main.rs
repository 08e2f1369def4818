use clap::Parser;
use modal_options::{from_assignments, parse_probe, probe, ModalOptions, ProbeReport};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Demo host: build an option bag from the command line and probe it the way
/// dialog content would.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Width handed to the host (defaults to 50%)
    #[arg(long)]
    width: Option<String>,
    /// Parameter as key=value; the value is read as a JSON scalar, else kept as text
    #[arg(long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,
    /// Typed read as key:type with type one of i64, f64, bool, string
    #[arg(long = "get", value_name = "KEY:TYPE")]
    gets: Vec<String>,
    /// Include the stored entries and their types in the output
    #[arg(long)]
    list: bool,
    /// Log at debug level (type mismatches, overwrites)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    width: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<Vec<(String, &'static str)>>,
    probes: Vec<ProbeReport>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let opts = match from_assignments(args.width.as_deref(), &args.sets) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid --set: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?opts, "built options");

    let mut probes = Vec::with_capacity(args.gets.len());
    for text in &args.gets {
        match parse_probe(text) {
            Ok(p) => probes.push(probe(&opts, &p.key, p.kind)),
            Err(e) => {
                eprintln!("Invalid --get: {e}");
                std::process::exit(1);
            }
        }
    }

    let out = Output {
        width: opts.width.clone(),
        entries: args.list.then(|| entries(&opts)),
        probes,
    };
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Cannot render output: {e}");
            std::process::exit(1);
        }
    }
}

fn entries(opts: &ModalOptions) -> Vec<(String, &'static str)> {
    opts.iter()
        .filter_map(|(key, _)| Some((key.to_string(), opts.type_name_of(key)?)))
        .collect()
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` (or `warn`) as the base; `--verbose` adds debug for this crate on top.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let mut filter = rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        for directive in ["modal_options=debug", "mopt=debug"] {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }
    }
    filter
}
