//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{LevelFilter, debug};
use owo_colors::OwoColorize;
use treedoc::{PackageGraph, RenderMode, Renderer};

#[derive(Parser, Debug)]
#[command(name = "treedoc", version, about = "Render a documentation model into a Markdown tree")]
struct Cli {
	/// JSON dump of the resolved documentation model
	model: PathBuf,

	/// Directory the documentation is written to
	#[arg(short = 'o', long, default_value = "doc/api")]
	output: PathBuf,

	/// Log every generated file
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,

	/// Generate one document per source file instead of per library and type
	#[arg(long, default_value_t = false)]
	simple: bool,

	/// Project root used to relativize source paths (defaults to the current directory)
	#[arg(long)]
	project_root: Option<PathBuf>,

	/// Directory names whose declarations are never documented
	#[arg(long = "exclude-dir", value_name = "NAME")]
	exclude_dirs: Vec<String>,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

fn main() {
	let cli = Cli::parse();

	let level = if cli.verbose { LevelFilter::Info } else { LevelFilter::Warn };
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_target(false)
		.format_timestamp(None)
		.init();
	debug!("{cli:?}");

	if let Err(e) = run(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let json = fs::read_to_string(&cli.model)
		.map_err(|e| format!("failed to read {}: {e}", cli.model.display()))?;
	let graph = PackageGraph::from_json(&json)?;

	let project_root = match &cli.project_root {
		Some(root) => root.clone(),
		None => std::env::current_dir()?,
	};
	let mode = if cli.simple { RenderMode::Simple } else { RenderMode::Full };

	let mut renderer = Renderer::new(&cli.output)
		.with_mode(mode)
		.with_verbose(cli.verbose)
		.with_project_root(project_root);
	if !cli.exclude_dirs.is_empty() {
		renderer = renderer.with_excluded_dirs(cli.exclude_dirs.iter().cloned());
	}
	let summary = renderer.render(&graph)?;

	let message = format!(
		"Generated {} documents in {}",
		summary.documents.len(),
		cli.output.display()
	);
	if cli.no_color || !std::io::stdout().is_terminal() {
		println!("{message}");
	} else {
		println!("{}", message.bright_green().bold());
	}
	Ok(())
}
