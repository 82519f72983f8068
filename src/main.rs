use std::process::ExitCode;

use clap::Parser;
use hostprobe::{get_memory_size, get_num_cores, snapshot, NativeProbe, MEMORY_STRATEGY};
use tracing_subscriber::EnvFilter;

/// Report installed physical memory and online logical processors
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Print the snapshot as JSON
	#[arg(long, conflicts_with = "raw")]
	json: bool,

	/// Print the sentinel values (0 memory / wrapped core count on failure)
	#[arg(long)]
	raw: bool,

	/// Log each query
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	if args.raw {
		println!("memory: {}", get_memory_size());
		println!("cores: {}", get_num_cores());
		return ExitCode::SUCCESS;
	}

	let resources = match snapshot(&NativeProbe) {
		Ok(resources) => resources,
		Err(e) => {
			eprintln!("error: {}", e);
			return ExitCode::FAILURE;
		}
	};

	if args.json {
		match serde_json::to_string_pretty(&resources) {
			Ok(json) => println!("{}", json),
			Err(e) => {
				eprintln!("error: {}", e);
				return ExitCode::FAILURE;
			}
		}
	} else {
		println!(
			"memory: {} bytes ({:.2} GiB, {:?})",
			resources.physical_memory_bytes,
			resources.physical_memory_bytes as f64 / (1u64 << 30) as f64,
			MEMORY_STRATEGY
		);
		println!("cores: {}", resources.logical_cores);
	}

	ExitCode::SUCCESS
}
