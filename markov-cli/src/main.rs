use std::io::{self, BufWriter, Write};
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use markov_core::{Chars, Predictor, Segmentation, Words, io::load};

mod cli;
mod fetch;
mod repl;

use cli::{Cli, Command, GenerateArgs, SourceArgs};
use fetch::Fetcher;

/// Builds the random source: seeded when `--seed` is given.
fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

fn run_repl<S: Segmentation>(
	predictor: &Predictor<S>,
	args: &SourceArgs,
) -> Result<(), Box<dyn std::error::Error>> {
	log::info!(
		"reading {} contexts of up to {} tokens",
		predictor.segmentation().name(),
		predictor.size()
	);
	let mut rng = make_rng(args.seed);
	let stdin = io::stdin();
	let stdout = io::stdout();
	repl::run(predictor, stdin.lock(), stdout.lock(), &mut rng)?;
	Ok(())
}

fn run_generate<S: Segmentation>(
	predictor: &Predictor<S>,
	args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
	let mut rng = make_rng(args.source.seed);
	let start = match &args.start {
		Some(start) => start.clone(),
		None => predictor
			.random_context(&mut rng)
			.ok_or("The source is too short to pick a start context")?,
	};
	log::debug!("generating {} tokens from {:?}", args.count, start);

	let text = predictor.generate_from(&start, args.count, &mut rng)?;
	let mut out = BufWriter::new(io::stdout().lock());
	writeln!(out, "{}", text)?;
	out.flush()?;
	Ok(())
}

/// Application entry point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();

	match cli.command {
		Command::Repl(args) => {
			if args.word {
				run_repl(&load(&args.file, &args.encoding, args.size, Words)?, &args)
			} else {
				run_repl(&load(&args.file, &args.encoding, args.size, Chars)?, &args)
			}
		}
		Command::Generate(args) => {
			let source = &args.source;
			if source.word {
				run_generate(&load(&source.file, &source.encoding, source.size, Words)?, &args)
			} else {
				run_generate(&load(&source.file, &source.encoding, source.size, Chars)?, &args)
			}
		}
		Command::Fetch(args) => {
			let fetcher = Fetcher::new(Duration::from_secs(args.timeout))?;
			let written = fetcher.write_http_contents(&args.url, &args.output)?;
			println!("{} bytes written to {}", written, args.output.display());
			Ok(())
		}
	}
}
