use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use markov_core::io::DEFAULT_ENCODING;

#[derive(Parser, Debug)]
#[command(name = "markov", about = "Markov chain app")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Read contexts from stdin and print a predicted next token for each
	Repl(SourceArgs),

	/// Generate a sequence of tokens from a start context
	Generate(GenerateArgs),

	/// Download a text resource to a local file
	Fetch(FetchArgs),
}

/// Where the corpus comes from and how the predictor is built.
#[derive(Args, Debug)]
pub struct SourceArgs {
	/// Input file
	#[arg(short, long)]
	pub file: PathBuf,

	/// Markov size (maximum context length)
	#[arg(short, long, default_value_t = 1)]
	pub size: usize,

	/// Input encoding
	#[arg(long, default_value = DEFAULT_ENCODING)]
	pub encoding: String,

	/// Create a Word Markov (contexts measured in words)
	#[arg(long)]
	pub word: bool,

	/// Seed for the random generator, for reproducible output
	#[arg(long)]
	pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
	#[command(flatten)]
	pub source: SourceArgs,

	/// Number of tokens to generate
	#[arg(short = 'n', long, default_value_t = 100)]
	pub count: usize,

	/// Start context (a random known context when omitted)
	#[arg(long)]
	pub start: Option<String>,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
	/// URL to download
	pub url: String,

	/// Output file
	#[arg(short, long)]
	pub output: PathBuf,

	/// Request timeout in seconds
	#[arg(long, default_value_t = 10)]
	pub timeout: u64,
}
