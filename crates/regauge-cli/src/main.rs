mod logging;

use clap::Parser;
use regauge::helpfulness_score;

use crate::logging::LogArgs;

/// Calculate the helpfulness score for a regex pattern based on positive
/// and negative examples.
///
/// The score measures how conservative or liberal the pattern is relative
/// to the minimum pattern necessary for the positive examples: +1 is
/// maximally conservative, -1 maximally liberal.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// The regex pattern to evaluate.
    pub regex: String,

    /// Positive example strings that should match the pattern.
    #[arg(short, long, num_args = 1.., required = true)]
    pub positive: Vec<String>,

    /// Negative example strings that should not match the pattern.
    #[arg(short, long, num_args = 0..)]
    pub negative: Vec<String>,

    #[command(flatten)]
    pub logging: LogArgs,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = args.logging.setup_logging() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    log::debug!("candidate regex: {}", args.regex);
    log::debug!("positive examples: {:?}", args.positive);
    log::debug!("negative examples: {:?}", args.negative);

    match helpfulness_score(&args.regex, &args.positive, &args.negative) {
        Ok(score) => println!("Helpfulness score: {score:.4}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
