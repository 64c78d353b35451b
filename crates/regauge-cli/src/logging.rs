/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Print detailed information during calculation.
    #[clap(short, long)]
    pub verbose: bool,
}

impl LogArgs {
    /// Initialize stderr logging; `--verbose` raises the level to debug.
    pub fn setup_logging(&self) -> Result<(), log::SetLoggerError> {
        let level = if self.verbose {
            stderrlog::LogLevelNum::Debug
        } else {
            stderrlog::LogLevelNum::Warn
        };

        stderrlog::new().verbosity(level).init()
    }
}
