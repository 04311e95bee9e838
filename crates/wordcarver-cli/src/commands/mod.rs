mod cat;
mod stats;

/// Subcommands for wcarve
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Segment lines of text as a stream.
    Cat(cat::CatArgs),

    /// Print dictionary statistics.
    Stats(stats::StatsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Stats(cmd) => cmd.run(),
        }
    }
}
