use std::io::Write;

use wordcarver::Dictionary;

use crate::{dictionary_args::DictionaryArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl StatsArgs {
    /// Run the stats command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let segmenter = self.dictionary.load_segmenter()?;
        let mut writer = self.output.open_writer()?;
        write_stats(&mut writer, segmenter.dictionary())?;
        writer.flush()?;
        Ok(())
    }
}

fn write_stats(
    writer: &mut dyn Write,
    dict: &Dictionary,
) -> std::io::Result<()> {
    writeln!(writer, "tokens: {}", dict.len())?;
    writeln!(writer, "total_frequency: {}", dict.total_frequency())?;
    writeln!(writer, "max_token_length: {}", dict.max_token_length())?;
    Ok(())
}
