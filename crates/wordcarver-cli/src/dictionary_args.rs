use std::sync::Arc;

use wordcarver::{
    DictionaryLoader,
    LoaderOptions,
    Segmenter,
    loading::DEFAULT_MIN_FREQUENCY,
};

/// Dictionary selection arg group.
#[derive(clap::Args, Debug)]
pub struct DictionaryArgs {
    /// Comma-separated dictionary files; earlier files take precedence.
    #[arg(long, required = true)]
    dict: String,

    /// Treat "-" as a phrase delimiter.
    #[arg(long)]
    phrase: bool,

    /// Split letters one per unit, lower-cased.
    #[arg(long)]
    chars: bool,

    /// Skip dictionary entries below this frequency.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: u64,
}

impl DictionaryArgs {
    /// The loader options selected by the flags.
    pub fn loader_options(&self) -> LoaderOptions {
        let options = if self.chars {
            LoaderOptions::character_mode()
        } else {
            LoaderOptions::default()
        };
        options
            .with_phrase(self.phrase)
            .with_min_frequency(self.min_frequency)
    }

    /// Load the dictionaries into a segmenter.
    pub fn load_segmenter(&self) -> Result<Segmenter, Box<dyn std::error::Error>> {
        let mut loader = DictionaryLoader::new(self.loader_options());
        let report = loader.load_paths(&self.dict)?;
        if report.malformed > 0 {
            log::warn!("{} malformed dictionary lines skipped", report.malformed);
        }
        Ok(Segmenter::new(Arc::new(loader.finish())))
    }
}
