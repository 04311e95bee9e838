use std::io::{BufRead, Write};

use wordcarver::{SegmentOptions, Segmenter};

use crate::{
    dictionary_args::DictionaryArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Join the pieces of phrase words with this string.
    #[arg(long)]
    joiner: Option<String>,

    /// Never emit this dictionary word.
    #[arg(long)]
    exclude: Option<String>,

    /// Also emit the known sub-words of long words.
    #[arg(long)]
    search: bool,

    /// Separator written between segments.
    #[arg(long, default_value = " ")]
    separator: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl CatArgs {
    /// The segmentation options selected by the flags.
    fn segment_options(&self) -> SegmentOptions {
        let mut options = SegmentOptions::default();
        options.set_joiner(self.joiner.as_deref());
        options.set_exclude(self.exclude.as_deref());
        options
    }

    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let segmenter = self.dictionary.load_segmenter()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_cat(
            &mut reader,
            &mut writer,
            &segmenter,
            &self.segment_options(),
            self.search,
            &self.separator,
        )
    }
}

fn run_cat(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    segmenter: &Segmenter,
    options: &SegmentOptions,
    search: bool,
    separator: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        let words = if search {
            segmenter.segment_for_search(&line, options)
        } else {
            segmenter.segment(&line, options)
        };

        writeln!(writer, "{}", words.join(separator))?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordcarver::DictionaryBuilder;

    use super::*;

    fn segmenter() -> Segmenter {
        let mut builder = DictionaryBuilder::default();
        builder.insert_text("北京", 40, "ns");
        builder.insert_text("大学", 40, "n");
        builder.insert_text("北京大学", 30, "nt");
        builder.finalize().into()
    }

    fn cat(
        input: &str,
        options: &SegmentOptions,
        search: bool,
        separator: &str,
    ) -> String {
        let mut reader = Cursor::new(input.to_string());
        let mut out = Vec::new();
        run_cat(&mut reader, &mut out, &segmenter(), options, search, separator).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_cat() {
        let options = SegmentOptions::default();
        assert_eq!(
            cat("去北京大学\n\n北京\n", &options, false, " "),
            "去 北京大学\n\n北京\n"
        );
        assert_eq!(cat("去北京大学\n", &options, false, "/"), "去/北京大学\n");
    }

    #[test]
    fn test_run_cat_search_and_exclude() {
        let options = SegmentOptions::default();
        assert_eq!(
            cat("北京大学\n", &options, true, " "),
            "北京 大学 北京大学\n"
        );

        let options = SegmentOptions::default().with_exclude("北京大学");
        assert_eq!(cat("北京大学\n", &options, false, " "), "北京 大学\n");
    }
}
