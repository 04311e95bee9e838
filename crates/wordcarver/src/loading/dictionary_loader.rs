//! # Dictionary Loader

use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::AddAssign,
    path::Path,
};

use crate::{
    dictionary::{Dictionary, DictionaryBuilder},
    errors::WCResult,
    loading::{DictionaryEntry, LoaderOptions, parse_entry_line},
};

/// Counts from one or more load calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries handed to the dictionary.
    pub loaded: usize,

    /// Entries skipped for a frequency below the minimum.
    pub filtered: usize,

    /// Lines skipped as malformed.
    pub malformed: usize,
}

impl AddAssign for LoadReport {
    fn add_assign(
        &mut self,
        rhs: Self,
    ) {
        self.loaded += rhs.loaded;
        self.filtered += rhs.filtered;
        self.malformed += rhs.malformed;
    }
}

/// Loads dictionary sources, in order, into one [`Dictionary`].
///
/// Earlier sources take precedence: on a repeated word the frequency
/// becomes the max, but the first source keeps the tag.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    options: LoaderOptions,
    builder: DictionaryBuilder,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl DictionaryLoader {
    /// Create a loader.
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            builder: DictionaryBuilder::new(options.split),
        }
    }

    /// A loader for the Latin character-granularity pipeline.
    pub fn character_mode() -> Self {
        Self::new(LoaderOptions::character_mode())
    }

    /// The loader options.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// The dictionary under construction.
    pub fn builder(&self) -> &DictionaryBuilder {
        &self.builder
    }

    /// Load a single entry.
    pub fn load_entry(
        &mut self,
        entry: &DictionaryEntry,
        report: &mut LoadReport,
    ) {
        if entry.frequency == 0 || entry.frequency < self.options.min_frequency {
            log::debug!(
                "filtered {:?}: frequency {} < {}",
                entry.text,
                entry.frequency,
                self.options.min_frequency
            );
            report.filtered += 1;
            return;
        }

        self.builder
            .insert_text(&entry.text, entry.frequency, &entry.tag);
        report.loaded += 1;
    }

    /// Load a batch of entries.
    pub fn load_entries<I>(
        &mut self,
        entries: I,
    ) -> LoadReport
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut report = LoadReport::default();
        for entry in entries {
            self.load_entry(&entry, &mut report);
        }
        report
    }

    /// Load ``text frequency [tag]`` lines from a reader.
    ///
    /// Malformed lines are logged and skipped; read errors abort the load.
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> WCResult<LoadReport> {
        let mut report = LoadReport::default();
        for line in reader.lines() {
            match parse_entry_line(&line?) {
                Ok(Some(entry)) => self.load_entry(&entry, &mut report),
                Ok(None) => (),
                Err(err) => {
                    log::warn!("skipping: {err}");
                    report.malformed += 1;
                }
            }
        }
        Ok(report)
    }

    /// Load a dictionary file.
    pub fn load_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> WCResult<LoadReport> {
        let path = path.as_ref();
        log::info!("loading dictionary {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let report = self.load_reader(reader)?;

        log::info!(
            "loaded dictionary {}: {} entries, {} filtered, {} malformed",
            path.display(),
            report.loaded,
            report.filtered,
            report.malformed
        );
        Ok(report)
    }

    /// Load a comma-separated list of dictionary files, in order.
    ///
    /// ```rust,ignore
    /// loader.load_paths("user_dict.txt,general_dict.txt")?;
    /// ```
    pub fn load_paths(
        &mut self,
        paths: &str,
    ) -> WCResult<LoadReport> {
        let mut report = LoadReport::default();
        for path in paths.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            report += self.load_path(path)?;
        }
        Ok(report)
    }

    /// Load a pre-parsed ``{ word -> "text frequency [tag]" }`` map.
    ///
    /// The map key is the word; the leading text field of the value is
    /// ignored. Entries are loaded in key order.
    pub fn load_preloaded<I, K, V>(
        &mut self,
        map: I,
    ) -> LoadReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: Vec<(K, V)> = map.into_iter().collect();
        pairs.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

        let mut report = LoadReport::default();
        for (word, value) in pairs {
            match parse_entry_line(value.as_ref()) {
                Ok(Some(entry)) => {
                    let entry = DictionaryEntry {
                        text: word.as_ref().to_string(),
                        ..entry
                    };
                    self.load_entry(&entry, &mut report);
                }
                Ok(None) => (),
                Err(err) => {
                    log::warn!("skipping {:?}: {err}", word.as_ref());
                    report.malformed += 1;
                }
            }
        }
        report
    }

    /// Finalize costs and return the dictionary.
    pub fn finish(self) -> Dictionary {
        let dict = self.builder.finalize();
        log::info!(
            "dictionary loading complete: {} tokens, total frequency {}",
            dict.len(),
            dict.total_frequency()
        );
        dict
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, io::Cursor};

    use super::*;
    use crate::units::Granularity;

    #[test]
    fn test_load_reader() {
        let source = "北京 10 ns\n大学 8\n\n坏行\n稀有 1 n\n错 x n\n";
        let mut loader = DictionaryLoader::default();
        let report = loader.load_reader(Cursor::new(source)).unwrap();

        assert_eq!(
            report,
            LoadReport {
                loaded: 2,
                filtered: 1,
                malformed: 2,
            }
        );

        let dict = loader.finish();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.total_frequency(), 18);
        assert_eq!(dict.get("北京").unwrap().tag(), "ns");
        assert_eq!(dict.get("大学").unwrap().tag(), "");
        assert!(dict.get("稀有").is_none());
    }

    #[test]
    fn test_load_entries_min_frequency() {
        let mut loader = DictionaryLoader::new(LoaderOptions::default().with_min_frequency(5));
        let report = loader.load_entries(vec![
            DictionaryEntry::new("甲", 5, ""),
            DictionaryEntry::new("乙", 4, ""),
        ]);
        assert_eq!(report.loaded, 1);
        assert_eq!(report.filtered, 1);
        assert_eq!(loader.builder().len(), 1);
    }

    #[test]
    fn test_batches_in_order() {
        let mut loader = DictionaryLoader::default();
        loader.load_reader(Cursor::new("北京 10 user\n")).unwrap();
        loader
            .load_reader(Cursor::new("北京 10 general\n大学 5 n\n"))
            .unwrap();
        loader.load_reader(Cursor::new("北京 30 other\n")).unwrap();

        let dict = loader.finish();
        let token = dict.get("北京").unwrap();
        assert_eq!(token.tag(), "user");
        assert_eq!(token.frequency(), 30);
        assert_eq!(dict.total_frequency(), 35);
    }

    #[test]
    fn test_character_mode_lowercases() {
        let mut loader = DictionaryLoader::character_mode();
        assert_eq!(loader.options().split.granularity, Granularity::Character);
        loader.load_entries(vec![DictionaryEntry::new("LOVE", 10, "")]);

        let dict = loader.finish();
        let token = dict.get("love").unwrap();
        assert_eq!(token.units(), &["l", "o", "v", "e"]);
    }

    #[test]
    fn test_character_mode_non_ascii_capitals() {
        let mut loader = DictionaryLoader::character_mode();
        loader
            .load_reader(Cursor::new("ÉCOLE 10\nlove 10\n"))
            .unwrap();
        let segmenter = crate::Segmenter::from(loader.finish());
        let options = crate::SegmentOptions::default();

        assert_eq!(segmenter.segment("ÉCOLE", &options), vec!["école"]);
        assert_eq!(segmenter.segment("école", &options), vec!["école"]);
        assert_eq!(segmenter.segment("LOVE", &options), vec!["love"]);
    }

    #[test]
    fn test_hash_prefixed_words_load() {
        let mut loader = DictionaryLoader::default();
        let report = loader
            .load_reader(Cursor::new("# 50 w\n#号 20 n\n"))
            .unwrap();
        assert_eq!(report.loaded, 2);

        let dict = loader.finish();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("#").unwrap().tag(), "w");
        assert_eq!(dict.get("#号").unwrap().frequency(), 20);
    }

    #[test]
    fn test_non_positive_frequency_filtered() {
        let mut loader = DictionaryLoader::new(LoaderOptions::default().with_min_frequency(0));
        let report = loader
            .load_reader(Cursor::new("词 -3 n\n零 0\n好 4 a\n"))
            .unwrap();
        assert_eq!(
            report,
            LoadReport {
                loaded: 1,
                filtered: 2,
                malformed: 0,
            }
        );
        assert_eq!(loader.finish().total_frequency(), 4);
    }

    #[test]
    fn test_huge_frequencies_saturate() {
        let mut loader = DictionaryLoader::default();
        let report = loader
            .load_reader(Cursor::new("甲 18446744073709551615 n\n乙 5 n\n"))
            .unwrap();
        assert_eq!(report.loaded, 2);

        let dict = loader.finish();
        assert_eq!(dict.total_frequency(), u64::MAX);
        assert!(dict.tokens().iter().all(|t| t.cost().is_finite()));
    }

    #[test]
    fn test_load_preloaded() {
        let mut map = BTreeMap::new();
        map.insert("北京", "_ 10 ns");
        map.insert("大学", "_ 1 n");
        map.insert("坏", "_");

        let mut loader = DictionaryLoader::default();
        let report = loader.load_preloaded(map);
        assert_eq!(
            report,
            LoadReport {
                loaded: 1,
                filtered: 1,
                malformed: 1,
            }
        );
        assert_eq!(loader.finish().get("北京").unwrap().frequency(), 10);
    }

    #[test]
    fn test_load_paths() {
        let dir = tempdir::TempDir::new("wordcarver_loader").unwrap();
        let user = dir.path().join("user.txt");
        let general = dir.path().join("general.txt");
        std::fs::write(&user, "北京 50 user\n").unwrap();
        std::fs::write(&general, "北京 20 general\n大学 30 n\n").unwrap();

        let mut loader = DictionaryLoader::default();
        let paths = format!("{},{}", user.display(), general.display());
        let report = loader.load_paths(&paths).unwrap();
        assert_eq!(report.loaded, 3);

        let dict = loader.finish();
        assert_eq!(dict.get("北京").unwrap().tag(), "user");
        assert_eq!(dict.total_frequency(), 80);
    }

    #[test]
    fn test_missing_file() {
        let mut loader = DictionaryLoader::default();
        let err = loader
            .load_path("/nonexistent/wordcarver/dict.txt")
            .unwrap_err();
        assert!(matches!(err, crate::WordcarverError::Io(_)));
    }
}
