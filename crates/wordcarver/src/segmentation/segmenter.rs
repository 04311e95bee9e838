//! # Shortest-Path Segmenter

use std::sync::Arc;

use crate::{
    dictionary::{Dictionary, PrefixMatch},
    segmentation::{
        Segment,
        SegmentOptions,
        jumper::{Jumper, PathEdge},
    },
    units::{SplitOptions, Unit, concat_units, split_bytes, split_units},
};

/// Minimum-cost dictionary segmenter.
///
/// Holds a shared, finalized [`Dictionary`]; segmentation only reads it,
/// so a `Segmenter` may be cloned and used from any number of threads.
/// To reload, build a new dictionary and swap it in with
/// [`Segmenter::with_dictionary`].
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    dictionary: Arc<Dictionary>,
}

impl From<Dictionary> for Segmenter {
    fn from(dictionary: Dictionary) -> Self {
        Self::new(Arc::new(dictionary))
    }
}

impl Segmenter {
    /// Create a segmenter over `dictionary`.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// A segmenter over a freshly published dictionary.
    pub fn with_dictionary(
        &self,
        dictionary: Arc<Dictionary>,
    ) -> Self {
        Self::new(dictionary)
    }

    /// The shared dictionary.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The split options queries are split with.
    pub fn split_options(&self) -> SplitOptions {
        self.dictionary.split_options()
    }

    /// Split `text` the way the dictionary was built.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<Unit<'a>> {
        split_units(text, self.split_options())
    }

    /// Segment a unit sequence.
    ///
    /// ## Arguments
    /// * `units` - the units to segment.
    /// * `options` - exclusion and search-mode options.
    ///
    /// ## Returns
    /// The minimum-cost segments, covering every unit exactly once;
    /// empty for empty input.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, units, options)))]
    pub fn segment_units(
        &self,
        units: &[Unit<'_>],
        options: &SegmentOptions,
    ) -> Vec<Segment<'_>> {
        let n = units.len();
        if n == 0 || (options.search_mode && n == 1) {
            return Vec::new();
        }

        let dict = self.dictionary.as_ref();
        let excluded = options.exclude();
        let max_len = dict.max_token_length();

        let mut jumpers: Vec<Jumper<'_>> = vec![Jumper::default(); n + 1];
        jumpers[0].min_cost = Some(0.0);

        let mut matches: Vec<PrefixMatch<'_>> = Vec::with_capacity(max_len);
        for current in 0..n {
            let Some(base) = jumpers[current].min_cost else {
                continue;
            };

            matches.clear();
            let window = &units[current..(current + max_len).min(n)];
            dict.lookup_prefixes_into(window, excluded, &mut matches);

            for m in &matches {
                let end = current + m.len;
                if options.search_mode && current == 0 && end == n {
                    continue;
                }
                jumpers[end].relax(
                    base,
                    PathEdge::Known {
                        len: m.len,
                        token: m.token,
                    },
                );
            }

            if matches.first().is_none_or(|m| m.len > 1) {
                jumpers[current + 1].relax(base, PathEdge::Fallback);
            }
        }

        let mut segments = Vec::new();
        let mut end = n;
        while end > 0 {
            let Some(edge) = jumpers[end].edge else {
                break;
            };
            let start = end - edge.len();
            segments.push(Segment::new(
                start,
                end,
                concat_units(&units[start..end]),
                edge.token(),
            ));
            end = start;
        }
        segments.reverse();
        segments
    }

    /// Segment `text` into [`Segment`]s.
    pub fn segment_detailed(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<Segment<'_>> {
        self.segment_units(&self.split(text), options)
    }

    /// Segment `text` into rendered words.
    ///
    /// ## Arguments
    /// * `text` - the text to segment.
    /// * `options` - rendering, exclusion, and search-mode options.
    pub fn segment(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<String> {
        render_all(&self.segment_detailed(text, options), options)
    }

    /// Segment raw bytes; invalid UTF-8 is replaced with `U+FFFD`.
    pub fn segment_bytes(
        &self,
        bytes: &[u8],
        options: &SegmentOptions,
    ) -> Vec<String> {
        let units = split_bytes(bytes, self.split_options());
        render_all(&self.segment_units(&units, options), options)
    }

    /// Segment `text`, rendering phrase tokens with `joiner`.
    pub fn segment_text(
        &self,
        text: &str,
        joiner: &str,
    ) -> Vec<String> {
        self.segment(text, &SegmentOptions::default().with_joiner(joiner))
    }

    /// Segment `text`, never emitting the known word `exclude`.
    ///
    /// The optimizer must recombine around every place `exclude` matches.
    pub fn segment_exclude(
        &self,
        text: &str,
        joiner: &str,
        exclude: &str,
    ) -> Vec<String> {
        let options = SegmentOptions::default()
            .with_joiner(joiner)
            .with_exclude(exclude);
        self.segment(text, &options)
    }

    /// Segment `text` for search indexing.
    ///
    /// Each multi-unit segment is preceded by the known words of its
    /// finer search-mode re-segmentation, recursively.
    pub fn segment_for_search(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Vec<String> {
        let units = self.split(text);
        let mut out = Vec::new();
        self.collect_search(&units, options, false, &mut out);
        out
    }

    fn collect_search(
        &self,
        units: &[Unit<'_>],
        options: &SegmentOptions,
        nested: bool,
        out: &mut Vec<String>,
    ) {
        let finer = options.clone().with_search_mode(true);
        for seg in self.segment_units(units, options) {
            if seg.len() > 1 {
                self.collect_search(&units[seg.start..seg.end], &finer, true, out);
            }
            if !nested || seg.is_known() {
                out.push(seg.render(options.joiner()));
            }
        }
    }
}

fn render_all(
    segments: &[Segment<'_>],
    options: &SegmentOptions,
) -> Vec<String> {
    let joiner = options.joiner();
    segments.iter().map(|seg| seg.render(joiner)).collect()
}
