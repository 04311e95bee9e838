#![allow(missing_docs)]

use std::{io::Cursor, sync::Arc};

use divan::{Bencher, black_box, counter::BytesCount};
use wordcarver::{DictionaryLoader, SegmentOptions, Segmenter, split_units};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static DICTIONARY: &str = "\
中国 5000 ns
中华 3000 nz
中华人民共和国 800 ns
人民 4000 n
共和国 900 n
北京 3000 ns
北京大学 600 nt
大学 2500 n
学生 2200 n
大学生 900 n
研究 2600 vn
研究生 800 n
生命 1200 n
起源 400 n
纽约 700 ns
时报 300 n
纽约时报 500 nt
我们 6000 r
今天 3500 t
天气 1800 n
很好 1500 a
computer 50 n
science 50 n
";

static CORPUS: &str = "\
中华人民共和国的北京大学研究生在研究生命起源。\
我们今天去纽约，读了纽约时报，天气很好。\
大学生学习Computer Science，成绩3.14分。";

fn corpus_text() -> String {
    CORPUS.repeat(50)
}

fn build_segmenter() -> Segmenter {
    let mut loader = DictionaryLoader::default();
    loader
        .load_reader(Cursor::new(DICTIONARY))
        .expect("in-memory dictionary");
    Segmenter::new(Arc::new(loader.finish()))
}

#[divan::bench]
fn split(bencher: Bencher) {
    let text = corpus_text();
    let segmenter = build_segmenter();
    let options = segmenter.split_options();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| split_units(black_box(&text), options));
}

#[divan::bench]
fn segment(bencher: Bencher) {
    let text = corpus_text();
    let segmenter = build_segmenter();
    let options = SegmentOptions::default();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| segmenter.segment(black_box(&text), &options));
}

#[divan::bench]
fn segment_exclude(bencher: Bencher) {
    let text = corpus_text();
    let segmenter = build_segmenter();
    let options = SegmentOptions::default().with_exclude("北京大学");
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| segmenter.segment(black_box(&text), &options));
}

#[divan::bench]
fn segment_for_search(bencher: Bencher) {
    let text = corpus_text();
    let segmenter = build_segmenter();
    let options = SegmentOptions::default();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| segmenter.segment_for_search(black_box(&text), &options));
}

#[cfg(feature = "rayon")]
mod parallel {
    use wordcarver::{TextSegmenter, rayon::ParallelRayonSegmenter};

    use super::*;

    #[divan::bench]
    fn segment_batch(bencher: Bencher) {
        let batch: Vec<String> = (0..64).map(|_| CORPUS.to_string()).collect();
        let bytes: usize = batch.iter().map(String::len).sum();
        let segmenter = ParallelRayonSegmenter::new(build_segmenter());
        let options = SegmentOptions::default();
        bencher
            .counter(BytesCount::new(bytes))
            .bench(|| segmenter.segment_batch(black_box(&batch), &options));
    }
}
