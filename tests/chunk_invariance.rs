//! Property tests: the read chunk size must never change the result.

use file_patcher::engine::{NoopObserver, PatchReport, StreamPatcher};
use file_patcher::{Occurrence, Patch, PatchSet, Pattern};
use proptest::prelude::*;
use std::io::Cursor;

type PatchText = (String, String, usize);

fn nibble_text(len: usize, alphabet: &'static [char]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(alphabet), len * 2)
        .prop_map(|chars| chars.into_iter().collect())
}

fn patch_strategy() -> impl Strategy<Value = PatchText> {
    (1usize..=5).prop_flat_map(|len| {
        (
            nibble_text(len, &['0', '1', '?']),
            nibble_text(len, &['0', '5', 'A', 'F', '?']),
            0usize..4,
        )
    })
}

fn run(data: &[u8], patches: &[PatchText], chunk_size: usize) -> (Vec<u8>, PatchReport) {
    let mut set = PatchSet::new();
    for (lookup, replacement, target) in patches {
        set.add(Patch::from_hex(lookup, replacement, Occurrence::from_target(*target)).unwrap());
    }

    let mut output = Vec::new();
    let report = StreamPatcher::new()
        .with_chunk_size(chunk_size)
        .run(Cursor::new(data), &mut output, &mut set, &mut NoopObserver)
        .unwrap();
    (output, report)
}

/// Counts every unsatisfied patch matching at `position` and returns the
/// first one that wants this occurrence.
fn count_at(parsed: &[(Pattern, Pattern, usize)], counters: &mut [usize], data: &[u8]) -> Option<usize> {
    let mut selected = None;
    for (i, (lookup, _, target)) in parsed.iter().enumerate() {
        if *target != 0 && counters[i] >= *target {
            continue;
        }
        if lookup.matches(data) {
            counters[i] += 1;
            if selected.is_none() && (*target == 0 || counters[i] == *target) {
                selected = Some(i);
            }
        }
    }
    selected
}

/// Whole-buffer version of the scan: leftmost position first, earliest
/// registered patch wins, and starts inside a chosen span are counted before
/// the span is replaced and skipped.
fn naive(data: &[u8], patches: &[PatchText]) -> (Vec<u8>, Vec<usize>) {
    let parsed: Vec<(Pattern, Pattern, usize)> = patches
        .iter()
        .map(|(l, r, t)| (Pattern::from_hex(l).unwrap(), Pattern::from_hex(r).unwrap(), *t))
        .collect();
    let mut counters = vec![0usize; parsed.len()];
    let mut out = data.to_vec();

    let mut position = 0;
    while position < out.len() {
        match count_at(&parsed, &mut counters, &out[position..]) {
            Some(i) => {
                let end = (position + parsed[i].0.len()).min(out.len());
                for inner in position + 1..end {
                    count_at(&parsed, &mut counters, &out[inner..]);
                }
                parsed[i].1.apply(&mut out[position..]);
                position = end;
            }
            None => position += 1,
        }
    }

    (out, counters)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn output_does_not_depend_on_chunk_size(
        data in proptest::collection::vec(proptest::sample::select(&[0x00u8, 0x01, 0x10, 0x11][..]), 0..200),
        patches in proptest::collection::vec(patch_strategy(), 1..4),
        chunk_size in 1usize..64,
    ) {
        let (expected, expected_report) = run(&data, &patches, 4096);
        let (output, report) = run(&data, &patches, chunk_size);

        prop_assert_eq!(output.len(), data.len());
        prop_assert_eq!(&output, &expected);
        prop_assert_eq!(report, expected_report);
    }

    #[test]
    fn streaming_matches_whole_buffer_scan(
        data in proptest::collection::vec(proptest::sample::select(&[0x00u8, 0x01, 0x10, 0x11][..]), 0..200),
        patches in proptest::collection::vec(patch_strategy(), 1..4),
        chunk_size in 1usize..16,
    ) {
        let (output, report) = run(&data, &patches, chunk_size);
        let (expected, counters) = naive(&data, &patches);
        prop_assert_eq!(output, expected);
        let seen: Vec<usize> = report.outcomes.iter().map(|o| o.occurrences_seen).collect();
        prop_assert_eq!(seen, counters);
    }
}
