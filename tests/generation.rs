use arraygen::capacity::{Capacity, CapacityRegistry};
use arraygen::config::Settings;
use arraygen::emit::build_artifacts;
use arraygen::generator::generate;
use arraygen::layout::{BlockSet, Field};
use insta::assert_snapshot;
use std::collections::HashSet;

fn cap(n: i64) -> Capacity {
    Capacity::new(n).unwrap()
}

fn generate_for(requested: &[i64]) -> BlockSet {
    let mut registry = CapacityRegistry::new();
    registry.extend(requested.iter().copied()).unwrap();
    generate(&registry).unwrap()
}

fn sizes(blocks: &BlockSet) -> Vec<usize> {
    blocks.iter().map(|b| b.size.get()).collect()
}

fn listing(blocks: &BlockSet) -> String {
    blocks
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn nothing_requested_yields_the_base_blocks() {
    let blocks = generate_for(&[]);

    assert_eq!(sizes(&blocks), [1, 2, 3]);
}

#[test]
fn four_reuses_block_three() {
    let blocks = generate_for(&[4]);

    assert_eq!(sizes(&blocks), [1, 2, 3, 4]);
    assert_eq!(
        blocks.get(cap(4)).unwrap().fields,
        [Field::Element, Field::Nested { size: cap(3), ordinal: 1 }]
    );
}

#[test]
fn five_alone_packs_three_then_a_raw_element() {
    let blocks = generate_for(&[5]);

    assert_eq!(sizes(&blocks), [1, 2, 3, 5]);
    assert_eq!(
        blocks.get(cap(5)).unwrap().fields,
        [
            Field::Element,
            Field::Nested { size: cap(3), ordinal: 1 },
            Field::Element,
        ]
    );
}

#[test]
fn five_after_four_reuses_block_four() {
    let blocks = generate_for(&[5, 4]);

    assert_eq!(sizes(&blocks), [1, 2, 3, 4, 5]);
    assert_eq!(
        blocks.get(cap(5)).unwrap().fields,
        [Field::Element, Field::Nested { size: cap(4), ordinal: 1 }]
    );
}

#[test]
fn larger_blocks_build_on_requested_ones() {
    let blocks = generate_for(&[20, 9, 4, 7]);

    assert_snapshot!(listing(&blocks), @r"
    1 = [T]
    2 = [T, T]
    3 = [T, 2]
    4 = [T, 3]
    7 = [T, 4, 2]
    9 = [T, 7, T]
    20 = [T, 9, 9, T]
    ");
}

#[test]
fn every_block_satisfies_the_layout_invariants() {
    let request_sets: [Vec<i64>; 4] = [
        (1..=64).collect(),
        vec![100, 33, 17, 5],
        vec![250],
        vec![1000, 999, 64, 63, 8],
    ];

    for requested in &request_sets {
        let blocks = generate_for(requested);
        let mut earlier = HashSet::new();

        for block in blocks.iter() {
            let size = block.size.get();

            assert_eq!(block.extent(), size, "fields of block {size}");
            assert_eq!(block.fields[0], Field::Element);

            for field in &block.fields {
                if let Field::Nested { size: nested, .. } = field {
                    assert!(nested.get() < size, "block {size} nests {nested}");
                    assert!(earlier.contains(nested), "block {size} nests unknown {nested}");
                }
            }

            let layout = blocks.expand(block.size).unwrap();
            let paths = layout.element_paths();

            assert_eq!(layout.extent(), size);
            assert_eq!(paths.len(), size);
            assert_eq!(paths.iter().collect::<HashSet<_>>().len(), size);

            earlier.insert(block.size);
        }

        for &n in requested {
            assert!(blocks.contains(cap(n)));
        }
    }
}

#[test]
fn repeated_requests_generate_one_block() {
    let blocks = generate_for(&[12, 12, 3, 12]);

    assert_eq!(sizes(&blocks), [1, 2, 3, 12]);
}

#[test]
fn output_is_deterministic() {
    let first = build_artifacts(&[31, 8, 200, 8], &Settings::default()).unwrap();
    let second = build_artifacts(&[200, 31, 8], &Settings::default()).unwrap();

    assert_eq!(first, second);
}
