#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    entries: Vec<(String, i32)>,
    query: String,
}

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fuzz_target!(|input: Input| {
    let index = fxm::SubstringIndex::new();
    for (key, value) in &input.entries {
        assert!(index.register(key, *value));
    }

    let values = index.retrieve(&input.query);
    let query = fold(&input.query);

    if query.is_empty() {
        // One value per suffix of every key
        let suffixes: usize = input
            .entries
            .iter()
            .map(|(key, _)| fold(key).chars().count())
            .sum();
        assert_eq!(values.len(), suffixes);
    } else {
        // Every key containing the query contributes at least once
        let containing = input
            .entries
            .iter()
            .filter(|(key, _)| fold(key).contains(&query))
            .count();
        assert!(values.len() >= containing);
    }
});
