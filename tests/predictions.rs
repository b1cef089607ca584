use t9_predictions::keypad;
use t9_predictions::{PredictError, WordIndex, DEFAULT_LIMIT};

const NAMES: [&str; 12] = [
    "james", "john", "robert", "michael", "william", "david", "mary", "patricia", "linda",
    "barbara", "elizabeth", "jennifer",
];

fn names_index() -> WordIndex {
    let mut index = WordIndex::new();
    index.insert_all(NAMES);
    index
}

#[test]
fn every_name_is_found_by_its_own_digits() {
    let index = names_index();

    for name in NAMES {
        let digits = keypad::spell(name).unwrap();
        let result = index.search(&digits, DEFAULT_LIMIT).unwrap();
        assert!(result.words.iter().any(|w| w == name), "{name} not found by {digits}");
    }
}

#[test]
fn returned_words_spell_the_query_as_prefix() {
    let index = names_index();

    for query in ["5", "52", "6", "62", "7", "2", "3", "54"] {
        for word in index.search(query, DEFAULT_LIMIT).unwrap().words {
            let prefix: String = word.chars().take(query.len()).collect();
            assert_eq!(keypad::spell(&prefix).unwrap(), query, "{word} for {query}");
        }
    }
}

#[test]
fn ann_and_bob_come_back_in_insertion_order() {
    let mut index = WordIndex::new();
    index.insert_all(["ann", "anna", "bob", "bobby"]);

    let result = index.search("2", DEFAULT_LIMIT).unwrap();

    assert_eq!(result.words, vec!["ann", "anna", "bob", "bobby"]);
}

#[test]
fn jennifer_and_james_share_the_j_key() {
    let index = names_index();

    // j, then e|a on 3 and 2: only "je..." matches 53
    assert_eq!(index.search("53", DEFAULT_LIMIT).unwrap().words, vec!["jennifer"]);
    assert_eq!(index.search("52", DEFAULT_LIMIT).unwrap().words, vec!["james"]);
    assert_eq!(
        index.search("5", DEFAULT_LIMIT).unwrap().words,
        vec!["james", "john", "jennifer", "linda"]
    );
}

#[test]
fn duplicate_insertion_does_not_change_results() {
    let once = names_index();
    let mut twice = names_index();
    twice.insert_all(NAMES);

    for query in ["5", "6", "2", "7"] {
        assert_eq!(
            once.search(query, DEFAULT_LIMIT).unwrap(),
            twice.search(query, DEFAULT_LIMIT).unwrap()
        );
    }
}

#[test]
fn search_never_exceeds_limit() {
    let mut index = WordIndex::new();
    let words: Vec<String> = (0..15).map(|i| format!("b{}", "a".repeat(i + 1))).collect();
    index.insert_all(&words);

    for limit in 0..20 {
        let result = index.search("2", limit).unwrap();
        assert_eq!(result.words.len(), limit.min(15));
        assert_eq!(result.words, words[..limit.min(15)]);
    }
}

#[test]
fn empty_query_returns_nothing() {
    let index = names_index();

    assert!(index.search("", DEFAULT_LIMIT).unwrap().words.is_empty());
}

#[test]
fn non_digits_are_rejected() {
    let index = names_index();

    assert_eq!(index.search("5 2", DEFAULT_LIMIT), Err(PredictError::InvalidDigit(' ')));
    assert_eq!(index.search("*", DEFAULT_LIMIT), Err(PredictError::InvalidDigit('*')));
}
