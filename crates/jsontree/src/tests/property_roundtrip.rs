use alloc::{string::String, vec::Vec};
use std::println;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::utils::{to_json, to_json_with};
use crate::{Map, Utf8Bytes, Value, parse, parse_slice};

fn iterations() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Property: rendering a value and parsing the text gives the value back.
#[test]
fn render_then_parse_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let text = to_json(&value);
        match parse(&text) {
            Ok(parsed) => parsed == value,
            Err(err) => {
                println!("{text:?} failed: {err}");
                false
            }
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: whitespace between tokens and `\u` escapes in strings do not
/// change the result.
#[test]
fn whitespace_and_escapes_are_transparent_quickcheck() {
    const WHITESPACE: [&str; 5] = ["", " ", "\t", "\r\n", "  \n "];

    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, picks: Vec<u8>, escape_all: bool) -> bool {
        let mut picks = picks.into_iter().cycle();
        let mut ws = || WHITESPACE[usize::from(picks.next().unwrap_or(0)) % WHITESPACE.len()];
        let text = to_json_with(&value, &mut ws, escape_all);
        parse(&text) == Ok(value)
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Value, Vec<u8>, bool) -> bool);
}

/// Property: the parser returns, never panics, on arbitrary text.
#[test]
fn arbitrary_text_never_panics_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        match parse(&text) {
            Ok(_) => true,
            // Positions never run past the input plus the end-of-input read.
            Err(err) => err.position >= 1 && err.position <= text.chars().count() + 1,
        }
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: byte input decodes exactly like `String::from_utf8_lossy`.
#[test]
fn utf8_bytes_match_lossy_decoding_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let decoded: String = Utf8Bytes::new(&bytes).collect();
        decoded == String::from_utf8_lossy(&bytes)
            && parse_slice(&bytes) == parse(&String::from_utf8_lossy(&bytes))
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Later duplicates replace values but never move keys.
#[quickcheck]
fn map_insert_keeps_first_position(entries: Vec<(u8, i64)>) -> bool {
    let mut map = Map::new();
    let mut order: Vec<String> = Vec::new();
    for (key, value) in &entries {
        let key = alloc::format!("k{key}");
        if !order.contains(&key) {
            order.push(key.clone());
        }
        map.insert(key, Value::Integer(*value));
    }

    let last = |key: &str| {
        entries
            .iter()
            .rev()
            .find(|(k, _)| alloc::format!("k{k}") == key)
            .map(|(_, v)| Value::Integer(*v))
    };
    map.keys().eq(order.iter().map(String::as_str))
        && order.iter().all(|key| map.get(key).cloned() == last(key))
}
