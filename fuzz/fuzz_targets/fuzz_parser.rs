#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsontree::{Parser, ParserOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag byte + 4-byte depth seed

// serde_json refuses to nest this deep or deeper.
const SERDE_DEPTH: usize = 128;

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r", // JSON core
    "\u{00A0}".as_bytes(),
    "\u{2003}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let limit = max_size - HEADER;
        let mut written = HEADER;
        written += append_whitespace(&mut data[written..], limit);
        written += append_value(&mut data[written..], size, max_size - written);
        written += append_whitespace(&mut data[written..], max_size - written);
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends up to eight whitespace code points, never more than `limit`
/// bytes. Most of the table is not JSON whitespace.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(0..=limit.min(8));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(22)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(serde_json::Number::from(u.arbitrary::<i64>()?)),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Structural equality, with reals compared to within one rounding step.
fn same(ours: &jsontree::Value, theirs: &Value) -> bool {
    use jsontree::Value as J;

    match (ours, theirs) {
        (J::Null, Value::Null) => true,
        (J::True, Value::Bool(true)) | (J::False, Value::Bool(false)) => true,
        (J::Integer(i), Value::Number(n)) => {
            n.as_i64() == Some(*i) || n.as_f64() == Some(*i as f64)
        }
        (J::Real(x), Value::Number(n)) => n
            .as_f64()
            .is_some_and(|y| x == &y || (x - y).abs() <= f64::EPSILON * x.abs().max(y.abs())),
        (J::String(a), Value::String(b)) => a == b,
        (J::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
        }
        (J::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && same(va, vb))
        }
        _ => false,
    }
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let depth_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as usize;
    let data = &data[HEADER..];

    let options = ParserOptions {
        max_nesting_depth: Some(1 + depth_seed % 256),
        allow_control_characters: flags & 1 != 0,
    };

    let text = String::from_utf8_lossy(data).into_owned();
    let from_text = Parser::with_options(text.chars(), options).parse();

    // Byte and text input must agree, error positions included.
    if flags & 2 != 0 {
        let from_bytes = Parser::with_options(jsontree::Utf8Bytes::new(data), options).parse();
        assert_eq!(from_text, from_bytes);
    }

    let Ok(ours) = from_text else {
        return;
    };
    if options.allow_control_characters || options.max_nesting_depth >= Some(SERDE_DEPTH) {
        return;
    }
    let theirs: Value = serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("accepted {text:?}, serde_json rejected it: {err}"));
    assert!(same(&ours, &theirs), "{ours:?} != {theirs:?}");
}

fuzz_target!(|data: &[u8]| parser(data));
