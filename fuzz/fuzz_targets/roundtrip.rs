#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use exactjson::{
    AsciiOnly, EscapeFn, EscapePolicy, Minimal, Parser, ParserOptions, UnicodeEscapes, Value,
};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Map;

const HEADER: usize = 1; // policy and depth flags

/// Shallow enough that `serde_json`'s own recursion limit never trips first.
const SHALLOW_DEPTH: usize = 32;

const NO_SHORTHAND: EscapeFn = EscapeFn {
    use_character: |_| true,
    use_shorthand_escape_sequence: |_| false,
};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let mut len = HEADER;
        len += append_whitespace(&mut data[len..], max_size - len);
        len += append_document(&mut data[len..], size, max_size - len);
        len += append_whitespace(&mut data[len..], max_size - len);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append up to eight JSON whitespace bytes, never more than `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let n = rng.random_range(0..=limit.min(8));
        for slot in &mut buf[..n] {
            *slot = WS_TABLE[rng.random_range(0..WS_TABLE.len())][0];
        }
        n
    })
}

/// Append a random object or array, serialized by `serde_json`, truncated to
/// `limit`.
fn append_document(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2 + 1).min(4096));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        let mut u = arbitrary::Unstructured::new(&bytes);
        match ArbitraryDocument::arbitrary(&mut u) {
            Ok(value) => break value,
            Err(_) => continue,
        };
    };

    let serialized = serde_json::to_vec(&value.0).expect("serde_json values serialize");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use serde_json::Value as J;

        let value = match u.choose_index(21)? {
            0 => J::Null,
            1 => J::Bool(u.arbitrary()?),
            2 => J::Number(i64::arbitrary(u)?.into()),
            3 => {
                let n: f64 = u.arbitrary()?;
                J::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            4..=10 => J::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                J::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                J::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

/// Top-level documents must be an object or an array.
#[derive(Debug)]
struct ArbitraryDocument(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryDocument {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        match ArbitraryValue::arbitrary(u)?.0 {
            v @ (serde_json::Value::Object(_) | serde_json::Value::Array(_)) => {
                Ok(ArbitraryDocument(v))
            }
            _ => Err(arbitrary::Error::IncorrectFormat),
        }
    }
}

fn policy(flags: u8) -> &'static dyn EscapePolicy {
    match flags & 3 {
        0 => &Minimal,
        1 => &AsciiOnly,
        2 => &UnicodeEscapes,
        _ => &NO_SHORTHAND,
    }
}

fn parse(src: &[u8], options: ParserOptions) -> Option<Value> {
    let mut parser = Parser::new(src, options);
    let value = parser.parse_embedded_value().ok()?;
    parser.finish().ok()?;
    matches!(value, Value::Object(_) | Value::Array(_)).then_some(value)
}

fn roundtrip(data: &[u8]) {
    let Some((&flags, src)) = data.split_first() else {
        return;
    };
    let shallow = flags & 4 != 0;
    let options = ParserOptions {
        max_nesting_depth: if shallow {
            SHALLOW_DEPTH
        } else {
            ParserOptions::default().max_nesting_depth
        },
    };

    let Some(value) = parse(src, options) else {
        return;
    };

    // Encoding under any policy and parsing again gives back the same tree.
    let encoded = value.to_json_with(policy(flags));
    let reparsed = parse(encoded.as_bytes(), options).expect("re-encoded text parses");
    assert_eq!(reparsed, value, "{encoded}");

    // Where `serde_json` understands the input, it reads our output the same
    // way. It may reject numbers beyond `f64` that we keep as text.
    if shallow {
        if let Ok(expected) = serde_json::from_slice::<serde_json::Value>(src) {
            let actual: serde_json::Value =
                serde_json::from_str(&encoded).expect("serde_json accepts re-encoded text");
            assert_eq!(actual, expected, "{encoded}");
        }
    }
}

fuzz_target!(|data: &[u8]| roundtrip(data));
