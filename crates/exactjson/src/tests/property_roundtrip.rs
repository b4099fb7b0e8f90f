use quickcheck::QuickCheck;

use super::arbitrary::Policy;
use crate::{Array, Number, Object, Value, parse_array, parse_object};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: any value, encoded under any policy and parsed back, is equal to
/// the original (same kinds, same member order, same number text).
#[test]
fn encode_parse_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, policy: Policy) -> bool {
        let policy = policy.as_dyn();
        match value {
            Value::Object(object) => parse_object(&object.to_json_with(policy)) == Ok(object),
            Value::Array(array) => parse_array(&array.to_json_with(policy)) == Ok(array),
            scalar => {
                let array = Array::from(vec![scalar]);
                parse_array(&array.to_json_with(policy)) == Ok(array)
            }
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value, Policy) -> bool);
}

/// Property: setting every existing member again leaves the member order
/// untouched.
#[test]
fn reset_preserves_order_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(pairs: Vec<(String, Value)>, replacement: Value) -> bool {
        let mut object: Object = pairs.into_iter().collect();
        let before: Vec<String> = object.keys().map(str::to_owned).collect();
        for key in &before {
            object.set(key.as_str(), replacement.clone());
        }
        object.keys().eq(before.iter().map(String::as_str))
            && object.iter().all(|(_, v)| *v == replacement)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<(String, Value)>, Value) -> bool);
}

/// Property: generated number lexemes are accepted verbatim by `FromStr`.
#[test]
fn number_text_is_preserved_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(number: Number) -> bool {
        number.as_str().parse::<Number>().as_ref() == Ok(&number)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Number) -> bool);
}

/// Property: every integer survives a trip through its decimal text.
#[test]
fn integer_roundtrip_quickcheck() {
    fn prop(a: i64, b: u128) -> bool {
        let mut object = Object::new();
        object.set_int("a", a);
        let mut array = Array::new();
        array.add_int(b);
        object.set_array("b", array);
        let parsed = parse_object(&object.to_json()).ok();
        parsed.as_ref().and_then(|o| o.get_int::<i64>("a").ok()) == Some(a)
            && parsed
                .as_ref()
                .and_then(|o| o.get_array("b").ok())
                .and_then(|arr| arr.get_int::<u128>(0).ok())
                == Some(b)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(i64, u128) -> bool);
}
