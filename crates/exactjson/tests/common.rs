#![allow(missing_docs, dead_code)]

/// A configuration-style document with nesting, exact numbers, escapes and
/// members deliberately out of alphabetical order.
pub const DOCUMENT: &str = r#"
{
    "version": 3,
    "name": "exact\u0020json",
    "ratio": 0.250,
    "limits": {
        "max": 18446744073709551615,
        "min": -9223372036854775808,
        "timeout": 1.5e3
    },
    "tags": ["b", "a", "\ud83d\ude80"],
    "owner": null,
    "enabled": true,
    "paths": ["C:\\tmp", "/usr/local"]
}
"#;

/// `DOCUMENT` as written back by `to_json()`.
pub const DOCUMENT_COMPACT: &str = r#"{"version":3,"name":"exact json","ratio":0.250,"limits":{"max":18446744073709551615,"min":-9223372036854775808,"timeout":1.5e3},"tags":["b","a","🚀"],"owner":null,"enabled":true,"paths":["C:\\tmp","/usr/local"]}"#;
