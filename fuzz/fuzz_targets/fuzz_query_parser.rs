//! Fuzz target: `Query` and `parse_int_lenient`
//!
//! Feeds arbitrary text through the query-string reader and asserts that
//! lookups never panic and decoded values stay within their capacity.
//!
//! cargo fuzz run fuzz_query_parser

#![no_main]

use braillebot::app::query::{MAX_VALUE_LEN, Query, parse_int_lenient};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let _ = parse_int_lenient(text);

    let (_path, query) = Query::split_uri(text);
    for key in ["m", "d", "a", "b", "c"] {
        let _ = query.has(key);
        let _ = query.int(key);
        if let Some(value) = query.get(key) {
            assert!(value.len() <= MAX_VALUE_LEN, "decoded value exceeds capacity");
        }
    }
});
