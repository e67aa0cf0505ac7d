#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::parse_type;
use libgraphql_language::parse_value;
use libgraphql_language::ParseOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let _ = parse_value(s, ParseOptions::default());
    let _ = parse_type(s, ParseOptions::no_location());
});
