#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use isotime::{fmt::iso8601, TimezoneOffset};

mod shim;

fn do_fuzz(data: &[u8]) {
    const PARSER: iso8601::Parser = iso8601::Parser::new();

    let Ok(data) = std::str::from_utf8(data) else { return };
    let Ok(first) = PARSER.parse_designator(data) else { return };
    let unparsed = first.to_string();
    match unparsed.parse::<TimezoneOffset>() {
        Ok(second) => {
            assert_eq!(
                first, second,
                "expected the initially parsed offset \
                 to be equal to the offset after printing and re-parsing",
            );
        }
        Err(e) if cfg!(not(feature = "relaxed")) => {
            panic!(
                "should be able to parse a printed offset; \
                 failed with `{e}` at: `{unparsed}`, \
                 corresponding to {first:?}",
            );
        }
        Err(_) => {}
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
