#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use isotime::fmt::iso8601;

mod shim;

fn do_fuzz(data: &[u8]) {
    const PARSER: iso8601::Parser = iso8601::Parser::new();
    const EXTENDED: iso8601::Printer = iso8601::Printer::new();
    const BASIC: iso8601::Printer = iso8601::Printer::new().extended(false);

    let Ok(first) = PARSER.parse_time_bytes(data) else { return };
    for printer in [EXTENDED, BASIC] {
        let unparsed = printer.time_to_string(&first);
        match PARSER.parse_time(&unparsed) {
            Ok(second) => {
                assert_eq!(
                    first, second,
                    "expected the initially parsed value \
                     to be equal to the value after printing and re-parsing",
                );
            }
            Err(e) if cfg!(not(feature = "relaxed")) => {
                panic!(
                    "should be able to parse a printed value; \
                     failed with `{e}` at: `{unparsed}`, \
                     corresponding to {first:?}",
                );
            }
            Err(_) => {}
        }
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
