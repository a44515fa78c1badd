// Lets a fuzz target be built as a normal binary (i.e., without
// `--cfg fuzzing`) that replays the test cases given as arguments. This is
// handy for reproducing a crash under a debugger.

use std::{env, error::Error, ffi::c_int, fs, ptr};

extern "C" {
    // Provided by libfuzzer-sys. Sets up the panic hook.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // Provided by libfuzzer-sys. Runs the fuzz target on one input.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    unsafe {
        let _ = LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let mut count = 0usize;
    for path in env::args_os().skip(1) {
        let data = fs::read(path)?;
        unsafe {
            let _ = rust_fuzzer_test_input(&data);
        }
        count += 1;
    }
    if count == 0 {
        println!("no test cases given, nothing to replay");
    } else {
        println!("replayed {count} test cases without a crash");
    }
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
