#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary tokens must decode to a value or an error, never a panic.
    let token = String::from_utf8_lossy(data);
    let _ = codec::decode(&token);
});
