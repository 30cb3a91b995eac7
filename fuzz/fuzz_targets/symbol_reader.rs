#![no_main]

use bitpack::SymbolReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let token = String::from_utf8_lossy(data);
    let Ok(mut reader) = SymbolReader::new(&token) else {
        return;
    };

    // Use input bytes to drive a bounded sequence of reads.
    let mut idx = 0usize;
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 3;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_bit();
            }
            1 => {
                let bits = usize::from(data[idx.saturating_sub(1)] % 32).saturating_add(1);
                let _ = reader.read_bits(bits);
            }
            _ => {
                let _ = reader.bits_remaining();
            }
        }
    }
});
