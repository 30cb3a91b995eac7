#![no_main]

use bitpack::alphabet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let token = codec::encode(&text);
    assert!(token.chars().all(|ch| alphabet::index_of(ch).is_some()));

    let recovered = codec::decode(&token).expect("fresh tokens always decode");
    if text.is_empty() {
        assert_eq!(recovered, None);
    } else {
        assert_eq!(recovered.as_deref(), Some(text.as_ref()));
    }
});
