#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Strict and lenient decode, and header probing, must never panic
    let _ = plainppm::decode(data, enough::Unstoppable);
    let _ = plainppm::DecodeRequest::new(data)
        .lenient(true)
        .decode(enough::Unstoppable);
    let _ = plainppm::ImageInfo::from_bytes(data);
});
