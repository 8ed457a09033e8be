#![no_main]
use libfuzzer_sys::fuzz_target;
use plainppm::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to the same image
    let Ok(decoded) = DecodeRequest::new(data)
        .lenient(true)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = encode(&decoded, enough::Unstoppable).expect("encode cannot fail");
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        // Lenient input may hold samples above max_value, which strict decode rejects.
        let again = DecodeRequest::new(&reencoded)
            .lenient(true)
            .decode(enough::Unstoppable)
            .expect("re-encoded data failed to decode");
        assert_eq!(decoded, again, "roundtrip pixel mismatch");
        return;
    };

    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");

    // Flips are involutions on anything the decoder accepts
    let mut flipped = decoded2.clone();
    transform::flip_horizontal(&mut flipped);
    transform::flip_vertical(&mut flipped);
    transform::flip_vertical(&mut flipped);
    transform::flip_horizontal(&mut flipped);
    assert_eq!(flipped, decoded2);
});
