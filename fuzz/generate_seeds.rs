#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x2, max 255
    let rgb = b"P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 128 128 128\n";
    fs::write(format!("{dir}/p3_2x2.ppm"), rgb).unwrap();

    // 3x1, max 15, CRLF line endings
    let crlf = b"P3\r\n3 1\r\n15\r\n0 1 2 3 4 5 6 7 8\r\n";
    fs::write(format!("{dir}/p3_crlf.ppm"), crlf).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/short_row.ppm"), b"P3\n2 1\n255\n1 2 3\n").unwrap();
    fs::write(format!("{dir}/bad_token.ppm"), b"P3\n1 1\n255\n1 x 3\n").unwrap();
    fs::write(format!("{dir}/wide_max.ppm"), b"P3\n1 1\n65535\n0 0 0\n").unwrap();
    fs::write(format!("{dir}/header_only.ppm"), b"P3\n1 1\n").unwrap();
    fs::write(format!("{dir}/empty.ppm"), b"").unwrap();

    println!("Seeds written to {dir}");
}
