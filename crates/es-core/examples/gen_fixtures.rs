//! Generates sample files with known entropy in `test-fixtures/`.
//! Run with: `cargo run -p es-core --example gen_fixtures`
//! Then point the CLI at them: `entroscan test-fixtures/uniform_cycle.bin`

use std::fs;
use std::path::Path;

fn main() {
    let dir = Path::new("test-fixtures");
    fs::create_dir_all(dir).expect("failed to create test-fixtures/");

    // Entropy 0.0: one byte value, any length.
    fs::write(dir.join("all_zeros.bin"), vec![0u8; 64 * 1024])
        .expect("failed to write all_zeros.bin");
    println!("  all_zeros.bin      (entropy 0.0)");

    // Entropy exactly 1.0: two values, equal counts.
    let mut two = vec![0u8; 2048];
    two.extend(vec![1u8; 2048]);
    fs::write(dir.join("two_values.bin"), two).expect("failed to write two_values.bin");
    println!("  two_values.bin     (entropy 1.0)");

    // Entropy exactly 8.0: all 256 values equally frequent.
    let uniform: Vec<u8> = (0..=255u8).cycle().take(256 * 256).collect();
    fs::write(dir.join("uniform_cycle.bin"), uniform)
        .expect("failed to write uniform_cycle.bin");
    println!("  uniform_cycle.bin  (entropy 8.0)");

    // High but not maximal: LCG pseudo-random bytes.
    let mut state: u32 = 0xDEAD_BEEF;
    let random: Vec<u8> = (0..256 * 1024)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 16) as u8
        })
        .collect();
    fs::write(dir.join("random.bin"), random).expect("failed to write random.bin");
    println!("  random.bin         (entropy ~8.0)");

    // Low entropy: repetitive ASCII text.
    let text = "measurement log: pass 1 ok, pass 2 ok, pass 3 ok\n".repeat(512);
    fs::write(dir.join("ascii.txt"), text).expect("failed to write ascii.txt");
    println!("  ascii.txt          (entropy ~4)");

    // Empty file: the explicitly-defined degenerate case.
    fs::write(dir.join("empty.bin"), b"").expect("failed to write empty.bin");
    println!("  empty.bin          (entropy defined as 0.0)");

    println!("All fixtures generated in {}", dir.display());
}
