#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some((&radix, text)) = data.split_first() {
        _ = mpint::from_slice(text, radix as u32);
    }
});
