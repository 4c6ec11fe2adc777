use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(digit_bits_28)");
    println!("cargo:rustc-check-cfg=cfg(digit_bits_60)");

    // Decide the digit width. A 60-bit digit needs a native 128-bit product
    // to stay cheap; refer to src/digit.rs for where this has an effect.
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let digit_bits_60 = matches!(
        target_arch.as_str(),
        "aarch64" | "mips64" | "powerpc64" | "x86_64"
    );
    if digit_bits_60 {
        println!("cargo:rustc-cfg=digit_bits_60");
    } else {
        println!("cargo:rustc-cfg=digit_bits_28");
    }
}
