//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ladle_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ladle_core::parse_ingredient_line;

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("ladle_core ping={}", ladle_core::ping());
    println!("ladle_core version={}", ladle_core::core_version());

    let ingredient = parse_ingredient_line("1 1/2 cups chopped tomatoes");
    println!(
        "parse sample quantity={:?} unit={} name={}",
        ingredient.quantity, ingredient.unit, ingredient.name
    );
}
