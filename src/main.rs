// This binary crate is intentionally minimal.
// All mean-function logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example multitask
fn main() {
    println!("gp-means: composable mean functions for multitask Gaussian Processes.");
    println!("Run `cargo run --example multitask` to see the two-task demo.");
}
