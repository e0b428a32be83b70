// File: crates/chart-render-skia/build.rs
// Summary: Build script to link the Windows system libraries Skia's font manager needs.

fn main() {
    // Build scripts run on the host; ask Cargo about the target instead of using cfg!.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by Skia's DirectWrite font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
