// File: crates/scatter-core/build.rs
// Summary: Links Windows system libraries required by Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
