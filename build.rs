//! Build script for shush
//!
//! Links the Windows libraries used for COM and hotkey registration and
//! rebuilds when the embedded feedback cues change.

fn main() {
    println!("cargo:rerun-if-changed=assets/muted.wav");
    println!("cargo:rerun-if-changed=assets/unmuted.wav");

    // Only link on Windows
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    println!("cargo:rustc-link-lib=ole32");
    println!("cargo:rustc-link-lib=user32");
}
