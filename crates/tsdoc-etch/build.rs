//! Build script for tsdoc-etch
//!
//! The page template is embedded with `include_str!`, so edits to it
//! must retrigger a build.

fn main() {
    println!("cargo:rerun-if-changed=src/templates/");
    println!("cargo:rerun-if-changed=build.rs");
}
