//! Trunk binary target. Native builds have nothing to run.

fn main() {
    #[cfg(feature = "csr")]
    lcbad::mount();
}
