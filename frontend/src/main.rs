fn main() {
    #[cfg(target_arch = "wasm32")]
    yoga_frontend::run();
}
