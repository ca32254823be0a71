use log::Level;

/// Most verbose level forwarded to the browser console
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Route the `log` records emitted by `shared` to the browser console.
/// Call once, before the app is rendered.
pub fn init() {
    wasm_logger::init(wasm_logger::Config::new(max_level()));
}
