// Panic hook, console logging and console timers.
// Console calls only exist on wasm32, elsewhere they compile away so the
// scene logic can be tested natively.

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(_message: &str) {}

macro_rules! log {
    ( $( $t:tt )* ) => {
        crate::utils::console_log(&format!( $( $t )* ))
    }
}

// Times the enclosing scope with console.time / console.timeEnd
pub struct Timer<'a> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_end_with_label(self.name);
    }
}
