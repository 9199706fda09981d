/// Line output for encoded positions.
/// Native builds write to stdout, wasm builds to the browser console.
#[cfg(not(target_arch = "wasm32"))]
macro_rules! position_println {
    ($($arg:tt)*) => { println!($($arg)*) }
}

#[cfg(target_arch = "wasm32")]
macro_rules! position_println {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    }
}

/// Print the encoding produced by a completed move.
pub(crate) fn emit_fen(fen: &str) {
    position_println!("{}", fen);
}
