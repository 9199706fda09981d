pub mod board;
#[cfg(feature = "cli")]
pub mod logger;
pub(crate) mod output;
pub mod session;
pub mod snapshot;
pub mod square;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
