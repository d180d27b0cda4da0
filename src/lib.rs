pub mod age;
pub mod animator;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod content;
pub mod gradient;
pub mod logging;
pub mod navbar;
pub mod navigation;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod testing;
