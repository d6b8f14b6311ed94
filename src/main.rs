#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod anchors;
mod config;
mod countdown;
mod frame;
mod layout;
mod logging;
mod modal;
mod nav;
mod problems;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
