pub(crate) mod header;
pub(crate) mod layout;

#[cfg(all(test, target_arch = "wasm32"))]
mod header_test;
