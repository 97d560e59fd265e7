//! Shared pin-catalog model and the selector/preview naming contract.
//!
//! Pure data and decision logic with no I/O: everything here compiles and
//! tests natively, while `pinsync-web` drives it against the DOM in wasm.

pub mod catalog;
pub mod embed;
pub mod pairing;

pub use catalog::{PinCatalog, PinStyle};
pub use embed::CATALOG_ELEMENT_ID;
pub use pairing::RefreshAction;
