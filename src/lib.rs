pub mod behavior;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod stats;
pub mod typing;
pub mod validate;
pub mod wasm;
