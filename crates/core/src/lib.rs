//! Core data types for the pump scanner.

pub mod candle;

pub use candle::*;
