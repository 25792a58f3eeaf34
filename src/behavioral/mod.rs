//! Behavioral patterns.

pub mod observer;
