//! Utility modules for wordbench.

pub mod simd;
