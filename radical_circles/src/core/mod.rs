//! Core module has the math types and the numeric traits they are generic over.
pub mod math;
pub mod traits;
