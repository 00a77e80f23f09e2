mod primitive;

pub use primitive::*;
