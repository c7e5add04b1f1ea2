pub mod frame;
pub mod touch;
