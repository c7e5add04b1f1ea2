pub mod feedback;
pub mod pool;
