pub mod core;
pub mod subscription;
