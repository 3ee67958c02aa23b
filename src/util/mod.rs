// Utility modules

pub mod file_ops;
