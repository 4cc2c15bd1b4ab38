pub mod config_ops;
pub mod encode_ops;
