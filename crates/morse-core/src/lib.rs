pub mod charset;
pub mod settings;
pub mod table;
pub mod tokenizer;
pub mod utf8;
