pub mod code_block;
pub mod viz;
