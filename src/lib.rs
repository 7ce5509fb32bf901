pub mod ast;
pub mod ast_printer;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod trace;
