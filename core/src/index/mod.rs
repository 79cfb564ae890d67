pub mod builder;
pub mod document;
pub mod scanner;
