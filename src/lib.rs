pub mod budget;
pub mod shell;
