pub mod check;
pub mod compare;
pub mod input;
pub mod show;
pub mod span;
pub mod text;

#[cfg(test)]
mod show_tests;
