pub mod hero;
pub mod input;
pub mod prompt_bar;
pub mod transcript;
