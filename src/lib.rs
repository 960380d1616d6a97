pub mod coffee_machine;
pub mod command;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ingredients;
pub mod menu;
pub mod recipe;
pub mod shared_machine;
