pub mod commands;
pub mod domain;
