pub mod insight;
pub mod prompt;
pub mod repository;
pub mod service;
