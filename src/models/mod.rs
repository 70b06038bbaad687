pub mod presentation;
pub mod slides;
