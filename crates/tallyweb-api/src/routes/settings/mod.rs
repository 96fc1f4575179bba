//! Settings routes - Configuration display

pub mod page;

pub use page::page_settings;
