pub mod page;
pub mod pipeline;
pub mod settings;
