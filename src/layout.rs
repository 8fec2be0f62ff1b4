pub mod instructions;
pub mod net;
