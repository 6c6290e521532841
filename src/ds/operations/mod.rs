pub mod comparison;
pub mod resolve;
pub mod view;
