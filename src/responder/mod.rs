pub mod generator;
pub mod worker;

pub use generator::ResponseGenerator;
pub use worker::AutoResponder;
