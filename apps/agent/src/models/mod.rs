pub mod room;
pub mod transcript;
