pub mod greeting;
pub mod language;
