pub mod card;
pub mod date;
pub mod hints;
pub mod input;
pub mod money;
