pub mod extract;
pub mod play;
