pub mod extract;
pub mod identity;
