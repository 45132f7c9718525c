pub mod dates;
pub mod entities;
