pub mod content;
pub mod dates;
pub mod travel;
