pub mod basics;
pub mod printer;
pub mod search;
