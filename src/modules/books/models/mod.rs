mod book;

pub use book::{Book, BookRequest};
