mod author;

pub use author::{Author, AuthorRequest};
