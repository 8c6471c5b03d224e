pub mod book;
pub mod page;
pub mod paragraph;

pub use book::Book;
pub use page::Page;
pub use paragraph::Paragraph;
