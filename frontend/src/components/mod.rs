pub mod book_form;
pub mod book_table;
pub mod link;
pub mod notification;
pub mod pagination;
