pub mod book_detail;
pub mod book_list;
pub mod edit_book;
pub mod new_book;
