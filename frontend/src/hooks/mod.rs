pub mod use_book_form;
pub mod use_book_list;
pub mod use_notifications;
