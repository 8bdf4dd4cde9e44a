use shared::{Book, BookId, Route};
use yew::prelude::*;

use crate::components::link::Link;
use crate::services::date_utils::format_iso;

#[derive(Properties, PartialEq)]
pub struct BookTableProps {
    pub books: Vec<Book>,
    /// True only after a successful load that returned no rows
    pub empty: bool,
    pub navigate: Callback<Route>,
    pub on_delete: Callback<BookId>,
}

#[function_component(BookTable)]
pub fn book_table(props: &BookTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="books-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Title"}</th>
                        <th>{"Author"}</th>
                        <th>{"Publisher"}</th>
                        <th>{"Published"}</th>
                        <th class="count">{"Sold"}</th>
                        <th class="count">{"In stock"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {if props.empty {
                        html! {
                            <tr class="empty-row">
                                <td colspan="8">{"No books found"}</td>
                            </tr>
                        }
                    } else { html! {} }}

                    {for props.books.iter().map(|book| {
                        let id = book.id;
                        let on_edit = {
                            let navigate = props.navigate.clone();
                            Callback::from(move |_: MouseEvent| navigate.emit(Route::Edit(id)))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };

                        html! {
                            <tr key={id}>
                                <td class="id">{id}</td>
                                <td class="title">
                                    <Link to={Route::Detail(id)} navigate={props.navigate.clone()}>
                                        {&book.title}
                                    </Link>
                                </td>
                                <td>{&book.author}</td>
                                <td>{&book.detail.publisher}</td>
                                <td class="date">{book.detail.published_date.as_ref().map(format_iso).unwrap_or_default()}</td>
                                <td class="count">{book.detail.sell_count}</td>
                                <td class="count">{book.detail.stock_count}</td>
                                <td class="actions">
                                    <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
