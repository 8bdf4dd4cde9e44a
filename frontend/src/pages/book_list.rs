use shared::{Route, PAGE_SIZE_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::book_table::BookTable;
use crate::components::pagination::PaginationBar;
use crate::hooks::use_book_list::use_book_list;
use crate::hooks::use_notifications::Notifier;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BookListPageProps {
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub navigate: Callback<Route>,
}

#[function_component(BookListPage)]
pub fn book_list_page(props: &BookListPageProps) -> Html {
    let list = use_book_list(&props.api_client, &props.notifier);
    let state = &list.state;
    let actions = &list.actions;

    let on_search_input = {
        let on_search_input = actions.on_search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_input.emit(input.value());
        })
    };

    let on_search_submit = {
        let on_search_submit = actions.on_search_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search_submit.emit(());
        })
    };

    let on_page_size_change = {
        let on_page_size_change = actions.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_page_size_change.emit(size);
            }
        })
    };

    let on_add = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::New))
    };

    html! {
        <section class="book-list-page">
            <div class="toolbar">
                <form class="search-form" onsubmit={on_search_submit}>
                    <input
                        type="search"
                        name="search"
                        placeholder="Search by title or author"
                        value={state.search_input().to_string()}
                        oninput={on_search_input}
                    />
                    <button type="submit" class="btn btn-secondary">{"Search"}</button>
                </form>

                <label class="page-size">
                    {"Per page "}
                    <select onchange={on_page_size_change}>
                        {for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*size == state.page_size()}>
                                {size.to_string()}
                            </option>
                        })}
                    </select>
                </label>

                <button class="btn btn-primary" onclick={on_add}>{"Add book"}</button>
            </div>

            {if state.is_loading() {
                html! { <div class="loading">{"Loading books..."}</div> }
            } else { html! {} }}

            <BookTable
                books={state.items().to_vec()}
                empty={state.is_empty()}
                navigate={props.navigate.clone()}
                on_delete={actions.on_delete.clone()}
            />

            <div class="list-footer">
                <span class="total">{format!("{} book(s)", state.total())}</span>
                <PaginationBar window={state.window()} on_page_change={actions.on_page_change.clone()} />
            </div>
        </section>
    }
}
