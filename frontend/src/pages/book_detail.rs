use shared::{Book, BookApi, BookId, FetchError, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::book_form::BookForm;
use crate::components::link::Link;
use crate::services::api::ApiClient;
use crate::services::date_utils::format_date_for_display;

/// Where a single-book load currently stands
#[derive(Clone, PartialEq)]
pub enum BookLoad {
    Loading,
    Loaded(Book),
    Failed(FetchError),
}

/// Fetch one book whenever `id` changes
#[hook]
pub fn use_book(api_client: &ApiClient, id: BookId) -> BookLoad {
    let load = use_state(|| BookLoad::Loading);

    {
        let load = load.clone();
        let api_client = api_client.clone();

        use_effect_with(id, move |id| {
            let id = *id;
            load.set(BookLoad::Loading);
            spawn_local(async move {
                match api_client.get_book(id).await {
                    Ok(book) => load.set(BookLoad::Loaded(book)),
                    Err(e) => load.set(BookLoad::Failed(e)),
                }
            });
            || ()
        });
    }

    (*load).clone()
}

#[derive(Properties, PartialEq)]
pub struct BookDetailPageProps {
    pub api_client: ApiClient,
    pub id: BookId,
    pub navigate: Callback<Route>,
}

#[function_component(BookDetailPage)]
pub fn book_detail_page(props: &BookDetailPageProps) -> Html {
    let load = use_book(&props.api_client, props.id);

    let back = html! {
        <Link to={Route::List} navigate={props.navigate.clone()} class={classes!("back-link")}>
            {"← Back to list"}
        </Link>
    };

    let body = match load {
        BookLoad::Loading => html! { <div class="loading">{"Loading book..."}</div> },
        BookLoad::Failed(e) => {
            let detail = if e.is_not_found() { None } else { Some(e.to_string()) };
            html! {
                <div class="not-found">
                    <h2>{"Book not found"}</h2>
                    {for detail.map(|d| html! { <p class="error-detail">{d}</p> })}
                </div>
            }
        }
        BookLoad::Loaded(book) => {
            let id = book.id;
            let on_edit = {
                let navigate = props.navigate.clone();
                Callback::from(move |_: MouseEvent| navigate.emit(Route::Edit(id)))
            };

            html! {
                <>
                    <header class="page-header">
                        <h2>{&book.title}</h2>
                        <p class="subtitle">
                            {match &book.detail.published_date {
                                Some(date) => format!("{} · published {}", book.author, format_date_for_display(date)),
                                None => book.author.clone(),
                            }}
                        </p>
                        <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                    </header>
                    <BookForm book={Some(book.clone())} read_only={true} />
                </>
            }
        }
    };

    html! {
        <section class="book-detail-page">
            {back}
            {body}
        </section>
    }
}
