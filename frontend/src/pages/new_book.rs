use shared::{BookApi, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::book_form::BookForm;
use crate::components::link::Link;
use crate::hooks::use_book_form::SubmitRequest;
use crate::hooks::use_notifications::Notifier;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct NewBookPageProps {
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub navigate: Callback<Route>,
}

#[function_component(NewBookPage)]
pub fn new_book_page(props: &NewBookPageProps) -> Html {
    let on_submit = {
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let navigate = props.navigate.clone();

        Callback::from(move |request: SubmitRequest| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let navigate = navigate.clone();
            let toast = notifier.loading("Saving...");

            spawn_local(async move {
                let result = api_client.create_book(&request.input).await;
                request.done.emit(());
                match result {
                    Ok(book) => {
                        Logger::info_with_component("new-book", &format!("created book {}", book.id));
                        notifier.success(Some(toast), format!("Added \"{}\".", book.title));
                        navigate.emit(Route::List);
                    }
                    Err(e) => notifier.error(Some(toast), format!("Could not add book: {}", e)),
                }
            });
        })
    };

    html! {
        <section class="new-book-page">
            <Link to={Route::List} navigate={props.navigate.clone()} class={classes!("back-link")}>
                {"← Back to list"}
            </Link>
            <h2>{"Add a book"}</h2>
            <BookForm submit_label="Create" {on_submit} />
        </section>
    }
}
