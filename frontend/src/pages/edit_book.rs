use shared::{BookApi, BookId, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::book_form::BookForm;
use crate::components::link::Link;
use crate::hooks::use_book_form::SubmitRequest;
use crate::hooks::use_notifications::Notifier;
use crate::pages::book_detail::{use_book, BookLoad};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EditBookPageProps {
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub id: BookId,
    pub navigate: Callback<Route>,
}

#[function_component(EditBookPage)]
pub fn edit_book_page(props: &EditBookPageProps) -> Html {
    let load = use_book(&props.api_client, props.id);

    // Load failures are a transient notice; the page keeps its placeholder
    {
        let notifier = props.notifier.clone();
        let failure = match &load {
            BookLoad::Failed(e) => Some(e.to_string()),
            _ => None,
        };
        use_effect_with(failure, move |failure| {
            if let Some(message) = failure {
                notifier.error(None, format!("Failed to load book: {}", message));
            }
            || ()
        });
    }

    let on_submit = {
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let navigate = props.navigate.clone();
        let id = props.id;

        Callback::from(move |request: SubmitRequest| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let navigate = navigate.clone();
            let toast = notifier.loading("Saving...");

            spawn_local(async move {
                let result = api_client.update_book(id, &request.input).await;
                request.done.emit(());
                match result {
                    Ok(_) => {
                        Logger::info_with_component("edit-book", &format!("updated book {}", id));
                        notifier.success(Some(toast), "Changes saved.");
                        navigate.emit(Route::Detail(id));
                    }
                    Err(e) => notifier.error(Some(toast), format!("Could not save changes: {}", e)),
                }
            });
        })
    };

    let body = match load {
        BookLoad::Loaded(book) => html! {
            <BookForm book={Some(book)} submit_label="Save changes" {on_submit} />
        },
        BookLoad::Loading | BookLoad::Failed(_) => {
            html! { <div class="loading">{"Loading book..."}</div> }
        }
    };

    html! {
        <section class="edit-book-page">
            <Link to={Route::Detail(props.id)} navigate={props.navigate.clone()} class={classes!("back-link")}>
                {"← Back to book"}
            </Link>
            <h2>{"Edit book"}</h2>
            {body}
        </section>
    }
}
