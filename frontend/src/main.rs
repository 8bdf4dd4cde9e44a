use gloo::events::EventListener;
use shared::{routes, AppConfig, Route};
use wasm_bindgen::JsValue;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::link::Link;
use components::notification::NotificationBanner;
use hooks::use_notifications::use_notifications;
use pages::book_detail::BookDetailPage;
use pages::book_list::BookListPage;
use pages::edit_book::EditBookPage;
use pages::new_book::NewBookPage;
use services::api::ApiClient;
use services::logging::Logger;

const COMPONENT: &str = "app";

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn current_referrer() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.referrer())
}

fn write_history(route: Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        Logger::warn_with_component(COMPONENT, "history API unavailable");
        return;
    };
    let path = route.path();
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&path))
    };
    if result.is_err() {
        Logger::warn_with_component(COMPONENT, &format!("could not update history to {}", path));
    }
}

/// Route for the first render, after the direct-navigation guard
fn initial_route() -> Route {
    let path = current_path();
    let referrer = current_referrer();
    let route = routes::guard(&path, referrer.as_deref());
    if route != Route::parse(&path) {
        Logger::info_with_component(COMPONENT, &format!("redirecting direct visit to {}", path));
        write_history(route, true);
    }
    route
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let route = use_state(initial_route);
    let api_client = use_memo(props.config.clone(), |config| ApiClient::new(config));
    let notifications = use_notifications();

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            write_history(next, false);
            route.set(next);
        })
    };

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    route.set(Route::parse(&current_path()));
                })
            });
            move || drop(listener)
        });
    }

    let api_client = (*api_client).clone();
    let notifier = notifications.notifier.clone();

    let view = match *route {
        Route::List => html! {
            <BookListPage {api_client} {notifier} navigate={navigate.clone()} />
        },
        Route::New => html! {
            <NewBookPage {api_client} {notifier} navigate={navigate.clone()} />
        },
        Route::Detail(id) => html! {
            <BookDetailPage key={format!("detail-{id}")} {api_client} {id} navigate={navigate.clone()} />
        },
        Route::Edit(id) => html! {
            <EditBookPage key={format!("edit-{id}")} {api_client} {notifier} {id} navigate={navigate.clone()} />
        },
        Route::NotFound => html! {
            <section class="not-found">
                <h2>{"Page not found"}</h2>
                <Link to={Route::List} navigate={navigate.clone()}>{"Go to the book list"}</Link>
            </section>
        },
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1>
                        <Link to={Route::List} navigate={navigate.clone()}>{"Bookstore Admin"}</Link>
                    </h1>
                </div>
            </header>
            <NotificationBanner
                notifications={notifications.notifications.clone()}
                on_dismiss={notifications.on_dismiss.clone()}
            />
            <main class="container">
                {view}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfigErrorProps {
    message: AttrValue,
}

#[function_component(ConfigErrorScreen)]
fn config_error_screen(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="fatal-config">
            <h1>{"Configuration error"}</h1>
            <p>{props.message.clone()}</p>
            <p>{"Rebuild the app with BOOKSTORE_API_BASE set to the book service URL."}</p>
        </div>
    }
}

fn main() {
    match AppConfig::from_env_value(option_env!("BOOKSTORE_API_BASE")) {
        Ok(config) => {
            Logger::info_with_component(COMPONENT, &format!("using API at {}", config.api_base()));
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("invalid configuration: {}", e));
            yew::Renderer::<ConfigErrorScreen>::with_props(ConfigErrorProps {
                message: e.to_string().into(),
            })
            .render();
        }
    }
}
