use shared::PageWindow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub window: PageWindow,
    pub on_page_change: Callback<u32>,
}

fn page_button(label: &str, target: Option<u32>, on_page_change: &Callback<u32>) -> Html {
    let onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = target {
                on_page_change.emit(page);
            }
        })
    };

    html! {
        <button class="page-btn" disabled={target.is_none()} {onclick}>{label}</button>
    }
}

/// Numbered page links in groups of ten, with group and single-step arrows
#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let window = props.window;
    if window.is_empty() {
        return html! {};
    }

    html! {
        <nav class="pagination" aria-label="Pages">
            {page_button("«", window.previous_group(), &props.on_page_change)}
            {page_button("‹", window.previous_page(), &props.on_page_change)}

            {for window.pages().map(|page| {
                let is_current = page == window.current;
                let onclick = {
                    let on_page_change = props.on_page_change.clone();
                    Callback::from(move |_: MouseEvent| on_page_change.emit(page))
                };

                html! {
                    <button
                        key={page}
                        class={classes!("page-btn", is_current.then_some("active"))}
                        aria-current={is_current.then_some("page")}
                        {onclick}
                    >
                        {page}
                    </button>
                }
            })}

            {page_button("›", window.next_page(), &props.on_page_change)}
            {page_button("»", window.next_group(), &props.on_page_change)}
        </nav>
    }
}
