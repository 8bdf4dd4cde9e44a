use shared::{Book, BookField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_book_form::{use_book_form, SubmitRequest};

#[derive(Properties, PartialEq)]
pub struct BookFormProps {
    /// Book to prefill from; `None` starts from the empty defaults
    #[prop_or_default]
    pub book: Option<Book>,
    #[prop_or_default]
    pub read_only: bool,
    #[prop_or(AttrValue::Static("Save"))]
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub on_submit: Callback<SubmitRequest>,
}

fn input_kind(field: BookField) -> &'static str {
    match field {
        BookField::PublishedDate => "date",
        BookField::SellCount | BookField::StockCount => "number",
        _ => "text",
    }
}

#[function_component(BookForm)]
pub fn book_form(props: &BookFormProps) -> Html {
    let form = use_book_form(props.book.clone(), props.on_submit.clone());
    let state = &form.state;
    let actions = &form.actions;
    let read_only = props.read_only;
    let disabled = read_only || state.is_submitting();

    let render_field = |field: BookField| -> Html {
        let error = state.error(field);
        let id = field.key().replace('.', "-");
        let value = state.value(field).to_string();

        let control = if field == BookField::Description {
            let oninput = {
                let on_field_change = actions.on_field_change.clone();
                Callback::from(move |e: InputEvent| {
                    let target: HtmlTextAreaElement = e.target_unchecked_into();
                    on_field_change.emit((field, target.value()));
                })
            };
            html! {
                <textarea id={id.clone()} name={field.key()} rows="4" {value} {oninput} {disabled} />
            }
        } else {
            let oninput = {
                let on_field_change = actions.on_field_change.clone();
                Callback::from(move |e: InputEvent| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    on_field_change.emit((field, target.value()));
                })
            };
            let min = matches!(field, BookField::SellCount | BookField::StockCount).then_some("0");
            html! {
                <input
                    type={input_kind(field)}
                    id={id.clone()}
                    name={field.key()}
                    {min}
                    {value}
                    {oninput}
                    {disabled}
                    aria-invalid={error.is_some().then_some("true")}
                />
            }
        };

        let steppers = if read_only {
            html! {}
        } else {
            match field {
                BookField::SellCount => {
                    let onclick = actions.on_increase_sell.reform(|_: MouseEvent| ());
                    html! {
                        <div class="steppers">
                            <button type="button" class="btn btn-secondary" {onclick} {disabled}>{"Sell one"}</button>
                        </div>
                    }
                }
                BookField::StockCount => {
                    let increase = actions.on_increase_stock.reform(|_: MouseEvent| ());
                    let decrease = actions.on_decrease_stock.reform(|_: MouseEvent| ());
                    html! {
                        <div class="steppers">
                            <button type="button" class="btn btn-secondary" onclick={decrease} {disabled}>{"−"}</button>
                            <button type="button" class="btn btn-secondary" onclick={increase} {disabled}>{"+"}</button>
                        </div>
                    }
                }
                _ => html! {},
            }
        };

        html! {
            <div class={classes!("form-group", error.is_some().then_some("has-error"))}>
                <label for={id}>{field.label()}</label>
                {control}
                {steppers}
                {if let Some(error) = error {
                    html! { <div class="field-error">{error.to_string()}</div> }
                } else { html! {} }}
            </div>
        }
    };

    let onsubmit = {
        let on_submit = actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="book-form" {onsubmit} novalidate={true}>
            {for BookField::ALL.into_iter().map(render_field)}

            {if read_only {
                html! {}
            } else {
                html! {
                    <button type="submit" class="btn btn-primary" disabled={!state.can_submit()}>
                        {if state.is_submitting() { "Saving..." } else { props.submit_label.as_str() }}
                    </button>
                }
            }}
        </form>
    }
}
