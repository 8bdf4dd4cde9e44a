use shared::{Book, BookField, BookFormState, BookInput, SubmitBlocked};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "book-form";

/// A validated body handed to the owning page.
///
/// The page emits `done` once its request settles, which re-enables the
/// submit button.
#[derive(Clone, PartialEq)]
pub struct SubmitRequest {
    pub input: BookInput,
    pub done: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub struct UseBookFormActions {
    pub on_field_change: Callback<(BookField, String)>,
    pub on_increase_sell: Callback<()>,
    pub on_increase_stock: Callback<()>,
    pub on_decrease_stock: Callback<()>,
    pub on_submit: Callback<()>,
}

pub struct UseBookFormResult {
    pub state: BookFormState,
    pub actions: UseBookFormActions,
}

#[hook]
pub fn use_book_form(initial: Option<Book>, on_submit: Callback<SubmitRequest>) -> UseBookFormResult {
    let form = use_mut_ref(BookFormState::new);
    let trigger = use_force_update();

    // Reload whenever the page hands us a different book
    {
        let form = form.clone();
        let trigger = trigger.clone();

        use_effect_with(initial, move |book| {
            if let Some(book) = book {
                form.borrow_mut().load(book);
                trigger.force_update();
            }
            || ()
        });
    }

    let on_field_change = {
        let form = form.clone();
        let trigger = trigger.clone();
        use_callback((), move |(field, value): (BookField, String), _| {
            form.borrow_mut().set_value(field, value);
            trigger.force_update();
        })
    };

    let on_increase_sell = {
        let form = form.clone();
        let trigger = trigger.clone();
        use_callback((), move |_, _| {
            form.borrow_mut().increase_sell_count();
            trigger.force_update();
        })
    };

    let on_increase_stock = {
        let form = form.clone();
        let trigger = trigger.clone();
        use_callback((), move |_, _| {
            form.borrow_mut().increase_stock_count();
            trigger.force_update();
        })
    };

    let on_decrease_stock = {
        let form = form.clone();
        let trigger = trigger.clone();
        use_callback((), move |_, _| {
            form.borrow_mut().decrease_stock_count();
            trigger.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let trigger = trigger.clone();

        use_callback(on_submit, move |_, on_submit| {
            let result = form.borrow_mut().begin_submit();
            trigger.force_update();

            match result {
                Ok(input) => {
                    let form = form.clone();
                    let trigger = trigger.clone();
                    let done = Callback::from(move |_| {
                        form.borrow_mut().finish_submit();
                        trigger.force_update();
                    });
                    on_submit.emit(SubmitRequest { input, done });
                }
                Err(SubmitBlocked::InFlight) => {
                    Logger::debug_with_component(COMPONENT, "submit ignored, request in flight");
                }
                Err(SubmitBlocked::Invalid(errors)) => {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("submit blocked by {} invalid field(s)", errors.len()),
                    );
                }
            }
        })
    };

    let state = form.borrow().clone();

    UseBookFormResult {
        state,
        actions: UseBookFormActions {
            on_field_change,
            on_increase_sell,
            on_increase_stock,
            on_decrease_stock,
            on_submit,
        },
    }
}
