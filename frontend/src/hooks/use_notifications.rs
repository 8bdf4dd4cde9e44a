use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Success messages disappear on their own after this long
const SUCCESS_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationList {
    pub entries: Vec<Notification>,
}

pub enum NotificationAction {
    /// Insert, or replace the entry with the same id
    Show(Notification),
    Dismiss(u32),
}

impl Reducible for NotificationList {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            NotificationAction::Show(notification) => {
                match entries.iter_mut().find(|n| n.id == notification.id) {
                    Some(existing) => *existing = notification,
                    None => entries.push(notification),
                }
            }
            NotificationAction::Dismiss(id) => entries.retain(|n| n.id != id),
        }
        Rc::new(Self { entries })
    }
}

/// Handle views use to raise transient, dismissable messages.
///
/// `loading` returns an id; passing it to `success`/`error` replaces the
/// loading entry with the outcome.
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NotificationList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    fn allocate(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn show(&self, id: Option<u32>, kind: NotificationKind, message: String) -> u32 {
        let id = id.unwrap_or_else(|| self.allocate());
        self.dispatcher.dispatch(NotificationAction::Show(Notification { id, kind, message }));
        id
    }

    pub fn loading(&self, message: impl Into<String>) -> u32 {
        self.show(None, NotificationKind::Loading, message.into())
    }

    pub fn success(&self, replaces: Option<u32>, message: impl Into<String>) {
        let id = self.show(replaces, NotificationKind::Success, message.into());
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
            dispatcher.dispatch(NotificationAction::Dismiss(id));
        });
    }

    pub fn error(&self, replaces: Option<u32>, message: impl Into<String>) {
        self.show(replaces, NotificationKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(NotificationAction::Dismiss(id));
    }
}

pub struct UseNotificationsResult {
    pub notifications: Vec<Notification>,
    pub notifier: Notifier,
    pub on_dismiss: Callback<u32>,
}

#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let list = use_reducer(NotificationList::default);
    let counter = use_memo((), |_| Rc::new(Cell::new(0u32)));

    let notifier = Notifier {
        dispatcher: list.dispatcher(),
        next_id: (*counter).clone(),
    };

    let on_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |id: u32| notifier.dismiss(id))
    };

    UseNotificationsResult {
        notifications: list.entries.clone(),
        notifier,
        on_dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, kind: NotificationKind, message: &str) -> Notification {
        Notification { id, kind, message: message.to_string() }
    }

    #[test]
    fn test_outcome_replaces_loading_entry() {
        let list = Rc::new(NotificationList::default());
        let list = list.reduce(NotificationAction::Show(entry(1, NotificationKind::Loading, "Deleting...")));
        let list = list.reduce(NotificationAction::Show(entry(2, NotificationKind::Error, "Load failed")));
        let list = list.reduce(NotificationAction::Show(entry(1, NotificationKind::Success, "Deleted")));

        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0], entry(1, NotificationKind::Success, "Deleted"));

        let list = list.reduce(NotificationAction::Dismiss(2));
        assert_eq!(list.entries.len(), 1);
    }
}
