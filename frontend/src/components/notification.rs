use yew::prelude::*;

use crate::hooks::use_notifications::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    if props.notifications.is_empty() {
        return html! {};
    }

    html! {
        <div class="notifications" role="status">
            {for props.notifications.iter().map(|notification| {
                let class = match notification.kind {
                    NotificationKind::Loading => "notification loading",
                    NotificationKind::Success => "notification success",
                    NotificationKind::Error => "notification error",
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = notification.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };

                html! {
                    <div key={notification.id} class={class}>
                        <span class="message">{&notification.message}</span>
                        {if notification.kind != NotificationKind::Loading {
                            html! {
                                <button class="close-btn" aria-label="Dismiss" {onclick}>{"×"}</button>
                            }
                        } else { html! {} }}
                    </div>
                }
            })}
        </div>
    }
}
