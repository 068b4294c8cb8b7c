//! Toast notifications
//!
//! [`NotificationManager`] is the page-wide [`Notifier`]: signup forms push
//! into it and [`NotificationsContainer`] renders whatever it holds.

use crate::core::{Notification, NotificationKind, Notifier};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Length of the exit transition before a toast is removed
#[cfg(not(feature = "ssr"))]
const EXIT_ANIMATION_MS: u32 = 300;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Append a toast, evicting the oldest ones past [`MAX_NOTIFICATIONS`]
fn push_bounded(queue: &mut VecDeque<NotificationItem>, item: NotificationItem) {
    queue.push_back(item);
    while queue.len() > MAX_NOTIFICATIONS {
        queue.pop_front();
    }
}

/// Notifications container component
/// Place once near the root of the app
#[component]
pub fn NotificationsContainer(manager: NotificationManager) -> impl IntoView {
    let notifications = manager.notifications();

    view! {
        <div
            class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! { <NotificationToast item=item notifications=notifications /> }
                }
            />
        </div>
    }
}

/// Single toast
#[component]
fn NotificationToast(
    item: NotificationItem,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                notifications.update(|n| n.retain(|i| i.id != id));
            });
        }
    }

    let (tone_class, icon_class, icon_path) = match notification.kind {
        NotificationKind::Success => (
            "bg-green-500/10 border-green-500/30",
            "text-green-400",
            icons::CHECK_CIRCLE,
        ),
        NotificationKind::Error => (
            "bg-red-500/10 border-red-500/30",
            "text-red-400",
            icons::ALERT_CIRCLE,
        ),
        NotificationKind::Info => (
            "bg-blue-500/10 border-blue-500/30",
            "text-blue-400",
            icons::INFO,
        ),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg text-white transition-all duration-300 {}",
        tone_class
    );

    view! {
        <div
            class=container_class
            style=move || {
                if is_exiting.get() {
                    "opacity: 0; transform: translateX(1rem);"
                } else {
                    "opacity: 1; transform: translateX(0);"
                }
            }
        >
            <div class=icon_class>
                <Icon path=icon_path />
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium">{notification.title}</h4>
                <p class="text-xs text-gray-300 mt-0.5">{notification.description}</p>
            </div>
            <button
                class="text-gray-400 hover:text-white transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| notifications.update(|n| n.retain(|i| i.id != id))
            >
                <Icon path=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

/// Reactive toast queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications
            .update(|n| push_bounded(n, NotificationItem { id, notification }));
    }

    /// Clear all notifications
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationManager {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

/// Create the manager and provide it to the component tree
pub fn provide_notification_manager() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}
