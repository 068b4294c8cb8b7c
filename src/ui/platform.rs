//! Messaging platform selection shared across the landing page

use leptos::prelude::*;

use crate::core::Platform;

/// Platforms cycled through in the hero headline
pub const ROTATING_PLATFORMS: [&str; 4] = ["Slack", "Discord", "Telegram", "Teams"];

/// Time each platform name stays on screen
#[cfg(not(feature = "ssr"))]
const ROTATION_INTERVAL_MS: u32 = 2000;

/// Fade-out time before the name changes
#[cfg(not(feature = "ssr"))]
const FADE_MS: u32 = 500;

/// Index of the platform shown after `current`
pub fn next_rotation_index(current: usize) -> usize {
    (current + 1) % ROTATING_PLATFORMS.len()
}

/// Page-wide platform selection
#[derive(Clone, Copy)]
pub struct PlatformContext {
    pub selected: RwSignal<Platform>,
}

impl PlatformContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Platform::default()),
        }
    }

    /// Switch to the option with this id. Leaving `other` drops the typed name.
    pub fn select(&self, id: &str) {
        if let Some(platform) = Platform::from_id(id) {
            self.selected.set(platform);
        }
    }

    /// Update the free-text name. Ignored unless `Other` is selected.
    pub fn set_other_name(&self, name: String) {
        self.selected.update(|platform| {
            if let Platform::Other(current) = platform {
                *current = name;
            }
        });
    }

    /// Label sent with a signup
    pub fn label(&self) -> String {
        self.selected.with_untracked(Platform::label)
    }
}

impl Default for PlatformContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_platform_context() -> PlatformContext {
    let ctx = PlatformContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_platform_context() -> PlatformContext {
    use_context::<PlatformContext>().expect("PlatformContext should be provided")
}

/// Dropdown of messaging apps, with a free-text field for "Other"
#[component]
pub fn PlatformSelector() -> impl IntoView {
    let ctx = use_platform_context();
    let selected = ctx.selected;

    view! {
        <div class="w-full max-w-md mx-auto mb-8">
            <div class="text-center mb-2">
                <h3 class="text-lg font-semibold">
                    "Which messaging app does your organization use?"
                </h3>
            </div>
            <div class="flex flex-col gap-3">
                <select
                    class="w-full h-11 px-3 rounded-md bg-white/10 border border-white/20 text-white"
                    aria-label="Select your messaging app"
                    prop:value=move || selected.with(|p| p.id())
                    on:change=move |ev| ctx.select(&event_target_value(&ev))
                >
                    {Platform::OPTIONS
                        .into_iter()
                        .map(|(id, name)| {
                            view! {
                                <option value=id class="bg-gray-900">
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <Show when=move || selected.with(Platform::is_other)>
                    <input
                        type="text"
                        class="w-full h-11 px-3 rounded-md bg-white/10 border border-white/20 text-white"
                        placeholder="Please specify your messaging app"
                        prop:value=move || {
                            selected
                                .with(|p| match p {
                                    Platform::Other(name) => name.clone(),
                                    _ => String::new(),
                                })
                        }
                        on:input=move |ev| ctx.set_other_name(event_target_value(&ev))
                    />
                </Show>
            </div>
        </div>
    }
}

/// Hero headline suffix that cycles through platform names
#[component]
pub fn RotatingPlatformName() -> impl IntoView {
    let index = RwSignal::new(0usize);
    let visible = RwSignal::new(true);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            loop {
                TimeoutFuture::new(ROTATION_INTERVAL_MS - FADE_MS).await;
                if visible.try_set(false).is_some() {
                    // Component was unmounted
                    break;
                }
                TimeoutFuture::new(FADE_MS).await;
                if index.try_update(|i| *i = next_rotation_index(*i)).is_none() {
                    break;
                }
                visible.set(true);
            }
        });
    }

    view! {
        <span class=move || {
            format!(
                "inline-block transition-opacity duration-500 bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent {}",
                if visible.get() { "opacity-100" } else { "opacity-0" },
            )
        }>
            {move || ROTATING_PLATFORMS[index.get()]}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(next_rotation_index(0), 1);
        assert_eq!(next_rotation_index(ROTATING_PLATFORMS.len() - 1), 0);
    }

    #[test]
    fn test_context_select_and_label() {
        let owner = Owner::new();
        owner.set();

        let ctx = PlatformContext::new();
        assert_eq!(ctx.label(), "Slack");

        ctx.select("telegram");
        assert_eq!(ctx.label(), "Telegram");

        ctx.select("unknown");
        assert_eq!(ctx.label(), "Telegram");
    }

    #[test]
    fn test_other_name_cleared_when_leaving_other() {
        let owner = Owner::new();
        owner.set();

        let ctx = PlatformContext::new();
        ctx.select("other");
        assert_eq!(ctx.label(), "Other");

        ctx.set_other_name("Mattermost".to_string());
        assert_eq!(ctx.label(), "Mattermost");

        ctx.select("discord");
        ctx.select("other");
        assert_eq!(ctx.label(), "Other");
    }

    #[test]
    fn test_other_name_ignored_for_named_platform() {
        let owner = Owner::new();
        owner.set();

        let ctx = PlatformContext::new();
        ctx.set_other_name("Zulip".to_string());
        assert_eq!(ctx.label(), "Slack");
    }
}
