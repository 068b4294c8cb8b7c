//! Landing page component
//!
//! Single-page pitch for Genie with:
//! - SEO meta tags
//! - Hero with rotating platform name, platform selector and signup form
//! - Workflow infographic and chat mockup
//! - "How it works" steps and benefit cards
//! - Closing call-to-action with a second signup form
//! - Article links and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::articles::ARTICLES;
use crate::ui::chat::ChatDemo;
use crate::ui::icon::{Icon, icons};
use crate::ui::platform::{PlatformSelector, RotatingPlatformName, use_platform_context};
use crate::ui::signup_form::SignupForm;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let platform = use_platform_context();
    let platform_name = move || platform.selected.with(|p| p.label());

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-black text-white overflow-x-hidden">
            // Hero Section
            <section class="relative min-h-screen flex flex-col items-center justify-center px-4 py-20">
                <div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 via-black to-blue-900/20 z-0" aria-hidden="true"></div>
                <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-purple-500/10 blur-3xl z-0" aria-hidden="true"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-blue-500/10 blur-3xl z-0" aria-hidden="true"></div>

                <div class="container mx-auto relative z-10 max-w-5xl">
                    <div class="text-center mb-12">
                        <h1 class="text-4xl md:text-6xl font-bold mb-6">
                            <span class="bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                                "One Click to Use AI in "
                            </span>
                            <RotatingPlatformName />
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8 max-w-2xl mx-auto">
                            "Genie lets you connect your AI tools to messaging platforms in seconds, so your team can use them with simple chat commands."
                        </p>

                        <PlatformSelector />
                        <SignupForm />
                    </div>

                    <WorkflowInfographic />
                    <ChatDemo />

                    <div class="mt-12 text-center">
                        <a
                            href="#how-it-works"
                            class="inline-flex items-center gap-2 text-gray-300 hover:text-white group"
                        >
                            "Learn How It Works"
                            <Icon path=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                        </a>
                    </div>
                </div>
            </section>

            // How It Works Section
            <section id="how-it-works" class="py-20 bg-black relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-t from-blue-900/10 via-black to-black z-0" aria-hidden="true"></div>
                <div class="container mx-auto px-4 relative z-10">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-5xl font-bold mb-4">"How It Works"</h2>
                        <p class="text-gray-300 text-xl max-w-2xl mx-auto">
                            {move || format!("Connect your AI tools to {} in three simple steps", platform_name())}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        <StepCard
                            icon=icons::SERVER
                            icon_class="w-8 h-8 text-purple-400"
                            title="Connect Your Tools"
                            description="Link your AI tools to Genie with a simple click - no coding needed."
                        />
                        <StepCard
                            icon=icons::SETTINGS
                            icon_class="w-8 h-8 text-blue-400"
                            title="Set Up Quick Commands"
                            description="Create easy-to-remember chat commands your team can use right away."
                        />
                        <StepCard
                            icon=icons::LIGHTNING
                            icon_class="w-8 h-8 text-yellow-400"
                            title=Signal::derive(move || format!("Use in {}", platform_name()))
                            description="Your team can now use powerful AI tools without leaving their chat."
                        />
                    </div>

                    <div class="mt-16 text-center">
                        <h3 class="text-2xl font-semibold mb-6">"Benefits"</h3>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto text-left">
                            <BenefitCard
                                icon=icons::LIGHTNING
                                title="Save Time"
                                description="Your team can use AI tools right in chat without switching apps."
                            />
                            <BenefitCard
                                icon=icons::SERVER
                                title="Easy Setup"
                                description="Connect all your tools in one place with no coding required."
                            />
                            <BenefitCard
                                icon=icons::CHECK_CIRCLE
                                title="Team Friendly"
                                description="Everyone can use AI tools with simple chat commands they already know."
                            />
                            <BenefitCard
                                icon=icons::CLOUD
                                title="Works Anywhere"
                                description="Use with cloud tools or your own private AI models - your choice."
                            />
                        </div>
                    </div>
                </div>
            </section>

            // Final CTA Section
            <section class="py-16 relative">
                <div class="absolute inset-0 bg-gradient-to-b from-black via-black to-purple-900/20 z-0" aria-hidden="true"></div>
                <div class="container mx-auto px-4 relative z-10">
                    <div class="max-w-3xl mx-auto text-center">
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">
                            {move || format!("Ready to supercharge your {} workspace?", platform_name())}
                        </h2>
                        <p class="text-xl text-gray-300 mb-8">
                            "Join the waitlist today - early users get special features and priority support!"
                        </p>
                        <SignupForm show_validation_message=false />
                    </div>
                </div>
            </section>

            <ArticleLinks />
            <Footer />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Genie - One Click to Use AI in Your Team Chat" />
        <Meta
            name="description"
            content="Genie connects your AI tools to Slack, Discord, Teams and Telegram in seconds. Join the waitlist for early access."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Genie - One Click to Use AI in Your Team Chat" />
        <Meta
            property="og:description"
            content="Connect your AI tools to messaging platforms so your team can use them with simple chat commands."
        />
    }
}

/// Three-column overview: chat platform, Genie, agents
#[component]
fn WorkflowInfographic() -> impl IntoView {
    let platform = use_platform_context();

    view! {
        <div class="max-w-4xl mx-auto relative py-2">
            <div class="p-6 md:p-8 rounded-lg border border-white/10 shadow-xl bg-[#3F0E40]/10">
                <div class="flex flex-col md:flex-row justify-between items-center gap-12 md:gap-6">
                    <WorkflowColumn
                        title=Signal::derive(move || platform.selected.with(|p| p.label()))
                        description="Where your team already collaborates and gets work done"
                    >
                        <Icon path=icons::CHAT class="w-6 h-6 text-blue-300" />
                    </WorkflowColumn>

                    <Icon path=icons::CHEVRON_RIGHT class="hidden md:block w-8 h-8 text-gray-400" />

                    <WorkflowColumn
                        title="genie"
                        description="Manage all your AI agents in one place and make them available in your chat"
                    >
                        <span class="text-2xl">"✨"</span>
                    </WorkflowColumn>

                    <Icon path=icons::CHEVRON_RIGHT class="hidden md:block w-8 h-8 text-gray-400" />

                    <WorkflowColumn
                        title="Bring your agents from anywhere"
                        description="Whether they are running on Zapier, Make, n8n, or your own servers"
                    >
                        <Icon path=icons::SERVER class="w-6 h-6 text-purple-300" />
                    </WorkflowColumn>
                </div>
            </div>
        </div>
    }
}

#[component]
fn WorkflowColumn(
    #[prop(into)] title: Signal<String>,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center flex-1 px-4">
            <div class="mb-6 p-3 rounded-lg bg-white/10">{children()}</div>
            <h3 class="text-xl font-semibold mb-3">{move || title.get()}</h3>
            <p class="text-sm text-gray-300 max-w-[250px]">{description}</p>
        </div>
    }
}

#[component]
fn StepCard(
    icon: &'static str,
    icon_class: &'static str,
    #[prop(into)] title: Signal<String>,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-sm border border-white/10 rounded-lg hover:bg-white/10 transition-all group">
            <div class="p-6 flex flex-col items-center text-center">
                <div class="mb-4 p-3 rounded-full bg-white/5 group-hover:bg-white/10 transition-all">
                    <Icon path=icon class=icon_class />
                </div>
                <h3 class="text-xl font-semibold mb-3">{move || title.get()}</h3>
                <p class="text-gray-300">{description}</p>
            </div>
        </div>
    }
}

#[component]
fn BenefitCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 bg-white/5 backdrop-blur-sm rounded-lg border border-white/10">
            <div class="flex items-center gap-4">
                <div class="flex-shrink-0 p-2 bg-white/10 rounded-lg">
                    <Icon path=icon class="w-6 h-6" />
                </div>
                <div>
                    <h4 class="font-semibold mb-1">{title}</h4>
                    <p class="text-gray-300 text-sm">{description}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ArticleLinks() -> impl IntoView {
    view! {
        <section class="py-16 border-t border-white/10">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="text-2xl font-semibold mb-6 text-center">"From the blog"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {ARTICLES
                        .iter()
                        .map(|article| {
                            view! {
                                <A
                                    href=article.href()
                                    attr:class="block p-6 rounded-lg bg-white/5 border border-white/10 hover:bg-white/10 transition-all"
                                >
                                    <p class="text-xs text-gray-400 mb-2">{article.published}</p>
                                    <h3 class="text-lg font-semibold">{article.title}</h3>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-white/10">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4">
                <p class="text-gray-400 text-sm">"© 2025 Genie. All rights reserved."</p>
                <nav class="flex gap-6">
                    <A href="/" attr:class="text-gray-400 hover:text-white text-sm">"Home"</A>
                    <A href=ARTICLES[0].href() attr:class="text-gray-400 hover:text-white text-sm">
                        "Articles"
                    </A>
                </nav>
            </div>
        </footer>
    }
}
