//! Article page, looked up by the `:slug` route parameter

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::ui::articles::{Article, find_article};
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;
use crate::ui::pages::NotFoundPage;
use crate::ui::pages::landing::Footer;

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article = move || params.with(|p| p.get("slug").and_then(|slug| find_article(&slug)));

    move || match article() {
        Some(article) => view! { <ArticleView article=*article /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn ArticleView(article: Article) -> impl IntoView {
    view! {
        <Title text=format!("{} - Genie", article.title) />

        <div class="min-h-screen bg-black text-white">
            <div class="max-w-3xl mx-auto px-4 py-16">
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 mb-8 px-3 py-2 rounded-md text-gray-300 hover:text-white hover:bg-white/10 transition-colors"
                >
                    <Icon path=icons::ARROW_LEFT class="h-4 w-4" />
                    "Back to Home"
                </A>

                <h1 class="text-3xl md:text-4xl font-bold mb-6">{article.title}</h1>
                <div class="text-gray-400 mb-8">
                    <p>{format!("Published: {}", article.published)}</p>
                </div>

                <Markdown content=article.body />
            </div>

            <Footer />
        </div>
    }
}
