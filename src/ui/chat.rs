//! Chat-message mockups used to illustrate the product

use leptos::prelude::*;

/// Avatar image for a demo user
fn avatar_url(name: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", name)
}

/// Split text on `@genie` so mentions can be highlighted
fn mention_segments(text: &str) -> Vec<(bool, String)> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find("@genie") {
        if pos > 0 {
            segments.push((false, rest[..pos].to_string()));
        }
        segments.push((true, "@genie".to_string()));
        rest = &rest[pos + "@genie".len()..];
    }
    if !rest.is_empty() {
        segments.push((false, rest.to_string()));
    }

    segments
}

/// A message from a person
#[component]
pub fn ChatMessage(
    name: &'static str,
    time: &'static str,
    text: &'static str,
    /// Fade-in delay in seconds
    #[prop(default = 0.0)]
    delay: f32,
) -> impl IntoView {
    let style = format!(
        "animation-delay: {}s; animation-fill-mode: forwards;",
        delay
    );

    view! {
        <div class="flex items-start space-x-3 animate-fade-in opacity-0" style=style>
            <img src=avatar_url(name) alt=name class="w-8 h-8 rounded" />
            <div>
                <div class="flex items-center">
                    <span class="font-medium text-white">{name}</span>
                    <span class="ml-2 text-xs text-gray-400">{time}</span>
                </div>
                <p class="text-gray-300 mt-1">
                    {mention_segments(text)
                        .into_iter()
                        .map(|(is_mention, segment)| {
                            if is_mention {
                                view! { <span class="text-yellow-300">{segment}</span> }.into_any()
                            } else {
                                segment.into_any()
                            }
                        })
                        .collect_view()}
                </p>
            </div>
        </div>
    }
}

/// A structured answer from the assistant
#[component]
pub fn GenieMessage(
    time: &'static str,
    title: &'static str,
    bullets: &'static [&'static str],
    #[prop(optional)] recommendation: Option<&'static str>,
    #[prop(optional)] footnote: Option<&'static str>,
    #[prop(default = 0.0)] delay: f32,
) -> impl IntoView {
    let style = format!(
        "animation-delay: {}s; animation-fill-mode: forwards;",
        delay
    );

    view! {
        <div class="flex items-start space-x-3 animate-fade-in opacity-0" style=style>
            <div class="w-8 h-8 rounded bg-gradient-to-r from-yellow-600 to-amber-600 flex items-center justify-center">
                <span class="text-white text-xs">"✨"</span>
            </div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center">
                    <span class="font-medium text-amber-500">"genie"</span>
                    <span class="ml-2 text-xs text-gray-400">{time}</span>
                </div>
                <div class="mt-1 p-3 bg-[#222529] rounded-lg border border-[#565856]/30">
                    <p class="text-gray-300 text-sm">{title}</p>
                    <ul class="mt-2 text-sm text-gray-300 list-disc pl-5 space-y-1">
                        {bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
                    </ul>
                    {recommendation.map(|text| view! { <p class="mt-3 text-sm text-gray-300">{text}</p> })}
                </div>
                {footnote.map(|text| view! { <p class="text-xs text-gray-500 mt-2">{text}</p> })}
            </div>
        </div>
    }
}

const ACME_FINDINGS: &[&str] = &[
    "Transitioning from AWS to Azure over the next 6 months (confirmed in their Q2 earnings call)",
    "HubSpot notes: 3 meetings with their CTO about integration challenges",
    "Recent press release mentioned a $2.4M budget for cloud consulting",
    "Their LinkedIn shows 5 new Azure engineer hires in the last month",
];

/// Channel mockup showing a team asking the assistant for help
#[component]
pub fn ChatDemo() -> impl IntoView {
    view! {
        <div class="mt-12 max-w-3xl mx-auto">
            <div class="rounded-lg overflow-hidden shadow-xl bg-[#3F0E40]/10 border border-white/10">
                <div class="bg-[#3F0E40] p-3 border-b border-[#522653]">
                    <span class="text-white font-medium">"# sales-team"</span>
                </div>
                <div class="p-4 space-y-4 bg-[#1A1D21] max-h-[50vh] md:max-h-[40vh] overflow-y-auto">
                    <ChatMessage
                        name="Sarah"
                        time="10:15 AM"
                        text="Team, I need to prepare for the Acme Corp meeting tomorrow. Any insights on their recent tech infrastructure changes?"
                        delay=0.2
                    />
                    <ChatMessage
                        name="Mike"
                        time="10:17 AM"
                        text="I heard they might be shifting from AWS to Azure, but let's ask @genie to pull data from Hubspot and recent news."
                        delay=0.5
                    />
                    <ChatMessage
                        name="Alex"
                        time="10:18 AM"
                        text="@genie Can you research Acme Corp's tech stack changes in the last quarter and suggest discussion points for Sarah's meeting tomorrow? Check both Hubspot and recent news."
                        delay=0.8
                    />
                    <GenieMessage
                        time="10:19 AM"
                        title="Based on Hubspot data and recent news, here's what I found about Acme Corp:"
                        bullets=ACME_FINDINGS
                        recommendation="Recommended approach: Focus on our Azure migration services and training programs. Their CTO is particularly concerned about security during the transition."
                        footnote="@genie saved 3 hours of research in 20 seconds"
                        delay=1.1
                    />
                    <ChatMessage
                        name="Sarah"
                        time="10:21 AM"
                        text="This is perfect! Thanks team and @genie - I'll build my presentation around these points. Can you add this to our meeting prep doc?"
                        delay=1.4
                    />
                </div>
            </div>
        </div>
    }
}
