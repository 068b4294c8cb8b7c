//! Static articles linked from the landing page

/// One article page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub published: &'static str,
    /// Markdown body
    pub body: &'static str,
}

impl Article {
    pub fn href(&self) -> String {
        format!("/articles/{}", self.slug)
    }
}

pub const ARTICLES: [Article; 2] = [
    Article {
        slug: "collaboration-ux",
        title: "Collaboration UX for the Age of AI",
        published: "May 10, 2025",
        body: COLLABORATION_UX,
    },
    Article {
        slug: "ai-in-chat",
        title: "\"AI Doing Things For Us\" to \"AI Working Alongside Us\"",
        published: "May 10, 2025",
        body: AI_IN_CHAT,
    },
];

pub fn find_article(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

const COLLABORATION_UX: &str = r#"In the emerging era of AI-powered workplaces, collaboration practices are rapidly evolving. This article explores how user experience design must adapt to facilitate seamless human-AI teamwork.

## The New Collaborative Paradigm

Teams already coordinate in chat. When an assistant joins the channel it inherits the same expectations as any colleague: answer in context, show its sources, and stay out of the way when it is not needed.

## Designing for Human-AI Teams

Good collaboration UX keeps people in control. Requests should read like normal messages, results should land where the conversation happens, and every answer should be easy to verify or discard.

## Key Principles

- Meet people in the tools they already use
- Make the assistant's work visible to the whole team
- Keep commands short and memorable
- Let humans approve anything with side effects

The best assistants feel less like a new application and more like a helpful teammate who happens to be very fast.

**Note: This is placeholder content. The article will be updated with final content.**
"#;

const AI_IN_CHAT: &str = r#"The paradigm shift from AI as tools that automate tasks to AI as collaborators that enhance human capabilities represents a fundamental evolution in how we conceptualize artificial intelligence in the workplace.

## The Evolution of AI Integration

Early integrations ran in the background: a script fired, a report appeared. Useful, but invisible. Bringing agents into the conversation changes who can use them and how quickly results are shared.

## Collaborative Intelligence

An agent that answers in a shared channel turns one person's question into the whole team's context. Follow-up questions, corrections and decisions all happen in the same thread.

## Case Studies

Sales teams pull CRM notes and recent news before a meeting. Support teams summarise long tickets. Engineering teams ask for deploy status without opening another dashboard.

## The Future of Human-AI Teamwork

The next step is not more automation for its own sake, but assistants that know when to act, when to ask, and when to hand back to a person.

**Note: This is placeholder content. The article will be updated with final content.**
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_articles() {
        assert_eq!(
            find_article("collaboration-ux").map(|a| a.title),
            Some("Collaboration UX for the Age of AI")
        );
        assert!(find_article("ai-in-chat").is_some());
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(find_article("article3"), None);
        assert_eq!(find_article(""), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(ARTICLES[1].href(), "/articles/ai-in-chat");
    }

    #[test]
    fn test_slugs_unique() {
        assert_ne!(ARTICLES[0].slug, ARTICLES[1].slug);
    }
}
