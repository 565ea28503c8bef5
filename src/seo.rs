// Templated SEO metadata generation.
// Static template substitution over fixed per-category tables. The tables are
// built once at startup and shared read-only through AppState; the random
// source is passed in by the caller so tests can seed it.

use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// Metadata bundle derived from (category, language) plus a random pick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hashtags: String,
    pub thumbnail_prompt: String,
}

struct CategoryTemplates {
    keywords: Vec<&'static str>,
    titles: Vec<&'static str>,
}

/// Immutable per-category template tables.
pub struct SeoTemplates {
    categories: HashMap<&'static str, CategoryTemplates>,
    fallback_keywords: Vec<&'static str>,
}

const TITLE_MAX_CHARS: usize = 70;
const MAX_TAGS: usize = 15;
const THUMBNAIL_TITLE_CHARS: usize = 40;

impl SeoTemplates {
    /// The built-in table set: seven known categories plus a generic fallback.
    pub fn builtin() -> Self {
        let mut categories = HashMap::new();

        categories.insert(
            "tech",
            CategoryTemplates {
                keywords: vec![
                    "technology", "software", "tutorial", "review", "guide", "tips", "tricks",
                ],
                titles: vec![
                    "🚀 Ultimate Tech Review: Game-Changing Features Revealed",
                    "💡 Tech Tutorial: Master This in 10 Minutes",
                    "⚡ Tech Tips & Tricks You NEED to Know in 2024",
                    "🔥 Complete Tech Guide: Everything You Need",
                    "✨ Revolutionary Tech: Full Review & Demo",
                ],
            },
        );

        categories.insert(
            "vlog",
            CategoryTemplates {
                keywords: vec![
                    "vlog", "daily", "life", "lifestyle", "day in the life", "routine",
                ],
                titles: vec![
                    "📸 Day in My Life: You Won't Believe What Happened",
                    "🌟 My Daily Routine: Behind the Scenes",
                    "💫 Life Update: Exciting News & Changes",
                    "🎬 Real Life Vlog: Unfiltered & Authentic",
                    "✨ A Day With Me: Morning to Night Routine",
                ],
            },
        );

        categories.insert(
            "shorts",
            CategoryTemplates {
                keywords: vec!["shorts", "short", "quick", "viral", "trending", "funny"],
                titles: vec![
                    "😂 Hilarious Moment Caught on Camera",
                    "🔥 Mind-Blowing 60 Second Challenge",
                    "💥 Viral Trend: We Tried It & Here's What Happened",
                    "⚡ Quick Tips That Actually Work",
                    "🎯 Watch This Before Scrolling Away",
                ],
            },
        );

        categories.insert(
            "gaming",
            CategoryTemplates {
                keywords: vec![
                    "gaming", "gameplay", "walkthrough", "guide", "tips", "stream", "playthrough",
                ],
                titles: vec![
                    "🎮 Epic Gaming Moments: Unbelievable Gameplay",
                    "🏆 Pro Gamer Tips: Level Up Your Skills",
                    "🔥 Complete Gaming Walkthrough: All Secrets Revealed",
                    "⚔️ Ultimate Gaming Guide: Win Every Match",
                    "💎 Hidden Gaming Secrets & Easter Eggs",
                ],
            },
        );

        categories.insert(
            "tutorial",
            CategoryTemplates {
                keywords: vec![
                    "tutorial", "how to", "guide", "step by step", "learn", "tips", "beginner",
                ],
                titles: vec![
                    "📚 Complete Tutorial: Beginner to Pro in Minutes",
                    "🎓 Step-by-Step Guide: Easy to Follow",
                    "✅ How To Tutorial: Anyone Can Do This",
                    "🔧 Ultimate Guide: Master This Skill Today",
                    "💡 Quick Tutorial: Learn the Easy Way",
                ],
            },
        );

        categories.insert(
            "music",
            CategoryTemplates {
                keywords: vec![
                    "music", "song", "cover", "remix", "beat", "playlist", "audio",
                ],
                titles: vec![
                    "🎵 This Song Will Be Stuck in Your Head All Day",
                    "🎧 Incredible Cover: Better Than the Original?",
                    "🔥 Fresh Beat Drop: Turn Up the Volume",
                    "🎤 Raw Vocals, No Autotune: Full Performance",
                    "✨ The Playlist You Didn't Know You Needed",
                ],
            },
        );

        categories.insert(
            "education",
            CategoryTemplates {
                keywords: vec![
                    "education", "learning", "study", "lesson", "course", "explained", "basics",
                ],
                titles: vec![
                    "📖 Finally Explained: Understand This in Minutes",
                    "🧠 Study Smarter, Not Harder: Proven Methods",
                    "🎓 The Complete Lesson Schools Never Taught You",
                    "💡 From Zero to Confident: Full Crash Course",
                    "✅ Everything You Need to Know, Simplified",
                ],
            },
        );

        Self {
            categories,
            fallback_keywords: vec!["video", "content", "entertainment"],
        }
    }

    /// Generate the metadata bundle for a category/language pair.
    /// Unknown categories use the fallback keyword set and the tech titles.
    pub fn generate(
        &self,
        category: &str,
        language: &str,
        rng: &mut impl Rng,
    ) -> GeneratedMetadata {
        let keywords = self
            .categories
            .get(category)
            .map(|c| c.keywords.as_slice())
            .unwrap_or(self.fallback_keywords.as_slice());
        let keyword = keywords[rng.gen_range(0..keywords.len())];

        let titles = self
            .categories
            .get(category)
            .or_else(|| self.categories.get("tech"))
            .map(|c| c.titles.as_slice())
            .expect("builtin tables always contain tech");
        let title = titles[rng.gen_range(0..titles.len())];

        // Multi-word keywords must collapse to a single hashtag token
        let lang_tag = if language == "en" { "youtube" } else { language };
        let hashtags = format!(
            "#{} #{} #viral #trending #{}",
            category.replace(' ', ""),
            keyword.replace(' ', ""),
            lang_tag.replace(' ', "")
        );

        let keyword_list = keywords.join(", ");
        let description = format!(
            "🎯 Welcome to this {category} content!\n\n\
             In this video, we'll explore {keyword} and provide you with valuable insights and information.\n\n\
             ⭐ Key Highlights:\n\
             • Comprehensive {category} content\n\
             • Expert tips and techniques\n\
             • Everything you need to know about {keyword}\n\n\
             🔔 Subscribe for more {category} content!\n\
             👍 Like if you found this helpful!\n\
             💬 Comment your thoughts below!\n\n\
             {hashtags}\n\n\
             📱 Connect with us:\n\
             • Like & Subscribe for more content\n\
             • Turn on notifications 🔔\n\
             • Share with friends who'd love this\n\n\
             Tags: {keyword_list}, {category}, content, tutorial, guide, tips, tricks, 2024, best, ultimate, complete\n\n\
             Thank you for watching! ❤️"
        );

        let mut tags: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        tags.push(category.to_string());
        for booster in ["viral", "trending", "2024", "tutorial", "guide", "tips"] {
            tags.push(booster.to_string());
        }
        tags.truncate(MAX_TAGS);

        let thumbnail_prompt = format!(
            "Create an eye-catching YouTube thumbnail with bold text \"{}\", \
             vibrant colors (red, yellow, blue), high contrast, professional look, \
             {} theme, engaging visuals, 1280x720px",
            truncate_chars(title, THUMBNAIL_TITLE_CHARS),
            category
        );

        GeneratedMetadata {
            title: truncate_chars(title, TITLE_MAX_CHARS),
            description,
            tags,
            hashtags,
            thumbnail_prompt,
        }
    }

    /// Category names with dedicated tables, for the form page.
    pub fn known_categories(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.categories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// Titles carry emoji; truncate on char boundaries, never bytes.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
