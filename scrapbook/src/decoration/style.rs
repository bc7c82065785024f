//! Card style profiles
//!
//! A moment's free-text category selects one of four fixed profiles.
//! Matching is case-insensitive and anything unrecognised falls back to
//! the default profile.

use super::random::seeded_random;
use crate::config::CARD_ROTATION_SPAN;
use serde::Serialize;

const CARD_ROTATION_INDEX: u32 = 999;

/// Normalized moment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anniversary,
    Favourite,
    Milestone,
    Default,
}

impl Category {
    pub fn parse(category: Option<&str>) -> Self {
        let Some(category) = category else {
            return Category::Default;
        };

        match category.to_lowercase().as_str() {
            "anniversary" => Category::Anniversary,
            "favourite" | "favorite" => Category::Favourite,
            "milestone" => Category::Milestone,
            _ => Category::Default,
        }
    }
}

/// Visual tokens and sticker target for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProfile {
    pub category: Category,
    pub bg_color: &'static str,
    pub accent_color: &'static str,
    pub border_color: &'static str,
    pub font_class: &'static str,
    pub title_font_class: &'static str,
    pub paper_type: &'static str,
    pub sticker_count: u32,
    /// Card tilt in degrees, `[-3, 3)`
    pub rotation: f64,
}

struct Palette {
    bg_color: &'static str,
    accent_color: &'static str,
    border_color: &'static str,
    paper_type: &'static str,
    sticker_count: u32,
}

const fn palette(category: Category) -> Palette {
    match category {
        Category::Anniversary => Palette {
            bg_color: "bg-rose-50",
            accent_color: "text-rose-600",
            border_color: "border-rose-200",
            paper_type: "note-paper torn-edge",
            sticker_count: 4,
        },
        Category::Favourite => Palette {
            bg_color: "bg-yellow-50",
            accent_color: "text-yellow-600",
            border_color: "border-yellow-200",
            paper_type: "note-paper vintage-frame",
            sticker_count: 5,
        },
        Category::Milestone => Palette {
            bg_color: "bg-green-50",
            accent_color: "text-green-600",
            border_color: "border-green-200",
            paper_type: "note-paper vintage-frame",
            sticker_count: 4,
        },
        Category::Default => Palette {
            bg_color: "bg-blue-50",
            accent_color: "text-blue-600",
            border_color: "border-blue-200",
            paper_type: "note-paper torn-edge",
            sticker_count: 3,
        },
    }
}

/// Select the style profile for a moment
pub fn select_style(category: Option<&str>, moment_id: &str) -> StyleProfile {
    let category = Category::parse(category);
    let palette = palette(category);
    let rotation = -(CARD_ROTATION_SPAN / 2.0)
        + seeded_random(moment_id, CARD_ROTATION_INDEX) * CARD_ROTATION_SPAN;

    StyleProfile {
        category,
        bg_color: palette.bg_color,
        accent_color: palette.accent_color,
        border_color: palette.border_color,
        font_class: "handwriting-print",
        title_font_class: "handwriting-marker",
        paper_type: palette.paper_type,
        sticker_count: palette.sticker_count,
        rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anniversary_mixed_case() {
        let style = select_style(Some("Anniversary"), "m1");
        assert_eq!(style.category, Category::Anniversary);
        assert_eq!(style.sticker_count, 4);
        assert_eq!(style.bg_color, "bg-rose-50");
        assert_eq!(style.paper_type, "note-paper torn-edge");
    }

    #[test]
    fn test_missing_category_is_default() {
        let style = select_style(None, "m2");
        assert_eq!(style.category, Category::Default);
        assert_eq!(style.sticker_count, 3);
        assert_eq!(style.bg_color, "bg-blue-50");
    }

    #[test]
    fn test_both_favourite_spellings() {
        for spelling in ["favourite", "FAVOURITE", "Favorite", "fAvOrItE"] {
            let style = select_style(Some(spelling), "m3");
            assert_eq!(style.category, Category::Favourite, "{}", spelling);
            assert_eq!(style.sticker_count, 5);
            assert_eq!(style.paper_type, "note-paper vintage-frame");
        }
    }

    #[test]
    fn test_milestone() {
        let style = select_style(Some("MILESTONE"), "m4");
        assert_eq!(style.category, Category::Milestone);
        assert_eq!(style.sticker_count, 4);
        assert_eq!(style.accent_color, "text-green-600");
    }

    #[test]
    fn test_unrecognised_categories_are_default() {
        for category in ["", " ", "birthday", "favourites", " milestone", "anniversary!"] {
            let style = select_style(Some(category), "m5");
            assert_eq!(style.category, Category::Default, "{:?}", category);
            assert_eq!(style.sticker_count, 3);
        }
    }

    #[test]
    fn test_rotation_shared_across_categories() {
        let id = "3f2b8c1e-8d4a-4c55-9a0e-6f1d2b7c9e10";
        let expected = select_style(None, id).rotation;
        for category in ["anniversary", "favorite", "milestone"] {
            assert_eq!(select_style(Some(category), id).rotation, expected);
        }
        assert!((-3.0..3.0).contains(&expected));
    }

    #[test]
    fn test_rotation_value() {
        // seeded_random("", 999) = 0.999
        let style = select_style(None, "");
        assert!((style.rotation - 2.994).abs() < 1e-9);
    }
}
