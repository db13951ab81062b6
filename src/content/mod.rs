//! Static lesson and blog catalogs.
//!
//! Order matters: lessons are read front to back, so previous/next links
//! follow the position in [`LESSONS`].

use crate::models::{BlogCategory, BlogPost, Lesson, LessonLevel};

macro_rules! lesson {
    ($id:literal, $slug:literal, $level:ident, $step:expr) => {
        Lesson {
            id: $id,
            slug: $slug,
            level: LessonLevel::$level,
            related_step: $step,
            title_key: concat!($id, "_title"),
            summary_key: concat!($id, "_desc"),
        }
    };
}

pub static LESSONS: [Lesson; 9] = [
    lesson!("basics1", "what-is-trading-robot", Basics, None),
    lesson!("basics2", "mt4-vs-mt5", Basics, Some(1)),
    lesson!("basics3", "install-robot-mt4", Basics, None),
    lesson!("strategy1", "first-strategy", Strategy, Some(2)),
    lesson!("strategy2", "indicators-explained", Strategy, Some(3)),
    lesson!("strategy3", "backtesting-basics", Strategy, None),
    lesson!("risk1", "risk-management-basics", Risk, Some(4)),
    lesson!("risk2", "common-mistakes", Risk, None),
    lesson!("risk3", "position-sizing", Risk, None),
];

macro_rules! post {
    ($slug:literal, $key:literal, $category:ident, $date:literal) => {
        BlogPost {
            slug: $slug,
            category: BlogCategory::$category,
            published: $date,
            title_key: concat!($key, "_title"),
            excerpt_key: concat!($key, "_excerpt"),
        }
    };
}

pub static BLOG_POSTS: [BlogPost; 6] = [
    post!("what-is-algorithmic-trading", "algorithmic_trading", Basics, "2024-01-15"),
    post!("risks-of-robot-trading", "robot_risks", Risk, "2024-01-20"),
    post!("benefits-of-automated-trading", "automation_benefits", Basics, "2024-01-25"),
    post!("common-robot-trading-mistakes", "common_mistakes", Risk, "2024-02-01"),
    post!("future-of-trading-robots", "future", Trends, "2024-02-10"),
    post!("importance-of-demo-testing", "demo_testing", Tips, "2024-02-15"),
];

pub fn lesson_by_slug(slug: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.slug == slug)
}

pub fn lessons_at(level: LessonLevel) -> impl Iterator<Item = &'static Lesson> {
    LESSONS.iter().filter(move |l| l.level == level)
}

/// Previous and next lesson around `slug` in reading order.
pub fn adjacent_lessons(
    slug: &str,
) -> (Option<&'static Lesson>, Option<&'static Lesson>) {
    match LESSONS.iter().position(|l| l.slug == slug) {
        Some(idx) => (
            idx.checked_sub(1).and_then(|i| LESSONS.get(i)),
            LESSONS.get(idx + 1),
        ),
        None => (None, None),
    }
}

pub fn blog_post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}
