use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// (year, month, day)
    pub published: (i32, u32, u32),
    pub read_minutes: u32,
    pub body: &'static [&'static str],
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn published_on(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.published;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn published_label(&self) -> String {
        self.published_on()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    /// schema.org Article markup for search engines.
    pub fn json_ld(&self) -> Value {
        let published = self
            .published_on()
            .map(|date| date.format("%Y-%m-%d").to_string());
        json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": self.title,
            "description": self.excerpt,
            "datePublished": published,
            "url": config::absolute_url(&self.href()),
            "publisher": {
                "@type": "Organization",
                "name": "MoreStars",
            },
        })
    }
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "why-google-reviews-matter",
        title: "Why Google Reviews Matter More Than Your Website",
        excerpt: "Most local customers decide before they ever click through. Here's what they see first.",
        published: (2024, 3, 12),
        read_minutes: 5,
        body: &[
            "When someone searches for a plumber or a dentist, the first thing they see is not your homepage. It is the map pack: three businesses, a star rating, and a review count.",
            "Businesses with more recent reviews rank higher and get clicked more. A beautiful website cannot make up for a profile with eleven reviews from 2019.",
            "The good news is that review volume is mostly a habit problem, not a quality problem. Your customers are already happy. They just need to be asked at the right moment.",
        ],
    },
    BlogPost {
        slug: "best-time-to-ask-for-a-review",
        title: "The Best Time to Ask for a Review",
        excerpt: "Timing beats wording. We looked at thousands of requests to find the sweet spot.",
        published: (2024, 5, 2),
        read_minutes: 4,
        body: &[
            "Requests sent within two hours of a completed job get nearly three times the response of those sent the next day.",
            "Evenings work well for home services, while lunch hours are best for appointment-based businesses like salons and clinics.",
            "Whatever you pick, be consistent. Automated requests never forget, never feel awkward, and never skip a busy Friday.",
        ],
    },
    BlogPost {
        slug: "sms-vs-email-review-requests",
        title: "SMS vs Email Review Requests",
        excerpt: "Text messages get opened. Emails get filtered. The numbers behind the difference.",
        published: (2024, 6, 18),
        read_minutes: 6,
        body: &[
            "Text messages are read within minutes, while the average review email sits unopened in a promotions tab.",
            "A short SMS with a direct link removes every step between intention and action. One tap opens the review form.",
            "Email still has a place for longer follow-ups, but for the ask itself, SMS wins by a wide margin.",
        ],
    },
    BlogPost {
        slug: "responding-to-negative-reviews",
        title: "How to Respond to Negative Reviews",
        excerpt: "A calm, public reply can win more customers than the bad review cost you.",
        published: (2024, 8, 27),
        read_minutes: 7,
        body: &[
            "Every business gets a bad review eventually. What future customers care about is how you respond.",
            "Thank the reviewer, acknowledge the problem without arguing, and move the conversation offline with a direct contact.",
            "Then drown it out honestly: a steady flow of requests to happy customers keeps one bad day from defining your profile.",
        ],
    },
    BlogPost {
        slug: "qr-codes-for-reviews",
        title: "Getting Reviews With QR Codes at the Counter",
        excerpt: "Printed cards, receipts and table tents that turn foot traffic into ratings.",
        published: (2024, 10, 9),
        read_minutes: 4,
        body: &[
            "Not every customer leaves a phone number. For walk-in businesses, a QR code at the point of sale fills the gap.",
            "Keep the card simple: your logo, a star graphic, and a one-line ask. The code should open the review form directly.",
            "Place it where people wait, such as the register, the table or the reception desk, and train staff to point at it.",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_post_has_a_valid_date_and_body() {
        for post in BLOG_POSTS {
            assert!(post.published_on().is_some(), "{} has a bad date", post.slug);
            assert!(!post.body.is_empty());
            assert_eq!(find_post(post.slug), Some(post));
        }
    }

    #[test]
    fn published_label_reads_naturally() {
        assert_eq!(BLOG_POSTS[1].published_label(), "May 2, 2024");
    }

    #[test]
    fn json_ld_describes_the_article() {
        let post = &BLOG_POSTS[0];
        let ld = post.json_ld();
        assert_eq!(ld["@type"], "Article");
        assert_eq!(ld["headline"], post.title);
        assert_eq!(ld["datePublished"], "2024-03-12");
        assert!(ld["url"]
            .as_str()
            .is_some_and(|url| url.ends_with("/blog/why-google-reviews-matter")));
    }
}
