//! HTML views rendered with Tera.
//!
//! Templates are compiled into the binary and registered once at startup.
//! All `.html` templates are autoescaped.

use tera::{Context, Tera};
use user_store::User;

/// Page title of the newcomers listing.
pub const NEWCOMERS_TITLE: &str = "Twitter - Newcomers";

const TEMPLATES: [(&str, &str); 2] = [
    ("layout.html", include_str!("../templates/layout.html")),
    (
        "users/listing.html",
        include_str!("../templates/users/listing.html"),
    ),
];

/// Registered page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parses and registers all templates.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Renders a full page titled `title` embedding the users listing.
    pub fn render_listing(&self, title: &str, users: &[User]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("users", users);
        self.tera.render("users/listing.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn views() -> Views {
        Views::new().unwrap()
    }

    #[test]
    fn listing_is_a_full_page_with_title() {
        let html = views()
            .render_listing(NEWCOMERS_TITLE, &[User::new(1, "Ann")])
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Twitter - Newcomers</title>"));
        assert!(html.contains("Ann"));
    }

    #[test]
    fn users_render_in_given_order() {
        let users = [User::new(2, "Bo"), User::new(1, "Ann")];
        let html = views().render_listing(NEWCOMERS_TITLE, &users).unwrap();
        let bo = html.find("Bo").unwrap();
        let ann = html.find("Ann").unwrap();
        assert!(bo < ann);
    }

    #[test]
    fn empty_listing_says_so() {
        let html = views().render_listing(NEWCOMERS_TITLE, &[]).unwrap();
        assert!(html.contains("No newcomers yet."));
        assert!(!html.contains("<ol"));
    }

    #[test]
    fn names_are_escaped() {
        let html = views()
            .render_listing(NEWCOMERS_TITLE, &[User::new(1, "<script>alert(1)</script>")])
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn join_date_is_shown_when_known() {
        let joined = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let html = views()
            .render_listing(NEWCOMERS_TITLE, &[User::new(1, "Ann").joined_at(joined)])
            .unwrap();
        assert!(html.contains("2024-05-01"));
        assert!(html.contains("<time"));
    }

    #[test]
    fn join_date_is_omitted_when_unknown() {
        let html = views()
            .render_listing(NEWCOMERS_TITLE, &[User::new(1, "Ann")])
            .unwrap();
        assert!(!html.contains("<time"));
    }
}
