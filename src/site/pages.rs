//! Static page copy
//!
//! Pages are flattened into [`TextLine`]s so the renderer and the anchor
//! scroller agree on where each section starts.

use super::router::{HomeSection, Route};

/// A titled block of a page
#[derive(Debug)]
pub struct PageSection {
    pub anchor: Option<HomeSection>,
    pub heading: &'static str,
    pub body: &'static [&'static str],
}

/// A static page
#[derive(Debug)]
pub struct Page {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [PageSection],
}

/// One rendered row of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLine {
    Heading(&'static str),
    Tagline(&'static str),
    SectionHeading(&'static str),
    Body(&'static str),
    Blank,
}

pub static HOME: Page = Page {
    heading: "GyraLabs - Agentic AI",
    tagline: "Build, deploy, and orchestrate autonomous AI agents.",
    sections: &[
        PageSection {
            anchor: None,
            heading: "Get started",
            body: &[
                "Press Ctrl+K anywhere to search commands.",
                "Use the navbar links or the footer to move around the site.",
            ],
        },
        PageSection {
            anchor: Some(HomeSection::About),
            heading: "About",
            body: &[
                "Building agentic AI systems designed for autonomy, memory,",
                "and real-time intelligence at scale.",
            ],
        },
        PageSection {
            anchor: Some(HomeSection::Pricing),
            heading: "Pricing",
            body: &[
                "Start for free. Every workspace includes the agent builder,",
                "the dashboard and team invites.",
            ],
        },
    ],
};

pub static BLOG: Page = Page {
    heading: "Latest Insights",
    tagline: "Coming soon...",
    sections: &[],
};

pub static CONTACT: Page = Page {
    heading: "Contact Us",
    tagline: "Get in touch with our team.",
    sections: &[],
};

pub static NOT_FOUND: Page = Page {
    heading: "404",
    tagline: "This page could not be found.",
    sections: &[],
};

impl Page {
    /// The page flattened into rows
    pub fn text_lines(&self) -> Vec<TextLine> {
        let mut lines = vec![
            TextLine::Heading(self.heading),
            TextLine::Blank,
            TextLine::Tagline(self.tagline),
        ];
        for section in self.sections {
            lines.push(TextLine::Blank);
            lines.push(TextLine::SectionHeading(section.heading));
            lines.push(TextLine::Blank);
            lines.extend(section.body.iter().copied().map(TextLine::Body));
        }
        lines
    }

    /// Row at which an anchored section's heading starts
    pub fn section_offset(&self, anchor: HomeSection) -> Option<usize> {
        let heading = self
            .sections
            .iter()
            .find(|s| s.anchor == Some(anchor))?
            .heading;
        self.text_lines()
            .iter()
            .position(|line| *line == TextLine::SectionHeading(heading))
    }
}

/// Static page for a route. Dashboard and profile routes are not static.
pub fn page_for(route: &Route) -> Option<&'static Page> {
    match route {
        Route::Home { .. } => Some(&HOME),
        Route::Blog => Some(&BLOG),
        Route::Contact => Some(&CONTACT),
        Route::NotFound(_) => Some(&NOT_FOUND),
        Route::Dashboard | Route::UserProfile => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_routes() {
        assert_eq!(page_for(&Route::Blog).unwrap().heading, "Latest Insights");
        assert_eq!(page_for(&Route::Contact).unwrap().tagline, "Get in touch with our team.");
        assert_eq!(page_for(&Route::NotFound("/docs".into())).unwrap().heading, "404");
        assert!(page_for(&Route::Dashboard).is_none());
        assert!(page_for(&Route::UserProfile).is_none());
    }

    #[test]
    fn test_text_lines_layout() {
        let lines = BLOG.text_lines();
        assert_eq!(
            lines,
            vec![
                TextLine::Heading("Latest Insights"),
                TextLine::Blank,
                TextLine::Tagline("Coming soon..."),
            ]
        );
    }

    #[test]
    fn test_section_offsets() {
        let lines = HOME.text_lines();
        let about = HOME.section_offset(HomeSection::About).unwrap();
        let pricing = HOME.section_offset(HomeSection::Pricing).unwrap();

        assert_eq!(lines[about], TextLine::SectionHeading("About"));
        assert_eq!(lines[pricing], TextLine::SectionHeading("Pricing"));
        assert!(about < pricing);
        assert!(BLOG.section_offset(HomeSection::About).is_none());
    }
}
