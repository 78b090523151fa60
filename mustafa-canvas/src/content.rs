//! Static page copy and the section catalogue.

pub(crate) const BRAND_NAME: &str = "Mustafa Canvas";
pub(crate) const BRAND_INITIAL: &str = "M";

/// Anchorable sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum SectionId {
    Hero,
    About,
    Gallery,
    Contact,
}

impl SectionId {
    pub(crate) const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Anchor name without the leading `#`.
    pub(crate) fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub(crate) fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolve an anchor such as `#gallery` or `gallery`.
    #[cfg(test)]
    pub(crate) fn from_anchor(anchor: &str) -> Option<Self> {
        let name = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|section| section.anchor() == name)
    }
}

// Hero
pub(crate) const HERO_TITLE_LEAD: &str = "Elevate Your Space with ";
pub(crate) const HERO_TITLE_ACCENT: &str = "Premium Canvas Art";
pub(crate) const HERO_SUBTITLE: &str = "Discover unique and handcrafted canvas \
     art that transforms your environment with elegance and style.";
pub(crate) const HERO_CTA: &str = "Explore Gallery";

// About
pub(crate) const ABOUT_TITLE: &str = "About Us";
pub(crate) const ABOUT_PARAGRAPHS: [&str; 2] = [
    "At Mustafa Canvas, we create custom canvas art with passion and \
     precision to transform your space. Our team of talented artists brings \
     your vision to life with meticulous attention to detail.",
    "Founded in 2018, we've helped hundreds of clients find the perfect \
     artistic expression for their homes and offices. Each piece is \
     handcrafted with premium materials to ensure lasting beauty.",
];

/// A named image reference resolved against the assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImageAsset {
    pub(crate) path: &'static str,
    pub(crate) alt: &'static str,
}

pub(crate) const LOGO_MARK: ImageAsset = ImageAsset {
    path: "images/logo.png",
    alt: BRAND_NAME,
};

pub(crate) const ARTIST_PHOTO: ImageAsset = ImageAsset {
    path: "images/artist.png",
    alt: "Artist at work",
};

// Gallery
pub(crate) const GALLERY_TITLE: &str = "Our Gallery";

/// One canvas style shown in the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GalleryItem {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) image: ImageAsset,
}

impl GalleryItem {
    /// Card title, e.g. `"Abstract Canvas"`.
    pub(crate) fn title(&self) -> String {
        format!("{} Canvas", self.name)
    }
}

pub(crate) const GALLERY: [GalleryItem; 6] = [
    GalleryItem {
        name: "Abstract",
        description: "Bold colors and forms",
        image: ImageAsset {
            path: "images/gallery/abstract.png",
            alt: "Abstract",
        },
    },
    GalleryItem {
        name: "Landscape",
        description: "Serene natural beauty",
        image: ImageAsset {
            path: "images/gallery/landscape.png",
            alt: "Landscape",
        },
    },
    GalleryItem {
        name: "Modern",
        description: "Contemporary elegance",
        image: ImageAsset {
            path: "images/gallery/modern.png",
            alt: "Modern",
        },
    },
    GalleryItem {
        name: "Vintage",
        description: "Timeless classics",
        image: ImageAsset {
            path: "images/gallery/vintage.png",
            alt: "Vintage",
        },
    },
    GalleryItem {
        name: "Pop Art",
        description: "Vibrant and playful",
        image: ImageAsset {
            path: "images/gallery/pop-art.png",
            alt: "Pop Art",
        },
    },
    GalleryItem {
        name: "Minimal",
        description: "Simple sophistication",
        image: ImageAsset {
            path: "images/gallery/minimal.png",
            alt: "Minimal",
        },
    },
];

// Contact
pub(crate) const CONTACT_TITLE: &str = "Contact Us";
pub(crate) const CONTACT_LEAD: &str = "Get In Touch";
pub(crate) const CONTACT_BLURB: &str = "For inquiries or commissions, reach \
     out to us. We'd love to hear about your project.";

/// A labelled contact detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContactDetail {
    pub(crate) label: &'static str,
    pub(crate) value: &'static str,
    /// URI handed to the desktop opener, when the detail is actionable.
    pub(crate) href: Option<&'static str>,
}

pub(crate) const EMAIL: ContactDetail = ContactDetail {
    label: "Email",
    value: "info@mustafacanvas.com",
    href: Some("mailto:info@mustafacanvas.com"),
};
pub(crate) const PHONE: ContactDetail = ContactDetail {
    label: "Phone",
    value: "(123) 456-7890",
    href: Some("tel:+1234567890"),
};
pub(crate) const LOCATION: ContactDetail = ContactDetail {
    label: "Location",
    value: "Art District, Creative City",
    href: None,
};
pub(crate) const CONTACT_DETAILS: [ContactDetail; 3] = [EMAIL, PHONE, LOCATION];

// Footer
pub(crate) const FOOTER_BLURB: &str = "Creating beautiful canvas art to \
     transform your space since 2018. We specialize in custom, handcrafted \
     pieces that bring life and personality to any environment.";
pub(crate) const QUICK_LINKS_TITLE: &str = "Quick Links";
pub(crate) const HOURS_TITLE: &str = "Business Hours";
pub(crate) const BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 9am - 6pm",
    "Saturday: 10am - 4pm",
    "Sunday: Closed",
];

/// A social profile listed in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SocialLink {
    pub(crate) name: &'static str,
    pub(crate) url: &'static str,
}

pub(crate) const SOCIAL_TITLE: &str = "Follow Us";
pub(crate) const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com/mustafacanvas",
    },
    SocialLink {
        name: "Facebook",
        url: "https://facebook.com/mustafacanvas",
    },
    SocialLink {
        name: "Pinterest",
        url: "https://pinterest.com/mustafacanvas",
    },
];

/// Copyright line for the given year.
pub(crate) fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::{GALLERY, SectionId, copyright_line};

    #[test]
    fn given_anchor_with_or_without_hash_when_resolved_then_matches_section()
    {
        assert_eq!(SectionId::from_anchor("#gallery"), Some(SectionId::Gallery));
        assert_eq!(SectionId::from_anchor("contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_anchor("#pricing"), None);
    }

    #[test]
    fn given_all_sections_when_listed_then_anchors_are_unique_and_ordered() {
        let anchors: Vec<&str> =
            SectionId::ALL.iter().map(|section| section.anchor()).collect();
        assert_eq!(anchors, vec!["hero", "about", "gallery", "contact"]);

        let mut sorted = SectionId::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL.to_vec());
    }

    #[test]
    fn given_gallery_when_listed_then_six_titles_in_declared_order() {
        let titles: Vec<String> = GALLERY.iter().map(|item| item.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Abstract Canvas",
                "Landscape Canvas",
                "Modern Canvas",
                "Vintage Canvas",
                "Pop Art Canvas",
                "Minimal Canvas",
            ]
        );
        assert!(GALLERY.iter().all(|item| !item.description.is_empty()));
    }

    #[test]
    fn given_year_when_copyright_line_then_formats_brand() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Mustafa Canvas. All rights reserved."
        );
    }
}
