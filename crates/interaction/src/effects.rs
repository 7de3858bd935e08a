//! Cosmetic page behaviours. Each one owns its own state, so two pages open
//! side by side never share a scroll position or a menu flag.

pub const SCROLL_OFFSET: f64 = 20.0;
pub const HEADER_FADE_AFTER: f64 = 100.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Where a smooth scroll to an in-page anchor should land.
pub fn smooth_scroll_target(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height - SCROLL_OFFSET).max(0.0)
}

/// Attributes to set on a clicked link that leaves the site.
pub fn external_link_attrs(
    link_host: &str,
    page_host: &str,
) -> Option<[(&'static str, &'static str); 2]> {
    if link_host == page_host {
        return None;
    }

    Some([("target", "_blank"), ("rel", "noopener noreferrer")])
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a nav link closes the mobile menu.
    pub fn on_link_click(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background_color: &'static str,
    pub backdrop_filter: &'static str,
}

impl HeaderStyle {
    pub const SOLID: Self = Self {
        background_color: "var(--white)",
        backdrop_filter: "none",
    };

    pub const TRANSLUCENT: Self = Self {
        background_color: "rgba(255, 255, 255, 0.95)",
        backdrop_filter: "blur(10px)",
    };
}

/// Fades the header while the visitor scrolls down the page.
#[derive(Debug, Default, Clone)]
pub struct HeaderEffect {
    last_scroll_top: f64,
}

impl HeaderEffect {
    pub fn on_scroll(&mut self, scroll_top: f64) -> HeaderStyle {
        let style = if scroll_top > self.last_scroll_top && scroll_top > HEADER_FADE_AFTER {
            HeaderStyle::TRANSLUCENT
        } else {
            HeaderStyle::SOLID
        };

        self.last_scroll_top = scroll_top;
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

/// Slide-in animation for cards, profile cards and process steps. Once
/// shown an element stays shown.
#[derive(Debug, Default, Clone)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    pub const TRANSITION: &'static str = "opacity 0.6s ease, transform 0.6s ease";

    pub fn on_intersect(&mut self, ratio: f64) -> RevealStyle {
        if ratio >= REVEAL_THRESHOLD {
            self.shown = true;
        }

        self.style()
    }

    pub fn style(&self) -> RevealStyle {
        if self.shown {
            RevealStyle {
                opacity: "1",
                transform: "translateY(0)",
            }
        } else {
            RevealStyle {
                opacity: "0",
                transform: "translateY(30px)",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(smooth_scroll_target(500.0, 80.0), 400.0);
        assert_eq!(smooth_scroll_target(50.0, 80.0), 0.0);
    }

    #[test]
    fn only_foreign_links_open_in_new_tab() {
        assert_eq!(external_link_attrs("careweave.jp", "careweave.jp"), None);

        let attrs = external_link_attrs("fonts.googleapis.com", "careweave.jp").unwrap();
        assert_eq!(attrs[0], ("target", "_blank"));
        assert_eq!(attrs[1], ("rel", "noopener noreferrer"));
    }

    #[test]
    fn menu_toggles_and_closes_on_link() {
        let mut menu = MenuToggle::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.on_link_click();
        assert!(!menu.is_open());
        menu.on_link_click();
        assert!(!menu.is_open());
    }

    #[test]
    fn header_fades_only_when_scrolling_down_past_threshold() {
        let mut header = HeaderEffect::default();

        assert_eq!(header.on_scroll(50.0), HeaderStyle::SOLID);
        assert_eq!(header.on_scroll(150.0), HeaderStyle::TRANSLUCENT);
        assert_eq!(header.on_scroll(300.0), HeaderStyle::TRANSLUCENT);
        assert_eq!(header.on_scroll(250.0), HeaderStyle::SOLID);
    }

    #[test]
    fn header_state_is_per_instance() {
        let mut first = HeaderEffect::default();
        let mut second = HeaderEffect::default();

        first.on_scroll(400.0);
        assert_eq!(second.on_scroll(200.0), HeaderStyle::TRANSLUCENT);
        assert_eq!(first.on_scroll(200.0), HeaderStyle::SOLID);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.style().opacity, "0");
        assert_eq!(reveal.on_intersect(0.05).opacity, "0");
        assert_eq!(reveal.on_intersect(0.1).opacity, "1");
        assert_eq!(reveal.on_intersect(0.0).transform, "translateY(0)");
    }
}
