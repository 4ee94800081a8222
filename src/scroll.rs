/// Distance below the viewport top at which a section counts as reached.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
/// Scroll depth past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    About,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section anchor.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Picks the section under `scroll_y + SECTION_LOOKAHEAD`.
///
/// Bounds are checked in the order given and the first one containing the
/// offset wins. `None` means no section matched and the caller should keep
/// whatever it highlighted before.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let offset = scroll_y + SECTION_LOOKAHEAD;
    bounds.iter().find(|b| b.contains(offset)).map(|b| b.section)
}

pub fn shows_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
