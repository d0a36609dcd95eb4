//! Static preference option catalog
//!
//! The three option lists shown by the onboarding wizard. They are fixed at
//! compile time; wizard state only ever stores ids from these lists.

/// Symbol shown on a preference card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Number3,
    Number6,
    Number9,
    Heart,
    Smile,
    Compass,
    Rocket,
    Mic,
    Speaker,
}

impl IconKind {
    /// Get the single-cell glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Number3 => "3",
            Self::Number6 => "6",
            Self::Number9 => "9",
            Self::Heart => "♥",
            Self::Smile => "☺",
            Self::Compass => "✦",
            Self::Rocket => "↟",
            Self::Mic => "♪",
            Self::Speaker => "♫",
        }
    }
}

/// One selectable entry in a preference list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceOption {
    /// Unique id within its list
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Optional card icon
    pub icon: Option<IconKind>,
}

/// Age range options
pub const AGE_RANGES: [PreferenceOption; 3] = [
    PreferenceOption {
        id: "3-5",
        label: "3 - 5岁",
        icon: Some(IconKind::Number3),
    },
    PreferenceOption {
        id: "6-8",
        label: "6 - 8岁",
        icon: Some(IconKind::Number6),
    },
    PreferenceOption {
        id: "9-12",
        label: "9 - 12岁",
        icon: Some(IconKind::Number9),
    },
];

/// Story style options (multi-select)
pub const STORY_STYLES: [PreferenceOption; 4] = [
    PreferenceOption {
        id: "warm",
        label: "温馨",
        icon: Some(IconKind::Heart),
    },
    PreferenceOption {
        id: "humor",
        label: "幽默",
        icon: Some(IconKind::Smile),
    },
    PreferenceOption {
        id: "adventure",
        label: "探险",
        icon: Some(IconKind::Compass),
    },
    PreferenceOption {
        id: "scifi",
        label: "科幻",
        icon: Some(IconKind::Rocket),
    },
];

/// Reading voice options
pub const VOICE_STYLES: [PreferenceOption; 2] = [
    PreferenceOption {
        id: "custom",
        label: "个性化声音",
        icon: Some(IconKind::Mic),
    },
    PreferenceOption {
        id: "default",
        label: "默认声音",
        icon: Some(IconKind::Speaker),
    },
];

/// The three preference categories, in wizard order
///
/// Each category maps to its option list and section title, so sections and
/// cards can be rendered from one implementation instead of three copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    Age,
    Story,
    Voice,
}

impl PreferenceKind {
    /// All categories in display order
    pub const ALL: [PreferenceKind; 3] = [Self::Age, Self::Story, Self::Voice];

    /// Get the option list for this category
    pub fn options(&self) -> &'static [PreferenceOption] {
        match self {
            Self::Age => &AGE_RANGES,
            Self::Story => &STORY_STYLES,
            Self::Voice => &VOICE_STYLES,
        }
    }

    /// Get the section title for this category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Age => "年龄段",
            Self::Story => "喜欢的故事风格",
            Self::Voice => "朗读声音",
        }
    }

    /// Whether this category allows multiple selections
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Story)
    }

    /// Look up an option by id
    pub fn find(&self, id: &str) -> Option<&'static PreferenceOption> {
        self.options().iter().find(|opt| opt.id == id)
    }
}
