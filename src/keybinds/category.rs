//! Cheatsheet categories and the ordered rules that assign them

use std::fmt;

/// A cheatsheet section. The set is closed; every keybind lands in exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    System,
    IiShell,
    WindowSwitcher,
    RegionTools,
    Applications,
    WindowManagement,
    Focus,
    MoveWindows,
    Workspaces,
    Media,
    Brightness,
    Other,
}

impl Category {
    /// All categories in display priority order
    pub const ALL: [Category; 12] = [
        Category::System,
        Category::IiShell,
        Category::WindowSwitcher,
        Category::RegionTools,
        Category::Applications,
        Category::WindowManagement,
        Category::Focus,
        Category::MoveWindows,
        Category::Workspaces,
        Category::Media,
        Category::Brightness,
        Category::Other,
    ];

    /// Section title shown in the cheatsheet
    pub const fn name(self) -> &'static str {
        match self {
            Category::System => "System",
            Category::IiShell => "ii Shell",
            Category::WindowSwitcher => "Window Switcher",
            Category::RegionTools => "Region Tools",
            Category::Applications => "Applications",
            Category::WindowManagement => "Window Management",
            Category::Focus => "Focus",
            Category::MoveWindows => "Move Windows",
            Category::Workspaces => "Workspaces",
            Category::Media => "Media",
            Category::Brightness => "Brightness",
            Category::Other => "Other",
        }
    }

    /// Position in [`Category::ALL`]
    pub const fn priority(self) -> usize {
        self as usize
    }

    /// Look up a category by its section title
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A test over the lower-cased label and action of a keybind
#[derive(Debug, Clone, Copy)]
enum Predicate {
    LabelContainsAny(&'static [&'static str]),
    ActionContainsAny(&'static [&'static str]),
    AllOf(&'static [Predicate]),
    AnyOf(&'static [Predicate]),
    Not(&'static Predicate),
}

impl Predicate {
    fn matches(self, label: &str, action: &str) -> bool {
        match self {
            Predicate::LabelContainsAny(needles) => needles.iter().any(|n| label.contains(n)),
            Predicate::ActionContainsAny(needles) => needles.iter().any(|n| action.contains(n)),
            Predicate::AllOf(preds) => preds.iter().all(|p| p.matches(label, action)),
            Predicate::AnyOf(preds) => preds.iter().any(|p| p.matches(label, action)),
            Predicate::Not(pred) => !pred.matches(label, action),
        }
    }
}

use Predicate::{ActionContainsAny, AllOf, AnyOf, LabelContainsAny, Not};

const MENTIONS_WORKSPACE: Predicate = LabelContainsAny(&["workspace"]);

/// Category rules in priority order; the first match wins
const CATEGORY_RULES: &[(Predicate, Category)] = &[
    (
        LabelContainsAny(&["niri overview", "quit", "inhibit", "power off"]),
        Category::System,
    ),
    (
        LabelContainsAny(&[
            "ii ",
            "clipboard",
            "lock",
            "wallpaper",
            "settings",
            "cheatsheet",
            "panel",
        ]),
        Category::IiShell,
    ),
    (
        AllOf(&[
            LabelContainsAny(&["window"]),
            LabelContainsAny(&["next", "previous"]),
        ]),
        Category::WindowSwitcher,
    ),
    (
        LabelContainsAny(&["screenshot", "ocr", "image search"]),
        Category::RegionTools,
    ),
    (
        AnyOf(&[
            LabelContainsAny(&["terminal", "file manager"]),
            ActionContainsAny(&["foot", "dolphin", "nautilus"]),
        ]),
        Category::Applications,
    ),
    (
        LabelContainsAny(&["close", "maximize", "fullscreen", "floating"]),
        Category::WindowManagement,
    ),
    (
        ActionContainsAny(&["close-window"]),
        Category::WindowManagement,
    ),
    (
        AllOf(&[LabelContainsAny(&["focus"]), Not(&MENTIONS_WORKSPACE)]),
        Category::Focus,
    ),
    (
        AllOf(&[LabelContainsAny(&["move"]), Not(&MENTIONS_WORKSPACE)]),
        Category::MoveWindows,
    ),
    (MENTIONS_WORKSPACE, Category::Workspaces),
    (
        LabelContainsAny(&["volume", "mute", "audio"]),
        Category::Media,
    ),
    (LabelContainsAny(&["brightness"]), Category::Brightness),
];

/// Pick the category for a keybind from its label and raw action
///
/// Both inputs are lower-cased before matching. Anything no rule claims is
/// [`Category::Other`].
pub fn categorize(label: &str, action: &str) -> Category {
    let label = label.to_lowercase();
    let action = action.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(pred, _)| pred.matches(&label, &action))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
