//! Static CliftonStrengths taxonomy: the 34 themes, their four domains,
//! the fixed angular ordering used by every starburst chart, and the
//! per-domain display colors.

use plotters::style::RGBColor;

/// One of the four CliftonStrengths domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    StrategicThinking,
    RelationshipBuilding,
    Influencing,
    Executing,
}

impl Domain {
    /// Fixed display order for chart layers and the legend.
    pub const ALL: [Domain; 4] = [
        Domain::StrategicThinking,
        Domain::RelationshipBuilding,
        Domain::Influencing,
        Domain::Executing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Domain::StrategicThinking => "Strategic Thinking",
            Domain::RelationshipBuilding => "Relationship Building",
            Domain::Influencing => "Influencing",
            Domain::Executing => "Executing",
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            Domain::StrategicThinking => RGBColor(0, 128, 0),
            Domain::RelationshipBuilding => RGBColor(0, 0, 255),
            Domain::Influencing => RGBColor(255, 165, 0),
            Domain::Executing => RGBColor(128, 0, 128),
        }
    }

    /// Angular slots belonging to this domain, in chart order.
    pub fn slots(self) -> impl Iterator<Item = usize> {
        THEME_TABLE
            .iter()
            .enumerate()
            .filter(move |(_, (_, d))| *d == self)
            .map(|(i, _)| i)
    }

    /// Member themes (inverse index over the static table).
    pub fn themes(self) -> impl Iterator<Item = &'static str> {
        self.slots().map(theme_name)
    }
}

/// Number of themes in the assessment. Every chart reserves exactly this
/// many angular slots, whether or not a theme has data.
pub const THEME_COUNT: usize = 34;

/// The full theme table in fixed angular order. This order defines the
/// sector position of each theme on every chart, so charts for different
/// subsets stay visually aligned.
static THEME_TABLE: [(&str, Domain); THEME_COUNT] = [
    ("Adaptability", Domain::RelationshipBuilding),
    ("Connectedness", Domain::RelationshipBuilding),
    ("Developer", Domain::RelationshipBuilding),
    ("Empathy", Domain::RelationshipBuilding),
    ("Harmony", Domain::RelationshipBuilding),
    ("Includer", Domain::RelationshipBuilding),
    ("Individualization", Domain::RelationshipBuilding),
    ("Positivity", Domain::RelationshipBuilding),
    ("Relator", Domain::RelationshipBuilding),
    ("Activator", Domain::Influencing),
    ("Command", Domain::Influencing),
    ("Communication", Domain::Influencing),
    ("Competition", Domain::Influencing),
    ("Maximizer", Domain::Influencing),
    ("Self-Assurance", Domain::Influencing),
    ("Significance", Domain::Influencing),
    ("Woo", Domain::Influencing),
    ("Analytical", Domain::StrategicThinking),
    ("Context", Domain::StrategicThinking),
    ("Futuristic", Domain::StrategicThinking),
    ("Ideation", Domain::StrategicThinking),
    ("Input", Domain::StrategicThinking),
    ("Intellection", Domain::StrategicThinking),
    ("Learner", Domain::StrategicThinking),
    ("Strategic", Domain::StrategicThinking),
    ("Achiever", Domain::Executing),
    ("Arranger", Domain::Executing),
    ("Belief", Domain::Executing),
    ("Consistency", Domain::Executing),
    ("Deliberative", Domain::Executing),
    ("Discipline", Domain::Executing),
    ("Focus", Domain::Executing),
    ("Responsibility", Domain::Executing),
    ("Restorative", Domain::Executing),
];

/// Angular slot of a theme name, or `None` if the name is not in the
/// taxonomy. An absent name is a data-integrity error in the input, not a
/// normal control path; callers surface it instead of dropping the record.
pub fn slot_of(name: &str) -> Option<usize> {
    THEME_TABLE.iter().position(|(t, _)| *t == name)
}

pub fn domain_of(name: &str) -> Option<Domain> {
    slot_of(name).map(domain_of_slot)
}

pub fn theme_name(slot: usize) -> &'static str {
    THEME_TABLE[slot].0
}

pub fn domain_of_slot(slot: usize) -> Domain {
    THEME_TABLE[slot].1
}
