/// One of the six Hofstede cultural dimensions.
///
/// Ordering contract: `ALL` lists dimensions in the canonical column order
/// of the source dataset (`pdi, idv, mas, uai, lto, ivr`), and `index` is
/// the position in `ALL`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    PowerDistance,
    Individualism,
    Masculinity,
    UncertaintyAvoidance,
    LongTermOrientation,
    Indulgence,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::PowerDistance,
        Dimension::Individualism,
        Dimension::Masculinity,
        Dimension::UncertaintyAvoidance,
        Dimension::LongTermOrientation,
        Dimension::Indulgence,
    ];

    /// Two/three-letter column code used by the dataset header.
    pub fn code(self) -> &'static str {
        match self {
            Dimension::PowerDistance => "pdi",
            Dimension::Individualism => "idv",
            Dimension::Masculinity => "mas",
            Dimension::UncertaintyAvoidance => "uai",
            Dimension::LongTermOrientation => "lto",
            Dimension::Indulgence => "ivr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Dimension::ALL.iter().copied().find(|d| d.code() == code)
    }

    pub fn index(self) -> usize {
        match self {
            Dimension::PowerDistance => 0,
            Dimension::Individualism => 1,
            Dimension::Masculinity => 2,
            Dimension::UncertaintyAvoidance => 3,
            Dimension::LongTermOrientation => 4,
            Dimension::Indulgence => 5,
        }
    }

    /// Formal index name, used in the comparison table.
    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::PowerDistance => "Power Distance Index",
            Dimension::Individualism => "Individualism vs Collectivism",
            Dimension::Masculinity => "Masculinity vs Femininity",
            Dimension::UncertaintyAvoidance => "Uncertainty Avoidance Index",
            Dimension::LongTermOrientation => "Long-term vs Short-term Orientation",
            Dimension::Indulgence => "Indulgence vs Restraint",
        }
    }

    /// Plain-language name, used on cluster profile cards.
    pub fn friendly_name(self) -> &'static str {
        match self {
            Dimension::PowerDistance => "Authority Respect",
            Dimension::Individualism => "Individual Focus",
            Dimension::Masculinity => "Achievement Drive",
            Dimension::UncertaintyAvoidance => "Stability Preference",
            Dimension::LongTermOrientation => "Time Perspective",
            Dimension::Indulgence => "Life Enjoyment",
        }
    }

    /// Label for the low end of the 0-100 scale.
    pub fn low_label(self) -> &'static str {
        match self {
            Dimension::PowerDistance => "Everyone Equal",
            Dimension::Individualism => "Group First",
            Dimension::Masculinity => "Care & Quality",
            Dimension::UncertaintyAvoidance => "Embrace Change",
            Dimension::LongTermOrientation => "Respect Tradition",
            Dimension::Indulgence => "Self-Control",
        }
    }

    /// Label for the high end of the 0-100 scale.
    pub fn high_label(self) -> &'static str {
        match self {
            Dimension::PowerDistance => "Respect Authority",
            Dimension::Individualism => "Self-Reliant",
            Dimension::Masculinity => "Compete & Win",
            Dimension::UncertaintyAvoidance => "Prefer Stability",
            Dimension::LongTermOrientation => "Plan Ahead",
            Dimension::Indulgence => "Enjoy Life",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::PowerDistance => {
                "How much people accept hierarchy and unequal power distribution"
            }
            Dimension::Individualism => {
                "Whether people focus on personal goals or group harmony"
            }
            Dimension::Masculinity => {
                "How much society values competition and material success"
            }
            Dimension::UncertaintyAvoidance => {
                "How comfortable people are with uncertainty and change"
            }
            Dimension::LongTermOrientation => {
                "Whether society focuses on future planning or present traditions"
            }
            Dimension::Indulgence => {
                "How much society allows free expression of emotions and desires"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dimension;

    #[test]
    fn codes_round_trip() {
        for d in Dimension::ALL {
            assert_eq!(Dimension::from_code(d.code()), Some(d));
        }
        assert_eq!(Dimension::from_code("xyz"), None);
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, d) in Dimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }
}
