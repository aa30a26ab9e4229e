//! Canonical body taxonomy.
//!
//! Every component of the pipeline (classifier, scorer, differential
//! calculator, hook selector) consults this single table for body class,
//! tier and role predicates, so multiplier and cap values cannot drift
//! between passes.

use serde::{Deserialize, Serialize};

/// A reference point participating in an aspect.
///
/// Unknown names are preserved in [`Body::Other`] and receive neutral
/// defaults everywhere; they are never a hard error.
///
/// # Example
///
/// ```
/// use seismograph_core::bodies::{Body, BodyClass};
///
/// assert_eq!(Body::parse("Moon"), Body::Moon);
/// assert_eq!(Body::parse("Medium_Coeli"), Body::MediumCoeli);
/// assert_eq!(Body::Moon.class(), BodyClass::Luminary);
/// assert_eq!(Body::parse("Vesta").class(), BodyClass::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    MeanNode,
    TrueNode,
    MeanSouthNode,
    TrueSouthNode,
    MeanLilith,
    Ascendant,
    MediumCoeli,
    Descendant,
    ImumCoeli,
    /// Anything the table does not know. Carries the original label.
    Other(String),
}

/// Broad classification used for orb caps and sensitivity boosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    Luminary,
    Personal,
    Social,
    Outer,
    Angle,
    Point,
    Other,
}

impl Body {
    /// Parse a body label, accepting the common chart-provider spellings.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "Sun" => Body::Sun,
            "Moon" => Body::Moon,
            "Mercury" => Body::Mercury,
            "Venus" => Body::Venus,
            "Mars" => Body::Mars,
            "Jupiter" => Body::Jupiter,
            "Saturn" => Body::Saturn,
            "Uranus" => Body::Uranus,
            "Neptune" => Body::Neptune,
            "Pluto" => Body::Pluto,
            "Chiron" => Body::Chiron,
            "Mean_Node" | "MeanNode" => Body::MeanNode,
            "True_Node" | "TrueNode" => Body::TrueNode,
            "Mean_South_Node" | "MeanSouthNode" => Body::MeanSouthNode,
            "True_South_Node" | "TrueSouthNode" => Body::TrueSouthNode,
            "Mean_Lilith" | "Lilith" => Body::MeanLilith,
            "Ascendant" | "ASC" | "Asc" => Body::Ascendant,
            "Medium_Coeli" | "MC" => Body::MediumCoeli,
            "Descendant" | "DSC" | "Dsc" => Body::Descendant,
            "Imum_Coeli" | "IC" => Body::ImumCoeli,
            other => Body::Other(other.to_string()),
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Chiron => "Chiron",
            Body::MeanNode => "Mean_Node",
            Body::TrueNode => "True_Node",
            Body::MeanSouthNode => "Mean_South_Node",
            Body::TrueSouthNode => "True_South_Node",
            Body::MeanLilith => "Mean_Lilith",
            Body::Ascendant => "Ascendant",
            Body::MediumCoeli => "Medium_Coeli",
            Body::Descendant => "Descendant",
            Body::ImumCoeli => "Imum_Coeli",
            Body::Other(name) => name,
        }
    }

    /// Broad body class.
    pub fn class(&self) -> BodyClass {
        match self {
            Body::Sun | Body::Moon => BodyClass::Luminary,
            Body::Mercury | Body::Venus | Body::Mars => BodyClass::Personal,
            Body::Jupiter | Body::Saturn => BodyClass::Social,
            Body::Uranus | Body::Neptune | Body::Pluto => BodyClass::Outer,
            Body::Ascendant | Body::MediumCoeli | Body::Descendant | Body::ImumCoeli => {
                BodyClass::Angle
            }
            Body::Chiron
            | Body::MeanNode
            | Body::TrueNode
            | Body::MeanSouthNode
            | Body::TrueSouthNode
            | Body::MeanLilith => BodyClass::Point,
            Body::Other(_) => BodyClass::Other,
        }
    }

    /// Scoring tier multiplier. Slow outer bodies carry the most weight,
    /// the Moon the least; unknown bodies stay neutral at 1.0.
    pub fn tier(&self) -> f64 {
        if self.is_outer_slow() {
            1.5
        } else if *self == Body::Chiron {
            1.2
        } else if *self == Body::Moon {
            0.5
        } else {
            1.0
        }
    }

    /// Slow-moving bodies whose contacts dominate a day.
    pub fn is_outer_slow(&self) -> bool {
        matches!(self, Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto)
    }

    /// Fast personal bodies (tight-cap targets for slow transits).
    pub fn is_personal_fast(&self) -> bool {
        matches!(
            self,
            Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars
        )
    }

    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    pub fn is_angle(&self) -> bool {
        self.class() == BodyClass::Angle
    }

    /// Primary reference points anchor hook selection and are subject to
    /// the overload guard.
    pub fn is_primary(&self) -> bool {
        self.is_luminary() || self.is_angle()
    }

    pub fn is_benefic(&self) -> bool {
        matches!(self, Body::Venus | Body::Jupiter)
    }

    pub fn is_heavy(&self) -> bool {
        matches!(self, Body::Saturn | Body::Pluto | Body::Chiron)
    }

    /// Bodies eligible for a return contact to themselves
    /// (conjunction or opposition). Angles and derived points never return.
    pub fn is_return_eligible(&self) -> bool {
        matches!(
            self,
            Body::Sun
                | Body::Moon
                | Body::Mercury
                | Body::Venus
                | Body::Mars
                | Body::Jupiter
                | Body::Saturn
                | Body::Uranus
                | Body::Neptune
                | Body::Pluto
                | Body::Chiron
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_bodies() {
        assert_eq!(Body::parse("Sun"), Body::Sun);
        assert_eq!(Body::parse("ASC"), Body::Ascendant);
        assert_eq!(Body::parse("MC"), Body::MediumCoeli);
        assert_eq!(Body::parse("Mean_Node"), Body::MeanNode);
    }

    #[test]
    fn test_parse_unknown_body_is_preserved() {
        let body = Body::parse("Vesta");
        assert_eq!(body, Body::Other("Vesta".to_string()));
        assert_eq!(body.name(), "Vesta");
        assert_eq!(body.class(), BodyClass::Other);
        assert_eq!(body.tier(), 1.0);
    }

    #[test]
    fn test_classes() {
        assert_eq!(Body::Moon.class(), BodyClass::Luminary);
        assert_eq!(Body::Mars.class(), BodyClass::Personal);
        assert_eq!(Body::Saturn.class(), BodyClass::Social);
        assert_eq!(Body::Pluto.class(), BodyClass::Outer);
        assert_eq!(Body::ImumCoeli.class(), BodyClass::Angle);
        assert_eq!(Body::Chiron.class(), BodyClass::Point);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Body::Pluto.tier(), 1.5);
        assert_eq!(Body::Saturn.tier(), 1.5);
        assert_eq!(Body::Chiron.tier(), 1.2);
        assert_eq!(Body::Moon.tier(), 0.5);
        assert_eq!(Body::Venus.tier(), 1.0);
    }

    #[test]
    fn test_roles() {
        assert!(Body::Venus.is_benefic());
        assert!(Body::Jupiter.is_benefic());
        assert!(Body::Saturn.is_heavy());
        assert!(!Body::Uranus.is_heavy());
        assert!(Body::Ascendant.is_primary());
        assert!(Body::Sun.is_primary());
        assert!(!Body::Mercury.is_primary());
    }

    #[test]
    fn test_return_eligibility() {
        assert!(Body::Saturn.is_return_eligible());
        assert!(!Body::Ascendant.is_return_eligible());
        assert!(!Body::MeanNode.is_return_eligible());
    }
}
