//! Boss phases.
//!
//! A boss-tier enemy moves through an ordered list of phases as its health
//! drops. Each phase covers the health fractions from its own threshold down
//! to (but excluding) the next phase's threshold; the last phase extends to
//! zero. Phases may scale enemy damage and XP, and may disable hints.

/// One behavioral stage of a boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossPhase {
    pub name: String,
    pub description: String,
    /// Upper bound of the health fraction this phase covers, in `(0, 1]`.
    pub hp_threshold: f64,
    #[cfg_attr(feature = "serde", serde(default = "unit_multiplier"))]
    pub damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default = "unit_multiplier"))]
    pub xp_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hints_disabled: bool,
}

#[cfg(feature = "serde")]
fn unit_multiplier() -> f64 {
    1.0
}

impl BossPhase {
    pub fn new(name: impl Into<String>, description: impl Into<String>, hp_threshold: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hp_threshold,
            damage_multiplier: 1.0,
            xp_multiplier: 1.0,
            hints_disabled: false,
        }
    }

    #[must_use]
    pub fn with_damage_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_xp_multiplier(mut self, multiplier: f64) -> Self {
        self.xp_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn without_hints(mut self) -> Self {
        self.hints_disabled = true;
        self
    }
}

/// Index of the phase covering `hp_fraction`.
///
/// `phases` must be ordered by descending threshold. Fractions above the
/// first threshold (or NaN) map to the first phase. Returns `None` only for
/// an empty list.
pub fn phase_index(phases: &[BossPhase], hp_fraction: f64) -> Option<usize> {
    if phases.is_empty() {
        return None;
    }
    Some(
        phases
            .iter()
            .rposition(|phase| hp_fraction <= phase.hp_threshold)
            .unwrap_or(0),
    )
}

/// The single phase covering `hp_fraction`.
pub fn current_phase(phases: &[BossPhase], hp_fraction: f64) -> Option<&BossPhase> {
    phase_index(phases, hp_fraction).map(|index| &phases[index])
}

/// Whether the phase differs between two health fractions.
pub fn has_phase_changed(phases: &[BossPhase], prev_fraction: f64, new_fraction: f64) -> bool {
    phase_index(phases, prev_fraction) != phase_index(phases, new_fraction)
}
