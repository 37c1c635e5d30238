//! Labor schema - field work recorded against a plot

use serde::{Deserialize, Serialize};

/// Kind of field labor performed on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaborKind {
    #[serde(rename = "SIEMBRA")]
    Sowing,
    #[serde(rename = "FERTILIZACION")]
    Fertilization,
    #[serde(rename = "RIEGO")]
    Irrigation,
    #[serde(rename = "COSECHA")]
    Harvest,
    /// Ploughing, harrowing and general soil work
    #[serde(rename = "MANTENIMIENTO")]
    Maintenance,
    #[serde(rename = "PODA")]
    Pruning,
    #[serde(rename = "CONTROL_PLAGAS")]
    PestControl,
    #[serde(rename = "CONTROL_MALEZAS")]
    WeedControl,
    #[serde(rename = "ANALISIS_SUELO")]
    SoilAnalysis,
    #[serde(rename = "OTROS")]
    Other,
}

impl LaborKind {
    pub const ALL: &'static [LaborKind] = &[
        LaborKind::Sowing,
        LaborKind::Fertilization,
        LaborKind::Irrigation,
        LaborKind::Harvest,
        LaborKind::Maintenance,
        LaborKind::Pruning,
        LaborKind::PestControl,
        LaborKind::WeedControl,
        LaborKind::SoilAnalysis,
        LaborKind::Other,
    ];

    /// Stored code of the labor kind.
    pub fn code(self) -> &'static str {
        match self {
            LaborKind::Sowing => "SIEMBRA",
            LaborKind::Fertilization => "FERTILIZACION",
            LaborKind::Irrigation => "RIEGO",
            LaborKind::Harvest => "COSECHA",
            LaborKind::Maintenance => "MANTENIMIENTO",
            LaborKind::Pruning => "PODA",
            LaborKind::PestControl => "CONTROL_PLAGAS",
            LaborKind::WeedControl => "CONTROL_MALEZAS",
            LaborKind::SoilAnalysis => "ANALISIS_SUELO",
            LaborKind::Other => "OTROS",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LaborKind::Sowing => "sowing",
            LaborKind::Fertilization => "fertilization",
            LaborKind::Irrigation => "irrigation",
            LaborKind::Harvest => "harvest",
            LaborKind::Maintenance => "maintenance",
            LaborKind::Pruning => "pruning",
            LaborKind::PestControl => "pest_control",
            LaborKind::WeedControl => "weed_control",
            LaborKind::SoilAnalysis => "soil_analysis",
            LaborKind::Other => "other",
        }
    }

    /// Pest and weed control count as treatments of a diseased crop.
    pub fn is_treatment(self) -> bool {
        matches!(self, LaborKind::PestControl | LaborKind::WeedControl)
    }
}

impl std::fmt::Display for LaborKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for LaborKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LaborKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.code().eq_ignore_ascii_case(wanted)
                    || kind.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("Unknown labor kind: {}", s))
    }
}

/// Completed labors on a plot, including the one just recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborHistory {
    #[serde(default)]
    pub completed: Vec<LaborKind>,
}

impl LaborHistory {
    pub fn new(completed: Vec<LaborKind>) -> Self {
        LaborHistory { completed }
    }

    /// Return a new history with one more completed labor
    pub fn with_completed(mut self, kind: LaborKind) -> Self {
        self.completed.push(kind);
        self
    }

    /// Number of completed labors of the given kind
    pub fn count(&self, kind: LaborKind) -> usize {
        self.completed.iter().filter(|&&k| k == kind).count()
    }

    /// Number of completed pest or weed control labors
    pub fn treatments(&self) -> usize {
        self.completed.iter().filter(|k| k.is_treatment()).count()
    }
}
