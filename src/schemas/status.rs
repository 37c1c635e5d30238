//! Plot status schema - the closed catalog of lifecycle statuses

use serde::{Deserialize, Serialize};

/// Lifecycle status of a cultivation plot.
///
/// Wire codes are the codes stored by the farm-management database
/// (`DISPONIBLE`, `EN_CRECIMIENTO`, ...). Declaration order is the canonical
/// catalog order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum PlotStatus {
    /// Free to start a new crop cycle
    #[default]
    #[serde(rename = "DISPONIBLE")]
    Available,
    /// Soil prepared, ready for sowing
    #[serde(rename = "PREPARADO")]
    Prepared,
    /// Crop sown, early development
    #[serde(rename = "SEMBRADO")]
    Sown,
    /// Vegetative growth
    #[serde(rename = "EN_CRECIMIENTO")]
    Growing,
    #[serde(rename = "EN_FLORACION")]
    Flowering,
    #[serde(rename = "EN_FRUTIFICACION")]
    Fruiting,
    #[serde(rename = "LISTO_PARA_COSECHA")]
    ReadyToHarvest,
    #[serde(rename = "EN_COSECHA")]
    Harvesting,
    #[serde(rename = "COSECHADO")]
    Harvested,
    /// Post-harvest rest period
    #[serde(rename = "EN_DESCANSO")]
    Resting,
    /// Being prepared for a new cycle
    #[serde(rename = "EN_PREPARACION")]
    InPreparation,
    /// Crop with health problems or pests
    #[serde(rename = "ENFERMO")]
    Diseased,
    /// Temporarily abandoned
    #[serde(rename = "ABANDONADO")]
    Abandoned,
}

impl PlotStatus {
    /// Stored code of the status, identical to its serde representation.
    pub fn code(self) -> &'static str {
        match self {
            PlotStatus::Available => "DISPONIBLE",
            PlotStatus::Prepared => "PREPARADO",
            PlotStatus::Sown => "SEMBRADO",
            PlotStatus::Growing => "EN_CRECIMIENTO",
            PlotStatus::Flowering => "EN_FLORACION",
            PlotStatus::Fruiting => "EN_FRUTIFICACION",
            PlotStatus::ReadyToHarvest => "LISTO_PARA_COSECHA",
            PlotStatus::Harvesting => "EN_COSECHA",
            PlotStatus::Harvested => "COSECHADO",
            PlotStatus::Resting => "EN_DESCANSO",
            PlotStatus::InPreparation => "EN_PREPARACION",
            PlotStatus::Diseased => "ENFERMO",
            PlotStatus::Abandoned => "ABANDONADO",
        }
    }

    /// snake_case name of the variant, accepted by `FromStr` alongside the code.
    pub fn name(self) -> &'static str {
        match self {
            PlotStatus::Available => "available",
            PlotStatus::Prepared => "prepared",
            PlotStatus::Sown => "sown",
            PlotStatus::Growing => "growing",
            PlotStatus::Flowering => "flowering",
            PlotStatus::Fruiting => "fruiting",
            PlotStatus::ReadyToHarvest => "ready_to_harvest",
            PlotStatus::Harvesting => "harvesting",
            PlotStatus::Harvested => "harvested",
            PlotStatus::Resting => "resting",
            PlotStatus::InPreparation => "in_preparation",
            PlotStatus::Diseased => "diseased",
            PlotStatus::Abandoned => "abandoned",
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            PlotStatus::Available => "Available for sowing",
            PlotStatus::Prepared => "Prepared for sowing",
            PlotStatus::Sown => "Crop sown",
            PlotStatus::Growing => "Crop growing",
            PlotStatus::Flowering => "Crop flowering",
            PlotStatus::Fruiting => "Crop fruiting",
            PlotStatus::ReadyToHarvest => "Ready to harvest",
            PlotStatus::Harvesting => "Harvest in progress",
            PlotStatus::Harvested => "Harvest completed",
            PlotStatus::Resting => "Plot resting",
            PlotStatus::InPreparation => "Preparing for new cycle",
            PlotStatus::Diseased => "Crop with problems",
            PlotStatus::Abandoned => "Plot abandoned",
        }
    }

    /// Long-form description.
    pub fn detail(self) -> &'static str {
        match self {
            PlotStatus::Available => "The plot is available to start a new crop cycle",
            PlotStatus::Prepared => "The plot has been prepared and is ready for sowing",
            PlotStatus::Sown => "The plot has a sown crop in early development",
            PlotStatus::Growing => "The crop is in its vegetative growth phase",
            PlotStatus::Flowering => "The crop is in its flowering phase",
            PlotStatus::Fruiting => "The crop is in its fruiting phase",
            PlotStatus::ReadyToHarvest => "The crop is ready to be harvested",
            PlotStatus::Harvesting => "The harvest is being carried out",
            PlotStatus::Harvested => "The harvest has been completed successfully",
            PlotStatus::Resting => "The plot is resting after the harvest",
            PlotStatus::InPreparation => "The plot is being prepared for a new cycle",
            PlotStatus::Diseased => "The crop shows health problems or pests",
            PlotStatus::Abandoned => "The plot has been temporarily abandoned",
        }
    }

    /// Whether a crop may be sown from this status.
    pub fn is_sowable(self) -> bool {
        match self {
            PlotStatus::Available | PlotStatus::Prepared | PlotStatus::InPreparation => true,
            PlotStatus::Sown
            | PlotStatus::Growing
            | PlotStatus::Flowering
            | PlotStatus::Fruiting
            | PlotStatus::ReadyToHarvest
            | PlotStatus::Harvesting
            | PlotStatus::Harvested
            | PlotStatus::Resting
            | PlotStatus::Diseased
            | PlotStatus::Abandoned => false,
        }
    }

    /// Whether the plot may be harvested from this status.
    ///
    /// Includes the early phases: an early harvest after problems, or a
    /// conversion to forage, is allowed from any growing phase.
    pub fn is_harvestable(self) -> bool {
        match self {
            PlotStatus::Sown
            | PlotStatus::Growing
            | PlotStatus::Flowering
            | PlotStatus::Fruiting
            | PlotStatus::ReadyToHarvest => true,
            PlotStatus::Available
            | PlotStatus::Prepared
            | PlotStatus::Harvesting
            | PlotStatus::Harvested
            | PlotStatus::Resting
            | PlotStatus::InPreparation
            | PlotStatus::Diseased
            | PlotStatus::Abandoned => false,
        }
    }

    /// Whether a living crop is currently growing on the plot.
    pub fn is_active_crop(self) -> bool {
        match self {
            PlotStatus::Sown
            | PlotStatus::Growing
            | PlotStatus::Flowering
            | PlotStatus::Fruiting => true,
            PlotStatus::Available
            | PlotStatus::Prepared
            | PlotStatus::ReadyToHarvest
            | PlotStatus::Harvesting
            | PlotStatus::Harvested
            | PlotStatus::Resting
            | PlotStatus::InPreparation
            | PlotStatus::Diseased
            | PlotStatus::Abandoned => false,
        }
    }

    /// Whether the plot is in a rest or re-preparation period.
    pub fn is_resting(self) -> bool {
        match self {
            PlotStatus::Resting | PlotStatus::InPreparation => true,
            PlotStatus::Available
            | PlotStatus::Prepared
            | PlotStatus::Sown
            | PlotStatus::Growing
            | PlotStatus::Flowering
            | PlotStatus::Fruiting
            | PlotStatus::ReadyToHarvest
            | PlotStatus::Harvesting
            | PlotStatus::Harvested
            | PlotStatus::Diseased
            | PlotStatus::Abandoned => false,
        }
    }

    /// Whether the status itself calls for special attention.
    pub fn needs_attention(self) -> bool {
        match self {
            PlotStatus::Diseased | PlotStatus::Abandoned => true,
            PlotStatus::Available
            | PlotStatus::Prepared
            | PlotStatus::Sown
            | PlotStatus::Growing
            | PlotStatus::Flowering
            | PlotStatus::Fruiting
            | PlotStatus::ReadyToHarvest
            | PlotStatus::Harvesting
            | PlotStatus::Harvested
            | PlotStatus::Resting
            | PlotStatus::InPreparation => false,
        }
    }
}

impl std::fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        crate::domain::PLOT_STATUSES
            .iter()
            .copied()
            .find(|status| {
                status.code().eq_ignore_ascii_case(wanted)
                    || status.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("Unknown plot status: {}", s))
    }
}
