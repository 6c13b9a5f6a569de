//! Landsat spectral band catalog and selection state.

/// Number of selectable spectral bands.
pub const BAND_COUNT: usize = 11;

/// A spectral band offered by the acquisition service.
pub struct BandDescriptor {
    /// Identifier sent to the service, e.g. `B4`.
    pub id: &'static str,
    pub label: &'static str,
    /// Wavelength range and typical use cases, shown on hover.
    pub description: &'static str,
}

/// The selectable Landsat bands, in the order the service numbers them.
pub static BAND_CATALOG: [BandDescriptor; BAND_COUNT] = [
    BandDescriptor {
        id: "B0",
        label: "Coastal/Aerosol",
        description: "Wavelength: 0.43 – 0.45 µm (in the blue spectrum). \
            Use Cases: Water Penetration, Aerosol Detection.",
    },
    BandDescriptor {
        id: "B1",
        label: "Blue Band",
        description: "Wavelength: 0.45 – 0.51 µm (blue spectrum). \
            Use Cases: Water Body Mapping, Atmospheric Correction, Vegetation Analysis.",
    },
    BandDescriptor {
        id: "B2",
        label: "Green Band",
        description: "Wavelength: 0.52 – 0.60 µm (green spectrum). \
            Use Cases: Vegetation Health, Soil/Water Differentiation, Urban Areas.",
    },
    BandDescriptor {
        id: "B3",
        label: "Red Band",
        description: "Wavelength: 0.63 – 0.68 µm (red spectrum). \
            Use Cases: Vegetation Analysis, Soil and Urban Areas.",
    },
    BandDescriptor {
        id: "B4",
        label: "Near-Infrared (NIR)",
        description: "Wavelength: 0.85 – 0.88 µm (infrared spectrum). \
            Use Cases: Vegetation Health, Water Body Mapping.",
    },
    BandDescriptor {
        id: "B5",
        label: "Shortwave Infrared 1 (SWIR 1)",
        description: "Wavelength: 1.57 – 1.65 µm (infrared spectrum). \
            Use Cases: Soil and Vegetation Moisture, Burn Severity.",
    },
    BandDescriptor {
        id: "B6",
        label: "Shortwave Infrared 2 (SWIR 2)",
        description: "Wavelength: 2.11 – 2.29 µm (infrared spectrum). \
            Use Cases: Moisture Content, Thermal Sensitivity.",
    },
    BandDescriptor {
        id: "B7",
        label: "Panchromatic (Pan) Band",
        description: "Wavelength: 0.50 – 0.68 µm (visible spectrum, all colors combined). \
            Use Cases: Higher Resolution Imagery, Urban Areas.",
    },
    BandDescriptor {
        id: "B8",
        label: "Thermal Infrared 1 (TIR 1)",
        description: "Wavelength: 10.6 – 11.19 µm (thermal infrared spectrum). \
            Use Cases: Surface Temperature.",
    },
    BandDescriptor {
        id: "B9",
        label: "Thermal Infrared 2 (TIR 2)",
        description: "Wavelength: 11.50 – 12.51 µm (thermal infrared spectrum). \
            Use Cases: Surface Temperature, Volcanic and Heat Analysis.",
    },
    BandDescriptor {
        id: "B10",
        label: "Cirrus Band",
        description: "Wavelength: 1.36 – 1.38 µm (infrared spectrum). \
            Use Cases: Cloud Detection.",
    },
];

/// Which bands the user has checked, indexed by catalog position.
#[derive(Default)]
pub struct BandSelectionState {
    selected: [bool; BAND_COUNT],
}

impl BandSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable checkbox binding for the band at `index`.
    pub fn selected_mut(&mut self, index: usize) -> &mut bool {
        &mut self.selected[index]
    }

    /// Identifiers of the selected bands, in catalog order.
    pub fn selected_ids(&self) -> Vec<&'static str> {
        BAND_CATALOG
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, selected)| **selected)
            .map(|(band, _)| band.id)
            .collect()
    }

    /// Comma-separated band list for the `bands` query parameter.
    pub fn join_selected(&self) -> String {
        self.selected_ids().join(",")
    }
}
