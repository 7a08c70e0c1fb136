use bitflags::bitflags;
use export_core::ExportDefaults;

bitflags! {
    /// Optional worksheet decorations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExcelFeatures: u8 {
        /// Freeze the header row.
        const FREEZE_HEADER = 0b0001;
        /// Add an auto-filter over the written range.
        const ADD_FILTER = 0b0010;

        /// All features enabled (default).
        const ALL = Self::FREEZE_HEADER.bits() | Self::ADD_FILTER.bits();

        /// Plain grid only.
        const NONE = 0b0000;
    }
}

impl ExcelFeatures {
    /// Features switched on by the configuration.
    #[must_use]
    pub fn from_defaults(defaults: &ExportDefaults) -> Self {
        let mut features = Self::NONE;
        features.set(Self::FREEZE_HEADER, defaults.freeze_header);
        features.set(Self::ADD_FILTER, defaults.autofilter);
        features
    }
}

impl Default for ExcelFeatures {
    fn default() -> Self {
        Self::ALL
    }
}
