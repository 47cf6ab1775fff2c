use serde::{Deserialize, Serialize};

/// Release regions encoded in the last character of a GBA product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// China (iQue)
    China,
    /// Germany
    Germany,
    /// USA / North America
    Usa,
    /// France
    France,
    /// Netherlands
    Netherlands,
    /// Italy
    Italy,
    /// Japan
    Japan,
    /// Korea
    Korea,
    /// Europe (PAL, multi-language)
    Europe,
    /// Denmark
    Denmark,
    /// Spain
    Spain,
    /// Australia
    Australia,
    /// Other European releases (X/Y/Z codes)
    EuropeOther,
    /// Unknown region
    Unknown,
}

impl Region {
    /// Decode the region character of a product code (e.g. `J` in `AGSJ`).
    pub fn from_code(code: u8) -> Self {
        match code {
            b'C' => Self::China,
            b'D' => Self::Germany,
            b'E' => Self::Usa,
            b'F' => Self::France,
            b'H' => Self::Netherlands,
            b'I' => Self::Italy,
            b'J' => Self::Japan,
            b'K' => Self::Korea,
            b'P' => Self::Europe,
            b'Q' => Self::Denmark,
            b'S' => Self::Spain,
            b'U' => Self::Australia,
            b'X' | b'Y' | b'Z' => Self::EuropeOther,
            _ => Self::Unknown,
        }
    }

    /// Returns the three-letter suffix used in full product ids.
    pub fn code(&self) -> &'static str {
        match self {
            Self::China => "CHN",
            Self::Germany => "DEU",
            Self::Usa => "USA",
            Self::France => "FRA",
            Self::Netherlands => "HOL",
            Self::Italy => "ITA",
            Self::Japan => "JPN",
            Self::Korea => "KOR",
            Self::Europe => "EUR",
            Self::Denmark => "DEN",
            Self::Spain => "ESP",
            Self::Australia => "AUS",
            Self::EuropeOther => "EUU",
            Self::Unknown => "XXX",
        }
    }

    /// Returns the full name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::China => "China",
            Self::Germany => "Germany",
            Self::Usa => "USA",
            Self::France => "France",
            Self::Netherlands => "Netherlands",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Europe => "Europe",
            Self::Denmark => "Denmark",
            Self::Spain => "Spain",
            Self::Australia => "Australia",
            Self::EuropeOther => "Europe (other)",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
