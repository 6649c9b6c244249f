use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfoCode {
    #[serde(rename = "OSSO_PRODUCT_HARDWARE")]
    Hardware,
    #[serde(rename = "OSSO_PRODUCT_NAME")]
    Name,
    #[serde(rename = "OSSO_PRODUCT_FULL_NAME")]
    FullName,
    #[serde(rename = "OSSO_PRODUCT_RELEASE_NAME")]
    ReleaseName,
    #[serde(rename = "OSSO_PRODUCT_RELEASE_FULL_NAME")]
    ReleaseFullName,
    #[serde(rename = "OSSO_PRODUCT_RELEASE_VERSION")]
    ReleaseVersion,
    #[serde(rename = "OSSO_PRODUCT_WLAN_CHANNEL")]
    WlanChannel,
    #[serde(rename = "OSSO_PRODUCT_KEYBOARD")]
    Keyboard,
    #[serde(rename = "OSSO_PRODUCT_REGION")]
    Region,
    #[serde(rename = "OSSO_PRODUCT_SHORT_NAME")]
    ShortName,
    #[serde(rename = "OSSO_VERSION")]
    Version,
}

/// Where the value of a code comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Fetched verbatim under the code's own key.
    Direct,
    /// Parsed out of the raw release version string.
    Release,
    /// Looked up from the raw hardware id.
    Hardware,
}

impl InfoCode {
    /// Every code, ordered by numeric value.
    pub const ALL: [InfoCode; 11] = [
        InfoCode::Hardware,
        InfoCode::Name,
        InfoCode::FullName,
        InfoCode::ReleaseName,
        InfoCode::ReleaseFullName,
        InfoCode::ReleaseVersion,
        InfoCode::WlanChannel,
        InfoCode::Keyboard,
        InfoCode::Region,
        InfoCode::ShortName,
        InfoCode::Version,
    ];

    const NAMES: [&'static str; 11] = [
        "OSSO_PRODUCT_HARDWARE",
        "OSSO_PRODUCT_NAME",
        "OSSO_PRODUCT_FULL_NAME",
        "OSSO_PRODUCT_RELEASE_NAME",
        "OSSO_PRODUCT_RELEASE_FULL_NAME",
        "OSSO_PRODUCT_RELEASE_VERSION",
        "OSSO_PRODUCT_WLAN_CHANNEL",
        "OSSO_PRODUCT_KEYBOARD",
        "OSSO_PRODUCT_REGION",
        "OSSO_PRODUCT_SHORT_NAME",
        "OSSO_VERSION",
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    pub fn derivation(self) -> Derivation {
        match self {
            InfoCode::WlanChannel | InfoCode::Keyboard | InfoCode::Region => Derivation::Direct,
            InfoCode::ReleaseName
            | InfoCode::ReleaseFullName
            | InfoCode::ReleaseVersion
            | InfoCode::Version => Derivation::Release,
            InfoCode::Hardware | InfoCode::Name | InfoCode::FullName | InfoCode::ShortName => {
                Derivation::Hardware
            }
        }
    }
}

impl fmt::Display for InfoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn code_from_name(name: &str) -> Option<InfoCode> {
    InfoCode::from_name(name)
}

pub fn name_from_code(index: usize) -> Option<&'static str> {
    InfoCode::from_index(index).map(InfoCode::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, code) in InfoCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
        assert_eq!(InfoCode::Version.index(), 10);
    }

    #[test]
    fn serde_names_match_display() {
        for code in InfoCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.name()));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(code_from_name("osso_version"), None);
        assert_eq!(code_from_name(""), None);
    }
}
