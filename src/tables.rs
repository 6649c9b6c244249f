//! Static lookup tables: raw backend keys, software families and hardware ids.

use crate::info::InfoCode;

pub const KEY_WLAN_CHANNEL: &str = "/certs/ccc/pp/wlan-channel";
pub const KEY_KEYBOARD_LAYOUT: &str = "/certs/ccc/pp/keyboard-layout";
pub const KEY_CONTENT_REGION: &str = "/certs/ccc/pp/content-region";
pub const KEY_PRODUCT: &str = "/component/product";
pub const KEY_SW_RELEASE_VER: &str = "/device/sw-release-ver";

/// Partition block that carries the writable release version.
pub const BLOCK_SW_RELEASE_VER: &str = "sw-release-ver";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub code: InfoCode,
    pub key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyRecord {
    pub token: &'static str,
    pub os_name: &'static str,
    pub os_description: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub short_name: &'static str,
}

pub static KEYS: &[KeyEntry] = &[
    KeyEntry { code: InfoCode::WlanChannel, key: KEY_WLAN_CHANNEL },
    KeyEntry { code: InfoCode::Keyboard, key: KEY_KEYBOARD_LAYOUT },
    KeyEntry { code: InfoCode::Region, key: KEY_CONTENT_REGION },
    KeyEntry { code: InfoCode::Hardware, key: KEY_PRODUCT },
    KeyEntry { code: InfoCode::Version, key: KEY_SW_RELEASE_VER },
];

// "DEFAULT" is an ordinary row, matched only by that literal token.
pub static FAMILIES: &[FamilyRecord] = &[
    FamilyRecord {
        token: "2007SE",
        os_name: "OS 2007",
        os_description: "Internet Tablet OS: maemo Linux based OS2007",
        display_name: "OS 2007",
    },
    FamilyRecord {
        token: "2008SE",
        os_name: "OS 2008",
        os_description: "Internet Tablet OS: maemo Linux based OS2008",
        display_name: "OS 2008",
    },
    FamilyRecord {
        token: "DIABLO",
        os_name: "OS 2008",
        os_description: "Internet Tablet OS: maemo Linux based OS2008",
        display_name: "OS 2008",
    },
    FamilyRecord {
        token: "2009SE",
        os_name: "Maemo 5",
        os_description: "Maemo 5",
        display_name: "Maemo 5",
    },
    FamilyRecord {
        token: "FREMANTLE",
        os_name: "Maemo 5",
        os_description: "Maemo 5",
        display_name: "Maemo 5",
    },
    FamilyRecord {
        token: "DEFAULT",
        os_name: "Maemo SDK",
        os_description: "Maemo SDK",
        display_name: "Maemo SDK",
    },
];

pub static HARDWARE: &[HardwareRecord] = &[
    HardwareRecord {
        id: "RX-34",
        name: "N800",
        full_name: "Nokia N800 Internet Tablet",
        short_name: "Nokia N800",
    },
    HardwareRecord {
        id: "RX-44",
        name: "N810",
        full_name: "Nokia N810 Internet Tablet",
        short_name: "Nokia N810",
    },
    HardwareRecord {
        id: "RX-48",
        name: "N810 WiMAX",
        full_name: "Nokia N810 Internet Tablet WiMAX Edition",
        short_name: "Nokia N810 WiMAX",
    },
    HardwareRecord {
        id: "RX-51",
        name: "N900",
        full_name: "Nokia N900",
        short_name: "Nokia N900",
    },
    HardwareRecord {
        id: "SB",
        name: "SB",
        full_name: "Scratchbox",
        short_name: "Scratchbox",
    },
];

pub fn raw_key_for(code: InfoCode) -> Option<&'static str> {
    KEYS.iter().find(|entry| entry.code == code).map(|entry| entry.key)
}

pub fn family(token: &str) -> Option<&'static FamilyRecord> {
    FAMILIES.iter().find(|record| record.token == token)
}

pub fn hardware(id: &str) -> Option<&'static HardwareRecord> {
    HARDWARE.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_and_raw_codes_have_keys() {
        assert_eq!(raw_key_for(InfoCode::WlanChannel), Some(KEY_WLAN_CHANNEL));
        assert_eq!(raw_key_for(InfoCode::Version), Some(KEY_SW_RELEASE_VER));
        assert_eq!(raw_key_for(InfoCode::Name), None);
        assert_eq!(raw_key_for(InfoCode::ReleaseName), None);
    }

    #[test]
    fn first_fields_are_non_empty() {
        assert!(FAMILIES.iter().all(|r| !r.token.is_empty()));
        assert!(HARDWARE.iter().all(|r| !r.id.is_empty()));
        assert!(KEYS.iter().all(|e| !e.key.is_empty()));
    }

    #[test]
    fn default_family_is_literal() {
        assert_eq!(family("DEFAULT").map(|r| r.os_name), Some("Maemo SDK"));
        assert!(family("default").is_none());
        assert!(family("").is_none());
    }
}
