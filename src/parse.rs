use crate::error::{ProductInfoError, Result};
use crate::info::InfoCode;
use crate::tables::{self, FamilyRecord, HardwareRecord};

pub const FIELD_SEPARATOR: char = '_';

/// A release version string split into its family and version tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release<'a> {
    pub family: &'static FamilyRecord,
    pub version: &'a str,
}

/// Splits `FAMILY_VERSION[_...]`. Devices report the string with the
/// hardware id in front (`RX-51_2009SE_...`, `SB_FREMANTLE_...`); a leading
/// token that names known hardware is skipped.
pub fn parse_release(raw: &str) -> Result<Release<'_>> {
    let mut tokens = raw.split(FIELD_SEPARATOR).peekable();
    if tokens
        .peek()
        .is_some_and(|first| tables::hardware(first).is_some())
    {
        tokens.next();
    }

    let family_token = tokens.next().unwrap_or("");
    let version = tokens.next().unwrap_or("");
    if family_token.is_empty() || version.is_empty() {
        return Err(ProductInfoError::MalformedReleaseString(raw.to_string()));
    }

    let family = tables::family(family_token)
        .ok_or_else(|| ProductInfoError::UnknownFamily(family_token.to_string()))?;

    Ok(Release { family, version })
}

pub fn release_field(code: InfoCode, raw: &str) -> Result<String> {
    if code == InfoCode::Version {
        return Ok(raw.to_string());
    }

    let release = parse_release(raw)?;
    let value = match code {
        InfoCode::ReleaseName => release.family.os_name,
        InfoCode::ReleaseFullName => release.family.display_name,
        InfoCode::ReleaseVersion => release.version,
        other => return Err(ProductInfoError::KeyNotMapped(other)),
    };
    Ok(value.to_string())
}

pub fn parse_hardware(raw: &str) -> Result<&'static HardwareRecord> {
    tables::hardware(raw).ok_or_else(|| ProductInfoError::UnknownHardware(raw.to_string()))
}

pub fn hardware_field(code: InfoCode, raw: &str) -> Result<String> {
    let record = parse_hardware(raw)?;
    let value = match code {
        InfoCode::Hardware => record.id,
        InfoCode::Name => record.name,
        InfoCode::FullName => record.full_name,
        InfoCode::ShortName => record.short_name,
        other => return Err(ProductInfoError::KeyNotMapped(other)),
    };
    Ok(value.to_string())
}
