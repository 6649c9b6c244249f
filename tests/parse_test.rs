use osso_product_info::parse::{hardware_field, parse_release, release_field};
use osso_product_info::{code_from_name, name_from_code, InfoCode, ProductInfoError};

#[test]
fn fremantle_release_fields() {
    let raw = "FREMANTLE_9.2009.33-2_PR_MR0";
    assert_eq!(release_field(InfoCode::ReleaseName, raw).unwrap(), "Maemo 5");
    assert_eq!(
        release_field(InfoCode::ReleaseVersion, raw).unwrap(),
        "9.2009.33-2"
    );
    assert_eq!(
        release_field(InfoCode::ReleaseFullName, raw).unwrap(),
        "Maemo 5"
    );
    assert_eq!(release_field(InfoCode::Version, raw).unwrap(), raw);
}

#[test]
fn device_release_string_with_hardware_prefix() {
    let raw = "RX-51_2009SE_21.2011.38-1_PR_MR0";
    assert_eq!(release_field(InfoCode::ReleaseName, raw).unwrap(), "Maemo 5");
    assert_eq!(
        release_field(InfoCode::ReleaseVersion, raw).unwrap(),
        "21.2011.38-1"
    );
}

#[test]
fn older_families_use_display_name_for_full_name() {
    let release = parse_release("DIABLO_5.2008.43-7").unwrap();
    assert_eq!(release.family.os_name, "OS 2008");
    assert_eq!(
        release.family.os_description,
        "Internet Tablet OS: maemo Linux based OS2008"
    );
    assert_eq!(
        release_field(InfoCode::ReleaseFullName, "DIABLO_5.2008.43-7").unwrap(),
        "OS 2008"
    );
}

#[test]
fn unknown_family_is_named() {
    match release_field(InfoCode::ReleaseName, "FOOBAR_1.0") {
        Err(ProductInfoError::UnknownFamily(token)) => assert_eq!(token, "FOOBAR"),
        other => panic!("expected UnknownFamily, got {other:?}"),
    }
}

#[test]
fn raw_version_is_returned_even_if_unparseable() {
    assert_eq!(
        release_field(InfoCode::Version, "garbage").unwrap(),
        "garbage"
    );
    assert!(matches!(
        release_field(InfoCode::ReleaseName, "garbage"),
        Err(ProductInfoError::MalformedReleaseString(_))
    ));
}

#[test]
fn n900_hardware_fields() {
    assert_eq!(hardware_field(InfoCode::Hardware, "RX-51").unwrap(), "RX-51");
    assert_eq!(hardware_field(InfoCode::Name, "RX-51").unwrap(), "N900");
    assert_eq!(
        hardware_field(InfoCode::FullName, "RX-51").unwrap(),
        "Nokia N900"
    );
    assert_eq!(
        hardware_field(InfoCode::ShortName, "RX-51").unwrap(),
        "Nokia N900"
    );
}

#[test]
fn n810_wimax_hardware_fields() {
    assert_eq!(hardware_field(InfoCode::Name, "RX-48").unwrap(), "N810 WiMAX");
    assert_eq!(
        hardware_field(InfoCode::FullName, "RX-48").unwrap(),
        "Nokia N810 Internet Tablet WiMAX Edition"
    );
}

#[test]
fn unknown_hardware_fails_for_every_field() {
    for code in [
        InfoCode::Hardware,
        InfoCode::Name,
        InfoCode::FullName,
        InfoCode::ShortName,
    ] {
        match hardware_field(code, "RX-99") {
            Err(ProductInfoError::UnknownHardware(id)) => assert_eq!(id, "RX-99"),
            other => panic!("expected UnknownHardware, got {other:?}"),
        }
    }
}

#[test]
fn code_names_round_trip() {
    let code = code_from_name("OSSO_VERSION").unwrap();
    assert_eq!(name_from_code(code.index()), Some("OSSO_VERSION"));

    for code in InfoCode::ALL {
        assert_eq!(code_from_name(name_from_code(code.index()).unwrap()), Some(code));
    }
}

#[test]
fn unknown_names_and_out_of_range_codes() {
    assert_eq!(code_from_name("OSSO_PRODUCT_COLOR"), None);
    assert_eq!(name_from_code(11), None);
    assert_eq!(name_from_code(usize::MAX), None);
}

#[test]
fn hardware_prefix_alone_is_not_a_family() {
    // "SB" is skipped as a device prefix, leaving "1.0" with no version after it.
    match release_field(InfoCode::ReleaseName, "SB_1.0") {
        Err(ProductInfoError::MalformedReleaseString(raw)) => assert_eq!(raw, "SB_1.0"),
        other => panic!("expected MalformedReleaseString, got {other:?}"),
    }
    assert!(matches!(
        release_field(InfoCode::ReleaseName, "SB_1.0_2.0"),
        Err(ProductInfoError::UnknownFamily(token)) if token == "1.0"
    ));
}
