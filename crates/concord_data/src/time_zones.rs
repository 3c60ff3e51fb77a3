//! Named IANA time zones with their link names.

use concord_common::TimeZoneIdentifier;

/// (canonical identifier, aliases), sorted by identifier.
const TIME_ZONES: &[(&str, &[&str])] = &[
    ("Africa/Cairo", &["Egypt"]),
    ("Africa/Johannesburg", &[]),
    ("Africa/Lagos", &[]),
    ("Africa/Nairobi", &[]),
    ("America/Argentina/Buenos_Aires", &["America/Buenos_Aires"]),
    ("America/Chicago", &["US/Central"]),
    ("America/Denver", &["US/Mountain", "Navajo"]),
    ("America/Los_Angeles", &["US/Pacific"]),
    ("America/Mexico_City", &["Mexico/General"]),
    ("America/New_York", &["US/Eastern"]),
    ("America/Sao_Paulo", &["Brazil/East"]),
    ("America/Toronto", &["Canada/Eastern"]),
    ("Asia/Dubai", &[]),
    ("Asia/Hong_Kong", &["Hongkong"]),
    ("Asia/Jerusalem", &["Asia/Tel_Aviv", "Israel"]),
    ("Asia/Kolkata", &["Asia/Calcutta"]),
    ("Asia/Riyadh", &[]),
    ("Asia/Seoul", &["ROK"]),
    ("Asia/Shanghai", &["Asia/Chongqing", "Asia/Harbin", "PRC"]),
    ("Asia/Taipei", &["ROC"]),
    ("Asia/Tehran", &["Iran"]),
    ("Asia/Tokyo", &["Japan"]),
    ("Australia/Sydney", &["Australia/ACT", "Australia/NSW"]),
    ("Europe/Berlin", &[]),
    ("Europe/Dublin", &["Eire"]),
    ("Europe/Istanbul", &["Asia/Istanbul", "Turkey"]),
    ("Europe/Kyiv", &["Europe/Kiev"]),
    ("Europe/London", &["GB", "GB-Eire"]),
    ("Europe/Madrid", &[]),
    ("Europe/Moscow", &["W-SU"]),
    ("Europe/Paris", &[]),
    ("Europe/Warsaw", &["Poland"]),
    ("Pacific/Auckland", &["NZ"]),
    ("Pacific/Honolulu", &["US/Hawaii"]),
    ("UTC", &["Etc/UCT", "Etc/UTC", "Etc/Universal", "Etc/Zulu", "UCT", "Universal", "Zulu"]),
];

pub(crate) fn build() -> Vec<TimeZoneIdentifier> {
    TIME_ZONES
        .iter()
        .map(|(identifier, aliases)| TimeZoneIdentifier::new(identifier, aliases))
        .collect()
}
