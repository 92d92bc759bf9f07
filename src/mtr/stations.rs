//! Static MTR line and station reference tables
//!
//! Name-to-code resolution is case-insensitive. Inputs that already carry a
//! canonical code resolve to themselves; anything unrecognized passes through
//! unchanged so the upstream API reports the failure.

/// One MTR line: code, full name, station codes in line order
pub struct Line {
    pub code: &'static str,
    pub name: &'static str,
    pub stations: &'static [&'static str],
}

/// All 10 MTR lines with realtime schedule coverage
pub const LINES: &[Line] = &[
    Line {
        code: "TKL",
        name: "Tseung Kwan O Line",
        stations: &["TKO", "LHP", "HAH", "POA", "TIK", "YAT", "QUB", "NOP"],
    },
    Line {
        code: "AEL",
        name: "Airport Express",
        stations: &["HOK", "KOW", "TSY", "AIR", "AWE"],
    },
    Line {
        code: "ISL",
        name: "Island Line",
        stations: &[
            "KET", "HKU", "SYP", "SHW", "CEN", "ADM", "WAC", "CAB", "TIH", "FOH", "NOP", "QUB",
            "TAK", "SWH", "SKW", "HFC", "CHW",
        ],
    },
    Line {
        code: "TCL",
        name: "Tung Chung Line",
        stations: &["OLY", "NAC", "LAK", "SUN", "TUC"],
    },
    Line {
        code: "TML",
        name: "Tuen Ma Line",
        stations: &[
            "WKS", "MOS", "HEO", "TSH", "SHM", "CIO", "STW", "CKT", "TAW", "HIK", "DIH", "KAT",
            "SUW", "TKW", "HOM", "HUH", "ETS", "AUS", "MEF", "TWW", "KSR", "YUL", "LOP", "TIS",
            "SIH", "TUM",
        ],
    },
    Line {
        code: "EAL",
        name: "East Rail Line",
        stations: &[
            "EXC", "MKK", "KOT", "SHT", "FOT", "RAC", "UNI", "TAP", "TWO", "FAN", "SHS", "LMC",
            "LOW",
        ],
    },
    Line {
        code: "SIL",
        name: "South Island Line",
        stations: &["OCP", "WCH", "LET", "SOH"],
    },
    Line {
        code: "TWL",
        name: "Tsuen Wan Line",
        stations: &[
            "TST", "JOR", "YMT", "MOK", "PRE", "SSP", "CSW", "LCK", "KWF", "KWH", "TWH", "TSW",
        ],
    },
    Line {
        code: "KTL",
        name: "Kwun Tong Line",
        stations: &["WHA", "SKM", "LOF", "WTS", "CHH", "KOB", "NTK", "KWT", "LAT"],
    },
    Line {
        code: "DRL",
        name: "Disneyland Resort Line",
        stations: &["SUN", "DIS"],
    },
];

/// Station name to code, one entry per distinct station code
pub const STATION_NAMES: &[(&str, &str)] = &[
    ("Tseung Kwan O", "TKO"),
    ("LOHAS Park", "LHP"),
    ("Hang Hau", "HAH"),
    ("Po Lam", "POA"),
    ("Tiu Keng Leng", "TIK"),
    ("Yau Tong", "YAT"),
    ("Quarry Bay", "QUB"),
    ("North Point", "NOP"),
    ("Hong Kong", "HOK"),
    ("Kowloon", "KOW"),
    ("Tsing Yi", "TSY"),
    ("Airport", "AIR"),
    ("AsiaWorld-Expo", "AWE"),
    ("Kennedy Town", "KET"),
    ("HKU", "HKU"),
    ("Sai Ying Pun", "SYP"),
    ("Sheung Wan", "SHW"),
    ("Central", "CEN"),
    ("Admiralty", "ADM"),
    ("Wan Chai", "WAC"),
    ("Causeway Bay", "CAB"),
    ("Tin Hau", "TIH"),
    ("Fortress Hill", "FOH"),
    ("Tai Koo", "TAK"),
    ("Sai Wan Ho", "SWH"),
    ("Shau Kei Wan", "SKW"),
    ("Heng Fa Chuen", "HFC"),
    ("Chai Wan", "CHW"),
    ("Olympic", "OLY"),
    ("Nam Cheong", "NAC"),
    ("Lai King", "LAK"),
    ("Sunny Bay", "SUN"),
    ("Tung Chung", "TUC"),
    ("Wu Kai Sha", "WKS"),
    ("Ma On Shan", "MOS"),
    ("Heng On", "HEO"),
    ("Tai Shui Hang", "TSH"),
    ("Shek Mun", "SHM"),
    ("City One", "CIO"),
    ("Sha Tin Wai", "STW"),
    ("Che Kung Temple", "CKT"),
    ("Tai Wai", "TAW"),
    ("Hin Keng", "HIK"),
    ("Diamond Hill", "DIH"),
    ("Kai Tak", "KAT"),
    ("Sung Wong Toi", "SUW"),
    ("To Kwa Wan", "TKW"),
    ("Ho Man Tin", "HOM"),
    ("Hung Hom", "HUH"),
    ("East Tsim Sha Tsui", "ETS"),
    ("Austin", "AUS"),
    ("Mei Foo", "MEF"),
    ("Tsuen Wan West", "TWW"),
    ("Kam Sheung Road", "KSR"),
    ("Yuen Long", "YUL"),
    ("Long Ping", "LOP"),
    ("Tin Shui Wai", "TIS"),
    ("Siu Hong", "SIH"),
    ("Tuen Mun", "TUM"),
    ("Exhibition Centre", "EXC"),
    ("Mong Kok East", "MKK"),
    ("Kowloon Tong", "KOT"),
    ("Sha Tin", "SHT"),
    ("Fo Tan", "FOT"),
    ("Racecourse", "RAC"),
    ("University", "UNI"),
    ("Tai Po Market", "TAP"),
    ("Tai Wo", "TWO"),
    ("Fanling", "FAN"),
    ("Sheung Shui", "SHS"),
    ("Lok Ma Chau", "LMC"),
    ("Lo Wu", "LOW"),
    ("Ocean Park", "OCP"),
    ("Wong Chuk Hang", "WCH"),
    ("Lei Tung", "LET"),
    ("South Horizons", "SOH"),
    ("Tsim Sha Tsui", "TST"),
    ("Jordan", "JOR"),
    ("Yau Ma Tei", "YMT"),
    ("Mong Kok", "MOK"),
    ("Prince Edward", "PRE"),
    ("Sham Shui Po", "SSP"),
    ("Cheung Sha Wan", "CSW"),
    ("Lai Chi Kok", "LCK"),
    ("Kwai Fong", "KWF"),
    ("Kwai Hing", "KWH"),
    ("Tai Wo Hau", "TWH"),
    ("Tsuen Wan", "TSW"),
    ("Whampoa", "WHA"),
    ("Shek Kip Mei", "SKM"),
    ("Lok Fu", "LOF"),
    ("Wong Tai Sin", "WTS"),
    ("Choi Hung", "CHH"),
    ("Kowloon Bay", "KOB"),
    ("Ngau Tau Kok", "NTK"),
    ("Kwun Tong", "KWT"),
    ("Lam Tin", "LAT"),
    ("Disneyland Resort", "DIS"),
];

/// Resolve a station name or code to its canonical code.
///
/// Already-canonical codes resolve to themselves; unrecognized input is
/// returned unchanged.
pub fn resolve_station_code(input: &str) -> String {
    let trimmed = input.trim();

    for (name, code) in STATION_NAMES {
        if code.eq_ignore_ascii_case(trimmed) {
            return (*code).to_string();
        }
        if name.eq_ignore_ascii_case(trimmed) {
            return (*code).to_string();
        }
    }

    trimmed.to_string()
}

/// Resolve a line name or code to its canonical code.
///
/// Already-canonical codes resolve to themselves; unrecognized input is
/// returned unchanged.
pub fn resolve_line_code(input: &str) -> String {
    let trimmed = input.trim();

    for line in LINES {
        if line.code.eq_ignore_ascii_case(trimmed) {
            return line.code.to_string();
        }
        if line.name.eq_ignore_ascii_case(trimmed) {
            return line.code.to_string();
        }
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_station_name() {
        assert_eq!(resolve_station_code("Tseung Kwan O"), "TKO");
        assert_eq!(resolve_station_code("tseung kwan o"), "TKO");
        assert_eq!(resolve_station_code("ADMIRALTY"), "ADM");
    }

    #[test]
    fn test_resolve_station_code_idempotent() {
        assert_eq!(resolve_station_code("TKO"), "TKO");
        assert_eq!(resolve_station_code("tko"), "TKO");
    }

    #[test]
    fn test_resolve_station_passthrough() {
        assert_eq!(resolve_station_code("Narnia Central"), "Narnia Central");
    }

    #[test]
    fn test_resolve_line_name_and_code() {
        assert_eq!(resolve_line_code("Tseung Kwan O Line"), "TKL");
        assert_eq!(resolve_line_code("airport express"), "AEL");
        assert_eq!(resolve_line_code("ISL"), "ISL");
        assert_eq!(resolve_line_code("isl"), "ISL");
    }

    #[test]
    fn test_resolve_line_passthrough() {
        assert_eq!(resolve_line_code("Moon Line"), "Moon Line");
    }

    #[test]
    fn test_ten_lines_with_unique_codes() {
        assert_eq!(LINES.len(), 10);
        let mut codes: Vec<&str> = LINES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_every_line_station_has_a_name_entry() {
        for line in LINES {
            for sta in line.stations {
                assert!(
                    STATION_NAMES.iter().any(|(_, code)| code == sta),
                    "station {} on {} has no name entry",
                    sta,
                    line.code
                );
            }
        }
    }
}
