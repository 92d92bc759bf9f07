//! Read-only MCP resources: station reference list and interchange map

use crate::mtr::LINES;
use crate::protocol::McpResource;

/// URI of the station reference resource
pub const STATION_LIST_URI: &str = "mtr://stations/list";

/// URI of the line/interchange map resource
pub const LINE_MAP_URI: &str = "mtr://lines/map";

/// The fixed resource catalog for resources/list
pub fn get_all_resources() -> Vec<McpResource> {
    vec![
        McpResource {
            uri: STATION_LIST_URI.to_string(),
            name: "MTR Stations List".to_string(),
            description: "Complete list of all MTR stations with codes, grouped by line".to_string(),
            mime_type: "text/plain".to_string(),
        },
        McpResource {
            uri: LINE_MAP_URI.to_string(),
            name: "MTR Lines Map".to_string(),
            description: "MTR line connectivity and interchange information".to_string(),
            mime_type: "text/markdown".to_string(),
        },
    ]
}

/// Read one resource by URI, returning its MIME type and text.
///
/// Unknown URIs return `None`; the dispatcher maps that to `-32602`.
pub fn read_resource(uri: &str) -> Option<(String, String)> {
    match uri {
        STATION_LIST_URI => Some(("text/plain".to_string(), station_list())),
        LINE_MAP_URI => Some(("text/markdown".to_string(), line_map())),
        _ => None,
    }
}

fn station_list() -> String {
    let mut out = vec![
        "# MTR Station Reference".to_string(),
        String::new(),
        "Complete list of all 80+ MTR stations across 10 lines:".to_string(),
        String::new(),
    ];

    for line in LINES {
        out.push(format!("## {} - {}", line.code, line.name));
        out.push(format!("Stations: {}", line.stations.join(", ")));
        out.push(String::new());
    }

    out.join("\n")
}

fn line_map() -> String {
    "# MTR Line Map & Interchanges

## Complete Interchange Stations (21 stations)

All stations where multiple MTR lines intersect at the same physical station:

| Station Name | Code | Connecting Lines |
|--------------|------|------------------|
| Admiralty | ADM | EAL, ISL, SIL, TWL |
| Central | CEN | ISL, TWL |
| Diamond Hill | DIH | KTL, TML |
| Ho Man Tin | HOM | KTL, TML |
| Hong Kong | HOK | AEL, TCL |
| Hung Hom | HUH | EAL, TML |
| Kowloon | KOW | AEL, TCL |
| Kowloon Tong | KOT | EAL, KTL |
| Lai King | LAK | TCL, TWL |
| Mei Foo | MEF | TML, TWL |
| Mong Kok | MOK | KTL, TWL |
| Nam Cheong | NAC | TCL, TML |
| North Point | NOP | ISL, TKL |
| Prince Edward | PRE | KTL, TWL |
| Quarry Bay | QUB | ISL, TKL |
| Sunny Bay | SUN | DRL, TCL |
| Tai Wai | TAW | EAL, TML |
| Tiu Keng Leng | TIK | KTL, TKL |
| Tsing Yi | TSY | AEL, TCL |
| Yau Ma Tei | YMT | KTL, TWL |
| Yau Tong | YAT | KTL, TKL |
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_two_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].uri, STATION_LIST_URI);
        assert_eq!(resources[1].uri, LINE_MAP_URI);
    }

    #[test]
    fn test_station_list_names_every_line() {
        let (mime, text) = read_resource(STATION_LIST_URI).unwrap();
        assert_eq!(mime, "text/plain");
        for code in ["TKL", "AEL", "ISL", "TCL", "TML", "EAL", "SIL", "TWL", "KTL", "DRL"] {
            assert!(text.contains(code), "missing line code {}", code);
        }
    }

    #[test]
    fn test_line_map_is_markdown_table() {
        let (mime, text) = read_resource(LINE_MAP_URI).unwrap();
        assert_eq!(mime, "text/markdown");
        assert!(text.contains("| Admiralty | ADM |"));
        assert!(text.contains("Interchange"));
    }

    #[test]
    fn test_unknown_uri() {
        assert!(read_resource("mtr://nowhere").is_none());
    }
}
