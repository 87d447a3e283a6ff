use chrono::Utc;

/// Session timestamp in the `2025-06-03 17:10:55` shape every record and line
/// point carries.
pub fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The date half of a session timestamp, used for the export filename.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or(timestamp)
}

#[cfg(test)]
#[test]
fn test_date_part() {
    assert_eq!(date_part("2025-06-03 17:10:55"), "2025-06-03");
    assert_eq!(date_part("2025-06-03"), "2025-06-03");
    assert_eq!(date_part(""), "");
}
