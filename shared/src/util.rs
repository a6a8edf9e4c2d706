/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC time as ISO-8601 with millisecond precision (`2024-05-01T12:00:00.000Z`)
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Render an ISO-8601 timestamp as `dd/mm/yyyy HH:MM:SS` for receipts.
///
/// Unparsable input is returned unchanged.
pub fn format_receipt_date(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|d| d.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
