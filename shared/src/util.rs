use chrono::Weekday;

/// Canonical lowercase day names, indexed Sunday = 0 to match the
/// numeric weekday convention of the uploaded schedule documents.
pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Map a chrono weekday to its canonical lowercase name.
pub fn day_name_for_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => DAY_NAMES[0],
        Weekday::Mon => DAY_NAMES[1],
        Weekday::Tue => DAY_NAMES[2],
        Weekday::Wed => DAY_NAMES[3],
        Weekday::Thu => DAY_NAMES[4],
        Weekday::Fri => DAY_NAMES[5],
        Weekday::Sat => DAY_NAMES[6],
    }
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at store scale)
///
/// New employee and position records minted by the engine use this so ids
/// stay unique against concurrently edited copies of the same schedule.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}
