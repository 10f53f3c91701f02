
/// Longest length a month can have, February counted as 29 days.
/// Used to validate year-less month/day pairs; zero for an invalid month.
pub const fn max_days_of_month (month: u32) -> u32 {
    const MAX_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month >= 1 && month <= 12 {
        MAX_EOM[month as usize]
    } else {
        0
    }
}
