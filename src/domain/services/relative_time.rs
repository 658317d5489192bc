use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Indonesian "time ago" label for the wishes wall.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    // Clock skew between writers can put created_at slightly in the future.
    if elapsed.num_minutes() < 1 {
        return "Baru saja".to_string();
    }
    if elapsed.num_hours() < 1 {
        return format!("{} menit yang lalu", elapsed.num_minutes());
    }
    if elapsed.num_days() < 1 {
        return format!("{} jam yang lalu", elapsed.num_hours());
    }
    if elapsed.num_days() < 30 {
        return format!("{} hari yang lalu", elapsed.num_days());
    }

    format!(
        "{} {} {}",
        created_at.day(),
        MONTHS[created_at.month0() as usize],
        created_at.year()
    )
}
