//! Locale-aware formatting helpers for dates shown on the exam page.

use time::{macros::format_description, Date};

use super::Locale;

/// Multi-day exam date: `March 28-29, 2026` / `2026年3月28-29日`.
pub fn format_day_span(locale: Locale, start: Date, end: Date) -> String {
    match locale {
        Locale::En if start.month() == end.month() => format!(
            "{} {}-{}, {}",
            start.month(),
            start.day(),
            end.day(),
            start.year()
        ),
        Locale::En => format!(
            "{} {} - {}",
            start.month(),
            start.day(),
            format_long_date(locale, end)
        ),
        Locale::ZhHant | Locale::ZhHans if start.month() == end.month() => format!(
            "{}年{}月{}-{}日",
            start.year(),
            start.month() as u8,
            start.day(),
            end.day()
        ),
        Locale::ZhHant | Locale::ZhHans => format!(
            "{}年{}月{}日 - {}月{}日",
            start.year(),
            start.month() as u8,
            start.day(),
            end.month() as u8,
            end.day()
        ),
    }
}

/// Registration window without the year: `Feb 26 - Mar 11` / `2月26日 - 3月11日`.
pub fn format_window(locale: Locale, open: Date, close: Date) -> String {
    match locale {
        Locale::En => format!("{} - {}", format_short_en(open), format_short_en(close)),
        Locale::ZhHant | Locale::ZhHans => format!(
            "{}月{}日 - {}月{}日",
            open.month() as u8,
            open.day(),
            close.month() as u8,
            close.day()
        ),
    }
}

/// Single date: `March 29, 2026` / `2026年3月29日`.
pub fn format_long_date(locale: Locale, date: Date) -> String {
    match locale {
        Locale::En => date
            .format(&format_description!(
                "[month repr:long] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| "—".to_string()),
        Locale::ZhHant | Locale::ZhHans => format!(
            "{}年{}月{}日",
            date.year(),
            date.month() as u8,
            date.day()
        ),
    }
}

fn format_short_en(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [day padding:none]"))
        .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn english_dates() {
        assert_eq!(
            format_day_span(Locale::En, date!(2026 - 03 - 28), date!(2026 - 03 - 29)),
            "March 28-29, 2026"
        );
        assert_eq!(
            format_window(Locale::En, date!(2026 - 02 - 26), date!(2026 - 03 - 11)),
            "Feb 26 - Mar 11"
        );
        assert_eq!(
            format_long_date(Locale::En, date!(2026 - 12 - 27)),
            "December 27, 2026"
        );
    }

    #[test]
    fn chinese_dates() {
        assert_eq!(
            format_day_span(Locale::ZhHant, date!(2026 - 06 - 27), date!(2026 - 06 - 28)),
            "2026年6月27-28日"
        );
        assert_eq!(
            format_window(Locale::ZhHans, date!(2026 - 08 - 24), date!(2026 - 09 - 09)),
            "8月24日 - 9月9日"
        );
        assert_eq!(
            format_long_date(Locale::ZhHans, date!(2026 - 03 - 29)),
            "2026年3月29日"
        );
    }

    #[test]
    fn spans_crossing_months_keep_both_months() {
        assert_eq!(
            format_day_span(Locale::En, date!(2026 - 01 - 31), date!(2026 - 02 - 01)),
            "January 31 - February 1, 2026"
        );
        assert_eq!(
            format_day_span(Locale::ZhHant, date!(2026 - 01 - 31), date!(2026 - 02 - 01)),
            "2026年1月31日 - 2月1日"
        );
    }
}
