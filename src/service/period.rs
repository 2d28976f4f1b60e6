use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// 报表周期: 上一个自然月, 两端含
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: NaiveDateTime, // 上月 1 日 00:00:00
    pub end: NaiveDateTime,   // 上月最后一日 23:59:59.999999
}

impl ReportPeriod {
    /// 由"今天"推导上一个自然月的起止时刻
    pub fn previous_month(today: NaiveDate) -> Self {
        let first_of_current = today - Days::new(u64::from(today.day()) - 1);
        let last_day = first_of_current - Days::new(1);
        let first_day = last_day - Days::new(u64::from(last_day.day()) - 1);

        Self {
            start: first_day.and_time(NaiveTime::MIN),
            end: last_day.and_time(end_of_day()),
        }
    }

    /// 邮件正文使用的周期标签, 如 "July 2026"
    pub fn month_label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn mid_month_gives_full_previous_month() {
        let period = ReportPeriod::previous_month(date(2026, 8, 6));
        assert_eq!(period.start, date(2026, 7, 1).and_time(NaiveTime::MIN));
        assert_eq!(
            period.end,
            date(2026, 7, 31).and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
        );
    }

    #[test]
    fn january_rolls_back_to_previous_year() {
        let period = ReportPeriod::previous_month(date(2026, 1, 15));
        assert_eq!(period.start.date(), date(2025, 12, 1));
        assert_eq!(period.end.date(), date(2025, 12, 31));
    }

    #[test]
    fn february_end_handles_leap_years() {
        let period = ReportPeriod::previous_month(date(2024, 3, 10));
        assert_eq!(period.end.date(), date(2024, 2, 29));

        let period = ReportPeriod::previous_month(date(2026, 3, 1));
        assert_eq!(period.start.date(), date(2026, 2, 1));
        assert_eq!(period.end.date(), date(2026, 2, 28));
    }

    #[test]
    fn period_never_reaches_current_month() {
        let today = date(2026, 8, 1);
        let period = ReportPeriod::previous_month(today);
        assert!(period.end.date() < today - Days::new(u64::from(today.day()) - 1));
    }

    #[test]
    fn month_label_is_english_month_and_year() {
        let period = ReportPeriod::previous_month(date(2026, 8, 6));
        assert_eq!(period.month_label(), "July 2026");
    }
}
