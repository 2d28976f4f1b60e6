use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, One};
use chrono::NaiveDate;
use std::collections::HashMap;

/// 折算结果保留的小数位 (货币最小单位)
const CURRENCY_SCALE: i64 = 2;

/// 预取的汇率表
///
/// 汇率语义: 1 单位公司本位币可兑换 rate 单位该币种。
/// 折算 = amount × to_rate ÷ from_rate, 按 half-even 舍入到两位小数。
/// 查不到的汇率按 1 处理。
#[derive(Debug, Clone, Default)]
pub struct RateBook {
    rates: HashMap<(String, i64, NaiveDate), BigDecimal>,
}

impl RateBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, currency: String, company_id: i64, date: NaiveDate, rate: BigDecimal) {
        self.rates.insert((currency, company_id, date), rate);
    }

    /// 将金额从 from 币种折算到 to 币种
    pub fn convert(
        &self,
        amount: &BigDecimal,
        from: &str,
        to: &str,
        company_id: i64,
        date: NaiveDate,
    ) -> BigDecimal {
        let from_rate = self.rate(from, company_id, date);
        let to_rate = self.rate(to, company_id, date);
        (amount * to_rate / from_rate).with_scale_round(CURRENCY_SCALE, RoundingMode::HalfEven)
    }

    fn rate(&self, currency: &str, company_id: i64, date: NaiveDate) -> BigDecimal {
        self.rates
            .get(&(currency.to_string(), company_id, date))
            .cloned()
            .unwrap_or_else(BigDecimal::one)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn converts_through_company_base_currency() {
        // 本位币 EUR: EUR 汇率 1, USD 汇率 1.0625
        let mut book = RateBook::new();
        let day = date(2026, 7, 15);
        book.insert("EUR".to_string(), 1, day, dec("1"));
        book.insert("USD".to_string(), 1, day, dec("1.0625"));

        let converted = book.convert(&dec("80"), "EUR", "USD", 1, day);
        assert_eq!(converted, dec("85.00"));
    }

    #[test]
    fn missing_rates_fall_back_to_identity() {
        let book = RateBook::new();
        let converted = book.convert(&dec("42.50"), "EUR", "USD", 1, date(2026, 7, 1));
        assert_eq!(converted, dec("42.50"));
    }

    #[test]
    fn rounds_half_even_to_minor_unit() {
        let mut book = RateBook::new();
        let day = date(2026, 7, 15);
        book.insert("USD".to_string(), 1, day, dec("2.345"));

        // 1 × 2.345 / 1 = 2.345 → 偶数舍入到 2.34
        assert_eq!(book.convert(&dec("1"), "EUR", "USD", 1, day), dec("2.34"));
        // 3 × 2.345 / 1 = 7.035 → 偶数舍入到 7.04
        assert_eq!(book.convert(&dec("3"), "EUR", "USD", 1, day), dec("7.04"));
    }

    #[test]
    fn rates_are_scoped_by_company_and_date() {
        let mut book = RateBook::new();
        let day = date(2026, 7, 15);
        book.insert("USD".to_string(), 1, day, dec("2"));

        // 其他公司或其他日期不命中, 回退为 1
        assert_eq!(book.convert(&dec("10"), "EUR", "USD", 2, day), dec("10.00"));
        assert_eq!(
            book.convert(&dec("10"), "EUR", "USD", 1, date(2026, 7, 16)),
            dec("10.00")
        );
    }
}
