use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use chrono::DateTime;
use chrono::FixedOffset;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::TimeZone;
use chrono::Utc;

use super::Literal;
use super::ScalarCodec;
use super::ScalarError;

/// Largest distance from the epoch, in milliseconds, a date may have.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// An instant, or the invalid instant produced by unparseable input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateValue {
    Valid(DateTime<Utc>),
    Invalid,
}

impl DateValue {
    /// Instant at `millis` milliseconds since the epoch.
    ///
    /// Fractional milliseconds are truncated. Non-finite or out of range
    /// values give `Invalid`.
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
            return DateValue::Invalid;
        }

        DateTime::from_timestamp_millis(millis.trunc() as i64)
            .map(DateValue::Valid)
            .unwrap_or(DateValue::Invalid)
    }

    /// Parse a date string the way the Date constructor does.
    ///
    /// Accepts the ISO 8601 date-time forms (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    /// optionally followed by `THH:mm`, `THH:mm:ss` or `THH:mm:ss.sss` and a
    /// `Z` or `±HH:mm` offset) plus RFC 2822. Date-only forms are UTC; date-times
    /// without an offset are read as server local time, which is UTC.
    pub fn parse_str(s: &str) -> Self {
        let s = s.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(s) {
            return DateValue::Valid(date_time.with_timezone(&Utc));
        }

        if let Ok(date_time) = DateTime::parse_from_rfc2822(s) {
            return DateValue::Valid(date_time.with_timezone(&Utc));
        }

        match s.split_once('T') {
            Some((date, time)) => parse_date_time(date, time),
            None => parse_date(s).map(|date_time| date_time.and_utc()),
        }
        .map(DateValue::Valid)
        .unwrap_or(DateValue::Invalid)
    }

    pub fn timestamp_millis(&self) -> Option<i64> {
        match self {
            DateValue::Valid(date_time) => Some(date_time.timestamp_millis()),
            DateValue::Invalid => None,
        }
    }
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` at midnight; missing parts default to 01.
fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let full = match s.len() {
        4 => format!("{}-01-01", s),
        7 => format!("{}-01", s),
        10 => s.to_string(),
        _ => return None,
    };

    NaiveDate::parse_from_str(&full, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_date_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let day = parse_date(date)?.date();

    let (clock, offset) = match time.find(['Z', 'z', '+', '-']) {
        Some(at) => (&time[..at], Some(parse_offset(&time[at..])?)),
        None => (time, None),
    };

    let clock = NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()?;
    let naive = day.and_time(clock);

    match offset {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|date_time| date_time.with_timezone(&Utc)),
        None => Some(naive.and_utc()),
    }
}

/// `Z`, `±HH:mm` or `±HHmm`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = s[1..].replace(':', "");
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// A Date object, serialized as milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateScalar(DateValue);

impl DateScalar {
    pub fn value(&self) -> DateValue {
        self.0
    }
}

impl ScalarCodec for DateScalar {
    fn parse_value(value: serde_json::Value) -> Result<Self, ScalarError> {
        let date = match value {
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(DateValue::from_millis)
                .unwrap_or(DateValue::Invalid),
            serde_json::Value::String(str_value) => DateValue::parse_str(&str_value),
            serde_json::Value::Null => DateValue::from_millis(0.0),
            serde_json::Value::Bool(flag) => DateValue::from_millis(if flag { 1.0 } else { 0.0 }),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => DateValue::Invalid,
        };

        Ok(DateScalar(date))
    }

    fn serialize(&self) -> serde_json::Value {
        self.0
            .timestamp_millis()
            .map(serde_json::Value::from)
            .unwrap_or(serde_json::Value::Null)
    }

    fn parse_literal(literal: &Literal) -> Result<Option<Self>, ScalarError> {
        match literal {
            Literal::Int(text) | Literal::Float(text) => {
                let millis = text.parse::<f64>().unwrap_or(f64::NAN);
                Ok(Some(DateScalar(DateValue::from_millis(millis))))
            }
            _ => Ok(None),
        }
    }
}

#[Scalar(name = "Date")]
impl ScalarType for DateScalar {
    fn parse(value: Value) -> InputValueResult<Self> {
        super::parse_input(value)
    }

    fn to_value(&self) -> Value {
        super::to_output(self)
    }
}

impl From<DateTime<Utc>> for DateScalar {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self(DateValue::Valid(date_time))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_round_trips_millis() {
        for millis in [
            0_i64,
            1,
            -1,
            1_500_000_000_000,
            -62_135_596_800_000,
            8_000_000_000_000_000,
        ] {
            let scalar = DateScalar::parse_value(json!(millis)).unwrap();
            assert_eq!(scalar.serialize(), json!(millis));
        }
    }

    #[test]
    fn parse_value_truncates_fractional_millis() {
        let scalar = DateScalar::parse_value(json!(1500.9)).unwrap();
        assert_eq!(scalar.serialize(), json!(1500));
    }

    #[test]
    fn parse_value_reads_date_strings() {
        let rfc3339 = DateScalar::parse_value(json!("2017-07-14T02:40:00Z")).unwrap();
        assert_eq!(rfc3339.serialize(), json!(1_500_000_000_000_i64));

        let offset = DateScalar::parse_value(json!("2017-07-14T04:40:00+02:00")).unwrap();
        assert_eq!(offset.serialize(), json!(1_500_000_000_000_i64));

        let rfc2822 = DateScalar::parse_value(json!("Fri, 14 Jul 2017 02:40:00 +0000")).unwrap();
        assert_eq!(rfc2822.serialize(), json!(1_500_000_000_000_i64));

        let date_only = DateScalar::parse_value(json!("1970-01-02")).unwrap();
        assert_eq!(date_only.serialize(), json!(86_400_000));
    }

    #[test]
    fn parse_value_reads_partial_dates_as_utc() {
        let cases = [
            ("2017", 1_483_228_800_000_i64),
            ("2017-07", 1_498_867_200_000),
            ("2017-07-14", 1_499_990_400_000),
        ];

        for (input, millis) in cases {
            let scalar = DateScalar::parse_value(json!(input)).unwrap();
            assert_eq!(scalar.serialize(), json!(millis), "{}", input);
        }
    }

    #[test]
    fn parse_value_reads_iso_date_time_forms() {
        let cases = [
            ("2017-07-14T02:40Z", 1_500_000_000_000_i64),
            ("2017-07-14T02:40", 1_500_000_000_000),
            ("2017-07-14T02:40:00", 1_500_000_000_000),
            ("2017-07-14T02:40:00.000", 1_500_000_000_000),
            ("2017-07-14T02:40:00.250Z", 1_500_000_000_250),
            ("2017-07-14T04:40+02:00", 1_500_000_000_000),
            ("2017-07-14T00:40:00-02:00", 1_500_000_000_000),
        ];

        for (input, millis) in cases {
            let scalar = DateScalar::parse_value(json!(input)).unwrap();
            assert_eq!(scalar.serialize(), json!(millis), "{}", input);
        }
    }

    #[test]
    fn parse_value_rejects_malformed_iso_forms() {
        for input in ["17", "2017-7", "2017-13", "2017-07-14T25:00", "2017-07-14T02:40+2"] {
            let scalar = DateScalar::parse_value(json!(input)).unwrap();
            assert_eq!(scalar.value(), DateValue::Invalid, "{}", input);
        }
    }

    #[test]
    fn parse_value_yields_invalid_date_instead_of_failing() {
        for value in [
            json!("not a date"),
            json!([1, 2]),
            json!({ "at": 1 }),
            json!(9e15),
        ] {
            let scalar = DateScalar::parse_value(value).unwrap();
            assert_eq!(scalar.value(), DateValue::Invalid);
            assert_eq!(scalar.serialize(), serde_json::Value::Null);
        }
    }

    #[test]
    fn parse_value_coerces_null_and_booleans() {
        assert_eq!(
            DateScalar::parse_value(serde_json::Value::Null)
                .unwrap()
                .serialize(),
            json!(0)
        );
        assert_eq!(
            DateScalar::parse_value(json!(true)).unwrap().serialize(),
            json!(1)
        );
    }

    #[test]
    fn parse_literal_reads_numbers() {
        let from_int = DateScalar::parse_literal(&Literal::Int("1500000000000".into()))
            .unwrap()
            .unwrap();
        assert_eq!(from_int.serialize(), json!(1_500_000_000_000_i64));

        let from_float = DateScalar::parse_literal(&Literal::Float("1.5e12".into()))
            .unwrap()
            .unwrap();
        assert_eq!(from_float.serialize(), json!(1_500_000_000_000_i64));
    }

    #[test]
    fn parse_literal_declines_other_kinds() {
        for literal in [
            Literal::String("2017-07-14T02:40:00Z".into()),
            Literal::Boolean(true),
            Literal::Null,
            Literal::Enum("NOW".into()),
            Literal::List(vec![Literal::Int("1".into())]),
            Literal::Object(vec![]),
        ] {
            assert_eq!(DateScalar::parse_literal(&literal), Ok(None));
        }
    }

    #[test]
    fn scalar_type() {
        let gql_value = Value::from_json(json!(1_500_000_000_000_i64)).unwrap();
        let scalar = <DateScalar as ScalarType>::parse(gql_value.clone()).unwrap();
        assert_eq!(ScalarType::to_value(&scalar), gql_value);

        // Strings are not literal dates but are accepted as variables
        let from_string =
            <DateScalar as ScalarType>::parse(Value::String("2017-07-14T02:40:00Z".into()))
                .unwrap();
        assert_eq!(from_string, scalar);
    }
}
