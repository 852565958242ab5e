use chrono::{Duration, NaiveDate};

use interns::codec::{to_local_date, to_stored_format};
use interns::model::{Field, InternId, InternRecord};
use interns::validation::{DATE_NOT_CORRECT, EMAIL_NOT_CORRECT, REQUIRED, validate};

fn record(start: &str, end: &str) -> InternRecord {
    let mut record = InternRecord::empty(InternId::Text("i-1".to_string()));
    record.name = "Grace Hopper".to_string();
    record.email = "grace@navy.example.mil".to_string();
    record.internship_start = start.to_string();
    record.internship_end = end.to_string();
    record
}

/// Every day from 2023-12-25 through 2024-03-05, which crosses a year end
/// and a leap day.
fn days() -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    (0..72).map(|n| first + Duration::days(n)).collect()
}

#[test]
fn end_after_start_never_errors_on_end() {
    let days = days();
    for (i, start) in days.iter().enumerate() {
        for end in &days[i + 1..] {
            let errors = validate(&record(&start.to_string(), &end.to_string()));
            assert!(errors.is_valid(), "{start} .. {end}: {errors}");
        }
    }
}

#[test]
fn end_on_or_before_start_is_not_correct() {
    let days = days();
    for (i, start) in days.iter().enumerate() {
        for end in &days[..=i] {
            let errors = validate(&record(&start.to_string(), &end.to_string()));
            assert_eq!(errors.len(), 1, "{start} .. {end}");
            assert_eq!(errors.get(Field::InternshipEnd), Some(DATE_NOT_CORRECT));
        }
    }
}

#[test]
fn missing_field_is_the_only_error() {
    for field in Field::ALL {
        let mut r = record("2024-01-01", "2024-02-01");
        r.set(field, "");
        let errors = validate(&r);
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(field, REQUIRED)]);
    }
}

#[test]
fn emails_without_domain_dot_structure_are_not_correct() {
    for email in ["user", "user@", "user@localhost", "user@.com", "user@com.", "a b@c.d"] {
        let mut r = record("2024-01-01", "2024-02-01");
        r.email = email.to_string();
        assert_eq!(validate(&r).get(Field::Email), Some(EMAIL_NOT_CORRECT), "{email}");
    }

    let mut r = record("2024-01-01", "2024-02-01");
    r.email = "user@example.com".to_string();
    assert!(validate(&r).is_valid());
}

#[test]
fn display_dates_survive_storage_round_trip() {
    for day in days() {
        let display = day.format("%Y-%m-%d").to_string();
        let stored = to_stored_format(&display).unwrap();
        assert_eq!(to_local_date(&stored).unwrap(), display);
    }
}

#[test]
fn stored_dates_keep_their_date_component() {
    for day in days() {
        for time in ["00:00", "09:30", "23:59"] {
            let stored = format!("{}T{time}+00Z", day.format("%Y-%m-%d"));
            let again = to_stored_format(&to_local_date(&stored).unwrap()).unwrap();
            assert_eq!(again.get(..10), stored.get(..10), "{stored}");
        }
    }
}

#[test]
fn stored_offset_timestamp_displays_its_calendar_date() {
    assert_eq!(to_local_date("2024-03-05T00:00+02:00").unwrap(), "2024-03-05");
}
