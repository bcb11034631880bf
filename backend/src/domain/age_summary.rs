//! Mean age grouped by name initial.

use std::collections::BTreeMap;

use crate::domain::UserRecord;

/// Mean age keyed by the first character of the name.
///
/// Keys are single-character strings so the map serialises as a JSON object.
pub type AgeSummary = BTreeMap<String, f64>;

/// Average ages per initial, case-sensitively.
///
/// Records with an empty name have no initial and are left out.
///
/// # Examples
/// ```
/// use roster::domain::{average_age_by_initial, UserAge, UserRecord};
///
/// let age = |years| UserAge::new(years).expect("valid age");
/// let records = [
///     UserRecord::new("Alice", age(30)),
///     UserRecord::new("Amy", age(20)),
///     UserRecord::new("Bob", age(40)),
/// ];
/// let summary = average_age_by_initial(&records);
/// assert_eq!(summary.get("A"), Some(&25.0));
/// assert_eq!(summary.get("B"), Some(&40.0));
/// ```
pub fn average_age_by_initial(records: &[UserRecord]) -> AgeSummary {
    let mut totals: BTreeMap<char, (i128, u32)> = BTreeMap::new();
    for record in records {
        let Some(initial) = record.initial() else {
            continue;
        };
        let (sum, count) = totals.entry(initial).or_default();
        *sum += i128::from(record.age());
        *count += 1;
    }

    totals
        .into_iter()
        .map(|(initial, (sum, count))| (initial.to_string(), sum as f64 / f64::from(count)))
        .collect()
}
