use crate::models::event::Event;
use chrono::{FixedOffset, NaiveDate};
use std::collections::BTreeMap;

/// Partition events into local-calendar-day buckets.
///
/// The bucket key is the date of the timestamp seen from `tz`, so a punch at
/// 00:10 local time stays on the day it was entered even when the UTC date is
/// the previous one. Each bucket is sorted by timestamp; the sort is stable,
/// so events sharing an instant keep their arrival order.
///
/// Keys come out of the map in calendar order.
pub fn group_by_local_date(events: &[Event], tz: &FixedOffset) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();

    for ev in events {
        groups
            .entry(ev.local_date(tz))
            .or_default()
            .push(ev.clone());
    }

    for bucket in groups.values_mut() {
        bucket.sort_by_key(|e| e.timestamp);
    }

    groups
}
