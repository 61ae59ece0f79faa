//! Records screen: today's per-slot attendance counts for one class.

pub mod export;

use crate::errors::AppResult;
use crate::hierarchy::ClassIdentity;
use crate::models::record::AttendanceRecord;
use crate::models::time_slot::TimeSlot;
use crate::store::{CachedStore, DocumentStore};
use chrono::NaiveDate;

/// Which record list to build.
#[derive(Debug, Clone)]
pub struct RecordsQuery {
    pub identity: ClassIdentity,
    /// `None` means every slot.
    pub time_slot: Option<TimeSlot>,
    pub date: NaiveDate,
}

impl RecordsQuery {
    pub fn slots(&self) -> Vec<TimeSlot> {
        match self.time_slot {
            Some(s) => vec![s],
            None => TimeSlot::ALL.to_vec(),
        }
    }

    /// One collection identifier per candidate slot, in slot order.
    pub fn collection_ids(&self) -> Vec<(TimeSlot, String)> {
        self.slots()
            .into_iter()
            .map(|s| (s, self.identity.collection_id(s)))
            .collect()
    }
}

/// What the screen shows once every query has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsView {
    Empty,
    Records(Vec<AttendanceRecord>),
}

impl RecordsView {
    pub fn records(&self) -> &[AttendanceRecord] {
        match self {
            RecordsView::Empty => &[],
            RecordsView::Records(r) => r,
        }
    }
}

pub struct RecordsFlow<S> {
    store: CachedStore<S>,
}

impl<S: DocumentStore> RecordsFlow<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: CachedStore::new(store),
        }
    }

    pub fn store(&self) -> &CachedStore<S> {
        &self.store
    }

    /// Run one query per slot and assemble the whole list before returning.
    /// Empty or missing collections mean "no records for that slot"; any
    /// failure to query aborts with an error.
    pub fn load(&self, query: &RecordsQuery) -> AppResult<RecordsView> {
        let mut records = Vec::new();

        for (slot, collection) in query.collection_ids() {
            let count = self.store.count_for_date(&collection, query.date)?;
            if count == 0 {
                log::debug!("no documents in {collection} for {}", query.date);
                continue;
            }

            records.push(AttendanceRecord {
                id: collection,
                date: query.date,
                department: query.identity.department.clone(),
                course: query.identity.course.clone(),
                branch: query.identity.branch.clone(),
                year: query.identity.year.clone(),
                semester: query.identity.semester.clone(),
                time_slot: slot,
                present_count: count,
                absent_count: 0,
            });
        }

        if records.is_empty() {
            Ok(RecordsView::Empty)
        } else {
            Ok(RecordsView::Records(records))
        }
    }

    /// Drop memoized counts and re-issue every query.
    pub fn refresh(&self, query: &RecordsQuery) -> AppResult<RecordsView> {
        self.store.invalidate();
        self.load(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore {
        counts: RefCell<HashMap<String, u64>>,
        fail: bool,
        asked: RefCell<Vec<String>>,
    }

    impl DocumentStore for MapStore {
        fn count_for_date(&self, c: &str, _d: NaiveDate) -> AppResult<u64> {
            self.asked.borrow_mut().push(c.to_string());
            if self.fail {
                return Err(AppError::Store("HTTP 503".into()));
            }
            Ok(self.counts.borrow().get(c).copied().unwrap_or(0))
        }
    }

    fn query(slot: Option<TimeSlot>) -> RecordsQuery {
        RecordsQuery {
            identity: ClassIdentity {
                department: "Science".into(),
                course: "B.Sc".into(),
                branch: "Physics".into(),
                year: "2nd Year".into(),
                semester: "Semester 3".into(),
            },
            time_slot: slot,
            date: NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
        }
    }

    #[test]
    fn no_documents_anywhere_is_the_empty_state() {
        let flow = RecordsFlow::new(MapStore::default());
        let view = flow.load(&query(None)).unwrap();
        assert_eq!(view, RecordsView::Empty);
        assert_eq!(flow.store().inner().asked.borrow().len(), 3);
    }

    #[test]
    fn keeps_non_empty_slots_with_zero_absent() {
        let store = MapStore::default();
        let q = query(None);
        store
            .counts
            .borrow_mut()
            .insert(q.identity.collection_id(TimeSlot::Afternoon), 18);
        store
            .counts
            .borrow_mut()
            .insert(q.identity.collection_id(TimeSlot::Evening), 0);

        let flow = RecordsFlow::new(store);
        let view = flow.load(&q).unwrap();
        let records = view.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time_slot, TimeSlot::Afternoon);
        assert_eq!(records[0].present_count, 18);
        assert_eq!(records[0].absent_count, 0);
        assert_eq!(
            records[0].id,
            "science_b-sc_physics_2nd-year_semester-3_afternoon_attendance"
        );
    }

    #[test]
    fn slot_filter_issues_a_single_query() {
        let flow = RecordsFlow::new(MapStore::default());
        flow.load(&query(Some(TimeSlot::Morning))).unwrap();
        assert_eq!(
            flow.store().inner().asked.borrow().as_slice(),
            &["science_b-sc_physics_2nd-year_semester-3_morning_attendance".to_string()]
        );
    }

    #[test]
    fn refresh_reissues_every_query() {
        let flow = RecordsFlow::new(MapStore::default());
        let q = query(None);
        flow.load(&q).unwrap();
        flow.load(&q).unwrap();
        assert_eq!(flow.store().backend_queries(), 3);

        flow.refresh(&q).unwrap();
        assert_eq!(flow.store().backend_queries(), 6);
    }

    #[test]
    fn transport_failure_is_an_error_not_empty() {
        let flow = RecordsFlow::new(MapStore {
            fail: true,
            ..Default::default()
        });
        assert!(matches!(flow.load(&query(None)), Err(AppError::Store(_))));
    }
}
