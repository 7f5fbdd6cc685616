use crate::domain::{ClientLocationRecord, GeofenceArea};
use crate::membership::{ClientAssociation, associate};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What an admin view displays.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSnapshot {
    pub associations: Vec<ClientAssociation>,
    pub area_count: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub area_failures: u32,
    pub location_failures: u32,
}

/// State of one live view. Only the poll handler writes to it.
#[derive(Debug, Default)]
pub struct LiveView {
    areas: Option<Vec<GeofenceArea>>,
    locations: Vec<ClientLocationRecord>,
    snapshot: LiveSnapshot,
}

impl LiveView {
    pub fn has_areas(&self) -> bool {
        self.areas.is_some()
    }

    pub fn snapshot(&self) -> &LiveSnapshot {
        &self.snapshot
    }

    /// Swaps in a new area set and recomputes against the locations already known.
    pub fn apply_areas(&mut self, areas: Vec<GeofenceArea>) {
        self.areas = Some(areas);
        self.snapshot.area_failures = 0;
        self.recompute();
    }

    pub fn apply_locations(&mut self, locations: Vec<ClientLocationRecord>, now: DateTime<Utc>) {
        self.locations = locations;
        self.snapshot.refreshed_at = Some(now);
        self.snapshot.location_failures = 0;
        self.recompute();
    }

    /// Keeps the previous areas, only counts the failed fetch.
    pub fn record_area_failure(&mut self) {
        self.snapshot.area_failures = self.snapshot.area_failures.saturating_add(1);
    }

    /// Keeps the previous locations, only counts the failed fetch.
    pub fn record_location_failure(&mut self) {
        self.snapshot.location_failures = self.snapshot.location_failures.saturating_add(1);
    }

    fn recompute(&mut self) {
        let areas = self.areas.as_deref().unwrap_or_default();
        self.snapshot.associations = associate(&self.locations, areas);
        self.snapshot.area_count = areas.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeofenceDraft, LatLng};
    use pretty_assertions::assert_eq;

    fn office() -> GeofenceArea {
        let draft = GeofenceDraft::new("Office", "HQ", vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 10.0), LatLng::new(10.0, 0.0)]).expect("valid draft");
        GeofenceArea::new("office", draft, Utc::now())
    }

    fn record(lat: f64, lng: f64) -> ClientLocationRecord {
        ClientLocationRecord {
            client_id: "phone-1".to_string(),
            lat,
            lng,
            punch_status: "".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn locations_without_areas_are_not_associated() {
        let mut view = LiveView::default();

        view.apply_locations(vec![record(1.0, 1.0)], Utc::now());

        assert!(!view.has_areas());
        assert_eq!(view.snapshot().associations[0].area, None);
    }

    #[test]
    fn applying_areas_later_recomputes_known_locations() {
        let mut view = LiveView::default();
        view.apply_locations(vec![record(1.0, 1.0)], Utc::now());

        view.apply_areas(vec![office()]);

        assert_eq!(view.snapshot().area_count, 1);
        assert_eq!(view.snapshot().associations[0].area.as_ref().map(|a| a.id.as_str()), Some("office"));
    }

    #[test]
    fn a_failure_keeps_the_previous_associations() {
        let mut view = LiveView::default();
        view.apply_areas(vec![office()]);
        view.apply_locations(vec![record(1.0, 1.0)], Utc::now());
        let before = view.snapshot().associations.clone();

        view.record_location_failure();
        view.record_location_failure();

        assert_eq!(view.snapshot().associations, before);
        assert_eq!(view.snapshot().location_failures, 2);
    }

    #[test]
    fn a_successful_location_poll_only_resets_the_location_counter() {
        let mut view = LiveView::default();
        view.record_area_failure();
        view.record_location_failure();

        view.apply_locations(vec![record(20.0, 20.0)], Utc::now());

        assert_eq!(view.snapshot().location_failures, 0);
        assert_eq!(view.snapshot().area_failures, 1);
    }

    #[test]
    fn loading_areas_resets_the_area_counter() {
        let mut view = LiveView::default();
        view.record_area_failure();
        view.record_area_failure();

        view.apply_areas(vec![office()]);

        assert_eq!(view.snapshot().area_failures, 0);
    }
}
