use std::{collections::HashSet, fmt};

use anyhow::Context;
use chrono::{DateTime, Utc};
use cucumber::{given, then, when, World as _};
use tempfile::TempDir;
use tokio::sync::watch;
use waybill::{
    controller::{FormController, ProfileField},
    models::{
        draft::DraftUpdate,
        trip::{DriverProfile, Meridiem, TripRecord},
    },
    store::{KvStore, ProfileStore, TripStore},
    views::TripsListView,
};

#[derive(Debug, cucumber::World, Default)]
struct AppWorld {
    state: Option<TestState>,
    remembered_id: Option<String>,
    remembered_timestamp: Option<DateTime<Utc>>,
}

impl AppWorld {
    fn state(&mut self) -> &mut TestState {
        self.state
            .as_mut()
            .expect("state must be initialised first")
    }

    fn state_ref(&self) -> &TestState {
        self.state
            .as_ref()
            .expect("state must be initialised first")
    }
}

struct TestState {
    controller: FormController,
    trips: TripStore,
    profiles: ProfileStore,
    revision: watch::Receiver<u64>,
    _root: TempDir,
}

impl fmt::Debug for TestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestState").finish()
    }
}

impl TestState {
    fn new() -> anyhow::Result<Self> {
        let root = TempDir::new().context("create temp dir for bdd world")?;
        let kv = KvStore::new(root.path().join("data"));
        let trips = TripStore::new(kv.clone());
        let profiles = ProfileStore::new(kv);
        let revision = trips.subscribe();
        let controller =
            FormController::new(trips.clone(), profiles.clone(), DriverProfile::default());
        Ok(Self {
            controller,
            trips,
            profiles,
            revision,
            _root: root,
        })
    }

    async fn stored(&self) -> Vec<TripRecord> {
        self.trips.list().await.expect("load trips")
    }

    async fn record_of(&self, passenger: &str) -> TripRecord {
        self.stored()
            .await
            .into_iter()
            .find(|trip| trip.passenger_name == passenger)
            .unwrap_or_else(|| panic!("no stored trip for passenger {passenger}"))
    }
}

fn form_snapshot(passenger: &str, from: &str, to: &str, amount: &str) -> DraftUpdate {
    DraftUpdate {
        trip_date: "2025-03-07".into(),
        trip_time: "03:15".into(),
        time_format: Meridiem::Pm,
        passenger_name: passenger.into(),
        via_service: "Uber".into(),
        from_location: from.into(),
        to_location: to.into(),
        trip_amount: amount.into(),
        driver_name: "Kumar".into(),
        license_plate: "TN 01 AB 1234".into(),
        passenger_capacity: "4".into(),
    }
}

#[given("a fresh application state")]
async fn given_fresh_state(world: &mut AppWorld) {
    world.state = Some(TestState::new().expect("state"));
    world.remembered_id = None;
    world.remembered_timestamp = None;
}

#[when(
    regex = r#"^I submit a waybill for passenger "([^"]+)" from "([^"]+)" to "([^"]+)" with amount "([^"]*)"$"#
)]
async fn when_submit_waybill(
    world: &mut AppWorld,
    passenger: String,
    from: String,
    to: String,
    amount: String,
) {
    let state = world.state();
    state
        .controller
        .set_draft(&form_snapshot(&passenger, &from, &to, &amount));
    state.controller.submit().await.expect("submit waybill");
}

#[when(regex = r#"^I start editing the trip of passenger "([^"]+)"$"#)]
async fn when_start_editing(world: &mut AppWorld, passenger: String) {
    let record = world.state_ref().record_of(&passenger).await;
    world.remembered_id = Some(record.id.clone());
    world.remembered_timestamp = Some(record.timestamp);
    world
        .state()
        .controller
        .enter_edit(&record.id)
        .await
        .expect("enter edit mode");
}

#[when(regex = r#"^I change the passenger to "([^"]+)" and submit$"#)]
async fn when_change_and_submit(world: &mut AppWorld, passenger: String) {
    let state = world.state();
    state
        .controller
        .set_draft(&form_snapshot(&passenger, "Saidapet", "Perungudi", "42.5"));
    state.controller.submit().await.expect("submit edit");
}

#[when(regex = r#"^I delete the trip of passenger "([^"]+)"$"#)]
async fn when_delete(world: &mut AppWorld, passenger: String) {
    let state = world.state_ref();
    let record = state.record_of(&passenger).await;
    let index = state
        .trips
        .position_of(&record.id)
        .await
        .expect("position lookup")
        .expect("record present");
    state.trips.remove_at(index).await.expect("remove trip");
}

#[when("I clear all trips")]
async fn when_clear_all(world: &mut AppWorld) {
    world.state_ref().trips.clear().await.expect("clear trips");
}

#[when("I unlock the driver name for editing")]
async fn when_unlock_driver_name(world: &mut AppWorld) {
    world
        .state()
        .controller
        .toggle_field(ProfileField::DriverName, "")
        .await
        .expect("unlock driver name");
}

#[when(regex = r#"^I commit the driver name "([^"]+)"$"#)]
async fn when_commit_driver_name(world: &mut AppWorld, name: String) {
    world
        .state()
        .controller
        .toggle_field(ProfileField::DriverName, &name)
        .await
        .expect("commit driver name");
}

#[then(regex = r"^the store has (\d+) trips?$")]
async fn then_store_has(world: &mut AppWorld, expected: usize) {
    assert_eq!(world.state_ref().stored().await.len(), expected);
}

#[then("every stored trip has a distinct identifier")]
async fn then_distinct_ids(world: &mut AppWorld) {
    let trips = world.state_ref().stored().await;
    let ids: HashSet<&str> = trips.iter().map(|trip| trip.id.as_str()).collect();
    assert_eq!(ids.len(), trips.len());
}

#[then(regex = r#"^the stored passengers are "([^"]*)"$"#)]
async fn then_passengers_are(world: &mut AppWorld, expected: String) {
    let passengers: Vec<String> = world
        .state_ref()
        .stored()
        .await
        .into_iter()
        .map(|trip| trip.passenger_name)
        .collect();
    assert_eq!(passengers.join(", "), expected);
}

#[then(regex = r#"^the trip of passenger "([^"]+)" kept the remembered identifier and timestamp$"#)]
async fn then_kept_identity(world: &mut AppWorld, passenger: String) {
    let record = world.state_ref().record_of(&passenger).await;
    assert_eq!(Some(record.id), world.remembered_id);
    assert_eq!(Some(record.timestamp), world.remembered_timestamp);
}

#[then("the history view shows the no-trips message")]
async fn then_no_trips_message(world: &mut AppWorld) {
    use askama::Template;

    let trips = world.state_ref().stored().await;
    let rendered = TripsListView::from_records(&trips)
        .render()
        .expect("render history view");
    assert!(rendered.contains("No trips saved yet."));
}

#[then(regex = r#"^the persistent driver name default is "([^"]+)"$"#)]
async fn then_persistent_driver_name(world: &mut AppWorld, expected: String) {
    let persisted = world
        .state_ref()
        .profiles
        .load()
        .await
        .expect("load profile defaults");
    assert_eq!(persisted.driver_name, expected);
}

#[then(regex = r#"^both forms show the driver name "([^"]+)"$"#)]
async fn then_both_forms_show(world: &mut AppWorld, expected: String) {
    // The main form reads the controller's working profile; the profile form
    // reads the persisted defaults. After a commit they must agree.
    let state = world.state_ref();
    let persisted = state.profiles.load().await.expect("load profile defaults");
    assert_eq!(state.controller.profile().driver_name, expected);
    assert_eq!(persisted.driver_name, expected);
}

#[then(regex = r"^the store revision is (\d+)$")]
async fn then_revision_is(world: &mut AppWorld, expected: u64) {
    assert_eq!(*world.state_ref().revision.borrow(), expected);
}

#[tokio::main]
async fn main() {
    AppWorld::cucumber()
        .fail_on_skipped()
        .with_default_cli()
        .run("tests/features")
        .await;
}
