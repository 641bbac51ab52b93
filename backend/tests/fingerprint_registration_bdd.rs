//! Behaviour tests for the fingerprint lookup-or-register endpoint.
//!
//! Scenarios drive the real Actix handler and registrar service over the
//! in-memory repository, so they exercise routing, outcome mapping and the
//! trace middleware without a database.

use std::sync::Arc;

use actix_web::test as actix_test;
use actix_web::{App, web};
use fingerprint_registrar::Trace;
use fingerprint_registrar::domain::ports::FingerprintRegistrar;
use fingerprint_registrar::domain::{
    FingerprintId, FingerprintRecord, FingerprintRegistrarService, TRACE_ID_HEADER, UNKNOWN_USER,
};
use fingerprint_registrar::inbound::http::fingerprints::{
    self, AUTHORIZED_BODY, INSERT_FAILED_PREFIX, NO_DATA_BODY, PENDING_BODY,
};
use fingerprint_registrar::inbound::http::state::HttpState;
use fingerprint_registrar::test_support::InMemoryFingerprintRepository;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

#[derive(Default, ScenarioState)]
struct RegistrationWorld {
    repository: Slot<Arc<InMemoryFingerprintRepository>>,
    last_status: Slot<u16>,
    last_body: Slot<String>,
    last_trace_id: Slot<String>,
}

impl RegistrationWorld {
    fn use_repository(&self, repository: InMemoryFingerprintRepository) {
        self.repository.set(Arc::new(repository));
    }

    fn repository(&self) -> Arc<InMemoryFingerprintRepository> {
        self.repository.get().expect("fingerprint store configured")
    }

    fn request(&self, uri: &str) {
        let registrar: Arc<dyn FingerprintRegistrar> =
            Arc::new(FingerprintRegistrarService::new(self.repository()));

        let (status, body, trace_id) = actix_rt::System::new().block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(HttpState::new(registrar)))
                    .wrap(Trace)
                    .configure(fingerprints::configure),
            )
            .await;
            let response =
                actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = actix_test::read_body(response).await;
            let body = String::from_utf8(body.to_vec()).expect("utf8 body");
            (status, body, trace_id)
        });

        self.last_status.set(status);
        self.last_body.set(body);
        if let Some(trace_id) = trace_id {
            self.last_trace_id.set(trace_id);
        }
    }

    fn body(&self) -> String {
        self.last_body.get().expect("response body recorded")
    }
}

#[fixture]
fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("an empty fingerprint store")]
fn an_empty_fingerprint_store(world: &RegistrationWorld) {
    world.use_repository(InMemoryFingerprintRepository::default());
}

#[given("a fingerprint store containing {id}")]
fn a_fingerprint_store_containing(world: &RegistrationWorld, id: String) {
    let id = FingerprintId::new(id);
    world.use_repository(InMemoryFingerprintRepository::with_records([
        FingerprintRecord::pending(id),
    ]));
}

#[given("an unreachable fingerprint store")]
fn an_unreachable_fingerprint_store(world: &RegistrationWorld) {
    let repository = InMemoryFingerprintRepository::default();
    repository.fail_inserts();
    world.use_repository(repository);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("a sensor reports fingerprint {id}")]
fn a_sensor_reports_fingerprint(world: &RegistrationWorld, id: String) {
    world.request(&format!(
        "{}?fingerprintID={id}",
        fingerprints::FINGERPRINT_PATH
    ));
}

#[when("a sensor reports no fingerprint")]
fn a_sensor_reports_no_fingerprint(world: &RegistrationWorld) {
    world.request(fingerprints::FINGERPRINT_PATH);
}

#[when("a legacy sensor reports fingerprint {id}")]
fn a_legacy_sensor_reports_fingerprint(world: &RegistrationWorld, id: String) {
    world.request(&format!(
        "{}?fingerprintID={id}",
        fingerprints::LEGACY_SENSOR_PATH
    ));
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response status is {status}")]
fn the_response_status_is(world: &RegistrationWorld, status: u16) {
    assert_eq!(world.last_status.get(), Some(status));
}

#[then("the device is told it is authorized")]
fn the_device_is_told_it_is_authorized(world: &RegistrationWorld) {
    assert_eq!(world.body(), AUTHORIZED_BODY);
}

#[then("the device is told authorization is pending")]
fn the_device_is_told_authorization_is_pending(world: &RegistrationWorld) {
    assert_eq!(world.body(), PENDING_BODY);
}

#[then("the device is told no data was received")]
fn the_device_is_told_no_data_was_received(world: &RegistrationWorld) {
    assert_eq!(world.body(), NO_DATA_BODY);
}

#[then("the device is told the insert failed")]
fn the_device_is_told_the_insert_failed(world: &RegistrationWorld) {
    let body = world.body();
    let detail = body
        .strip_prefix(INSERT_FAILED_PREFIX)
        .unwrap_or_else(|| panic!("unexpected body: {body}"));
    assert_eq!(detail, "store unreachable");
}

#[then("fingerprint {id} is owned by the placeholder user")]
fn fingerprint_is_owned_by_the_placeholder_user(world: &RegistrationWorld, id: String) {
    assert!(
        world
            .repository()
            .records()
            .contains(&(id, UNKNOWN_USER.to_owned()))
    );
}

#[then("the store holds {count} fingerprints")]
fn the_store_holds_fingerprints(world: &RegistrationWorld, count: usize) {
    assert_eq!(world.repository().records().len(), count);
}

#[then("the response carries a trace identifier")]
fn the_response_carries_a_trace_identifier(world: &RegistrationWorld) {
    assert!(world.last_trace_id.get().is_some());
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Unseen fingerprint is recorded"
)]
fn unseen_fingerprint_is_recorded(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Known fingerprint is authorized"
)]
fn known_fingerprint_is_authorized(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Missing fingerprint is reported"
)]
fn missing_fingerprint_is_reported(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Unreachable store during registration"
)]
fn unreachable_store_during_registration(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Second sighting is authorized"
)]
fn second_sighting_is_authorized(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fingerprint_registration.feature",
    name = "Legacy sensor path"
)]
fn legacy_sensor_path(world: RegistrationWorld) {
    let _ = world;
}
