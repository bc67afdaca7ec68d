use crate::introspection::Introspector;
use crate::response::ObjectGraphPopulator;
use crate::response::ParsingError;
use crate::test::fixtures::Airport;
use crate::test::fixtures::Flight;
use crate::test::fixtures::Gate;
use crate::test::fixtures::Route;
use crate::test::fixtures::flight_json;
use crate::test::fixtures::flights_json;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn singular_flight_is_fully_populated() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = flight_json();

    let flight: Flight =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(flight.flight_id, "1272");
    assert_eq!(flight.seats, 168);
    assert_eq!(flight.route.origin, "LAS");
    assert_eq!(flight.route.destination, "PHX");
    assert_eq!(flight.passenger.len(), 5);
    assert!(flight.passenger[0].name.contains("Crichlow"));
    assert_eq!(flight.passenger[4].passenger_id, "p5");
    assert_eq!(flight.pilot, "Eric Crichlow");
}

#[test]
fn plural_flights_preserve_response_order() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = flights_json();
    let items = data["flights"].as_array().unwrap();

    let flights: Vec<Flight> =
        ObjectGraphPopulator::populate_plural_as(items, &shape).unwrap();

    assert_eq!(flights.len(), 3);
    assert_eq!(flights[0].flight_id, "1272");
    assert_eq!(flights[1].flight_id, "3310");
    assert_eq!(flights[2].flight_id, "4021");
}

#[test]
fn empty_object_array_never_keeps_the_placeholder() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = flights_json();
    let items = data["flights"].as_array().unwrap();

    let flights: Vec<Flight> =
        ObjectGraphPopulator::populate_plural_as(items, &shape).unwrap();

    assert!(flights[0].passenger.is_empty());
    assert_eq!(flights[1].passenger.len(), 1);
    assert_eq!(flights[1].passenger[0].name, "Jo Baker");
}

#[test]
fn absent_object_array_is_cleared() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = flights_json();
    let items = data["flights"].as_array().unwrap();

    let flights: Vec<Flight> =
        ObjectGraphPopulator::populate_plural_as(items, &shape).unwrap();

    assert_eq!(flights[2].pilot, "Ravi Shah");
    assert!(flights[2].passenger.is_empty());
}

#[test]
fn failed_setter_leaves_field_unset_and_siblings_populated() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = json!({
        "flightID": "1272",
        "seats": "a great many",
        "pilot": "Eric Crichlow",
    });

    let flight: Flight =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(flight.seats, 0);
    assert_eq!(flight.flight_id, "1272");
    assert_eq!(flight.pilot, "Eric Crichlow");
}

#[test]
fn non_object_nested_value_is_skipped() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();
    let data = json!({
        "flightID": "1272",
        "route": "LAS-PHX",
        "passenger": { "name": "not a list" },
    });

    let flight: Flight =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(flight.route, Route::default());
    assert!(flight.passenger.is_empty());
    assert_eq!(flight.flight_id, "1272");
}

#[test]
fn scalar_values_are_passed_without_coercion() {
    let shape = Introspector::default().shape_of::<Airport>().unwrap();
    let data = json!({
        "code": "LAS",
        "gates": ["A1", "B2"],
        "runways": [1, 19],
        "elevation": 2181.5,
        "metadata": { "terminal": 3 },
    });

    let airport: Airport =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(airport.gates, vec!["A1", "B2"]);
    assert_eq!(airport.runways, vec![1, 19]);
    assert_eq!(airport.elevation, Some(2181.5));
    assert_eq!(airport.metadata, json!({ "terminal": 3 }));
}

#[test]
fn missing_keys_keep_zero_values() {
    let shape = Introspector::default().shape_of::<Airport>().unwrap();
    let data = json!({ "code": "PHX" });

    let airport: Airport =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(airport.code, "PHX");
    assert_eq!(airport.gates, vec![String::new()]);
    assert_eq!(airport.elevation, None);
}

#[test]
fn default_setter_failure_is_soft() {
    let shape = Introspector::default().shape_of::<Gate>().unwrap();
    let data = json!({ "number": "B12" });

    let gate: Gate =
        ObjectGraphPopulator::populate_singular_as(data.as_object().unwrap(), &shape)
            .unwrap();

    assert_eq!(gate, Gate::default());
}

#[test]
fn non_object_elements_are_skipped() {
    let shape = Introspector::default().shape_of::<Route>().unwrap();
    let items = vec![
        json!({ "origin": "LAS" }),
        json!("SEA"),
        json!({ "origin": "BOI" }),
    ];

    let routes: Vec<Route> =
        ObjectGraphPopulator::populate_plural_as(&items, &shape).unwrap();

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[1].origin, "BOI");
}

#[test]
fn requesting_the_wrong_type_is_a_parsing_error() {
    let shape = Introspector::default().shape_of::<Route>().unwrap();
    let data = json!({ "origin": "LAS" });

    let result =
        ObjectGraphPopulator::populate_singular_as::<Flight>(data.as_object().unwrap(), &shape);

    assert!(
        matches!(result, Err(ParsingError::TargetTypeMismatch { .. })),
        "{result:?}",
    );
}

proptest! {
    #[test]
    fn plural_population_preserves_order(
        flight_ids in prop::collection::vec("[0-9]{1,6}", 0..20),
    ) {
        let shape = Introspector::default().shape_of::<Flight>().unwrap();
        let items: Vec<serde_json::Value> =
            flight_ids.iter()
                .map(|flight_id| json!({ "flightID": flight_id }))
                .collect();

        let flights: Vec<Flight> =
            ObjectGraphPopulator::populate_plural_as(&items, &shape).unwrap();

        let populated_ids: Vec<String> =
            flights.into_iter()
                .map(|flight| flight.flight_id)
                .collect();
        prop_assert_eq!(populated_ids, flight_ids);
    }
}
