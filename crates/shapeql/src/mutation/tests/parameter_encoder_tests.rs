use crate::MutableType;
use crate::mutation::MutationSpecs;
use crate::mutation::ParameterEncoder;
use crate::mutation::ParameterSpec;
use crate::test::fixtures::Airport;
use crate::test::fixtures::Flight;
use crate::test::fixtures::Ouroboros;
use crate::test::fixtures::Passenger;
use crate::test::fixtures::Route;

fn passenger() -> Passenger {
    Passenger {
        passenger_id: "p-7".to_string(),
        name: "Eric Crichlow".to_string(),
        frequent_flyer: true,
        loyalty_points: 1200,
    }
}

#[test]
fn aliased_parameter_uses_the_param_name_and_the_live_field_value() {
    let rendered = ParameterEncoder::encode_mutation(&passenger(), "updatePassenger");

    assert_eq!(
        rendered,
        r#"(id:"p-7", name:"Eric Crichlow", frequentFlyer:1, loyaltyPoints:"1200")"#,
    );
    assert!(!rendered.contains("passengerID"));
}

#[test]
fn current_values_are_used_rather_than_defaults() {
    let mut passenger = passenger();
    passenger.name = "Renamed".to_string();
    passenger.frequent_flyer = false;

    let rendered = ParameterEncoder::encode_mutation(&passenger, "updatePassenger");

    assert_eq!(
        rendered,
        r#"(id:"p-7", name:"Renamed", frequentFlyer:0, loyaltyPoints:"1200")"#,
    );
}

#[test]
fn literal_strings_are_not_quoted() {
    let rendered = ParameterEncoder::encode_mutation(&passenger(), "renamePassenger");

    assert_eq!(rendered, r#"(id:"p-7", newName:Eric Crichlow)"#);
}

#[test]
fn booleans_render_as_keywords_without_the_numeric_flag() {
    let rendered = ParameterEncoder::encode_mutation(&passenger(), "enrollPassenger");

    assert!(rendered.contains("enrolled:true"), "{rendered}");
}

#[test]
fn missing_bound_field_renders_null_without_dropping_siblings() {
    let rendered = ParameterEncoder::encode_mutation(&passenger(), "enrollPassenger");

    assert_eq!(rendered, r#"(id:"p-7", enrolled:true, seat:null)"#);
}

#[test]
fn unregistered_mutation_yields_empty_parens() {
    let rendered = ParameterEncoder::encode_mutation(&passenger(), "deletePassenger");

    assert_eq!(rendered, "()");
}

#[test]
fn arguments_are_rendered_without_parens() {
    let passenger = passenger();
    let specs = passenger.mutation_specs();

    assert_eq!(
        ParameterEncoder::encode_arguments(&passenger, &specs, "renamePassenger"),
        r#"id:"p-7", newName:Eric Crichlow"#,
    );
    assert_eq!(
        ParameterEncoder::encode_arguments(&passenger, &specs, "deletePassenger"),
        "",
    );
}

#[test]
fn strings_are_escaped_inside_quotes() {
    let mut passenger = passenger();
    passenger.name = "Eric \"Ace\" C\\".to_string();

    let rendered = ParameterEncoder::encode_mutation(&passenger, "updatePassenger");

    assert!(rendered.contains(r#"name:"Eric \"Ace\" C\\""#), "{rendered}");
}

#[test]
fn numbers_are_rendered_as_quoted_strings() {
    let airport = Airport {
        code: "LAS".to_string(),
        elevation: Some(2181.5),
        ..Airport::default()
    };
    let specs = MutationSpecs::new().add_mutation("survey", vec![
        ParameterSpec::field("elevation"),
    ]);

    assert_eq!(
        ParameterEncoder::encode(&airport, &specs, "survey"),
        r#"(elevation:"2181.5")"#,
    );
}

#[test]
fn null_lists_and_json_use_best_effort_rendering() {
    let airport = Airport {
        code: "LAS".to_string(),
        gates: vec!["A1".to_string(), "B2".to_string()],
        runways: vec![],
        elevation: None,
        metadata: serde_json::json!({ "terminal": 3 }),
    };
    let specs = MutationSpecs::new().add_mutation("survey", vec![
        ParameterSpec::field("gates"),
        ParameterSpec::field("runways"),
        ParameterSpec::field("elevation"),
        ParameterSpec::field("metadata"),
    ]);

    assert_eq!(
        ParameterEncoder::encode(&airport, &specs, "survey"),
        r#"(gates:["A1", "B2"], runways:[], elevation:null, metadata:{"terminal":3})"#,
    );
}

#[test]
fn nested_objects_render_as_input_object_literals() {
    let flight = Flight {
        flight_id: "1272".to_string(),
        route: Route {
            origin: "LAS".to_string(),
            destination: "PHX".to_string(),
        },
        booking_reference: "XYZ".to_string(),
        ..Flight::default()
    };
    let specs = MutationSpecs::new().add_mutation("reroute", vec![
        ParameterSpec::aliased("id", "flightID"),
        ParameterSpec::field("route").literal(),
    ]);

    assert_eq!(
        ParameterEncoder::encode(&flight, &specs, "reroute"),
        r#"(id:"1272", route:{origin:"LAS", destination:"PHX"})"#,
    );
}

#[test]
fn excluded_fields_can_still_be_bound_as_parameters() {
    let flight = Flight {
        booking_reference: "XYZ".to_string(),
        ..Flight::default()
    };
    let specs = MutationSpecs::new().add_mutation("cancel", vec![
        ParameterSpec::aliased("reference", "bookingReference"),
    ]);

    assert_eq!(
        ParameterEncoder::encode(&flight, &specs, "cancel"),
        r#"(reference:"XYZ")"#,
    );
}

#[test]
fn self_referencing_values_stop_at_the_depth_limit() {
    let specs = MutationSpecs::new().add_mutation("loop", vec![
        ParameterSpec::field("tail"),
    ]);

    let rendered = ParameterEncoder::encode(&Ouroboros::default(), &specs, "loop");

    assert!(rendered.starts_with("(tail:{label:\"\", tail:{"), "{rendered}");
    assert!(rendered.contains("tail:null"), "{rendered}");
}
