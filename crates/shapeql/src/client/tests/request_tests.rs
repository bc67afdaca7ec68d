use crate::OperationKind;
use crate::client::MutationRequest;
use crate::client::QueryRequest;
use crate::document::FieldArgument;
use crate::introspection::Introspector;
use crate::test::fixtures::Passenger;

#[test]
fn query_request_carries_its_settings() {
    let request =
        QueryRequest::new("https://example.com/graphql", "flights")
            .set_operation_name("FlightsQuery")
            .set_parameters("id: \"1272\"")
            .set_custom_tag("screen-3")
            .add_field_argument(FieldArgument::new("passenger", "first: 2"));

    assert_eq!(request.url(), "https://example.com/graphql");
    assert_eq!(request.request_tag(), "flights");
    assert_eq!(request.operation_name(), Some("FlightsQuery"));
    assert_eq!(request.parameters(), Some("id: \"1272\""));
    assert_eq!(request.custom_tag(), Some("screen-3"));
    assert_eq!(request.operation_kind(), OperationKind::Query);
    assert_eq!(request.field_arguments().len(), 1);
}

#[test]
fn mutation_request_tag_is_the_mutation_name() {
    let request = MutationRequest::new("https://example.com/graphql", "updatePassenger");

    assert_eq!(request.request_tag(), "updatePassenger");
    assert_eq!(request.mutation_name(), "updatePassenger");
    assert_eq!(request.operation_kind(), OperationKind::Mutation);
    assert!(request.return_type().is_none());
    assert!(request.custom_tag().is_none());
}

#[test]
fn mutation_return_type_resolves_its_shape() {
    let request =
        MutationRequest::new("https://example.com/graphql", "updatePassenger")
            .set_return_type::<Passenger>();

    let return_type = request.return_type().unwrap();
    let shape = return_type.shape(&Introspector::default()).unwrap();

    assert_eq!(shape.bare_type_name(), "Passenger");
    assert!(return_type.type_name().ends_with("Passenger"));
}
