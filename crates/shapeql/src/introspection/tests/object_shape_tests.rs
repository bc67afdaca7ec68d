use crate::introspection::Introspector;
use crate::introspection::object_shape::bare_type_name;
use crate::test::fixtures::Flight;

#[test]
fn bare_type_name_strips_module_path() {
    assert_eq!(bare_type_name("shapeql::test::fixtures::Flight"), "Flight");
    assert_eq!(bare_type_name("Flight"), "Flight");
}

#[test]
fn bare_type_name_strips_generic_arguments() {
    assert_eq!(
        bare_type_name("my_app::model::Page<my_app::model::Flight>"),
        "Page",
    );
}

#[test]
fn instantiate_returns_a_zero_valued_instance_of_the_shaped_type() {
    let shape = Introspector::default().shape_of::<Flight>().unwrap();

    let instance = shape.instantiate();
    let flight = instance.downcast_ref::<Flight>().unwrap();

    assert_eq!(flight.flight_id, "");
    // Placeholder seeding comes along with the zero value.
    assert_eq!(flight.passenger.len(), 1);
    assert_eq!(shape.type_id(), std::any::TypeId::of::<Flight>());
}
