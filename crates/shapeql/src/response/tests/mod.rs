mod object_graph_populator_tests;
mod response_envelope_tests;
