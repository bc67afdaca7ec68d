//! Hand-written business objects shared by the unit tests.
