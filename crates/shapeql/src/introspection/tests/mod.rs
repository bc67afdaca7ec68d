mod object_shape_tests;
