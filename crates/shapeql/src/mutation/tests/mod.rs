mod parameter_encoder_tests;
