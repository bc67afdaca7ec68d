mod client_config_tests;
mod request_tests;
