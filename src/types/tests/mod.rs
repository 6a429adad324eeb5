
mod interface_implementation_validator_tests;
