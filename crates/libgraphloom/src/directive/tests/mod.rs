mod directive_arguments_tests;
mod directive_chain_tests;
mod request_context_tests;
