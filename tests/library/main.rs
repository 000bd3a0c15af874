#[path = "../harness/mod.rs"]
mod harness;

mod injected_environment_contract;
mod rewrite_public_api_contract;
