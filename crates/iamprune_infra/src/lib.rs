mod confirmation;
mod iam_repository;
mod iamprune_infra;
mod output_printer;
mod sdk_config;

pub use confirmation::StdinConfirmation;
pub use iam_repository::IamPolicyRepository;
pub use iamprune_infra::*;
pub use output_printer::OutputPrinter;
pub use sdk_config::load_sdk_config;
