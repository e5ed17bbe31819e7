mod general_error;
mod mutation_error;
mod validation_error;
mod wrap;

pub use general_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use mutation_error::MutationError;
pub use validation_error::ValidationError;
pub use wrap::WrapOptionError;
