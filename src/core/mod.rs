// Core modules implementing the record data model and error modeling.
pub mod error;
pub mod record;
