pub mod form_schema;
pub mod form_state;
pub mod storage;
