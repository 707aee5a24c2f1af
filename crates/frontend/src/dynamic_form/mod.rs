//! Schema-driven form: render plan, view model, view and browser glue

pub mod browser;
pub mod model;
pub mod source;
pub mod view;
pub mod view_model;

pub use view::DynamicForm;
pub use view_model::DynamicFormVm;
