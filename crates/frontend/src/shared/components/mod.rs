pub mod login_form;
pub mod ui;
