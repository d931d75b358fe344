pub mod street;
pub mod ui;
