// Careers: storage-backed browsing and the "Add a Career" form.
// Every request reloads the document from the store; writes go through service::add_career.

pub mod form;
pub mod handlers;
pub mod pages;
pub mod service;
pub mod views;
