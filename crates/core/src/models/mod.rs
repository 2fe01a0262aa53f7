pub mod appointment;
pub mod booking;
pub mod business;
pub mod client;
pub mod employee;
pub mod pagination;
pub mod profile;
pub mod reports;
pub mod service;
