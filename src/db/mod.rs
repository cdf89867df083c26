pub mod mongo_service;
pub mod user;
