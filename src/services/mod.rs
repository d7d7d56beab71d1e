pub mod auth_service;
pub mod data_service;
pub mod filter;
pub mod seed;
pub mod storage;
