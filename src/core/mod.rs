pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod logic;
pub mod period;
pub mod rates;
pub mod report;
pub mod settings;
pub mod summary;
pub mod users;
