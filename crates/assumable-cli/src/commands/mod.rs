pub mod example;
pub mod payment;
pub mod savings;
