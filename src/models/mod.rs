pub mod payment;
pub mod response;
pub mod status;
pub mod telegram;
