#![no_std]

mod components;
pub mod errors;
pub mod events;
pub mod interface;
pub mod subscription_management;
pub mod types;

pub use crate::errors::ContractError;
pub use crate::subscription_management::{SubscriptionManagement, SubscriptionManagementClient};
pub use crate::types::{ContractInfo, Subscription, SubscriptionStatus};

#[cfg(test)]
mod tests;
