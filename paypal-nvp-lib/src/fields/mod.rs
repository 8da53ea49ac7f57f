//! Field groups contributed to request messages.
//!
//! Each type validates on write and hands out copies of its fields through
//! [`NvpFields`](crate::fragment::NvpFields).

mod address;
mod billing;
mod item;
mod options;
mod payment;
mod shipping;

pub use address::{Address, ShipToAddress};
pub use billing::{BillingAgreement, BillingPaymentType};
pub use item::PaymentItem;
pub use options::{ShippingCalculationMode, UserSelectedOptions};
pub use payment::Payment;
pub use shipping::ShippingOptions;
