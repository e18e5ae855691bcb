pub mod metrics;
pub mod reference;
pub mod settings;
pub mod transaction;
