pub mod credentials;
pub mod plan;
pub mod workflows;
