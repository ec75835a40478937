pub mod machine;
pub mod role;
pub mod session;
pub mod setting;
