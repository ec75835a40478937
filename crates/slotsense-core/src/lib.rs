#![deny(warnings)]
pub mod infer;
pub mod model;
pub mod rate;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "slotsense"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
