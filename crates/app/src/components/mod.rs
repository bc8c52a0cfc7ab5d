pub mod site_nav;

pub use site_nav::*;
