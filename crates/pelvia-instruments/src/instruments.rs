pub mod iciq_sf;
pub mod udi6;
