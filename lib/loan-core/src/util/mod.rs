pub mod password_strength;
pub mod timestamp;
