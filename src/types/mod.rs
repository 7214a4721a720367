pub mod date_time;
pub mod gatt_traits;
mod primitives;
pub mod text;
