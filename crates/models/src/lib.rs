pub mod bakery;
pub mod cake;
pub mod cake_bakery;
pub mod db;
