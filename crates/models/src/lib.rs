pub mod customer;
pub mod db;
