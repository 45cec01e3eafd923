pub mod db;
pub mod json_log;
