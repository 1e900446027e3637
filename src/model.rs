pub mod api_model;
pub mod db_model;
