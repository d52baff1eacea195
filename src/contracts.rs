pub mod kind_descriptor;
pub mod kinds;
pub mod root_paths;
pub mod watch_query;
