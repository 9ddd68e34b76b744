pub mod host;
pub mod inventory;
pub mod resources;
pub mod run;
