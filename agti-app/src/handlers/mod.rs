pub mod consult;
pub mod dashboard;
pub mod directory;
pub mod settings;
