pub mod registration;
pub mod tabs;
