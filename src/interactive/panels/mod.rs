pub mod header;
pub mod sidebar;
pub mod teams;
pub mod tickets;
