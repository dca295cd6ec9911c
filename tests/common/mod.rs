pub mod external_server;
pub mod ipl_server;
