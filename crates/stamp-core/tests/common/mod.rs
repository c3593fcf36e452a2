pub mod sheets_server;
