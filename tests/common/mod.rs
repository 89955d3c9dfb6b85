pub mod paste_server;
